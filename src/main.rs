// SPDX-License-Identifier: MPL-2.0
use partner_hub::app::{self, paths, Flags};

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or(None),
        // Development-only controls are an explicit flag so release builds
        // can still opt in for QA sessions.
        dev_controls: args.contains("--dev") || cfg!(debug_assertions),
        data_dir: args.opt_value_from_str("--data-dir").unwrap_or(None),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or(None),
    };

    paths::init_cli_overrides(flags.data_dir.clone(), flags.config_dir.clone());

    app::run(flags)
}
