// SPDX-License-Identifier: MPL-2.0
use partner_hub::app::config::{self, Config, GeneralConfig};
use partner_hub::app::persisted_state::AppState;
use partner_hub::i18n::fluent::I18n;
use partner_hub::ui::partners;
use partner_hub::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            theme_mode: ThemeMode::System,
        },
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    // 2. Change config to fr
    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            theme_mode: ThemeMode::System,
        },
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn overview_strings_differ_between_locales() {
    let mut en_config = Config::default();
    en_config.general.language = Some("en-US".to_string());
    let i18n_en = I18n::new(None, &en_config);

    let mut fr_config = Config::default();
    fr_config.general.language = Some("fr".to_string());
    let i18n_fr = I18n::new(None, &fr_config);

    assert_ne!(
        i18n_en.tr("authorities-title"),
        i18n_fr.tr("authorities-title")
    );
    assert_ne!(
        i18n_en.tr("authorities-view-button-label"),
        i18n_fr.tr("authorities-view-button-label")
    );
}

#[test]
fn auto_subscription_flag_survives_restart() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let base = dir.path().to_path_buf();

    // First session: toggle the preference on.
    let mut state = AppState::default();
    state.auto_subscription_enabled = true;
    assert!(state.save_to(Some(base.clone())).is_none());

    // Second session: the selector reads the persisted value.
    let (restored, warning) = AppState::load_from(Some(base));
    assert!(warning.is_none());
    assert!(restored.auto_subscription_enabled);
}

#[test]
fn layout_branch_matches_viewport_height() {
    // Boundary values from the layout policy: 599 is compact, 600 is not.
    assert!(partners::uses_compact_layout(599.0));
    assert!(!partners::uses_compact_layout(600.0));
}

#[test]
fn illustration_sizing_is_proportional_for_any_width() {
    for width in [1.0_f32, 320.0, 375.0, 414.0, 1125.0, 2250.0] {
        assert_eq!(
            partners::illustration_height(width),
            width * 900.0 / 1125.0
        );
        assert_eq!(partners::mask_height(width), width * 120.0 / 1125.0);
    }
}

#[test]
fn row_press_maps_to_navigation_event() {
    let event = partners::update(partners::Message::ViewAuthoritiesPressed);
    assert!(matches!(event, partners::Event::OpenEdit));
}

#[test]
fn toggle_maps_to_dispatch_with_new_value() {
    for value in [true, false] {
        let event = partners::update(partners::Message::AutoSubscriptionToggled(value));
        match event {
            partners::Event::SetAutoSubscription(dispatched) => assert_eq!(dispatched, value),
            other => panic!("expected SetAutoSubscription, got {:?}", other),
        }
    }
}
