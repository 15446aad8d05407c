use super::*;

#[test]
fn parse_defaults_to_light() {
    assert_eq!(Theme::parse(None), Theme::Light);
    assert_eq!(Theme::parse(Some("light")), Theme::Light);
    assert_eq!(Theme::parse(Some("sepia")), Theme::Light);
    assert_eq!(Theme::parse(Some("dark")), Theme::Dark);
}

#[test]
fn as_str_round_trips_through_parse() {
    for theme in [Theme::Light, Theme::Dark] {
        assert_eq!(Theme::parse(Some(theme.as_str())), theme);
    }
}

#[test]
fn icon_offers_the_opposite_mode() {
    assert_eq!(Theme::Light.icon_class(), "bi bi-moon-fill");
    assert_eq!(Theme::Dark.icon_class(), "bi bi-sun-fill");
}

#[test]
fn startup_without_storage_is_light_and_unpersisted() {
    let state = ThemeState::from_storage(None);
    assert_eq!(state.applied(), Theme::Light);
    assert_eq!(state.persisted(), None);
}

#[test]
fn startup_restores_dark() {
    let state = ThemeState::from_storage(Some("dark"));
    assert_eq!(state.applied(), Theme::Dark);
    assert_eq!(state.persisted(), Some(Theme::Dark));
}

#[test]
fn toggles_alternate_and_persist_applied_value() {
    let mut state = ThemeState::from_storage(None);
    let mut previous = state.applied();
    for _ in 0..7 {
        let next = state.toggle();
        assert_ne!(next, previous);
        assert_eq!(state.applied(), next);
        assert_eq!(state.persisted(), Some(next));
        previous = next;
    }
}

#[test]
fn toggle_from_unknown_stored_value_goes_dark() {
    let mut state = ThemeState::from_storage(Some("contrast"));
    assert_eq!(state.toggle(), Theme::Dark);
}
