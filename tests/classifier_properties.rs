use proptest::prelude::*;
use skycast::{
    domain::weather::{WeatherType, classify_code, is_night_icon},
    ui::theme::theme_for,
};

proptest! {
    #[test]
    fn thunderstorm_band_ignores_day_night(code in 200u16..300, night in any::<bool>()) {
        prop_assert_eq!(classify_code(code, night), WeatherType::Thunderstorm);
    }

    #[test]
    fn rain_band_covers_drizzle_and_rain(code in 300u16..600, night in any::<bool>()) {
        prop_assert_eq!(classify_code(code, night), WeatherType::Rain);
    }

    #[test]
    fn snow_band(code in 600u16..700, night in any::<bool>()) {
        prop_assert_eq!(classify_code(code, night), WeatherType::Snow);
    }

    #[test]
    fn atmosphere_band_is_cloudy_even_at_night(code in 700u16..800, night in any::<bool>()) {
        prop_assert_eq!(classify_code(code, night), WeatherType::Cloudy);
    }

    #[test]
    fn cloud_band_splits_on_night(code in 801u16..=804) {
        prop_assert_eq!(classify_code(code, false), WeatherType::Cloudy);
        prop_assert_eq!(classify_code(code, true), WeatherType::Night);
    }

    #[test]
    fn unknown_codes_fall_back(code in 805u16..2000) {
        prop_assert_eq!(classify_code(code, false), WeatherType::Default);
        prop_assert_eq!(classify_code(code, true), WeatherType::Night);
    }

    #[test]
    fn every_classification_has_a_distinct_backdrop(code in 200u16..900, night in any::<bool>()) {
        let kind = classify_code(code, night);
        let theme = theme_for(kind);
        // The backdrop is always darker than the card it sits behind.
        prop_assert_ne!(theme.background, theme.card_background);
    }
}

#[test]
fn clear_sky_splits_on_icon_suffix() {
    assert_eq!(classify_code(800, is_night_icon("01d")), WeatherType::Sunny);
    assert_eq!(classify_code(800, is_night_icon("01n")), WeatherType::Night);
}

#[test]
fn moderate_rain_maps_to_the_rain_palette_end_to_end() {
    let kind = classify_code(501, is_night_icon("10d"));
    assert_eq!(kind, WeatherType::Rain);
    let theme = theme_for(kind);
    assert_eq!(theme.background, ratatui::style::Color::Rgb(17, 47, 88));
    assert_eq!(theme.accent, ratatui::style::Color::Rgb(153, 214, 255));
}
