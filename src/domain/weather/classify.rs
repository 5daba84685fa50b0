use super::WeatherSnapshot;

/// Closed set of presentation states derived from a snapshot. Renderers match
/// exhaustively on this, so adding a tag without updating them is a compile
/// error rather than a silent fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeatherType {
    Thunderstorm,
    Rain,
    Snow,
    Cloudy,
    Sunny,
    Night,
    Default,
}

/// True when the provider icon code carries the nighttime suffix (`"01n"`).
#[must_use]
pub fn is_night_icon(icon_code: &str) -> bool {
    icon_code.ends_with('n')
}

/// Total classification of the last fetched snapshot. No snapshot means no
/// weather to show, so the answer is `Default` without inspecting anything.
#[must_use]
pub fn classify(snapshot: Option<&WeatherSnapshot>) -> WeatherType {
    let Some(snapshot) = snapshot else {
        return WeatherType::Default;
    };
    classify_code(snapshot.condition_code, is_night_icon(&snapshot.icon_code))
}

/// Maps a provider condition code plus the day/night flag to a weather type.
/// Ranges follow the provider taxonomy: 2xx thunderstorm, 3xx drizzle,
/// 5xx rain, 6xx snow, 7xx atmosphere, 800 clear, 801-804 clouds.
/// Unknown codes never error; they land on the fallback arm.
#[must_use]
pub fn classify_code(code: u16, night: bool) -> WeatherType {
    match code {
        200..300 => WeatherType::Thunderstorm,
        300..600 => WeatherType::Rain,
        600..700 => WeatherType::Snow,
        801..=804 => {
            if night {
                WeatherType::Night
            } else {
                WeatherType::Cloudy
            }
        }
        800 => {
            if night {
                WeatherType::Night
            } else {
                WeatherType::Sunny
            }
        }
        700..800 => WeatherType::Cloudy,
        _ => {
            if night {
                WeatherType::Night
            } else {
                WeatherType::Default
            }
        }
    }
}

#[must_use]
pub fn condition_label(code: u16) -> &'static str {
    match code {
        200..=202 => "Thunderstorm with rain",
        210..=221 => "Thunderstorm",
        230..=232 => "Thunderstorm with drizzle",
        300..=321 => "Drizzle",
        500 => "Light rain",
        501 => "Moderate rain",
        502..=504 => "Heavy rain",
        511 => "Freezing rain",
        520..=531 => "Rain showers",
        600 => "Light snow",
        601 => "Snow",
        602 => "Heavy snow",
        611..=616 => "Sleet",
        620..=622 => "Snow showers",
        701 => "Mist",
        711 => "Smoke",
        721 => "Haze",
        731 | 761 => "Dust",
        741 => "Fog",
        751 => "Sand",
        762 => "Volcanic ash",
        771 => "Squalls",
        781 => "Tornado",
        800 => "Clear sky",
        801 => "Few clouds",
        802 => "Scattered clouds",
        803 => "Broken clouds",
        804 => "Overcast",
        _ => "Unknown",
    }
}
