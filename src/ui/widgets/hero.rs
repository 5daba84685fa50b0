use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::{
    app::state::AppState,
    cli::Cli,
    domain::weather::{
        Units, WeatherSnapshot, compass_point, condition_label, dew_point_c, format_time,
        format_visibility, uv_bucket,
    },
    ui::{theme::Theme, widgets},
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState, cli: &Cli) {
    let Some(snapshot) = &state.snapshot else {
        return;
    };
    let theme = state.theme();

    let block = widgets::card("skycast", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(headline_lines(snapshot, state, cli, theme)),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(metric_lines(snapshot, state, theme)),
        columns[1],
    );
}

fn headline_lines(
    snapshot: &WeatherSnapshot,
    state: &AppState,
    cli: &Cli,
    theme: Theme,
) -> Vec<Line<'static>> {
    let unit_suffix = match state.units {
        Units::Celsius => "°C",
        Units::Fahrenheit => "°F",
    };
    let location = match &snapshot.country {
        Some(country) => format!("{}, {}", snapshot.location_name, country),
        None => snapshot.location_name.clone(),
    };
    let (high, low) = snapshot.high_low(state.units);

    let mut lines = vec![
        Line::from(Span::styled(
            location,
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(
                format!(
                    "{} {}{}",
                    widgets::weather_icon(state.weather_type, cli.icon_mode()),
                    snapshot.temp(state.units),
                    unit_suffix
                ),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::raw(condition_label(snapshot.condition_code).to_string()),
        ]),
        Line::from(format!(
            "Feels like {}{unit_suffix}  H:{high}° L:{low}°",
            snapshot.feels_like(state.units)
        )),
    ];

    if let Some(extended) = &state.extended
        && extended.has_minutely_rain()
    {
        lines.push(Line::from(Span::styled(
            "Rain expected within the hour",
            Style::default().fg(theme.accent),
        )));
    }

    lines
}

fn metric_lines(snapshot: &WeatherSnapshot, state: &AppState, theme: Theme) -> Vec<Line<'static>> {
    let muted = Style::default().fg(theme.accent).add_modifier(Modifier::DIM);
    let offset = snapshot.timezone_offset;

    let wind = match snapshot.wind_gust {
        Some(gust) => format!(
            "{:.1} m/s {} (gust {gust:.1})",
            snapshot.wind_speed,
            compass_point(snapshot.wind_direction)
        ),
        None => format!(
            "{:.1} m/s {}",
            snapshot.wind_speed,
            compass_point(snapshot.wind_direction)
        ),
    };

    let mut lines = vec![
        metric_line("Wind      ", wind, muted),
        metric_line(
            "Humidity  ",
            format!("{:.0}%", snapshot.humidity),
            muted,
        ),
        metric_line("Pressure  ", format!("{} hPa", snapshot.pressure_hpa), muted),
        metric_line("Clouds    ", format!("{}%", snapshot.cloudiness), muted),
        metric_line(
            "Sun       ",
            format!(
                "{} → {}",
                format_time(snapshot.sunrise, offset),
                format_time(snapshot.sunset, offset)
            ),
            muted,
        ),
    ];

    if let Some(visibility) = snapshot.visibility_m {
        lines.push(metric_line(
            "Visibility",
            format_visibility(visibility),
            muted,
        ));
    }
    if let Some(dew) = dew_point_c(snapshot.temp_c, snapshot.humidity) {
        lines.push(metric_line("Dew point ", format!("{dew}°C"), muted));
    }
    if let Some(rain) = snapshot.rain_1h_mm {
        lines.push(metric_line("Rain (1h) ", format!("{rain:.1} mm"), muted));
    }
    if let Some(snow) = snapshot.snow_1h_mm {
        lines.push(metric_line("Snow (1h) ", format!("{snow:.1} mm"), muted));
    }
    if let Some(uvi) = state.extended.as_ref().and_then(|e| e.uv_index) {
        let bucket = uv_bucket(uvi);
        lines.push(Line::from(vec![
            Span::styled("UV index  ".to_string(), muted),
            Span::styled(
                format!("{uvi:.1} {}", bucket.label),
                Style::default().fg(bucket.color),
            ),
        ]));
    }

    lines
}

fn metric_line(label: &'static str, value: String, muted: Style) -> Line<'static> {
    Line::from(vec![Span::styled(label, muted), Span::raw(value)])
}
