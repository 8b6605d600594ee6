//! Float browser rendering.

use super::formatters::{fit_width, format_age, format_position, format_reading};
use super::keymap_bar::draw_keymap;
use super::status_bar::draw_status;
use super::ThemeColors;
use crate::app::App;
use crate::catalog::{FloatEntry, Measurement};
use crate::profile::{ProfilePoint, SeriesOutcome};
use chrono::Utc;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Sparkline, Wrap},
    Frame,
};

const CHART_HEIGHT: u16 = 10;

/// Draw the browser UI.
pub(super) fn draw_browser(f: &mut Frame<'_>, app: &App) {
    let colors = ThemeColors::from_theme(&app.theme);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    if app.show_details {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
            .split(chunks[0]);
        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(CHART_HEIGHT)])
            .split(content[1]);

        draw_float_list(f, app, content[0], &colors);
        draw_details(f, app, side[0], &colors);
        draw_chart(f, app, side[1], &colors);
    } else {
        draw_float_list(f, app, chunks[0], &colors);
    }

    draw_status(f, app, chunks[1], &colors);
    draw_keymap(f, chunks[2], &colors);
}

fn draw_float_list(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let items: Vec<ListItem<'_>> = app
        .catalog()
        .entries()
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(colors.status_color(entry.status))),
                Span::styled(fit_width(&entry.id, 18), Style::default().fg(colors.text)),
                Span::styled(
                    fit_width(&entry.float_type.to_string(), 5),
                    Style::default().fg(colors.label),
                ),
                Span::styled(entry.region, Style::default().fg(colors.value)),
            ]))
        })
        .collect();

    let title = format!(
        " Argonaut: {} floats ({}) ",
        app.catalog().len(),
        app.catalog().provenance()
    );

    let list = List::new(items)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .highlight_style(
            Style::default()
                .fg(colors.cursor_fg)
                .bg(colors.cursor_bg)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default().with_selected(Some(app.cursor()));
    f.render_stateful_widget(list, area, &mut state);
}

fn draw_details(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let lines = match app.current_entry() {
        Some(entry) => format_entry_details(entry, colors),
        None => vec![Line::from(Span::styled(
            "No floats in catalog",
            Style::default().fg(colors.text),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .style(Style::default().bg(colors.bg)),
        )
        .style(Style::default().fg(colors.text))
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn draw_chart(f: &mut Frame<'_>, app: &App, area: Rect, colors: &ThemeColors) {
    let series = app.series();
    let title = match series.points() {
        [] => format!(" {} ({}) ", app.chart, series.source_label()),
        points => {
            let (lo, hi) = value_bounds(points);
            format!(
                " {} {} to {} {} ({}, surface to {} m) ",
                app.chart,
                format_reading(lo),
                format_reading(hi),
                app.chart.unit(),
                series.source_label(),
                format_reading(points.last().map_or(0.0, |p| p.depth)),
            )
        },
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border))
        .style(Style::default().bg(colors.bg));

    if let SeriesOutcome::NoSensor = series {
        let message = Paragraph::new(format!("No {} sensor on this float", app.chart))
            .block(block)
            .style(Style::default().fg(colors.inactive));
        f.render_widget(message, area);
        return;
    }

    let heights = chart_heights(series.points());
    let sparkline = Sparkline::default()
        .block(block)
        .data(&heights)
        .style(Style::default().fg(colors.chart));
    f.render_widget(sparkline, area);
}

fn value_bounds(points: &[ProfilePoint]) -> (f64, f64) {
    points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.value), hi.max(p.value))
        })
}

/// Bar heights for a depth profile, surface first, scaled to 1..=100.
fn chart_heights(points: &[ProfilePoint]) -> Vec<u64> {
    let (lo, hi) = value_bounds(points);
    let span = hi - lo;
    points
        .iter()
        .map(|p| {
            if span > 0.0 {
                1 + ((p.value - lo) / span * 99.0).round() as u64
            } else {
                50
            }
        })
        .collect()
}

fn labelled(label: &str, value: String, colors: &ThemeColors) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), Style::default().fg(colors.label)),
        Span::styled(value, Style::default().fg(colors.value)),
    ])
}

fn measurement_summary(measurement: &Measurement, unit: &str) -> String {
    match (measurement.surface(), measurement.level_count()) {
        (Some(v), None) => format!("{} {}", format_reading(v), unit),
        (Some(v), Some(levels)) => format!("{} {} ({} levels)", format_reading(v), unit, levels),
        (None, _) => "n/a".to_string(),
    }
}

fn format_entry_details(entry: &FloatEntry, colors: &ThemeColors) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(Span::styled(
            entry.id.clone(),
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        labelled("Float", entry.float_id.clone(), colors),
    ];

    if let Some(index) = entry.profile_index {
        lines.push(labelled("Profile", index.to_string(), colors));
    }

    lines.push(labelled(
        "Position",
        format_position(entry.lat, entry.lon),
        colors,
    ));
    lines.push(labelled("Region", entry.region.to_string(), colors));
    lines.push(labelled(
        "Last profile",
        format!(
            "{} ({})",
            entry.last_profile.format("%Y-%m-%d %H:%M"),
            format_age(entry.last_profile, Utc::now())
        ),
        colors,
    ));
    lines.push(Line::from(vec![
        Span::styled("Status: ", Style::default().fg(colors.label)),
        Span::styled(
            entry.status.to_string(),
            Style::default().fg(colors.status_color(entry.status)),
        ),
    ]));
    lines.push(labelled("Type", entry.float_type.to_string(), colors));

    lines.push(Line::from(""));
    lines.push(labelled(
        "Temperature",
        measurement_summary(&entry.temperature, "°C"),
        colors,
    ));
    lines.push(labelled(
        "Salinity",
        measurement_summary(&entry.salinity, "PSU"),
        colors,
    ));
    if let Some(max_depth) = entry.max_depth() {
        lines.push(labelled(
            "Max depth",
            format!("{} m", format_reading(max_depth)),
            colors,
        ));
    }

    if let Some(bgc) = entry.displayed_bgc() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "Biogeochemistry:",
            Style::default()
                .fg(colors.heading)
                .add_modifier(Modifier::BOLD),
        )));
        lines.push(labelled(
            "  Chlorophyll-a",
            format!("{} mg/m³", format_reading(bgc.chlorophyll)),
            colors,
        ));
        lines.push(labelled(
            "  Oxygen",
            format!("{} mg/L", format_reading(bgc.dissolved_oxygen)),
            colors,
        ));
        lines.push(labelled(
            "  Nitrate",
            format!("{} µmol/L", format_reading(bgc.nitrate)),
            colors,
        ));
        lines.push(labelled("  pH", format!("{:.3}", bgc.ph), colors));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(values: &[f64]) -> Vec<ProfilePoint> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| ProfilePoint {
                depth: i as f64 * 10.0,
                value,
            })
            .collect()
    }

    #[test]
    fn heights_span_full_range() {
        assert_eq!(chart_heights(&points(&[28.0, 18.0, 8.0])), [100, 51, 1]);
    }

    #[test]
    fn flat_profile_is_mid_height() {
        assert_eq!(chart_heights(&points(&[35.0, 35.0])), [50, 50]);
        assert!(chart_heights(&[]).is_empty());
    }

    #[test]
    fn scalar_and_series_summaries() {
        assert_eq!(measurement_summary(&Measurement::Scalar(27.0), "°C"), "27.00 °C");
        assert_eq!(
            measurement_summary(&Measurement::Series(vec![28.5, 12.0]), "°C"),
            "28.50 °C (2 levels)"
        );
        assert_eq!(measurement_summary(&Measurement::Series(vec![]), "°C"), "n/a");
    }
}
