//! Frame composition.
//!
//! [`compose`] turns a [`Session`] into the full text of one frame. Lines are
//! separated by `\n`; the terminal layer handles cursor placement.

use pricer_models::instruments::PayoffType;
use pricer_risk::scenarios::GRID_POINTS;
use pricer_risk::SurfacePair;

use crate::heatmap::{self, CELL_WIDTH};
use crate::session::{format_value, Field, Focus, Session};

/// First line of every frame.
pub const TITLE: &str = "Option Pricer TUI (Black-Scholes)";

/// Key help shown under the title.
pub const HELP: &str =
    "Use Up/Down to select field, Enter to edit, Left/Right to adjust volatility.";

/// Which parameter runs along which heatmap axis.
pub const AXIS_LEGEND: &str = "X axis: v (volatility)   Y axis: S (spot price)";

/// Visible width reserved for each heatmap, in columns.
pub const HEATMAP_WIDTH: usize = GRID_POINTS * CELL_WIDTH;

const GUTTER: &str = "  ";
const FOCUS_MARKER: &str = "->";
const NO_MARKER: &str = "  ";

fn marked(focused: bool, text: &str) -> String {
    let marker = if focused { FOCUS_MARKER } else { NO_MARKER };
    format!("{} {}", marker, text)
}

fn field_line(session: &Session, field: Field) -> String {
    let value = format_value(field.get(session.params()));
    match session.editing() {
        Some((edited, buffer)) if edited == field => marked(
            false,
            &format!("{}: {} (editing: {})", field.label(), value, buffer),
        ),
        Some(_) => marked(false, &format!("{}: {}", field.label(), value)),
        None => marked(
            session.focus() == Focus::Field(field),
            &format!("{}: {}", field.label(), value),
        ),
    }
}

/// "Current prices" line for the session's parameters.
pub fn price_summary(session: &Session) -> String {
    let (call, put) = session.current_prices();
    format!("Current prices: Call = ${:.2}, Put = ${:.2}", call, put)
}

fn pad_to(line: &str, width: usize) -> String {
    let pad = width.saturating_sub(heatmap::visible_width(line));
    format!("{}{}", line, " ".repeat(pad))
}

/// Header and rows of the side-by-side call and put heatmaps.
pub fn heatmap_lines(pair: &SurfacePair) -> Vec<String> {
    let [left, right] = PayoffType::ALL.map(|payoff| {
        let surface = pair.surface(payoff);
        (
            format!("{} Heatmap", surface.payoff().label()),
            heatmap::render(surface.as_rows()),
        )
    });

    let rows = left.1.len().max(right.1.len());
    let mut lines = Vec::with_capacity(rows + 1);
    lines.push(format!(
        "{}{}{}",
        pad_to(&left.0, HEATMAP_WIDTH),
        GUTTER,
        right.0
    ));

    for i in 0..rows {
        let l = left.1.get(i).map_or("", String::as_str);
        let r = right.1.get(i).map_or("", String::as_str);
        lines.push(format!(
            "{}{}{}",
            pad_to(l, HEATMAP_WIDTH),
            GUTTER,
            pad_to(r, HEATMAP_WIDTH)
        ));
    }
    lines
}

/// Full frame for the current session state.
pub fn compose(session: &Session) -> String {
    let editing = session.is_editing();
    let focus = session.focus();

    let mut lines = vec![TITLE.to_string(), HELP.to_string(), String::new()];
    lines.extend(Field::ALL.iter().map(|&field| field_line(session, field)));
    lines.push(marked(
        !editing && focus == Focus::Compute,
        "Compute heatmaps (Enter)",
    ));
    lines.push(AXIS_LEGEND.to_string());
    lines.push(String::new());
    lines.push(price_summary(session));
    lines.push(String::new());

    if let Some(pair) = session.surfaces() {
        lines.extend(heatmap_lines(pair));
    }

    lines.push(marked(!editing && focus == Focus::Quit, "Quit"));

    let mut frame = lines.join("\n");
    frame.push('\n');
    frame
}
