//! ANSI truecolor heatmap rendering.
//!
//! Each matrix value becomes one two-space cell with a 24-bit background.
//! Colour is interpolated linearly from pure green at the matrix minimum to
//! pure red at the maximum.

use std::cmp::Ordering;

/// Visible width of one cell in terminal columns.
pub const CELL_WIDTH: usize = 2;

const CELL_BODY: &str = "  ";
const RESET: &str = "\x1b[0m";

/// Background colour of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel
    pub red: u8,
    /// Green channel
    pub green: u8,
    /// Blue channel
    pub blue: u8,
}

impl Rgb {
    /// Point on the green to red gradient, `t` clamped to [0, 1].
    ///
    /// Red and green always sum to 255.
    pub fn gradient(t: f64) -> Self {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let red = (255.0 * t).round() as u8;
        Self {
            red,
            green: 255 - red,
            blue: 0,
        }
    }
}

/// Position of `value` in `[min, max]`, clamped.
///
/// A flat range (and anything that yields NaN) maps to 0.
pub fn normalise(value: f64, min: f64, max: f64) -> f64 {
    if max.partial_cmp(&min) != Some(Ordering::Greater) {
        return 0.0;
    }
    let t = (value - min) / (max - min);
    if t.is_nan() {
        0.0
    } else {
        t.clamp(0.0, 1.0)
    }
}

/// Minimum and maximum over the finite entries of `matrix`.
pub fn finite_range<R: AsRef<[f64]>>(matrix: &[R]) -> Option<(f64, f64)> {
    matrix
        .iter()
        .flat_map(|row| row.as_ref().iter().copied())
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// One coloured cell: background escape, two spaces, reset.
// Not crossterm's SetBackgroundColor: it emits no colour when NO_COLOR is set.
pub fn cell(color: Rgb) -> String {
    format!(
        "\x1b[48;2;{};{};{}m{}{}",
        color.red, color.green, color.blue, CELL_BODY, RESET
    )
}

/// Render `matrix` as one string per row.
///
/// Normalisation uses a single minimum and maximum over the whole matrix.
/// NaN and infinite entries are left out of that range and drawn green.
///
/// # Examples
/// ```
/// use demo_gui::heatmap::render;
///
/// let lines = render(&[vec![0.0, 10.0]]);
/// assert_eq!(
///     lines[0],
///     "\x1b[48;2;0;255;0m  \x1b[0m\x1b[48;2;255;0;0m  \x1b[0m"
/// );
/// ```
pub fn render<R: AsRef<[f64]>>(matrix: &[R]) -> Vec<String> {
    let (min, max) = finite_range(matrix).unwrap_or((0.0, 0.0));

    matrix
        .iter()
        .map(|row| {
            row.as_ref()
                .iter()
                .map(|&v| {
                    let t = if v.is_finite() { normalise(v, min, max) } else { 0.0 };
                    cell(Rgb::gradient(t))
                })
                .collect()
        })
        .collect()
}

/// Terminal columns a string occupies once CSI escape sequences are removed.
pub fn visible_width(line: &str) -> usize {
    let mut width = 0;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for c in chars.by_ref() {
                if ('@'..='~').contains(&c) {
                    break;
                }
            }
        } else {
            width += 1;
        }
    }
    width
}
