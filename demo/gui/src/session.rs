//! Interactive session state.
//!
//! A [`Session`] owns the six pricing inputs, the focus or edit state, and
//! the most recently computed surfaces. It is advanced one [`InputEvent`] at
//! a time and never touches the terminal.
//!
//! ## Modes
//!
//! ```text
//!   Navigating ──Enter on field──▶ Editing
//!       ▲                            │
//!       └──────────Enter─────────────┘
//! ```
//!
//! Enter on "Compute" recomputes, Enter or `q` on "Quit" ends the session.
//! Ctrl+C ends it from either mode.

use pricer_models::analytical::{BlackScholes, BlackScholesParams};
use pricer_risk::{compute_surfaces, SurfacePair};
use thiserror::Error;
use tracing::{debug, info, trace, warn};

use crate::config::SessionConfig;
use crate::event::InputEvent;

/// Volatility change applied by one arrow press.
pub const VOLATILITY_STEP: f64 = 0.01;

/// An editable pricing input, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// S
    Spot,
    /// K
    Strike,
    /// T
    Expiry,
    /// r
    Rate,
    /// q
    DividendYield,
    /// v
    Volatility,
}

impl Field {
    /// All fields in display order.
    pub const ALL: [Field; 6] = [
        Field::Spot,
        Field::Strike,
        Field::Expiry,
        Field::Rate,
        Field::DividendYield,
        Field::Volatility,
    ];

    /// Position in [`Field::ALL`].
    pub fn index(self) -> usize {
        match self {
            Field::Spot => 0,
            Field::Strike => 1,
            Field::Expiry => 2,
            Field::Rate => 3,
            Field::DividendYield => 4,
            Field::Volatility => 5,
        }
    }

    /// One-letter symbol.
    pub fn symbol(self) -> &'static str {
        match self {
            Field::Spot => "S",
            Field::Strike => "K",
            Field::Expiry => "T",
            Field::Rate => "r",
            Field::DividendYield => "q",
            Field::Volatility => "v",
        }
    }

    /// Label shown in the parameter list.
    pub fn label(self) -> &'static str {
        match self {
            Field::Spot => "S (spot)",
            Field::Strike => "K (strike)",
            Field::Expiry => "T (maturity)",
            Field::Rate => "r (risk-free rate)",
            Field::DividendYield => "q (dividend yield)",
            Field::Volatility => "v (volatility)",
        }
    }

    /// Read this field from a parameter set.
    pub fn get(self, params: &BlackScholesParams) -> f64 {
        match self {
            Field::Spot => params.spot,
            Field::Strike => params.strike,
            Field::Expiry => params.expiry,
            Field::Rate => params.rate,
            Field::DividendYield => params.dividend_yield,
            Field::Volatility => params.volatility,
        }
    }

    /// Write this field into a parameter set.
    pub fn set(self, params: &mut BlackScholesParams, value: f64) {
        let slot = match self {
            Field::Spot => &mut params.spot,
            Field::Strike => &mut params.strike,
            Field::Expiry => &mut params.expiry,
            Field::Rate => &mut params.rate,
            Field::DividendYield => &mut params.dividend_yield,
            Field::Volatility => &mut params.volatility,
        };
        *slot = value;
    }
}

/// Focusable row.
///
/// Rows 0-5 are the fields, 6 is "Compute", 7 is "Quit".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Focus {
    /// A parameter row
    Field(Field),
    /// The compute action
    Compute,
    /// The quit action
    Quit,
}

impl Focus {
    /// Number of focusable rows.
    pub const COUNT: usize = Field::ALL.len() + 2;

    /// Row index, 0..[`Focus::COUNT`].
    pub fn index(self) -> usize {
        match self {
            Focus::Field(field) => field.index(),
            Focus::Compute => Field::ALL.len(),
            Focus::Quit => Field::ALL.len() + 1,
        }
    }

    /// Row at `index`, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            i if i < Field::ALL.len() => Some(Focus::Field(Field::ALL[i])),
            i if i == Field::ALL.len() => Some(Focus::Compute),
            i if i == Field::ALL.len() + 1 => Some(Focus::Quit),
            _ => None,
        }
    }

    /// Row above, stopping at the first.
    pub fn up(self) -> Self {
        Self::from_index(self.index().saturating_sub(1)).unwrap_or(self)
    }

    /// Row below, stopping at the last.
    pub fn down(self) -> Self {
        Self::from_index(self.index() + 1).unwrap_or(self)
    }
}

/// Why an edit was not applied.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditError {
    /// Buffer was empty
    #[error("Edit buffer is empty")]
    Empty,

    /// Buffer is not a number
    #[error("Cannot parse '{text}' as a number")]
    Malformed {
        /// Buffer contents
        text: String,
    },

    /// Buffer overflows to an infinite value
    #[error("'{text}' is out of range")]
    OutOfRange {
        /// Buffer contents
        text: String,
    },

    /// Commit requested while navigating
    #[error("No field is being edited")]
    NotEditing,
}

/// Text being typed into a field.
///
/// Only ASCII digits, `.` and `-` are ever stored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
}

impl EditBuffer {
    /// Start from existing text, dropping any character the buffer would not
    /// accept from the keyboard.
    pub fn seeded(text: &str) -> Self {
        Self {
            text: text.chars().filter(|&c| Self::accepts(c)).collect(),
        }
    }

    /// Characters allowed in a buffer.
    pub fn accepts(c: char) -> bool {
        c.is_ascii_digit() || c == '.' || c == '-'
    }

    /// Append `c` if allowed. Returns whether it was kept.
    pub fn push(&mut self, c: char) -> bool {
        if Self::accepts(c) {
            self.text.push(c);
            true
        } else {
            false
        }
    }

    /// Remove the last character.
    pub fn pop(&mut self) -> Option<char> {
        self.text.pop()
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Parse as a finite decimal number.
    pub fn parse(&self) -> Result<f64, EditError> {
        if self.text.is_empty() {
            return Err(EditError::Empty);
        }
        let value: f64 = self.text.parse().map_err(|_| EditError::Malformed {
            text: self.text.clone(),
        })?;
        if !value.is_finite() {
            return Err(EditError::OutOfRange {
                text: self.text.clone(),
            });
        }
        Ok(value)
    }
}

/// Compact display form of a parameter value.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Interaction mode.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Moving between rows
    Navigating {
        /// Highlighted row
        focus: Focus,
    },
    /// Typing a new value for a field
    Editing {
        /// Field being edited
        field: Field,
        /// Text typed so far
        buffer: EditBuffer,
    },
}

/// Outcome of handling one event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Keep running
    Continue,
    /// End the session
    Quit,
}

/// Interactive pricing session.
#[derive(Debug, Clone)]
pub struct Session {
    params: BlackScholesParams,
    mode: Mode,
    surfaces: Option<SurfacePair>,
    recomputes: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default().params)
    }
}

impl Session {
    /// New session focused on the first field, with no surfaces yet.
    pub fn new(params: BlackScholesParams) -> Self {
        Self {
            params,
            mode: Mode::Navigating {
                focus: Focus::Field(Field::Spot),
            },
            surfaces: None,
            recomputes: 0,
        }
    }

    /// Current parameters.
    pub fn params(&self) -> &BlackScholesParams {
        &self.params
    }

    /// Highlighted row; while editing, the row of the edited field.
    pub fn focus(&self) -> Focus {
        match &self.mode {
            Mode::Navigating { focus } => *focus,
            Mode::Editing { field, .. } => Focus::Field(*field),
        }
    }

    /// True while a field is being edited.
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Field under edit and its buffer.
    pub fn editing(&self) -> Option<(Field, &str)> {
        match &self.mode {
            Mode::Editing { field, buffer } => Some((*field, buffer.as_str())),
            Mode::Navigating { .. } => None,
        }
    }

    /// Last computed surfaces, if any. These may be stale after an edit.
    pub fn surfaces(&self) -> Option<&SurfacePair> {
        self.surfaces.as_ref()
    }

    /// Number of surface computations so far.
    pub fn recompute_count(&self) -> usize {
        self.recomputes
    }

    /// Call and put at the current parameters.
    pub fn current_prices(&self) -> (f64, f64) {
        let bs = BlackScholes::new(self.params);
        (bs.price_call(), bs.price_put())
    }

    /// Advance by one event.
    pub fn handle(&mut self, event: InputEvent) -> Transition {
        trace!(?event, "input");

        if event == InputEvent::Interrupt {
            info!("interrupted");
            return Transition::Quit;
        }
        if let InputEvent::Resize { cols, rows } = event {
            debug!(cols, rows, "terminal resized");
            return Transition::Continue;
        }

        match self.mode {
            Mode::Navigating { focus } => self.handle_navigating(focus, event),
            Mode::Editing { .. } => {
                self.handle_editing(event);
                Transition::Continue
            }
        }
    }

    fn handle_navigating(&mut self, focus: Focus, event: InputEvent) -> Transition {
        match event {
            InputEvent::MoveUp => self.set_focus(focus.up()),
            InputEvent::MoveDown => self.set_focus(focus.down()),
            InputEvent::Confirm => match focus {
                Focus::Field(field) => self.begin_edit(field),
                Focus::Compute => self.recompute(),
                Focus::Quit => {
                    info!("quit selected");
                    return Transition::Quit;
                }
            },
            InputEvent::DecreaseVolatility => self.decrease_volatility(),
            InputEvent::IncreaseVolatility => self.increase_volatility(),
            InputEvent::Quit => {
                info!("quit requested");
                return Transition::Quit;
            }
            _ => {}
        }
        Transition::Continue
    }

    fn handle_editing(&mut self, event: InputEvent) {
        if event == InputEvent::Confirm {
            if let Err(err) = self.commit_edit() {
                debug!(%err, "edit discarded");
            }
            return;
        }

        if let Mode::Editing { buffer, .. } = &mut self.mode {
            match event {
                InputEvent::Char(c) => {
                    if !buffer.push(c) {
                        trace!(%c, "character rejected");
                    }
                }
                InputEvent::Backspace => {
                    buffer.pop();
                }
                _ => {}
            }
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.mode = Mode::Navigating { focus };
    }

    fn begin_edit(&mut self, field: Field) {
        let buffer = EditBuffer::seeded(&format_value(field.get(&self.params)));
        debug!(field = field.symbol(), buffer = buffer.as_str(), "editing");
        self.mode = Mode::Editing { field, buffer };
    }

    /// Leave editing, writing the parsed buffer into the field.
    ///
    /// The session returns to navigation on the edited row whether or not
    /// parsing succeeds; on failure the field keeps its old value. Surfaces
    /// are not recomputed.
    pub fn commit_edit(&mut self) -> Result<f64, EditError> {
        let focus = self.focus();
        match std::mem::replace(&mut self.mode, Mode::Navigating { focus }) {
            Mode::Editing { field, buffer } => {
                let value = buffer.parse()?;
                field.set(&mut self.params, value);
                debug!(field = field.symbol(), value, "field updated");
                Ok(value)
            }
            navigating => {
                self.mode = navigating;
                Err(EditError::NotEditing)
            }
        }
    }

    /// Lower volatility by one step unless it is already at or below the
    /// step, then recompute.
    pub fn decrease_volatility(&mut self) {
        if self.params.volatility > VOLATILITY_STEP {
            self.params.volatility -= VOLATILITY_STEP;
        }
        self.recompute();
    }

    /// Raise volatility by one step and recompute.
    pub fn increase_volatility(&mut self) {
        self.params.volatility += VOLATILITY_STEP;
        self.recompute();
    }

    /// Replace the stored surfaces with a fresh computation.
    pub fn recompute(&mut self) {
        if let Err(err) = self.params.validate() {
            warn!(%err, "degenerate inputs, surfaces may contain NaN");
        }

        let pair = compute_surfaces(&self.params);
        if pair.grid.vol_axis().is_degenerate() {
            warn!(
                volatility = self.params.volatility,
                start = pair.grid.vol_axis().start(),
                end = pair.grid.vol_axis().end(),
                "volatility sweep does not increase"
            );
        }

        self.surfaces = Some(pair);
        self.recomputes += 1;
        debug!(
            recomputes = self.recomputes,
            spot = self.params.spot,
            volatility = self.params.volatility,
            "surfaces computed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn run(session: &mut Session, events: &[InputEvent]) -> Transition {
        let mut last = Transition::Continue;
        for &event in events {
            last = session.handle(event);
        }
        last
    }

    // ==========================================================
    // Field / Focus
    // ==========================================================

    #[test]
    fn test_field_index_roundtrip() {
        for (i, field) in Field::ALL.iter().enumerate() {
            assert_eq!(field.index(), i);
            assert_eq!(Focus::from_index(i), Some(Focus::Field(*field)));
        }
        assert_eq!(Focus::from_index(6), Some(Focus::Compute));
        assert_eq!(Focus::from_index(7), Some(Focus::Quit));
        assert_eq!(Focus::from_index(8), None);
        assert_eq!(Focus::COUNT, 8);
    }

    #[test]
    fn test_field_get_set() {
        let mut params = SessionConfig::default().params;
        Field::DividendYield.set(&mut params, 0.07);
        assert_eq!(params.dividend_yield, 0.07);
        assert_eq!(Field::DividendYield.get(&params), 0.07);
        assert_eq!(Field::Expiry.get(&params), 1.0);
    }

    #[test]
    fn test_focus_saturates() {
        assert_eq!(Focus::Field(Field::Spot).up(), Focus::Field(Field::Spot));
        assert_eq!(Focus::Quit.down(), Focus::Quit);
        assert_eq!(Focus::Field(Field::Volatility).down(), Focus::Compute);
        assert_eq!(Focus::Compute.down(), Focus::Quit);
    }

    // ==========================================================
    // EditBuffer
    // ==========================================================

    #[test]
    fn test_buffer_filters_characters() {
        let mut buf = EditBuffer::default();
        for c in "1x2.-a3 ".chars() {
            buf.push(c);
        }
        assert_eq!(buf.as_str(), "12.-3");
    }

    #[test]
    fn test_buffer_seed_drops_non_numeric() {
        assert_eq!(EditBuffer::seeded("0.05").as_str(), "0.05");
        assert_eq!(EditBuffer::seeded("NaN").as_str(), "");
        assert_eq!(EditBuffer::seeded("-inf").as_str(), "-");
    }

    #[test]
    fn test_buffer_parse() {
        assert_eq!(EditBuffer::seeded("123").parse(), Ok(123.0));
        assert_eq!(EditBuffer::seeded("-0.5").parse(), Ok(-0.5));
        assert_eq!(EditBuffer::seeded(".5").parse(), Ok(0.5));
        assert_eq!(EditBuffer::default().parse(), Err(EditError::Empty));
        assert!(matches!(
            EditBuffer::seeded("-").parse(),
            Err(EditError::Malformed { .. })
        ));
        assert!(matches!(
            EditBuffer::seeded("1.2.3").parse(),
            Err(EditError::Malformed { .. })
        ));
        let huge = format!("1{}", "0".repeat(400));
        assert!(matches!(
            EditBuffer::seeded(&huge).parse(),
            Err(EditError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_format_value_compact() {
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(0.05), "0.05");
        assert_eq!(format_value(-1.5), "-1.5");
    }

    // ==========================================================
    // Navigation
    // ==========================================================

    #[test]
    fn test_initial_state() {
        let session = Session::default();
        assert_eq!(session.focus(), Focus::Field(Field::Spot));
        assert!(!session.is_editing());
        assert!(session.surfaces().is_none());
        assert_eq!(session.recompute_count(), 0);
    }

    #[test]
    fn test_move_up_at_top_stays() {
        let mut session = Session::default();
        run(&mut session, &[InputEvent::MoveUp]);
        assert_eq!(session.focus(), Focus::Field(Field::Spot));
    }

    #[test]
    fn test_move_down_past_bottom_stays_on_quit() {
        let mut session = Session::default();
        run(&mut session, &[InputEvent::MoveDown; 12]);
        assert_eq!(session.focus(), Focus::Quit);
    }

    #[test]
    fn test_compute_on_enter() {
        let mut session = Session::default();
        let events = [InputEvent::MoveDown; 6];
        run(&mut session, &events);
        assert_eq!(session.focus(), Focus::Compute);
        assert_eq!(session.handle(InputEvent::Confirm), Transition::Continue);
        assert!(session.surfaces().is_some());
        assert_eq!(session.recompute_count(), 1);
    }

    #[test]
    fn test_quit_row_and_q_key() {
        let mut session = Session::default();
        run(&mut session, &[InputEvent::MoveDown; 7]);
        assert_eq!(session.handle(InputEvent::Confirm), Transition::Quit);

        let mut session = Session::default();
        assert_eq!(session.handle(InputEvent::Quit), Transition::Quit);
    }

    #[test]
    fn test_interrupt_quits_while_editing() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        assert!(session.is_editing());
        assert_eq!(session.handle(InputEvent::Interrupt), Transition::Quit);
    }

    #[test]
    fn test_resize_is_noop() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        let before = session.editing().map(|(f, b)| (f, b.to_string()));
        assert_eq!(
            session.handle(InputEvent::Resize { cols: 80, rows: 24 }),
            Transition::Continue
        );
        assert_eq!(session.editing().map(|(f, b)| (f, b.to_string())), before);
    }

    #[test]
    fn test_char_and_backspace_ignored_while_navigating() {
        let mut session = Session::default();
        run(&mut session, &[InputEvent::MoveDown]);
        run(&mut session, &[InputEvent::Backspace; 10]);
        run(&mut session, &[InputEvent::Char('x'), InputEvent::Char('5')]);

        assert!(!session.is_editing());
        assert_eq!(session.focus(), Focus::Field(Field::Strike));
        assert_eq!(*session.params(), SessionConfig::default().params);
        assert_eq!(session.recompute_count(), 0);
    }

    // ==========================================================
    // Editing
    // ==========================================================

    #[test]
    fn test_enter_edit_seeds_buffer() {
        let mut session = Session::default();
        run(&mut session, &[InputEvent::MoveDown, InputEvent::MoveDown, InputEvent::MoveDown]);
        session.handle(InputEvent::Confirm);
        assert_eq!(session.editing(), Some((Field::Rate, "0.05")));
        assert_eq!(session.focus(), Focus::Field(Field::Rate));
    }

    #[test]
    fn test_editing_ignores_quit_and_volatility_keys() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        assert_eq!(session.handle(InputEvent::Quit), Transition::Continue);
        session.handle(InputEvent::DecreaseVolatility);
        session.handle(InputEvent::IncreaseVolatility);
        session.handle(InputEvent::MoveDown);
        assert!(session.is_editing());
        assert_eq!(session.params().volatility, 0.2);
        assert_eq!(session.recompute_count(), 0);
    }

    #[test]
    fn test_commit_replaces_value() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        run(
            &mut session,
            &[
                InputEvent::Backspace,
                InputEvent::Backspace,
                InputEvent::Backspace,
                InputEvent::Char('9'),
                InputEvent::Char('5'),
            ],
        );
        assert_eq!(session.commit_edit(), Ok(95.0));
        assert_eq!(session.params().spot, 95.0);
        assert_eq!(session.focus(), Focus::Field(Field::Spot));
        assert!(!session.is_editing());
        assert!(session.surfaces().is_none());
    }

    #[test]
    fn test_failed_commit_keeps_old_value() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        run(&mut session, &[InputEvent::Backspace; 3]);
        session.handle(InputEvent::Char('-'));
        session.handle(InputEvent::Confirm);
        assert_eq!(session.params().spot, 100.0);
        assert!(!session.is_editing());
    }

    #[test]
    fn test_commit_while_navigating() {
        let mut session = Session::default();
        assert_eq!(session.commit_edit(), Err(EditError::NotEditing));
        assert_eq!(session.focus(), Focus::Field(Field::Spot));
    }

    #[test]
    fn test_edit_does_not_recompute() {
        let mut session = Session::default();
        session.recompute();
        let before = session.surfaces().cloned();
        session.handle(InputEvent::Confirm);
        session.handle(InputEvent::Char('5'));
        session.handle(InputEvent::Confirm);
        assert_eq!(session.params().spot, 1005.0);
        assert_eq!(session.surfaces().cloned(), before);
        assert_eq!(session.recompute_count(), 1);
    }

    #[test]
    fn test_backspace_on_empty_buffer_is_noop() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        run(&mut session, &[InputEvent::Backspace; 10]);
        assert_eq!(session.editing(), Some((Field::Spot, "")));

        session.handle(InputEvent::Char('7'));
        assert_eq!(session.editing(), Some((Field::Spot, "7")));
    }

    #[test]
    fn test_empty_commit_keeps_old_value() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        run(&mut session, &[InputEvent::Backspace; 10]);
        assert_eq!(session.commit_edit(), Err(EditError::Empty));
        assert_eq!(session.params().spot, 100.0);
        assert_eq!(session.focus(), Focus::Field(Field::Spot));
        assert!(!session.is_editing());
    }

    #[test]
    fn test_malformed_buffers_keep_old_value() {
        for text in ["--", "1.2.3", ".", "-.", "1-"] {
            let mut session = Session::default();
            session.handle(InputEvent::Confirm);
            run(&mut session, &[InputEvent::Backspace; 3]);
            for c in text.chars() {
                session.handle(InputEvent::Char(c));
            }
            session.handle(InputEvent::Confirm);
            assert_eq!(session.params().spot, 100.0, "buffer {:?}", text);
        }
    }

    #[test]
    fn test_trailing_dot_parses() {
        let mut session = Session::default();
        session.handle(InputEvent::Confirm);
        run(
            &mut session,
            &[
                InputEvent::Backspace,
                InputEvent::Backspace,
                InputEvent::Backspace,
                InputEvent::Char('5'),
                InputEvent::Char('.'),
                InputEvent::Confirm,
            ],
        );
        assert_eq!(session.params().spot, 5.0);
    }

    // ==========================================================
    // Volatility adjustment
    // ==========================================================

    #[test]
    fn test_increase_volatility_recomputes() {
        let mut session = Session::default();
        session.handle(InputEvent::IncreaseVolatility);
        assert_relative_eq!(session.params().volatility, 0.21, epsilon = 1e-12);
        assert_eq!(session.recompute_count(), 1);
        assert!(session.surfaces().is_some());
    }

    #[test]
    fn test_decrease_volatility_floor() {
        let mut session = Session::new(SessionConfig::default().params.with_volatility(0.01));
        session.handle(InputEvent::DecreaseVolatility);
        assert_eq!(session.params().volatility, 0.01);
        assert_eq!(session.recompute_count(), 1);
    }

    #[test]
    fn test_decrease_never_goes_negative() {
        let mut session = Session::default();
        run(&mut session, &[InputEvent::DecreaseVolatility; 40]);
        assert!(session.params().volatility > 0.0);
        assert!(session.params().volatility <= 0.01 + 1e-12);
        assert_eq!(session.recompute_count(), 40);
    }

    #[test]
    fn test_current_prices_default() {
        let (call, put) = Session::default().current_prices();
        assert_eq!(format!("{:.2}", call), "9.23");
        assert_eq!(format!("{:.2}", put), "6.33");
    }
}
