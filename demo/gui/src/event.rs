//! Abstract input events.
//!
//! The session only sees [`InputEvent`]; translation from crossterm happens
//! here so the state machine can be driven directly in tests.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A user action the session understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Move focus one row up
    MoveUp,
    /// Move focus one row down
    MoveDown,
    /// Enter
    Confirm,
    /// Delete the last character of the edit buffer
    Backspace,
    /// A printable character
    Char(char),
    /// Lower volatility by one step
    DecreaseVolatility,
    /// Raise volatility by one step
    IncreaseVolatility,
    /// Quit request, honoured only while navigating
    Quit,
    /// Ctrl+C, quits from any mode
    Interrupt,
    /// Terminal size changed
    Resize {
        /// Columns
        cols: u16,
        /// Rows
        rows: u16,
    },
}

impl InputEvent {
    /// Translate a key press. Releases and repeats of non-press kinds are
    /// dropped, as are keys with no binding.
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Some(Self::Interrupt),
                _ => None,
            };
        }

        let event = match key.code {
            KeyCode::Up => Self::MoveUp,
            KeyCode::Down => Self::MoveDown,
            KeyCode::Enter => Self::Confirm,
            KeyCode::Backspace => Self::Backspace,
            KeyCode::Left | KeyCode::Char('a') => Self::DecreaseVolatility,
            KeyCode::Right | KeyCode::Char('d') => Self::IncreaseVolatility,
            KeyCode::Char('q') => Self::Quit,
            KeyCode::Char(c) => Self::Char(c),
            _ => return None,
        };
        Some(event)
    }

    /// Translate any terminal event.
    pub fn from_terminal(event: &Event) -> Option<Self> {
        match event {
            Event::Key(key) => Self::from_key(*key),
            Event::Resize(cols, rows) => Some(Self::Resize {
                cols: *cols,
                rows: *rows,
            }),
            _ => None,
        }
    }
}
