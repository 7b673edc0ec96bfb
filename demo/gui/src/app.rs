//! Terminal application.
//!
//! Owns the raw-mode terminal for the lifetime of a session and redraws the
//! whole frame after every event.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event,
    execute, queue,
    style::Print,
    terminal::{
        disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use tracing::{debug, info};

use crate::error::TuiError;
use crate::event::InputEvent;
use crate::session::{Session, Transition};
use crate::view;

/// Write `frame` at the top-left of the screen.
///
/// Raw mode does not translate `\n`, so each line is ended with `\r\n` and
/// whatever was left of the previous frame is cleared.
pub fn draw_frame<W: Write>(out: &mut W, frame: &str) -> io::Result<()> {
    queue!(out, MoveTo(0, 0))?;
    for line in frame.lines() {
        queue!(out, Print(line), Clear(ClearType::UntilNewLine), Print("\r\n"))?;
    }
    queue!(out, Clear(ClearType::FromCursorDown))?;
    out.flush()
}

/// Main TUI application
pub struct TuiApp {
    session: Session,
    stdout: Stdout,
}

impl TuiApp {
    /// Enter raw mode and the alternate screen.
    pub fn new(session: Session) -> Result<Self, TuiError> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        if let Err(err) = execute!(stdout, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(err.into());
        }

        Ok(Self { session, stdout })
    }

    /// Run until the session quits or the terminal fails.
    pub fn run(&mut self) -> Result<(), TuiError> {
        info!("session started");
        loop {
            self.draw()?;

            let raw = event::read()?;
            let Some(input) = InputEvent::from_terminal(&raw) else {
                continue;
            };

            if self.session.handle(input) == Transition::Quit {
                break;
            }
        }
        info!(
            recomputes = self.session.recompute_count(),
            "session finished"
        );
        Ok(())
    }

    fn draw(&mut self) -> io::Result<()> {
        let frame = view::compose(&self.session);
        debug!(bytes = frame.len(), "drawing frame");
        draw_frame(&mut self.stdout, &frame)
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        // Restore terminal
        let _ = disable_raw_mode();
        let _ = execute!(self.stdout, Show, LeaveAlternateScreen);
    }
}
