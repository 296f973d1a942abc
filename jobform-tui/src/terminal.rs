//! Raw-mode terminal guard

use std::io::{self, Write};

use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};

/// Owns the terminal for the lifetime of the form.
///
/// Construction enters raw mode and the alternate screen; drop restores the
/// terminal even when the event loop exits through `?`.
pub struct Terminal {
    stdout: io::Stdout,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

        Ok(Self { stdout })
    }

    /// The writer all drawing goes through.
    pub fn stdout(&mut self) -> &mut io::Stdout {
        &mut self.stdout
    }

    /// Block until the next input event.
    pub fn read_event(&self) -> io::Result<Event> {
        event::read()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(self.stdout, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
        let _ = self.stdout.flush();
    }
}
