use std::io::{stdout, Stdout, Write};

use crossterm::terminal::{self, ClearType};
use crossterm::{cursor, execute, queue, style};
use log::error;

use crate::error::TermError;
use crate::game::Snapshot;

const CONTROLS_HINT: &str = "Controls: W/A/S/D to move, Q to quit.";

/// Owns the raw-mode terminal. Dropping it puts the terminal back the way it was.
pub struct TermManager {
    stdout: Stdout,
}

impl TermManager {
    pub fn acquire() -> Result<Self, TermError> {
        terminal::enable_raw_mode().map_err(TermError::RawMode)?;

        let mut term = TermManager { stdout: stdout() };
        term.set_cursor_visibility(false)?;
        Ok(term)
    }

    pub fn clear(&mut self) -> Result<(), TermError> {
        execute!(self.stdout, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
        Ok(())
    }

    pub fn draw(&mut self, snapshot: &Snapshot) -> Result<(), TermError> {
        queue!(self.stdout, terminal::Clear(ClearType::All))?;

        // Raw mode does not translate '\n', so every line is positioned explicitly.
        for (row, line) in compose(snapshot).iter().enumerate() {
            queue!(self.stdout, cursor::MoveTo(0, row as u16), style::Print(line))?;
        }

        self.flush()
    }

    pub fn flush(&mut self) -> Result<(), TermError> {
        self.stdout.flush()?;
        Ok(())
    }

    ///////////////////////////////////////////////////////////////////////////

    fn restore(&mut self) {
        if let Err(err) = self.set_cursor_visibility(true) {
            error!("failed to show cursor: {}", err);
        }

        if let Err(err) = terminal::disable_raw_mode() {
            error!("failed to disable raw mode: {}", err);
        }
    }

    fn set_cursor_visibility(&mut self, option: bool) -> Result<(), TermError> {
        if option {
            execute!(self.stdout, cursor::Show)?;
        } else {
            execute!(self.stdout, cursor::Hide)?;
        }

        Ok(())
    }
}

impl Drop for TermManager {
    fn drop(&mut self) {
        self.restore();
    }
}

/// Frame text: score line, bordered grid, controls hint.
pub fn compose(snapshot: &Snapshot) -> Vec<String> {
    let border = format!("+{}+", "-".repeat(snapshot.width() as usize));

    let mut lines = Vec::with_capacity(snapshot.height() as usize + 4);
    lines.push(format!("Score: {}", snapshot.score()));
    lines.push(border.clone());

    for row in snapshot.rows() {
        let cells: String = row.iter().map(|cell| cell.symbol()).collect();
        lines.push(format!("|{}|", cells));
    }

    lines.push(border);
    lines.push(CONTROLS_HINT.to_string());
    lines
}

/// Clears the (already restored) terminal and prints the closing line.
pub fn farewell(message: &str) -> Result<(), TermError> {
    let mut out = stdout();
    execute!(out, terminal::Clear(ClearType::All), cursor::MoveTo(0, 0))?;
    writeln!(out, "{}", message)?;
    Ok(())
}
