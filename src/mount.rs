//! Attaching to and detaching from the terminal surface.

use crossterm::event::{
    DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture,
};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::prelude::*;
use std::io::{self, IsTerminal, Stdout};
use thiserror::Error;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Called once per tap on the coin.
pub type ClickHandler = Box<dyn FnMut()>;

#[derive(Debug, Error)]
pub enum MountError {
    #[error("stdout is not a terminal")]
    NotATerminal,
    #[error("failed to prepare the terminal: {0}")]
    Terminal(#[from] io::Error),
}

/// Take over the terminal: raw mode, alternate screen, mouse and focus
/// reporting.
pub fn attach() -> Result<Tui, MountError> {
    let stdout = io::stdout();
    if !stdout.is_terminal() {
        return Err(MountError::NotATerminal);
    }

    enable_raw_mode()?;
    undo_on_error(
        || {
            let mut stdout = stdout;
            execute!(
                stdout,
                EnterAlternateScreen,
                EnableMouseCapture,
                EnableFocusChange
            )?;
            Terminal::new(CrosstermBackend::new(stdout))
        },
        || {
            let _ = detach();
        },
    )
}

/// Run `setup`; if any step of it fails, run `undo` before reporting.
fn undo_on_error<T>(
    setup: impl FnOnce() -> io::Result<T>,
    undo: impl FnOnce(),
) -> Result<T, MountError> {
    setup().map_err(|e| {
        undo();
        MountError::from(e)
    })
}

/// Give the terminal back. Safe to call more than once.
pub fn detach() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableFocusChange
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_failed_setup_is_undone() {
        let undone = Cell::new(false);
        let result: Result<(), MountError> = undo_on_error(
            || Err(io::Error::other("no backend")),
            || undone.set(true),
        );
        assert!(matches!(result, Err(MountError::Terminal(_))));
        assert!(undone.get());
    }

    #[test]
    fn test_successful_setup_is_kept() {
        let undone = Cell::new(false);
        let result = undo_on_error(|| Ok(42), || undone.set(true));
        assert_eq!(result.ok(), Some(42));
        assert!(!undone.get());
    }
}
