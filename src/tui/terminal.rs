use super::{app::App, view};
use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{stdout, Stdout};
use std::panic;

/// Owns the terminal while the demo is running.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl Tui {
    /// Switches to raw mode and the alternate screen.
    ///
    /// If anything after enabling raw mode fails, the terminal is restored
    /// before the error is returned.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        match Self::enter_screen() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = Self::restore_terminal();
                Err(err)
            }
        }
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        execute!(stdout(), EnterAlternateScreen)?;
        Ok(Terminal::new(CrosstermBackend::new(stdout()))?)
    }

    /// Chains a panic hook that restores the terminal before the previous
    /// hook prints the panic message.
    pub fn install_panic_hook() {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            let _ = Self::restore_terminal();
            previous(info);
        }));
    }

    pub fn draw(&mut self, app: &App) -> Result<()> {
        self.terminal.draw(|frame| view::render(app, frame))?;
        Ok(())
    }

    /// Restores the terminal to its original state.
    ///
    /// Raw mode is disabled even when leaving the alternate screen fails.
    pub fn restore_terminal() -> Result<()> {
        let left = execute!(stdout(), LeaveAlternateScreen);
        disable_raw_mode()?;
        left?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restore_without_raw_mode_is_harmless() {
        // Never entered raw mode; restoring must not error on the raw-mode side.
        let _ = Tui::restore_terminal();
        let _ = Tui::restore_terminal();
    }

    #[test]
    fn test_panic_hook_keeps_panics_recoverable() {
        Tui::install_panic_hook();
        let result = panic::catch_unwind(|| panic!("render failed"));
        assert!(result.is_err());
        // The chained hook must not swallow later panics either.
        let again = panic::catch_unwind(|| panic!("second failure"));
        assert!(again.is_err());
    }
}
