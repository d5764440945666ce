use super::app::Action;
use crate::decision::Feature;
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

/// Handles terminal events and maps them to application `Action`s.
pub struct EventHandler {
    poll_interval: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl EventHandler {
    pub fn new() -> Self {
        Self {
            poll_interval: Duration::from_millis(250),
        }
    }

    /// Blocks until a key event is received or the poll interval elapses.
    pub fn next(&self) -> Result<Action> {
        if event::poll(self.poll_interval)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key));
                }
            }
        }
        Ok(Action::Tick)
    }
}

/// Maps a `KeyEvent` to its `Action`. Unbound keys become `Tick`.
pub fn map_key(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('c') | KeyCode::Char(' ') => Action::ToggleImage,
        KeyCode::Char('1') => Action::ToggleFeature(Feature::PointedEars),
        KeyCode::Char('2') => Action::ToggleFeature(Feature::CatEyes),
        KeyCode::Char('3') => Action::ToggleFeature(Feature::LongTail),
        KeyCode::Down | KeyCode::Tab | KeyCode::Char('j') => Action::FocusNextWeight,
        KeyCode::Up | KeyCode::BackTab | KeyCode::Char('k') => Action::FocusPrevWeight,
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('+') => Action::IncreaseWeight,
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('-') => Action::DecreaseWeight,
        KeyCode::Char('r') => Action::Reset,
        KeyCode::Char('t') => Action::ToggleTable,
        KeyCode::Char('?') => Action::ToggleHelp,
        _ => Action::Tick,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_feature_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('1'))),
            Action::ToggleFeature(Feature::PointedEars)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('3'))),
            Action::ToggleFeature(Feature::LongTail)
        );
    }

    #[test]
    fn test_ctrl_c_quits_plain_c_toggles_image() {
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Action::Quit
        );
        assert_eq!(map_key(key(KeyCode::Char('c'))), Action::ToggleImage);
    }

    #[test]
    fn test_unbound_key_is_tick() {
        assert_eq!(map_key(key(KeyCode::Char('z'))), Action::Tick);
    }
}
