use crate::config::{DemoConfig, ImageAsset};
use crate::decision::{DecisionTable, Feature};
use crate::error::Result;
use crate::session::{SessionState, SessionView};

/// Represents actions that can be dispatched to the App.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    Quit,
    Tick,
    ToggleImage,
    ToggleFeature(Feature),
    FocusNextWeight,
    FocusPrevWeight,
    IncreaseWeight,
    DecreaseWeight,
    Reset,
    ToggleTable,
    ToggleHelp,
}

pub struct App {
    pub session: SessionState,
    pub config: DemoConfig,
    /// Slider that the arrow keys move.
    pub focused_weight: Feature,
    pub show_table: bool,
    pub show_help: bool,
    pub is_running: bool,
}

impl App {
    pub fn new(config: DemoConfig) -> Self {
        Self {
            session: SessionState::new(),
            config,
            focused_weight: Feature::PointedEars,
            show_table: false,
            show_help: false,
            is_running: true,
        }
    }

    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match action {
            Action::Quit => self.is_running = false,
            Action::Tick => {}
            Action::ToggleImage => {
                self.session.toggle_image();
            }
            Action::ToggleFeature(feature) => {
                self.session.toggle_feature(feature);
            }
            Action::FocusNextWeight => {
                let next = (self.focused_weight.index() + 1) % Feature::ALL.len();
                self.focused_weight = Feature::ALL[next];
            }
            Action::FocusPrevWeight => {
                let len = Feature::ALL.len();
                let prev = (self.focused_weight.index() + len - 1) % len;
                self.focused_weight = Feature::ALL[prev];
            }
            Action::IncreaseWeight => {
                self.session
                    .adjust_weight(self.focused_weight, self.config.weight_step)?;
            }
            Action::DecreaseWeight => {
                self.session
                    .adjust_weight(self.focused_weight, -self.config.weight_step)?;
            }
            Action::Reset => {
                self.session.reset();
                log::info!("game reset");
            }
            Action::ToggleTable => self.show_table = !self.show_table,
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
        Ok(())
    }

    /// Fresh view of the session; call once per frame.
    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    pub fn current_asset(&self) -> &ImageAsset {
        self.config.assets.for_selection(self.session.image())
    }

    pub fn decision_table(&self) -> DecisionTable {
        DecisionTable::build(self.session.weights())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::ImageSelection;

    #[test]
    fn test_focus_wraps() {
        let mut app = App::new(DemoConfig::default());
        app.dispatch(Action::FocusPrevWeight).unwrap();
        assert_eq!(app.focused_weight, Feature::LongTail);
        app.dispatch(Action::FocusNextWeight).unwrap();
        assert_eq!(app.focused_weight, Feature::PointedEars);
    }

    #[test]
    fn test_arrow_keys_move_focused_slider() {
        let mut app = App::new(DemoConfig::default().with_weight_step(0.1));
        app.dispatch(Action::FocusNextWeight).unwrap();
        app.dispatch(Action::IncreaseWeight).unwrap();
        assert!((app.session.weights().eyes - 0.5).abs() < 1e-12);
        for _ in 0..10 {
            app.dispatch(Action::IncreaseWeight).unwrap();
        }
        assert_eq!(app.session.weights().eyes, 1.0);
        assert!((app.session.weights().ears - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_reset_action() {
        let mut app = App::new(DemoConfig::default());
        app.dispatch(Action::ToggleImage).unwrap();
        app.dispatch(Action::ToggleFeature(Feature::CatEyes)).unwrap();
        app.dispatch(Action::DecreaseWeight).unwrap();
        app.dispatch(Action::ToggleTable).unwrap();

        app.dispatch(Action::Reset).unwrap();
        assert_eq!(app.session, SessionState::new());
        // Panel visibility is not session state.
        assert!(app.show_table);
    }

    #[test]
    fn test_view_follows_every_action() {
        let mut app = App::new(DemoConfig::default());
        app.dispatch(Action::ToggleImage).unwrap();
        assert_eq!(app.current_asset().caption, "Input Image: Not a Cat");

        app.dispatch(Action::ToggleFeature(Feature::PointedEars)).unwrap();
        assert!(!app.view().shows_warning());
        app.dispatch(Action::ToggleFeature(Feature::CatEyes)).unwrap();
        let view = app.view();
        assert_eq!(view.image, ImageSelection::NotCat);
        assert_eq!(view.score_text, "0.80");
        assert!(view.shows_warning());
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(DemoConfig::default());
        app.dispatch(Action::Quit).unwrap();
        assert!(!app.is_running);
    }
}
