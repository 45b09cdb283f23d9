use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::card::ProfileCard;
use crate::profile::Profile;
use crate::theme::Theme;
use crate::view::ViewNode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// Terminal host state: the mounted card and what is drawn over it.
pub struct App {
    pub view: ViewNode,
    pub theme: Theme,
    pub popup: Popup,
    pub should_quit: bool,
}

impl App {
    pub fn new(profile: &Profile, theme: Theme) -> Self {
        Self {
            view: ProfileCard::render(profile),
            theme,
            popup: Popup::None,
            should_quit: false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.popup {
            Popup::Help => match key.code {
                KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.popup = Popup::None;
                }
                _ => {}
            },
            Popup::None => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('h') | KeyCode::Char('?') => self.popup = Popup::Help,
                _ => {}
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_help_toggles_and_q_closes_popup_first() {
        let mut app = App::new(&Profile::default(), Theme::default());

        app.handle_key(key(KeyCode::Char('h')));
        assert_eq!(app.popup, Popup::Help);

        app.handle_key(key(KeyCode::Char('q')));
        assert_eq!(app.popup, Popup::None);
        assert!(!app.should_quit);

        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let mut app = App::new(&Profile::default(), Theme::default());
        app.popup = Popup::Help;
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
