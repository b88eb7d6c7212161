//! Application shell: router, theme provider and key handling

use crate::config::Config;
use crate::pages::PageId;
use crate::router::{Navigation, RouteTable, Router, View};
use crate::types::{FlashMessage, FLASH_SECONDS};
use crate::ui::theme::{Theme, ThemeProvider};
use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application state
pub struct App {
    pub should_quit: bool,
    pub config: Config,
    pub theme: ThemeProvider,
    pub router: Router,
    /// Address bar contents while it is open
    pub address_bar: Option<String>,
    pub flash_message: Option<FlashMessage>,
}

impl App {
    pub fn new(config: Config, initial_path: &str, theme: ThemeProvider) -> Result<Self> {
        let table = RouteTable::standard().context("Invalid route table")?;
        let router = Router::new(table, initial_path, config.history_limit);

        Ok(Self {
            should_quit: false,
            config,
            theme,
            router,
            address_bar: None,
            flash_message: None,
        })
    }

    pub fn theme(&self) -> &'static Theme {
        self.theme.theme()
    }

    pub fn navigate(&mut self, path: &str) {
        if let Navigation::Moved {
            redirected_from: Some(from),
        } = self.router.navigate(path)
        {
            self.flash(format!("Redirected {} → {}", from, self.router.current_path()), false);
        }
    }

    pub fn flash(&mut self, text: String, is_error: bool) {
        self.flash_message = Some(FlashMessage::new(text, is_error));
    }

    /// Drop expired flash messages
    pub fn update_timers(&mut self) {
        if let Some(msg) = &self.flash_message {
            if msg.is_expired(FLASH_SECONDS) {
                self.flash_message = None;
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Ok(());
        }

        // Address bar captures ALL keys while open
        if self.address_bar.is_some() {
            self.handle_address_bar_key(key);
            return Ok(());
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(page) = PageId::from_key(c) {
                    self.navigate(page.path());
                }
            }
            KeyCode::Tab => {
                let next = self.router.current_page().map_or(PageId::Live, |p| p.next());
                self.navigate(next.path());
            }
            KeyCode::BackTab => {
                let prev = self
                    .router
                    .current_page()
                    .map_or(PageId::DriverAnalytics, |p| p.prev());
                self.navigate(prev.path());
            }
            KeyCode::Char('g') | KeyCode::Char(':') => {
                self.address_bar = Some(self.router.current_path().to_string());
            }
            KeyCode::Backspace | KeyCode::Char('h') => {
                if !self.router.back() {
                    self.flash("No earlier page in history".into(), true);
                }
            }
            KeyCode::Char('l') => {
                if !self.router.forward() {
                    self.flash("No later page in history".into(), true);
                }
            }
            KeyCode::Enter => {
                if matches!(self.router.current_view(), View::NotFound(_)) {
                    self.navigate("/");
                }
            }
            _ => {}
        }

        Ok(())
    }

    fn handle_address_bar_key(&mut self, key: KeyEvent) {
        let Some(buffer) = self.address_bar.as_mut() else {
            return;
        };

        match key.code {
            KeyCode::Esc => self.address_bar = None,
            KeyCode::Enter => {
                let path = buffer.clone();
                self.address_bar = None;
                self.navigate(&path);
            }
            KeyCode::Backspace => {
                buffer.pop();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                buffer.push(c)
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_app(path: &str) -> App {
        App::new(Config::default(), path, ThemeProvider::default()).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_root_lands_on_live() {
        let app = new_app("/");
        assert_eq!(app.router.current_path(), "/live");
        assert_eq!(app.router.current_page(), Some(PageId::Live));
    }

    #[test]
    fn test_number_keys_switch_pages() {
        let mut app = new_app("/live");
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.router.current_page(), Some(PageId::DriverAnalytics));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.router.current_path(), "/replay");
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.router.current_path(), "/replay");
    }

    #[test]
    fn test_tab_cycles_pages() {
        let mut app = new_app("/live");
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.router.current_page(), Some(PageId::Replay));
        press(&mut app, KeyCode::BackTab);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.router.current_page(), Some(PageId::DriverAnalytics));
    }

    #[test]
    fn test_address_bar_navigation() {
        let mut app = new_app("/live");
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.address_bar.as_deref(), Some("/live"));

        // Keys go to the buffer, not to global bindings
        for _ in 0.."/live".len() {
            press(&mut app, KeyCode::Backspace);
        }
        type_str(&mut app, "/unknown");
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Enter);

        assert!(app.address_bar.is_none());
        assert_eq!(
            app.router.current_view(),
            &View::NotFound("/unknown".to_string())
        );
    }

    #[test]
    fn test_address_bar_escape_cancels() {
        let mut app = new_app("/replay");
        press(&mut app, KeyCode::Char(':'));
        type_str(&mut app, "x");
        press(&mut app, KeyCode::Esc);
        assert!(app.address_bar.is_none());
        assert_eq!(app.router.current_path(), "/replay");
    }

    #[test]
    fn test_address_bar_ignores_modified_chars() {
        let mut app = new_app("/live");
        press(&mut app, KeyCode::Char('g'));
        app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL))
            .unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT))
            .unwrap();
        app.handle_key(KeyEvent::new(KeyCode::Char('R'), KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(app.address_bar.as_deref(), Some("/liveR"));
    }

    #[test]
    fn test_redirect_flashes_notice() {
        let mut app = new_app("/replay");
        app.navigate("/");
        assert_eq!(app.router.current_path(), "/live");
        let flash = app.flash_message.as_ref().unwrap();
        assert!(flash.text.contains("/ → /live"));
        assert!(!flash.is_error);
    }

    #[test]
    fn test_enter_on_not_found_goes_home() {
        let mut app = new_app("/unknown");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.router.current_path(), "/live");
    }

    #[test]
    fn test_history_keys() {
        let mut app = new_app("/live");
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('h'));
        assert_eq!(app.router.current_path(), "/live");
        press(&mut app, KeyCode::Backspace);
        assert!(app.flash_message.as_ref().unwrap().is_error);
        press(&mut app, KeyCode::Char('l'));
        assert_eq!(app.router.current_path(), "/replay");
    }

    #[test]
    fn test_quit_keys() {
        let mut app = new_app("/live");
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut app = new_app("/live");
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .unwrap();
        assert!(app.should_quit);
    }
}
