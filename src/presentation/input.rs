use crate::application::{App, Screen};
use crossterm::event::{KeyCode, KeyModifiers};

pub struct InputHandler;

impl InputHandler {
    pub fn handle_key_event(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        if modifiers.contains(KeyModifiers::CONTROL) && key == KeyCode::Char('c') {
            app.quit();
            return;
        }

        match app.screen {
            Screen::Registration(_) => Self::handle_registration(app, key, modifiers),
            Screen::UserList(_) => Self::handle_user_list(app, key),
        }
    }

    fn handle_registration(app: &mut App, key: KeyCode, modifiers: KeyModifiers) {
        match key {
            KeyCode::Esc => app.quit(),
            KeyCode::Enter => app.submit_registration(),
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                if let Some(form) = app.registration_mut() {
                    form.toggle_focus();
                }
            }
            KeyCode::Backspace => {
                if let Some(form) = app.registration_mut() {
                    form.backspace();
                }
            }
            KeyCode::Char(c) if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                if let Some(form) = app.registration_mut() {
                    form.insert_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_user_list(app: &mut App, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Char('q') => app.quit(),
            KeyCode::Char('r') => app.reopen_user_list(),
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(list) = app.user_list_mut() {
                    list.scroll_down();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(list) = app.user_list_mut() {
                    list.scroll_up();
                }
            }
            _ => {}
        }
    }
}
