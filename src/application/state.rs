//! Application state and navigation between screens.
//!
//! [`App`] is the single source of truth the UI draws from. It owns the
//! current screen instance, tags it with a fresh [`ScreenId`] on every
//! navigation, and queues the [`Command`]s screens ask for until the UI loop
//! hands them to the dispatcher.

use super::dispatch::{Command, Outcome, ScreenId};
use super::registration::{RegistrationScreen, RegistrationTransition};
use super::user_list::{UserListScreen, UserListState};

/// The screen currently on display.
#[derive(Debug, Clone)]
pub enum Screen {
    Registration(RegistrationScreen),
    UserList(UserListScreen),
}

/// Main application state.
///
/// # Examples
///
/// ```
/// use signup_tui::application::{App, Screen};
///
/// let app = App::default();
/// assert!(matches!(app.screen, Screen::Registration(_)));
/// assert!(!app.should_quit);
/// ```
#[derive(Debug)]
pub struct App {
    /// Current screen and its state
    pub screen: Screen,
    /// Identity of the current screen instance
    pub screen_id: ScreenId,
    /// Set once the user asked to leave
    pub should_quit: bool,
    next_screen_id: u64,
    pending: Vec<Command>,
}

impl Default for App {
    fn default() -> Self {
        Self {
            screen: Screen::Registration(RegistrationScreen::new()),
            screen_id: ScreenId(0),
            should_quit: false,
            next_screen_id: 1,
            pending: Vec::new(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn registration(&self) -> Option<&RegistrationScreen> {
        match &self.screen {
            Screen::Registration(screen) => Some(screen),
            Screen::UserList(_) => None,
        }
    }

    pub fn registration_mut(&mut self) -> Option<&mut RegistrationScreen> {
        match &mut self.screen {
            Screen::Registration(screen) => Some(screen),
            Screen::UserList(_) => None,
        }
    }

    pub fn user_list(&self) -> Option<&UserListScreen> {
        match &self.screen {
            Screen::UserList(screen) => Some(screen),
            Screen::Registration(_) => None,
        }
    }

    pub fn user_list_mut(&mut self) -> Option<&mut UserListScreen> {
        match &mut self.screen {
            Screen::UserList(screen) => Some(screen),
            Screen::Registration(_) => None,
        }
    }

    /// Drains the commands queued since the last call.
    pub fn take_commands(&mut self) -> Vec<Command> {
        std::mem::take(&mut self.pending)
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Submits the registration form, queueing one `Register` command when
    /// the screen accepts the submit.
    pub fn submit_registration(&mut self) {
        if let Screen::Registration(screen) = &mut self.screen {
            if let Some(request) = screen.submit() {
                self.pending.push(Command::Register {
                    screen: self.screen_id,
                    request,
                });
            }
        }
    }

    /// Opens a new user list in place of a failed one.
    pub fn reopen_user_list(&mut self) {
        if matches!(self.user_list(), Some(list) if list.state == UserListState::Failed) {
            tracing::info!("reopening user list");
            self.open_user_list();
        }
    }

    /// Routes a finished request to the screen that issued it.
    ///
    /// Outcomes for a screen instance that is no longer displayed are dropped.
    pub fn apply(&mut self, outcome: Outcome) {
        if outcome.screen() != self.screen_id {
            tracing::debug!(
                outcome_screen = outcome.screen().0,
                current_screen = self.screen_id.0,
                "dropping outcome for a closed screen"
            );
            return;
        }

        let navigate = match (&mut self.screen, outcome) {
            (Screen::Registration(screen), Outcome::Registered { result, .. }) => {
                screen.on_register_result(result) == RegistrationTransition::NavigateToUserList
            }
            (Screen::UserList(screen), Outcome::UsersListed { result, .. }) => {
                screen.on_users_result(result);
                false
            }
            (_, outcome) => {
                tracing::warn!(screen = outcome.screen().0, "outcome does not match the screen kind");
                false
            }
        };

        if navigate {
            self.open_user_list();
        }
    }

    fn next_id(&mut self) -> ScreenId {
        let id = ScreenId(self.next_screen_id);
        self.next_screen_id += 1;
        id
    }

    fn open_user_list(&mut self) {
        let id = self.next_id();
        let mut list = UserListScreen::new();
        if list.take_fetch() {
            self.pending.push(Command::ListUsers { screen: id });
        }
        self.screen_id = id;
        self.screen = Screen::UserList(list);
        tracing::info!(screen = id.0, "user list opened");
    }
}
