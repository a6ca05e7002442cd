//! Pure mapping from application state to what should be on screen.
//!
//! Nothing here touches the terminal. [`view`] describes the current screen
//! and [`super::ui`] paints that description with ratatui.

use crate::application::{
    App, Field, RegistrationScreen, RegistrationState, Screen, UserListScreen, UserListState,
};
use crate::domain::User;

pub const REGISTRATION_TITLE: &str = "Create Account!";
pub const EMAIL_LABEL: &str = "Email Address";
pub const PASSWORD_LABEL: &str = "Password";
pub const SUBMIT_LABEL: &str = "Register";

#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Registration(RegistrationView),
    UserList(UserListView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub label: &'static str,
    /// Text to display. Masked for the password.
    pub text: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationView {
    pub title: &'static str,
    pub email: FieldView,
    pub password: FieldView,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub show_progress: bool,
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub name: String,
    pub email: String,
    pub avatar_url: String,
}

impl From<&User> for UserRow {
    fn from(user: &User) -> Self {
        Self {
            name: user.full_name(),
            email: user.email.clone(),
            avatar_url: user.avatar_url.clone(),
        }
    }
}

/// Exactly one of progress, message or rows is ever shown.
#[derive(Debug, Clone, PartialEq)]
pub enum UserListView {
    Progress,
    Message(String),
    Rows { rows: Vec<UserRow>, scroll: usize },
}

pub fn view(app: &App) -> View {
    match &app.screen {
        Screen::Registration(screen) => View::Registration(registration_view(screen)),
        Screen::UserList(screen) => View::UserList(user_list_view(screen)),
    }
}

pub fn registration_view(screen: &RegistrationScreen) -> RegistrationView {
    RegistrationView {
        title: REGISTRATION_TITLE,
        email: FieldView {
            label: EMAIL_LABEL,
            text: screen.email.clone(),
            focused: screen.focus == Field::Email,
        },
        password: FieldView {
            label: PASSWORD_LABEL,
            text: "•".repeat(screen.password.chars().count()),
            focused: screen.focus == Field::Password,
        },
        submit_label: SUBMIT_LABEL,
        submit_enabled: screen.submit_enabled(),
        show_progress: screen.state == RegistrationState::Submitting,
        message: screen.message.clone(),
    }
}

pub fn user_list_view(screen: &UserListScreen) -> UserListView {
    match screen.state {
        UserListState::Loading => UserListView::Progress,
        UserListState::Failed => {
            UserListView::Message(screen.message.clone().unwrap_or_default())
        }
        UserListState::Loaded => UserListView::Rows {
            rows: screen.users.iter().map(UserRow::from).collect(),
            scroll: screen.scroll,
        },
    }
}
