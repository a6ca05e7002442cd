//! Registration form state machine.
//!
//! `Idle -> Submitting -> {Success, Failed}`. A submit from `Failed` clears the
//! message and starts over. The screen never performs I/O: [`submit`] hands
//! back the request to send and [`on_register_result`] consumes the answer.
//!
//! [`submit`]: RegistrationScreen::submit
//! [`on_register_result`]: RegistrationScreen::on_register_result

use crate::domain::{ApiError, ApiResult, RegisterRequest, RegisterResponse};

pub const MISSING_FIELDS_MESSAGE: &str = "Email and password are required";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistrationState {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Which input receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Email,
    Password,
}

impl Field {
    pub fn other(self) -> Self {
        match self {
            Field::Email => Field::Password,
            Field::Password => Field::Email,
        }
    }
}

/// What the navigation controller should do after a registration result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistrationTransition {
    Stay,
    NavigateToUserList,
}

#[derive(Debug, Clone)]
pub struct RegistrationScreen {
    pub email: String,
    pub password: String,
    pub focus: Field,
    pub state: RegistrationState,
    pub message: Option<String>,
}

impl Default for RegistrationScreen {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            focus: Field::Email,
            state: RegistrationState::Idle,
            message: None,
        }
    }
}

impl RegistrationScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// The submit control is disabled while a request is in flight and once
    /// the account exists.
    pub fn submit_enabled(&self) -> bool {
        matches!(self.state, RegistrationState::Idle | RegistrationState::Failed)
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.other();
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_field_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_field_mut().pop();
    }

    fn focused_field_mut(&mut self) -> &mut String {
        match self.focus {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        }
    }

    /// Starts a submission.
    ///
    /// Returns the request to send, or `None` when submitting is disabled or
    /// a field is empty. In the latter case the screen stays `Idle` and shows
    /// [`MISSING_FIELDS_MESSAGE`].
    pub fn submit(&mut self) -> Option<RegisterRequest> {
        if !self.submit_enabled() {
            tracing::debug!(state = ?self.state, "submit ignored");
            return None;
        }

        self.state = RegistrationState::Idle;
        self.message = None;

        if self.email.trim().is_empty() || self.password.is_empty() {
            self.message = Some(MISSING_FIELDS_MESSAGE.to_string());
            return None;
        }

        self.state = RegistrationState::Submitting;
        tracing::info!("registration submitted");
        Some(RegisterRequest::new(self.email.clone(), self.password.clone()))
    }

    /// Applies the outcome of the request issued by [`submit`](Self::submit).
    pub fn on_register_result(
        &mut self,
        result: ApiResult<RegisterResponse>,
    ) -> RegistrationTransition {
        if self.state != RegistrationState::Submitting {
            tracing::warn!(state = ?self.state, "registration result without a pending submit");
            return RegistrationTransition::Stay;
        }

        match result {
            Ok(response) => {
                tracing::info!(id = response.id, "registration succeeded");
                self.state = RegistrationState::Success;
                self.message = None;
                RegistrationTransition::NavigateToUserList
            }
            Err(error) => {
                tracing::warn!(%error, "registration failed");
                self.state = RegistrationState::Failed;
                self.message = Some(failure_message(&error));
                RegistrationTransition::Stay
            }
        }
    }
}

fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::ServerRejected { reason: Some(reason), .. } => {
            format!("Registration Failed: {reason}")
        }
        ApiError::ServerRejected { reason: None, .. } => "Registration Failed".to_string(),
        ApiError::MalformedResponse(_) => "Unknown error occurred".to_string(),
        ApiError::NetworkFailure(description) => format!("Network Error: {description}"),
    }
}
