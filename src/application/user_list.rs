//! User listing state machine: `Loading -> {Loaded, Failed}`.

use crate::domain::{ApiError, ApiResult, User};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load users";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserListState {
    Loading,
    Loaded,
    Failed,
}

/// One screen instance. A fresh instance is created each time the list is
/// opened, and each instance fetches exactly once.
#[derive(Debug, Clone)]
pub struct UserListScreen {
    pub state: UserListState,
    pub users: Vec<User>,
    pub message: Option<String>,
    /// Index of the first row shown.
    pub scroll: usize,
    fetch_issued: bool,
}

impl Default for UserListScreen {
    fn default() -> Self {
        Self {
            state: UserListState::Loading,
            users: Vec::new(),
            message: None,
            scroll: 0,
            fetch_issued: false,
        }
    }
}

impl UserListScreen {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` the first time it is called on this instance and
    /// `false` afterwards. The caller issues `list_users` only on `true`.
    pub fn take_fetch(&mut self) -> bool {
        if self.fetch_issued {
            return false;
        }
        self.fetch_issued = true;
        true
    }

    pub fn on_users_result(&mut self, result: ApiResult<Vec<User>>) {
        if self.state != UserListState::Loading {
            tracing::warn!(state = ?self.state, "user list result after loading finished");
            return;
        }

        match result {
            Ok(users) => {
                tracing::info!(count = users.len(), "users loaded");
                self.users = users;
                self.message = None;
                self.state = UserListState::Loaded;
            }
            Err(error) => {
                tracing::warn!(%error, "loading users failed");
                self.users.clear();
                self.message = Some(failure_message(&error));
                self.state = UserListState::Failed;
            }
        }
    }

    pub fn scroll_down(&mut self) {
        if self.scroll + 1 < self.users.len() {
            self.scroll += 1;
        }
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn failure_message(error: &ApiError) -> String {
    match error {
        ApiError::ServerRejected { .. } | ApiError::MalformedResponse(_) => {
            LOAD_FAILED_MESSAGE.to_string()
        }
        ApiError::NetworkFailure(description) => format!("Network Error: {description}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: i64, first: &str) -> User {
        User {
            id,
            email: format!("{}@reqres.in", first.to_lowercase()),
            first_name: first.to_string(),
            last_name: "Holt".to_string(),
            avatar_url: format!("https://reqres.in/img/faces/{id}-image.jpg"),
        }
    }

    #[test]
    fn test_starts_loading() {
        let screen = UserListScreen::new();
        assert_eq!(screen.state, UserListState::Loading);
        assert!(screen.users.is_empty());
        assert!(screen.message.is_none());
    }

    #[test]
    fn test_fetch_taken_once() {
        let mut screen = UserListScreen::new();
        assert!(screen.take_fetch());
        assert!(!screen.take_fetch());
        assert!(!screen.take_fetch());
    }

    #[test]
    fn test_loaded_keeps_server_order() {
        let mut screen = UserListScreen::new();
        screen.on_users_result(Ok(vec![user(2, "Janet"), user(1, "George"), user(3, "Emma")]));

        assert_eq!(screen.state, UserListState::Loaded);
        let ids: Vec<i64> = screen.users.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert!(screen.message.is_none());
    }

    #[test]
    fn test_empty_list_is_loaded_not_failed() {
        let mut screen = UserListScreen::new();
        screen.on_users_result(Ok(Vec::new()));
        assert_eq!(screen.state, UserListState::Loaded);
        assert!(screen.users.is_empty());
        assert!(screen.message.is_none());
    }

    #[test]
    fn test_network_failure_message_carries_description() {
        let mut screen = UserListScreen::new();
        screen.on_users_result(Err(ApiError::NetworkFailure("connection refused".to_string())));

        assert_eq!(screen.state, UserListState::Failed);
        assert_eq!(screen.message.as_deref(), Some("Network Error: connection refused"));
        assert!(screen.users.is_empty());
    }

    #[test]
    fn test_rejected_and_malformed_share_message() {
        for error in [
            ApiError::ServerRejected { status: 500, reason: None },
            ApiError::MalformedResponse("missing field `data`".to_string()),
        ] {
            let mut screen = UserListScreen::new();
            screen.on_users_result(Err(error));
            assert_eq!(screen.state, UserListState::Failed);
            assert_eq!(screen.message.as_deref(), Some(LOAD_FAILED_MESSAGE));
        }
    }

    #[test]
    fn test_late_result_does_not_overwrite() {
        let mut screen = UserListScreen::new();
        screen.on_users_result(Ok(vec![user(1, "George")]));
        screen.on_users_result(Err(ApiError::NetworkFailure("late".to_string())));

        assert_eq!(screen.state, UserListState::Loaded);
        assert_eq!(screen.users.len(), 1);
    }

    #[test]
    fn test_scroll_stays_in_bounds() {
        let mut screen = UserListScreen::new();
        screen.on_users_result(Ok(vec![user(1, "George"), user(2, "Janet")]));

        screen.scroll_up();
        assert_eq!(screen.scroll, 0);
        screen.scroll_down();
        screen.scroll_down();
        assert_eq!(screen.scroll, 1);
    }
}
