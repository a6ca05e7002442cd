//! Bridges screen transitions and the asynchronous API.
//!
//! Screens emit [`Command`]s. The [`Dispatcher`] runs each one on its own tokio
//! task and posts the [`Outcome`] back over a channel that the UI loop drains.
//! Both carry the [`ScreenId`] of the issuing screen so that answers for a
//! screen that is gone can be dropped.

use crate::domain::{ApiResult, RegisterRequest, RegisterResponse, User, UserApi};
use std::sync::Arc;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Identity of one screen instance. Never reused within a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Register { screen: ScreenId, request: RegisterRequest },
    ListUsers { screen: ScreenId },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Registered { screen: ScreenId, result: ApiResult<RegisterResponse> },
    UsersListed { screen: ScreenId, result: ApiResult<Vec<User>> },
}

impl Outcome {
    pub fn screen(&self) -> ScreenId {
        match self {
            Outcome::Registered { screen, .. } | Outcome::UsersListed { screen, .. } => *screen,
        }
    }
}

impl Command {
    /// Performs the call. Exactly one API request per command.
    pub async fn execute(self, api: &dyn UserApi) -> Outcome {
        match self {
            Command::Register { screen, request } => Outcome::Registered {
                screen,
                result: api.register(&request).await,
            },
            Command::ListUsers { screen } => Outcome::UsersListed {
                screen,
                result: api.list_users().await,
            },
        }
    }
}

pub struct Dispatcher {
    api: Arc<dyn UserApi>,
    outcomes: UnboundedSender<Outcome>,
}

impl Dispatcher {
    /// Creates a dispatcher over the shared client, plus the receiving end
    /// the UI loop polls.
    pub fn new(api: Arc<dyn UserApi>) -> (Self, UnboundedReceiver<Outcome>) {
        let (outcomes, receiver) = mpsc::unbounded_channel();
        (Self { api, outcomes }, receiver)
    }

    /// Spawns the command. Must be called from within a tokio runtime.
    pub fn dispatch(&self, command: Command) -> JoinHandle<()> {
        let api = Arc::clone(&self.api);
        let outcomes = self.outcomes.clone();
        tracing::debug!(?command, "dispatching");

        tokio::spawn(async move {
            let outcome = command.execute(api.as_ref()).await;
            if outcomes.send(outcome).is_err() {
                tracing::debug!("ui loop gone, outcome dropped");
            }
        })
    }
}
