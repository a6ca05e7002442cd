//! Registration and user listing against the reqres.in demo API, in a terminal.
//!
//! Requests flow one way: key presses change a screen in [`application`],
//! the screen queues a command, the dispatcher runs it through the
//! [`domain::UserApi`] port (implemented by [`infrastructure::ApiClient`]),
//! and the outcome comes back to the screen that asked. [`presentation`]
//! only ever reads the resulting state.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
