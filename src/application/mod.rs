//! Screen state machines and the navigation controller.
//!
//! `App` owns whichever screen is showing and tags it with a `ScreenId`.
//! Screens never await anything: they emit `Command`s, and `Dispatcher`
//! turns each one into a tokio task whose `Outcome` is routed back by id.

pub mod dispatch;
pub mod registration;
pub mod state;
pub mod user_list;

#[cfg(test)]
pub(crate) mod testing;

pub use dispatch::*;
pub use registration::*;
pub use state::*;
pub use user_list::*;
