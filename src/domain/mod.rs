//! Wire types, the request-failure taxonomy and the `UserApi` port.
//!
//! No I/O lives here; everything is plain data plus one async trait.

pub mod models;
pub mod services;
pub mod errors;

pub use models::*;
pub use services::*;
pub use errors::*;
