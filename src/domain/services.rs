//! Port to the remote user service.
//!
//! Screens never talk HTTP themselves. Requests go through [`UserApi`], which
//! the reqwest-backed client implements and tests replace with an in-memory
//! double.

use super::errors::ApiResult;
use super::models::{RegisterRequest, RegisterResponse, User};
use async_trait::async_trait;

/// Operations offered by the demo API.
///
/// Each call is a single attempt. `register` is not idempotent: calling it
/// twice creates two accounts server-side.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Registers a new account.
    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse>;

    /// Fetches the first page of users, in server order.
    async fn list_users(&self) -> ApiResult<Vec<User>>;
}
