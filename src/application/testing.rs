//! In-memory [`UserApi`] double for unit tests.

use crate::domain::{ApiError, ApiResult, RegisterRequest, RegisterResponse, User, UserApi};
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub struct MockApi {
    register_result: ApiResult<RegisterResponse>,
    list_result: ApiResult<Vec<User>>,
    register_requests: Mutex<Vec<RegisterRequest>>,
    list_calls: AtomicUsize,
}

impl MockApi {
    pub fn new(
        register_result: ApiResult<RegisterResponse>,
        list_result: ApiResult<Vec<User>>,
    ) -> Self {
        Self {
            register_result,
            list_result,
            register_requests: Mutex::new(Vec::new()),
            list_calls: AtomicUsize::new(0),
        }
    }

    pub fn registering(result: ApiResult<RegisterResponse>) -> Self {
        Self::new(result, Err(ApiError::NetworkFailure("not scripted".to_string())))
    }

    pub fn listing(result: ApiResult<Vec<User>>) -> Self {
        Self::new(Err(ApiError::NetworkFailure("not scripted".to_string())), result)
    }

    pub fn register_requests(&self) -> Vec<RegisterRequest> {
        self.register_requests.lock().unwrap().clone()
    }

    pub fn list_calls(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UserApi for MockApi {
    async fn register(&self, request: &RegisterRequest) -> ApiResult<RegisterResponse> {
        self.register_requests.lock().unwrap().push(request.clone());
        self.register_result.clone()
    }

    async fn list_users(&self) -> ApiResult<Vec<User>> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        self.list_result.clone()
    }
}
