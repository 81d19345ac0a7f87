//! Request lifecycle shared by every screen.
//!
//! A screen owns one [`RequestState`] per action it can trigger. The state
//! moves `Idle -> Pending -> (Succeeded | Failed)` and never holds more than
//! one request in flight: [`RequestState::try_begin`] refuses while a request
//! is pending. Settled states count as idle for the purpose of gating.
//!
//! Requests are bound to the screen's [`CancellationToken`]. When the screen
//! is unmounted the token is cancelled and the request resolves to
//! [`ApiError::Cancelled`] instead of delivering a late response.

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::errors::ApiError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed(String),
}

impl RequestStatus {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}

/// Shared handle on a single action's request status.
///
/// Clones observe the same status, which lets a renderer read the flag
/// while the action that owns it is awaiting the server.
#[derive(Debug, Clone, Default)]
pub struct RequestState {
    status: Arc<Mutex<RequestStatus>>,
}

impl RequestState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> RequestStatus {
        self.lock().clone()
    }

    pub fn is_pending(&self) -> bool {
        self.lock().is_pending()
    }

    /// Marks the state pending, or returns `None` if a request is already
    /// in flight.
    pub fn try_begin(&self) -> Option<PendingRequest> {
        let mut status = self.lock();
        if status.is_pending() {
            return None;
        }
        *status = RequestStatus::Pending;
        Some(PendingRequest {
            state: self.clone(),
            settled: false,
        })
    }

    /// Runs `request` as this state's single in-flight request.
    ///
    /// Returns [`ApiError::Precondition`] without polling `request` when
    /// another request is pending, and [`ApiError::Cancelled`] when `scope`
    /// is cancelled before or while the request runs. The pending flag is
    /// cleared on every path.
    pub async fn run<T, F>(&self, scope: &CancellationToken, request: F) -> Result<T, ApiError>
    where
        F: Future<Output = Result<T, ApiError>>,
    {
        let Some(pending) = self.try_begin() else {
            debug!("Ignoring action: a request is already in progress");
            return Err(ApiError::precondition("A request is already in progress"));
        };

        let result = if scope.is_cancelled() {
            Err(ApiError::Cancelled)
        } else {
            tokio::select! {
                biased;
                _ = scope.cancelled() => Err(ApiError::Cancelled),
                result = request => result,
            }
        };

        match &result {
            Ok(_) => pending.succeed(),
            Err(ApiError::Cancelled) => {
                debug!("Request cancelled by screen unmount");
                drop(pending);
            }
            Err(err) => pending.fail(err.to_string()),
        }

        result
    }

    fn set(&self, status: RequestStatus) {
        *self.lock() = status;
    }

    fn lock(&self) -> MutexGuard<'_, RequestStatus> {
        self.status.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Guard for a request in flight. Dropping it unsettled resets the state
/// to idle.
#[derive(Debug)]
pub struct PendingRequest {
    state: RequestState,
    settled: bool,
}

impl PendingRequest {
    pub fn succeed(mut self) {
        self.settled = true;
        self.state.set(RequestStatus::Succeeded);
    }

    pub fn fail(mut self, message: impl Into<String>) {
        self.settled = true;
        self.state.set(RequestStatus::Failed(message.into()));
    }
}

impl Drop for PendingRequest {
    fn drop(&mut self) {
        if !self.settled {
            self.state.set(RequestStatus::Idle);
        }
    }
}
