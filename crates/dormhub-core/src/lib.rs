//! # Dormhub Core
//!
//! Core types, errors, and utilities for the Dormhub client.
//!
//! This crate provides foundational types used throughout the application:
//!
//! - [`errors`]: Client error taxonomy and user-facing message selection
//! - [`request_state`]: Per-screen request lifecycle with cancellation on unmount
//! - [`serde`]: Deserialization helpers that normalise server identifiers
//! - [`validation`]: Conversion of `validator` failures into client errors
//!
//! # Example
//!
//! ```ignore
//! use dormhub_core::{ApiError, RequestState};
//! use tokio_util::sync::CancellationToken;
//!
//! let scope = CancellationToken::new();
//! let state = RequestState::new();
//!
//! let rooms = state.run(&scope, client.list_rooms(&dorm_id)).await;
//! if let Err(err) = rooms {
//!     println!("{}", err.user_message("Failed to fetch rooms"));
//! }
//! ```

pub mod errors;
pub mod request_state;
pub mod serde;
pub mod validation;

// Re-export commonly used types at crate root
pub use errors::ApiError;
pub use request_state::{PendingRequest, RequestState, RequestStatus};
pub use validation::format_errors;
