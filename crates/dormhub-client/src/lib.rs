//! # Dormhub Client
//!
//! HTTP access to the dormitory room-assignment API.
//!
//! - [`client`]: [`ApiClient`], a reqwest wrapper that decodes JSON bodies
//!   and maps failures to [`ApiError`](dormhub_core::ApiError)
//! - [`endpoints`]: typed methods for every endpoint the client consumes
//! - [`session`]: [`Session`], the cookie jar for one logged-in identity
//!
//! # Example
//!
//! ```ignore
//! use dormhub_client::{ApiClient, Session};
//! use dormhub_config::ApiConfig;
//! use dormhub_models::LoginRequest;
//!
//! let client = ApiClient::new(&ApiConfig::from_env(), Session::new())?;
//! client.login(&LoginRequest { email, password }).await?;
//! let dorms = client.list_dorms().await?;
//! ```

pub mod client;
pub mod endpoints;
pub mod session;

pub use client::ApiClient;
pub use endpoints::paths;
pub use session::Session;
