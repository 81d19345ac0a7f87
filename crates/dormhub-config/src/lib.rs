//! # Dormhub Config
//!
//! Configuration types for the Dormhub client, loaded from environment
//! variables:
//!
//! - [`api`]: Remote API location and outbound identity
//!
//! # Example
//!
//! ```ignore
//! use dormhub_config::ApiConfig;
//!
//! let config = ApiConfig::from_env().with_base_url("http://dorms.example.edu/api");
//! assert_eq!(config.url("/dorms"), "http://dorms.example.edu/api/dorms");
//! ```

pub mod api;

pub use api::ApiConfig;
