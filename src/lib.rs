//! # Dormhub
//!
//! Terminal client for the dorm room assignment API.
//!
//! ## Overview
//!
//! - **Students** log in, browse dorms and their rooms, and assign
//!   themselves to a room that still has space
//! - **Administrators** log in for a school and create dorms, rooms and
//!   student accounts
//!
//! The server is the source of truth for everything shown. The client keeps
//! no cache: each screen re-fetches on entry and after every change it makes.
//!
//! ## Architecture
//!
//! ```text
//! crates/
//! ├── dormhub-core/     # ApiError, RequestState, id normalisation, validation
//! ├── dormhub-config/   # ApiConfig (base URL, user agent)
//! ├── dormhub-models/   # Entities, DTOs, typed ids
//! └── dormhub-client/   # ApiClient, Session, typed endpoints
//! src/
//! ├── modules/          # Feature modules
//! │   ├── auth/        # Student and admin login
//! │   ├── dorms/       # Dorm list
//! │   ├── rooms/       # Room list and assignment
//! │   └── admin/       # Provisioning dashboard
//! ├── navigation.rs     # Route stack with per-screen cancellation
//! ├── notice.rs         # Action outcomes
//! ├── shell/            # dialoguer front end and text rendering
//! └── state.rs          # Config + client for the current identity
//! ```
//!
//! Each feature module follows a consistent structure:
//!
//! - `mod.rs`: Module exports
//! - `controller.rs`: Screen state and actions
//! - `service.rs`: API calls and their logging
//! - `model.rs`: Form fields and request building
//!
//! ## Quick Start
//!
//! ```bash
//! DORMHUB_API_URL=http://localhost:3000/api
//! dormhub student --email alice@example.edu
//! dormhub admin --school-id 665f1c2e...
//! ```
//!
//! ## Modules
//!
//! - [`logging`]: Console logging setup
//! - [`modules`]: Feature modules (auth, dorms, rooms, admin)
//! - [`navigation`]: Routes and the navigation stack
//! - [`notice`]: What actions report back
//! - [`shell`]: Interactive terminal front end
//! - [`state`]: Shared application state

pub mod logging;
pub mod modules;
pub mod navigation;
pub mod notice;
pub mod shell;
pub mod state;

// Re-export workspace crates for convenience
pub use dormhub_client;
pub use dormhub_config;
pub use dormhub_core;
pub use dormhub_models;
