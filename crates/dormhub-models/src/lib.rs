//! # Dormhub Models
//!
//! Domain models and DTOs for the Dormhub client.
//!
//! The server is the source of truth for every entity here; the client only
//! holds them in memory while a screen renders them.
//!
//! # Modules
//!
//! - [`auth`]: Login requests and responses
//! - [`dorms`]: Dorm entity and creation DTO
//! - [`ids`]: Strongly-typed identifiers that normalise wrapped ids
//! - [`rooms`]: Room and occupant entities, room creation DTO
//! - [`schools`]: School summary from the admin login
//! - [`users`]: Logged-in user, student entity and creation DTO

pub mod auth;
pub mod dorms;
pub mod ids;
pub mod rooms;
pub mod schools;
pub mod users;

// Re-export commonly used types at crate root for convenience
pub use auth::{AdminLoginRequest, AdminLoginResponse, LoginRequest, MessageResponse};
pub use dorms::{CreateDormDto, Dorm};
pub use ids::{DormId, RoomId, SchoolId, UserId};
pub use rooms::{CreateRoomDto, Occupant, Room};
pub use schools::SchoolInfo;
pub use users::{CreateStudentDto, Student, User};
