pub mod controller;
pub mod service;

pub use controller::RoomsScreen;
pub use service::{RoomService, can_assign};
