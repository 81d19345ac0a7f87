pub mod controller;
pub mod model;
pub mod service;

pub use controller::AdminDashboard;
pub use model::{DormForm, RoomForm, StudentForm};
pub use service::AdminService;
