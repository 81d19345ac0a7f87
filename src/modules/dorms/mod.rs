pub mod controller;
pub mod service;

pub use controller::DormsScreen;
pub use service::DormService;
