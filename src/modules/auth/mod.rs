pub mod controller;
pub mod model;
pub mod service;

pub use controller::{AdminLoginScreen, LoginScreen};
pub use model::{AdminIdentity, AdminLoginForm, LoginForm};
pub use service::AuthService;
