pub mod admin;
pub mod auth;
pub mod dorms;
pub mod rooms;
