//! Authentication DTOs for the student and administrator login paths.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::ids::SchoolId;
use crate::schools::SchoolInfo;

/// Body of `POST /login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Body of `POST /admin/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
    pub school_id: SchoolId,
}

/// Successful admin login payload. Only the school summary is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AdminLoginResponse {
    pub school: SchoolInfo,
}

/// `{message}` payload returned by assignment endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
