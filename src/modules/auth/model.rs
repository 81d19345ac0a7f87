use validator::Validate;

use dormhub_core::ApiError;
use dormhub_models::{AdminLoginRequest, LoginRequest, SchoolId};

/// Student login input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Builds the request body, refusing blank fields.
    pub fn to_request(&self) -> Result<LoginRequest, ApiError> {
        let request = LoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}

/// Administrator login input fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminLoginForm {
    pub email: String,
    pub password: String,
    pub school_id: String,
}

impl AdminLoginForm {
    pub fn to_request(&self) -> Result<AdminLoginRequest, ApiError> {
        let request = AdminLoginRequest {
            email: self.email.trim().to_string(),
            password: self.password.clone(),
            school_id: SchoolId::new(self.school_id.trim()),
        };
        request.validate()?;
        if request.school_id.is_blank() {
            return Err(ApiError::precondition("School ID is required"));
        }
        Ok(request)
    }
}

/// Parameters carried from admin login to the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminIdentity {
    pub school_id: SchoolId,
    pub school_name: String,
}
