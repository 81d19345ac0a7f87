use tracing::{info, instrument};

use dormhub_client::ApiClient;
use dormhub_core::ApiError;
use dormhub_models::{AdminLoginRequest, LoginRequest, User};

use super::model::AdminIdentity;

pub const LOGIN_FAILED: &str = "Login failed. Please check your credentials.";

pub struct AuthService;

impl AuthService {
    #[instrument(skip(client, request), fields(email = %request.email))]
    pub async fn login_student(
        client: &ApiClient,
        request: &LoginRequest,
    ) -> Result<User, ApiError> {
        let user = client.login(request).await?;
        info!(
            user_id = ?user.id,
            assigned_room = ?user.assigned_room,
            session_established = client.has_session(),
            "Student logged in"
        );
        Ok(user)
    }

    /// Logs an administrator in and returns the school they manage.
    ///
    /// The school id forwarded to the dashboard is the one the admin typed;
    /// the name comes from the server.
    #[instrument(skip(client, request), fields(email = %request.email, school_id = %request.school_id))]
    pub async fn login_admin(
        client: &ApiClient,
        request: &AdminLoginRequest,
    ) -> Result<AdminIdentity, ApiError> {
        let response = client.admin_login(request).await?;
        info!(school = %response.school.name, "Admin logged in");
        Ok(AdminIdentity {
            school_id: request.school_id.clone(),
            school_name: response.school.name,
        })
    }
}
