use tokio_util::sync::CancellationToken;
use tracing::{error, warn};

use dormhub_client::ApiClient;
use dormhub_core::{ApiError, RequestState};

use crate::navigation::Route;
use crate::notice::{Notice, Outcome};

use super::model::{AdminLoginForm, LoginForm};
use super::service::{AuthService, LOGIN_FAILED};

/// Student login screen. On success navigates to the dorm list; on failure
/// stays put with the fields as entered.
#[derive(Debug)]
pub struct LoginScreen {
    pub form: LoginForm,
    request: RequestState,
    scope: CancellationToken,
}

impl LoginScreen {
    pub fn new(scope: CancellationToken) -> Self {
        Self::with_form(LoginForm::default(), scope)
    }

    pub fn with_form(form: LoginForm, scope: CancellationToken) -> Self {
        Self {
            form,
            request: RequestState::new(),
            scope,
        }
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub async fn submit(&mut self, client: &ApiClient) -> Outcome {
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "Login refused before sending");
                return Outcome::notice(Notice::error(err.user_message(LOGIN_FAILED)));
            }
        };

        match self
            .request
            .run(&self.scope, AuthService::login_student(client, &request))
            .await
        {
            Ok(_) => Outcome::navigate(Route::Dorms),
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Login failed");
                Outcome::notice(Notice::error(err.user_message(LOGIN_FAILED)))
            }
        }
    }
}

/// Administrator login screen. On success navigates to the dashboard,
/// carrying the school id and name.
#[derive(Debug)]
pub struct AdminLoginScreen {
    pub form: AdminLoginForm,
    request: RequestState,
    scope: CancellationToken,
}

impl AdminLoginScreen {
    pub fn new(scope: CancellationToken) -> Self {
        Self::with_form(AdminLoginForm::default(), scope)
    }

    pub fn with_form(form: AdminLoginForm, scope: CancellationToken) -> Self {
        Self {
            form,
            request: RequestState::new(),
            scope,
        }
    }

    pub fn request_state(&self) -> &RequestState {
        &self.request
    }

    pub async fn submit(&mut self, client: &ApiClient) -> Outcome {
        let request = match self.form.to_request() {
            Ok(request) => request,
            Err(err) => {
                warn!(error = %err, "Admin login refused before sending");
                return Outcome::notice(Notice::error(err.user_message(LOGIN_FAILED)));
            }
        };

        match self
            .request
            .run(&self.scope, AuthService::login_admin(client, &request))
            .await
        {
            Ok(identity) => Outcome::navigate(Route::AdminDashboard {
                school_id: identity.school_id,
                school_name: identity.school_name,
            }),
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Admin login failed");
                Outcome::notice(Notice::error(err.user_message(LOGIN_FAILED)))
            }
        }
    }
}
