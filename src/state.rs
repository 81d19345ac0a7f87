use dormhub_client::{ApiClient, Session};
use dormhub_config::ApiConfig;
use dormhub_core::ApiError;

/// Everything a screen needs to talk to the API.
///
/// The client carries the [`Session`] of the identity currently logged in;
/// returning to a login screen replaces it through [`AppState::new_session`].
#[derive(Clone, Debug)]
pub struct AppState {
    pub config: ApiConfig,
    pub client: ApiClient,
}

impl AppState {
    pub fn new(config: ApiConfig) -> Result<Self, ApiError> {
        let client = ApiClient::new(&config, Session::new())?;
        Ok(Self { config, client })
    }

    /// Same configuration, empty session.
    pub fn new_session(&self) -> Result<Self, ApiError> {
        Self::new(self.config.clone())
    }
}
