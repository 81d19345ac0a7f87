use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

use dormhub_client::ApiClient;
use dormhub_core::{ApiError, RequestState};
use dormhub_models::{Dorm, User};

use crate::navigation::Route;
use crate::notice::{Notice, Outcome};

use super::service::{DormService, FETCH_DORMS_FAILED};

/// Dorm list screen.
#[derive(Debug)]
pub struct DormsScreen {
    dorms: Vec<Dorm>,
    user: Option<User>,
    loaded: bool,
    fetch: RequestState,
    profile: RequestState,
    scope: CancellationToken,
}

impl DormsScreen {
    pub fn new(scope: CancellationToken) -> Self {
        Self {
            dorms: Vec::new(),
            user: None,
            loaded: false,
            fetch: RequestState::new(),
            profile: RequestState::new(),
            scope,
        }
    }

    pub fn dorms(&self) -> &[Dorm] {
        &self.dorms
    }

    /// The logged-in user, once [`DormsScreen::load_profile`] has succeeded.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a dorm list has been fetched since mount.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_pending()
    }

    pub async fn load(&mut self, client: &ApiClient) -> Outcome {
        match self.fetch.run(&self.scope, DormService::list(client)).await {
            Ok(dorms) => {
                self.dorms = dorms;
                self.loaded = true;
                Outcome::none()
            }
            Err(ApiError::Cancelled) => Outcome::none(),
            Err(err) => {
                error!(error = %err, "Failed to fetch dorms");
                Outcome::notice(Notice::error(err.user_message(FETCH_DORMS_FAILED)))
            }
        }
    }

    /// Fetches the logged-in user for the screen header. Failures only
    /// hide the header, so they are logged and not surfaced.
    pub async fn load_profile(&mut self, client: &ApiClient) {
        match self
            .profile
            .run(&self.scope, DormService::current_user(client))
            .await
        {
            Ok(user) => self.user = Some(user),
            Err(err) => debug!(error = %err, "Current user unavailable"),
        }
    }

    /// Route to the room list of the dorm at `index`.
    pub fn select(&self, index: usize) -> Option<Route> {
        self.dorms.get(index).map(Self::route_for)
    }

    pub fn route_for(dorm: &Dorm) -> Route {
        debug!(dorm_id = %dorm.id, dorm = %dorm.name, "Selected dorm");
        Route::Rooms {
            dorm_id: dorm.id.clone(),
            dorm_name: dorm.name.clone(),
        }
    }
}
