use tracing::{debug, instrument};

use dormhub_client::ApiClient;
use dormhub_core::ApiError;
use dormhub_models::{Dorm, User};

pub const FETCH_DORMS_FAILED: &str = "Failed to fetch dorms";

pub struct DormService;

impl DormService {
    /// Lists the dorms of the school the session belongs to.
    #[instrument(skip(client))]
    pub async fn list(client: &ApiClient) -> Result<Vec<Dorm>, ApiError> {
        let dorms = client.list_dorms().await?;
        debug!(count = dorms.len(), "Fetched dorms");
        Ok(dorms)
    }

    #[instrument(skip(client))]
    pub async fn current_user(client: &ApiClient) -> Result<User, ApiError> {
        client.current_user().await
    }
}
