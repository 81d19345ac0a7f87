//! Reqwest-backed API client.
//!
//! This client owns transport details only: URL building, JSON encoding,
//! cookie forwarding through the [`Session`], and mapping of HTTP failures
//! to [`ApiError`]. Each call makes exactly one attempt with no timeout;
//! callers re-invoke when they want fresh data.

use reqwest::{Client, Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, error, warn};
use uuid::Uuid;

use dormhub_config::ApiConfig;
use dormhub_core::ApiError;

use crate::session::Session;

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    config: ApiConfig,
    session: Session,
}

impl ApiClient {
    /// Builds a client that forwards the cookies held by `session`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the reqwest client cannot be
    /// constructed.
    pub fn new(config: &ApiConfig, session: Session) -> Result<Self, ApiError> {
        let http = Client::builder()
            .cookie_provider(session.jar())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ApiError::Transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            config: config.clone(),
            session,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Whether the server has set a session cookie for the API base URL.
    pub fn has_session(&self) -> bool {
        Url::parse(&self.config.url(""))
            .map(|url| self.session.is_established(&url))
            .unwrap_or(false)
    }

    pub async fn get<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::GET, path, None).await
    }

    pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.request(Method::POST, path, Some(body)).await
    }

    /// POST without a request body.
    pub async fn post_empty<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        self.request::<T, ()>(Method::POST, path, None).await
    }

    /// Issues one request to `{base_url}{path}` and decodes the JSON body.
    ///
    /// An empty success body decodes as JSON `null`, so callers expecting
    /// an optional payload can ask for `Option<T>`.
    pub async fn request<T, B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.url(path);
        let request_id = Uuid::new_v4();

        debug!(
            request_id = %request_id,
            session_id = %self.session.id(),
            method = %method,
            url = %url,
            "Outgoing request"
        );

        let mut builder = self.http.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            error!(request_id = %request_id, method = %method, url = %url, error = %e, "Request failed");
            ApiError::Transport(e.to_string())
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            error!(request_id = %request_id, url = %url, error = %e, "Failed to read response body");
            ApiError::Transport(e.to_string())
        })?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &bytes);
            warn!(
                request_id = %request_id,
                method = %method,
                url = %url,
                status = %status.as_u16(),
                error = %err,
                "Server rejected request"
            );
            return Err(err);
        }

        debug!(
            request_id = %request_id,
            status = %status.as_u16(),
            bytes = bytes.len(),
            "Request completed"
        );

        decode(&bytes).map_err(|e| {
            warn!(request_id = %request_id, url = %url, error = %e, "Undecodable response body");
            e
        })
    }
}

fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    let body = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    Ok(serde_json::from_slice(body)?)
}
