//! Explicit per-identity session.
//!
//! The server establishes a session by setting cookies on the login
//! response. A [`Session`] owns the cookie jar that holds them and is handed
//! to [`ApiClient::new`](crate::ApiClient::new), so the credential context
//! lives exactly as long as the client built for one logged-in identity.
//! Logging in as someone else means building a new session.

use std::sync::Arc;

use reqwest::Url;
use reqwest::cookie::{CookieStore, Jar};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    jar: Arc<Jar>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an empty session with no cookies.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            jar: Arc::new(Jar::default()),
        }
    }

    /// Local identifier used to correlate log lines for this session.
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub(crate) fn jar(&self) -> Arc<Jar> {
        Arc::clone(&self.jar)
    }

    /// Whether the server has set any cookie applicable to `url`.
    pub fn is_established(&self, url: &Url) -> bool {
        self.jar.cookies(url).is_some()
    }
}
