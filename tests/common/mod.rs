//! In-process mock of the dorm API.
//!
//! Every request is recorded so tests can assert which endpoints were (and
//! were not) called. Replies are scripted per `(method, path)`; the last
//! scripted reply for a route repeats.

use std::collections::{HashMap, VecDeque};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use dormhub::state::AppState;
use dormhub_client::{ApiClient, Session};
use dormhub_config::ApiConfig;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::sync::Notify;

pub const SESSION_COOKIE: &str = "connect.sid=s%3Atest-session";

#[allow(dead_code)]
#[derive(Debug, Clone)]
pub struct Recorded {
    pub method: String,
    pub path: String,
    pub body: Option<Value>,
    pub cookie: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Reply {
    status: StatusCode,
    body: Option<Value>,
    set_cookie: Option<String>,
    gate: Option<Arc<Notify>>,
}

#[allow(dead_code)]
impl Reply {
    pub fn ok(body: Value) -> Self {
        Self::status(200, body)
    }

    pub fn status(code: u16, body: Value) -> Self {
        Self {
            status: StatusCode::from_u16(code).unwrap(),
            body: Some(body),
            set_cookie: None,
            gate: None,
        }
    }

    pub fn error(code: u16, message: &str) -> Self {
        Self::status(code, json!({ "error": message }))
    }

    /// A reply with no body at all.
    pub fn empty(code: u16) -> Self {
        Self {
            body: None,
            ..Self::status(code, Value::Null)
        }
    }

    pub fn with_session_cookie(mut self) -> Self {
        self.set_cookie = Some(format!("{}; Path=/; HttpOnly", SESSION_COOKIE));
        self
    }

    /// Holds the reply until `gate` is notified.
    pub fn gated(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }
}

#[derive(Default)]
struct Inner {
    replies: HashMap<(String, String), VecDeque<Reply>>,
    requests: Vec<Recorded>,
}

#[derive(Clone)]
pub struct MockApi {
    addr: SocketAddr,
    inner: Arc<Mutex<Inner>>,
}

#[allow(dead_code)]
impl MockApi {
    pub async fn start() -> Self {
        let inner = Arc::new(Mutex::new(Inner::default()));
        let app = Router::new().fallback(handle).with_state(Arc::clone(&inner));

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, inner }
    }

    /// Scripts the next reply for `method path` (path without `/api`).
    pub fn on(&self, method: &str, path: &str, reply: Reply) -> &Self {
        self.inner
            .lock()
            .unwrap()
            .replies
            .entry((method.to_string(), path.to_string()))
            .or_default()
            .push_back(reply);
        self
    }

    pub fn config(&self) -> ApiConfig {
        ApiConfig::default().with_base_url(format!("http://{}/api", self.addr))
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&self.config(), Session::new()).unwrap()
    }

    pub fn state(&self) -> AppState {
        AppState::new(self.config()).unwrap()
    }

    pub fn requests(&self) -> Vec<Recorded> {
        self.inner.lock().unwrap().requests.clone()
    }

    /// `"METHOD /path"` for every request, in arrival order.
    pub fn calls(&self) -> Vec<String> {
        self.requests()
            .into_iter()
            .map(|r| format!("{} {}", r.method, r.path))
            .collect()
    }

    pub fn count(&self, method: &str, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .count()
    }

    pub fn last(&self, method: &str, path: &str) -> Option<Recorded> {
        self.requests()
            .into_iter()
            .rev()
            .find(|r| r.method == method && r.path == path)
    }

    /// Waits until `method path` has been received at least once.
    pub async fn wait_for(&self, method: &str, path: &str) {
        tokio::time::timeout(Duration::from_secs(5), async {
            while self.count(method, path) == 0 {
                tokio::time::sleep(Duration::from_millis(5)).await;
            }
        })
        .await
        .unwrap_or_else(|_| panic!("{} {} was never requested", method, path));
    }
}

async fn handle(
    State(inner): State<Arc<Mutex<Inner>>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let path = uri
        .path()
        .strip_prefix("/api")
        .unwrap_or(uri.path())
        .to_string();
    let key = (method.to_string(), path.clone());

    let reply = {
        let mut inner = inner.lock().unwrap();
        inner.requests.push(Recorded {
            method: method.to_string(),
            path: path.clone(),
            body: serde_json::from_slice(&body).ok(),
            cookie: headers
                .get(header::COOKIE)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
        });
        inner.replies.get_mut(&key).and_then(|queue| {
            if queue.len() > 1 {
                queue.pop_front()
            } else {
                queue.front().cloned()
            }
        })
    };

    let Some(reply) = reply else {
        return (
            StatusCode::NOT_FOUND,
            axum::Json(json!({ "error": format!("No route for {} {}", method, path) })),
        )
            .into_response();
    };

    if let Some(gate) = &reply.gate {
        gate.notified().await;
    }

    let mut response = match reply.body {
        Some(body) => (reply.status, axum::Json(body)).into_response(),
        None => reply.status.into_response(),
    };
    if let Some(cookie) = reply.set_cookie {
        response
            .headers_mut()
            .insert(header::SET_COOKIE, cookie.parse().unwrap());
    }
    response
}

#[allow(dead_code)]
pub fn room(id: &str, number: &str, capacity: u32, occupants: &[&str]) -> Value {
    json!({
        "_id": { "$oid": id },
        "dorm_id": { "$oid": "d1" },
        "number": number,
        "capacity": capacity,
        "current_students": occupants
            .iter()
            .map(|name| json!({ "name": name }))
            .collect::<Vec<_>>()
    })
}

#[allow(dead_code)]
pub fn dorm(id: &str, name: &str) -> Value {
    json!({ "_id": { "$oid": id }, "name": name })
}
