//! Linear navigation stack.
//!
//! Screens are pushed and popped; nothing is shared between them except the
//! parameters carried by a [`Route`]. Each mounted route owns a
//! [`CancellationToken`] that is cancelled when the route is popped, so a
//! request started by an unmounted screen never delivers its response.

use tokio_util::sync::CancellationToken;
use tracing::debug;

use dormhub_models::{DormId, SchoolId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    StudentLogin,
    AdminLogin,
    Dorms,
    Rooms { dorm_id: DormId, dorm_name: String },
    AdminDashboard { school_id: SchoolId, school_name: String },
}

impl Route {
    pub fn title(&self) -> String {
        match self {
            Self::StudentLogin => "Login".to_string(),
            Self::AdminLogin => "Admin Login".to_string(),
            Self::Dorms => "Dorms".to_string(),
            Self::Rooms { dorm_name, .. } => format!("{} Rooms", dorm_name),
            Self::AdminDashboard { school_name, .. } => format!("Admin Dashboard - {}", school_name),
        }
    }

    /// Login routes start a new identity when they are returned to.
    pub fn is_login(&self) -> bool {
        matches!(self, Self::StudentLogin | Self::AdminLogin)
    }
}

#[derive(Debug)]
struct Mounted {
    route: Route,
    scope: CancellationToken,
}

#[derive(Debug)]
pub struct Navigator {
    root: Mounted,
    stack: Vec<Mounted>,
}

impl Navigator {
    /// Creates a stack with `root` mounted. The root is never popped.
    pub fn new(root: Route) -> Self {
        Self {
            root: Mounted {
                route: root,
                scope: CancellationToken::new(),
            },
            stack: Vec::new(),
        }
    }

    /// Mounts `route` on top of the stack and returns its scope.
    pub fn push(&mut self, route: Route) -> CancellationToken {
        debug!(route = ?route, depth = self.depth() + 1, "Push screen");
        let scope = CancellationToken::new();
        self.stack.push(Mounted {
            route,
            scope: scope.clone(),
        });
        scope
    }

    /// Unmounts the top route, cancelling its scope.
    ///
    /// Returns `None` when only the root is mounted.
    pub fn pop(&mut self) -> Option<Route> {
        let mounted = self.stack.pop()?;
        mounted.scope.cancel();
        debug!(route = ?mounted.route, depth = self.depth(), "Pop screen");
        Some(mounted.route)
    }

    pub fn current(&self) -> &Route {
        &self.top().route
    }

    /// Scope of the current route.
    pub fn scope(&self) -> CancellationToken {
        self.top().scope.clone()
    }

    pub fn depth(&self) -> usize {
        self.stack.len() + 1
    }

    fn top(&self) -> &Mounted {
        self.stack.last().unwrap_or(&self.root)
    }
}
