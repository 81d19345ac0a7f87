//! What an action reports back to the presentation layer.

use crate::navigation::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A blocking message shown to the user after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

/// Result of a screen action: notices to show, and where to go next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub notices: Vec<Notice>,
    pub navigate: Option<Route>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            notices: vec![notice],
            navigate: None,
        }
    }

    pub fn navigate(route: Route) -> Self {
        Self {
            notices: Vec::new(),
            navigate: Some(route),
        }
    }

    pub fn push(&mut self, notice: Notice) {
        self.notices.push(notice);
    }

    pub fn extend(&mut self, other: Outcome) {
        self.notices.extend(other.notices);
        if other.navigate.is_some() {
            self.navigate = other.navigate;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.notices.is_empty() && self.navigate.is_none()
    }

    /// First error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.notices
            .iter()
            .find(|n| n.is_error())
            .map(|n| n.message.as_str())
    }

    /// First informational message, if any.
    pub fn info(&self) -> Option<&str> {
        self.notices
            .iter()
            .find(|n| !n.is_error())
            .map(|n| n.message.as_str())
    }
}
