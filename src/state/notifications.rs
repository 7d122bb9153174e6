//! Transient user notifications

use std::collections::VecDeque;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// A message for the user with an optional second line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub title: String,
    pub detail: Option<String>,
}

impl Notification {
    pub fn info(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            title: title.into(),
            detail: None,
        }
    }

    pub fn success(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Success,
            ..Self::info(title)
        }
    }

    pub fn error(title: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            ..Self::info(title)
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Single-line rendering, `title: detail`
    pub fn text(&self) -> String {
        match &self.detail {
            Some(detail) => format!("{}: {}", self.title, detail),
            None => self.title.clone(),
        }
    }
}

/// Anything that can show a notification to the user
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSurface {
    fn notify(&mut self, notification: Notification);
}

/// Status-bar notification that disappears after a while
#[derive(Debug, Clone)]
pub struct Toast {
    pub notification: Notification,
    pub shown_at: Instant,
}

impl Toast {
    /// How long a toast stays in the status bar
    pub const LIFETIME: Duration = Duration::from_secs(4);

    pub fn new(notification: Notification) -> Self {
        Self {
            notification,
            shown_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.shown_at.elapsed() >= Self::LIFETIME
    }
}

/// Pending error dialogs and the current toast
#[derive(Debug, Clone, Default)]
pub struct Notices {
    errors: VecDeque<Notification>,
    pub toast: Option<Toast>,
}

impl Notices {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Error shown in the dialog, oldest first
    pub fn current_error(&self) -> Option<&Notification> {
        self.errors.front()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Drop the toast once it has been shown long enough
    pub fn expire_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

impl NotificationSurface for Notices {
    fn notify(&mut self, notification: Notification) {
        match notification.severity {
            Severity::Error => self.errors.push_back(notification),
            Severity::Info | Severity::Success => self.toast = Some(Toast::new(notification)),
        }
    }
}
