use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::web_app::state::Store;

/// How long a toast stays on screen before auto-dismissal
pub const TOAST_TIMEOUT_MS: u64 = 4000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToastLevel {
    Success,
    Error,
    Info,
}

impl ToastLevel {
    pub fn class(&self) -> &'static str {
        match self {
            ToastLevel::Success => "bg-green-600 text-white",
            ToastLevel::Error => "bg-red-600 text-white",
            ToastLevel::Info => "bg-amber-700 text-white",
        }
    }
}

/// Anything that can surface a user-visible notification
pub trait Notifier: Send + Sync {
    fn notify(&self, level: ToastLevel, message: &str);

    fn success(&self, message: &str) {
        self.notify(ToastLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(ToastLevel::Error, message);
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: Uuid,
    pub level: ToastLevel,
    pub message: String,
}

/// Queue of visible toasts, rendered by the `Toaster` component
#[derive(Clone, Default)]
pub struct ToastQueue {
    store: Store<Vec<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn store(&self) -> &Store<Vec<Toast>> {
        &self.store
    }

    /// Push a toast and return its id so the caller can schedule dismissal
    pub fn push(&self, level: ToastLevel, message: impl Into<String>) -> Uuid {
        let toast = Toast {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
        };
        let id = toast.id;
        self.store.update(|toasts| toasts.push(toast));
        id
    }

    pub fn dismiss(&self, id: Uuid) {
        self.store.update(|toasts| toasts.retain(|t| t.id != id));
    }

    pub fn toasts(&self) -> Vec<Toast> {
        self.store.snapshot()
    }
}

impl Notifier for ToastQueue {
    fn notify(&self, level: ToastLevel, message: &str) {
        match level {
            ToastLevel::Error => tracing::warn!("{}", message),
            _ => tracing::debug!("{}", message),
        }
        self.push(level, message);
    }
}
