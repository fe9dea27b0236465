use std::future::Future;
use std::sync::Arc;

use super::Notifier;
use crate::web_app::error::ActionError;
use crate::web_app::state::{Store, Subscription};

/// `{data, loading, error}` slots shared by every call of one action
#[derive(Clone, Debug, PartialEq)]
pub struct ActionState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<ActionError>,
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

type SuccessHook<T> = Arc<dyn Fn(&T) + Send + Sync>;
type ErrorHook = Arc<dyn Fn(&ActionError) + Send + Sync>;

/// Callbacks and toast messages for an [`AsyncAction`]
pub struct ActionOptions<T> {
    pub on_success: Option<SuccessHook<T>>,
    pub on_error: Option<ErrorHook>,
    /// Shown on success; no success toast when unset
    pub success_message: Option<String>,
    /// Shown on failure instead of the error's own message
    pub error_message: Option<String>,
}

impl<T> Default for ActionOptions<T> {
    fn default() -> Self {
        Self {
            on_success: None,
            on_error: None,
            success_message: None,
            error_message: None,
        }
    }
}

impl<T> Clone for ActionOptions<T> {
    fn clone(&self) -> Self {
        Self {
            on_success: self.on_success.clone(),
            on_error: self.on_error.clone(),
            success_message: self.success_message.clone(),
            error_message: self.error_message.clone(),
        }
    }
}

impl<T> ActionOptions<T> {
    pub fn success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = Some(message.into());
        self
    }

    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    pub fn on_success(mut self, hook: impl Fn(&T) + Send + Sync + 'static) -> Self {
        self.on_success = Some(Arc::new(hook));
        self
    }

    pub fn on_error(mut self, hook: impl Fn(&ActionError) + Send + Sync + 'static) -> Self {
        self.on_error = Some(Arc::new(hook));
        self
    }
}

/// Wraps any async call with loading/error/data state and notifications
///
/// Calls are not de-duplicated, retried or cancelled: overlapping calls
/// write the same slots and the last one to finish wins.
pub struct AsyncAction<T> {
    state: Store<ActionState<T>>,
    options: ActionOptions<T>,
    notifier: Option<Arc<dyn Notifier>>,
}

impl<T> Clone for AsyncAction<T> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            options: self.options.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<T: Clone + Send + Sync + 'static> AsyncAction<T> {
    pub fn new(notifier: Option<Arc<dyn Notifier>>, options: ActionOptions<T>) -> Self {
        Self {
            state: Store::default(),
            options,
            notifier,
        }
    }

    pub fn state(&self) -> ActionState<T> {
        self.state.snapshot()
    }

    pub fn store(&self) -> &Store<ActionState<T>> {
        &self.state
    }

    pub fn data(&self) -> Option<T> {
        self.state.with(|s| s.data.clone())
    }

    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading)
    }

    pub fn error(&self) -> Option<ActionError> {
        self.state.with(|s| s.error.clone())
    }

    pub fn subscribe(&self, listener: impl Fn(&ActionState<T>) + Send + Sync + 'static) -> Subscription {
        self.state.subscribe(listener)
    }

    /// Run `call`, recording its outcome
    ///
    /// `loading` is true for exactly the duration of the call. A failure is
    /// coerced into an `ActionError`, stored, shown as a toast, passed to
    /// `on_error`, and then returned to the caller.
    pub async fn execute<F, Fut, E>(&self, call: F) -> Result<T, ActionError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Into<ActionError>,
    {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        match call().await.map_err(Into::into) {
            Ok(data) => {
                self.state.update(|s| {
                    s.data = Some(data.clone());
                    s.loading = false;
                });
                if let (Some(notifier), Some(message)) = (&self.notifier, &self.options.success_message) {
                    notifier.success(message);
                }
                if let Some(hook) = &self.options.on_success {
                    hook(&data);
                }
                Ok(data)
            }
            Err(err) => {
                self.state.update(|s| {
                    s.error = Some(err.clone());
                    s.loading = false;
                });
                if let Some(notifier) = &self.notifier {
                    let message = self.options.error_message.as_deref().unwrap_or(&err.message);
                    notifier.error(message);
                }
                if let Some(hook) = &self.options.on_error {
                    hook(&err);
                }
                Err(err)
            }
        }
    }

    pub fn reset(&self) {
        self.state.update(|s| *s = ActionState::default());
    }
}

/// Create an action that reports through `notifier`
pub fn use_api<T: Clone + Send + Sync + 'static>(
    notifier: Arc<dyn Notifier>,
    options: ActionOptions<T>,
) -> AsyncAction<T> {
    AsyncAction::new(Some(notifier), options)
}
