// web_app/hooks/mod.rs - Reusable client-side behaviour
//
// - use_api.rs: AsyncAction, the generic loading/error/data wrapper around
//   any async call, with optional toast notifications
// - notify.rs: the Notifier seam and the ToastQueue that renders toasts

mod notify;
mod use_api;

pub use notify::{Notifier, Toast, ToastLevel, ToastQueue, TOAST_TIMEOUT_MS};
pub use use_api::{use_api, ActionOptions, ActionState, AsyncAction};
