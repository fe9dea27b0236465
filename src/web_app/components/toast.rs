// web_app/components/toast.rs - Renders the toast queue

use std::time::Duration;

use leptos::prelude::*;
use uuid::Uuid;

use crate::web_app::context::{use_app_context, use_store};
use crate::web_app::hooks::TOAST_TIMEOUT_MS;

/// Stack of notifications in the bottom-right corner
///
/// Each toast is dismissed after `TOAST_TIMEOUT_MS` or when clicked.
#[component]
pub fn Toaster() -> impl IntoView {
    let queue = use_app_context().toasts;
    let toasts = use_store(queue.store());

    let scheduled = StoredValue::new(Vec::<Uuid>::new());
    let timer_queue = queue.clone();
    Effect::new(move |_| {
        let current = toasts.get();
        scheduled.update_value(|ids| ids.retain(|id| current.iter().any(|t| t.id == *id)));
        for toast in current {
            if scheduled.with_value(|ids| ids.contains(&toast.id)) {
                continue;
            }
            scheduled.update_value(|ids| ids.push(toast.id));
            let queue = timer_queue.clone();
            set_timeout(move || queue.dismiss(toast.id), Duration::from_millis(TOAST_TIMEOUT_MS));
        }
    });

    view! {
        <div class="fixed bottom-24 right-6 z-50 flex flex-col gap-3 w-80" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                let:toast
            >
                {
                    let queue = queue.clone();
                    view! {
                        <div class=format!("{} rounded-lg shadow-lg px-4 py-3 flex items-start gap-3", toast.level.class())>
                            <p class="flex-1 text-sm font-medium">{toast.message.clone()}</p>
                            <button
                                type="button"
                                class="opacity-80 hover:opacity-100"
                                title="Dismiss"
                                on:click=move |_| queue.dismiss(toast.id)
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            </For>
        </div>
    }
}
