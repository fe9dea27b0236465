// web_app/pages/not_found.rs - Fallback route

use leptos::prelude::*;
use leptos_meta::Title;

use crate::web_app::components::NotFoundView;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <NotFoundView />
    }
}
