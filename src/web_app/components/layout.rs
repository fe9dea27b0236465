// web_app/components/layout.rs - Page chrome: navbar, footer, WhatsApp button

use chrono::Datelike;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::web_app::content::{is_active_link, BRAND_NAME, BRAND_TAGLINE, NAV_LINKS, WHATSAPP_GREETING};
use crate::web_app::context::{use_app_context, use_store};
use crate::web_app::hooks::{ActionOptions, AsyncAction};
use crate::web_app::model::CompanyDetails;
use crate::web_app::ui::links::whatsapp_link;

/// Top navigation with a collapsible menu on small screens
#[component]
pub fn Navbar() -> impl IntoView {
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    // Close the mobile menu after navigating
    Effect::new(move |_| {
        pathname.track();
        menu_open.set(false);
    });

    let links = move || {
        NAV_LINKS
            .iter()
            .map(|link| {
                let href = link.href;
                view! {
                    <A
                        href=href
                        attr:class=move || {
                            if pathname.with(|path| is_active_link(href, path)) {
                                "px-3 py-2 rounded-md text-amber-700 font-semibold"
                            } else {
                                "px-3 py-2 rounded-md text-stone-700 hover:text-amber-700 font-medium"
                            }
                        }
                    >
                        {link.label}
                    </A>
                }
            })
            .collect_view()
    };

    view! {
        <header class="bg-white/95 backdrop-blur shadow-sm sticky top-0 z-40 border-b border-stone-200">
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 h-16 flex items-center justify-between">
                <A href="/" attr:class="flex items-center gap-2">
                    <span class="text-2xl">"🌸"</span>
                    <span class="text-xl font-serif font-bold text-amber-800">{BRAND_NAME}</span>
                </A>

                <div class="hidden md:flex items-center gap-1">{links}</div>

                <button
                    type="button"
                    class="md:hidden p-2 rounded-md text-stone-700 hover:bg-stone-100"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </nav>

            <Show when=move || menu_open.get()>
                <div class="md:hidden flex flex-col px-4 pb-4 gap-1 border-t border-stone-100">{links}</div>
            </Show>
        </header>
    }
}

/// Site footer fed by `GET /company-details`
///
/// Falls back to the static brand copy until (or unless) the details load.
#[component]
pub fn Footer() -> impl IntoView {
    let context = use_app_context();
    let action = AsyncAction::<CompanyDetails>::new(None, ActionOptions::default());
    let details = use_store(action.store());

    let api = context.api.clone();
    Effect::new(move |_| {
        let action = action.clone();
        let api = api.clone();
        spawn_local(async move {
            let _ = action.execute(|| async move { api.get_company_details().await }).await;
        });
    });

    let company = move || details.with(|s| s.data.clone()).unwrap_or_default();
    let year = chrono::Utc::now().year();

    view! {
        <footer class="bg-stone-900 text-stone-300 mt-16">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12 grid grid-cols-1 md:grid-cols-4 gap-10">
                <div class="md:col-span-2 space-y-3">
                    <h3 class="text-xl font-serif font-bold text-white">
                        {move || {
                            let name = company().company_name;
                            if name.is_empty() { BRAND_NAME.to_string() } else { name }
                        }}
                    </h3>
                    <p class="text-sm leading-relaxed">
                        {move || {
                            let about = company().footer.about;
                            if about.is_empty() { BRAND_TAGLINE.to_string() } else { about }
                        }}
                    </p>
                    <div class="flex gap-3 pt-2">
                        {move || company().social_links.entries().into_iter().map(|(label, href)| view! {
                            <a href=href.to_string() target="_blank" rel="noopener noreferrer" class="text-sm hover:text-amber-400">
                                {label}
                            </a>
                        }).collect_view()}
                    </div>
                </div>

                <div>
                    <h4 class="text-white font-semibold mb-3">"Quick Links"</h4>
                    <ul class="space-y-2 text-sm">
                        {move || {
                            let quick_links = company().footer.quick_links;
                            if quick_links.is_empty() {
                                NAV_LINKS.iter().map(|link| view! {
                                    <li><A href=link.href attr:class="hover:text-amber-400">{link.label}</A></li>
                                }).collect_view().into_any()
                            } else {
                                quick_links.into_iter().map(|link| view! {
                                    <li><a href=link.href class="hover:text-amber-400">{link.label}</a></li>
                                }).collect_view().into_any()
                            }
                        }}
                    </ul>
                </div>

                <div class="space-y-2 text-sm">
                    <h4 class="text-white font-semibold mb-3">"Contact"</h4>
                    {move || {
                        let company = company();
                        view! {
                            {(!company.email.is_empty()).then(|| view! { <p>{company.email.clone()}</p> })}
                            <p>{company.phone.clone()}</p>
                            <p class="whitespace-pre-line">{company.address.clone()}</p>
                            <ul class="pt-2 space-y-1">
                                {company.business_hours.iter().map(|hours| view! {
                                    <li class="flex justify-between gap-4">
                                        <span>{hours.day.clone()}</span>
                                        <span>{hours.display()}</span>
                                    </li>
                                }).collect_view()}
                            </ul>
                        }
                    }}
                </div>
            </div>
            <div class="border-t border-stone-800 py-6 text-center text-xs text-stone-500">
                {move || company().footer.copyright.unwrap_or_else(|| format!("© {} {}. All rights reserved.", year, BRAND_NAME))}
            </div>
        </footer>
    }
}

/// Floating "chat on WhatsApp" button
#[component]
pub fn WhatsAppButton(
    number: String,
    #[prop(default = WHATSAPP_GREETING)]
    message: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=whatsapp_link(&number, message)
            target="_blank"
            rel="noopener noreferrer"
            aria-label="Chat on WhatsApp"
            class="fixed bottom-6 right-6 z-40 w-14 h-14 rounded-full bg-green-500 hover:bg-green-600 text-white text-2xl shadow-lg flex items-center justify-center"
        >
            "💬"
        </a>
    }
}
