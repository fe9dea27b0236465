// web_app/components/common.rs - Reusable UI components
//
// Small, composable components used throughout the storefront.
// They are stateless and receive all data via props.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::web_app::model::Pagination as PageInfo;
use crate::web_app::ui::format::star_counts;

/// Loading spinner component
///
/// Displays a centered spinner with optional message.
#[component]
pub fn Loading(
    /// Optional message to display below the spinner
    #[prop(default = "Loading...")]
    message: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center p-12">
            <div class="animate-spin rounded-full h-10 w-10 border-4 border-amber-100 border-t-amber-600"></div>
            <span class="mt-4 text-stone-500 font-medium animate-pulse">{message}</span>
        </div>
    }
}

/// Error display component
///
/// Shows the error message and, when `on_retry` is given, a retry button.
#[component]
pub fn ErrorDisplay(
    /// The error message to display
    error: String,
    /// Called when the user asks to try again
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="bg-red-50 border border-red-200 rounded-xl p-6 flex items-start gap-4">
            <div class="bg-red-100 p-2 rounded-full text-red-600">
                <span class="text-xl font-bold">"⚠"</span>
            </div>
            <div class="flex-1">
                <h3 class="text-red-800 font-bold mb-1">"Something went wrong"</h3>
                <p class="text-red-600 text-sm">{error}</p>
                {on_retry.map(|retry| view! {
                    <button
                        type="button"
                        class="mt-3 text-sm font-semibold text-red-700 underline hover:text-red-900"
                        on:click=move |_| retry.run(())
                    >
                        "Try again"
                    </button>
                })}
            </div>
        </div>
    }
}

/// Notice shown above results that are still on screen after a failed refresh
#[component]
pub fn RefreshErrorBanner(
    #[prop(into)]
    error: Signal<Option<String>>,
    on_retry: Callback<()>,
) -> impl IntoView {
    move || {
        error.get().map(|error| view! {
            <div class="mb-6 flex items-center justify-between gap-4 rounded-lg border border-amber-200 bg-amber-50 px-4 py-3 text-sm" role="alert">
                <span class="text-amber-900">
                    "Showing earlier results. " {error}
                </span>
                <button
                    type="button"
                    class="font-semibold text-amber-800 underline hover:text-amber-950"
                    on:click=move |_| on_retry.run(())
                >
                    "Try again"
                </button>
            </div>
        })
    }
}

/// Primary button component
#[component]
pub fn Button(
    /// Button label text
    children: Children,
    /// Click handler
    #[prop(optional)]
    on_click: Option<Callback<()>>,
    /// Whether the button is disabled
    #[prop(into, default = Signal::stored(false))]
    disabled: Signal<bool>,
    /// Button type (submit, button, reset)
    #[prop(default = "button")]
    button_type: &'static str,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "px-5 py-2.5 bg-amber-600 text-white rounded-lg hover:bg-amber-700 \
                      transition-colors disabled:bg-stone-400 disabled:cursor-not-allowed \
                      font-semibold shadow-sm active:transform active:scale-95";

    view! {
        <button
            type=button_type
            disabled=move || disabled.get()
            class=format!("{} {}", base_class, class)
            on:click=move |_| {
                if let Some(handler) = on_click {
                    handler.run(());
                }
            }
        >
            {children()}
        </button>
    }
}

pub fn badge_class(variant: &str) -> &'static str {
    match variant {
        "green" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-green-100 text-green-800 border border-green-200",
        "red" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-red-100 text-red-800 border border-red-200",
        "amber" => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-amber-100 text-amber-800 border border-amber-200",
        _ => "px-2.5 py-0.5 text-xs font-medium rounded-full bg-stone-100 text-stone-800 border border-stone-200",
    }
}

/// Badge component
///
/// A small badge/tag for displaying labels.
#[component]
pub fn Badge(
    children: Children,
    /// Badge color variant
    #[prop(default = "gray")]
    variant: &'static str,
) -> impl IntoView {
    view! {
        <span class=badge_class(variant)>
            {children()}
        </span>
    }
}

/// Star rating display component
///
/// Displays a star rating (0-5) with filled, half and empty stars.
#[component]
pub fn StarRating(
    /// The rating value (0.0 to 5.0)
    rating: f64,
    /// Whether to show the numeric value
    #[prop(default = true)]
    show_value: bool,
) -> impl IntoView {
    let stars = star_counts(rating);

    view! {
        <div class="flex items-center gap-0.5" title=format!("Rating: {:.1}", rating)>
            {(0..stars.full).map(|_| view! {
                <span class="text-amber-400 text-lg">"★"</span>
            }).collect_view()}

            {stars.half.then(|| view! {
                <div class="relative inline-block text-lg">
                    <span class="text-stone-200">"★"</span>
                    <span class="absolute top-0 left-0 overflow-hidden w-1/2 text-amber-400">"★"</span>
                </div>
            })}

            {(0..stars.empty).map(|_| view! {
                <span class="text-stone-200 text-lg">"★"</span>
            }).collect_view()}

            <Show when=move || show_value>
                <span class="ml-2 text-sm font-bold text-stone-700 bg-stone-100 px-1.5 py-0.5 rounded">
                    {format!("{:.1}", rating)}
                </span>
            </Show>
        </div>
    }
}

/// Text input bound to a signal
#[component]
pub fn TextInput(
    /// The current value
    value: RwSignal<String>,
    /// Placeholder text
    #[prop(default = "")]
    placeholder: &'static str,
    /// Input type (text, search, email, etc.)
    #[prop(default = "text")]
    input_type: &'static str,
    /// Form field name
    #[prop(default = "")]
    name: &'static str,
    #[prop(default = false)]
    required: bool,
    /// Additional CSS classes
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let base_class = "w-full px-4 py-2 border border-stone-300 rounded-lg \
                      focus:ring-2 focus:ring-amber-500 focus:border-transparent \
                      outline-none transition-shadow shadow-sm";

    view! {
        <input
            type=input_type
            name=name
            placeholder=placeholder
            required=required
            class=format!("{} {}", base_class, class)
            prop:value=move || value.get()
            on:input=move |ev| {
                value.set(event_target_value(&ev));
            }
        />
    }
}

/// Select dropdown for string values
///
/// `options` are (value, label) pairs; an empty value means "all".
#[component]
pub fn SelectString(
    /// The currently selected value
    #[prop(into)]
    value: Signal<String>,
    /// Available options as (value, label) pairs
    #[prop(into)]
    options: Signal<Vec<(String, String)>>,
    /// Called with the newly selected value
    on_change: Callback<String>,
) -> impl IntoView {
    let class = "px-4 py-2 border border-stone-300 rounded-lg bg-white \
                 focus:ring-2 focus:ring-amber-500 focus:border-transparent \
                 outline-none cursor-pointer shadow-sm";

    view! {
        <select
            class=class
            on:change=move |ev| on_change.run(event_target_value(&ev))
        >
            {move || options.get().into_iter().map(|(opt_value, label)| {
                let opt_val = opt_value.clone();
                view! {
                    <option
                        value=opt_value
                        selected=move || value.get() == opt_val
                    >
                        {label}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}

/// Previous / next pager driven by the server's pagination block
#[component]
pub fn Pagination(
    #[prop(into)]
    pagination: Signal<PageInfo>,
    /// Called with the 1-based page to load
    on_page: Callback<u32>,
) -> impl IntoView {
    let go_prev = move |_| {
        let page = pagination.get();
        if page.has_previous() {
            on_page.run(page.current_page - 1);
        }
    };

    let go_next = move |_| {
        let page = pagination.get();
        if page.has_next() {
            on_page.run(page.current_page + 1);
        }
    };

    let button_class = "px-4 py-2 bg-white border border-stone-200 rounded-lg shadow-sm \
                        disabled:opacity-50 disabled:cursor-not-allowed \
                        hover:bg-stone-50 hover:border-stone-300 transition-all font-medium text-stone-700";

    view! {
        <Show when=move || { pagination.get().total_pages > 1 }>
            <div class="flex items-center justify-center gap-4 mt-12 mb-8">
                <button
                    type="button"
                    class=button_class
                    disabled=move || !pagination.get().has_previous()
                    on:click=go_prev
                >
                    "← Previous"
                </button>

                <span class="text-sm font-medium text-stone-600 bg-stone-100 px-4 py-2 rounded-lg">
                    "Page " {move || pagination.get().current_page} " of " {move || pagination.get().total_pages}
                </span>

                <button
                    type="button"
                    class=button_class
                    disabled=move || !pagination.get().has_next()
                    on:click=go_next
                >
                    "Next →"
                </button>
            </div>
        </Show>
    }
}

/// Section title with an optional subtitle
#[component]
pub fn SectionHeading(
    title: &'static str,
    #[prop(optional)]
    subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="text-center mb-10">
            <h2 class="text-3xl md:text-4xl font-serif font-bold text-stone-900">{title}</h2>
            <div class="w-16 h-1 bg-amber-500 mx-auto mt-3 rounded-full"></div>
            {subtitle.map(|s| view! { <p class="mt-4 text-stone-600 max-w-2xl mx-auto">{s}</p> })}
        </div>
    }
}

/// "Not found" block with a way back
#[component]
pub fn NotFoundView(
    #[prop(default = "Page not found")]
    title: &'static str,
    #[prop(default = "/")]
    back_href: &'static str,
    #[prop(default = "Back to Home")]
    back_label: &'static str,
) -> impl IntoView {
    view! {
        <div class="py-24 flex items-center justify-center">
            <div class="text-center">
                <h1 class="text-6xl font-bold text-stone-300 mb-4">"404"</h1>
                <p class="text-xl text-stone-600 mb-8">{title}</p>
                <A
                    href=back_href
                    attr:class="px-6 py-3 bg-amber-600 text-white rounded-lg hover:bg-amber-700 transition-colors"
                >
                    {back_label}
                </A>
            </div>
        </div>
    }
}
