// web_app/pages/admin.rs - Company details editor
//
// Loads `GET /company-details` into an editable copy and saves it with
// `PUT /admin/company-details` using the configured admin token.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::{Meta, Title};

use crate::web_app::components::{Button, ErrorDisplay, Loading};
use crate::web_app::context::{use_app_context, use_store};
use crate::web_app::hooks::{use_api, ActionOptions, AsyncAction};
use crate::web_app::model::{BusinessHours, CompanyDetails};
use crate::web_app::ui::format::non_blank;

type Getter = fn(&CompanyDetails) -> String;
type Setter = fn(&mut CompanyDetails, String);

const INPUT_CLASS: &str = "w-full px-4 py-2 border border-stone-300 rounded-lg focus:ring-2 focus:ring-amber-500 outline-none";

/// One labelled input bound to a field of the form
fn text_field(
    label: &'static str,
    form: RwSignal<CompanyDetails>,
    get: Getter,
    set: Setter,
    multiline: bool,
) -> impl IntoView {
    let value = move || form.with(get);
    let control = if multiline {
        view! {
            <textarea
                class=INPUT_CLASS
                rows="3"
                prop:value=value
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            ></textarea>
        }
        .into_any()
    } else {
        view! {
            <input
                type="text"
                class=INPUT_CLASS
                prop:value=value
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
        .into_any()
    };

    view! {
        <label class="block space-y-1">
            <span class="text-sm font-medium text-stone-700">{label}</span>
            {control}
        </label>
    }
}

#[component]
pub fn AdminCompanyDetailsPage() -> impl IntoView {
    let context = use_app_context();
    let api = context.api.clone();
    let has_token = context.config.admin_token.is_some();

    let form = RwSignal::new(CompanyDetails::default());

    let load = AsyncAction::<CompanyDetails>::new(
        None,
        ActionOptions::default().on_success(move |details: &CompanyDetails| {
            form.try_set(details.clone());
        }),
    );
    let load_state = use_store(load.store());

    let save = use_api::<CompanyDetails>(
        context.notifier(),
        ActionOptions::default()
            .success_message("Company details saved")
            .on_success(move |details: &CompanyDetails| {
                form.try_set(details.clone());
            }),
    );
    let save_state = use_store(save.store());

    let reload = {
        let api = api.clone();
        Callback::new(move |()| {
            let load = load.clone();
            let api = api.clone();
            spawn_local(async move {
                let _ = load.execute(|| async move { api.get_company_details().await }).await;
            });
        })
    };
    Effect::new(move |_| reload.run(()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let details = form.get_untracked();
        let save = save.clone();
        let api = api.clone();
        spawn_local(async move {
            let _ = save.execute(|| async move { api.update_company_details(&details).await }).await;
        });
    };

    let saving = Signal::derive(move || save_state.with(|s| s.loading));

    let add_hours = move |_| {
        form.update(|f| {
            f.business_hours.push(BusinessHours {
                day: String::new(),
                open: "09:00".to_string(),
                close: "18:00".to_string(),
                is_closed: false,
            })
        })
    };

    view! {
        <Title text="Company Details | Admin" />
        <Meta name="robots" content="noindex" />

        <div class="max-w-4xl mx-auto px-4 sm:px-6 py-12">
            <h1 class="text-3xl font-bold text-stone-900 mb-2">"Company Details"</h1>
            <p class="text-stone-600 mb-8">"Shown in the footer and on the contact page."</p>

            {(!has_token).then(|| view! {
                <div class="mb-6 p-4 rounded-lg bg-amber-50 border border-amber-200 text-amber-800 text-sm">
                    "ADMIN_API_TOKEN is not set; saving will be rejected by the server."
                </div>
            })}

            {move || {
                let (loading, error) = load_state.with(|s| (s.loading, s.error.clone()));
                if loading {
                    return view! { <Loading message="Loading company details..." /> }.into_any();
                }
                if let Some(error) = error.filter(|e| !e.not_found) {
                    return view! { <ErrorDisplay error=error.message on_retry=reload /> }.into_any();
                }
                view! {
                    <form class="space-y-8" on:submit=on_submit.clone()>
                        <fieldset class="bg-white rounded-2xl border border-stone-100 shadow-sm p-6 grid grid-cols-1 md:grid-cols-2 gap-4">
                            <legend class="px-2 font-semibold text-stone-800">"Company"</legend>
                            {text_field("Company name", form, |f| f.company_name.clone(), |f, v| f.company_name = v, false)}
                            {text_field("Tagline", form, |f| f.tagline.clone().unwrap_or_default(), |f, v| f.tagline = non_blank(&v), false)}
                            {text_field("Email", form, |f| f.email.clone(), |f, v| f.email = v, false)}
                            {text_field("Phone", form, |f| f.phone.clone(), |f, v| f.phone = v, false)}
                            {text_field("WhatsApp number", form, |f| f.whatsapp.clone().unwrap_or_default(), |f, v| f.whatsapp = non_blank(&v), false)}
                            {text_field("Map embed URL", form, |f| f.map_embed_url.clone().unwrap_or_default(), |f, v| f.map_embed_url = non_blank(&v), false)}
                            <div class="md:col-span-2">
                                {text_field("Address", form, |f| f.address.clone(), |f, v| f.address = v, true)}
                            </div>
                        </fieldset>

                        <fieldset class="bg-white rounded-2xl border border-stone-100 shadow-sm p-6 grid grid-cols-1 md:grid-cols-2 gap-4">
                            <legend class="px-2 font-semibold text-stone-800">"Social links"</legend>
                            {text_field("Facebook", form, |f| f.social_links.facebook.clone().unwrap_or_default(), |f, v| f.social_links.facebook = non_blank(&v), false)}
                            {text_field("Instagram", form, |f| f.social_links.instagram.clone().unwrap_or_default(), |f, v| f.social_links.instagram = non_blank(&v), false)}
                            {text_field("Twitter", form, |f| f.social_links.twitter.clone().unwrap_or_default(), |f, v| f.social_links.twitter = non_blank(&v), false)}
                            {text_field("LinkedIn", form, |f| f.social_links.linkedin.clone().unwrap_or_default(), |f, v| f.social_links.linkedin = non_blank(&v), false)}
                            {text_field("YouTube", form, |f| f.social_links.youtube.clone().unwrap_or_default(), |f, v| f.social_links.youtube = non_blank(&v), false)}
                        </fieldset>

                        <fieldset class="bg-white rounded-2xl border border-stone-100 shadow-sm p-6 space-y-3">
                            <legend class="px-2 font-semibold text-stone-800">"Business hours"</legend>
                            {move || (0..form.with(|f| f.business_hours.len())).map(|index| {
                                let update = move |apply: fn(&mut BusinessHours, String), value: String| {
                                    form.update(|f| {
                                        if let Some(hours) = f.business_hours.get_mut(index) {
                                            apply(hours, value);
                                        }
                                    })
                                };
                                let read = move |get: fn(&BusinessHours) -> String| {
                                    form.with(|f| f.business_hours.get(index).map(get).unwrap_or_default())
                                };
                                view! {
                                    <div class="flex flex-wrap items-center gap-2">
                                        <input class="flex-1 px-3 py-2 border border-stone-300 rounded-lg" placeholder="Day"
                                            prop:value=move || read(|h| h.day.clone())
                                            on:input=move |ev| update(|h, v| h.day = v, event_target_value(&ev)) />
                                        <input class="w-24 px-3 py-2 border border-stone-300 rounded-lg" type="time"
                                            prop:value=move || read(|h| h.open.clone())
                                            on:input=move |ev| update(|h, v| h.open = v, event_target_value(&ev)) />
                                        <input class="w-24 px-3 py-2 border border-stone-300 rounded-lg" type="time"
                                            prop:value=move || read(|h| h.close.clone())
                                            on:input=move |ev| update(|h, v| h.close = v, event_target_value(&ev)) />
                                        <label class="flex items-center gap-1 text-sm">
                                            <input type="checkbox"
                                                prop:checked=move || form.with(|f| f.business_hours.get(index).is_some_and(|h| h.is_closed))
                                                on:change=move |ev| {
                                                    let closed = event_target_checked(&ev);
                                                    form.update(|f| {
                                                        if let Some(hours) = f.business_hours.get_mut(index) {
                                                            hours.is_closed = closed;
                                                        }
                                                    })
                                                } />
                                            "Closed"
                                        </label>
                                        <button type="button" class="text-sm text-red-600 hover:underline"
                                            on:click=move |_| form.update(|f| {
                                                if index < f.business_hours.len() {
                                                    f.business_hours.remove(index);
                                                }
                                            })>
                                            "Remove"
                                        </button>
                                    </div>
                                }
                            }).collect_view()}
                            <button type="button" class="text-sm text-amber-700 font-semibold hover:underline" on:click=add_hours>
                                "+ Add hours"
                            </button>
                        </fieldset>

                        <fieldset class="bg-white rounded-2xl border border-stone-100 shadow-sm p-6 space-y-4">
                            <legend class="px-2 font-semibold text-stone-800">"Footer"</legend>
                            {text_field("About text", form, |f| f.footer.about.clone(), |f, v| f.footer.about = v, true)}
                            {text_field("Copyright", form, |f| f.footer.copyright.clone().unwrap_or_default(), |f, v| f.footer.copyright = non_blank(&v), false)}
                        </fieldset>

                        <div class="flex justify-end">
                            <Button button_type="submit" disabled=saving>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </Button>
                        </div>
                    </form>
                }
                .into_any()
            }}
        </div>
    }
}
