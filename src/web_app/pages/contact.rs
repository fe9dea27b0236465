// web_app/pages/contact.rs - Contact form, company details and map
//
// The form is submitted through `use_api`, which shows the success or
// failure toast; native `required` attributes are the only validation.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_meta::Title;

use crate::web_app::components::{Button, SectionHeading, TextInput};
use crate::web_app::content::BRAND_NAME;
use crate::web_app::context::{use_app_context, use_store};
use crate::web_app::hooks::{use_api, ActionOptions, AsyncAction};
use crate::web_app::model::{CompanyDetails, ContactSubmission};
use crate::web_app::ui::format::non_blank;
use crate::web_app::ui::links::whatsapp_link;

pub const PRODUCT_INTERESTS: [&str; 4] = ["Culinary Saffron", "Pharmacy / Bulk", "Gifting", "Other"];

#[component]
pub fn ContactPage() -> impl IntoView {
    let context = use_app_context();
    let api = context.api.clone();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let interest = RwSignal::new(String::new());

    let submit = use_api::<()>(
        context.notifier(),
        ActionOptions::default()
            .success_message("Thank you! We will get back to you shortly.")
            .on_success(move |_| {
                for field in [name, email, phone, subject, message, interest] {
                    field.try_set(String::new());
                }
            }),
    );
    let submit_state = use_store(submit.store());

    let company_action = AsyncAction::<CompanyDetails>::new(None, ActionOptions::default());
    let company = use_store(company_action.store());
    {
        let api = api.clone();
        Effect::new(move |_| {
            let action = company_action.clone();
            let api = api.clone();
            spawn_local(async move {
                let _ = action.execute(|| async move { api.get_company_details().await }).await;
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let submission = ContactSubmission {
            name: name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: non_blank(&phone.get_untracked()),
            subject: subject.get_untracked().trim().to_string(),
            message: message.get_untracked().trim().to_string(),
            product_interest: non_blank(&interest.get_untracked()),
        };
        let submit = submit.clone();
        let api = api.clone();
        spawn_local(async move {
            let _ = submit.execute(|| async move { api.submit_contact(&submission).await }).await;
        });
    };

    let sending = Signal::derive(move || submit_state.with(|s| s.loading));
    let details = move || company.with(|s| s.data.clone()).unwrap_or_default();
    let fallback_whatsapp = context.config.whatsapp_number.clone();

    view! {
        <Title text=format!("Contact Us | {}", BRAND_NAME) />

        <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-12">
            <SectionHeading title="Get in Touch" subtitle="Questions about grades, bulk orders or gifting? We reply within a day." />

            <div class="grid grid-cols-1 lg:grid-cols-5 gap-10">
                <form class="lg:col-span-3 bg-white rounded-2xl shadow-sm border border-stone-100 p-8 space-y-4" on:submit=on_submit>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                        <TextInput value=name placeholder="Your name" name="name" required=true />
                        <TextInput value=email placeholder="Email address" input_type="email" name="email" required=true />
                        <TextInput value=phone placeholder="Phone (optional)" input_type="tel" name="phone" />
                        <select
                            class="px-4 py-2 border border-stone-300 rounded-lg bg-white"
                            name="productInterest"
                            on:change=move |ev| interest.set(event_target_value(&ev))
                            prop:value=move || interest.get()
                        >
                            <option value="">"Interested in..."</option>
                            {PRODUCT_INTERESTS.iter().map(|option| view! { <option value=*option>{*option}</option> }).collect_view()}
                        </select>
                    </div>
                    <TextInput value=subject placeholder="Subject" name="subject" required=true />
                    <textarea
                        class="w-full px-4 py-2 border border-stone-300 rounded-lg focus:ring-2 focus:ring-amber-500 outline-none min-h-40"
                        name="message"
                        placeholder="Your message"
                        required=true
                        prop:value=move || message.get()
                        on:input=move |ev| message.set(event_target_value(&ev))
                    ></textarea>
                    <Button button_type="submit" disabled=sending>
                        {move || if sending.get() { "Sending..." } else { "Send Message" }}
                    </Button>
                </form>

                <aside class="lg:col-span-2 space-y-6">
                    {move || {
                        let details = details();
                        let whatsapp = details.whatsapp.clone().filter(|w| !w.is_empty()).unwrap_or_else(|| fallback_whatsapp.clone());
                        view! {
                            <div class="bg-amber-50 rounded-2xl p-6 space-y-3 text-stone-700">
                                {(!details.address.is_empty()).then(|| view! {
                                    <p class="whitespace-pre-line"><span class="font-semibold">"Address: "</span>{details.address.clone()}</p>
                                })}
                                {(!details.phone.is_empty()).then(|| view! {
                                    <p><span class="font-semibold">"Phone: "</span>{details.phone.clone()}</p>
                                })}
                                {(!details.email.is_empty()).then(|| view! {
                                    <p><span class="font-semibold">"Email: "</span>{details.email.clone()}</p>
                                })}
                                <a
                                    href=whatsapp_link(&whatsapp, "")
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    class="inline-block mt-2 px-5 py-2 bg-green-600 text-white rounded-lg hover:bg-green-700 font-semibold"
                                >
                                    "Chat on WhatsApp"
                                </a>
                            </div>
                            {details.map_embed_url.clone().filter(|u| !u.is_empty()).map(|src| view! {
                                <iframe
                                    class="w-full h-72 rounded-2xl border-0 shadow-sm"
                                    src=src
                                    title="Our location"
                                    loading="lazy"
                                    referrerpolicy="no-referrer-when-downgrade"
                                    allowfullscreen=true
                                ></iframe>
                            })}
                        }
                    }}
                </aside>
            </div>
        </div>
    }
}
