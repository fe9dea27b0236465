// web_app/pages/pharmacy.rs - Bulk and pharmaceutical supply

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::web_app::components::SectionHeading;
use crate::web_app::content::{BRAND_NAME, PHARMACY_BENEFITS, PHARMACY_ENQUIRY, PHARMACY_INTRO};
use crate::web_app::context::use_app_context;
use crate::web_app::ui::links::whatsapp_link;

#[component]
pub fn PharmacyPage() -> impl IntoView {
    let context = use_app_context();
    let enquiry = whatsapp_link(&context.config.whatsapp_number, PHARMACY_ENQUIRY);

    view! {
        <Title text=format!("Pharmacy & Bulk Supply | {}", BRAND_NAME) />

        <section class="bg-gradient-to-br from-stone-800 to-amber-900 text-white py-20 px-6 text-center">
            <h1 class="text-4xl md:text-5xl font-serif font-bold">"Pharmaceutical Grade Saffron"</h1>
            <p class="mt-4 max-w-2xl mx-auto text-amber-100 text-lg">{PHARMACY_INTRO}</p>
        </section>

        <section class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 py-16">
            <SectionHeading title="Why Manufacturers Choose Us" />
            <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-4 gap-6">
                {PHARMACY_BENEFITS.iter().map(|benefit| view! {
                    <div class="bg-white rounded-xl p-6 shadow-sm border border-stone-100">
                        <span class="text-3xl">{benefit.icon}</span>
                        <h3 class="mt-3 font-bold text-stone-900">{benefit.title}</h3>
                        <p class="mt-2 text-sm text-stone-600">{benefit.description}</p>
                    </div>
                }).collect_view()}
            </div>

            <div class="mt-12 flex flex-col sm:flex-row gap-4 justify-center">
                <a
                    href=enquiry
                    target="_blank"
                    rel="noopener noreferrer"
                    class="px-8 py-3 bg-green-600 text-white font-semibold rounded-full hover:bg-green-700 text-center"
                >
                    "Request a Quote on WhatsApp"
                </a>
                <A href="/contact" attr:class="px-8 py-3 border-2 border-amber-600 text-amber-700 font-semibold rounded-full hover:bg-amber-50 text-center">
                    "Send an Enquiry"
                </A>
            </div>
        </section>
    }
}
