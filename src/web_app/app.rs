// web_app/app.rs - Root application component
//
// Sets up the application context, meta tags, routing and the page chrome
// shared by every route. `shell` is the full HTML document the server
// renders around `App`.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::*;
use leptos_router::path;

use crate::web_app::components::{ErrorDisplay, Footer, Navbar, Toaster, WhatsAppButton};
use crate::web_app::config::StorefrontConfig;
use crate::web_app::content::{BRAND_NAME, BRAND_TAGLINE};
use crate::web_app::context::AppContext;
use crate::web_app::pages::*;

/// HTML document rendered by the server for every route
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options=options/>
                <MetaTags/>
            </head>
            <body class="bg-stone-50 text-stone-900 antialiased">
                <App/>
            </body>
        </html>
    }
}

/// Root application component
///
/// Builds the `AppContext` from the environment configuration and provides
/// it to every page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let context = match AppContext::new(StorefrontConfig::load_or_default()) {
        Ok(context) => context,
        Err(e) => {
            tracing::error!("Cannot start storefront: {}", e);
            return view! {
                <div class="max-w-xl mx-auto py-24 px-4">
                    <ErrorDisplay error=format!("The storefront is misconfigured: {}", e) />
                </div>
            }
            .into_any();
        }
    };
    let whatsapp_number = context.config.whatsapp_number.clone();
    provide_context(context);

    view! {
        <Title text=BRAND_NAME />
        <Meta name="description" content=BRAND_TAGLINE />
        <Meta name="viewport" content="width=device-width, initial-scale=1" />

        // Stylesheet link (Tailwind CSS)
        <Stylesheet id="leptos" href="/pkg/saffron_storefront.css" />

        <Router>
            <Navbar />
            <main class="min-h-screen">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/products") view=ProductsPage />
                    <Route path=path!("/products/:slug") view=ProductDetailPage />
                    <Route path=path!("/blog") view=BlogListPage />
                    <Route path=path!("/blog/:slug") view=BlogPostPage />
                    <Route path=path!("/pharmacy") view=PharmacyPage />
                    <Route path=path!("/gallery") view=GalleryPage />
                    <Route path=path!("/admin/company-details") view=AdminCompanyDetailsPage />
                </Routes>
            </main>
            <Footer />
            <WhatsAppButton number=whatsapp_number />
            <Toaster />
        </Router>
    }
    .into_any()
}
