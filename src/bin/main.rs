// Storefront web server
//
// This binary starts the web server with:
// - Actix-web for HTTP serving
// - Leptos for SSR (server-side rendering)
// - Static file serving for the hydration bundle and assets
//
// All data comes from the storefront REST API configured by API_BASE_URL.

#[cfg(feature = "ssr")]
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    use actix_files::Files;
    use actix_web::{web, App, HttpServer};
    use anyhow::Context;
    use leptos_actix::{generate_route_list, LeptosRoutes};
    use saffron_storefront::web_app::app::{shell, App as WebApp};
    use saffron_storefront::web_app::config::StorefrontConfig;
    use tracing_subscriber::EnvFilter;

    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize logging (RUST_LOG overrides the default level)
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(false)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Fail fast on a bad API URL instead of rendering an error page per request
    let config = StorefrontConfig::load().context("invalid storefront configuration")?;
    tracing::info!("Using storefront API at {}", config.api_base_url);

    // Leptos configuration
    let conf = leptos_config::get_configuration(None).context("could not read Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;
    let site_root = leptos_options.site_root.clone();

    tracing::info!("Starting server at http://{}", addr);

    HttpServer::new(move || {
        // Generate the list of routes in the Leptos App
        let routes = generate_route_list(WebApp);
        let leptos_options = leptos_options.clone();
        let site_root = site_root.to_string();

        App::new()
            // Serve JS/WASM/CSS from pkg directory
            .service(Files::new("/pkg", format!("{site_root}/pkg")))
            // Static assets copied from public/
            .service(Files::new("/images", format!("{site_root}/images")))
            .leptos_routes(routes, {
                let leptos_options = leptos_options.clone();
                move || shell(leptos_options.clone())
            })
            .app_data(web::Data::new(leptos_options))
    })
    .bind(&addr)?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    eprintln!("This binary requires the 'ssr' feature. Run with: cargo leptos watch");
    std::process::exit(1);
}
