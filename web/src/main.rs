//! Server entry-point – Axum + Leptos SSR.

#[cfg(feature = "ssr")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use axum::Router;
    use leptos::prelude::*;
    use leptos_axum::{generate_route_list, LeptosRoutes};
    use tower_http::services::ServeDir;

    use snaploop_common::config::{self, Config};
    use snaploop_common::content;
    use snaploop_web::app::{shell, App};
    use snaploop_web::server::api;

    // ── Configuration ────────────────────────────────────────────────────
    let config_path = Config::resolve_path();
    let config = config::load_or_default(&config_path)?;

    // ── Tracing ──────────────────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter)),
        )
        .init();
    tracing::info!("Configuration from {}: {config:?}", config_path.display());

    let fixtures = content::fixtures();
    if let Err(e) = fixtures.validate() {
        tracing::error!("Built-in content is invalid: {e}");
        return Err(e).context("validating built-in content");
    }
    tracing::info!(
        "Content ready: {} suggested users, {} videos, {} liked",
        fixtures.suggested_users.len(),
        fixtures.profile_videos.len(),
        fixtures.liked_videos.len(),
    );

    let conf = get_configuration(None).context("reading Leptos configuration")?;
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    // ── Routes ───────────────────────────────────────────────────────────
    let routes = generate_route_list(App);

    let mut app = Router::new().leptos_routes(&leptos_options, routes, {
        let leptos_options = leptos_options.clone();
        move || shell(leptos_options.clone())
    });

    if config.content_api {
        app = app.merge(api::routes());
    }

    // Locally hosted avatars and thumbnails
    if let Some(dir) = &config.media_dir {
        tracing::info!("Serving /media from {}", dir.display());
        app = app.nest_service("/media", ServeDir::new(dir));
    }

    // Static site files (WASM bundle, CSS), otherwise the app's 404 page
    let app = app
        .fallback(leptos_axum::file_and_error_handler(shell))
        .with_state(leptos_options);

    tracing::info!("SnapLoop listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

#[cfg(not(feature = "ssr"))]
fn main() {
    // This binary is only built with the `ssr` feature.
    // The WASM entry point is `lib::hydrate()`.
}
