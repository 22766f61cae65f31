use std::sync::Arc;
use std::time::Instant;

use actix_cors::Cors;
use actix_web::dev::Service;
use actix_web::http::{header, Method};
use actix_web::{web, App, HttpServer};
use tracing::Instrument;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

mod api;
mod config;
mod domain;
mod metrics;
mod models;
mod store;

use api::AppState;
use config::Config;
use domain::auth::CredentialHasher;
use domain::menu::{MenuService, DEMO_MENU};
use metrics::Metrics;
use store::{SqliteStore, Store};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Default to INFO level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_thread_ids(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,food_orders=debug")),
        )
        .init();

    tracing::info!("🚀 Starting food ordering service");

    let config = Config::from_env()?;

    // === 1. Durable store (schema ensured on every startup) ===
    let sqlite = SqliteStore::connect(&config.database_url, config.db_max_connections).await?;
    let store: Arc<dyn Store> = Arc::new(sqlite.clone());

    if config.seed_menu {
        MenuService::new(store.clone()).seed_if_empty(DEMO_MENU).await?;
    }

    // === 2. Metrics ===
    let metrics = Arc::new(Metrics::new()?);
    tracing::info!("📊 Metrics registry created with {} metrics", metrics.registry().gather().len());

    let metrics_server = metrics::start_metrics_server(
        metrics.registry().clone(),
        config.host.clone(),
        config.metrics_port,
    );

    // === 3. API server ===
    let hasher = CredentialHasher::with_memory_cost(config.argon2_memory_kib)?;
    let state = web::Data::new(AppState::new(store, hasher, metrics.clone()));

    let address = (config.host.clone(), config.port);
    tracing::info!("Binding API to {}:{}", address.0, address.1);

    let api_server = HttpServer::new(move || {
        let metrics = metrics.clone();

        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allowed_header(header::CONTENT_TYPE)
            .max_age(60 * 60);

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap_fn(move |req, srv| {
                let request_id = Uuid::new_v4();
                let method = req.method().to_string();
                let route = req.match_pattern().unwrap_or_else(|| "unmatched".to_string());
                let span = tracing::info_span!(
                    "request",
                    %request_id,
                    method = %method,
                    path = %req.path()
                );
                let metrics = metrics.clone();
                let started = Instant::now();
                let fut = span.in_scope(|| srv.call(req));

                async move {
                    let res = fut.await?;
                    let elapsed = started.elapsed();
                    let status = res.status().as_u16();
                    metrics.record_http_request(&method, &route, status, elapsed.as_secs_f64());
                    tracing::debug!(status, elapsed_ms = elapsed.as_millis() as u64, "Request completed");
                    Ok(res)
                }
                .instrument(span)
            })
            .configure(api::configure)
    })
    .bind(address)?
    .run();

    tokio::try_join!(api_server, metrics_server)?;

    sqlite.close().await;
    tracing::info!("Server shut down");

    Ok(())
}
