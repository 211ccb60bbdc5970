pub mod shared;

use axum::middleware;
use axum::routing::get;
use axum::Router;
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};

/// `/health` plus the static site; unknown paths fall back to `index.html`
pub fn build_router(site_root: &Path) -> Router {
    let static_site =
        ServeDir::new(site_root).fallback(ServeFile::new(site_root.join("index.html")));

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .fallback_service(static_site)
        .layer(middleware::from_fn(shared::request_log::request_logger))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use contracts::catalog;
    use tokio::net::TcpListener;
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Log directory next to the build output
    let log_dir = Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("backend.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = shared::config::load_config()?;
    let site_root = shared::config::get_site_root(&config)?;

    // The page ships this catalog; refuse to serve a broken one
    let summary = match catalog::validate_catalog(catalog::categories(), catalog::hooks()) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Bundled hook catalog is invalid: {}", e);
            return Err(e.into());
        }
    };
    tracing::info!(
        "Catalog: {} hooks in {} categories",
        summary.hook_count,
        summary.category_count
    );
    for (category, count) in &summary.per_category {
        tracing::debug!("  {:<16} {}", category.code(), count);
    }

    if !site_root.join("index.html").exists() {
        tracing::warn!(
            "No index.html under {}; build the frontend with trunk first",
            site_root.display()
        );
    }

    let app = build_router(&site_root);
    let addr = config.server.socket_addr();

    tracing::info!("Serving {} on http://{}", site_root.display(), addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Port {} is already in use. Change [server].port in config.toml or stop the other process.",
                    addr.port()
                );
            } else {
                tracing::error!("Failed to bind to {}. Error: {}", addr, e);
            }
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_route_answers_ok() {
        let app = build_router(Path::new("does-not-exist"));
        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_site_root_yields_not_found() {
        let app = build_router(Path::new("does-not-exist"));
        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
