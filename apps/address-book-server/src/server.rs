use std::time::Duration;

use address_book::AddressBook;
use anyhow::Context as _;
use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, Request, StatusCode};
use sea_orm::{ConnectOptions, ConnectionTrait, Database, DatabaseConnection};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::{AppConfig, DatabaseConfig, ServerConfig};
use crate::signals::wait_for_shutdown;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Open the connection pool described by `cfg`.
///
/// # Errors
/// Returns an error if the database cannot be reached.
pub async fn connect_database(cfg: &DatabaseConfig) -> anyhow::Result<DatabaseConnection> {
    let mut opts = ConnectOptions::new(cfg.dsn.clone());
    opts.sqlx_logging(false);

    if cfg.is_in_memory() {
        tracing::warn!("Using in-memory SQLite database; data is lost on shutdown");
        opts.max_connections(1).min_connections(1);
    } else {
        opts.max_connections(cfg.max_connections);
    }

    let db = Database::connect(opts)
        .await
        .context("failed to connect to database")?;
    tracing::info!(
        backend = ?db.get_database_backend(),
        "Database connection pool ready"
    );
    Ok(db)
}

/// Routes plus the HTTP middleware stack.
///
/// Outermost first: `SetRequestId` -> `PropagateRequestId` -> Trace -> Timeout -> `BodyLimit`.
#[must_use]
pub fn build_router(module: &AddressBook, cfg: &ServerConfig) -> Router {
    let x_request_id = HeaderName::from_static(REQUEST_ID_HEADER);

    module
        .register_rest(Router::new())
        .layer(RequestBodyLimitLayer::new(cfg.body_limit_bytes))
        .layer(DefaultBodyLimit::max(cfg.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(cfg.request_timeout_secs),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<Body>| {
                let rid = req
                    .headers()
                    .get(REQUEST_ID_HEADER)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                )
            }),
        )
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeRequestUuid))
}

/// Connect, migrate, serve until a shutdown signal, then close the pool.
///
/// # Errors
/// Returns an error if any startup step fails or the server stops abnormally.
pub async fn run(config: AppConfig) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    let db = connect_database(&config.database).await?;
    AddressBook::migrate(&db).await?;
    let module = AddressBook::init(db.clone(), &config.auth)?;
    let router = build_router(&module, &config.server);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    let shutdown = async {
        match wait_for_shutdown().await {
            Ok(signal) => {
                tracing::info!(%signal, "Shutdown requested, draining in-flight requests");
            }
            Err(e) => tracing::error!(error = %e, "Signal handler failed, shutting down"),
        }
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    db.close().await.context("failed to close database")?;
    tracing::info!("Address Book Server stopped");
    Ok(())
}
