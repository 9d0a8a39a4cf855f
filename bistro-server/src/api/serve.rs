use axum::{
    Router,
    http::{HeaderValue, Method, header},
    response::IntoResponse,
    routing::get,
};
use std::sync::Arc;

use tokio::net::TcpListener;
use tower_http::{
    compression::CompressionLayer,
    cors::{AllowOrigin, CorsLayer},
    sensitive_headers::SetSensitiveHeadersLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

use crate::{
    api::{auth, carts, menu, testimonials, users},
    config::AppConfig,
    db::Mongo,
    response::ServerResult,
    util::app_state::AppState,
};

async fn get_status() -> impl IntoResponse {
    "Bistro Boss server is running"
}

fn cors_layer(cfg: &AppConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    if cfg.cors_origins.is_empty() {
        return cors.allow_origin(AllowOrigin::any());
    }

    let origins: Vec<HeaderValue> = cfg
        .cors_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();

    // Browsers only send the token cookie cross-origin with credentials allowed.
    cors.allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
}

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config);

    Router::new()
        .route("/", get(get_status))
        .merge(auth::create_route())
        .merge(menu::create_route())
        .merge(testimonials::create_route())
        .merge(users::create_route())
        .merge(carts::create_route())
        .with_state(state)
        .layer(cors)
        .layer(SetSensitiveHeadersLayer::new([
            header::COOKIE,
            header::SET_COOKIE,
        ]))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
}

pub async fn serve(db: Arc<Mongo>, cfg: Arc<AppConfig>) -> ServerResult<()> {
    let state = AppState {
        db,
        config: cfg.clone(),
    };
    let app = router(state);

    let listener = TcpListener::bind(("0.0.0.0", cfg.port)).await?;
    info!("Bistro Boss server listening on 0.0.0.0:{}", cfg.port);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("failed to listen for ctrl-c: {e:?}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {e:?}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("shutdown signal received");
}
