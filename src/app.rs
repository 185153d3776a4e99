use std::{net::SocketAddr, time::Duration};

use axum::{
    http::{Request, Response},
    routing::get,
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{field, Span};

use crate::{auth, meals, state::AppState};

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .merge(auth::router())
        .merge(meals::router())
}

pub fn build_app(state: AppState) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &Request<_>| {
            tracing::info_span!(
                "request",
                method = %req.method(),
                path = req.uri().path(),
                status = field::Empty,
                latency_ms = field::Empty,
            )
        })
        .on_response(|res: &Response<_>, latency: Duration, span: &Span| {
            let status = res.status();
            span.record("status", status.as_u16());
            span.record("latency_ms", latency.as_millis() as u64);
            if status.is_server_error() {
                tracing::error!(%status, "request failed");
            } else if status.is_client_error() {
                tracing::warn!(%status, "request rejected");
            } else {
                tracing::info!(%status, "request served");
            }
        });

    Router::new()
        .nest("/api", api_routes())
        .with_state(state)
        .layer(trace)
        .layer(CorsLayer::permissive())
}

pub async fn serve(app: Router, addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(%addr, "dietlog listening");
    axum::serve(listener, app).await?;
    Ok(())
}
