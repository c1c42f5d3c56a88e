use crate::core::{Result, ServerError, ServerState};
use axum::{Router, middleware};
use http::StatusCode;
use std::future::Future;
use std::net::SocketAddr;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(crate::api::health::router())
        .merge(crate::api::products::router())
        .merge(crate::api::promotions::router())
        .merge(crate::api::menu::router())
}

/// Router bound to `state` with the middleware stack applied
pub fn build_router(state: ServerState) -> Router {
    let timeout = Duration::from_millis(state.config.request_timeout_ms);

    build_app().with_state(state).layer(
        ServiceBuilder::new()
            // access log
            .layer(middleware::from_fn(log_request))
            // tower-http layers
            .layer(TraceLayer::new_for_http())
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive())
            .layer(timeout_layer(timeout)),
    )
}

/// Requests still running after `timeout` are answered with 408
fn timeout_layer(timeout: Duration) -> TimeoutLayer {
    TimeoutLayer::with_status_code(StatusCode::REQUEST_TIMEOUT, timeout)
}

/// Serve `app` on `port` until `shutdown_signal` resolves.
///
/// In-flight requests get `shutdown_timeout` to finish, after that the
/// remaining connections are dropped.
pub async fn serve<F>(
    app: Router,
    port: u16,
    shutdown_signal: F,
    shutdown_timeout: Duration,
) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(ServerError::Bind)?;
    tracing::info!("🚀 Starting HTTP server on {}", addr);

    let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        let _ = stop_rx.await;
    });
    let mut handle = tokio::spawn(async move { server.await });

    tokio::select! {
        joined = &mut handle => {
            // Server stopped on its own
            joined.map_err(anyhow::Error::from)?.map_err(anyhow::Error::from)?;
            return Ok(());
        }
        _ = shutdown_signal => {
            tracing::info!("Shutting down...");
        }
    }

    let _ = stop_tx.send(());
    match tokio::time::timeout(shutdown_timeout, handle).await {
        Ok(joined) => {
            joined.map_err(anyhow::Error::from)?.map_err(anyhow::Error::from)?;
        }
        Err(_) => {
            tracing::warn!(
                timeout_ms = shutdown_timeout.as_millis() as u64,
                "Graceful shutdown timed out, dropping open connections"
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::routing::get;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_slow_request_times_out() {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_secs(5)).await;
                    "done"
                }),
            )
            .route("/fast", get(|| async { "done" }))
            .layer(timeout_layer(Duration::from_millis(20)));

        let slow = http::Request::builder().uri("/slow").body(Body::empty()).unwrap();
        let response = app.clone().oneshot(slow).await.unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let fast = http::Request::builder().uri("/fast").body(Body::empty()).unwrap();
        let response = app.oneshot(fast).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
