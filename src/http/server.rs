use super::app_error::AppError;
use super::health::{liveness, readiness};
use super::sessions::{
    add_field, create_session, delete_session, download, generate, get_session, get_table,
    remove_field, set_field_text, set_prefix,
};
use super::state::HttpServerState;
use crate::config;
use crate::http::health::{__path_liveness, __path_readiness};
use crate::http::sessions::{
    __path_add_field, __path_create_session, __path_delete_session, __path_download,
    __path_generate, __path_get_session, __path_get_table, __path_remove_field,
    __path_set_field_text, __path_set_prefix,
};
use anyhow::Result;
use axum::Json;
use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::extract::State;
use axum::http::header;
use axum::routing::{get, post, put};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::trace;
use tower_http::{ServiceBuilderExt, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "AttrGen", description = "Attribute Combination Generator"),
        (name = "Sessions", description = "Interactive combination sessions"),
        (name = "Health", description = "Health checks"),
    ),
    paths(frontpage, liveness, readiness,
        create_session, get_session, delete_session,
        add_field, remove_field, set_field_text, set_prefix,
        generate, get_table, download),
)]
struct ApiDoc;

/// Every route of the service, without the transport middleware.
pub fn router(state: HttpServerState) -> Router {
    Router::new()
        .route("/", get(frontpage))
        .merge(Scalar::with_url("/docs", ApiDoc::openapi()))
        .route("/health/live", get(liveness))
        .route("/health/ready", get(readiness))
        .route("/api/v1/sessions", post(create_session))
        .route(
            "/api/v1/sessions/{session_id}",
            get(get_session).delete(delete_session),
        )
        .route(
            "/api/v1/sessions/{session_id}/fields",
            post(add_field).delete(remove_field),
        )
        .route(
            "/api/v1/sessions/{session_id}/fields/{index}",
            put(set_field_text),
        )
        .route("/api/v1/sessions/{session_id}/prefix", put(set_prefix))
        .route("/api/v1/sessions/{session_id}/generate", post(generate))
        .route("/api/v1/sessions/{session_id}/table", get(get_table))
        .route("/api/v1/sessions/{session_id}/download", get(download))
        .with_state(state)
}

pub async fn run_http_server(state: HttpServerState, address: SocketAddr) -> Result<()> {
    let config = config::get()?;
    let max_body_layer = DefaultBodyLimit::max(config.parse_http_body_limit()?);
    let timeout_seconds = config.http_server_timeout_seconds;

    // List of headers that shouldn't be logged
    let sensitive_headers: Arc<[_]> = vec![header::AUTHORIZATION, header::COOKIE].into();

    // Middleware creation
    let middleware = ServiceBuilder::new()
        .sensitive_request_headers(sensitive_headers.clone())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(trace::DefaultMakeSpan::new().level(Level::INFO))
                .on_response(trace::DefaultOnResponse::new().level(Level::INFO)),
        )
        .sensitive_response_headers(sensitive_headers)
        .layer(TimeoutLayer::new(Duration::from_secs(timeout_seconds)))
        .compression()
        .into_inner();

    let app = router(state).layer(max_body_layer).layer(middleware);

    // Run our application
    let listener = tokio::net::TcpListener::bind(address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    // Wait for the CTRL+C signal
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install CTRL+C signal handler: {}", err);
    }
}

#[utoipa::path(
    get,
    path = "/",
    tag = "AttrGen",
    responses(
        (status = 200, description = "AttrGen Frontpage", body = String)
    )
)]
async fn frontpage(State(state): State<HttpServerState>) -> Result<Json<String>, AppError> {
    let name: String = (*state.name).clone();
    Ok(Json(name))
}

#[cfg(test)]
mod tests {
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    use super::*;
    use crate::session::SessionStore;

    fn test_state() -> HttpServerState {
        HttpServerState {
            name: Arc::new("hello world".to_string()),
            sessions: Arc::new(SessionStore::default()),
        }
    }

    #[tokio::test]
    async fn test_frontpage() {
        let app = router(test_state());
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();

        let response = app.oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        use axum::body::to_bytes;
        let body_str =
            String::from_utf8(to_bytes(response.into_body(), 128).await.unwrap().to_vec()).unwrap();
        assert_eq!(body_str, "\"hello world\"");
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let app = router(test_state());
        let request = Request::builder()
            .uri(format!("/api/v1/sessions/{}", uuid::Uuid::new_v4()))
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_openapi_lists_session_routes() {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key("/api/v1/sessions"));
        assert!(
            doc.paths
                .paths
                .contains_key("/api/v1/sessions/{session_id}/download")
        );
    }
}
