use super::app_error::AppError;
use super::state::HttpServerState;
use super::views::{FieldTextRequest, GenerationView, PrefixRequest, SessionView, TableView};
use crate::exporters::{XLSX_CONTENT_TYPE, XlsxConverter};
use crate::session::SessionState;
use axum::Json;
use axum::extract::{Path, State};
use axum::http::{StatusCode, header};
use axum::response::Response;
use tracing::{debug, info, warn};
use uuid::Uuid;

fn session_not_found(session_id: &Uuid) -> AppError {
    AppError::not_found(anyhow::anyhow!("Session '{}' not found", session_id))
}

async fn with_session<R>(
    state: &HttpServerState,
    session_id: &Uuid,
    f: impl FnOnce(&mut SessionState) -> R,
) -> Result<R, AppError> {
    state
        .sessions
        .with_session(session_id, f)
        .await
        .ok_or_else(|| session_not_found(session_id))
}

async fn session_view(
    state: &HttpServerState,
    session_id: Uuid,
    f: impl FnOnce(&mut SessionState),
) -> Result<Json<SessionView>, AppError> {
    let view = with_session(state, &session_id, |session| {
        f(session);
        SessionView::new(session_id, session)
    })
    .await?;
    Ok(Json(view))
}

/// Start a session.
///
/// The new session has the default number of empty attribute fields and the
/// default prefix.
#[utoipa::path(
    post,
    path = "/api/v1/sessions",
    tag = "Sessions",
    responses(
        (status = 201, description = "Session created", body = SessionView)
    )
)]
pub async fn create_session(
    State(state): State<HttpServerState>,
) -> Result<(StatusCode, Json<SessionView>), AppError> {
    let (session_id, session) = state.sessions.create().await;
    info!("Session {} started", session_id);
    Ok((
        StatusCode::CREATED,
        Json(SessionView::new(session_id, &session)),
    ))
}

#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Current session state", body = SessionView),
        (status = 404, description = "Unknown session", body = AppError),
    )
)]
pub async fn get_session(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    session_view(&state, session_id, |_| {}).await
}

/// End a session and drop its table.
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{session_id}",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 204, description = "Session ended"),
        (status = 404, description = "Unknown session", body = AppError),
    )
)]
pub async fn delete_session(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(&session_id).await {
        return Err(session_not_found(&session_id));
    }
    info!("Session {} ended", session_id);
    Ok(StatusCode::NO_CONTENT)
}

/// Add an empty attribute field.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{session_id}/fields",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Field added", body = SessionView),
        (status = 404, description = "Unknown session", body = AppError),
        (status = 422, description = "The session already has the maximum number of fields", body = AppError),
    )
)]
pub async fn add_field(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    let outcome = with_session(&state, &session_id, |session| {
        session
            .fields
            .add_field()
            .map(|()| SessionView::new(session_id, session))
    })
    .await?;

    outcome.map(Json).map_err(|err| {
        warn!("Session {}: {}", session_id, err);
        AppError::from_combination_error(err)
    })
}

/// Remove the last attribute field.
///
/// At least one field always remains; removing the last one is a no-op.
#[utoipa::path(
    delete,
    path = "/api/v1/sessions/{session_id}/fields",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Field removed, or left unchanged at one field", body = SessionView),
        (status = 404, description = "Unknown session", body = AppError),
    )
)]
pub async fn remove_field(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<SessionView>, AppError> {
    session_view(&state, session_id, |session| {
        if !session.fields.remove_field() {
            debug!("Session {} keeps its last attribute field", session_id);
        }
    })
    .await
}

/// Replace the text of attribute field `index` (1-based).
#[utoipa::path(
    put,
    path = "/api/v1/sessions/{session_id}/fields/{index}",
    tag = "Sessions",
    params(
        ("session_id" = Uuid, Path, description = "Session identifier"),
        ("index" = usize, Path, description = "Field number, starting at 1"),
    ),
    request_body = FieldTextRequest,
    responses(
        (status = 200, description = "Field updated", body = SessionView),
        (status = 404, description = "Unknown session or field", body = AppError),
    )
)]
pub async fn set_field_text(
    State(state): State<HttpServerState>,
    Path((session_id, index)): Path<(Uuid, usize)>,
    Json(request): Json<FieldTextRequest>,
) -> Result<Json<SessionView>, AppError> {
    let view = with_session(&state, &session_id, |session| {
        session
            .fields
            .set_text(index, request.text)
            .then(|| SessionView::new(session_id, session))
    })
    .await?;

    view.map(Json).ok_or_else(|| {
        AppError::not_found(anyhow::anyhow!(
            "Session '{}' has no attribute field {}",
            session_id,
            index
        ))
    })
}

#[utoipa::path(
    put,
    path = "/api/v1/sessions/{session_id}/prefix",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    request_body = PrefixRequest,
    responses(
        (status = 200, description = "Prefix updated", body = SessionView),
        (status = 404, description = "Unknown session", body = AppError),
    )
)]
pub async fn set_prefix(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
    Json(request): Json<PrefixRequest>,
) -> Result<Json<SessionView>, AppError> {
    session_view(&state, session_id, |session| session.prefix = request.prefix).await
}

/// Generate combinations.
///
/// Rebuilds the attributes from the current fields, computes every
/// combination and derives the `RESULT` column. The full table is returned.
#[utoipa::path(
    post,
    path = "/api/v1/sessions/{session_id}/generate",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Combinations generated", body = GenerationView),
        (status = 404, description = "Unknown session", body = AppError),
        (status = 422, description = "No attribute field has a value, or too many combinations", body = AppError),
        (status = 500, description = "The table cannot be written to a worksheet", body = AppError),
    )
)]
pub async fn generate(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<GenerationView>, AppError> {
    let outcome = with_session(&state, &session_id, |session| {
        session.generate().map(TableView::from)
    })
    .await?;

    match outcome {
        Ok(table) => {
            let view = GenerationView::new(table);
            info!("Session {}: {}", session_id, view.message);
            Ok(Json(view))
        }
        Err(err) => {
            warn!("Session {}: generation failed: {}", session_id, err);
            Err(AppError::from_combination_error(err))
        }
    }
}

/// Last generated table.
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}/table",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "Last generated table", body = TableView),
        (status = 404, description = "Unknown session or nothing generated yet", body = AppError),
    )
)]
pub async fn get_table(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Json<TableView>, AppError> {
    with_session(&state, &session_id, |session| {
        session.result().map(TableView::from)
    })
    .await?
    .map(Json)
    .ok_or_else(|| nothing_generated(&session_id))
}

/// Download the last generated table as an XLSX workbook.
#[utoipa::path(
    get,
    path = "/api/v1/sessions/{session_id}/download",
    tag = "Sessions",
    params(("session_id" = Uuid, Path, description = "Session identifier")),
    responses(
        (status = 200, description = "XLSX workbook attribute_combinations.xlsx"),
        (status = 404, description = "Unknown session or nothing generated yet", body = AppError),
        (status = 500, description = "Spreadsheet serialization failed", body = AppError),
    )
)]
pub async fn download(
    State(state): State<HttpServerState>,
    Path(session_id): Path<Uuid>,
) -> Result<Response, AppError> {
    // Serialize a copy so the store is not locked while encoding
    let table = with_session(&state, &session_id, |session| session.result().cloned())
        .await?
        .ok_or_else(|| nothing_generated(&session_id))?;

    let bytes = XlsxConverter::to_xlsx(&table).map_err(AppError::from_combination_error)?;
    debug!(
        "Session {}: exported {} rows in {} bytes",
        session_id,
        table.row_count(),
        bytes.len()
    );

    Response::builder()
        .header(header::CONTENT_TYPE, XLSX_CONTENT_TYPE)
        .header(
            header::CONTENT_DISPOSITION,
            XlsxConverter::content_disposition(),
        )
        .body(bytes.into())
        .map_err(|e| {
            AppError::internal_server_error(anyhow::anyhow!("Failed to build response: {}", e))
        })
}

fn nothing_generated(session_id: &Uuid) -> AppError {
    AppError::not_found(anyhow::anyhow!(
        "No combinations generated yet for session '{}'",
        session_id
    ))
}
