//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::resolve::ResolveError;
use crate::stations::DirectoryError;
use crate::tdx::TdxError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/stations", get(list_stations))
        .route("/api/stations/:name", get(lookup_station))
        .route("/api/resolve", get(resolve_query))
        .route("/api/timetable", get(timetable))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every station, ordered by code.
async fn list_stations(State(state): State<AppState>) -> Json<StationListResponse> {
    let mut stations: Vec<StationResult> = state.directory.iter().map(Into::into).collect();
    stations.sort_by(|a, b| a.code.cmp(&b.code));
    Json(StationListResponse { stations })
}

/// Look up a single station by exact name.
async fn lookup_station(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<StationResult>, AppError> {
    let code = state
        .directory
        .lookup(&name)
        .map_err(ResolveError::from)?;

    Ok(Json(StationResult {
        name,
        code: code.to_string(),
    }))
}

/// Resolve a free-text query to its provider request without calling it.
async fn resolve_query(
    State(state): State<AppState>,
    Query(req): Query<QueryRequest>,
) -> Result<Json<ResolveResponse>, AppError> {
    let resolution = state.resolver().resolve_query(&req.q)?;

    Ok(Json(ResolveResponse::new(
        resolution.query.origin_name(),
        resolution.query.destination_name(),
        &resolution.route,
        &resolution.request,
    )))
}

/// Resolve a query and fetch its trains from TDX.
async fn timetable(
    State(state): State<AppState>,
    Query(req): Query<QueryRequest>,
) -> Result<Json<TimetableResponse>, AppError> {
    let resolution = state.resolver().resolve_query(&req.q)?;

    let trains = state.tdx.get_trains(&resolution.route).await?;

    info!(
        request = %resolution.request,
        trains = trains.len(),
        "served timetable"
    );

    Ok(Json(TimetableResponse {
        query: ResolveResponse::new(
            resolution.query.origin_name(),
            resolution.query.destination_name(),
            &resolution.route,
            &resolution.request,
        ),
        trains: trains.iter().map(Into::into).collect(),
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    /// The query couldn't be resolved; no upstream call was made
    Resolve(ResolveError),
    /// The TDX call failed
    Upstream(TdxError),
}

impl From<ResolveError> for AppError {
    fn from(e: ResolveError) -> Self {
        AppError::Resolve(e)
    }
}

impl From<TdxError> for AppError {
    fn from(e: TdxError) -> Self {
        AppError::Upstream(e)
    }
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::Resolve(ResolveError::Extraction(_)) => StatusCode::BAD_REQUEST,
            AppError::Resolve(ResolveError::Directory(DirectoryError::UnknownStation(_))) => {
                StatusCode::NOT_FOUND
            }
            AppError::Upstream(TdxError::RateLimited) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upstream(TdxError::Http(e)) if e.is_timeout() => StatusCode::GATEWAY_TIMEOUT,
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Resolve(e) => ErrorResponse {
                stage: e.stage(),
                error: e.to_string(),
                fragment: Some(e.fragment().to_string()),
            },
            AppError::Upstream(e) => {
                warn!(%status, error = %e, "upstream request failed");
                ErrorResponse {
                    stage: "upstream",
                    error: e.to_string(),
                    fragment: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}
