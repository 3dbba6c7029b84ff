use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{HeaderValue, StatusCode, header},
    routing::get,
};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::{
    dto::scores::{ListScoresQuery, ScoresResponse, SubmitScoreRequest},
    error::AppError,
    services::scores_service,
    state::SharedState,
};

/// Leaderboard endpoints: listing, submission and CORS preflight.
pub fn router() -> Router<SharedState> {
    Router::new()
        .route(
            "/api/scores",
            get(list_scores)
                .head(method_not_allowed)
                .post(submit_score)
                .options(preflight)
                .fallback(method_not_allowed),
        )
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json"),
        ))
}

#[utoipa::path(
    get,
    path = "/api/scores",
    tag = "scores",
    params(ListScoresQuery),
    responses((status = 200, description = "One page of the leaderboard", body = ScoresResponse))
)]
/// Return a page of the leaderboard. Malformed parameters fall back to the first page of 5.
pub async fn list_scores(
    State(state): State<SharedState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<ScoresResponse> {
    let query = pairs
        .map(|Query(pairs)| ListScoresQuery::from_pairs(pairs))
        .unwrap_or_default();
    Json(scores_service::list_scores(&state, &query).await)
}

#[utoipa::path(
    post,
    path = "/api/scores",
    tag = "scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 200, description = "Score ranked; returns the top 5 and the placement", body = ScoresResponse),
        (status = 400, description = "Body is not a valid score", body = String, content_type = "text/plain")
    )
)]
/// Submit a score and learn its rank and percentile.
pub async fn submit_score(
    State(state): State<SharedState>,
    body: Bytes,
) -> Result<Json<ScoresResponse>, AppError> {
    let payload = scores_service::submit_score(&state, &body).await?;
    Ok(Json(payload))
}

#[utoipa::path(
    options,
    path = "/api/scores",
    tag = "scores",
    responses((status = 200, description = "CORS preflight acknowledged"))
)]
/// Answer CORS preflight requests with an empty body.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
