use utoipa::OpenApi;

#[derive(OpenApi)]
/// Aggregated OpenAPI specification for the leaderboard backend.
#[openapi(
    paths(
        crate::routes::health::healthcheck,
        crate::routes::scores::list_scores,
        crate::routes::scores::submit_score,
        crate::routes::scores::preflight,
    ),
    components(
        schemas(
            crate::dto::health::HealthResponse,
            crate::dto::scores::SubmitScoreRequest,
            crate::dto::scores::ScoreView,
            crate::dto::scores::ScoresResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "scores", description = "Leaderboard listing and score submission"),
    )
)]
pub struct ApiDoc;
