use crate::{dto::health::HealthResponse, state::SharedState};

/// Respond with a static health payload alongside the current leaderboard size.
pub async fn health_status(state: &SharedState) -> HealthResponse {
    HealthResponse::ok(state.leaderboard().len().await)
}
