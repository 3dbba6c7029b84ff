//! Service helpers bridging the score DTOs and the in-memory leaderboard.

use tracing::{debug, info};

use crate::{
    dto::scores::{ListScoresQuery, ScoresResponse, SubmitScoreRequest},
    error::AppError,
    state::SharedState,
};

/// Return one page of the ranked leaderboard.
pub async fn list_scores(state: &SharedState, query: &ListScoresQuery) -> ScoresResponse {
    let page = state
        .leaderboard()
        .list(query.page(), query.limit())
        .await;

    ScoresResponse {
        scores: page.entries.into_iter().map(Into::into).collect(),
        total_pages: page.total_pages,
        rank: None,
        percentile: None,
    }
}

/// Decode a raw submission body, rank it and return the podium with its placement.
///
/// Nothing is stored when the body fails to decode.
pub async fn submit_score(state: &SharedState, body: &[u8]) -> Result<ScoresResponse, AppError> {
    let request = SubmitScoreRequest::decode(body).inspect_err(|err| {
        debug!(error = %err, "rejecting undecodable score submission");
    })?;

    let name = request.name.clone();
    let score = request.score;
    let placement = state.leaderboard().submit(request.into()).await;
    info!(
        %name,
        score,
        rank = placement.rank,
        percentile = placement.percentile,
        "score submitted"
    );

    Ok(ScoresResponse {
        scores: placement.top.into_iter().map(Into::into).collect(),
        total_pages: placement.total_pages,
        rank: Some(placement.rank),
        percentile: Some(placement.percentile),
    })
}
