//! Wire types exchanged on `/api/scores`.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::state::leaderboard::{NewScore, ScoreEntry};

/// Raw pagination parameters; unparsable values count as zero.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListScoresQuery {
    /// 1-based page number.
    #[param(value_type = Option<i64>)]
    pub page: Option<String>,
    /// Maximum entries per page (defaults to 5).
    #[param(value_type = Option<i64>)]
    pub limit: Option<String>,
}

impl ListScoresQuery {
    /// Build from raw query pairs, keeping the first value of each key.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "page" => &mut query.page,
                "limit" => &mut query.limit,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }

    /// Requested page, or 0 when absent or non-numeric.
    pub fn page(&self) -> i64 {
        parse_or_zero(self.page.as_deref())
    }

    /// Requested page size, or 0 when absent or non-numeric.
    pub fn limit(&self) -> i64 {
        parse_or_zero(self.limit.as_deref())
    }
}

fn parse_or_zero(value: Option<&str>) -> i64 {
    value.and_then(|raw| raw.parse().ok()).unwrap_or(0)
}

/// Score submitted by a player. Any `rank` sent by the client is ignored.
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitScoreRequest {
    /// Player name.
    pub name: String,
    /// Points achieved.
    pub score: i64,
    /// Free-form completion time, stored verbatim.
    pub time: String,
}

impl SubmitScoreRequest {
    /// Decode the first JSON value of `body`; anything after it is ignored.
    pub fn decode(body: &[u8]) -> serde_json::Result<Self> {
        match serde_json::Deserializer::from_slice(body)
            .into_iter::<Self>()
            .next()
        {
            Some(result) => result,
            // Empty or whitespace-only body: let the strict decoder report EOF.
            None => serde_json::from_slice(body),
        }
    }
}

impl From<SubmitScoreRequest> for NewScore {
    fn from(value: SubmitScoreRequest) -> Self {
        Self {
            name: value.name,
            score: value.score,
            time: value.time,
        }
    }
}

/// Leaderboard row as exposed to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ScoreView {
    /// Player name.
    pub name: String,
    /// 1-based position on the leaderboard.
    pub rank: usize,
    /// Points achieved.
    pub score: i64,
    /// Completion time as submitted.
    pub time: String,
}

impl From<ScoreEntry> for ScoreView {
    fn from(entry: ScoreEntry) -> Self {
        Self {
            name: entry.name,
            rank: entry.rank,
            score: entry.score,
            time: entry.time,
        }
    }
}

/// Response shared by listing and submission.
///
/// `rank` and `percentile` are only present after a submission and describe the
/// submitted score.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoresResponse {
    /// Requested page, or the top 5 after a submission.
    pub scores: Vec<ScoreView>,
    /// Page count for the page size in effect.
    pub total_pages: usize,
    /// Rank of the submitted score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<usize>,
    /// Share of entries ranked below the submitted score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentile: Option<u8>,
}
