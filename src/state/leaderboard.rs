//! In-memory leaderboard kept in score-descending order with dense 1-based ranks.

use tokio::sync::RwLock;

/// Number of entries per page when the caller does not ask for a usable limit.
pub const DEFAULT_PAGE_SIZE: usize = 5;
/// Number of top entries echoed back after a submission.
pub const PODIUM_SIZE: usize = 5;

/// A single leaderboard record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    /// Submitter label; not unique.
    pub name: String,
    /// Primary sort key, higher is better.
    pub score: i64,
    /// Opaque to the store: never parsed nor used for ordering.
    pub time: String,
    /// 1-based position in the collection, rewritten on every insertion.
    pub rank: usize,
}

/// Fields supplied by a submitter; the rank is always derived by the store.
#[derive(Debug, Clone)]
pub struct NewScore {
    /// Submitter label.
    pub name: String,
    /// Points achieved.
    pub score: i64,
    /// Completion time, kept verbatim.
    pub time: String,
}

/// Window into the ranked collection returned by [`Leaderboard::list`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    /// Entries of the requested window, in rank order.
    pub entries: Vec<ScoreEntry>,
    /// Number of pages for the effective page size.
    pub total_pages: usize,
}

/// Outcome of [`Leaderboard::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Leading entries of the collection, at most [`PODIUM_SIZE`].
    pub top: Vec<ScoreEntry>,
    /// Page count for a page size of [`PODIUM_SIZE`].
    pub total_pages: usize,
    /// Rank of the submitted score.
    pub rank: usize,
    /// Share of entries ranked below the submitted score, in whole percent.
    pub percentile: u8,
}

/// Score-ordered collection guarded by a read/write lock.
///
/// Readers share the lock and always observe a fully ranked collection; a
/// submission holds the write guard from insertion until its response is built.
#[derive(Debug, Default)]
pub struct Leaderboard {
    entries: RwLock<Vec<ScoreEntry>>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of entries currently ranked.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Whether no score has been submitted yet.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Return page `page` (1-based) holding at most `limit` entries.
    ///
    /// Values below 1 fall back to the first page and [`DEFAULT_PAGE_SIZE`]. Pages
    /// past the end are empty rather than an error.
    pub async fn list(&self, page: i64, limit: i64) -> Page {
        let page = usize::try_from(page).ok().filter(|p| *p >= 1).unwrap_or(1);
        let limit = usize::try_from(limit)
            .ok()
            .filter(|l| *l >= 1)
            .unwrap_or(DEFAULT_PAGE_SIZE);

        let entries = self.entries.read().await;
        let start = (page - 1).saturating_mul(limit);
        let end = start.saturating_add(limit).min(entries.len());

        Page {
            entries: entries.get(start..end).map(<[_]>::to_vec).unwrap_or_default(),
            total_pages: total_pages(entries.len(), limit),
        }
    }

    /// Insert a score, re-rank the collection and report where it landed.
    ///
    /// Equal scores keep submission order, so a newcomer ranks below every entry
    /// already holding the same score.
    pub async fn submit(&self, score: NewScore) -> Placement {
        let mut entries = self.entries.write().await;

        let index = entries.partition_point(|entry| entry.score >= score.score);
        entries.insert(
            index,
            ScoreEntry {
                name: score.name,
                score: score.score,
                time: score.time,
                rank: 0,
            },
        );
        for (offset, entry) in entries[index..].iter_mut().enumerate() {
            entry.rank = index + offset + 1;
        }

        let total = entries.len();
        let rank = index + 1;
        Placement {
            top: entries[..total.min(PODIUM_SIZE)].to_vec(),
            total_pages: total_pages(total, PODIUM_SIZE),
            rank,
            percentile: percentile(rank, total),
        }
    }
}

fn total_pages(len: usize, limit: usize) -> usize {
    len.div_ceil(limit)
}

/// Share of the collection ranked strictly below `rank`, truncated to a whole percent.
fn percentile(rank: usize, total: usize) -> u8 {
    if total == 0 || rank == 0 || rank > total {
        return 0;
    }
    // (total - rank) < total, so the quotient always fits in 0..100.
    (((total - rank) as u128 * 100) / total as u128) as u8
}
