pub mod leaderboard;

use std::sync::Arc;

use self::leaderboard::Leaderboard;

pub type SharedState = Arc<AppState>;

/// Central application state handed to every request handler.
#[derive(Debug, Default)]
pub struct AppState {
    leaderboard: Leaderboard,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    ///
    /// The leaderboard starts empty and lives as long as the process.
    pub fn new() -> SharedState {
        Arc::new(Self::default())
    }

    /// Ranked score collection shared by all requests.
    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }
}
