use thiserror::Error;

/// Failures of the rankings pipeline
#[derive(Debug, Error)]
pub enum RankingsError {
    /// Navigation, timeout, or no strategy matched; the source contributes an empty list
    #[error("source {source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    /// A corrective patch named a source the snapshot does not hold
    #[error("snapshot has no entry for source {0}")]
    SnapshotTargetMissing(String),

    #[error("invalid ranking entry: {0}")]
    InvalidEntry(String),

    #[error("snapshot storage failed for {path}: {message}")]
    Storage { path: String, message: String },
}

/// Why a single scraped row was dropped
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowMalformed {
    #[error("row has {found} cells, needs {needed}")]
    MissingCells { found: usize, needed: usize },

    #[error("rank cell {0:?} is not numeric")]
    InvalidRank(String),

    #[error("player name {0:?} rejected")]
    InvalidPlayer(String),

    #[error("no player name found")]
    MissingPlayer,
}

impl RankingsError {
    pub fn unavailable(source_name: impl Into<String>, reason: impl ToString) -> Self {
        Self::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }
}

/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}
