use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::errors::RankingsError;

/// Placeholder recorded when a source publishes no metric for a player
pub const MISSING_METRIC: &str = "N/A";

/// Ranking providers tracked in the snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum)]
#[value(rename_all = "lower")]
pub enum SourceId {
    Owgr,
    DataGolf,
    Fedex,
}

impl SourceId {
    pub fn all() -> [SourceId; 3] {
        [SourceId::Owgr, SourceId::DataGolf, SourceId::Fedex]
    }

    /// Key used for this source in the snapshot document
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceId::Owgr => "owgr",
            SourceId::DataGolf => "datagolf",
            SourceId::Fedex => "fedex",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SourceId::Owgr => "OWGR",
            SourceId::DataGolf => "Data Golf",
            SourceId::Fedex => "FedEx Cup",
        }
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unit of the metric column; decides the JSON key (`points` or `rating`)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricKind {
    Points,
    Rating,
}

/// Source-specific metric value, kept as the text the source published
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metric {
    pub kind: MetricKind,
    pub value: String,
}

impl Metric {
    pub fn new(kind: MetricKind, value: impl Into<String>) -> Self {
        let value = value.into();
        let value = if value.trim().is_empty() {
            MISSING_METRIC.to_string()
        } else {
            value.trim().to_string()
        };
        Self { kind, value }
    }

    pub fn points(value: impl Into<String>) -> Self {
        Self::new(MetricKind::Points, value)
    }

    pub fn rating(value: impl Into<String>) -> Self {
        Self::new(MetricKind::Rating, value)
    }
}

/// One ranked player of one source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "EntryRecord", try_from = "EntryRecord")]
pub struct RankingEntry {
    pub rank: u32,
    pub player: String,
    pub metric: Metric,
}

impl RankingEntry {
    pub fn new(rank: u32, player: impl Into<String>, metric: Metric) -> Self {
        Self {
            rank,
            player: player.into(),
            metric,
        }
    }
}

/// Ordered list of one source's entries, ascending by rank
pub type SourceRankingList = Vec<RankingEntry>;

/// The persisted document: every source's list plus provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankingsSnapshot {
    pub timestamp: String,
    pub source: String,
    #[serde(flatten)]
    pub sources: BTreeMap<String, SourceRankingList>,
}

impl RankingsSnapshot {
    pub fn get(&self, source: &str) -> Option<&SourceRankingList> {
        self.sources.get(source)
    }

    pub fn contains(&self, source: &str) -> bool {
        self.sources.contains_key(source)
    }

    pub fn total_entries(&self) -> usize {
        self.sources.values().map(Vec::len).sum()
    }
}

// --- Wire format ---

/// JSON shape of an entry: rank as a digit string, metric under `points` or `rating`
#[derive(Debug, Serialize, Deserialize)]
struct EntryRecord {
    rank: String,
    player: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    points: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    rating: Option<String>,
}

impl From<RankingEntry> for EntryRecord {
    fn from(entry: RankingEntry) -> Self {
        let (points, rating) = match entry.metric.kind {
            MetricKind::Points => (Some(entry.metric.value), None),
            MetricKind::Rating => (None, Some(entry.metric.value)),
        };
        Self {
            rank: entry.rank.to_string(),
            player: entry.player,
            points,
            rating,
        }
    }
}

impl TryFrom<EntryRecord> for RankingEntry {
    type Error = RankingsError;

    fn try_from(record: EntryRecord) -> Result<Self, Self::Error> {
        let rank = parse_stored_rank(&record.rank)
            .ok_or_else(|| RankingsError::InvalidEntry(format!("bad rank {:?} for {}", record.rank, record.player)))?;

        let metric = match (record.points, record.rating) {
            (Some(points), _) => Metric::points(points),
            (None, Some(rating)) => Metric::rating(rating),
            (None, None) => {
                return Err(RankingsError::InvalidEntry(format!(
                    "no points or rating for {}",
                    record.player
                )));
            }
        };

        Ok(RankingEntry::new(rank, record.player, metric))
    }
}

fn parse_stored_rank(rank: &str) -> Option<u32> {
    let rank = rank.trim();
    if rank.is_empty() || !rank.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    rank.parse().ok().filter(|r| *r > 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_serializes_metric_under_source_key() {
        let owgr = RankingEntry::new(1, "Scottie Scheffler", Metric::points("20.03"));
        let datagolf = RankingEntry::new(2, "Rory McIlroy", Metric::rating("2.080"));

        let owgr_json = serde_json::to_value(&owgr).unwrap();
        let datagolf_json = serde_json::to_value(&datagolf).unwrap();

        assert_eq!(
            owgr_json,
            serde_json::json!({"rank": "1", "player": "Scottie Scheffler", "points": "20.03"})
        );
        assert_eq!(
            datagolf_json,
            serde_json::json!({"rank": "2", "player": "Rory McIlroy", "rating": "2.080"})
        );
    }

    #[test]
    fn test_entry_rejects_non_digit_rank() {
        let json = r#"{"rank": "T5", "player": "Tom Kim", "points": "2.21"}"#;
        assert!(serde_json::from_str::<RankingEntry>(json).is_err());

        let json = r#"{"rank": "0", "player": "Tom Kim", "points": "2.21"}"#;
        assert!(serde_json::from_str::<RankingEntry>(json).is_err());
    }

    #[test]
    fn test_entry_requires_a_metric() {
        let json = r#"{"rank": "4", "player": "Justin Thomas"}"#;
        assert!(serde_json::from_str::<RankingEntry>(json).is_err());
    }

    #[test]
    fn test_snapshot_flattens_sources_to_top_level_keys() {
        let json = r#"{
            "timestamp": "2025-08-14T17:10:00",
            "source": "manual",
            "owgr": [{"rank": "1", "player": "Scottie Scheffler", "points": "20.03"}],
            "datagolf": [],
            "fedex": [{"rank": "1", "player": "Scottie Scheffler", "points": "5456"}]
        }"#;

        let snapshot: RankingsSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(snapshot.timestamp, "2025-08-14T17:10:00");
        assert_eq!(snapshot.sources.len(), 3);
        assert_eq!(snapshot.get("fedex").unwrap()[0].metric.value, "5456");
        assert!(snapshot.get("datagolf").unwrap().is_empty());
        assert_eq!(snapshot.total_entries(), 2);

        let back = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(back["owgr"][0]["points"], "20.03");
        assert_eq!(back["source"], "manual");
    }

    #[test]
    fn test_empty_metric_becomes_placeholder() {
        assert_eq!(Metric::points("  ").value, MISSING_METRIC);
        assert_eq!(Metric::rating(" 1.2 ").value, "1.2");
    }
}
