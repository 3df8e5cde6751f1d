use chrono::{SecondsFormat, Utc};
use std::collections::BTreeMap;

use crate::domain::{RankingsSnapshot, SourceId, SourceRankingList};
use crate::errors::RankingsError;
use crate::ranking::dedupe;

/// What to do when a correction names a source the snapshot lacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchPolicy {
    /// Fail with `SnapshotTargetMissing`
    ReplaceExisting,
    /// Insert the source
    CreateOrReplace,
}

/// Timestamp and free-text description written into a snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    pub timestamp: String,
    pub description: String,
}

impl Provenance {
    pub fn new(timestamp: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            description: description.into(),
        }
    }

    /// Stamped with the current UTC time, ISO-8601
    pub fn now(description: impl Into<String>) -> Self {
        Self::new(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true), description)
    }
}

/// Build a snapshot from scratch out of per-source lists
pub fn from_sources<I, K>(provenance: Provenance, sources: I) -> RankingsSnapshot
where
    I: IntoIterator<Item = (K, SourceRankingList)>,
    K: Into<String>,
{
    RankingsSnapshot {
        timestamp: provenance.timestamp,
        source: provenance.description,
        sources: sources
            .into_iter()
            .map(|(name, list)| (name.into(), list))
            .collect::<BTreeMap<_, _>>(),
    }
}

/// Full build over the three tracked sources
pub fn full_build(
    provenance: Provenance,
    owgr: SourceRankingList,
    datagolf: SourceRankingList,
    fedex: SourceRankingList,
) -> RankingsSnapshot {
    from_sources(
        provenance,
        [
            (SourceId::Owgr.as_str(), owgr),
            (SourceId::DataGolf.as_str(), datagolf),
            (SourceId::Fedex.as_str(), fedex),
        ],
    )
}

/// Replace one source's list; every other source is carried over untouched
pub fn patch(
    snapshot: &RankingsSnapshot,
    source: &str,
    list: SourceRankingList,
    provenance: Provenance,
    policy: PatchPolicy,
) -> Result<RankingsSnapshot, RankingsError> {
    check_target(snapshot, source, policy)?;

    let mut patched = restamp(snapshot, provenance);
    patched.sources.insert(source.to_string(), list);
    Ok(patched)
}

/// Append entries to one source; players already listed keep their entry
pub fn extend(
    snapshot: &RankingsSnapshot,
    source: &str,
    extra: SourceRankingList,
    provenance: Provenance,
    policy: PatchPolicy,
) -> Result<RankingsSnapshot, RankingsError> {
    check_target(snapshot, source, policy)?;

    let mut combined = snapshot.get(source).cloned().unwrap_or_default();
    combined.extend(extra);

    let mut extended = restamp(snapshot, provenance);
    extended.sources.insert(source.to_string(), dedupe(&combined));
    Ok(extended)
}

fn check_target(snapshot: &RankingsSnapshot, source: &str, policy: PatchPolicy) -> Result<(), RankingsError> {
    if policy == PatchPolicy::ReplaceExisting && !snapshot.contains(source) {
        return Err(RankingsError::SnapshotTargetMissing(source.to_string()));
    }
    Ok(())
}

fn restamp(snapshot: &RankingsSnapshot, provenance: Provenance) -> RankingsSnapshot {
    RankingsSnapshot {
        timestamp: provenance.timestamp,
        source: provenance.description,
        sources: snapshot.sources.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Metric, RankingEntry};

    fn points(rows: &[(u32, &str, &str)]) -> SourceRankingList {
        rows.iter()
            .map(|(rank, player, value)| RankingEntry::new(*rank, *player, Metric::points(*value)))
            .collect()
    }

    fn ratings(rows: &[(u32, &str, &str)]) -> SourceRankingList {
        rows.iter()
            .map(|(rank, player, value)| RankingEntry::new(*rank, *player, Metric::rating(*value)))
            .collect()
    }

    fn scraped_snapshot() -> RankingsSnapshot {
        full_build(
            Provenance::new("2025-08-14T17:05:00", "Real data from official websites"),
            points(&[
                (1, "Scottie Scheffler", "20.03"),
                (2, "Rory McIlroy", "11.31"),
                (3, "Xander Schauffele", "6.93"),
            ]),
            ratings(&[(1, "Scottie Scheffler", "3.121"), (2, "Rory McIlroy", "2.080")]),
            points(&[(1, "Scottie Scheffler", "5.456"), (2, "Rory McIlroy", "3.444")]),
        )
    }

    fn corrected_fedex() -> SourceRankingList {
        points(&[
            (1, "Scottie Scheffler", "5456"),
            (2, "Rory McIlroy", "3444"),
            (3, "J.J. Spaun", "3344"),
            (4, "Justin Rose", "3220"),
            (5, "Sepp Straka", "2783"),
        ])
    }

    #[test]
    fn test_full_build_holds_all_sources() {
        let snapshot = scraped_snapshot();

        assert_eq!(snapshot.timestamp, "2025-08-14T17:05:00");
        assert_eq!(snapshot.source, "Real data from official websites");
        assert_eq!(snapshot.get("owgr").unwrap().len(), 3);
        assert_eq!(snapshot.get("datagolf").unwrap().len(), 2);
        assert_eq!(snapshot.get("fedex").unwrap().len(), 2);
    }

    #[test]
    fn test_patch_leaves_other_sources_identical() {
        let before = scraped_snapshot();

        let after = patch(
            &before,
            "fedex",
            corrected_fedex(),
            Provenance::new("2025-08-14T17:10:00", "fixed FedEx Cup rankings and points"),
            PatchPolicy::ReplaceExisting,
        )
        .unwrap();

        assert_eq!(after.get("fedex"), Some(&corrected_fedex()));
        assert_eq!(after.timestamp, "2025-08-14T17:10:00");
        assert_eq!(after.source, "fixed FedEx Cup rankings and points");
        for untouched in ["owgr", "datagolf"] {
            assert_eq!(
                serde_json::to_string(&after.get(untouched)).unwrap(),
                serde_json::to_string(&before.get(untouched)).unwrap()
            );
        }
        // input is left as it was
        assert_eq!(before.get("fedex").unwrap()[0].metric.value, "5.456");
    }

    #[test]
    fn test_patch_missing_source_policy() {
        let mut snapshot = scraped_snapshot();
        snapshot.sources.remove("fedex");
        let provenance = Provenance::new("2025-08-14T17:10:00", "fix");

        let err = patch(
            &snapshot,
            "fedex",
            corrected_fedex(),
            provenance.clone(),
            PatchPolicy::ReplaceExisting,
        )
        .unwrap_err();
        assert!(matches!(err, RankingsError::SnapshotTargetMissing(ref name) if name == "fedex"));

        let created = patch(
            &snapshot,
            "fedex",
            corrected_fedex(),
            provenance,
            PatchPolicy::CreateOrReplace,
        )
        .unwrap();
        assert_eq!(created.get("fedex").unwrap().len(), 5);
    }

    #[test]
    fn test_extend_appends_without_duplicates() {
        let snapshot = scraped_snapshot();

        let extended = extend(
            &snapshot,
            "owgr",
            points(&[(3, "Xander Schauffele", "9.99"), (4, "Justin Thomas", "6.11")]),
            Provenance::new("2025-08-15T09:00:00", "extended"),
            PatchPolicy::ReplaceExisting,
        )
        .unwrap();

        let owgr = extended.get("owgr").unwrap();
        assert_eq!(owgr.len(), 4);
        assert_eq!(owgr[2].metric.value, "6.93");
        assert_eq!(owgr[3].player, "Justin Thomas");
        assert_eq!(extended.get("fedex"), snapshot.get("fedex"));
    }

    #[test]
    fn test_provenance_now_is_iso8601() {
        let provenance = Provenance::now("scrape");

        assert!(chrono::DateTime::parse_from_rfc3339(&provenance.timestamp).is_ok());
        assert_eq!(provenance.description, "scrape");
    }
}
