use anyhow::{Context, Result};
use log::{info, warn};
use std::fs;
use std::path::Path;

use crate::config::find_source;
use crate::domain::{Metric, RankingsSnapshot, RunSummary, SourceId, SourceRankingList};
use crate::ranking::dedupe;
use crate::snapshot::{PatchPolicy, Provenance, SnapshotStore, extend, patch};

/// How a correction file is applied to its source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrectionMode {
    Replace(PatchPolicy),
    Extend,
}

/// Applies hand-entered ranking lists to the stored snapshot
pub struct CorrectionService {
    store: SnapshotStore,
}

impl CorrectionService {
    pub fn new(store: SnapshotStore) -> Self {
        Self { store }
    }

    pub fn run(
        &self,
        source: SourceId,
        file: &Path,
        mode: CorrectionMode,
        note: Option<String>,
    ) -> Result<RankingsSnapshot> {
        info!("=== Applying {} correction from {} ===", source.display_name(), file.display());

        let list = load_correction_file(file, source)?;
        info!("  → Loaded {} corrected entries", list.len());

        let current = self.store.load()?;
        let updated = apply_correction(&current, source, list, mode, note)?;

        self.store.save(&updated)?;
        RunSummary::new("CORRECTION APPLIED", &updated).print();
        Ok(updated)
    }
}

/// Apply a correction list to a snapshot without touching storage
pub fn apply_correction(
    current: &RankingsSnapshot,
    source: SourceId,
    list: SourceRankingList,
    mode: CorrectionMode,
    note: Option<String>,
) -> Result<RankingsSnapshot> {
    let provenance = Provenance::now(note.unwrap_or_else(|| default_note(source, mode)));

    let updated = match mode {
        CorrectionMode::Replace(policy) => patch(current, source.as_str(), list, provenance, policy),
        CorrectionMode::Extend => extend(
            current,
            source.as_str(),
            list,
            provenance,
            PatchPolicy::CreateOrReplace,
        ),
    };

    Ok(updated?)
}

/// Read a JSON array of entries, unify the metric unit with the source, drop repeated players
pub fn load_correction_file(file: &Path, source: SourceId) -> Result<SourceRankingList> {
    let json = fs::read_to_string(file)
        .with_context(|| format!("Failed to read correction file {}", file.display()))?;
    let entries: SourceRankingList = serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse correction file {}", file.display()))?;

    let Some(config) = find_source(source) else {
        return Ok(dedupe(&entries));
    };

    let unified: SourceRankingList = entries
        .into_iter()
        .map(|mut entry| {
            if entry.metric.kind != config.metric {
                warn!("  Metric of {} stored as {:?}", entry.player, config.metric);
                entry.metric = Metric::new(config.metric, entry.metric.value);
            }
            entry
        })
        .collect();

    Ok(dedupe(&unified))
}

fn default_note(source: SourceId, mode: CorrectionMode) -> String {
    match mode {
        CorrectionMode::Replace(_) => format!("Manual correction of {} rankings", source.display_name()),
        CorrectionMode::Extend => format!("Extended {} rankings", source.display_name()),
    }
}
