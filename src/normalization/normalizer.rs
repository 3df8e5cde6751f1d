use log::debug;

use super::rank::{extract_rank, is_numeric, is_rank_cell};
use super::rules::{NormalizerRules, RowShape, TableLayout};
use crate::domain::{Metric, MetricKind, RankingEntry};
use crate::errors::RowMalformed;
use crate::extraction::RawRow;

/// Turns raw rows of one source into ranking entries
pub struct FieldNormalizer {
    shape: RowShape,
    metric_kind: MetricKind,
    rules: NormalizerRules,
}

impl FieldNormalizer {
    pub fn new(shape: RowShape, metric_kind: MetricKind) -> Self {
        Self::with_rules(shape, metric_kind, NormalizerRules::default())
    }

    pub fn with_rules(shape: RowShape, metric_kind: MetricKind, rules: NormalizerRules) -> Self {
        Self {
            shape,
            metric_kind,
            rules,
        }
    }

    /// Normalize a batch; malformed rows are dropped, never failing the batch
    pub fn normalize_rows(&self, rows: &[RawRow]) -> Vec<RankingEntry> {
        let mut entries = Vec::with_capacity(rows.len());
        let mut dropped = 0;

        for (idx, row) in rows.iter().enumerate() {
            // Text blocks and anchored rows carry no rank column; rank by order of accepted rows
            let next_rank = entries.len() as u32 + 1;

            match self.normalize_row(row, next_rank) {
                Ok(entry) => entries.push(entry),
                Err(reason) => {
                    dropped += 1;
                    debug!("Dropped row {}: {} ({:?})", idx + 1, reason, row.text);
                }
            }
        }

        if dropped > 0 {
            debug!("Kept {} rows, dropped {}", entries.len(), dropped);
        }
        entries
    }

    pub fn normalize_row(&self, row: &RawRow, next_rank: u32) -> Result<RankingEntry, RowMalformed> {
        match self.shape {
            RowShape::Table(layout) => self.normalize_table_row(&row.cells, layout),
            RowShape::TextBlock => self.normalize_text_block(row, next_rank),
            RowShape::Loose => self.normalize_loose_row(row),
            RowShape::Anchored => self.normalize_anchored_row(row, next_rank),
        }
    }

    // --- Table rows ---

    fn normalize_table_row(&self, cells: &[String], layout: TableLayout) -> Result<RankingEntry, RowMalformed> {
        if cells.len() < layout.cells_needed() {
            return Err(RowMalformed::MissingCells {
                found: cells.len(),
                needed: layout.cells_needed(),
            });
        }

        let rank_cell = cells[layout.rank].trim();
        let player = cells[layout.player].trim();
        let metric = cells[layout.metric].trim();

        if player.is_empty() {
            return Err(RowMalformed::MissingPlayer);
        }
        if !is_rank_cell(rank_cell) {
            return Err(RowMalformed::InvalidRank(rank_cell.to_string()));
        }
        let rank = extract_rank(rank_cell).ok_or_else(|| RowMalformed::InvalidRank(rank_cell.to_string()))?;

        self.check_player(player)?;
        Ok(RankingEntry::new(rank, player, Metric::new(self.metric_kind, metric)))
    }

    // --- Free text ---

    fn normalize_text_block(&self, row: &RawRow, rank: u32) -> Result<RankingEntry, RowMalformed> {
        // A table row reads as a block with one line per cell
        let lines: Vec<&str> = if row.cells.is_empty() {
            row.text.lines().map(str::trim).filter(|line| !line.is_empty()).collect()
        } else {
            row.cells.iter().map(|cell| cell.trim()).filter(|cell| !cell.is_empty()).collect()
        };

        let (position, player) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| self.is_player_line(line))
            .ok_or(RowMalformed::MissingPlayer)?;

        self.check_player(player)?;

        let metric = lines[position + 1..]
            .iter()
            .find(|line| is_decimal(line))
            .map_or_else(String::new, |line| (*line).to_string());

        Ok(RankingEntry::new(rank, *player, Metric::new(self.metric_kind, metric)))
    }

    fn is_player_line(&self, line: &str) -> bool {
        !is_numeric(line)
            && self.rules.is_long_enough(line)
            && !line.starts_with('+')
            && !line.starts_with('-')
            && !self.rules.has_header_marker(line)
    }

    // --- Loose rows ---

    fn normalize_loose_row(&self, row: &RawRow) -> Result<RankingEntry, RowMalformed> {
        let fields: Vec<&str> = if row.cells.is_empty() {
            row.text.split('\t').map(str::trim).collect()
        } else {
            row.cells.iter().map(|cell| cell.trim()).collect()
        };

        let mut rank = None;
        let mut player = None;
        let mut metric = None;

        for field in fields.iter().filter(|field| !field.is_empty()) {
            if rank.is_none() && is_numeric(field) {
                rank = Some(*field);
            } else if player.is_none() && !is_numeric(field) && self.rules.is_long_enough(field) {
                player = Some(*field);
            } else if player.is_some() && metric.is_none() {
                metric = Some(*field);
            }
        }

        let rank_cell = rank.ok_or_else(|| RowMalformed::InvalidRank(row.text.clone()))?;
        let rank = extract_rank(rank_cell).ok_or_else(|| RowMalformed::InvalidRank(rank_cell.to_string()))?;
        let player = player.ok_or(RowMalformed::MissingPlayer)?;
        self.check_player(player)?;

        Ok(RankingEntry::new(
            rank,
            player,
            Metric::new(self.metric_kind, metric.unwrap_or_default()),
        ))
    }

    // --- Anchored rows ---

    fn normalize_anchored_row(&self, row: &RawRow, rank: u32) -> Result<RankingEntry, RowMalformed> {
        let player = row
            .links
            .iter()
            .map(|link| link.trim())
            .find(|link| !link.is_empty())
            .ok_or(RowMalformed::MissingPlayer)?;
        self.check_player(player)?;

        let metric = row
            .cells
            .iter()
            .rev()
            .map(|cell| cell.trim())
            .find(|cell| is_numeric(&cell.replace(',', "")))
            .unwrap_or_default();

        Ok(RankingEntry::new(rank, player, Metric::new(self.metric_kind, metric)))
    }

    fn check_player(&self, player: &str) -> Result<(), RowMalformed> {
        if self.rules.is_valid_player(player) {
            Ok(())
        } else {
            Err(RowMalformed::InvalidPlayer(player.to_string()))
        }
    }
}

fn is_decimal(line: &str) -> bool {
    line.trim_start_matches('+').parse::<f64>().is_ok()
}
