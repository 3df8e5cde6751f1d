/// Cell positions of a table-shaped source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub rank: usize,
    pub player: usize,
    pub metric: usize,
}

impl TableLayout {
    pub fn new(rank: usize, player: usize, metric: usize) -> Self {
        Self { rank, player, metric }
    }

    pub fn cells_needed(&self) -> usize {
        self.rank.max(self.player).max(self.metric) + 1
    }
}

/// How a source lays out one ranking row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowShape {
    /// Fixed cell positions
    Table(TableLayout),
    /// Free text, one field per line, no rank column
    TextBlock,
    /// Cells (or tab-separated fields) of uncertain order
    Loose,
    /// Player in the row's first link, metric in the last whole-number cell, no rank column
    Anchored,
}

/// Acceptance rules for player names
#[derive(Debug, Clone)]
pub struct NormalizerRules {
    /// Names must be strictly longer than this many characters
    pub min_player_len: usize,
    /// Column headers that show up as rows, matched whole and case-insensitively
    pub header_labels: Vec<&'static str>,
    /// Free-text lines containing these are page furniture, not players
    pub header_markers: Vec<&'static str>,
}

impl Default for NormalizerRules {
    fn default() -> Self {
        Self {
            min_player_len: 3,
            header_labels: vec!["rank", "player", "name", "points", "earnings", "500+"],
            header_markers: vec!["ranking", "amateur"],
        }
    }
}

impl NormalizerRules {
    pub fn is_long_enough(&self, name: &str) -> bool {
        name.chars().count() > self.min_player_len
    }

    pub fn is_header_label(&self, name: &str) -> bool {
        self.header_labels
            .iter()
            .any(|label| label.eq_ignore_ascii_case(name))
    }

    pub fn has_header_marker(&self, line: &str) -> bool {
        let line = line.to_lowercase();
        self.header_markers.iter().any(|marker| line.contains(marker))
    }

    /// Full name check: long enough, no leading `-`, not a header
    pub fn is_valid_player(&self, name: &str) -> bool {
        self.is_long_enough(name) && !name.starts_with('-') && !self.is_header_label(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_rules() {
        let rules = NormalizerRules::default();

        assert!(rules.is_valid_player("J.J. Spaun"));
        assert!(!rules.is_valid_player("Kim"));
        assert!(!rules.is_valid_player("-Scottie Scheffler"));
        assert!(!rules.is_valid_player("EARNINGS"));
        assert!(rules.is_valid_player("Frank Rank"));
    }

    #[test]
    fn test_layout_needs_highest_position() {
        assert_eq!(TableLayout::new(1, 3, 4).cells_needed(), 5);
        assert_eq!(TableLayout::new(0, 1, 2).cells_needed(), 3);
    }
}
