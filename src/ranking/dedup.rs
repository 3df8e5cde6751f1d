use std::collections::HashSet;

use crate::domain::{RankingEntry, SourceRankingList};

/// Keep the first occurrence of each player name (exact, case-sensitive),
/// preserving the original order
pub fn dedupe(entries: &[RankingEntry]) -> SourceRankingList {
    let mut seen = HashSet::new();
    entries
        .iter()
        .filter(|entry| seen.insert(entry.player.as_str()))
        .cloned()
        .collect()
}

/// Truncate to the first `max` entries
pub fn cap(mut entries: SourceRankingList, max: usize) -> SourceRankingList {
    entries.truncate(max);
    entries
}

pub fn dedupe_and_cap(entries: &[RankingEntry], max: Option<usize>) -> SourceRankingList {
    let unique = dedupe(entries);
    match max {
        Some(max) => cap(unique, max),
        None => unique,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Metric;

    fn entry(rank: u32, player: &str) -> RankingEntry {
        RankingEntry::new(rank, player, Metric::points("1.00"))
    }

    fn players(entries: &[RankingEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.player.as_str()).collect()
    }

    #[test]
    fn test_first_occurrence_wins() {
        let input = vec![
            entry(1, "Alpha Player"),
            entry(2, "Bravo Player"),
            entry(3, "Alpha Player"),
            entry(4, "Charlie Player"),
        ];

        let output = dedupe(&input);

        assert_eq!(players(&output), vec!["Alpha Player", "Bravo Player", "Charlie Player"]);
        assert_eq!(output[0].rank, 1);
    }

    #[test]
    fn test_dedupe_is_idempotent() {
        let input = vec![
            entry(1, "Jon Rahm"),
            entry(2, "jon rahm"),
            entry(3, "Jon Rahm"),
            entry(4, "Tom Kim"),
            entry(5, "Tom Kim"),
        ];

        let once = dedupe(&input);
        let twice = dedupe(&once);

        assert_eq!(once, twice);
        assert_eq!(players(&once), vec!["Jon Rahm", "jon rahm", "Tom Kim"]);
    }

    #[test]
    fn test_cap_keeps_prefix() {
        let input: Vec<_> = (1..=10).map(|i| entry(i, &format!("Player {i}"))).collect();

        let capped = dedupe_and_cap(&input, Some(4));

        assert_eq!(capped.len(), 4);
        assert_eq!(capped, input[..4].to_vec());
    }

    #[test]
    fn test_cap_after_dedupe() {
        let input = vec![
            entry(1, "Alpha Player"),
            entry(2, "Alpha Player"),
            entry(3, "Bravo Player"),
            entry(4, "Charlie Player"),
        ];

        let capped = dedupe_and_cap(&input, Some(2));

        assert_eq!(players(&capped), vec!["Alpha Player", "Bravo Player"]);
    }

    #[test]
    fn test_short_list_is_untouched_by_cap() {
        let input = vec![entry(1, "Alpha Player")];

        assert_eq!(dedupe_and_cap(&input, Some(50)), input);
        assert_eq!(dedupe_and_cap(&input, None), input);
    }
}
