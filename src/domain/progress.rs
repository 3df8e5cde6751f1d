use colored::Colorize;
use log::info;

use super::models::{RankingsSnapshot, SourceRankingList};

const PREVIEW_SIZE: usize = 5;

/// Per-source entry counts of one run, printed before exit
pub struct RunSummary<'a> {
    title: &'a str,
    snapshot: &'a RankingsSnapshot,
}

impl<'a> RunSummary<'a> {
    pub fn new(title: &'a str, snapshot: &'a RankingsSnapshot) -> Self {
        Self { title, snapshot }
    }

    pub fn counts(&self) -> Vec<(&'a str, usize)> {
        self.snapshot
            .sources
            .iter()
            .map(|(name, list)| (name.as_str(), list.len()))
            .collect()
    }

    pub fn print(&self) {
        let rule = "=".repeat(60);
        println!("\n{rule}");
        println!("{}", self.title.bold());
        println!("{rule}");

        for (name, count) in self.counts() {
            let line = format!("{name}: {count} players");
            if count == 0 {
                println!("{} {}", "✗".red(), line.red());
            } else {
                println!("{} {}", "✓".green(), line);
            }
        }
        println!("Total players collected: {}", self.snapshot.total_entries());
        println!("{rule}");

        for (name, list) in &self.snapshot.sources {
            print_preview(name, list);
        }

        info!(
            "Summary printed for snapshot {} ({})",
            self.snapshot.timestamp, self.snapshot.source
        );
    }
}

fn print_preview(name: &str, list: &SourceRankingList) {
    if list.is_empty() {
        return;
    }

    println!("\nTop {} {} (of {}):", PREVIEW_SIZE.min(list.len()), name.cyan(), list.len());
    for entry in list.iter().take(PREVIEW_SIZE) {
        println!("  {}. {} - {}", entry.rank, entry.player, entry.metric.value);
    }
}
