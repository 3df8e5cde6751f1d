use anyhow::Result;
use log::{info, warn};
use std::future::Future;
use std::time::Duration;

use crate::config::{AppConfig, SourceConfig};
use crate::domain::{RankingsSnapshot, RunSummary, SourceId, SourceRankingList};
use crate::fetchers::RankingScraper;
use crate::snapshot::{Provenance, SnapshotStore, from_sources};

const PROVENANCE: &str = "Scraped from official ranking sites";

/// Full scrape run: every source concurrently, then one snapshot write
pub struct ScrapeService {
    config: AppConfig,
    scraper: RankingScraper,
    store: SnapshotStore,
}

impl ScrapeService {
    pub fn new(config: AppConfig) -> Result<Self> {
        let scraper = RankingScraper::new(&config.scraper)?;
        let store = SnapshotStore::new(&config.snapshot.path);
        Ok(Self {
            config,
            scraper,
            store,
        })
    }

    pub async fn run(&self) -> Result<RankingsSnapshot> {
        info!("=== Starting Rankings Scrape ===\n");

        // Step 1: Fetch every source
        let budget = Duration::from_secs(self.config.scraper.source_budget_secs);
        let scraper = self.scraper.clone();
        let results = fetch_all(&self.config.sources, budget, move |source| {
            let scraper = scraper.clone();
            async move { scraper.scrape_source(&source).await }
        })
        .await;

        // Step 2: Assemble and save
        let snapshot = from_sources(
            Provenance::now(PROVENANCE),
            results.into_iter().map(|(id, list)| (id.as_str(), list)),
        );
        self.store.save(&snapshot)?;
        info!("  → Saved snapshot to {}\n", self.store.path().display());

        RunSummary::new("SCRAPING COMPLETE", &snapshot).print();
        info!("=== Scrape Complete ===");
        Ok(snapshot)
    }
}

/// Fetch every source in its own task, each bounded by `budget`.
///
/// A failing, panicking, or timed-out source yields an empty list; results
/// come back in configuration order once every task has finished.
pub async fn fetch_all<F, Fut>(
    sources: &[SourceConfig],
    budget: Duration,
    fetch: F,
) -> Vec<(SourceId, SourceRankingList)>
where
    F: Fn(SourceConfig) -> Fut,
    Fut: Future<Output = Result<SourceRankingList>> + Send + 'static,
{
    let handles: Vec<_> = sources
        .iter()
        .cloned()
        .map(|source| {
            let id = source.id;
            let task = tokio::time::timeout(budget, fetch(source));
            (id, tokio::spawn(task))
        })
        .collect();

    let mut results = Vec::with_capacity(handles.len());
    for (id, handle) in handles {
        let entries = match handle.await {
            Ok(Ok(Ok(entries))) => entries,
            Ok(Ok(Err(e))) => {
                warn!("Error scraping {}: {:#}", id.display_name(), e);
                Vec::new()
            }
            Ok(Err(_)) => {
                warn!("Timed out scraping {} after {:?}", id.display_name(), budget);
                Vec::new()
            }
            Err(e) => {
                warn!("Scrape task for {} failed: {}", id.display_name(), e);
                Vec::new()
            }
        };
        results.push((id, entries));
    }

    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::get_sources;
    use crate::domain::{Metric, RankingEntry};
    use crate::errors::RankingsError;

    fn one_entry(player: &str) -> SourceRankingList {
        vec![RankingEntry::new(1, player, Metric::points("1.00"))]
    }

    fn found(id: SourceId) -> Result<SourceRankingList> {
        Ok(one_entry(id.display_name()))
    }

    #[tokio::test]
    async fn test_failing_source_does_not_affect_others() {
        let sources = get_sources();

        let results = fetch_all(&sources, Duration::from_secs(5), |source| async move {
            match source.id {
                SourceId::DataGolf => Err(anyhow::Error::from(RankingsError::unavailable("datagolf", "no rows"))),
                id => found(id),
            }
        })
        .await;

        assert_eq!(results.len(), 3);
        assert_eq!(results[0], (SourceId::Owgr, one_entry("OWGR")));
        assert_eq!(results[1], (SourceId::DataGolf, Vec::new()));
        assert_eq!(results[2], (SourceId::Fedex, one_entry("FedEx Cup")));
    }

    #[tokio::test]
    async fn test_slow_source_times_out_alone() {
        let sources = get_sources();

        let results = fetch_all(&sources, Duration::from_millis(200), |source| async move {
            if source.id == SourceId::Fedex {
                tokio::time::sleep(Duration::from_secs(30)).await;
            }
            found(source.id)
        })
        .await;

        assert_eq!(results[0].1.len(), 1);
        assert_eq!(results[1].1.len(), 1);
        assert_eq!(results[2], (SourceId::Fedex, Vec::new()));
    }

    #[tokio::test]
    async fn test_panicking_source_yields_empty_list() {
        let sources = get_sources();

        let results = fetch_all(&sources, Duration::from_secs(5), |source| async move {
            if source.id == SourceId::Owgr {
                panic!("renderer crashed");
            }
            found(source.id)
        })
        .await;

        assert_eq!(results[0], (SourceId::Owgr, Vec::new()));
        assert_eq!(results[2].1.len(), 1);
    }
}
