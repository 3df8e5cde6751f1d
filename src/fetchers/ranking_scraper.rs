use anyhow::Result;
use log::{info, warn};

use super::html_document::HtmlDocument;
use crate::config::{SourceConfig, SourcePage};
use crate::config::settings::ScraperSettings;
use crate::domain::SourceRankingList;
use crate::errors::RankingsError;
use crate::extraction::{ElementSource, RowExtractor};
use crate::http::HttpClient;
use crate::normalization::FieldNormalizer;
use crate::ranking::dedupe_and_cap;

/// Fetches a source's page and runs it through the ranking pipeline
#[derive(Clone)]
pub struct RankingScraper {
    client: HttpClient,
}

impl RankingScraper {
    pub fn new(settings: &ScraperSettings) -> Result<Self> {
        let client = HttpClient::new(settings.user_agent, settings.timeout_secs)?;
        Ok(Self { client })
    }

    /// Try the source's pages in order; the first one yielding rankings wins
    pub async fn scrape_source(&self, source: &SourceConfig) -> Result<SourceRankingList> {
        let mut last_error = None;

        for layout in &source.pages {
            match self.scrape_page(source, layout).await {
                Ok(entries) if !entries.is_empty() => return Ok(entries),
                Ok(_) => warn!("No {} rankings on {}", source.id.display_name(), layout.url),
                Err(e) => {
                    warn!("{} page {} failed: {:#}", source.id.display_name(), layout.url, e);
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            Some(e) => Err(e),
            None => Ok(Vec::new()),
        }
    }

    async fn scrape_page(&self, source: &SourceConfig, layout: &SourcePage) -> Result<SourceRankingList> {
        info!("Loading {}: {}", source.id.display_name(), layout.url);

        let body = self.client.get_text(layout.url).await?;
        let page = HtmlDocument::parse(&body);

        Ok(rankings_from_page(source, layout, &page)?)
    }
}

/// Extract, normalize, dedupe and cap one page's rows
pub fn rankings_from_page<P: ElementSource + ?Sized>(
    source: &SourceConfig,
    layout: &SourcePage,
    page: &P,
) -> Result<SourceRankingList, RankingsError> {
    let extraction = RowExtractor::new(&layout.strategies).extract(page);
    if extraction.is_empty() {
        return Err(RankingsError::unavailable(source.name(), "no selector matched enough rows"));
    }

    let normalizer = FieldNormalizer::new(layout.shape, source.metric);
    let entries = normalizer.normalize_rows(&extraction.rows);
    let entries = dedupe_and_cap(&entries, source.cap);

    info!(
        "  → {} {} rankings from {} rows",
        entries.len(),
        source.id.display_name(),
        extraction.len()
    );
    Ok(entries)
}
