use crate::domain::{MetricKind, SourceId};
use crate::extraction::{Strategy, strategies};
use crate::normalization::{RowShape, TableLayout};

/// One page publishing a source's rankings and how its rows are laid out
///
/// Selectors are tried in order; the first one matching more than its
/// threshold is used for the whole page.
#[derive(Debug, Clone)]
pub struct SourcePage {
    pub url: &'static str,
    pub strategies: Vec<Strategy>,
    pub shape: RowShape,
}

impl SourcePage {
    pub fn new(url: &'static str, strategies: Vec<Strategy>, shape: RowShape) -> Self {
        Self { url, strategies, shape }
    }
}

/// Where and how one ranking provider is scraped
///
/// Pages are tried in order until one yields rankings.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    pub id: SourceId,
    pub pages: Vec<SourcePage>,
    pub metric: MetricKind,
    /// Maximum number of players kept after deduplication
    pub cap: Option<usize>,
}

impl SourceConfig {
    pub fn name(&self) -> &'static str {
        self.id.as_str()
    }
}

/// Get the list of ranking sources to scrape
pub fn get_sources() -> Vec<SourceConfig> {
    vec![
        SourceConfig {
            id: SourceId::Owgr,
            pages: vec![SourcePage::new(
                "https://www.owgr.com/current-world-ranking",
                vec![Strategy::new("table tbody tr", 0)],
                RowShape::Table(TableLayout::new(1, 3, 4)),
            )],
            metric: MetricKind::Points,
            cap: None,
        },
        SourceConfig {
            id: SourceId::DataGolf,
            pages: vec![SourcePage::new(
                "https://datagolf.com/datagolf-rankings",
                strategies(
                    &[
                        "table tbody tr",
                        ".ranking-table tr",
                        "[class*=\"player-row\"]",
                        "div[class*=\"rank\"]",
                    ],
                    10,
                ),
                RowShape::TextBlock,
            )],
            metric: MetricKind::Rating,
            cap: Some(100),
        },
        SourceConfig {
            id: SourceId::Fedex,
            pages: vec![
                // Server-rendered stats table, sorted by cup points
                SourcePage::new(
                    "https://www.espn.com/golf/stats/player/_/table/general/sort/cupPoints/dir/desc",
                    vec![Strategy::new("tr.Table__TR", 0)],
                    RowShape::Anchored,
                ),
                SourcePage::new(
                    "https://www.pgatour.com/fedexcup",
                    strategies(
                        &[
                            "table tbody tr",
                            ".standings-table tr",
                            "[class*=\"leaderboard\"] tr",
                            ".player-row",
                            "[data-player]",
                        ],
                        5,
                    ),
                    RowShape::Loose,
                ),
            ],
            metric: MetricKind::Points,
            cap: Some(50),
        },
    ]
}

pub fn find_source(id: SourceId) -> Option<SourceConfig> {
    get_sources().into_iter().find(|source| source.id == id)
}
