use log::{debug, info};

use super::strategy::Strategy;

/// Raw text of one candidate element, in document order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Full rendered text: block lines joined by `\n`, cells by `\t`
    pub text: String,
    /// Texts of the element's table cells, empty when it has none
    pub cells: Vec<String>,
    /// Texts of the links inside the element
    pub links: Vec<String>,
}

impl RawRow {
    pub fn from_cells<S: AsRef<str>>(cells: &[S]) -> Self {
        let cells: Vec<String> = cells.iter().map(|c| c.as_ref().to_string()).collect();
        Self {
            text: cells.join("\t"),
            cells,
            links: Vec::new(),
        }
    }

    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            cells: Vec::new(),
            links: Vec::new(),
        }
    }

    pub fn with_links<S: AsRef<str>>(mut self, links: &[S]) -> Self {
        self.links = links.iter().map(|l| l.as_ref().to_string()).collect();
        self
    }
}

/// Anything that can resolve a selector to candidate elements (a parsed page, a test fixture)
pub trait ElementSource {
    fn select(&self, selector: &str) -> Vec<RawRow>;
}

/// Rows found on a page and the selector that produced them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Extraction {
    pub selector: Option<String>,
    pub rows: Vec<RawRow>,
}

impl Extraction {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Tries strategies in order and commits to the first plausible one
pub struct RowExtractor<'a> {
    strategies: &'a [Strategy],
}

impl<'a> RowExtractor<'a> {
    pub fn new(strategies: &'a [Strategy]) -> Self {
        Self { strategies }
    }

    pub fn extract<P: ElementSource + ?Sized>(&self, page: &P) -> Extraction {
        for strategy in self.strategies {
            let rows = page.select(&strategy.selector);

            if strategy.is_plausible(rows.len()) {
                info!("  → Found {} elements with selector: {}", rows.len(), strategy.selector);
                return Extraction {
                    selector: Some(strategy.selector.clone()),
                    rows,
                };
            }

            debug!(
                "Selector {} matched {} elements (needs more than {})",
                strategy.selector,
                rows.len(),
                strategy.min_count
            );
        }

        Extraction::default()
    }
}
