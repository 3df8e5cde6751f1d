use log::warn;
use scraper::{ElementRef, Html, Selector};

use crate::extraction::{ElementSource, RawRow};

/// A fetched page, parsed once and queried by selector
pub struct HtmlDocument {
    html: Html,
    cell_selector: Selector,
    link_selector: Selector,
}

impl HtmlDocument {
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
            cell_selector: Selector::parse("td").unwrap(),
            link_selector: Selector::parse("a").unwrap(),
        }
    }

    fn to_raw_row(&self, element: ElementRef<'_>) -> RawRow {
        let cells: Vec<String> = element.select(&self.cell_selector).map(cell_text).collect();
        let links: Vec<String> = element
            .select(&self.link_selector)
            .map(cell_text)
            .filter(|text| !text.is_empty())
            .collect();

        let row = if cells.is_empty() {
            RawRow::from_text(block_text(element))
        } else {
            RawRow::from_cells(&cells)
        };
        row.with_links(&links)
    }
}

impl ElementSource for HtmlDocument {
    fn select(&self, selector: &str) -> Vec<RawRow> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(e) => {
                warn!("Invalid selector {}: {}", selector, e);
                return Vec::new();
            }
        };

        self.html
            .select(&selector)
            .map(|element| self.to_raw_row(element))
            .collect()
    }
}

/// Text nodes of a cell, joined with single spaces
fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text nodes of a block element, one per line
fn block_text(element: ElementRef<'_>) -> String {
    element
        .text()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const OWGR_PAGE: &str = r#"
        <html>
            <body>
                <table>
                    <thead><tr><th>Move</th><th>Rank</th><th></th><th>Name</th><th>Points</th></tr></thead>
                    <tbody>
                        <tr><td>-</td><td>1</td><td>USA</td><td><a href="/p/1"><span>Scottie</span> <span>Scheffler</span></a></td><td>20.03</td></tr>
                        <tr><td>▲</td><td>2 <span>-</span></td><td>NIR</td><td>Rory McIlroy</td><td>11.31</td></tr>
                    </tbody>
                </table>
            </body>
        </html>
    "#;

    #[test]
    fn test_table_rows_expose_cells() {
        let page = HtmlDocument::parse(OWGR_PAGE);

        let rows = page.select("table tbody tr");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].cells, vec!["-", "1", "USA", "Scottie Scheffler", "20.03"]);
        assert_eq!(rows[1].cells[1], "2 -");
        assert_eq!(rows[0].text, "-\t1\tUSA\tScottie Scheffler\t20.03");
        assert_eq!(rows[0].links, vec!["Scottie Scheffler"]);
        assert!(rows[1].links.is_empty());
    }

    #[test]
    fn test_blocks_expose_lines() {
        let page = HtmlDocument::parse(
            r#"<div class="player-row"><span>1</span><div>Scottie Scheffler</div><span>+3.121</span></div>"#,
        );

        let rows = page.select("[class*=\"player-row\"]");

        assert_eq!(rows.len(), 1);
        assert!(rows[0].cells.is_empty());
        assert_eq!(rows[0].text, "1\nScottie Scheffler\n+3.121");
    }

    #[test]
    fn test_invalid_selector_matches_nothing() {
        let page = HtmlDocument::parse(OWGR_PAGE);

        assert!(page.select("table[[").is_empty());
    }
}
