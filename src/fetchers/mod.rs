mod html_document;
mod ranking_scraper;

pub use html_document::HtmlDocument;
pub use ranking_scraper::{RankingScraper, rankings_from_page};
