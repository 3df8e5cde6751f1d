mod extractor;
mod strategy;

pub use extractor::{ElementSource, Extraction, RawRow, RowExtractor};
pub use strategy::{Strategy, strategies};

#[cfg(test)]
pub(crate) use extractor::tests::FakePage;
