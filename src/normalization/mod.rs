mod normalizer;
mod rank;
mod rules;

pub use normalizer::FieldNormalizer;
pub use rank::{extract_rank, is_rank_cell};
pub use rules::{NormalizerRules, RowShape, TableLayout};
