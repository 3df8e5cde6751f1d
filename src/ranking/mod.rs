mod dedup;

pub use dedup::{cap, dedupe, dedupe_and_cap};
