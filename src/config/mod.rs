pub mod settings;
pub mod sources;

pub use settings::AppConfig;
pub use sources::{SourceConfig, SourcePage, find_source, get_sources};
