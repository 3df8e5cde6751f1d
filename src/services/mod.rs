pub mod correction;
pub mod scrape;
pub mod server;

pub use correction::{CorrectionMode, CorrectionService};
pub use scrape::ScrapeService;
pub use server::ServerService;
