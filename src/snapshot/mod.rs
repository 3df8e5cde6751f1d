pub mod merger;
mod store;

pub use merger::{PatchPolicy, Provenance, extend, from_sources, full_build, patch};
pub use store::SnapshotStore;
