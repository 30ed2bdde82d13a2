//! Repository layer for persisted creature state.
//!
//! Repositories hold data that changes during play (age, saddle,
//! reproduction count, owner). Static content (items, breeds) is handled by
//! oracles, not repositories.

mod error;
mod file;
mod memory;
mod traits;
mod types;

pub use error::{RepositoryError, Result};
pub use file::FileSnapshotRepository;
pub use memory::InMemorySnapshotRepo;
pub use traits::SnapshotRepository;
pub use types::SavedDragon;
