//! Local persistence of the business plan record

mod store;
mod repository;

pub use store::{KeyValueStore, MemoryStore, FileStore, DEFAULT_STORE_FILE};
pub use repository::{PlanRepository, PLAN_KEY};
