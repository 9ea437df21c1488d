//! In-memory storage engine

mod store;
mod table;

pub use store::MemoryStore;
pub(crate) use store::Tables;
pub(crate) use table::Table;
