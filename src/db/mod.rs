pub mod initialize;
pub mod log;
pub mod pool;
pub mod queries;
pub mod shared;

pub use pool::RecordStore;

/// Logical database holding the work entries.
pub const DATABASE_NAME: &str = "work-time-tracker";
/// The single collection every entry is written to.
pub const COLLECTION_NAME: &str = "work-time";
