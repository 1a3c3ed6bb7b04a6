pub mod field;
pub mod productivity;
pub mod work_entry;

/// One document as returned by the store: a loosely-typed JSON object
/// without the internal row id.
pub type RawRecord = serde_json::Map<String, serde_json::Value>;
