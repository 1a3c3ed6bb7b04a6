pub mod date;
pub mod formatting;
pub mod path;
pub mod range;
pub mod table;

pub use formatting::mins2readable;
