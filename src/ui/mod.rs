pub mod charts;
pub mod messages;
