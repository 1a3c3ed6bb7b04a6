pub mod add;
pub mod aggregate;
pub mod context;
pub mod filter;
pub mod log;
pub mod normalize;
pub mod seed;
