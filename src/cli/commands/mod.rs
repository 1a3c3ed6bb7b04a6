pub mod add;
pub mod ask;
pub mod common;
pub mod config;
pub mod context;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod seed;
pub mod summary;
