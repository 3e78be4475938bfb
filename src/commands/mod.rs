//! CLI commands for algotrace

pub mod config;
pub mod dispatch;
pub mod generate;
pub mod load;
pub mod play;
pub mod trace;
pub mod validate;
