//! Numbered hw-probe report collection for device intake benches.

pub mod cli;
pub mod collect;
pub mod config;
pub mod error;
pub mod launch;
pub mod power;
pub mod probe;
pub mod report;
pub mod version;
