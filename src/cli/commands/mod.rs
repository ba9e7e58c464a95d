//! CLI command implementations.

pub mod backfill;
pub mod search;
pub mod status;
pub mod sync;
