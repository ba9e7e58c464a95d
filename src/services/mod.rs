//! Service layer: retrieval, backfill, and sync orchestration.

pub mod backfill;
pub mod retrieval;
pub mod sync;

pub use backfill::{BackfillReport, BackfillService, BatchPolicy};
pub use retrieval::RetrievalService;
pub use sync::{SyncOutcome, SyncService};
