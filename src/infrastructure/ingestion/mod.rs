//! External ingestion process integration.

pub mod process;

pub use process::{ProcessContentSource, CHANGE_SENTINEL};
