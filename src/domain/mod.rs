//! Domain layer: models, ports, errors, and pure retrieval logic.

pub mod errors;
pub mod models;
pub mod ports;
pub mod similarity;

pub use errors::{RetrievalError, RetrievalResult};
