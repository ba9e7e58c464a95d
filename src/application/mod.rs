//! Application layer: context wiring.

pub mod context;

pub use context::AppContext;
