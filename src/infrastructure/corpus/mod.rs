//! Corpus snapshot storage.

pub mod store;

pub use store::CorpusStore;
