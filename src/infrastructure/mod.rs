//! Infrastructure layer: external integrations and durable storage.

pub mod cache;
pub mod cohere;
pub mod config;
pub mod corpus;
pub mod ingestion;
