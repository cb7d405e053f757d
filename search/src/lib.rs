//! Schema-driven substring search over an in-memory record store.
//!
//! # Design
//!
//! - A schema names, per record type, the fields a query is matched against.
//! - Matching is a boolean, case-insensitive substring test; every derivation
//!   is a linear scan over the full collection. There is no index, no cache,
//!   and no ranking.
//! - An empty query short-circuits: an unrestricted scope returns the
//!   caller-supplied suggestions verbatim, a typed scope lists records of
//!   those types in collection order.
//! - `SearchEngine::recompute` is the single derivation entry point; invoke
//!   it whenever the query, the scope, or the record collection changes.

mod config;
mod engine;
mod filter;
mod matcher;
mod results;

pub use config::SearchConfig;
pub use engine::SearchEngine;
pub use filter::{
    filter_by_query, filter_by_scope, record_matches, sort_by_explicit_order, sort_by_field,
};
pub use results::SearchResults;
