//! Search engine combining the record store with the filter pipeline.

use crate::config::SearchConfig;
use crate::filter::{filter_by_query, filter_by_scope, sort_by_field};
use crate::results::SearchResults;
use sift_core::ResourceStore;
use sift_core::error::Result;
use sift_core::types::{Record, Scope};

/// Derives query results from a record store.
///
/// The engine owns the store it was constructed with; the caller drives it
/// by invoking [`recompute`](SearchEngine::recompute) whenever the query,
/// the scope, or the record collection changes. Derivations are synchronous
/// and never overlap: [`load`](SearchEngine::load) takes `&mut self`, so a
/// mutation is fully applied before the next derivation reads the
/// collection.
pub struct SearchEngine {
    store: ResourceStore,
    config: SearchConfig,
}

/// Create operations.
impl SearchEngine {
    pub fn new(store: ResourceStore, config: SearchConfig) -> Self {
        Self { store, config }
    }
}

/// Read operations.
impl SearchEngine {
    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    /// Number of records currently held by the store.
    pub fn record_count(&self) -> usize {
        self.store.record_count()
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}

/// Mutation operations.
impl SearchEngine {
    /// Loads records into the store; see [`ResourceStore::load`].
    pub fn load(&mut self, records: Vec<Record>, merge: bool) {
        self.store.load(records, merge);
    }
}

/// Search operations.
impl SearchEngine {
    /// Re-derives the result set for the current store contents.
    ///
    /// An empty (or whitespace-only) query returns the suggestions for
    /// [`Scope::All`], or the records of the scoped types in collection
    /// order. An active query runs the pipeline: filter by query, sort by
    /// the configured sort field, then restrict by scope. Nothing is cached
    /// between calls.
    pub fn recompute(&self, query: &str, scope: &Scope) -> Result<SearchResults> {
        let results = if query.trim().is_empty() {
            self.empty_query_results(scope)
        } else {
            self.active_query_results(query, scope)?
        };

        tracing::debug!(count = results.len(), "derived results");
        Ok(results)
    }

    fn empty_query_results(&self, scope: &Scope) -> SearchResults {
        match scope {
            Scope::All => SearchResults::new(self.store.suggestions().to_vec()),
            Scope::Types(_) => {
                let records = self
                    .store
                    .records()
                    .iter()
                    .filter(|record| {
                        record
                            .discriminant(&self.config.discriminant_field)
                            .is_some_and(|tag| scope.admits(tag))
                    })
                    .cloned()
                    .collect();
                SearchResults::new(records)
            }
        }
    }

    fn active_query_results(&self, query: &str, scope: &Scope) -> Result<SearchResults> {
        let matched = filter_by_query(
            self.store.records(),
            query,
            self.store.schema(),
            &self.config.discriminant_field,
        )?;
        let sorted = sort_by_field(matched, &self.config.sort_field)?;
        let scoped = filter_by_scope(sorted, scope, &self.config.discriminant_field);

        Ok(SearchResults::new(scoped))
    }
}
