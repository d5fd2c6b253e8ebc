// fault-core/src/lib.rs
//! Matching and ranking engine for the ATM fault catalog
//!
//! One search pass is: tokenize the query, filter the catalog, score the candidates,
//! rank them. Every pass is synchronous and recomputes the full result list; the only
//! asynchronous step is the initial catalog load.

pub mod catalog;
pub mod export;
pub mod filter;
pub mod models;
pub mod rank;
pub mod scoring;
pub mod tokenizer;

use std::path::Path;

pub use catalog::{Catalog, RetrievalError};
pub use export::render_report;
pub use filter::{Candidate, filter_candidates, searchable_text};
pub use models::{Boosts, Cause, FaultEntry, LogRef, NO_FILTER, QueryFilters, ScoredEntry};
pub use rank::rank;
pub use scoring::{PhraseRule, Scorer};
pub use tokenizer::tokenize;

/// Run one full pass over `catalog` with the built-in phrase rules.
pub fn search(catalog: &Catalog, filters: &QueryFilters) -> Vec<ScoredEntry> {
    search_with(catalog, filters, &Scorer::default())
}

/// Run one full pass over `catalog` with a caller-supplied scorer.
pub fn search_with(catalog: &Catalog, filters: &QueryFilters, scorer: &Scorer) -> Vec<ScoredEntry> {
    let tokens = tokenize(&filters.query);
    let candidates = filter_candidates(catalog, filters, &tokens);
    let ranked = rank(candidates, &tokens, filters, scorer);
    tracing::debug!("query {:?} ranked {} entries", filters.query, ranked.len());
    ranked
}

/// Application state: the loaded catalog and the result of the latest search.
pub struct FaultFinder {
    catalog: Catalog,
    scorer: Scorer,
    last_results: Vec<ScoredEntry>,
}

impl FaultFinder {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_scorer(catalog, Scorer::default())
    }

    pub fn with_scorer(catalog: Catalog, scorer: Scorer) -> Self {
        Self {
            catalog,
            scorer,
            last_results: Vec::new(),
        }
    }

    /// Load the catalog from disk and build the finder around it.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RetrievalError> {
        Catalog::load(path).await.map(Self::new)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Replace the previous result list with a fresh pass over the catalog.
    pub fn search(&mut self, filters: &QueryFilters) -> &[ScoredEntry] {
        self.last_results = search_with(&self.catalog, filters, &self.scorer);
        &self.last_results
    }

    /// Result of the most recent search, empty before the first one
    pub fn last_results(&self) -> &[ScoredEntry] {
        &self.last_results
    }

    /// Report of the most recent search
    pub fn export(&self) -> String {
        render_report(&self.last_results)
    }
}
