// fault-core/src/filter.rs
//! Candidate selection: category filters plus AND-of-tokens substring matching

use std::sync::Arc;

use crate::catalog::Catalog;
use crate::models::{FaultEntry, QueryFilters};

/// An entry that survived filtering, with the text it was matched against
#[derive(Debug, Clone)]
pub struct Candidate {
    pub entry: Arc<FaultEntry>,
    pub position: usize,
    pub text: String,
}

/// Lowercased text a query is matched against: id, title, symptoms, match keywords,
/// and each cause's title followed by its context.
pub fn searchable_text(entry: &FaultEntry) -> String {
    let mut parts: Vec<&str> = Vec::with_capacity(
        2 + entry.symptoms.len() + entry.match_keywords.len() + entry.causes.len(),
    );
    parts.push(&entry.id);
    parts.push(entry.title.as_deref().unwrap_or(""));
    parts.extend(entry.symptoms.iter().map(String::as_str));
    parts.extend(entry.match_keywords.iter().map(String::as_str));

    let causes: Vec<String> = entry
        .causes
        .iter()
        .map(|c| format!("{} {}", c.title, c.context().unwrap_or("")))
        .collect();
    parts.extend(causes.iter().map(String::as_str));

    parts.join(" ").to_lowercase()
}

/// Model and module constraints; unset filters always match.
pub fn matches_category(entry: &FaultEntry, filters: &QueryFilters) -> bool {
    let model_ok = filters.model().is_none_or(|m| entry.has_model(m));
    let module_ok = filters.module().is_none_or(|m| entry.has_module(m));
    model_ok && module_ok
}

/// Every token must occur somewhere in `text`, not necessarily on a word boundary.
pub fn contains_all(text: &str, tokens: &[String]) -> bool {
    tokens.iter().all(|t| text.contains(t.as_str()))
}

/// Reduce the catalog to entries satisfying the filters, in catalog order.
pub fn filter_candidates(
    catalog: &Catalog,
    filters: &QueryFilters,
    tokens: &[String],
) -> Vec<Candidate> {
    let candidates: Vec<Candidate> = catalog
        .entries()
        .iter()
        .enumerate()
        .filter(|(_, entry)| matches_category(entry, filters))
        .filter_map(|(position, entry)| {
            let text = searchable_text(entry);
            contains_all(&text, tokens).then(|| Candidate {
                entry: Arc::clone(entry),
                position,
                text,
            })
        })
        .collect();

    tracing::debug!(
        "{} of {} entries pass filters (model={:?}, module={:?}, tokens={:?})",
        candidates.len(),
        catalog.len(),
        filters.model(),
        filters.module(),
        tokens
    );
    candidates
}
