// fault-core/src/rank.rs
//! Deterministic ordering of scored candidates

use std::cmp::Ordering;

use crate::filter::Candidate;
use crate::models::{QueryFilters, ScoredEntry};
use crate::scoring::Scorer;

/// Highest score first; equal scores keep catalog order.
pub fn compare(a: &ScoredEntry, b: &ScoredEntry) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.position.cmp(&b.position))
}

/// Score every candidate and order the result for presentation.
pub fn rank(
    candidates: Vec<Candidate>,
    tokens: &[String],
    filters: &QueryFilters,
    scorer: &Scorer,
) -> Vec<ScoredEntry> {
    let mut ranked: Vec<ScoredEntry> = candidates
        .into_iter()
        .map(|candidate| ScoredEntry {
            score: scorer.score_with_text(&candidate.entry, &candidate.text, tokens, filters),
            entry: candidate.entry,
            position: candidate.position,
        })
        .collect();

    ranked.sort_by(compare);
    ranked
}
