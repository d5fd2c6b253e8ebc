// fault-core/src/scoring.rs
//! Heuristic relevance scoring
//!
//! A score is the entry's base likelihood plus independent increments:
//! - keyword boost: one step per distinct query token found in the searchable text
//! - strict boost: one step per active category filter the entry declares
//! - phrase boosts: fixed increments for recognised phrasings in the query
//!
//! Scores are unbounded and only comparable within a single query.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::filter::searchable_text;
use crate::models::{FaultEntry, QueryFilters};

pub const KEYWORD_INCREMENT: f64 = 0.05;
pub const STRICT_INCREMENT: f64 = 0.2;

/// A pattern over the normalized query text and the increment it awards
#[derive(Debug, Clone)]
pub struct PhraseRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub increment: f64,
}

impl PhraseRule {
    pub fn new(name: &'static str, pattern: &str, increment: f64) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            pattern: Regex::new(pattern)?,
            increment,
        })
    }

    pub fn matches(&self, query_text: &str) -> bool {
        self.pattern.is_match(query_text)
    }
}

static DEFAULT_RULES: Lazy<Vec<PhraseRule>> = Lazy::new(|| {
    [
        ("all-positions", r"all positions|all bays|every slot", 0.15),
        (
            "atmdesk-vs-aptra",
            r"works in atmdesk|atmdesk.*(sees|works).*aptra",
            0.20,
        ),
        (
            "pick-module-replaced",
            r"dfm replaced|dual pick module replaced|pick module replaced",
            0.10,
        ),
        ("firmware-mismatch", r"firmware mismatch|sp mismatch|xfs", 0.10),
    ]
    .into_iter()
    .map(|(name, pattern, increment)| {
        PhraseRule::new(name, pattern, increment).expect("built-in phrase pattern is valid")
    })
    .collect()
});

/// Scores entries against a query. Holds the phrase rule set; everything else is
/// passed in per call, so scoring has no hidden state.
#[derive(Debug, Clone)]
pub struct Scorer {
    rules: Vec<PhraseRule>,
}

impl Default for Scorer {
    fn default() -> Self {
        Self {
            rules: DEFAULT_RULES.to_vec(),
        }
    }
}

impl Scorer {
    pub fn with_rules(rules: Vec<PhraseRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[PhraseRule] {
        &self.rules
    }

    /// Score an entry, computing its searchable text on the fly.
    pub fn score(&self, entry: &FaultEntry, tokens: &[String], filters: &QueryFilters) -> f64 {
        self.score_with_text(entry, &searchable_text(entry), tokens, filters)
    }

    /// Score an entry whose searchable text has already been built.
    pub fn score_with_text(
        &self,
        entry: &FaultEntry,
        text: &str,
        tokens: &[String],
        filters: &QueryFilters,
    ) -> f64 {
        let mut score = entry.base_likelihood();

        if filters.boosts.keyword {
            score += keyword_boost(text, tokens);
        }
        if filters.boosts.strict {
            score += strict_boost(entry, filters);
        }
        score + self.phrase_boost(&tokens.join(" "))
    }

    /// Sum of increments of every rule matching the normalized query text
    pub fn phrase_boost(&self, query_text: &str) -> f64 {
        self.rules
            .iter()
            .filter(|rule| rule.matches(query_text))
            .map(|rule| rule.increment)
            .sum()
    }
}

/// One step per distinct token present in `text`; repeats of a token count once.
pub fn keyword_boost(text: &str, tokens: &[String]) -> f64 {
    let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
    let matches = distinct.into_iter().filter(|t| text.contains(t)).count();
    KEYWORD_INCREMENT * matches as f64
}

pub fn strict_boost(entry: &FaultEntry, filters: &QueryFilters) -> f64 {
    let mut boost = 0.0;
    if filters.model().is_some_and(|m| entry.has_model(m)) {
        boost += STRICT_INCREMENT;
    }
    if filters.module().is_some_and(|m| entry.has_module(m)) {
        boost += STRICT_INCREMENT;
    }
    boost
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::models::Boosts;
    use crate::tokenizer::tokenize;
    use rstest::rstest;

    const EPSILON: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPSILON,
            "expected {expected}, got {actual}"
        );
    }

    fn dfm_entry() -> FaultEntry {
        let mut entry = FaultEntry::new("DFM-PICK");
        entry.title = Some("Pick failure after DFM replaced".into());
        entry.likelihood = Some(0.3);
        entry.models = vec!["X1".into()];
        entry.modules = vec!["DFM".into()];
        entry
    }

    fn filters(query: &str, keyword: bool, strict: bool) -> QueryFilters {
        QueryFilters::new(query)
            .with_model(Some("X1".into()))
            .with_module(Some("DFM".into()))
            .with_boosts(Boosts { keyword, strict })
    }

    #[test]
    fn test_documented_example() {
        let scorer = Scorer::default();
        let f = filters("dfm replaced", true, true);
        let score = scorer.score(&dfm_entry(), &tokenize(&f.query), &f);
        // 0.3 base + 0.2 + 0.2 strict + 2 x 0.05 keyword + 0.1 phrase
        assert_close(score, 0.90);
    }

    #[test]
    fn test_base_likelihood_only() {
        let scorer = Scorer::default();
        let entry = FaultEntry::new("plain");
        let score = scorer.score(&entry, &[], &QueryFilters::default());
        assert_close(score, 0.2);
    }

    #[rstest]
    #[case(false, false, 0.3 + 0.1)]
    #[case(true, false, 0.3 + 0.1 + 0.1)]
    #[case(false, true, 0.3 + 0.1 + 0.4)]
    #[case(true, true, 0.9)]
    fn test_toggles(#[case] keyword: bool, #[case] strict: bool, #[case] expected: f64) {
        let scorer = Scorer::default();
        let f = filters("dfm replaced", keyword, strict);
        assert_close(scorer.score(&dfm_entry(), &tokenize(&f.query), &f), expected);
    }

    #[test]
    fn test_strict_boost_requires_declared_category() {
        let entry = dfm_entry();
        let model_only = QueryFilters::new("")
            .with_model(Some("X1".into()))
            .with_module(Some("Card Reader".into()));
        assert_close(strict_boost(&entry, &model_only), STRICT_INCREMENT);

        let none = QueryFilters::default();
        assert_close(strict_boost(&entry, &none), 0.0);
    }

    #[test]
    fn test_keyword_boost_counts_distinct_tokens() {
        let text = "dfm dfm dfm replaced";
        assert_close(keyword_boost(text, &tokenize("dfm")), 0.05);
        assert_close(keyword_boost(text, &tokenize("dfm dfm")), 0.05);
        assert_close(keyword_boost(text, &tokenize("dfm replaced shutter")), 0.10);
        assert_close(keyword_boost(text, &[]), 0.0);
    }

    #[rstest]
    #[case("fault on all positions", 0.15)]
    #[case("all bays", 0.15)]
    #[case("every slot empty", 0.15)]
    #[case("works in atmdesk", 0.20)]
    #[case("atmdesk test works but aptra fails", 0.20)]
    #[case("atmdesk sees aptra", 0.20)]
    #[case("aptra sees atmdesk", 0.0)]
    #[case("dfm replaced", 0.10)]
    #[case("dual pick module replaced", 0.10)]
    #[case("firmware mismatch", 0.10)]
    #[case("sp mismatch", 0.10)]
    #[case("xfs-2/q+", 0.10)]
    #[case("every slot after dfm replaced xfs", 0.35)]
    #[case("cash jam", 0.0)]
    fn test_phrase_boost(#[case] query: &str, #[case] expected: f64) {
        let scorer = Scorer::default();
        assert_close(scorer.phrase_boost(&tokenize(query).join(" ")), expected);
    }

    #[test]
    fn test_phrase_matched_on_normalized_query() {
        let scorer = Scorer::default();
        // punctuation and case disappear before rule matching
        let text = tokenize("DFM, replaced!").join(" ");
        assert_close(scorer.phrase_boost(&text), 0.10);
    }

    #[test]
    fn test_phrase_boost_independent_of_toggles() {
        let scorer = Scorer::default();
        let entry = FaultEntry::new("unrelated");
        let f = QueryFilters::new("xfs");
        assert_close(scorer.score(&entry, &tokenize(&f.query), &f), 0.2 + 0.1);
    }

    #[test]
    fn test_keyword_boost_is_monotonic() {
        let scorer = Scorer::default();
        let entry = dfm_entry();
        for query in ["", "dfm", "pick failure", "shutter", "dfm replaced xfs"] {
            let tokens = tokenize(query);
            let off = scorer.score(&entry, &tokens, &filters(query, false, true));
            let on = scorer.score(&entry, &tokens, &filters(query, true, true));
            assert!(on >= off, "{query}: {on} < {off}");
        }
    }

    #[test]
    fn test_no_clamp_above_one() {
        let scorer = Scorer::default();
        let mut entry = dfm_entry();
        entry.likelihood = Some(0.95);
        let f = filters("dfm replaced", true, true);
        assert!(scorer.score(&entry, &tokenize(&f.query), &f) > 1.0);
    }

    #[test]
    fn test_custom_rules() {
        let rule = PhraseRule::new("shutter", r"shutter (stuck|jammed)", 0.5).unwrap();
        let scorer = Scorer::with_rules(vec![rule]);
        assert_eq!(scorer.rules().len(), 1);
        assert_close(scorer.phrase_boost("shutter stuck open"), 0.5);
        assert_close(scorer.phrase_boost("xfs"), 0.0);
    }

    #[test]
    fn test_invalid_rule_pattern() {
        assert!(PhraseRule::new("broken", r"(unclosed", 0.1).is_err());
    }
}
