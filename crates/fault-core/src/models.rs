// fault-core/src/models.rs
//! Catalog records and query inputs

use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

/// Likelihood assumed for entries that do not declare one
pub const DEFAULT_LIKELIHOOD: f64 = 0.2;

/// Filter choice that means "no filter"
pub const NO_FILTER: &str = "(none)";

/// One diagnosable problem: symptoms, causes, checks and fixes.
///
/// Catalog files are hand-edited, so every list tolerates being missing or `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaultEntry {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub models: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub modules: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub symptoms: Vec<String>,
    /// Terms that count toward keyword matching even when absent from title and symptoms
    #[serde(default, deserialize_with = "null_as_default")]
    pub match_keywords: Vec<String>,
    #[serde(default)]
    pub likelihood: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub causes: Vec<Cause>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logs: Vec<LogRef>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub notes: Vec<String>,
}

impl FaultEntry {
    /// Minimal entry, mostly useful for building catalogs in code.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            models: Vec::new(),
            modules: Vec::new(),
            symptoms: Vec::new(),
            match_keywords: Vec::new(),
            likelihood: None,
            description: None,
            causes: Vec::new(),
            logs: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Title, or the id when the entry has none or it is empty
    pub fn display_name(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(&self.id)
    }

    pub fn description(&self) -> Option<&str> {
        non_empty(self.description.as_deref())
    }

    pub fn base_likelihood(&self) -> f64 {
        self.likelihood.unwrap_or(DEFAULT_LIKELIHOOD)
    }

    pub fn has_model(&self, model: &str) -> bool {
        self.models.iter().any(|m| m == model)
    }

    pub fn has_module(&self, module: &str) -> bool {
        self.modules.iter().any(|m| m == module)
    }
}

/// A root-cause hypothesis with its own remediation checklist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cause {
    pub title: String,
    #[serde(default)]
    pub context: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub checks: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fixes: Vec<String>,
}

impl Cause {
    pub fn context(&self) -> Option<&str> {
        non_empty(self.context.as_deref())
    }
}

/// Pointer to a log or trace file worth inspecting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRef {
    pub path: String,
    #[serde(default)]
    pub note: Option<String>,
}

impl LogRef {
    pub fn note(&self) -> Option<&str> {
        non_empty(self.note.as_deref())
    }
}

/// Relevance boosts that can be switched on and off by the user
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Boosts {
    pub keyword: bool,
    pub strict: bool,
}

/// Everything the user controls for one search pass
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryFilters {
    pub model: Option<String>,
    pub module: Option<String>,
    pub query: String,
    pub boosts: Boosts,
    /// Presentation only, never consulted by the ranking
    pub show_scores: bool,
}

impl QueryFilters {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Default::default()
        }
    }

    pub fn with_model(mut self, model: Option<String>) -> Self {
        self.model = filter_choice(model);
        self
    }

    pub fn with_module(mut self, module: Option<String>) -> Self {
        self.module = filter_choice(module);
        self
    }

    pub fn with_boosts(mut self, boosts: Boosts) -> Self {
        self.boosts = boosts;
        self
    }

    pub fn with_show_scores(mut self, show_scores: bool) -> Self {
        self.show_scores = show_scores;
        self
    }

    /// Active model filter; blank and `(none)` count as unset
    pub fn model(&self) -> Option<&str> {
        active(self.model.as_deref())
    }

    /// Active module filter; blank and `(none)` count as unset
    pub fn module(&self) -> Option<&str> {
        active(self.module.as_deref())
    }
}

/// A catalog entry with the score computed for the current query
#[derive(Debug, Clone)]
pub struct ScoredEntry {
    pub entry: Arc<FaultEntry>,
    pub score: f64,
    /// Index of the entry in catalog order
    pub position: usize,
}

/// Hand-edited catalogs use `""` for a missing text as often as they omit it.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn filter_choice(value: Option<String>) -> Option<String> {
    value.filter(|v| active(Some(v)).is_some())
}

fn active(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty() && *v != NO_FILTER)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
