// fault-core/src/catalog.rs
//! The fault catalog and the filter vocabularies derived from it

use std::collections::{BTreeSet, HashSet};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;

use crate::models::FaultEntry;

/// Failure to obtain a usable catalog
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error("could not read fault catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("fault catalog {origin} is not valid JSON: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("fault catalog {origin} repeats entry id '{id}'")]
    DuplicateId { origin: String, id: String },
}

/// Read-only set of fault entries plus sorted model/module vocabularies.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Arc<FaultEntry>>,
    models: Vec<String>,
    modules: Vec<String>,
}

impl Catalog {
    /// Build a catalog from already parsed entries, keeping their order.
    pub fn from_entries(entries: Vec<FaultEntry>) -> Result<Self, RetrievalError> {
        Self::build(entries, "<memory>")
    }

    /// Parse a JSON array of entries. `origin` names the source in error messages.
    pub fn from_json_str(json: &str, origin: &str) -> Result<Self, RetrievalError> {
        let entries: Vec<FaultEntry> =
            serde_json::from_str(json).map_err(|source| RetrievalError::Parse {
                origin: origin.to_string(),
                source,
            })?;
        Self::build(entries, origin)
    }

    /// Read and parse the catalog file. Always reads from disk, nothing is cached.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, RetrievalError> {
        let path = path.as_ref();
        tracing::debug!("loading fault catalog from {:?}", path);

        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| RetrievalError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_json_str(&json, &path.display().to_string())?;
        tracing::info!(
            "loaded {} fault entries ({} models, {} modules)",
            catalog.len(),
            catalog.models.len(),
            catalog.modules.len()
        );
        Ok(catalog)
    }

    fn build(entries: Vec<FaultEntry>, origin: &str) -> Result<Self, RetrievalError> {
        let mut seen = HashSet::new();
        let mut models = BTreeSet::new();
        let mut modules = BTreeSet::new();

        for entry in &entries {
            if !seen.insert(entry.id.as_str()) {
                return Err(RetrievalError::DuplicateId {
                    origin: origin.to_string(),
                    id: entry.id.clone(),
                });
            }
            models.extend(entry.models.iter().cloned());
            modules.extend(entry.modules.iter().cloned());
        }

        Ok(Self {
            models: models.into_iter().collect(),
            modules: modules.into_iter().collect(),
            entries: entries.into_iter().map(Arc::new).collect(),
        })
    }

    /// Entries in catalog order
    pub fn entries(&self) -> &[Arc<FaultEntry>] {
        &self.entries
    }

    /// Distinct model names, sorted
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// Distinct module names, sorted
    pub fn modules(&self) -> &[String] {
        &self.modules
    }

    pub fn get(&self, id: &str) -> Option<&Arc<FaultEntry>> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = include_str!("../../../data/faults.json");

    fn entry(id: &str, models: &[&str], modules: &[&str]) -> FaultEntry {
        let mut e = FaultEntry::new(id);
        e.models = models.iter().map(|s| s.to_string()).collect();
        e.modules = modules.iter().map(|s| s.to_string()).collect();
        e
    }

    #[test]
    fn test_vocabularies_sorted_and_distinct() {
        let catalog = Catalog::from_entries(vec![
            entry("a", &["SelfServ 84", "SelfServ 22"], &["DFM"]),
            entry("b", &["SelfServ 22"], &["Card Reader", "DFM"]),
            entry("c", &[], &[]),
        ])
        .unwrap();

        assert_eq!(catalog.models(), ["SelfServ 22", "SelfServ 84"]);
        assert_eq!(catalog.modules(), ["Card Reader", "DFM"]);
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_entries_keep_order() {
        let catalog =
            Catalog::from_entries(vec![entry("z", &[], &[]), entry("a", &[], &[])]).unwrap();
        let ids: Vec<_> = catalog.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["z", "a"]);
        assert_eq!(catalog.get("a").map(|e| e.id.as_str()), Some("a"));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Catalog::from_entries(vec![entry("a", &[], &[]), entry("a", &[], &[])])
            .unwrap_err();
        assert!(matches!(err, RetrievalError::DuplicateId { ref id, .. } if id == "a"));
    }

    #[test]
    fn test_malformed_json() {
        let err = Catalog::from_json_str("{ not json", "inline").unwrap_err();
        assert!(matches!(err, RetrievalError::Parse { .. }));
        assert!(err.to_string().contains("inline"));
    }

    #[test]
    fn test_object_instead_of_array() {
        let err = Catalog::from_json_str(r#"{"id": "a"}"#, "inline").unwrap_err();
        assert!(matches!(err, RetrievalError::Parse { .. }));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::from_json_str("[]", "inline").unwrap();
        assert!(catalog.is_empty());
        assert!(catalog.models().is_empty());
    }

    #[test]
    fn test_sample_catalog_is_valid() {
        let catalog = Catalog::from_json_str(SAMPLE, "data/faults.json").unwrap();
        assert!(!catalog.is_empty());
        assert!(!catalog.models().is_empty());
        assert!(!catalog.modules().is_empty());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"id": "dfm-pick", "models": ["SelfServ 84"], "modules": ["DFM"]}}]"#
        )
        .unwrap();

        let catalog = Catalog::load(file.path()).await.unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.modules(), ["DFM"]);
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Catalog::load(dir.path().join("faults.json")).await.unwrap_err();
        assert!(matches!(err, RetrievalError::Io { .. }));
    }
}
