//! Reference vocabularies used to canonicalize and validate cells.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::lookup::CaseInsensitiveSet;

/// A known chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainEntry {
    /// CAIP-2 id, e.g. `eip155:8453`.
    pub caip2: String,
    /// Short id, e.g. `base`.
    pub short_id: String,
    /// Display name, e.g. `Base`.
    pub name: String,
}

impl ChainEntry {
    /// Namespace part of the CAIP-2 id, e.g. `eip155`.
    pub fn namespace(&self) -> &str {
        self.caip2
            .split_once(':')
            .map(|(namespace, _)| namespace)
            .unwrap_or_default()
    }

    /// Numeric reference part of the CAIP-2 id.
    pub fn reference(&self) -> &str {
        self.caip2
            .split_once(':')
            .map(|(_, reference)| reference)
            .unwrap_or_default()
    }
}

/// A usage category from the taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Parent grouping, e.g. `defi`.
    pub main_category: String,
}

/// A project listed in the remote project directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub owner_project: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub main_github: Option<String>,
}

impl ProjectRecord {
    /// Human label for messages: display name when present.
    pub fn describe(&self) -> String {
        match self.display_name.as_deref().filter(|name| !name.is_empty()) {
            Some(name) if name != self.owner_project => format!("{name} ({})", self.owner_project),
            _ => self.owner_project.clone(),
        }
    }
}

/// Everything validation needs to know about the outside world.
///
/// Chains and categories are static; projects come from the directory cache
/// and may be empty when the fetch failed.
#[derive(Debug, Clone, Default)]
pub struct ReferenceDataset {
    pub valid_chain_ids: BTreeSet<String>,
    /// Lowercased alias -> canonical CAIP-2 id.
    pub chain_aliases: BTreeMap<String, String>,
    pub valid_category_ids: BTreeSet<String>,
    /// Lowercased alias -> canonical category id.
    pub category_aliases: BTreeMap<String, String>,
    pub valid_project_ids: BTreeSet<String>,
    pub chains: Vec<ChainEntry>,
    pub categories: Vec<CategoryEntry>,
    pub projects: Vec<ProjectRecord>,
    /// Taxonomy catch-all suggested when nothing else is close.
    pub default_category: Option<String>,
    project_lookup: CaseInsensitiveSet,
}

impl ReferenceDataset {
    pub fn new(
        chains: Vec<ChainEntry>,
        chain_aliases: BTreeMap<String, String>,
        categories: Vec<CategoryEntry>,
        category_aliases: BTreeMap<String, String>,
        projects: Vec<ProjectRecord>,
    ) -> Self {
        let valid_chain_ids = chains.iter().map(|chain| chain.caip2.clone()).collect();
        let valid_category_ids = categories
            .iter()
            .map(|category| category.id.clone())
            .collect();
        let valid_project_ids: BTreeSet<String> = projects
            .iter()
            .map(|project| project.owner_project.clone())
            .filter(|id| !id.is_empty())
            .collect();
        let project_lookup = CaseInsensitiveSet::new(&valid_project_ids);
        Self {
            valid_chain_ids,
            chain_aliases,
            valid_category_ids,
            category_aliases,
            valid_project_ids,
            chains,
            categories,
            projects,
            default_category: None,
            project_lookup,
        }
    }

    #[must_use]
    pub fn with_default_category(mut self, id: impl Into<String>) -> Self {
        self.default_category = Some(id.into());
        self
    }

    pub fn category(&self, id: &str) -> Option<&CategoryEntry> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn chain(&self, caip2: &str) -> Option<&ChainEntry> {
        self.chains.iter().find(|chain| chain.caip2 == caip2)
    }

    pub fn project(&self, owner_project: &str) -> Option<&ProjectRecord> {
        self.projects
            .iter()
            .find(|project| project.owner_project == owner_project)
    }

    /// Canonical project id matching `value` ignoring case.
    pub fn project_id_ignoring_case(&self, value: &str) -> Option<&str> {
        self.project_lookup.get(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(id: &str, name: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            owner_project: id.to_string(),
            display_name: name.map(String::from),
            ..ProjectRecord::default()
        }
    }

    #[test]
    fn builds_id_sets() {
        let dataset = ReferenceDataset::new(
            vec![ChainEntry {
                caip2: "eip155:10".to_string(),
                short_id: "optimism".to_string(),
                name: "OP Mainnet".to_string(),
            }],
            BTreeMap::new(),
            Vec::new(),
            BTreeMap::new(),
            vec![project("uniswap", Some("Uniswap")), project("", None)],
        );
        assert!(dataset.valid_chain_ids.contains("eip155:10"));
        assert_eq!(dataset.valid_project_ids.len(), 1);
        assert_eq!(dataset.project_id_ignoring_case("UniSwap"), Some("uniswap"));
        assert_eq!(dataset.chains[0].reference(), "10");
        assert_eq!(dataset.chains[0].namespace(), "eip155");
    }

    #[test]
    fn describe_prefers_display_name() {
        assert_eq!(project("aave", Some("Aave")).describe(), "Aave (aave)");
        assert_eq!(project("aave", Some("aave")).describe(), "aave");
        assert_eq!(project("aave", None).describe(), "aave");
    }
}
