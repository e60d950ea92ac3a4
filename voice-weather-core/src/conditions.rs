//! Mapping from provider condition labels to the bot's condition codes.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{collections::HashMap, fs, path::Path};

/// One row of the condition map file.
///
/// Example JSON:
/// `[{"APIValue": "Clouds", "CladType": "Cloudy"}]`
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ConditionMapEntry {
    #[serde(rename = "APIValue", alias = "providerValue")]
    pub provider_value: String,
    #[serde(rename = "CladType", alias = "domainCode")]
    pub domain_code: String,
}

#[derive(Debug, Clone, Default)]
pub struct ConditionMap {
    codes: HashMap<String, String>,
}

impl ConditionMap {
    /// Build from entries in file order. The first entry for a provider value wins.
    pub fn from_entries(entries: impl IntoIterator<Item = ConditionMapEntry>) -> Self {
        let mut codes = HashMap::new();
        for entry in entries {
            codes
                .entry(entry.provider_value)
                .or_insert(entry.domain_code);
        }
        Self { codes }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<ConditionMapEntry> =
            serde_json::from_str(json).context("Failed to parse condition map JSON")?;
        Ok(Self::from_entries(entries))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read condition map: {}", path.display()))?;

        let map = Self::from_json(&contents)
            .with_context(|| format!("Invalid condition map: {}", path.display()))?;

        tracing::debug!(entries = map.len(), path = %path.display(), "Loaded condition map");
        Ok(map)
    }

    pub fn lookup(&self, provider_value: &str) -> Option<&str> {
        self.codes.get(provider_value).map(String::as_str)
    }

    /// Domain code for `label`, or the label itself when unmapped.
    pub fn resolve(&self, label: &str) -> String {
        match self.lookup(label) {
            Some(code) => {
                tracing::debug!(provider_value = label, domain_code = code, "Mapped condition");
                code.to_string()
            }
            None => label.to_string(),
        }
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}
