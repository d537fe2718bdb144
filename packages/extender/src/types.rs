// ABOUTME: Option record stored on a display by the extender
// ABOUTME: Subtitle text, result placement flag and header suppression selection

use crate::catalog::HeaderCatalog;
use crate::error::Result;
use crate::values;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The three options the extender adds to a display.
///
/// Keys are fixed: a record loaded from storage with missing keys gets the
/// defaults for those keys, and unknown keys are dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OptionSet {
    pub subtitle: String,
    pub suppress_headers: HeaderSelection,
    pub move_result: bool,
}

impl OptionSet {
    /// Load a stored option record
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Checkbox-shaped selection of header ids.
///
/// Every id the editor showed is kept with its checked state, so an entry
/// mapped to `false` was offered but left unchecked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct HeaderSelection(BTreeMap<String, bool>);

impl HeaderSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selection with every given id checked
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ids.into_iter().map(|id| (id.into(), true)).collect()
    }

    pub fn set(&mut self, id: impl Into<String>, selected: bool) {
        self.0.insert(id.into(), selected);
    }

    pub fn remove(&mut self, id: &str) -> Option<bool> {
        self.0.remove(id)
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Checked ids in id order
    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, selected)| **selected)
            .map(|(id, _)| id.as_str())
    }

    pub fn selected_count(&self) -> usize {
        self.selected().count()
    }

    /// True when nothing is checked, even if unchecked entries are stored
    pub fn is_empty(&self) -> bool {
        self.selected_count() == 0
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(id, selected)| (id.as_str(), *selected))
    }

    /// Checked ids the catalog no longer declares
    pub fn stale<'a>(&'a self, catalog: &'a HeaderCatalog) -> impl Iterator<Item = &'a str> {
        self.selected().filter(move |id| !catalog.contains(id))
    }

    /// Drop every entry the catalog does not declare, returning the dropped ids
    pub fn retain_known(&mut self, catalog: &HeaderCatalog) -> Vec<String> {
        let dropped: Vec<String> = self
            .0
            .keys()
            .filter(|id| !catalog.contains(id))
            .cloned()
            .collect();
        for id in &dropped {
            self.0.remove(id);
        }
        dropped
    }
}

impl FromIterator<(String, bool)> for HeaderSelection {
    fn from_iter<T: IntoIterator<Item = (String, bool)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

// Stored records come from several writers: plain id lists, checkbox maps
// with `id => id` / `id => 0`, or boolean maps. All of them load.
impl<'de> Deserialize<'de> for HeaderSelection {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(deserializer)?;
        values::coerce_selection(&raw).ok_or_else(|| {
            de::Error::custom("expected a list of header ids or a map of header id to flag")
        })
    }
}
