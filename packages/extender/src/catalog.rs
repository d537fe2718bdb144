// ABOUTME: Header catalog supplied by the host display for one edit or render cycle
// ABOUTME: Header handlers describe themselves through the DescribeHeader capability

use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Metadata keys that identify what a header handler shows, in probe order.
pub const CONTEXT_KEYS: [&str; 3] = ["target", "view_to_insert", "plugin_id"];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderDescription {
    pub table: String,
    pub field: String,
    /// Short hint that lets an editor tell similar headers apart
    pub context: String,
}

/// Implemented by anything that can sit in a display's header region.
pub trait DescribeHeader {
    fn header_id(&self) -> &str;

    fn describe_self(&self) -> HeaderDescription;

    /// Handler plugin id, when the host knows it
    fn plugin_id(&self) -> Option<&str> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeaderDescriptor {
    pub id: String,
    pub table: String,
    pub field: String,
    #[serde(default)]
    pub context: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugin_id: Option<String>,
}

impl HeaderDescriptor {
    pub fn new(
        id: impl Into<String>,
        table: impl Into<String>,
        field: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            table: table.into(),
            field: field.into(),
            context: context.into(),
            plugin_id: None,
        }
    }

    pub fn with_plugin_id(mut self, plugin_id: impl Into<String>) -> Self {
        self.plugin_id = Some(plugin_id.into());
        self
    }

    pub fn from_handler<H: DescribeHeader + ?Sized>(handler: &H) -> Self {
        let description = handler.describe_self();
        Self {
            id: handler.header_id().to_string(),
            table: description.table,
            field: description.field,
            context: description.context,
            plugin_id: handler.plugin_id().map(str::to_string),
        }
    }

    /// Label shown next to the header's checkbox
    pub fn option_label(&self) -> String {
        format!(
            "{} ({} => {} => {})",
            self.id, self.table, self.field, self.context
        )
    }
}

impl DescribeHeader for HeaderDescriptor {
    fn header_id(&self) -> &str {
        &self.id
    }

    fn describe_self(&self) -> HeaderDescription {
        HeaderDescription {
            table: self.table.clone(),
            field: self.field.clone(),
            context: self.context.clone(),
        }
    }

    fn plugin_id(&self) -> Option<&str> {
        self.plugin_id.as_deref()
    }
}

/// Raw handler record as hosts report it: identity plus whatever
/// handler-specific keys the handler type carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HandlerMetadata {
    pub id: String,
    #[serde(default)]
    pub table: String,
    #[serde(default)]
    pub field: String,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl HandlerMetadata {
    fn extra_str(&self, key: &str) -> Option<String> {
        match self.extra.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }
}

impl DescribeHeader for HandlerMetadata {
    fn header_id(&self) -> &str {
        &self.id
    }

    fn describe_self(&self) -> HeaderDescription {
        let context = CONTEXT_KEYS
            .iter()
            .find_map(|key| self.extra_str(key))
            .unwrap_or_default();

        HeaderDescription {
            table: self.table.clone(),
            field: self.field.clone(),
            context,
        }
    }

    fn plugin_id(&self) -> Option<&str> {
        self.extra.get("plugin_id").and_then(Value::as_str)
    }
}

/// Ordered headers a display declares. Read-only for the extender.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeaderCatalog(Vec<HeaderDescriptor>);

impl HeaderCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_handlers<'a, H, I>(handlers: I) -> Self
    where
        H: DescribeHeader + 'a,
        I: IntoIterator<Item = &'a H>,
    {
        handlers
            .into_iter()
            .map(|h| HeaderDescriptor::from_handler(h))
            .collect()
    }

    /// Build a catalog from a JSON list of raw handler records
    pub fn from_handler_json(raw: &str) -> Result<Self> {
        let handlers: Vec<HandlerMetadata> = serde_json::from_str(raw)?;
        Ok(Self::from_handlers(&handlers))
    }

    pub fn push(&mut self, header: HeaderDescriptor) {
        self.0.push(header);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HeaderDescriptor> {
        self.0.iter()
    }

    pub fn get(&self, id: &str) -> Option<&HeaderDescriptor> {
        self.0.iter().find(|h| h.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }
}

impl FromIterator<HeaderDescriptor> for HeaderCatalog {
    fn from_iter<T: IntoIterator<Item = HeaderDescriptor>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a HeaderCatalog {
    type Item = &'a HeaderDescriptor;
    type IntoIter = std::slice::Iter<'a, HeaderDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
