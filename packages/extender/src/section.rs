// ABOUTME: Named sections of the extender and the declarative edit views they produce
// ABOUTME: One table entry per section carries its key, heading, field copy and summary title

use crate::error::ExtenderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Value of the placeholder option shown when a display has no headers
pub const NO_HEADERS_VALUE: &str = "__na__";
pub const NO_HEADERS_LABEL: &str = "This view has no headers...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Subtitle,
    MoveResult,
    SuppressHeaders,
}

struct SectionSpec {
    key: &'static str,
    heading: &'static str,
    note: Option<&'static str>,
    field_label: &'static str,
    field_description: &'static str,
    summary_title: &'static str,
}

const SUBTITLE: SectionSpec = SectionSpec {
    key: "subtitle",
    heading: "Subtitle",
    note: Some("Optionally enter a subtitle to display at the top of the views exposed form."),
    field_label: "Exposed Form Title",
    field_description: "Title value to display at the top of the Views Exposed Fields form.",
    summary_title: "Subtitle",
};

const MOVE_RESULT: SectionSpec = SectionSpec {
    key: "move_result",
    heading: "Move Result",
    note: None,
    field_label: "Move Result Block",
    field_description: "Move the result block to between the exposed form and the view content.",
    summary_title: "Move Result Block",
};

const SUPPRESS_HEADERS: SectionSpec = SectionSpec {
    key: "suppress_headers",
    heading: "Suppress Headers",
    note: None,
    field_label: "Suppress Headers",
    field_description: "Suppress the selected headers when results are displayed in the view.",
    summary_title: "Suppressed Headers",
};

impl Section {
    /// Summary order
    pub const ALL: [Section; 3] = [Section::Subtitle, Section::MoveResult, Section::SuppressHeaders];

    fn spec(&self) -> &'static SectionSpec {
        match self {
            Section::Subtitle => &SUBTITLE,
            Section::MoveResult => &MOVE_RESULT,
            Section::SuppressHeaders => &SUPPRESS_HEADERS,
        }
    }

    /// Option key, also the submitted form key
    pub fn as_str(&self) -> &'static str {
        self.spec().key
    }

    /// Lenient lookup used at the host boundary; unknown names are not errors there
    pub fn lookup(name: &str) -> Option<Section> {
        Self::ALL.into_iter().find(|s| s.as_str() == name)
    }

    pub fn heading(&self) -> &'static str {
        self.spec().heading
    }

    pub fn note(&self) -> Option<&'static str> {
        self.spec().note
    }

    pub fn field_label(&self) -> &'static str {
        self.spec().field_label
    }

    pub fn field_description(&self) -> &'static str {
        self.spec().field_description
    }

    pub fn summary_title(&self) -> &'static str {
        self.spec().summary_title
    }
}

impl FromStr for Section {
    type Err = ExtenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s).ok_or_else(|| ExtenderError::UnknownSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    Text {
        value: String,
    },
    Boolean {
        value: bool,
    },
    MultiSelect {
        options: Vec<SelectOption>,
        selected: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    pub key: String,
    pub label: String,
    pub description: String,
    #[serde(default)]
    pub disabled: bool,
    #[serde(flatten)]
    pub kind: FieldKind,
}

impl FieldDescriptor {
    pub fn new(section: Section, kind: FieldKind) -> Self {
        Self {
            key: section.as_str().to_string(),
            label: section.field_label().to_string(),
            description: section.field_description().to_string(),
            disabled: false,
            kind,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// What the host form layer should render for one section.
///
/// An empty view (no section, no fields) is the answer for names the
/// extender does not own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionView {
    pub section: Option<Section>,
    pub heading: Option<String>,
    pub note: Option<String>,
    pub fields: Vec<FieldDescriptor>,
}

impl SectionView {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn for_section(section: Section, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            section: Some(section),
            heading: Some(section.heading().to_string()),
            note: section.note().map(str::to_string),
            fields,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn field(&self, key: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.key == key)
    }
}
