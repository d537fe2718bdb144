// ABOUTME: Section-scoped edit, commit and summary operations over the extender options
// ABOUTME: Every operation takes a snapshot and returns a new value; nothing here fails

use crate::catalog::HeaderCatalog;
use crate::config::ExtenderConfig;
use crate::section::{
    FieldDescriptor, FieldKind, Section, SectionView, SelectOption, NO_HEADERS_LABEL,
    NO_HEADERS_VALUE,
};
use crate::summary::{truncate_words, SummaryCategory, SummaryItem};
use crate::types::OptionSet;
use crate::values::SubmittedValues;
use tracing::{debug, warn};

#[derive(Debug, Clone, Default)]
pub struct SectionedOptionStore {
    config: ExtenderConfig,
}

impl SectionedOptionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ExtenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtenderConfig {
        &self.config
    }

    /// Option record for a freshly configured display
    pub fn defaults(&self) -> OptionSet {
        OptionSet::default()
    }

    /// Edit view for a section named by the host UI router.
    ///
    /// Names the extender does not own yield an empty view.
    pub fn describe_section(
        &self,
        section: &str,
        catalog: &HeaderCatalog,
        current: &OptionSet,
    ) -> SectionView {
        match Section::lookup(section) {
            Some(section) => self.describe(section, catalog, current),
            None => {
                debug!("Section '{}' is not handled by the extender", section);
                SectionView::empty()
            }
        }
    }

    pub fn describe(
        &self,
        section: Section,
        catalog: &HeaderCatalog,
        current: &OptionSet,
    ) -> SectionView {
        let field = match section {
            Section::Subtitle => FieldDescriptor::new(
                section,
                FieldKind::Text {
                    value: current.subtitle.clone(),
                },
            ),
            Section::MoveResult => FieldDescriptor::new(
                section,
                FieldKind::Boolean {
                    value: current.move_result,
                },
            ),
            Section::SuppressHeaders => header_field(catalog, current),
        };

        SectionView::for_section(section, vec![field])
    }

    /// Apply a submitted section to `current`.
    ///
    /// Only the section's own field changes. Unknown sections and missing or
    /// unusable submitted values leave the record as it was.
    pub fn commit_section(
        &self,
        section: &str,
        submitted: &SubmittedValues,
        current: &OptionSet,
    ) -> OptionSet {
        match Section::lookup(section) {
            Some(section) => self.commit(section, submitted, current),
            None => {
                debug!("Ignoring commit for unhandled section '{}'", section);
                current.clone()
            }
        }
    }

    pub fn commit(
        &self,
        section: Section,
        submitted: &SubmittedValues,
        current: &OptionSet,
    ) -> OptionSet {
        let mut next = current.clone();
        let key = section.as_str();

        let applied = match section {
            Section::Subtitle => submitted.text(key).map(|text| next.subtitle = text),
            Section::MoveResult => submitted.flag(key).map(|flag| next.move_result = flag),
            Section::SuppressHeaders => submitted.selection(key).map(|mut selection| {
                // The placeholder is a UI artifact, never a header
                selection.remove(NO_HEADERS_VALUE);
                next.suppress_headers = selection;
            }),
        };

        if applied.is_none() {
            match submitted.get(key) {
                Some(value) => warn!("Ignoring unusable value for '{}': {}", key, value),
                None => debug!("No submitted value for '{}', keeping current", key),
            }
        }

        next
    }

    /// One row per section in fixed order: subtitle, move_result, suppress_headers
    pub fn summarize(&self, current: &OptionSet) -> Vec<SummaryItem> {
        Section::ALL
            .into_iter()
            .map(|section| {
                let value = match section {
                    Section::Subtitle if current.subtitle.is_empty() => "None".to_string(),
                    Section::Subtitle => {
                        truncate_words(&current.subtitle, self.config.summary_words)
                    }
                    Section::MoveResult if current.move_result => "True".to_string(),
                    Section::MoveResult => "False".to_string(),
                    Section::SuppressHeaders => match current.suppress_headers.selected_count() {
                        0 => "None".to_string(),
                        count => format!("{} Suppressed", count),
                    },
                };
                SummaryItem::new(section, value)
            })
            .collect()
    }

    pub fn summary_category(&self) -> SummaryCategory {
        SummaryCategory::default()
    }

    /// Copy of `current` without selection entries the catalog no longer declares
    pub fn prune_stale(&self, current: &OptionSet, catalog: &HeaderCatalog) -> OptionSet {
        let mut next = current.clone();
        let dropped = next.suppress_headers.retain_known(catalog);
        if !dropped.is_empty() {
            debug!("Pruned stale header ids: {}", dropped.join(", "));
        }
        next
    }
}

fn header_field(catalog: &HeaderCatalog, current: &OptionSet) -> FieldDescriptor {
    if catalog.is_empty() {
        let kind = FieldKind::MultiSelect {
            options: vec![SelectOption {
                value: NO_HEADERS_VALUE.to_string(),
                label: NO_HEADERS_LABEL.to_string(),
            }],
            selected: vec![NO_HEADERS_VALUE.to_string()],
        };
        return FieldDescriptor::new(Section::SuppressHeaders, kind).disabled();
    }

    let options = catalog
        .iter()
        .map(|header| SelectOption {
            value: header.id.clone(),
            label: header.option_label(),
        })
        .collect();

    // Stale ids stay in storage but are never shown as selected
    let selected = catalog
        .iter()
        .filter(|header| current.suppress_headers.is_selected(&header.id))
        .map(|header| header.id.clone())
        .collect();

    FieldDescriptor::new(Section::SuppressHeaders, FieldKind::MultiSelect { options, selected })
}
