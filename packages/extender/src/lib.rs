// ABOUTME: Display extender adding subtitle, result placement and header suppression options
// ABOUTME: Section-scoped describe/commit/summarize over a fixed option record

pub mod catalog;
pub mod config;
pub mod error;
pub mod plugin;
pub mod render;
pub mod section;
pub mod store;
pub mod summary;
pub mod types;
pub mod values;

// Re-export main types
pub use catalog::{DescribeHeader, HandlerMetadata, HeaderCatalog, HeaderDescription, HeaderDescriptor};
pub use config::{ConfigError, ExtenderConfig};
pub use error::{ExtenderError, Result};
pub use plugin::{ExtenderInfo, VIZZINI_DISPLAY_EXTENDER};
pub use render::{Region, RenderPlan};
pub use section::{FieldDescriptor, FieldKind, Section, SectionView, SelectOption};
pub use store::SectionedOptionStore;
pub use summary::{truncate_words, SummaryCategory, SummaryColumn, SummaryItem};
pub use types::{HeaderSelection, OptionSet};
pub use values::SubmittedValues;
