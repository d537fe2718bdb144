// ABOUTME: Render plan handed to the template layer for one display execution
// ABOUTME: Places the subtitle, moves the result block and skips suppressed headers

use crate::catalog::HeaderCatalog;
use crate::config::ExtenderConfig;
use crate::types::OptionSet;
use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "region", rename_all = "snake_case")]
pub enum Region {
    Header { id: String },
    Subtitle { text: String },
    ExposedForm,
    Result { id: String },
    Content,
}

/// Options as the rendering layer consumes them, resolved against the
/// headers the display declares for this execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderPlan {
    pub options: OptionSet,
    /// Selected ids the catalog declares; stale selections are not listed
    pub suppressed: Vec<String>,
    pub regions: Vec<Region>,
}

impl RenderPlan {
    pub fn build(options: &OptionSet, catalog: &HeaderCatalog) -> Self {
        Self::build_with(options, catalog, &ExtenderConfig::default())
    }

    /// Region order: headers, subtitle, exposed form, moved result, content
    pub fn build_with(options: &OptionSet, catalog: &HeaderCatalog, config: &ExtenderConfig) -> Self {
        for id in options.suppress_headers.stale(catalog) {
            debug!("Suppressed header '{}' is not declared by this display", id);
        }

        let suppressed: Vec<String> = catalog
            .iter()
            .filter(|h| options.suppress_headers.is_selected(&h.id))
            .map(|h| h.id.clone())
            .collect();

        let mut regions = Vec::with_capacity(catalog.len() + 3);
        let mut moved = Vec::new();

        for header in catalog {
            if suppressed.contains(&header.id) {
                continue;
            }
            let is_result = header.plugin_id.as_deref() == Some(config.result_plugin.as_str());
            if options.move_result && is_result {
                moved.push(Region::Result {
                    id: header.id.clone(),
                });
            } else {
                regions.push(Region::Header {
                    id: header.id.clone(),
                });
            }
        }

        if !options.subtitle.is_empty() {
            regions.push(Region::Subtitle {
                text: options.subtitle.clone(),
            });
        }
        regions.push(Region::ExposedForm);
        regions.extend(moved);
        regions.push(Region::Content);

        Self {
            options: options.clone(),
            suppressed,
            regions,
        }
    }

    pub fn is_suppressed(&self, id: &str) -> bool {
        self.suppressed.iter().any(|s| s == id)
    }

    pub fn subtitle(&self) -> Option<&str> {
        self.regions.iter().find_map(|r| match r {
            Region::Subtitle { text } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Header ids still rendered in the header region
    pub fn header_ids(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().filter_map(|r| match r {
            Region::Header { id } => Some(id.as_str()),
            _ => None,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::HeaderDescriptor;
    use crate::types::HeaderSelection;
    use pretty_assertions::assert_eq;

    fn catalog() -> HeaderCatalog {
        vec![
            HeaderDescriptor::new("area", "views", "area", "text"),
            HeaderDescriptor::new("result", "views", "result", "result").with_plugin_id("result"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_default_plan() {
        let plan = RenderPlan::build(&OptionSet::default(), &catalog());
        assert_eq!(
            plan.regions,
            vec![
                Region::Header { id: "area".to_string() },
                Region::Header { id: "result".to_string() },
                Region::ExposedForm,
                Region::Content,
            ]
        );
        assert!(plan.subtitle().is_none());
        assert!(plan.suppressed.is_empty());
    }

    #[test]
    fn test_plan_moves_result_and_injects_subtitle() {
        let options = OptionSet {
            subtitle: "Directory".to_string(),
            move_result: true,
            ..Default::default()
        };

        let plan = RenderPlan::build(&options, &catalog());
        assert_eq!(
            plan.regions,
            vec![
                Region::Header { id: "area".to_string() },
                Region::Subtitle { text: "Directory".to_string() },
                Region::ExposedForm,
                Region::Result { id: "result".to_string() },
                Region::Content,
            ]
        );
        assert_eq!(plan.subtitle(), Some("Directory"));
    }

    #[test]
    fn test_plan_skips_suppressed_and_ignores_stale() {
        let options = OptionSet {
            suppress_headers: HeaderSelection::from_ids(["area", "gone"]),
            ..Default::default()
        };

        let plan = RenderPlan::build(&options, &catalog());
        assert_eq!(plan.suppressed, vec!["area".to_string()]);
        assert!(plan.is_suppressed("area"));
        assert!(!plan.is_suppressed("gone"));
        assert_eq!(plan.header_ids().collect::<Vec<_>>(), vec!["result"]);
    }

    #[test]
    fn test_suppressed_result_is_not_moved() {
        let options = OptionSet {
            suppress_headers: HeaderSelection::from_ids(["result"]),
            move_result: true,
            ..Default::default()
        };

        let plan = RenderPlan::build(&options, &catalog());
        assert!(!plan
            .regions
            .iter()
            .any(|r| matches!(r, Region::Result { .. })));
    }

    #[test]
    fn test_custom_result_plugin() {
        let catalog: HeaderCatalog = vec![HeaderDescriptor::new("summary", "views", "summary", "")
            .with_plugin_id("result_summary")]
        .into_iter()
        .collect();
        let options = OptionSet {
            move_result: true,
            ..Default::default()
        };
        let config = ExtenderConfig {
            result_plugin: "result_summary".to_string(),
            ..Default::default()
        };

        let plan = RenderPlan::build_with(&options, &catalog, &config);
        assert_eq!(
            plan.regions,
            vec![
                Region::ExposedForm,
                Region::Result { id: "summary".to_string() },
                Region::Content,
            ]
        );
    }
}
