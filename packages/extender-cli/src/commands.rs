// ABOUTME: Implementations behind the vizzini subcommands
// ABOUTME: Each command loads its inputs, runs one extender operation and returns printable output

use crate::records::{load_catalog, load_options, save_options};
use anyhow::Result;
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use std::path::Path;
use tracing::info;
use vizzini_extender::{
    OptionSet, RenderPlan, SectionedOptionStore, SubmittedValues, SummaryItem,
    VIZZINI_DISPLAY_EXTENDER,
};

pub fn info_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&VIZZINI_DISPLAY_EXTENDER)?)
}

pub fn defaults_json(store: &SectionedOptionStore) -> Result<String> {
    Ok(store.defaults().to_json_pretty()?)
}

pub fn describe(
    store: &SectionedOptionStore,
    section: &str,
    options_path: &Path,
    headers_path: Option<&Path>,
) -> Result<String> {
    let current = load_options(options_path)?;
    let catalog = load_catalog(headers_path)?;
    let view = store.describe_section(section, &catalog, &current);
    Ok(serde_json::to_string_pretty(&view)?)
}

/// Apply a section commit; the record is written back unless `dry_run`
pub fn commit(
    store: &SectionedOptionStore,
    section: &str,
    options_path: &Path,
    values: &str,
    dry_run: bool,
) -> Result<OptionSet> {
    let current = load_options(options_path)?;
    let submitted = SubmittedValues::from_json(values)?;
    let next = store.commit_section(section, &submitted, &current);

    if next == current {
        info!("Section '{}' left the record unchanged", section);
    } else if !dry_run {
        save_options(options_path, &next)?;
        info!("Committed section '{}' to {}", section, options_path.display());
    }

    Ok(next)
}

pub fn summary(store: &SectionedOptionStore, options_path: &Path) -> Result<Vec<SummaryItem>> {
    let current = load_options(options_path)?;
    Ok(store.summarize(&current))
}

pub fn summary_table(items: &[SummaryItem]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec!["Setting", "Value"]);
    for item in items {
        table.add_row(vec![item.title.clone(), item.value.clone()]);
    }
    table
}

pub fn plan(
    store: &SectionedOptionStore,
    options_path: &Path,
    headers_path: Option<&Path>,
) -> Result<RenderPlan> {
    let current = load_options(options_path)?;
    let catalog = load_catalog(headers_path)?;
    Ok(RenderPlan::build_with(&current, &catalog, store.config()))
}

pub fn prune(
    store: &SectionedOptionStore,
    options_path: &Path,
    headers_path: Option<&Path>,
    dry_run: bool,
) -> Result<OptionSet> {
    let current = load_options(options_path)?;
    let catalog = load_catalog(headers_path)?;
    let next = store.prune_stale(&current, &catalog);

    if next != current && !dry_run {
        save_options(options_path, &next)?;
    }
    Ok(next)
}
