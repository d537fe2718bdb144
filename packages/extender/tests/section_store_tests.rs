// ABOUTME: Integration tests for section-scoped describe, commit and summary
// ABOUTME: Covers isolation between sections, idempotent commits and summary formatting

use pretty_assertions::assert_eq;
use rstest::{fixture, rstest};
use serde_json::json;
use vizzini_extender::{
    FieldKind, HeaderCatalog, HeaderSelection, OptionSet, Section, SectionedOptionStore,
    SubmittedValues,
};

#[fixture]
fn store() -> SectionedOptionStore {
    SectionedOptionStore::new()
}

#[fixture]
fn catalog() -> HeaderCatalog {
    HeaderCatalog::from_handler_json(
        r#"[
            {"id": "result", "table": "views", "field": "result", "plugin_id": "result"},
            {"id": "area_text_custom", "table": "views", "field": "area_text_custom", "plugin_id": "text_custom"},
            {"id": "view", "table": "views", "field": "view", "view_to_insert": "people:block_2", "plugin_id": "view"}
        ]"#,
    )
    .unwrap()
}

fn populated() -> OptionSet {
    OptionSet {
        subtitle: "Search the staff directory".to_string(),
        suppress_headers: HeaderSelection::from_ids(["result"]),
        move_result: true,
    }
}

fn submission() -> SubmittedValues {
    SubmittedValues::new()
        .with("subtitle", "Find people")
        .with("move_result", 0)
        .with("suppress_headers", json!({"view": "view", "result": 0}))
}

#[rstest]
fn test_defaults_are_empty(store: SectionedOptionStore) {
    assert_eq!(
        store.defaults(),
        OptionSet {
            subtitle: String::new(),
            suppress_headers: HeaderSelection::new(),
            move_result: false,
        }
    );
}

#[rstest]
#[case(Section::Subtitle)]
#[case(Section::MoveResult)]
#[case(Section::SuppressHeaders)]
fn test_commit_only_replaces_own_field(store: SectionedOptionStore, #[case] section: Section) {
    let current = populated();
    let next = store.commit(section, &submission(), &current);

    if section != Section::Subtitle {
        assert_eq!(next.subtitle, current.subtitle);
    }
    if section != Section::MoveResult {
        assert_eq!(next.move_result, current.move_result);
    }
    if section != Section::SuppressHeaders {
        assert_eq!(next.suppress_headers, current.suppress_headers);
    }
    assert_ne!(next, current);
}

#[rstest]
#[case("subtitle")]
#[case("move_result")]
#[case("suppress_headers")]
#[case("pager")]
fn test_commit_is_idempotent(store: SectionedOptionStore, #[case] section: &str) {
    let once = store.commit_section(section, &submission(), &populated());
    let twice = store.commit_section(section, &submission(), &once);
    assert_eq!(twice, once);
}

#[rstest]
#[case("")]
#[case("pager")]
#[case("SUBTITLE")]
fn test_unknown_section_is_a_no_op(
    store: SectionedOptionStore,
    catalog: HeaderCatalog,
    #[case] section: &str,
) {
    let current = populated();
    assert!(store.describe_section(section, &catalog, &current).is_empty());
    assert_eq!(store.commit_section(section, &submission(), &current), current);
}

#[rstest]
fn test_empty_catalog_placeholder(store: SectionedOptionStore) {
    for current in [OptionSet::default(), populated()] {
        let view = store.describe_section("suppress_headers", &HeaderCatalog::new(), &current);
        let field = view.field("suppress_headers").unwrap();
        assert!(field.disabled);

        let FieldKind::MultiSelect { options, selected } = &field.kind else {
            panic!("expected a multi-select field");
        };
        assert_eq!(options.len(), 1);
        assert_eq!(options[0].value, "__na__");
        assert_eq!(options[0].label, "This view has no headers...");
        assert_eq!(selected, &vec!["__na__".to_string()]);
    }
}

#[rstest]
fn test_stale_ids_are_not_shown_as_selected(store: SectionedOptionStore, catalog: HeaderCatalog) {
    let current = OptionSet {
        suppress_headers: HeaderSelection::from_ids(["view", "gone", "area_text_custom", "result"]),
        ..Default::default()
    };

    let view = store.describe(Section::SuppressHeaders, &catalog, &current);
    let FieldKind::MultiSelect { options, selected } = &view.fields[0].kind else {
        panic!("expected a multi-select field");
    };

    // Catalog order, restricted to ids the catalog declares
    assert_eq!(
        selected,
        &vec![
            "result".to_string(),
            "area_text_custom".to_string(),
            "view".to_string(),
        ]
    );
    assert!(selected
        .iter()
        .all(|id| options.iter().any(|o| &o.value == id)));

    // Storage keeps the stale id
    assert!(current.suppress_headers.is_selected("gone"));
}

#[rstest]
fn test_catalog_labels_use_first_context_key(store: SectionedOptionStore, catalog: HeaderCatalog) {
    let view = store.describe(Section::SuppressHeaders, &catalog, &OptionSet::default());
    let FieldKind::MultiSelect { options, .. } = &view.fields[0].kind else {
        panic!("expected a multi-select field");
    };

    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
    assert_eq!(
        labels,
        vec![
            "result (views => result => result)",
            "area_text_custom (views => area_text_custom => text_custom)",
            "view (views => view => people:block_2)",
        ]
    );
}

#[rstest]
#[case(Section::Subtitle)]
#[case(Section::MoveResult)]
#[case(Section::SuppressHeaders)]
fn test_commit_then_describe_reflects_new_value(
    store: SectionedOptionStore,
    catalog: HeaderCatalog,
    #[case] section: Section,
) {
    let next = store.commit(section, &submission(), &populated());
    let view = store.describe(section, &catalog, &next);
    let field = view.field(section.as_str()).unwrap();

    let expected = match section {
        Section::Subtitle => FieldKind::Text {
            value: "Find people".to_string(),
        },
        Section::MoveResult => FieldKind::Boolean { value: false },
        Section::SuppressHeaders => {
            let FieldKind::MultiSelect { options, .. } = &field.kind else {
                panic!("expected a multi-select field");
            };
            FieldKind::MultiSelect {
                options: options.clone(),
                selected: vec!["view".to_string()],
            }
        }
    };
    assert_eq!(field.kind, expected);
}

#[rstest]
#[case("one two three four five six", "one two three four...")]
#[case("one two", "one two")]
#[case("Top 10 tips for you", "Top 10 tips for you")]
#[case("", "None")]
fn test_subtitle_summary(
    store: SectionedOptionStore,
    #[case] subtitle: &str,
    #[case] expected: &str,
) {
    let current = OptionSet {
        subtitle: subtitle.to_string(),
        ..Default::default()
    };
    let items = store.summarize(&current);
    assert_eq!(items[0].section, Section::Subtitle);
    assert_eq!(items[0].title, "Subtitle");
    assert_eq!(items[0].value, expected);
}

#[rstest]
#[case(json!({"a": true, "b": false, "c": true}), "2 Suppressed")]
#[case(json!({"a": false}), "None")]
#[case(json!({}), "None")]
fn test_header_summary(
    store: SectionedOptionStore,
    #[case] stored: serde_json::Value,
    #[case] expected: &str,
) {
    let current: OptionSet = serde_json::from_value(json!({ "suppress_headers": stored })).unwrap();
    let items = store.summarize(&current);
    assert_eq!(items[2].section, Section::SuppressHeaders);
    assert_eq!(items[2].value, expected);
}

#[rstest]
#[case(true, "True")]
#[case(false, "False")]
fn test_move_result_summary(
    store: SectionedOptionStore,
    #[case] move_result: bool,
    #[case] expected: &str,
) {
    let current = OptionSet {
        move_result,
        ..Default::default()
    };
    let items = store.summarize(&current);
    assert_eq!(items[1].section, Section::MoveResult);
    assert_eq!(items[1].value, expected);
}

#[rstest]
fn test_summary_order_and_category(store: SectionedOptionStore) {
    let items = store.summarize(&populated());
    let sections: Vec<Section> = items.iter().map(|i| i.section).collect();
    assert_eq!(sections, Section::ALL.to_vec());
    assert!(items.iter().all(|i| i.category == "vizzini"));
    assert_eq!(store.summary_category().title, "Vizzini Settings");
}
