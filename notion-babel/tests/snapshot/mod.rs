//! Recorded API responses
//!
//! The fixtures hold children listings exactly as the API paginates them. Rendering from a
//! snapshot must follow `next_cursor` until `has_more` is false.

use crate::common::{fixture_path, load_fixture};
use insta::assert_snapshot;
use notion_babel::formats::treeviz::to_treeviz_str;
use notion_babel::source::PageInfo;
use notion_babel::{
    render_with_rules, BlockSource, CollectedDiagnostics, Diagnostic, FetchError, RenderError,
    RenderRules, SnapshotSource,
};

#[test]
fn renders_paginated_page() {
    let source = load_fixture("weekly-review.json");
    let sink = CollectedDiagnostics::new();
    let markdown = render_with_rules(&source, "page-1", &RenderRules::default(), &sink)
        .expect("page to render");

    assert_snapshot!(markdown, @r"
# Weekly review

Ship **fast** and read the [==docs==](https://example.com/docs)

> [!tip]
> Remember the retro

- Importer

    - [x] Snapshots

    1. `Pagination`

> [!info]- Details

> Hidden text
>
> ```rust
> fn main() {}
> ```

---

Left

![chart v2.png](https://cdn.example.com/img/chart%20v2.png)

📄 [[Roadmap]]

$$
e = mc^2
$$
");

    assert_eq!(
        sink.entries(),
        vec![Diagnostic::UnsupportedBlock {
            block_id: "b-table".to_string(),
            block_type: "table".to_string(),
        }]
    );
}

#[test]
fn root_listing_spans_both_pages() {
    let source = load_fixture("weekly-review.json");
    let blocks = source.fetch_root_blocks("page-1").unwrap();
    let ids: Vec<&str> = blocks.iter().map(|block| block.id.as_str()).collect();
    assert_eq!(
        ids,
        vec![
            "b-heading",
            "b-intro",
            "b-callout",
            "b-importer",
            "b-toggle",
            "b-divider",
            "b-columns",
            "b-roadmap",
            "b-table",
            "b-equation",
        ]
    );
}

#[test]
fn page_metadata_is_exposed() {
    let source = load_fixture("weekly-review.json");
    assert_eq!(
        source.page("page-1"),
        Some(&PageInfo {
            title: "Weekly review".to_string(),
            url: "https://www.notion.so/Weekly-review-page1".to_string(),
        })
    );
    let ids: Vec<&str> = source.pages().map(|(id, _)| id).collect();
    assert_eq!(ids, vec!["page-1", "page-2"]);
}

#[test]
fn tree_outline_of_fixture() {
    let source = load_fixture("weekly-review.json");
    let outline = to_treeviz_str(&source, "page-1").unwrap();
    assert_snapshot!(outline, @r#"
⧉ Document (10 blocks)
├─ § heading_1 Weekly review
├─ ¶ paragraph Ship fast and read the docs
├─ ! callout Remember the retro
├─ • bulleted_list_item Importer
│ ├─ ☐ to_do Snapshots
│ └─ • numbered_list_item Pagination
├─ ▸ toggle Details
│ ├─ ¶ paragraph Hidden text
│ └─ 𝒱 code fn main() {}
├─ ⎯ divider
├─ ║ column_list
│ ├─ ║ column
│ │ └─ ¶ paragraph Left
│ └─ ║ column
│   └─ ▣ image
├─ ⧉ child_page Roadmap
├─ ○ table
└─ √ equation e = mc^2
"#);
}

#[test]
fn broken_cursor_chain_aborts() {
    let json = r#"{
        "children": {
            "doc": [
                {
                    "results": [{ "id": "a", "type": "paragraph", "paragraph": { "rich_text": [] } }],
                    "has_more": true,
                    "next_cursor": "gone"
                }
            ]
        }
    }"#;
    let source = SnapshotSource::from_json(json).unwrap();
    let err = render_with_rules(
        &source,
        "doc",
        &RenderRules::default(),
        &CollectedDiagnostics::new(),
    )
    .unwrap_err();
    let RenderError::Fetch { block_id, source } = err;
    assert_eq!(block_id, "doc");
    assert!(matches!(source, FetchError::MissingPage { ref cursor, .. } if cursor == "gone"));
}

#[test]
fn malformed_payloads_fall_back_to_empty() {
    let json = r#"{
        "children": {
            "doc": [
                {
                    "results": [
                        { "id": "a", "type": "paragraph", "paragraph": "not an object" },
                        { "id": "b", "type": "to_do", "to_do": { "rich_text": null, "checked": null } },
                        { "id": "c", "type": "heading_2" }
                    ],
                    "has_more": false,
                    "next_cursor": null
                }
            ]
        }
    }"#;
    let source = SnapshotSource::from_json(json).unwrap();
    let markdown = render_with_rules(
        &source,
        "doc",
        &RenderRules::default(),
        &CollectedDiagnostics::new(),
    )
    .unwrap();
    assert_eq!(markdown, "- [ ] \n\n## ");
}

#[test]
fn one_bad_field_keeps_the_others() {
    let json = r#"{
        "children": {
            "doc": [
                {
                    "results": [
                        { "id": "a", "type": "to_do", "has_children": null,
                          "to_do": { "rich_text": [{ "plain_text": "Ship it", "annotations": {} }], "checked": "yes" } },
                        { "id": "b", "type": "image",
                          "image": { "caption": "oops", "external": { "url": "https://x/y/name.png" } } },
                        { "id": "c", "type": "paragraph",
                          "paragraph": { "rich_text": [{ "plain_text": "Hello", "annotations": { "bold": null, "italic": true } }] } }
                    ],
                    "has_more": false,
                    "next_cursor": null
                }
            ]
        }
    }"#;
    let source = SnapshotSource::from_json(json).unwrap();
    let markdown = render_with_rules(
        &source,
        "doc",
        &RenderRules::default(),
        &CollectedDiagnostics::new(),
    )
    .unwrap();
    assert_eq!(
        markdown,
        "- [ ] Ship it\n\n![name.png](https://x/y/name.png)\n\n*Hello*"
    );
}

#[test]
fn missing_file_reports_path() {
    let err = SnapshotSource::from_path(fixture_path("does-not-exist.json")).unwrap_err();
    assert!(matches!(err, FetchError::Io { .. }));
    assert!(err.to_string().contains("does-not-exist.json"));
}
