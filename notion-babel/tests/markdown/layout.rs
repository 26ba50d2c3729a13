//! Block layout: separators, nesting depth, quoting and flattening.

use crate::common::{node, render_collecting, render_root};
use notion_babel::model::{BlockPayload, FileRef, Icon};
use notion_babel::{BlockKind, BlockNode, Diagnostic, FetchError, MemorySource, RenderError};

#[test]
fn paragraphs_are_separated_by_one_blank_line() {
    let source = MemorySource::new().with(
        "root",
        vec![
            node("a", "paragraph", "A"),
            node("b", "paragraph", "B"),
            node("c", "paragraph", "C"),
        ],
    );
    assert_eq!(render_root(&source), "A\n\nB\n\nC");
}

#[test]
fn default_entry_point_renders_with_default_rules() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![
                node("p", "numbered_list_item", "first").with_children(),
                BlockNode::new("x", BlockKind::from_tag("breadcrumb")),
            ],
        )
        .with("p", vec![node("c", "to_do", "nested")]);
    assert_eq!(
        notion_babel::render(&source, "root").unwrap(),
        "1. first\n\n    - [ ] nested"
    );
}

#[test]
fn nested_bullet_is_indented_one_level() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![node("p", "bulleted_list_item", "parent").with_children()],
        )
        .with("p", vec![node("c", "bulleted_list_item", "child")]);
    assert_eq!(render_root(&source), "- parent\n\n    - child");
}

#[test]
fn adjacent_list_items_stay_loose() {
    let source = MemorySource::new().with(
        "root",
        vec![
            node("a", "numbered_list_item", "one"),
            node("b", "numbered_list_item", "two"),
        ],
    );
    assert_eq!(render_root(&source), "1. one\n\n1. two");
}

#[test]
fn callout_with_warning_icon() {
    let callout = BlockNode::new("c", BlockKind::Callout)
        .with_payload(BlockPayload {
            icon: Some(Icon {
                emoji: Some("⚠️".to_string()),
            }),
            ..Default::default()
        })
        .with_text("careful");
    let source = MemorySource::new().with("root", vec![callout]);
    assert_eq!(render_root(&source), "> [!warning]\n> careful");
}

#[test]
fn multi_line_quote_prefixes_each_line() {
    let source = MemorySource::new().with("root", vec![node("q", "quote", "first\nsecond")]);
    assert_eq!(render_root(&source), "> first\n> second");
}

#[test]
fn checked_todo_without_text_keeps_trailing_space() {
    let todo = BlockNode::new("t", BlockKind::ToDo).with_payload(BlockPayload {
        checked: true,
        ..Default::default()
    });
    let source = MemorySource::new().with("root", vec![todo]);
    assert_eq!(render_root(&source), "- [x] ");
}

#[test]
fn image_label_falls_back_to_file_name() {
    let image = BlockNode::new("i", BlockKind::Image).with_payload(BlockPayload {
        file: Some(FileRef {
            url: Some("https://x/y/name.png?q=1".to_string()),
        }),
        ..Default::default()
    });
    let source = MemorySource::new().with("root", vec![image]);
    assert_eq!(
        render_root(&source),
        "![name.png](https://x/y/name.png?q=1)"
    );
}

#[test]
fn synced_block_contributes_only_its_children() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![
                node("li", "bulleted_list_item", "item").with_children(),
                node("after", "paragraph", "after"),
            ],
        )
        .with(
            "li",
            vec![BlockNode::new("sync", BlockKind::SyncedBlock).with_children()],
        )
        .with(
            "sync",
            vec![node("s1", "paragraph", "shared"), node("s2", "to_do", "task")],
        );
    assert_eq!(
        render_root(&source),
        "- item\n\n    shared\n\n    - [ ] task\n\nafter"
    );
}

#[test]
fn toggle_under_list_quotes_then_indents() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![node("li", "bulleted_list_item", "item").with_children()],
        )
        .with("li", vec![node("t", "toggle", "More").with_children()])
        .with(
            "t",
            vec![
                node("p", "paragraph", "hidden"),
                node("n", "bulleted_list_item", "nested"),
            ],
        );
    assert_eq!(
        render_root(&source),
        "- item\n\n    > [!info]- More\n\n    > hidden\n    >\n    > - nested"
    );
}

#[test]
fn quote_with_only_empty_children_adds_nothing() {
    let source = MemorySource::new()
        .with("root", vec![node("q", "quote", "said").with_children()])
        .with("q", vec![BlockNode::new("d", BlockKind::TableOfContents)]);
    assert_eq!(render_root(&source), "> said");
}

#[test]
fn unsupported_blocks_are_reported_and_skipped() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![
                node("a", "paragraph", "before"),
                BlockNode::new("tbl", BlockKind::from_tag("table")).with_children(),
                node("b", "paragraph", "after"),
            ],
        )
        .with("tbl", vec![node("row", "table_row", "")]);

    let (result, diagnostics) = render_collecting(&source);

    assert_eq!(result.unwrap(), "before\n\nafter");
    assert_eq!(
        diagnostics,
        vec![
            Diagnostic::UnsupportedBlock {
                block_id: "tbl".to_string(),
                block_type: "table".to_string(),
            },
            Diagnostic::UnsupportedBlock {
                block_id: "row".to_string(),
                block_type: "table_row".to_string(),
            },
        ]
    );
}

#[test]
fn missing_listing_fails_the_whole_document() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![
                node("ok", "paragraph", "fine"),
                node("li", "bulleted_list_item", "broken").with_children(),
            ],
        )
        .with("li", vec![node("deep", "paragraph", "deep").with_children()]);

    let (result, _) = render_collecting(&source);
    let err = result.unwrap_err();
    let RenderError::Fetch { block_id, source } = &err;
    assert_eq!(block_id, "deep");
    assert!(matches!(source, FetchError::NotFound(_)));
    assert!(err.to_string().contains("deep"));
}

#[test]
fn missing_document_fails() {
    let (result, _) = render_collecting(&MemorySource::new());
    assert!(matches!(
        result,
        Err(RenderError::Fetch { ref block_id, .. }) if block_id == "root"
    ));
}

#[test]
fn empty_document_renders_empty_string() {
    let source = MemorySource::new().with("root", Vec::new());
    assert_eq!(render_root(&source), "");
}

#[test]
fn small_pages_render_like_one_listing() {
    let blocks = vec![
        node("a", "heading_2", "Plan"),
        node("b", "bulleted_list_item", "one").with_children(),
        node("c", "bulleted_list_item", "two"),
        node("d", "divider", ""),
        node("e", "paragraph", "end"),
    ];
    let children = vec![node("b1", "paragraph", "nested")];

    let whole = MemorySource::new()
        .with("root", blocks.clone())
        .with("b", children.clone());
    let paged = MemorySource::new()
        .with_page_size(2)
        .with("root", blocks)
        .with("b", children);

    assert_eq!(render_root(&paged), render_root(&whole));
}
