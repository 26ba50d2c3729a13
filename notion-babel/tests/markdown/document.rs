//! Whole-document snapshots.

use crate::common::{node, render_root};
use insta::assert_snapshot;
use notion_babel::model::{BlockPayload, FileRef, Icon};
use notion_babel::{BlockKind, BlockNode, MemorySource, RichTextSpan};

fn payload_block(id: &str, kind: BlockKind, payload: BlockPayload) -> BlockNode {
    BlockNode::new(id, kind).with_payload(payload)
}

#[test]
fn meeting_notes() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![
                node("h", "heading_2", "Meeting notes"),
                BlockNode::new("intro", BlockKind::Paragraph).with_rich_text(vec![
                    RichTextSpan::styled("Owner: "),
                    RichTextSpan::styled("Sam").bold(),
                    RichTextSpan::styled(", see "),
                    RichTextSpan::styled("the brief")
                        .italic()
                        .link("https://example.com/brief"),
                ]),
                payload_block(
                    "note",
                    BlockKind::Callout,
                    BlockPayload {
                        icon: Some(Icon {
                            emoji: Some("📌".to_string()),
                        }),
                        ..Default::default()
                    },
                )
                .with_text("Decisions are final"),
                node("todo", "to_do", "Send recap").with_children(),
                node("toggle", "toggle", "Raw transcript").with_children(),
                payload_block(
                    "eq",
                    BlockKind::Equation,
                    BlockPayload {
                        expression: Some("a^2 + b^2 = c^2".to_string()),
                        ..Default::default()
                    },
                ),
                payload_block(
                    "db",
                    BlockKind::ChildDatabase,
                    BlockPayload {
                        title: Some("Action items".to_string()),
                        ..Default::default()
                    },
                ),
                payload_block(
                    "pdf",
                    BlockKind::Pdf,
                    BlockPayload {
                        file: Some(FileRef {
                            url: Some("https://files.example.com/a/slides.pdf?sig=1".to_string()),
                        }),
                        ..Default::default()
                    },
                ),
            ],
        )
        .with(
            "todo",
            vec![payload_block(
                "todo-child",
                BlockKind::ToDo,
                BlockPayload {
                    checked: true,
                    ..Default::default()
                },
            )
            .with_text("Draft")],
        )
        .with(
            "toggle",
            vec![
                node("t1", "paragraph", "Line one"),
                payload_block(
                    "t2",
                    BlockKind::Code,
                    BlockPayload {
                        language: Some("text".to_string()),
                        ..Default::default()
                    },
                )
                .with_text("**raw**\n  indented"),
            ],
        );

    assert_snapshot!(render_root(&source), @r"
## Meeting notes

Owner: **Sam**, see [*the brief*](https://example.com/brief)

> [!abstract]
> Decisions are final

- [ ] Send recap

    - [x] Draft

> [!info]- Raw transcript

> Line one
>
> ```text
> **raw**
>   indented
> ```

$$
a^2 + b^2 = c^2
$$

📊 [[Action items]]

[slides.pdf](https://files.example.com/a/slides.pdf?sig=1)
");
}

#[test]
fn columns_flatten_into_the_page() {
    let source = MemorySource::new()
        .with(
            "root",
            vec![
                node("title", "heading_1", "Dashboard"),
                BlockNode::new("cols", BlockKind::ColumnList).with_children(),
                node("footer", "paragraph", "Footer"),
            ],
        )
        .with(
            "cols",
            vec![
                BlockNode::new("c1", BlockKind::Column).with_children(),
                BlockNode::new("c2", BlockKind::Column).with_children(),
            ],
        )
        .with(
            "c1",
            vec![
                node("l1", "heading_3", "Left"),
                node("l2", "bulleted_list_item", "alpha"),
            ],
        )
        .with(
            "c2",
            vec![
                node("r1", "heading_3", "Right"),
                payload_block(
                    "r2",
                    BlockKind::Bookmark,
                    BlockPayload {
                        url: Some("https://example.com".to_string()),
                        ..Default::default()
                    },
                ),
            ],
        );

    assert_snapshot!(render_root(&source), @r"
# Dashboard

### Left

- alpha

### Right

[https://example.com](https://example.com)

Footer
");
}
