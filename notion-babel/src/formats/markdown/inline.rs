//! Rich text → inline Markdown
//!
//! Each span is rendered on its own and the results are concatenated, so adjacent spans with the
//! same style produce adjacent marker pairs (`**a****b**`) rather than being merged.
//!
//! Markers are applied from the inside out in a fixed order, whatever subset of flags is set:
//!
//! ```text
//! code → bold → italic → strikethrough → underline → highlight → link
//! [==<u>~~***`text`***~~</u>==](href)
//! ```
//!
//! Highlights come from background colors. A span without an annotation record is emitted
//! verbatim and its link is dropped.

use crate::model::RichTextSpan;

/// Render a sequence of spans as one inline Markdown string.
pub fn render_rich_text(spans: &[RichTextSpan]) -> String {
    spans.iter().map(render_span).collect()
}

/// Render one span with its markers.
pub fn render_span(span: &RichTextSpan) -> String {
    let Some(annotations) = &span.annotations else {
        return span.text.clone();
    };

    let mut content = span.text.clone();
    if annotations.code {
        content = format!("`{content}`");
    }
    if annotations.bold {
        content = format!("**{content}**");
    }
    if annotations.italic {
        content = format!("*{content}*");
    }
    if annotations.strikethrough {
        content = format!("~~{content}~~");
    }
    if annotations.underline {
        content = format!("<u>{content}</u>");
    }
    if annotations.is_highlight() {
        content = format!("=={content}==");
    }
    if let Some(href) = &span.href {
        content = format!("[{content}]({href})");
    }
    content
}

/// Concatenated text of the spans with no markers at all.
pub fn plain_text(spans: &[RichTextSpan]) -> String {
    spans.iter().map(|span| span.text.as_str()).collect()
}
