//! Styled inline text runs.

use super::lenient;
use serde::Deserialize;

/// One contiguous run of styled text.
///
/// The API spells the literal content `plain_text`. Every field is optional on the wire, and a
/// malformed field only loses itself.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RichTextSpan {
    #[serde(rename = "plain_text", default, deserialize_with = "lenient")]
    pub text: String,
    #[serde(default, deserialize_with = "lenient")]
    pub annotations: Option<Annotations>,
    #[serde(default, deserialize_with = "lenient")]
    pub href: Option<String>,
}

/// Independent style flags of a span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Annotations {
    #[serde(deserialize_with = "lenient")]
    pub bold: bool,
    #[serde(deserialize_with = "lenient")]
    pub italic: bool,
    #[serde(deserialize_with = "lenient")]
    pub strikethrough: bool,
    #[serde(deserialize_with = "lenient")]
    pub underline: bool,
    #[serde(deserialize_with = "lenient")]
    pub code: bool,
    #[serde(deserialize_with = "lenient")]
    pub color: Option<String>,
}

impl Annotations {
    /// Background colors (`yellow_background`, ...) render as highlights.
    pub fn is_highlight(&self) -> bool {
        self.color
            .as_deref()
            .is_some_and(|color| color.contains("background"))
    }
}

impl RichTextSpan {
    /// A span without any annotation record.
    pub fn plain(text: impl Into<String>) -> Self {
        RichTextSpan {
            text: text.into(),
            annotations: None,
            href: None,
        }
    }

    /// A span with an annotation record where every flag is off.
    pub fn styled(text: impl Into<String>) -> Self {
        RichTextSpan {
            text: text.into(),
            annotations: Some(Annotations::default()),
            href: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.annotations_mut().bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.annotations_mut().italic = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.annotations_mut().strikethrough = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.annotations_mut().underline = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.annotations_mut().code = true;
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.annotations_mut().color = Some(color.into());
        self
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    fn annotations_mut(&mut self) -> &mut Annotations {
        self.annotations.get_or_insert_with(Annotations::default)
    }
}
