use serde::{Deserialize, Serialize};

/// Knobs of the Markdown writer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRules {
    /// String repeated once per nesting level in front of nested list content
    pub indent_string: String,

    /// Label for images with neither caption nor usable file name
    pub image_placeholder: String,

    /// Label for files, embeds and videos with neither name nor usable file name
    pub file_placeholder: String,
}

impl Default for RenderRules {
    fn default() -> Self {
        Self {
            indent_string: "    ".to_string(),
            image_placeholder: "image".to_string(),
            file_placeholder: "file".to_string(),
        }
    }
}
