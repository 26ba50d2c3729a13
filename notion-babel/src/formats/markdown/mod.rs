//! Obsidian-flavored Markdown writer
//!
//! One-way export of Notion block trees. There is no parser: the output is meant to be read by
//! a vault, not converted back.
//!
//! # Element Mapping Table
//!
//! | Notion block        | Markdown                                  | Notes                                     |
//! |---------------------|-------------------------------------------|-------------------------------------------|
//! | paragraph           | inline text                               |                                           |
//! | heading_1/2/3       | `#` / `##` / `###`                        |                                           |
//! | bulleted_list_item  | `- text`                                  | children one indent level deeper          |
//! | numbered_list_item  | `1. text`                                 | every item is `1.`, renderers renumber    |
//! | to_do               | `- [x] text` / `- [ ] text`               |                                           |
//! | toggle              | `> [!info]- text`                         | folded callout, children quoted           |
//! | quote               | `> line` per line                         | children quoted                           |
//! | callout             | `> [!type]` + `> text`                    | type from the icon, see `formats::icons`  |
//! | code                | fenced block with language                | body is the literal text                  |
//! | divider             | `---`                                     |                                           |
//! | image               | `![caption](url)`                         | caption falls back to the file name       |
//! | bookmark            | `[caption](url)`                          | caption falls back to the url             |
//! | link_preview        | `[url](url)`                              |                                           |
//! | equation            | `$$` display math                         |                                           |
//! | child_page/database | `📄 [[title]]` / `📊 [[title]]`           | wikilinks to sibling notes                |
//! | embed/video/file/pdf| `[name](url)`                             | name falls back to the file name          |
//! | table_of_contents   | nothing                                   | vaults generate their own outline         |
//! | column_list/column  | nothing                                   | children flattened in place               |
//! | synced_block        | nothing                                   | children flattened in place               |
//! | anything else       | nothing                                   | reported as a diagnostic                  |
//!
//! # Inline Styles
//!
//! | Annotation          | Markdown            |
//! |---------------------|---------------------|
//! | code                | `` `x` ``           |
//! | bold                | `**x**`             |
//! | italic              | `*x*`               |
//! | strikethrough       | `~~x~~`             |
//! | underline           | `<u>x</u>`          |
//! | background color    | `==x==`             |
//! | href                | `[x](href)`         |
//!
//! # Layout
//!
//! Blocks are separated by one blank line, list items included, so lists come out loose.

pub mod inline;
pub mod leaf;
pub mod rules;
pub mod serializer;

pub use inline::render_rich_text;
pub use leaf::format_block;
pub use rules::RenderRules;
pub use serializer::MarkdownRenderer;
