//! Line-wise prefixing.
//!
//! Lines are split on `\n` only, so empty lines (including a trailing one) are kept and
//! prefixed like any other line.

/// Prefix every line of `text` with `depth` copies of `indent`.
pub fn indent_lines(text: &str, depth: usize, indent: &str) -> String {
    if depth == 0 {
        return text.to_string();
    }
    let prefix = indent.repeat(depth);
    text.split('\n')
        .map(|line| format!("{prefix}{line}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote every line of rendered Markdown. Empty lines become a bare `>`.
pub fn quote_lines(text: &str) -> String {
    text.split('\n')
        .map(|line| {
            if line.is_empty() {
                ">".to_string()
            } else {
                format!("> {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
