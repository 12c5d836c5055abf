//! Markdown Stripper
//!
//! Turns Markdown into readable plain text with an ordered list of regex
//! substitutions. Each rule runs over the output of the previous one, so the
//! order of [`RULES`] is part of the contract: fences before inline code,
//! images before links, bold before italic, line markers before whitespace
//! cleanup.
//!
//! This is not a Markdown parser. Markers that do not form a complete pair are
//! left in place, and deeply nested or overlapping emphasis may survive a
//! single pass. Raw HTML passes through untouched.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use crate::code_block::FENCE_PATTERN;

/// One substitution step of the stripper.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StripRule {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
}

const fn rule(name: &'static str, pattern: &'static str, replacement: &'static str) -> StripRule {
    StripRule {
        name,
        pattern,
        replacement,
    }
}

/// The substitution steps, in application order.
///
/// Emphasis openers must be followed by a non-space, non-marker character, and
/// underscore emphasis only matches on word boundaries. That keeps bullets,
/// arithmetic, thematic breaks and `snake_case` identifiers intact.
pub const RULES: &[StripRule] = &[
    rule("line-endings", r"\r\n?", "\n"),
    rule("fenced-code", FENCE_PATTERN, "${2}"),
    rule("inline-code", r"`([^`]+)`", "${1}"),
    rule("image", r"!\[([^\]]*)\]\(([^)]+)\)", "${1} (${2})"),
    rule("link", r"\[([^\]]+)\]\(([^)]+)\)", "${1} (${2})"),
    rule("bold-asterisk", r"\*\*([^\s*].*?)\*\*", "${1}"),
    rule("bold-underscore", r"\b__([^\s_].*?)__\b", "${1}"),
    rule("italic-asterisk", r"\*([^\s*].*?)\*", "${1}"),
    rule("italic-underscore", r"\b_([^\s_].*?)_\b", "${1}"),
    rule("strikethrough", r"~~(.+?)~~", "${1}"),
    rule("heading", r"(?m)^ {0,3}#{1,6}[ \t]+", ""),
    rule("blockquote", r"(?m)^ {0,3}> ?", ""),
    // Ahead of the list rules so `- - -` is not read as a bullet.
    rule(
        "horizontal-rule",
        r"(?m)^ {0,3}(?:-(?: ?-){2,}|\*(?: ?\*){2,}|_(?: ?_){2,})[ \t]*$",
        "",
    ),
    rule("unordered-list", r"(?m)^ {0,3}[-*+][ \t]+", ""),
    rule("ordered-list", r"(?m)^ {0,3}\d+\.[ \t]+", ""),
    rule("trailing-whitespace", r"[ \t]+\n", "\n"),
    rule("blank-lines", r"\n{3,}", "\n\n"),
];

static COMPILED: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    RULES
        .iter()
        .map(|rule| Regex::new(rule.pattern).unwrap())
        .collect()
});

/// Converts Markdown to plain text.
///
/// Total and deterministic: never panics, never fails, and holds no state
/// between calls. The result is trimmed and never contains more than one
/// blank line in a row.
pub fn strip_markdown(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let mut out = text.to_string();
    for (rule, re) in RULES.iter().zip(COMPILED.iter()) {
        out = re.replace_all(&out, rule.replacement).into_owned();
    }
    out.trim().to_string()
}

/// [`strip_markdown`] for values that may be absent. `None` yields `""`.
pub fn strip_markdown_opt(text: Option<&str>) -> String {
    text.map(strip_markdown).unwrap_or_default()
}
