//! Fenced Code Block Utility
//!
//! Unwraps triple-backtick fences and lists the blocks they enclose.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Opening fence, optional info line (only when a newline ends it), body, closing fence.
pub(crate) const FENCE_PATTERN: &str = r"(?s)```(?:([^`\n]*)\n)?(.*?)```";

static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(FENCE_PATTERN).unwrap());

/// A fenced block as written in the source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub content: String,
}

/// Removes fence delimiters, keeping the enclosed text verbatim.
pub fn unwrap_fences(text: &str) -> Cow<'_, str> {
    FENCE_RE.replace_all(text, "${2}")
}

/// Extracts every complete fenced block in document order.
///
/// An unterminated fence is not a block. The newline right before the
/// closing fence belongs to the fence, not to the content.
pub fn extract_code_blocks(text: &str) -> Vec<CodeBlock> {
    FENCE_RE
        .captures_iter(text)
        .map(|caps| {
            let language = caps
                .get(1)
                .map(|m| m.as_str().trim())
                .filter(|lang| !lang.is_empty())
                .map(str::to_string);
            let body = caps.get(2).map_or("", |m| m.as_str());
            CodeBlock {
                language,
                content: body.strip_suffix('\n').unwrap_or(body).to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwraps_bare_fence() {
        assert_eq!(unwrap_fences("```\ncode block\n```"), "code block\n");
    }

    #[test]
    fn drops_language_tag() {
        assert_eq!(
            unwrap_fences("```rust\nfn main() {}\n```"),
            "fn main() {}\n"
        );
    }

    #[test]
    fn drops_whole_info_line() {
        assert_eq!(unwrap_fences("```rust,ignore\nlet x = 1;\n```"), "let x = 1;\n");
        assert_eq!(unwrap_fences("```rust \ncode\n```"), "code\n");
        assert_eq!(unwrap_fences("``` {.python}\nprint(1)\n```"), "print(1)\n");
    }

    #[test]
    fn info_line_is_reported_trimmed() {
        let blocks = extract_code_blocks("```rust,ignore\nlet x = 1;\n```\n```rust \ncode\n```\n```  \nbare\n```");
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].language.as_deref(), Some("rust,ignore"));
        assert_eq!(blocks[0].content, "let x = 1;");
        assert_eq!(blocks[1].language.as_deref(), Some("rust"));
        assert_eq!(blocks[1].content, "code");
        assert_eq!(blocks[2].language, None);
        assert_eq!(blocks[2].content, "bare");
    }

    #[test]
    fn keeps_single_line_fence_text() {
        assert_eq!(unwrap_fences("```inline```"), "inline");
    }

    #[test]
    fn leaves_unterminated_fence() {
        let src = "```sh\necho hi";
        assert_eq!(unwrap_fences(src), src);
        assert!(extract_code_blocks(src).is_empty());
    }

    #[test]
    fn extracts_blocks_in_order() {
        let src = "intro\n```python\nprint(1)\n```\nmiddle\n```\nplain\nlines\n```";
        let blocks = extract_code_blocks(src);
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].language.as_deref(), Some("python"));
        assert_eq!(blocks[0].content, "print(1)");
        assert_eq!(blocks[1].language, None);
        assert_eq!(blocks[1].content, "plain\nlines");
    }
}
