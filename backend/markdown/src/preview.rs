//! Plain-text previews for notifications, list rows and other one-liners.

use serde::{Deserialize, Serialize};

use crate::strip::strip_markdown;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PreviewOptions {
    /// Maximum length in characters, ellipsis excluded.
    pub max_chars: usize,
    pub ellipsis: String,
    /// Fold newlines and whitespace runs into single spaces.
    pub single_line: bool,
}

impl Default for PreviewOptions {
    fn default() -> Self {
        Self {
            max_chars: 160,
            ellipsis: "…".to_string(),
            single_line: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Preview {
    pub text: String,
    pub truncated: bool,
}

/// Strips `text` and shortens it to at most `options.max_chars` characters.
///
/// Cuts fall back to the last whitespace inside the kept part so words are not
/// split, unless the kept part is a single word.
pub fn preview(text: &str, options: &PreviewOptions) -> Preview {
    let stripped = strip_markdown(text);
    let flat = if options.single_line {
        stripped.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        stripped
    };

    let cut = match flat.char_indices().nth(options.max_chars) {
        Some((idx, _)) => idx,
        None => {
            return Preview {
                text: flat,
                truncated: false,
            };
        }
    };

    let mut kept = &flat[..cut];
    if !flat[cut..].starts_with(char::is_whitespace) {
        if let Some(idx) = kept.rfind(char::is_whitespace) {
            kept = &kept[..idx];
        }
    }
    let kept = kept.trim_end();

    let text = if kept.is_empty() {
        String::new()
    } else {
        format!("{kept}{}", options.ellipsis)
    };
    Preview {
        text,
        truncated: true,
    }
}
