//! Markdown to plain-text conversion.
//!
//! Renders Markdown coming from the admin console (documents, FAQ answers,
//! inbox items) as text that reads well where Markdown is not rendered:
//! previews, notifications and screen-reader output.

pub mod code_block;
pub mod preview;
pub mod strip;

pub use code_block::{extract_code_blocks, unwrap_fences, CodeBlock};
pub use preview::{preview, Preview, PreviewOptions};
pub use strip::{strip_markdown, strip_markdown_opt, StripRule, RULES};
