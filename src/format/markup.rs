//! Inline display formatting for comment content.
//!
//! The comment composer supports three markers: `**bold**`, `*italic*`
//! and `` `code` ``. They are substituted at display time only — stored
//! content is never rewritten. Substitution order matters: bold runs
//! before italic so the doubled asterisks are consumed first.

use once_cell::sync::Lazy;
use regex::Regex;

static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern"));
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.*?)\*").expect("italic pattern"));
static CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`(.*?)`").expect("code pattern"));

/// Render the inline markers in `content` to HTML tags.
#[must_use]
pub fn render_inline(content: &str) -> String {
    let rendered = BOLD.replace_all(content, "<strong>$1</strong>");
    let rendered = ITALIC.replace_all(&rendered, "<em>$1</em>");
    CODE.replace_all(&rendered, "<code>$1</code>").into_owned()
}
