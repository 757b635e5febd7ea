use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_1: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static HEADING_2: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^## (.+)$").unwrap());
static BOLD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").unwrap());
static ITALIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*(.+?)\*").unwrap());
static RULE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^---+$").unwrap());
static LIST_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^- ").unwrap());
static BLANK_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{3,}").unwrap());

/// Strip Markdown syntax from a message body, leaving readable text.
///
/// The substitutions run in a fixed order. Headings are rewritten before
/// the inline bold/italic markers, and bold before italic, since their
/// markers overlap on the same line.
pub fn markdown_to_text(body: &str) -> String {
    let body = HEADING_1.replace_all(body, "$1");
    let body = HEADING_2.replace_all(&body, "${1}:");
    let body = BOLD.replace_all(&body, "$1");
    let body = ITALIC.replace_all(&body, "$1");
    let body = RULE.replace_all(&body, "---");
    let body = LIST_ITEM.replace_all(&body, "");
    let body = BLANK_RUN.replace_all(&body, "\n\n");
    body.trim().to_owned()
}
