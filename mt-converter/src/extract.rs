use once_cell::sync::Lazy;
use regex::Regex;

use mt_core::DocumentMeta;

/// The heading line introducing the message body.
const BODY_MARKER: &str = "## Email";

static TITLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^# (.+)$").unwrap());
static DATE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*Date:\*\* (.+)").unwrap());
static FROM: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*From:\*\* (.+)").unwrap());
static TO: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*To:\*\* (.+)").unwrap());
static SUBJECT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*\*Subject:\*\* (.+)").unwrap());
static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").unwrap());

/// Pull the metadata fields out of a raw archive document.
///
/// Extraction never fails; patterns that don't match simply leave their
/// field empty. The year is derived from the date header, so it can only
/// be present when a date was found.
pub fn extract_metadata(content: &str) -> DocumentMeta {
    let date = first_capture(&DATE, content);
    let year = date
        .as_deref()
        .and_then(|date| YEAR.find(date))
        .map(|m| m.as_str().to_owned());

    DocumentMeta {
        title: first_capture(&TITLE, content),
        year,
        from: first_capture(&FROM, content),
        to: first_capture(&TO, content),
        subject: first_capture(&SUBJECT, content),
        date,
    }
}

/// The message body is everything after the line carrying the body
/// marker. A document without the marker, or with nothing after it,
/// has an empty body.
pub fn extract_body(content: &str) -> String {
    let start = match content.find(BODY_MARKER) {
        Some(start) => start,
        None => return String::new(),
    };
    match content[start..].split_once('\n') {
        Some((_, rest)) => rest.trim().to_owned(),
        None => String::new(),
    }
}

fn first_capture(pattern: &Regex, content: &str) -> Option<String> {
    pattern
        .captures(content)
        .map(|capture| capture[1].trim().to_owned())
}
