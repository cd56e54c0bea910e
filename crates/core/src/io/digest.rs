use std::borrow::Borrow;

use crate::types::NotificationRecord;

/// Returned when there is nothing to report.
pub const EMPTY_DIGEST: &str = "No critical notifications";
/// Bodies longer than this many characters are cut.
pub const MAX_BODY_CHARS: usize = 100;
const ELLIPSIS: &str = "...";

/// Render records, in the given order, as `"<app_name>: <body>"` lines.
/// Line breaks inside a record become spaces so each record stays on one line.
/// Accepts owned records or references.
pub fn render<R: Borrow<NotificationRecord>>(records: &[R]) -> String {
    if records.is_empty() {
        return EMPTY_DIGEST.to_owned();
    }
    records
        .iter()
        .map(|r| {
            let r = r.borrow();
            format!("{}: {}", one_line(&r.app_name), truncate(&one_line(body(r))))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Body text, falling back to the title, then to an empty string.
fn body(record: &NotificationRecord) -> &str {
    [record.text.as_deref(), record.title.as_deref()]
        .into_iter()
        .flatten()
        .find(|s| !s.is_empty())
        .unwrap_or("")
}

/// Maps each `\r` and `\n` to a space. Character count is unchanged.
fn one_line(s: &str) -> String {
    s.replace(['\r', '\n'], " ")
}

fn truncate(s: &str) -> String {
    match s.char_indices().nth(MAX_BODY_CHARS) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &s[..cut]),
        None => s.to_owned(),
    }
}
