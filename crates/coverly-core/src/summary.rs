//! Product summary parsing.
//!
//! Recommendation summaries arrive as a newline-delimited blob of
//! `key：value` lines. Real backend data uses full-width colons; the
//! half-width form is accepted too since nothing guarantees the corpus
//! stays consistent.

use coverly_types::consultation::SummaryField;

/// Split a raw summary blob into ordered key/value fields.
///
/// Each line is split at its first half-width (`:`) or full-width
/// (`：`) colon. Both sides are trimmed. Lines without a colon, or with
/// an empty key or value after trimming, are dropped rather than
/// reported -- summaries are display data and a bad line should never
/// take the whole card down. Field order follows line order.
pub fn parse_summary(summary: &str) -> Vec<SummaryField> {
    summary.lines().filter_map(parse_line).collect()
}

/// Value of the first field whose key matches exactly.
pub fn field_value<'a>(fields: &'a [SummaryField], key: &str) -> Option<&'a str> {
    fields
        .iter()
        .find(|field| field.key == key)
        .map(|field| field.value.as_str())
}

fn parse_line(line: &str) -> Option<SummaryField> {
    let (index, colon) = line
        .char_indices()
        .find(|&(_, c)| c == ':' || c == '：')?;

    let key = line[..index].trim();
    let value = line[index + colon.len_utf8()..].trim();
    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some(SummaryField {
        key: key.to_string(),
        value: value.to_string(),
    })
}
