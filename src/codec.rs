//! Hosts file text <-> records.
//!
//! # Format
//!
//! ```text
//! <address> <host> [alias...] [#comment]
//! ```
//!
//! Parsing is lossy: blank lines, comment-only lines and lines with fewer
//! than two tokens before the `#` are dropped, and alias names after the
//! first host are discarded. Serializing always writes
//! `address host ` followed by `#comment` when the comment is non-empty.

use crate::record::HostRecord;

/// Parse a whole hosts file, dropping lines that carry no mapping.
pub fn parse(text: &str) -> Vec<HostRecord> {
    text.lines().filter_map(parse_line).collect()
}

/// Parse one line (without its terminator).
///
/// The comment is everything after the first `#`, kept verbatim including
/// surrounding whitespace.
pub fn parse_line(line: &str) -> Option<HostRecord> {
    let (data, comment) = match line.find('#') {
        Some(pos) => (&line[..pos], &line[pos + 1..]),
        None => (line, ""),
    };

    let mut tokens = data.split_whitespace();
    let address = tokens.next()?;
    let host_name = tokens.next()?;

    Some(HostRecord::new(address, host_name, comment))
}

/// Render records in order, one newline-terminated line each.
pub fn serialize(records: &[HostRecord]) -> String {
    let mut out = String::new();
    for record in records {
        serialize_record(record, &mut out);
    }
    out
}

/// Append a single record line to `out`.
pub fn serialize_record(record: &HostRecord, out: &mut String) {
    out.push_str(&record.address);
    out.push(' ');
    out.push_str(&record.host_name);
    out.push(' ');
    if !record.comment.is_empty() {
        out.push('#');
        out.push_str(&record.comment);
    }
    out.push('\n');
}
