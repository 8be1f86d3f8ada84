//! A single hosts file mapping.

use serde::Serialize;

/// One `address host #comment` line.
///
/// None of the fields may contain a newline; `address` and `host_name` must
/// not contain whitespace or `#` either, or the record will not survive a
/// save/load cycle unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HostRecord {
    pub address: String,
    pub host_name: String,
    /// Text after the `#`, verbatim. Empty means no comment.
    pub comment: String,
}

impl HostRecord {
    pub fn new(
        address: impl Into<String>,
        host_name: impl Into<String>,
        comment: impl Into<String>,
    ) -> Self {
        Self {
            address: address.into(),
            host_name: host_name.into(),
            comment: comment.into(),
        }
    }

    /// Field selected by `column`.
    pub fn field(&self, column: Column) -> &str {
        match column {
            Column::Address => &self.address,
            Column::Host => &self.host_name,
            Column::Comment => &self.comment,
        }
    }
}

/// Column key used for sorting and display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Column {
    Address,
    Host,
    Comment,
}

impl Column {
    pub const ALL: [Column; 3] = [Column::Address, Column::Host, Column::Comment];
}
