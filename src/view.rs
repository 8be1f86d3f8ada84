//! Filtering for display. Does not touch the table.

use crate::record::{Column, HostRecord};

/// Records whose address, host or comment contains `needle`, ignoring case,
/// paired with their position in `records`. An empty needle matches all.
pub fn filter<'a>(records: &'a [HostRecord], needle: &str) -> Vec<(usize, &'a HostRecord)> {
    let needle = needle.to_lowercase();
    records
        .iter()
        .enumerate()
        .filter(|(_, r)| {
            Column::ALL
                .iter()
                .any(|&c| r.field(c).to_lowercase().contains(&needle))
        })
        .collect()
}
