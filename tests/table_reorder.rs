//! Stable sort by column in both directions.

use hostedit::{Column, HostRecord, HostTable};

fn table() -> HostTable {
    let mut table = HostTable::new("unused");
    table.insert(HostRecord::new("10.0.0.2", "b", "first"));
    table.insert(HostRecord::new("10.0.0.1", "a", ""));
    table.insert(HostRecord::new("10.0.0.2", "c", "second"));
    table.insert(HostRecord::new("10.0.0.10", "a", "z"));
    table
}

fn hosts(records: &[HostRecord]) -> Vec<&str> {
    records.iter().map(|r| r.host_name.as_str()).collect()
}

#[test]
fn ascending_by_address_is_lexicographic_and_stable() {
    let mut t = table();
    let sorted = t.reorder(Column::Address, true);
    assert_eq!(hosts(sorted), ["a", "a", "b", "c"]);
    assert_eq!(sorted[0].address, "10.0.0.1");
    assert_eq!(sorted[1].address, "10.0.0.10");
}

#[test]
fn descending_keeps_tie_order() {
    let mut t = table();
    let sorted = t.reorder(Column::Address, false);
    assert_eq!(sorted[0].comment, "first");
    assert_eq!(sorted[1].comment, "second");
    assert_eq!(sorted[3].address, "10.0.0.1");
}

#[test]
fn by_host_and_comment() {
    let mut t = table();
    assert_eq!(hosts(t.reorder(Column::Host, true)), ["a", "a", "b", "c"]);
    assert_eq!(t.records()[0].address, "10.0.0.1");

    let by_comment = t.reorder(Column::Comment, true);
    assert_eq!(by_comment[0].comment, "");
    assert_eq!(by_comment[3].comment, "z");
}

#[test]
fn reorder_does_not_change_records() {
    let mut t = table();
    let mut before = t.records().to_vec();
    t.reorder(Column::Host, false);
    let mut after = t.records().to_vec();
    before.sort_by(|a, b| a.host_name.cmp(&b.host_name).then(a.comment.cmp(&b.comment)));
    after.sort_by(|a, b| a.host_name.cmp(&b.host_name).then(a.comment.cmp(&b.comment)));
    assert_eq!(before, after);
}
