//! Multi-index removal resolves all indices against one snapshot.

use hostedit::{Error, HostRecord, HostTable};

fn three() -> HostTable {
    let mut table = HostTable::new("unused");
    table.insert(HostRecord::new("10.0.0.0", "zero", ""));
    table.insert(HostRecord::new("10.0.0.1", "one", ""));
    table.insert(HostRecord::new("10.0.0.2", "two", ""));
    table
}

#[test]
fn remove_unordered_indices() {
    let mut table = three();
    let removed = table.remove(&[2, 0]).unwrap();

    assert_eq!(table.records(), &[HostRecord::new("10.0.0.1", "one", "")]);
    assert_eq!(removed[0].host_name, "zero");
    assert_eq!(removed[1].host_name, "two");
}

#[test]
fn duplicate_indices_collapse() {
    let mut table = three();
    let removed = table.remove(&[1, 1]).unwrap();
    assert_eq!(removed.len(), 1);
    assert_eq!(table.count(), 2);
}

#[test]
fn out_of_range_leaves_table_unchanged() {
    let mut table = three();
    let before = table.records().to_vec();

    let err = table.remove(&[0, 3]).unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 3, len: 3 }));
    assert!(!err.is_io());
    assert_eq!(table.records(), before.as_slice());
}

#[test]
fn empty_index_list_is_a_no_op() {
    let mut table = three();
    assert!(table.remove(&[]).unwrap().is_empty());
    assert_eq!(table.count(), 3);
}
