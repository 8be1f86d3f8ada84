//! record_at / update / count bounds checks.

use hostedit::{Error, HostRecord, HostTable};

#[test]
fn new_table_is_empty() {
    let table = HostTable::new("/nonexistent/hosts");
    assert!(table.is_empty());
    assert_eq!(table.count(), 0);
    assert!(matches!(
        table.record_at(0),
        Err(Error::IndexOutOfRange { index: 0, len: 0 })
    ));
}

#[test]
fn insert_appends_duplicates_allowed() {
    let mut table = HostTable::new("unused");
    let r = HostRecord::new("10.0.0.1", "a", "");
    table.insert(r.clone());
    table.insert(r.clone());
    assert_eq!(table.count(), 2);
    assert_eq!(table.record_at(1).unwrap(), &r);
}

#[test]
fn update_replaces_and_returns_old() {
    let mut table = HostTable::new("unused");
    table.insert(HostRecord::new("10.0.0.1", "a", ""));

    let old = table
        .update(0, HostRecord::new("10.0.0.2", "b", "moved"))
        .unwrap();
    assert_eq!(old.host_name, "a");
    assert_eq!(table.record_at(0).unwrap().comment, "moved");
}

#[test]
fn update_out_of_range_fails() {
    let mut table = HostTable::new("unused");
    table.insert(HostRecord::new("10.0.0.1", "a", ""));
    let err = table
        .update(1, HostRecord::new("10.0.0.2", "b", ""))
        .unwrap_err();
    assert!(matches!(err, Error::IndexOutOfRange { index: 1, len: 1 }));
    assert_eq!(table.record_at(0).unwrap().host_name, "a");
}
