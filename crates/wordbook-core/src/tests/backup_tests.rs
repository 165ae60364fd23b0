use wordbook_types::{Dictionary, EXPORT_FILENAME, Entry};

use super::{CountingLookup, fetched_entry, fresh_core};
use crate::CoreError;

#[test]
fn export_writes_full_mapping() {
    let dir = tempfile::tempdir().unwrap();
    let (mut core, _) = fresh_core(CountingLookup::new(fetched_entry()));
    core.add("kettle", "a pot").unwrap();

    let path = core.export_to(dir.path()).unwrap();

    assert_eq!(path, dir.path().join(EXPORT_FILENAME));
    let exported: Dictionary =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(&exported, core.dictionary());
}

#[test]
fn import_merges_with_import_winning() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("backup.json");
    std::fs::write(
        &path,
        r#"{"apple": {"definition": "X", "phonetics": "", "category": "Test"},
            "quince": {"definition": "a hard fruit"}}"#,
    )
    .unwrap();
    let (mut core, _) = fresh_core(CountingLookup::new(fetched_entry()));

    let count = core.import_from(&path).unwrap();

    assert_eq!(count, 2);
    assert_eq!(core.get("apple"), Some(&Entry::new("X", "", "Test")));
    assert_eq!(core.get("quince"), Some(&Entry::new("a hard fruit", "", "Daily Use")));
    assert!(core.get("cat").is_some());
}

#[test]
fn malformed_import_changes_nothing() {
    let (mut core, _) = fresh_core(CountingLookup::new(fetched_entry()));
    let before = core.dictionary().clone();

    let result = core.import_json(r#"{"apple": "just a string"}"#);

    assert!(matches!(result, Err(CoreError::Serialization(_))));
    assert_eq!(core.dictionary(), &before);
}

#[test]
fn export_then_import_into_fresh_core() {
    let (mut source, _) = fresh_core(CountingLookup::new(fetched_entry()));
    source.add("kettle", "a pot").unwrap();
    let json = source.export_json().unwrap();

    let (mut target, _) = fresh_core(CountingLookup::new(fetched_entry()));
    target.import_json(&json).unwrap();

    assert_eq!(target.dictionary(), source.dictionary());
}

#[test]
fn missing_import_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let (mut core, _) = fresh_core(CountingLookup::new(fetched_entry()));

    let result = core.import_from(&dir.path().join("absent.json"));

    assert!(matches!(result, Err(CoreError::Io(_))));
}
