use crate::SessionFileInfo;

use tempfile::TempDir;

#[test]
fn given_write_when_read_back_then_slots_match() {
    let temp = TempDir::new().unwrap();

    SessionFileInfo::write_in(temp.path(), "header.payload.sig", Some(2_000_000_000)).unwrap();
    let info = SessionFileInfo::read_in(temp.path()).unwrap().unwrap();

    assert_eq!(info.credential, "header.payload.sig");
    assert_eq!(info.expiry, Some(2_000_000_000));
    assert!(!info.saved_at.is_empty());
}

#[test]
fn given_missing_file_when_read_then_none() {
    let temp = TempDir::new().unwrap();

    assert!(SessionFileInfo::read_in(temp.path()).unwrap().is_none());
}

#[test]
fn given_remove_when_file_exists_then_gone() {
    let temp = TempDir::new().unwrap();
    SessionFileInfo::write_in(temp.path(), "header.payload.sig", None).unwrap();

    SessionFileInfo::remove_in(temp.path()).unwrap();

    assert!(SessionFileInfo::read_in(temp.path()).unwrap().is_none());
}

#[test]
fn given_remove_when_file_missing_then_noop() {
    let temp = TempDir::new().unwrap();

    assert!(SessionFileInfo::remove_in(temp.path()).is_ok());
}

#[test]
fn given_corrupt_file_when_read_then_error() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("session.json"), "{ not json").unwrap();

    assert!(SessionFileInfo::read_in(temp.path()).is_err());
}

#[test]
fn given_nested_config_dir_when_write_then_parent_created() {
    let temp = TempDir::new().unwrap();
    let nested = temp.path().join("deep").join(".fixtrack");

    let path = SessionFileInfo::write_in(&nested, "header.payload.sig", None).unwrap();

    assert!(path.exists());
}
