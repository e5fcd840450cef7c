use std::fs;
use std::path::PathBuf;

use logh::{Finalized, LogError, LogHandle};
use tempfile::TempDir;

const LOG_FILE: &str = "log.txt";

fn work_area() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join(LOG_FILE);
    (temp_dir, path)
}

#[test]
fn test_open_and_count() {
    let (_work_area, path) = work_area();

    let handle = LogHandle::open(&path, 0).unwrap();
    handle.close().unwrap();

    let mut handle = LogHandle::open(&path, 1).unwrap();
    handle.add_message(1, "Message");
    assert_eq!(handle.msg_count(), 1);
    handle.close().unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "Message\n");
}

#[test]
fn test_disabled_handle_never_creates_file() {
    let (_work_area, path) = work_area();

    let mut handle = LogHandle::open(&path, 0).unwrap();
    for level in 1..=10 {
        handle.add_message(level, "ignored");
        assert!(!path.exists());
    }
    assert_eq!(handle.msg_count(), 0);
    handle.close().unwrap();

    assert!(!path.exists());
}

#[test]
fn test_delete_empty() {
    let (_work_area, path) = work_area();

    for _ in 0..2 {
        let handle = LogHandle::open(&path, 0).unwrap();
        handle.close().unwrap();
        assert!(!path.exists());
    }

    let handle = LogHandle::open(&path, 5).unwrap();
    handle.close().unwrap();
    assert!(!path.exists());
}

#[test]
fn test_reopen_keeps_previous_content() {
    let (_work_area, path) = work_area();

    let mut handle = LogHandle::open(&path, 1).unwrap();
    handle.add_message(1, "Message");
    handle.close().unwrap();
    assert!(path.exists());

    let handle = LogHandle::open(&path, 1).unwrap();
    assert_eq!(handle.msg_count(), 0);
    assert_eq!(handle.close().unwrap(), Finalized::Kept);

    assert_eq!(fs::read_to_string(&path).unwrap(), "Message\n");
}

#[test]
fn test_reopen_appends_with_fresh_counter() {
    let (_work_area, path) = work_area();

    let mut handle = LogHandle::open(&path, 2).unwrap();
    handle.add_message(1, "first");
    handle.add_message(2, "second");
    assert_eq!(handle.msg_count(), 2);
    handle.close().unwrap();

    let mut handle = LogHandle::open(&path, 2).unwrap();
    handle.add_message(2, "third");
    assert_eq!(handle.msg_count(), 1);
    handle.close().unwrap();

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "first\nsecond\nthird\n"
    );
}

#[test]
fn test_file_deleted_before_close() {
    let (_work_area, path) = work_area();

    let mut handle = LogHandle::open(&path, 1).unwrap();
    handle.add_message(1, "Message");
    assert!(path.exists());

    fs::remove_file(&path).unwrap();
    assert!(!path.exists());

    assert_eq!(handle.close().unwrap(), Finalized::Missing);
    assert!(!path.exists());
}

#[test]
fn test_invalid_input() {
    let err = LogHandle::open("", 1).unwrap_err();
    assert!(matches!(err, LogError::InvalidArgument(_)));
}

#[test]
fn test_missing_directory_fails_open() {
    let (work_area, _) = work_area();
    let path = work_area.path().join("missing").join(LOG_FILE);

    let err = LogHandle::open(&path, 1).unwrap_err();
    assert!(matches!(err, LogError::Io { .. }));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_read_only_directory_fails_open() {
    use std::os::unix::fs::PermissionsExt;

    let (work_area, _) = work_area();
    let read_only = work_area.path().join("read_only");
    fs::create_dir(&read_only).unwrap();
    fs::set_permissions(&read_only, fs::Permissions::from_mode(0o500)).unwrap();

    // Privileged users can write regardless of the mode bits
    let canary = read_only.join("canary");
    if fs::File::create(&canary).is_ok() {
        fs::remove_file(&canary).unwrap();
        fs::set_permissions(&read_only, fs::Permissions::from_mode(0o700)).unwrap();
        return;
    }

    let path = read_only.join(LOG_FILE);
    let result = LogHandle::open(&path, 1);

    assert!(matches!(result, Err(LogError::Io { .. })));
    assert!(!path.exists());

    fs::set_permissions(&read_only, fs::Permissions::from_mode(0o700)).unwrap();
}
