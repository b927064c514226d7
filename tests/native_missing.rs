use dialog_bridge::{DialogError, NativeProvider};
use tempfile::tempdir;

#[test]
fn missing_library_is_provider_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("NoSuchDialog.dll");

    let err = NativeProvider::load_from(&path).unwrap_err();
    assert!(matches!(err, DialogError::ProviderUnavailable(_)));
}

#[test]
fn unloadable_file_is_provider_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("NotADialog.dll");
    std::fs::write(&path, b"not a loadable library").unwrap();

    let err = NativeProvider::load_from(&path).unwrap_err();
    assert!(matches!(err, DialogError::ProviderUnavailable(_)));
}
