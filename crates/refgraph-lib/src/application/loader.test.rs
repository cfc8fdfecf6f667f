use super::*;

#[test]
fn test_missing_env_files_are_skipped() {
    // The crate directory has no .env files
    assert!(load_env_files().is_ok());
}

#[test]
fn test_not_found_is_distinguished() {
    let err = dotenvy::from_filename("definitely-missing.env").unwrap_err();
    assert!(err.not_found());
}
