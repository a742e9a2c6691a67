use std::fs;
use tempfile::tempdir;

use super::*;

#[test]
fn key_is_last_name_then_first_name() {
    let identity = StudentIdentity::new("  Jane ", " Doe").unwrap();
    assert_eq!(identity.key(), "Doe_Jane");
}

#[test]
fn key_keeps_case() {
    let identity = StudentIdentity::new("jane", "DOE").unwrap();
    assert_eq!(identity.key(), "DOE_jane");
}

#[test]
fn rejects_blank_names() {
    assert_eq!(
        StudentIdentity::new("   ", "Doe"),
        Err(ValidationError::EmptyName)
    );
    assert_eq!(
        StudentIdentity::new("Jane", ""),
        Err(ValidationError::EmptyName)
    );
}

#[test]
fn rejects_path_characters() {
    assert_eq!(
        StudentIdentity::new("Jane", "../Doe"),
        Err(ValidationError::InvalidNameCharacter('/'))
    );
}

#[test]
fn register_twice_reports_existing_account() {
    let dir = tempdir().unwrap();
    let accounts = Accounts::new(dir.path());
    let identity = StudentIdentity::new("Jane", "Doe").unwrap();

    assert_eq!(accounts.register(&identity).unwrap(), RegisterOutcome::Created);
    assert_eq!(
        accounts.register(&identity).unwrap(),
        RegisterOutcome::AlreadyExists
    );

    let marker = dir.path().join("Doe_Jane.txt");
    assert_eq!(fs::metadata(&marker).unwrap().len(), 0);
}

#[test]
fn register_does_not_truncate_existing_marker() {
    let dir = tempdir().unwrap();
    let accounts = Accounts::new(dir.path());
    let identity = StudentIdentity::new("Jane", "Doe").unwrap();
    fs::write(dir.path().join("Doe_Jane.txt"), "keep").unwrap();

    assert_eq!(
        accounts.register(&identity).unwrap(),
        RegisterOutcome::AlreadyExists
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("Doe_Jane.txt")).unwrap(),
        "keep"
    );
}

#[test]
fn login_requires_registration() {
    let dir = tempdir().unwrap();
    let accounts = Accounts::new(dir.path());
    let identity = StudentIdentity::new("Jane", "Doe").unwrap();

    assert_eq!(accounts.login(&identity), LoginOutcome::NotFound);
    assert!(!accounts.marker_path(&identity).exists());

    accounts.register(&identity).unwrap();
    assert_eq!(accounts.login(&identity), LoginOutcome::Success);
}

#[test]
fn rejects_key_separator_in_names() {
    assert_eq!(
        StudentIdentity::new("Jane_X", "Doe"),
        Err(ValidationError::InvalidNameCharacter('_'))
    );
    assert_eq!(
        StudentIdentity::new("Jane", "Doe_Jane"),
        Err(ValidationError::InvalidNameCharacter('_'))
    );
}

#[test]
fn guest_is_reserved_as_last_name() {
    assert_eq!(
        StudentIdentity::new("Bob", "guest"),
        Err(ValidationError::ReservedName("guest".to_owned()))
    );
    assert_eq!(
        StudentIdentity::new("Bob", " Guest "),
        Err(ValidationError::ReservedName("Guest".to_owned()))
    );
    assert!(StudentIdentity::new("guest", "Smith").is_ok());
}
