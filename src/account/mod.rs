use log::info;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::{Result, ValidationError};
use crate::quiz::question::find_forbidden_file_name_character;

#[cfg(test)]
mod tests;

/// Owner key for quizzes made without an account.
pub const GUEST_KEY: &str = "guest";

/// Separates the parts of a student key and a quiz file name.
const KEY_SEPARATOR: char = '_';

/// A student account, keyed as `lastName_firstName`.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct StudentIdentity {
    first_name: String,
    last_name: String,
}

impl StudentIdentity {
    pub fn new(first_name: &str, last_name: &str) -> std::result::Result<Self, ValidationError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(ValidationError::EmptyName);
        }
        for name in &[first_name, last_name] {
            if let Some(c) = find_forbidden_file_name_character(name) {
                return Err(ValidationError::InvalidNameCharacter(c));
            }
            if name.contains(KEY_SEPARATOR) {
                return Err(ValidationError::InvalidNameCharacter(KEY_SEPARATOR));
            }
        }
        // A student key must never start with the guest prefix.
        if last_name.eq_ignore_ascii_case(GUEST_KEY) {
            return Err(ValidationError::ReservedName(last_name.to_owned()));
        }
        Ok(StudentIdentity {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        })
    }

    pub fn key(&self) -> String {
        format!("{}{}{}", self.last_name, KEY_SEPARATOR, self.first_name)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RegisterOutcome {
    Created,
    AlreadyExists,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoginOutcome {
    Success,
    NotFound,
}

/// Accounts are empty marker files named after the student key.
#[derive(Clone, Debug)]
pub struct Accounts {
    dir: PathBuf,
}

impl Accounts {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Accounts { dir: dir.into() }
    }

    pub fn marker_path(&self, identity: &StudentIdentity) -> PathBuf {
        self.dir.join(format!("{}.txt", identity.key()))
    }

    pub fn register(&self, identity: &StudentIdentity) -> Result<RegisterOutcome> {
        let path = self.marker_path(identity);
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => {
                info!("Registered account {}", identity.key());
                Ok(RegisterOutcome::Created)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(RegisterOutcome::AlreadyExists),
            Err(e) => Err(e.into()),
        }
    }

    pub fn login(&self, identity: &StudentIdentity) -> LoginOutcome {
        if self.marker_path(identity).is_file() {
            LoginOutcome::Success
        } else {
            LoginOutcome::NotFound
        }
    }
}
