use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

pub const DELIMITER: char = '|';

lazy_static! {
    static ref FORBIDDEN_FILE_NAME_CHARACTERS_REGEX: Regex =
        Regex::new(r#"[<>:"/\\|?*\x00-\x1F]"#).unwrap();
}

/// Strips characters that cannot appear in a file name.
pub fn sanitize_title(title: &str) -> Result<String, ValidationError> {
    let title: String = FORBIDDEN_FILE_NAME_CHARACTERS_REGEX
        .replace_all(title, "")
        .into();
    let title = title.trim();
    if title.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(title.to_owned())
}

pub fn find_forbidden_file_name_character(text: &str) -> Option<char> {
    FORBIDDEN_FILE_NAME_CHARACTERS_REGEX
        .find(text)
        .and_then(|m| m.as_str().chars().next())
}

// Fields are stored unescaped, one question per line.
fn check_reserved(field: &str) -> Result<(), ValidationError> {
    match field.chars().find(|c| *c == DELIMITER || *c == '\n' || *c == '\r') {
        Some(c) => Err(ValidationError::ReservedCharacter(c)),
        None => Ok(()),
    }
}

pub fn validate_word(word: &str) -> Result<(), ValidationError> {
    if word.trim().is_empty() {
        return Err(ValidationError::EmptyWord);
    }
    check_reserved(word)
}

pub fn validate_meaning(meaning: &str) -> Result<(), ValidationError> {
    if meaning.trim().is_empty() {
        return Err(ValidationError::EmptyMeaning);
    }
    check_reserved(meaning)
}

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct Question {
    word: String,
    meaning: String,
}

impl Question {
    pub fn new<W: Into<String>, M: Into<String>>(
        word: W,
        meaning: M,
    ) -> Result<Self, ValidationError> {
        let question = Question {
            word: word.into(),
            meaning: meaning.into(),
        };
        question.validate()?;
        Ok(question)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_word(&self.word)?;
        validate_meaning(&self.meaning)
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn meaning(&self) -> &str {
        &self.meaning
    }
}
