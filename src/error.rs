use std::path::PathBuf;
use thiserror::Error;

/// Input the user can correct by answering the prompt again.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ValidationError {
    #[error("First and last name must not be empty")]
    EmptyName,

    #[error("Names cannot contain {0:?}")]
    InvalidNameCharacter(char),

    #[error("\"{0}\" is reserved and cannot be used as a last name")]
    ReservedName(String),

    #[error("Quiz title must contain at least one valid character")]
    EmptyTitle,

    #[error("Word must not be empty")]
    EmptyWord,

    #[error("Meaning must not be empty")]
    EmptyMeaning,

    #[error("The word \"{0}\" is already part of this quiz")]
    DuplicateWord(String),

    #[error("{0:?} is reserved and cannot be used")]
    ReservedCharacter(char),

    #[error("Enter a positive number")]
    NotAPositiveNumber,

    #[error("Enter a number no greater than {0}")]
    CountTooLarge(usize),
}

#[derive(Debug, Error)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Quiz file not found: {}", .0.display())]
    QuizNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quiz file format error: {0}")]
    Codec(#[from] csv::Error),

    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, QuizError>;
