use glob::{glob, Pattern};
use itertools::Itertools;
use log::{debug, info};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, ErrorKind};
use std::path::{Path, PathBuf};

use crate::error::{QuizError, Result, ValidationError};
use crate::quiz::codec;
use crate::quiz::question::{sanitize_title, Question};


const EXTENSION: &str = "txt";

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct QuizEntry {
    pub title: String,
    pub path: PathBuf,
}

/// Quiz files stored as `{owner}_{title}.txt` inside a single directory.
/// Every operation reads or rewrites whole files; nothing is cached.
#[derive(Clone, Debug)]
pub struct QuizRepository {
    dir: PathBuf,
}

impl QuizRepository {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        QuizRepository { dir: dir.into() }
    }

    pub fn quiz_path(&self, owner_key: &str, title: &str) -> Result<QuizEntry> {
        let title = sanitize_title(title)?;
        let path = self
            .dir
            .join(format!("{}_{}.{}", owner_key, title, EXTENSION));
        Ok(QuizEntry { title, path })
    }

    /// Writes the quiz, replacing any previous quiz with the same title.
    pub fn create(
        &self,
        owner_key: &str,
        title: &str,
        questions: &[Question],
    ) -> Result<QuizEntry> {
        let entry = self.quiz_path(owner_key, title)?;
        write_questions(&entry.path, questions)?;
        info!(
            "Saved quiz '{}' with {} questions to {}",
            entry.title,
            questions.len(),
            entry.path.display()
        );
        Ok(entry)
    }

    pub fn list(&self, owner_key: &str) -> Result<Vec<QuizEntry>> {
        let prefix = format!("{}_", owner_key);
        let pattern = Path::new(&Pattern::escape(&self.dir.to_string_lossy()))
            .join(format!("{}*.{}", Pattern::escape(&prefix), EXTENSION));

        let mut entries = Vec::new();
        for path in glob(&pattern.to_string_lossy())? {
            let path = path.map_err(|e| e.into_error())?;
            if !path.is_file() {
                continue;
            }
            let title = path
                .file_stem()
                .map(|stem| stem.to_string_lossy())
                .and_then(|stem| stem.strip_prefix(&prefix).map(str::to_owned));
            match title {
                Some(title) if !title.is_empty() => entries.push(QuizEntry { title, path }),
                _ => debug!("Ignoring unexpected quiz file {}", path.display()),
            }
        }

        Ok(entries
            .into_iter()
            .sorted_by(|a, b| a.title.cmp(&b.title))
            .collect())
    }

    /// Returns an empty list when the file holds no valid question lines.
    pub fn load(&self, path: &Path) -> Result<Vec<Question>> {
        let file = File::open(path).map_err(|e| not_found_or_io(e, path))?;
        codec::decode(BufReader::new(file))
    }

    pub fn delete(&self, path: &Path) -> Result<()> {
        fs::remove_file(path).map_err(|e| not_found_or_io(e, path))?;
        info!("Deleted quiz {}", path.display());
        Ok(())
    }

    /// Appends questions to an existing quiz. Nothing is written if any new
    /// word is already in the quiz or repeated among the new questions.
    pub fn add_questions(&self, path: &Path, new_questions: &[Question]) -> Result<usize> {
        let mut questions = self.load(path)?;

        {
            let mut words: HashSet<&str> = questions.iter().map(|q| q.word()).collect();
            for question in new_questions {
                if !words.insert(question.word()) {
                    let word = question.word().to_owned();
                    return Err(ValidationError::DuplicateWord(word).into());
                }
            }
        }

        questions.extend_from_slice(new_questions);
        write_questions(path, &questions)?;
        info!(
            "Added {} questions to {}",
            new_questions.len(),
            path.display()
        );
        Ok(new_questions.len())
    }
}

fn write_questions(path: &Path, questions: &[Question]) -> Result<()> {
    // Validate before truncating the existing file.
    for question in questions {
        question.validate()?;
    }
    let file = File::create(path)?;
    codec::encode(questions, BufWriter::new(file))
}

fn not_found_or_io(error: std::io::Error, path: &Path) -> QuizError {
    match error.kind() {
        ErrorKind::NotFound => QuizError::QuizNotFound(path.to_path_buf()),
        _ => QuizError::Io(error),
    }
}
