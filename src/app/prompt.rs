use anyhow::Result;
use std::collections::HashSet;

use crate::error::{QuizError, ValidationError};
use crate::output::{Console, Message};
use crate::quiz::question::{validate_meaning, validate_word, Question};

/// Asks again until `parse` accepts the trimmed answer.
pub fn prompt_until_valid<C, T, F>(console: &mut C, prompt: &str, mut parse: F) -> Result<T>
where
    C: Console + ?Sized,
    F: FnMut(&str) -> std::result::Result<T, ValidationError>,
{
    loop {
        let line = console.read_line(prompt)?;
        match parse(line.trim()) {
            Ok(value) => return Ok(value),
            Err(e) => console.say(&Message::InvalidInput(e.to_string()))?,
        }
    }
}

/// Upper bound for how many questions one prompt round collects.
pub const MAX_QUESTION_COUNT: usize = 500;

pub fn read_count<C: Console + ?Sized>(console: &mut C, prompt: &str) -> Result<usize> {
    prompt_until_valid(console, prompt, |answer| {
        if answer.is_empty() || !answer.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::NotAPositiveNumber);
        }
        match answer.parse::<usize>() {
            Ok(0) => Err(ValidationError::NotAPositiveNumber),
            Ok(count) if count <= MAX_QUESTION_COUNT => Ok(count),
            _ => Err(ValidationError::CountTooLarge(MAX_QUESTION_COUNT)),
        }
    })
}

/// Collects `count` questions whose words are not in `words` yet.
/// Accepted words are added to `words`.
pub fn read_questions<C: Console + ?Sized>(
    console: &mut C,
    header: &str,
    count: usize,
    words: &mut HashSet<String>,
) -> Result<Vec<Question>> {
    let mut questions = Vec::new();
    for index in 0..count {
        console.clear_screen()?;
        console.write_centered(header)?;
        console.say(&Message::AddingQuestion(index + 1, count))?;

        let word = prompt_until_valid(console, "Enter word: ", |word| {
            validate_word(word)?;
            if words.contains(word) {
                return Err(ValidationError::DuplicateWord(word.to_owned()));
            }
            Ok(word.to_owned())
        })?;
        let meaning = prompt_until_valid(
            console,
            "Enter the correct meaning for the word: ",
            |meaning| {
                validate_meaning(meaning)?;
                Ok(meaning.to_owned())
            },
        )?;

        words.insert(word.clone());
        questions.push(Question::new(word, meaning).map_err(QuizError::from)?);
    }
    Ok(questions)
}
