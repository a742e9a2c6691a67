use anyhow::Result;
use log::debug;
use rand::Rng;

use crate::output::{Console, Message};
use crate::quiz::clue::{clue, ClueSettings, Difficulty};
use crate::quiz::question::Question;

#[cfg(test)]
mod tests;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Verdict {
    Correct,
    Incorrect { correct_word: String },
}

/// Answers match when equal after trimming, ignoring case.
pub fn grade(answer: &str, word: &str) -> Verdict {
    if answer.trim().to_lowercase() == word.trim().to_lowercase() {
        Verdict::Correct
    } else {
        Verdict::Incorrect {
            correct_word: word.to_owned(),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Prompt {
    pub meaning: String,
    pub clue: String,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SessionResults {
    pub correct: usize,
    pub total: usize,
}

/// One pass over a quiz, in question order.
pub struct Session<'a> {
    questions: &'a [Question],
    difficulty: Difficulty,
    clue_settings: ClueSettings,
    position: usize,
    correct: usize,
}

impl<'a> Session<'a> {
    pub fn new(
        questions: &'a [Question],
        difficulty: Difficulty,
        clue_settings: ClueSettings,
    ) -> Self {
        Session {
            questions,
            difficulty,
            clue_settings,
            position: 0,
            correct: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.position >= self.questions.len()
    }

    pub fn prompt<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<Prompt> {
        self.questions.get(self.position).map(|question| Prompt {
            meaning: question.meaning().to_owned(),
            clue: clue(question.word(), self.difficulty, &self.clue_settings, rng),
        })
    }

    /// Grades the answer to the current question and moves to the next one.
    pub fn answer(&mut self, answer: &str) -> Option<Verdict> {
        let question = self.questions.get(self.position)?;
        let verdict = grade(answer, question.word());
        if verdict == Verdict::Correct {
            self.correct += 1;
        }
        self.position += 1;
        Some(verdict)
    }

    pub fn results(&self) -> SessionResults {
        SessionResults {
            correct: self.correct,
            total: self.position,
        }
    }
}

pub fn run<C: Console + ?Sized, R: Rng + ?Sized>(
    console: &mut C,
    session: &mut Session,
    rng: &mut R,
) -> Result<SessionResults> {
    while let Some(prompt) = session.prompt(rng) {
        console.clear_screen()?;
        console.write_centered("Word Quiz")?;
        console.say(&Message::Flashcard {
            meaning: prompt.meaning,
            clue: prompt.clue,
        })?;

        let answer = console.read_line("Your answer: ")?;
        match session.answer(&answer) {
            Some(Verdict::Correct) => console.say(&Message::AnswerCorrect)?,
            Some(Verdict::Incorrect { correct_word }) => {
                console.say(&Message::AnswerIncorrect(correct_word))?
            }
            None => break,
        }
        console.pause()?;
    }

    debug_assert!(session.is_over());
    let results = session.results();
    debug!("Session over: {}/{}", results.correct, results.total);
    console.say(&Message::SessionResults(results.correct, results.total))?;
    console.pause()?;
    Ok(results)
}
