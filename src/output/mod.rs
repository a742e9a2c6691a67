use anyhow::*;

pub mod terminal;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    Up,
    Down,
    Confirm,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    AccountCreated,
    AccountExists,
    AccountNotFound,
    LoginSucceeded(String),
    GuestAccess,
    InvalidInput(String),
    OperationFailed(String),
    QuizSaved(String, String),
    QuizCreationComplete,
    NoQuizzes,
    NoQuestions,
    AddingQuestion(usize, usize),
    FlashcardsAdded(usize),
    QuizDeleted,
    QuizNotFound,
    Flashcard { meaning: String, clue: String },
    AnswerCorrect,
    AnswerIncorrect(String),
    SessionResults(usize, usize),
    PressAnyKey,
}

/// Everything the application needs from the screen and keyboard.
pub trait Console {
    fn clear_screen(&mut self) -> Result<()>;

    fn write_centered(&mut self, text: &str) -> Result<()>;

    fn write_option_list(&mut self, options: &[String], highlighted: usize) -> Result<()>;

    fn say(&mut self, message: &Message) -> Result<()>;

    /// Shows `prompt` and blocks until a full line is entered.
    fn read_line(&mut self, prompt: &str) -> Result<String>;

    fn read_key(&mut self) -> Result<Key>;

    fn pause(&mut self) -> Result<()> {
        self.say(&Message::PressAnyKey)?;
        self.read_key()?;
        Ok(())
    }
}
