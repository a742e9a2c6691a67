use anyhow::Result;
use log::{info, warn};
use rand::Rng;
use std::collections::HashSet;

use crate::account::{Accounts, LoginOutcome, RegisterOutcome, StudentIdentity, GUEST_KEY};
use crate::error::QuizError;
use crate::menu::{
    navigate, pick, AfterCreate, LoginRetry, MainAction, ManageAction, StudentAction, UserType,
};
use crate::output::{Console, Message};
use crate::quiz::question::sanitize_title;
use crate::quiz::{
    session, ClueSettings, Difficulty, Question, QuizEntry, QuizRepository, Session,
};
use crate::settings::Settings;

use self::prompt::*;

mod prompt;

pub struct App<C: Console, R: Rng> {
    console: C,
    rng: R,
    settings: Settings,
    accounts: Accounts,
    repository: QuizRepository,
}

impl<C: Console, R: Rng> App<C, R> {
    pub fn new(console: C, rng: R, settings: Settings) -> Self {
        App {
            accounts: Accounts::new(settings.storage_dir.clone()),
            repository: QuizRepository::new(settings.storage_dir.clone()),
            console,
            rng,
            settings,
        }
    }

    /// Runs until the user exits from the main menu.
    pub fn run(&mut self) -> Result<()> {
        let owner_key = self.choose_owner()?;
        info!("Session owner: {}", owner_key);
        self.main_menu(&owner_key)
    }

    #[cfg(test)]
    pub fn into_console(self) -> C {
        self.console
    }

    /// Domain failures are shown and the user carries on from the menu.
    /// Anything else, such as a broken terminal, ends the application.
    fn recover(&mut self, result: Result<()>) -> Result<()> {
        let e = match result {
            Ok(()) => return Ok(()),
            Err(e) => e,
        };
        match e.downcast::<QuizError>() {
            Ok(quiz_error) => {
                warn!("{}", quiz_error);
                self.console.say(&Message::OperationFailed(quiz_error.to_string()))?;
                self.console.pause()
            }
            Err(e) => Err(e),
        }
    }

    fn choose_owner(&mut self) -> Result<String> {
        match pick::<UserType, _>(&mut self.console, "User Type Menu")? {
            UserType::Guest => {
                self.console.clear_screen()?;
                self.console.say(&Message::GuestAccess)?;
                Ok(GUEST_KEY.to_owned())
            }
            UserType::Student => Ok(self.student_menu()?.key()),
        }
    }

    fn student_menu(&mut self) -> Result<StudentIdentity> {
        loop {
            match pick::<StudentAction, _>(&mut self.console, "Student Menu")? {
                StudentAction::Register => {
                    let result = self.register();
                    self.recover(result)?;
                }
                StudentAction::Login => match self.login() {
                    Ok(Some(identity)) => return Ok(identity),
                    Ok(None) => (),
                    Err(e) => self.recover(Err(e))?,
                },
            }
        }
    }

    fn read_identity(&mut self) -> Result<StudentIdentity> {
        loop {
            let first_name = self.console.read_line("First Name: ")?;
            let last_name = self.console.read_line("Last Name: ")?;
            match StudentIdentity::new(&first_name, &last_name) {
                Ok(identity) => return Ok(identity),
                Err(e) => self.console.say(&Message::InvalidInput(e.to_string()))?,
            }
        }
    }

    fn register(&mut self) -> Result<()> {
        self.console.clear_screen()?;
        self.console.write_centered("Student Registration")?;
        let identity = self.read_identity()?;
        match self.accounts.register(&identity)? {
            RegisterOutcome::Created => self.console.say(&Message::AccountCreated)?,
            RegisterOutcome::AlreadyExists => self.console.say(&Message::AccountExists)?,
        }
        self.console.pause()
    }

    /// Returns `None` when the user switched to registering instead.
    fn login(&mut self) -> Result<Option<StudentIdentity>> {
        loop {
            self.console.clear_screen()?;
            self.console.write_centered("Student Login")?;
            let identity = self.read_identity()?;
            match self.accounts.login(&identity) {
                LoginOutcome::Success => {
                    info!("Login succeeded for {}", identity.key());
                    self.console.say(&Message::LoginSucceeded(identity.key()))?;
                    self.console.pause()?;
                    return Ok(Some(identity));
                }
                LoginOutcome::NotFound => {
                    info!("No account for {}", identity.key());
                    self.console.say(&Message::AccountNotFound)?;
                    self.console.pause()?;
                }
            }

            let header = "Would you like to try logging in again or register?";
            match pick::<LoginRetry, _>(&mut self.console, header)? {
                LoginRetry::LoginAgain => continue,
                LoginRetry::Register => {
                    self.register()?;
                    return Ok(None);
                }
            }
        }
    }

    fn main_menu(&mut self, owner_key: &str) -> Result<()> {
        loop {
            let result = match pick::<MainAction, _>(&mut self.console, "Main Menu")? {
                MainAction::Create => self.create_quiz(owner_key),
                MainAction::Load => self.load_quiz(owner_key),
                MainAction::Manage => self.manage_quiz(owner_key),
                MainAction::Exit => return Ok(()),
            };
            self.recover(result)?;
        }
    }

    fn create_quiz(&mut self, owner_key: &str) -> Result<()> {
        self.console.clear_screen()?;
        self.console.write_centered("Word Quiz")?;
        let title = prompt_until_valid(&mut self.console, "Enter quiz title: ", sanitize_title)?;
        let count = read_count(&mut self.console, "Number of Questions: ")?;
        let mut words = HashSet::new();
        let questions = read_questions(&mut self.console, "Word Quiz", count, &mut words)?;

        let entry = self.repository.create(owner_key, &title, &questions)?;
        self.console.clear_screen()?;
        self.console.write_centered("Word Quiz")?;
        self.console.say(&Message::QuizSaved(
            entry.title.clone(),
            entry.path.display().to_string(),
        ))?;
        self.console.pause()?;

        match pick::<AfterCreate, _>(&mut self.console, "Flashcard Quiz")? {
            AfterCreate::StartQuiz => self.play(&questions),
            AfterCreate::MainMenu => {
                self.console.say(&Message::QuizCreationComplete)?;
                self.console.pause()
            }
        }
    }

    fn load_quiz(&mut self, owner_key: &str) -> Result<()> {
        let entry = match self.select_quiz(owner_key, "Load Quiz")? {
            Some(entry) => entry,
            None => return Ok(()),
        };
        let questions = self.repository.load(&entry.path)?;
        if questions.is_empty() {
            self.console.say(&Message::NoQuestions)?;
            return self.console.pause();
        }
        self.play(&questions)
    }

    fn manage_quiz(&mut self, owner_key: &str) -> Result<()> {
        let entry = match self.select_quiz(owner_key, "Manage Quiz")? {
            Some(entry) => entry,
            None => return Ok(()),
        };
        match pick::<ManageAction, _>(&mut self.console, "Choose an action")? {
            ManageAction::AddFlashcards => self.add_flashcards(&entry),
            ManageAction::DeleteQuiz => self.delete_quiz(&entry),
            ManageAction::MainMenu => Ok(()),
        }
    }

    fn select_quiz(&mut self, owner_key: &str, header: &str) -> Result<Option<QuizEntry>> {
        let quizzes = self.repository.list(owner_key)?;
        if quizzes.is_empty() {
            self.console.clear_screen()?;
            self.console.write_centered(header)?;
            self.console.say(&Message::NoQuizzes)?;
            self.console.pause()?;
            return Ok(None);
        }
        let titles: Vec<String> = quizzes.iter().map(|q| q.title.clone()).collect();
        let index = navigate(&mut self.console, header, &titles, 0)?;
        Ok(quizzes.into_iter().nth(index))
    }

    fn add_flashcards(&mut self, entry: &QuizEntry) -> Result<()> {
        let existing = self.repository.load(&entry.path)?;
        let mut words: HashSet<String> =
            existing.iter().map(|q| q.word().to_owned()).collect();

        self.console.clear_screen()?;
        self.console.write_centered("Add Flashcards")?;
        let count = read_count(&mut self.console, "How many flashcards do you want to add? ")?;
        let questions = read_questions(&mut self.console, "Add Flashcard", count, &mut words)?;

        let added = self.repository.add_questions(&entry.path, &questions)?;
        self.console.say(&Message::FlashcardsAdded(added))?;
        self.console.pause()
    }

    fn delete_quiz(&mut self, entry: &QuizEntry) -> Result<()> {
        match self.repository.delete(&entry.path) {
            Ok(()) => self.console.say(&Message::QuizDeleted)?,
            Err(QuizError::QuizNotFound(_)) => self.console.say(&Message::QuizNotFound)?,
            Err(e) => return Err(e.into()),
        }
        self.console.pause()
    }

    fn play(&mut self, questions: &[Question]) -> Result<()> {
        let difficulty = pick::<Difficulty, _>(&mut self.console, "Select Difficulty")?;
        info!(
            "Starting a {:?} session of {} questions",
            difficulty,
            questions.len()
        );
        let clue_settings = ClueSettings {
            placeholder: self.settings.placeholder,
            no_clue_text: self.settings.no_clue_text.clone(),
        };
        let mut session = Session::new(questions, difficulty, clue_settings);
        session::run(&mut self.console, &mut session, &mut self.rng)?;
        Ok(())
    }
}
