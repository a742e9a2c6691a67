use anyhow::{bail, Result};
use log::debug;

use crate::output::{Console, Key};


/// Selection state of a single menu screen.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Navigator {
    len: usize,
    selected: usize,
}

impl Navigator {
    pub fn new(len: usize, initial: usize) -> Result<Self> {
        if len == 0 {
            bail!("A menu needs at least one option");
        }
        Ok(Navigator {
            len,
            selected: initial.min(len - 1),
        })
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Applies one key press. Returns the selection once it is confirmed.
    pub fn press(&mut self, key: Key) -> Option<usize> {
        match key {
            Key::Up => self.selected = (self.selected + self.len - 1) % self.len,
            Key::Down => self.selected = (self.selected + 1) % self.len,
            Key::Confirm => return Some(self.selected),
            Key::Other => (),
        }
        None
    }
}

/// Redraws `options` under `header` after every key until one is confirmed.
pub fn navigate<C: Console + ?Sized>(
    console: &mut C,
    header: &str,
    options: &[String],
    initial: usize,
) -> Result<usize> {
    let mut navigator = Navigator::new(options.len(), initial)?;
    loop {
        console.clear_screen()?;
        console.write_centered(header)?;
        console.write_option_list(options, navigator.selected())?;
        if let Some(index) = navigator.press(console.read_key()?) {
            debug!("'{}' selected on {}", options[index], header);
            return Ok(index);
        }
    }
}

/// A fixed set of menu options.
pub trait Choice: Copy + 'static {
    fn all() -> &'static [Self];
    fn label(&self) -> &'static str;
}

pub fn pick<T: Choice, C: Console + ?Sized>(console: &mut C, header: &str) -> Result<T> {
    let options: Vec<String> = T::all().iter().map(|c| c.label().to_owned()).collect();
    let index = navigate(console, header, &options, 0)?;
    Ok(T::all()[index])
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum UserType {
    Guest,
    Student,
}

impl Choice for UserType {
    fn all() -> &'static [Self] {
        &[UserType::Guest, UserType::Student]
    }

    fn label(&self) -> &'static str {
        match self {
            UserType::Guest => "Guest",
            UserType::Student => "Student",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum StudentAction {
    Register,
    Login,
}

impl Choice for StudentAction {
    fn all() -> &'static [Self] {
        &[StudentAction::Register, StudentAction::Login]
    }

    fn label(&self) -> &'static str {
        match self {
            StudentAction::Register => "Register",
            StudentAction::Login => "Login",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LoginRetry {
    LoginAgain,
    Register,
}

impl Choice for LoginRetry {
    fn all() -> &'static [Self] {
        &[LoginRetry::LoginAgain, LoginRetry::Register]
    }

    fn label(&self) -> &'static str {
        match self {
            LoginRetry::LoginAgain => "Login Again",
            LoginRetry::Register => "Register",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum MainAction {
    Create,
    Load,
    Manage,
    Exit,
}

impl Choice for MainAction {
    fn all() -> &'static [Self] {
        &[
            MainAction::Create,
            MainAction::Load,
            MainAction::Manage,
            MainAction::Exit,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            MainAction::Create => "Create",
            MainAction::Load => "Load",
            MainAction::Manage => "Manage",
            MainAction::Exit => "Exit",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AfterCreate {
    StartQuiz,
    MainMenu,
}

impl Choice for AfterCreate {
    fn all() -> &'static [Self] {
        &[AfterCreate::StartQuiz, AfterCreate::MainMenu]
    }

    fn label(&self) -> &'static str {
        match self {
            AfterCreate::StartQuiz => "Start Quiz",
            AfterCreate::MainMenu => "Main Menu",
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ManageAction {
    AddFlashcards,
    DeleteQuiz,
    MainMenu,
}

impl Choice for ManageAction {
    fn all() -> &'static [Self] {
        &[
            ManageAction::AddFlashcards,
            ManageAction::DeleteQuiz,
            ManageAction::MainMenu,
        ]
    }

    fn label(&self) -> &'static str {
        match self {
            ManageAction::AddFlashcards => "Add Flashcards",
            ManageAction::DeleteQuiz => "Delete Quiz",
            ManageAction::MainMenu => "Return to Main Menu",
        }
    }
}
