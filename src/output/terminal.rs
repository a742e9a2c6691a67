use anyhow::{bail, Context, Result};
use crossterm::cursor::{MoveTo, MoveToColumn};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, disable_raw_mode, enable_raw_mode, Clear, ClearType};
use crossterm::{execute, queue};
use std::io::{self, BufRead, Stdout, Write};

use crate::output::{Console, Key, Message};

const BANNER: &[&str] = &[
    " ██████╗ ██╗   ██╗██╗███████╗ ██████╗██████╗  █████╗ ███████╗████████╗",
    "██╔═══██╗██║   ██║██║╚══███╔╝██╔════╝██╔══██╗██╔══██╗██╔════╝╚══██╔══╝",
    "██║   ██║██║   ██║██║  ███╔╝ ██║     ██████╔╝███████║█████╗     ██║   ",
    "██║▄▄ ██║██║   ██║██║ ███╔╝  ██║     ██╔══██╗██╔══██║██╔══╝     ██║   ",
    "╚██████╔╝╚██████╔╝██║███████╗╚██████╗██║  ██║██║  ██║██║        ██║   ",
    " ╚══▀▀═╝  ╚═════╝ ╚═╝╚══════╝ ╚═════╝╚═╝  ╚═╝╚═╝  ╚═╝╚═╝        ╚═╝   ",
];

pub struct TerminalConsole {
    stdout: Stdout,
}

impl Default for TerminalConsole {
    fn default() -> Self {
        TerminalConsole {
            stdout: io::stdout(),
        }
    }
}

impl TerminalConsole {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn show_banner(&mut self) -> Result<()> {
        self.clear_screen()?;
        queue!(self.stdout, SetForegroundColor(Color::Green))?;
        for line in BANNER {
            queue!(self.stdout, Print(line), Print("\n"))?;
        }
        queue!(self.stdout, ResetColor, Print("\n"))?;
        self.pause()
    }

    fn column_for(&self, text: &str) -> u16 {
        let width = terminal::size().map(|(w, _)| w as usize).unwrap_or(80);
        let length = text.chars().count();
        (width.saturating_sub(length) / 2) as u16
    }

    fn interpret_message(message: &Message) -> String {
        use Message::*;
        match message {
            AccountCreated => "Account created! You can now load and manage your data.".into(),
            AccountExists => "This account already exists. Please log in.".into(),
            AccountNotFound => "No account found. Please register.".into(),
            LoginSucceeded(key) => format!("Login successful! Welcome, {}.", key),
            GuestAccess => "Guest Access".into(),
            InvalidInput(reason) => format!("Invalid input: {}", reason),
            OperationFailed(reason) => format!("Something went wrong: {}", reason),
            QuizSaved(title, path) => format!("Quiz '{}' saved successfully to {}!", title, path),
            QuizCreationComplete => "Quiz creation complete. Returning to the main menu.".into(),
            NoQuizzes => "No quizzes found.".into(),
            NoQuestions => "No questions found in the selected quiz.".into(),
            AddingQuestion(index, total) => format!("Adding question {} of {}...", index, total),
            FlashcardsAdded(count) => format!("{} flashcards added successfully!", count),
            QuizDeleted => "Quiz deleted successfully!".into(),
            QuizNotFound => "Quiz file not found.".into(),
            Flashcard { meaning, clue } => format!("Meaning: {}\nClue: {}", meaning, clue),
            AnswerCorrect => "Correct!".into(),
            AnswerIncorrect(word) => format!("Incorrect! The correct word is: {}", word),
            SessionResults(correct, total) => {
                format!("Quiz complete! You answered {} of {} correctly.", correct, total)
            }
            PressAnyKey => "Press any key to continue...".into(),
        }
    }
}

impl Console for TerminalConsole {
    fn clear_screen(&mut self) -> Result<()> {
        execute!(self.stdout, Clear(ClearType::All), MoveTo(0, 0))?;
        Ok(())
    }

    fn write_centered(&mut self, text: &str) -> Result<()> {
        for line in text.lines() {
            let column = self.column_for(line);
            queue!(self.stdout, MoveToColumn(column), Print(line), Print("\n"))?;
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn write_option_list(&mut self, options: &[String], highlighted: usize) -> Result<()> {
        for (index, option) in options.iter().enumerate() {
            let (line, color) = if index == highlighted {
                (format!("> {} <", option), Color::Green)
            } else {
                (option.clone(), Color::DarkRed)
            };
            let column = self.column_for(&line);
            queue!(
                self.stdout,
                SetForegroundColor(color),
                MoveToColumn(column),
                Print(line),
                Print("\n")
            )?;
        }
        queue!(self.stdout, ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }

    fn say(&mut self, message: &Message) -> Result<()> {
        self.write_centered(&Self::interpret_message(message))
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        queue!(self.stdout, MoveToColumn(0), Print(prompt))?;
        self.stdout.flush()?;
        let mut line = String::new();
        let read = io::stdin().lock().read_line(&mut line)?;
        if read == 0 {
            bail!("Input stream closed");
        }
        Ok(line.trim_end_matches(&['\r', '\n'][..]).to_owned())
    }

    fn read_key(&mut self) -> Result<Key> {
        enable_raw_mode()?;
        let event = loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break Ok(key),
                Ok(_) => continue,
                Err(e) => break Err(e),
            }
        };
        disable_raw_mode()?;

        let event = event.context("Could not read from the terminal")?;
        let key = match event.code {
            KeyCode::Char('c') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                bail!("Interrupted")
            }
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Enter => Key::Confirm,
            _ => Key::Other,
        };
        Ok(key)
    }
}
