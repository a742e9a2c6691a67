use anyhow::*;
use std::collections::VecDeque;

use crate::output::{Console, Key, Message};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Entry {
    Clear,
    Text(String),
    Options(Vec<String>, usize),
    Message(Message),
    Prompt(String),
}

/// Replays scripted keys and lines, and records everything shown.
/// Running out of script is reported as an input failure.
#[derive(Default)]
pub struct MockConsole {
    keys: VecDeque<Key>,
    lines: VecDeque<String>,
    entries: Vec<Entry>,
}

impl MockConsole {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn keys(mut self, keys: &[Key]) -> Self {
        self.keys.extend(keys.iter().copied());
        self
    }

    pub fn lines(mut self, lines: &[&str]) -> Self {
        self.lines.extend(lines.iter().map(|l| l.to_string()));
        self
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn messages(&self) -> Vec<Message> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Message(m) => Some(m.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn contains_message(&self, message: &Message) -> bool {
        self.entries.iter().any(|entry| match entry {
            Entry::Message(m) => m == message,
            _ => false,
        })
    }

    pub fn is_script_exhausted(&self) -> bool {
        self.keys.is_empty() && self.lines.is_empty()
    }
}

impl Console for MockConsole {
    fn clear_screen(&mut self) -> Result<()> {
        self.entries.push(Entry::Clear);
        Ok(())
    }

    fn write_centered(&mut self, text: &str) -> Result<()> {
        self.entries.push(Entry::Text(text.to_owned()));
        Ok(())
    }

    fn write_option_list(&mut self, options: &[String], highlighted: usize) -> Result<()> {
        self.entries.push(Entry::Options(options.to_vec(), highlighted));
        Ok(())
    }

    fn say(&mut self, message: &Message) -> Result<()> {
        self.entries.push(Entry::Message(message.clone()));
        Ok(())
    }

    fn read_line(&mut self, prompt: &str) -> Result<String> {
        self.entries.push(Entry::Prompt(prompt.to_owned()));
        self.lines.pop_front().context("Scripted lines exhausted")
    }

    fn read_key(&mut self) -> Result<Key> {
        self.keys.pop_front().context("Scripted keys exhausted")
    }
}
