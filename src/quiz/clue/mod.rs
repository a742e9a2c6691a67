use rand::seq::SliceRandom;
use rand::Rng;

use crate::menu::Choice;

#[cfg(test)]
mod tests;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Difficulty {
    Easy,
    Medium,
    Difficult,
}

impl Choice for Difficulty {
    fn all() -> &'static [Self] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Difficult]
    }

    fn label(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Difficult => "Difficult",
        }
    }
}

#[derive(Clone, Debug)]
pub struct ClueSettings {
    pub placeholder: char,
    pub no_clue_text: String,
}

/// Builds the hint shown next to a meaning during a quiz.
pub fn clue<R: Rng + ?Sized>(
    word: &str,
    difficulty: Difficulty,
    settings: &ClueSettings,
    rng: &mut R,
) -> String {
    match difficulty {
        Difficulty::Easy => mask_odd_characters(word, settings.placeholder),
        Difficulty::Medium => shuffle_characters(word, rng),
        Difficulty::Difficult => settings.no_clue_text.clone(),
    }
}

fn mask_odd_characters(word: &str, placeholder: char) -> String {
    word.chars()
        .enumerate()
        .map(|(index, c)| if index % 2 == 1 { placeholder } else { c })
        .collect()
}

fn shuffle_characters<R: Rng + ?Sized>(word: &str, rng: &mut R) -> String {
    let mut characters: Vec<char> = word.chars().collect();
    characters.shuffle(rng);
    characters.into_iter().collect()
}
