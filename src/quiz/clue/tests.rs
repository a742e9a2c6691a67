use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

use super::*;

fn settings() -> ClueSettings {
    ClueSettings {
        placeholder: '_',
        no_clue_text: "No Clue for Difficult Level".to_owned(),
    }
}

fn sorted_characters(word: &str) -> Vec<char> {
    let mut characters: Vec<char> = word.chars().collect();
    characters.sort();
    characters
}

#[test]
fn easy_masks_odd_positions() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(clue("elephant", Difficulty::Easy, &settings(), &mut rng), "e_e_h_n_");
    assert_eq!(clue("cat", Difficulty::Easy, &settings(), &mut rng), "c_t");
}

#[test]
fn easy_replaces_half_of_the_characters() {
    let mut rng = StdRng::seed_from_u64(0);
    for word in &["a", "ab", "abc", "abcdefg", "naïveté"] {
        let hint = clue(word, Difficulty::Easy, &settings(), &mut rng);
        let original: Vec<char> = word.chars().collect();
        let masked: Vec<char> = hint.chars().collect();
        assert_eq!(masked.len(), original.len());
        let replaced = masked.iter().filter(|c| **c == '_').count();
        assert_eq!(replaced, original.len() / 2);
        for (index, c) in masked.iter().enumerate() {
            if index % 2 == 0 {
                assert_eq!(*c, original[index]);
            }
        }
    }
}

#[test]
fn medium_is_a_permutation() {
    let mut rng = StdRng::seed_from_u64(7);
    for word in &["elephant", "été", "mississippi"] {
        let hint = clue(word, Difficulty::Medium, &settings(), &mut rng);
        assert_eq!(sorted_characters(&hint), sorted_characters(word));
    }
}

#[test]
fn medium_produces_different_orders() {
    let mut rng = StdRng::seed_from_u64(42);
    let hints: HashSet<String> = (0..50)
        .map(|_| clue("abcdef", Difficulty::Medium, &settings(), &mut rng))
        .collect();
    assert!(hints.len() > 1);
}

#[test]
fn medium_is_deterministic_for_a_seed() {
    let mut first = StdRng::seed_from_u64(3);
    let mut second = StdRng::seed_from_u64(3);
    assert_eq!(
        clue("abcdefgh", Difficulty::Medium, &settings(), &mut first),
        clue("abcdefgh", Difficulty::Medium, &settings(), &mut second)
    );
}

#[test]
fn difficult_gives_no_clue() {
    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(
        clue("elephant", Difficulty::Difficult, &settings(), &mut rng),
        "No Clue for Difficult Level"
    );
}

#[test]
fn trivial_words_are_unchanged() {
    let mut rng = StdRng::seed_from_u64(0);
    for difficulty in &[Difficulty::Easy, Difficulty::Medium] {
        assert_eq!(clue("", *difficulty, &settings(), &mut rng), "");
        assert_eq!(clue("x", *difficulty, &settings(), &mut rng), "x");
    }
}
