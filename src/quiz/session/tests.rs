use rand::rngs::StdRng;
use rand::SeedableRng;

use super::*;
use crate::output::mock::MockConsole;
use crate::output::Key;

fn clue_settings() -> ClueSettings {
    ClueSettings {
        placeholder: '_',
        no_clue_text: "No Clue for Difficult Level".to_owned(),
    }
}

fn animals() -> Vec<Question> {
    vec![
        Question::new("cat", "feline pet").unwrap(),
        Question::new("dog", "canine pet").unwrap(),
    ]
}

#[test]
fn grading_ignores_case() {
    assert_eq!(grade("CAT", "cat"), Verdict::Correct);
    assert_eq!(grade("Été", "éTÉ"), Verdict::Correct);
}

#[test]
fn grading_ignores_surrounding_whitespace() {
    assert_eq!(grade("  cat \t", "cat"), Verdict::Correct);
}

#[test]
fn grading_reports_correct_word() {
    assert_eq!(
        grade("cats", "cat"),
        Verdict::Incorrect {
            correct_word: "cat".to_owned()
        }
    );
}

#[test]
fn prompts_follow_question_order() {
    let questions = animals();
    let mut rng = StdRng::seed_from_u64(0);
    let mut session = Session::new(&questions, Difficulty::Easy, clue_settings());

    assert_eq!(
        session.prompt(&mut rng),
        Some(Prompt {
            meaning: "feline pet".to_owned(),
            clue: "c_t".to_owned()
        })
    );
    session.answer("cat");
    assert_eq!(
        session.prompt(&mut rng),
        Some(Prompt {
            meaning: "canine pet".to_owned(),
            clue: "d_g".to_owned()
        })
    );
    session.answer("wolf");
    assert!(session.is_over());
    assert_eq!(session.prompt(&mut rng), None);
    assert_eq!(session.answer("late"), None);
    assert_eq!(
        session.results(),
        SessionResults {
            correct: 1,
            total: 2
        }
    );
}

#[test]
fn empty_quiz_is_over_immediately() {
    let questions: Vec<Question> = vec![];
    let session = Session::new(&questions, Difficulty::Medium, clue_settings());
    assert!(session.is_over());
}

#[test]
fn run_reports_each_answer() {
    let questions = animals();
    let mut rng = StdRng::seed_from_u64(0);
    let mut session = Session::new(&questions, Difficulty::Difficult, clue_settings());
    let mut console = MockConsole::new()
        .lines(&["CAT", "wolf"])
        .keys(&[Key::Other, Key::Other, Key::Other]);

    let results = run(&mut console, &mut session, &mut rng).unwrap();

    assert_eq!(results, SessionResults { correct: 1, total: 2 });
    assert_eq!(
        console.messages(),
        vec![
            Message::Flashcard {
                meaning: "feline pet".to_owned(),
                clue: "No Clue for Difficult Level".to_owned()
            },
            Message::AnswerCorrect,
            Message::PressAnyKey,
            Message::Flashcard {
                meaning: "canine pet".to_owned(),
                clue: "No Clue for Difficult Level".to_owned()
            },
            Message::AnswerIncorrect("dog".to_owned()),
            Message::PressAnyKey,
            Message::SessionResults(1, 2),
            Message::PressAnyKey,
        ]
    );
    assert!(console.is_script_exhausted());
}

#[test]
fn run_stops_when_input_ends() {
    let questions = animals();
    let mut rng = StdRng::seed_from_u64(0);
    let mut session = Session::new(&questions, Difficulty::Easy, clue_settings());
    let mut console = MockConsole::new().lines(&["cat"]).keys(&[Key::Confirm]);
    assert!(run(&mut console, &mut session, &mut rng).is_err());
    assert_eq!(session.results().total, 1);
}
