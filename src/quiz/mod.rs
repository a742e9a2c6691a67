pub mod clue;
pub mod codec;
pub mod question;
pub mod repository;
pub mod session;

pub use self::clue::{ClueSettings, Difficulty};
pub use self::question::Question;
pub use self::repository::{QuizEntry, QuizRepository};
pub use self::session::Session;
