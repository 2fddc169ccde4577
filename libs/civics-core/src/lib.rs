//! Core civics study library used by the study application.
//!
//! Provides:
//! - The 100-question civics catalog
//! - Fill-in-the-blank generation and answer matching
//! - Progress counters and completion/accuracy percentages
//! - Study sessions (flash cards, multiple choice, fill in the blank)
//! - English/Spanish UI strings

pub mod blank;
pub mod catalog;
pub mod error;
pub mod i18n;
pub mod matching;
pub mod progress;
pub mod recommend;
pub mod session;
pub mod types;

pub use blank::{generate_blank, shortest_answer, BlankedAnswer, BLANK};
pub use catalog::{Catalog, QuestionFilter, QUESTIONS, VARIES_ANSWER};
pub use error::{CoreError, Result};
pub use i18n::{translate, Language};
pub use matching::{check_answer, compare_answers, key_words, MatchResult};
pub use progress::{CompletionBasis, ProgressReport, ProgressStore, ProgressSummary};
pub use recommend::{recommendations, Recommendation};
pub use session::{
    FillInBlankQuiz, FlashCardDeck, MultipleChoiceQuiz, SessionStatus, StudySession,
    DEFAULT_QUIZ_LENGTH,
};
pub use types::{Attempt, AttemptRecord, Category, Question, StudyMode, Subcategory, Tally};
