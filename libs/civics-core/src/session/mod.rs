//! Study session state for the three study modes.

pub mod fill_in_blank;
pub mod flash_cards;
pub mod multiple_choice;

pub use fill_in_blank::FillInBlankQuiz;
pub use flash_cards::FlashCardDeck;
pub use multiple_choice::MultipleChoiceQuiz;

use crate::types::{Question, StudyMode};

/// Questions per quiz when no length is configured.
pub const DEFAULT_QUIZ_LENGTH: usize = 10;

/// Common view over a session's position.
pub trait StudySession {
    /// Mode attempts from this session are recorded under.
    fn mode(&self) -> StudyMode;

    /// Question currently shown, if any.
    fn current(&self) -> Option<&'static Question>;

    /// Zero-based index of the current question.
    fn position(&self) -> usize;

    /// Number of questions in the session.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn is_last(&self) -> bool {
        self.len() > 0 && self.position() + 1 == self.len()
    }

    /// Share of the session reached so far, counting the current question.
    fn progress_percentage(&self) -> u32 {
        crate::progress::percentage(self.position() + 1, self.len()).min(100)
    }
}

/// Summary of a session for display.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatus {
    pub mode: StudyMode,
    pub position: usize,
    pub len: usize,
    pub is_last: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<&'static Question>,
}

impl SessionStatus {
    pub fn of<S: StudySession + ?Sized>(session: &S) -> Self {
        Self {
            mode: session.mode(),
            position: session.position(),
            len: session.len(),
            is_last: session.is_last(),
            question: session.current(),
        }
    }
}
