//! Study session commands.
//!
//! Answers are always checked; they only count towards progress when a user
//! is signed in. `recorded: false` tells the view to show the sign-in prompt.

use super::{lock, CommandError};
use crate::state::{AppState, Session};
use civics_core::{
    Category, FillInBlankQuiz, MultipleChoiceQuiz, QuestionFilter, SessionStatus, StudyMode,
    StudySession,
};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashCardView {
    pub status: SessionStatus,
    pub flipped: bool,
    pub progress: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashCardMark {
    pub recorded: bool,
    pub card: FlashCardView,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MultipleChoiceView {
    pub status: SessionStatus,
    pub options: Vec<&'static str>,
    pub score: usize,
    pub answered: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FillInBlankView {
    pub status: SessionStatus,
    /// Answer with blanked words, `None` when the quiz is empty.
    pub blank: Option<String>,
    pub score: usize,
    pub answered: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnswerFeedback {
    pub is_correct: bool,
    pub correct_answers: &'static [&'static str],
    /// Key words the typed answer lacked (fill in the blank only).
    pub missing_key_words: Vec<String>,
    pub score: usize,
    pub recorded: bool,
}

fn not_started(mode: StudyMode) -> CommandError {
    CommandError {
        message: format!("no {mode} session in progress"),
    }
}

fn already_answered() -> CommandError {
    CommandError {
        message: "question already answered".to_string(),
    }
}

fn flash_card_view(session: &Session) -> FlashCardView {
    let deck = &session.flash_cards;
    FlashCardView {
        status: SessionStatus::of(deck),
        flipped: deck.is_flipped(),
        progress: deck.progress_percentage(),
    }
}

fn multiple_choice_view(quiz: &MultipleChoiceQuiz) -> MultipleChoiceView {
    MultipleChoiceView {
        status: SessionStatus::of(quiz),
        options: quiz.options().to_vec(),
        score: quiz.score(),
        answered: quiz.is_answered(),
    }
}

fn fill_in_blank_view(quiz: &FillInBlankQuiz) -> FillInBlankView {
    FillInBlankView {
        status: SessionStatus::of(quiz),
        blank: quiz.blank().map(|b| b.display.clone()),
        score: quiz.score(),
        answered: quiz.is_answered(),
    }
}

// Flash cards

pub fn get_flash_card(state: &AppState) -> Result<FlashCardView, CommandError> {
    let session = state.session.lock()?;
    Ok(flash_card_view(&session))
}

pub fn flip_flash_card(state: &AppState) -> Result<FlashCardView, CommandError> {
    let mut session = state.session.lock()?;
    session.flash_cards.flip();
    Ok(flash_card_view(&session))
}

pub fn next_flash_card(state: &AppState) -> Result<FlashCardView, CommandError> {
    let mut session = state.session.lock()?;
    session.flash_cards.next();
    Ok(flash_card_view(&session))
}

pub fn previous_flash_card(state: &AppState) -> Result<FlashCardView, CommandError> {
    let mut session = state.session.lock()?;
    session.flash_cards.previous();
    Ok(flash_card_view(&session))
}

pub fn reset_flash_cards(state: &AppState) -> Result<FlashCardView, CommandError> {
    let mut session = state.session.lock()?;
    session.flash_cards.reset();
    Ok(flash_card_view(&session))
}

/// Restrict the deck to `categories` (all when empty) and optionally to
/// the 65/20 questions.
pub fn filter_flash_cards(
    state: &AppState,
    categories: &[&str],
    elderly_only: bool,
) -> Result<FlashCardView, CommandError> {
    let categories = categories
        .iter()
        .map(|c| c.parse::<Category>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut session = state.session.lock()?;
    session.flash_cards.apply_filter(QuestionFilter {
        categories,
        elderly_only,
    });
    Ok(flash_card_view(&session))
}

/// Mark the current card as known or not and advance.
pub fn mark_flash_card(state: &AppState, known: bool) -> Result<FlashCardMark, CommandError> {
    let (repo, mut guard) = lock(state)?;
    let session = &mut *guard;

    let attempt = session
        .flash_cards
        .mark(known)
        .ok_or_else(|| CommandError {
            message: "no flash card to mark".to_string(),
        })?;
    let recorded = session.progress.record(&*repo, &attempt);

    Ok(FlashCardMark {
        recorded,
        card: flash_card_view(session),
    })
}

// Multiple choice

/// Start a new quiz of the configured length.
pub fn start_multiple_choice(state: &AppState) -> Result<MultipleChoiceView, CommandError> {
    let mut guard = state.session.lock()?;
    let session = &mut *guard;
    let quiz = MultipleChoiceQuiz::new(state.catalog, state.config.quiz_length, &mut session.rng);
    let view = multiple_choice_view(&quiz);
    session.multiple_choice = Some(quiz);
    Ok(view)
}

pub fn get_multiple_choice(state: &AppState) -> Result<MultipleChoiceView, CommandError> {
    let session = state.session.lock()?;
    session
        .multiple_choice
        .as_ref()
        .map(multiple_choice_view)
        .ok_or_else(|| not_started(StudyMode::MultipleChoice))
}

pub fn submit_multiple_choice(
    state: &AppState,
    selected: &str,
) -> Result<AnswerFeedback, CommandError> {
    let (repo, mut guard) = lock(state)?;
    let session = &mut *guard;
    let quiz = session
        .multiple_choice
        .as_mut()
        .ok_or_else(|| not_started(StudyMode::MultipleChoice))?;

    let question = quiz
        .current()
        .ok_or_else(|| not_started(StudyMode::MultipleChoice))?;
    let attempt = quiz.submit(selected).ok_or_else(already_answered)?;
    let recorded = session.progress.record(&*repo, &attempt);

    Ok(AnswerFeedback {
        is_correct: attempt.is_correct,
        correct_answers: question.answers,
        missing_key_words: Vec::new(),
        score: quiz.score(),
        recorded,
    })
}

/// Advance to the next question. Returns `None` after the last one.
pub fn next_multiple_choice(
    state: &AppState,
) -> Result<Option<MultipleChoiceView>, CommandError> {
    let mut guard = state.session.lock()?;
    let session = &mut *guard;
    let quiz = session
        .multiple_choice
        .as_mut()
        .ok_or_else(|| not_started(StudyMode::MultipleChoice))?;

    Ok(quiz
        .next(&mut session.rng)
        .then(|| multiple_choice_view(quiz)))
}

// Fill in the blank

pub fn start_fill_in_blank(state: &AppState) -> Result<FillInBlankView, CommandError> {
    let mut guard = state.session.lock()?;
    let session = &mut *guard;
    let quiz = FillInBlankQuiz::new(state.catalog, state.config.quiz_length, &mut session.rng);
    let view = fill_in_blank_view(&quiz);
    session.fill_in_blank = Some(quiz);
    Ok(view)
}

pub fn get_fill_in_blank(state: &AppState) -> Result<FillInBlankView, CommandError> {
    let session = state.session.lock()?;
    session
        .fill_in_blank
        .as_ref()
        .map(fill_in_blank_view)
        .ok_or_else(|| not_started(StudyMode::FillInBlank))
}

pub fn submit_fill_in_blank(state: &AppState, typed: &str) -> Result<AnswerFeedback, CommandError> {
    let (repo, mut guard) = lock(state)?;
    let session = &mut *guard;
    let quiz = session
        .fill_in_blank
        .as_mut()
        .ok_or_else(|| not_started(StudyMode::FillInBlank))?;

    let question = quiz
        .current()
        .ok_or_else(|| not_started(StudyMode::FillInBlank))?;
    let attempt = quiz.submit(typed).ok_or_else(already_answered)?;
    let missing_key_words = quiz
        .last_result()
        .map(|r| r.missing_key_words.clone())
        .unwrap_or_default();
    let recorded = session.progress.record(&*repo, &attempt);

    Ok(AnswerFeedback {
        is_correct: attempt.is_correct,
        correct_answers: question.answers,
        missing_key_words,
        score: quiz.score(),
        recorded,
    })
}

pub fn next_fill_in_blank(state: &AppState) -> Result<Option<FillInBlankView>, CommandError> {
    let mut guard = state.session.lock()?;
    let session = &mut *guard;
    let quiz = session
        .fill_in_blank
        .as_mut()
        .ok_or_else(|| not_started(StudyMode::FillInBlank))?;

    Ok(quiz.next(&mut session.rng).then(|| fill_in_blank_view(quiz)))
}
