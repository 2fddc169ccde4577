//! Flash card deck with filtering and navigation.

use super::StudySession;
use crate::catalog::{Catalog, QuestionFilter};
use crate::types::{Attempt, Question, StudyMode};

/// Deck of cards over the catalog. Cards show the question until flipped.
#[derive(Debug, Clone)]
pub struct FlashCardDeck {
    catalog: Catalog,
    filter: QuestionFilter,
    cards: Vec<&'static Question>,
    index: usize,
    flipped: bool,
}

impl FlashCardDeck {
    /// Deck over every question in the catalog.
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            filter: QuestionFilter::default(),
            cards: catalog.all().iter().collect(),
            index: 0,
            flipped: false,
        }
    }

    /// Replace the filter and go back to the first card.
    pub fn apply_filter(&mut self, filter: QuestionFilter) {
        self.cards = self.catalog.filtered(&filter);
        self.filter = filter;
        self.reset();
    }

    pub fn filter(&self) -> &QuestionFilter {
        &self.filter
    }

    pub fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Toggle between question and answer.
    pub fn flip(&mut self) {
        self.flipped = !self.flipped;
    }

    /// Move to the next card. Returns false on the last card.
    pub fn next(&mut self) -> bool {
        if self.index + 1 < self.cards.len() {
            self.index += 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    /// Move to the previous card. Returns false on the first card.
    pub fn previous(&mut self) -> bool {
        if self.index > 0 {
            self.index -= 1;
            self.flipped = false;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.index = 0;
        self.flipped = false;
    }

    /// Rate the current card and advance. Returns `None` for an empty deck.
    pub fn mark(&mut self, known: bool) -> Option<Attempt> {
        let question = self.current()?;
        let attempt = Attempt::for_question(question, StudyMode::FlashCards, known);
        self.next();
        Some(attempt)
    }

    pub fn mark_known(&mut self) -> Option<Attempt> {
        self.mark(true)
    }

    pub fn mark_unknown(&mut self) -> Option<Attempt> {
        self.mark(false)
    }
}

impl StudySession for FlashCardDeck {
    fn mode(&self) -> StudyMode {
        StudyMode::FlashCards
    }

    fn current(&self) -> Option<&'static Question> {
        self.cards.get(self.index).copied()
    }

    fn position(&self) -> usize {
        self.index
    }

    fn len(&self) -> usize {
        self.cards.len()
    }
}
