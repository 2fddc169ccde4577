//! Fill-in-the-blank quiz.

use super::StudySession;
use crate::blank::{generate_blank, BlankedAnswer};
use crate::catalog::Catalog;
use crate::matching::{compare_answers, MatchResult};
use crate::types::{Attempt, Question, StudyMode};
use rand::seq::SliceRandom;
use rand::Rng;

/// Questions qualify when at least one answer has at most this many words.
pub const MAX_BLANK_WORDS: usize = 5;

/// Whether a question has a gradable answer short enough to blank out.
pub fn is_eligible(question: &Question) -> bool {
    !question.is_time_sensitive()
        && question
            .answers
            .iter()
            .any(|a| a.split_whitespace().count() <= MAX_BLANK_WORDS)
}

#[derive(Debug, Clone)]
pub struct FillInBlankQuiz {
    catalog: Catalog,
    length: usize,
    questions: Vec<&'static Question>,
    index: usize,
    blank: Option<BlankedAnswer>,
    result: Option<MatchResult>,
    score: usize,
}

impl FillInBlankQuiz {
    /// Quiz of up to `length` random eligible questions.
    pub fn new<R: Rng + ?Sized>(catalog: Catalog, length: usize, rng: &mut R) -> Self {
        let mut quiz = Self {
            catalog,
            length,
            questions: Vec::new(),
            index: 0,
            blank: None,
            result: None,
            score: 0,
        };
        quiz.restart(rng);
        quiz
    }

    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut eligible: Vec<&'static Question> =
            self.catalog.all().iter().filter(|q| is_eligible(q)).collect();
        eligible.shuffle(rng);
        eligible.truncate(self.length);

        self.questions = eligible;
        self.index = 0;
        self.score = 0;
        self.load_question(rng);
    }

    /// Masked answer for the current question.
    pub fn blank(&self) -> Option<&BlankedAnswer> {
        self.blank.as_ref()
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.result.is_some()
    }

    /// Match details of the submitted answer for the current question.
    pub fn last_result(&self) -> Option<&MatchResult> {
        self.result.as_ref()
    }

    /// Check typed text against the blank's canonical answer.
    /// Returns `None` if there is no question or it was already answered.
    pub fn submit(&mut self, typed: &str) -> Option<Attempt> {
        if self.result.is_some() {
            return None;
        }
        let question = self.current()?;
        let blank = self.blank.as_ref()?;

        let result = compare_answers(typed, &blank.canonical);
        let is_correct = result.is_correct;
        if is_correct {
            self.score += 1;
        }
        self.result = Some(result);
        Some(Attempt::for_question(question, StudyMode::FillInBlank, is_correct))
    }

    /// Move to the next question and draw a new blank. Returns false on the last question.
    pub fn next<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.index + 1 < self.questions.len() {
            self.index += 1;
            self.load_question(rng);
            true
        } else {
            false
        }
    }

    fn load_question<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.result = None;
        self.blank = self
            .current()
            .and_then(|question| generate_blank(question.answers, rng));
    }
}

impl StudySession for FillInBlankQuiz {
    fn mode(&self) -> StudyMode {
        StudyMode::FillInBlank
    }

    fn current(&self) -> Option<&'static Question> {
        self.questions.get(self.index).copied()
    }

    fn position(&self) -> usize {
        self.index
    }

    fn len(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blank::BLANK;
    use crate::catalog::VARIES_ANSWER;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn long_answers_are_not_eligible() {
        let catalog = Catalog::standard();
        // "You can practice any religion, or not practice a religion." is the only answer
        assert!(!is_eligible(catalog.get(10).unwrap()));
        assert!(is_eligible(catalog.get(1).unwrap()));
    }

    #[test]
    fn placeholder_answers_are_not_eligible() {
        let catalog = Catalog::standard();
        let senators = catalog.get(20).unwrap();
        assert!(senators.is_time_sensitive());
        assert!(!is_eligible(senators));
        assert!(catalog
            .all()
            .iter()
            .filter(|q| is_eligible(q))
            .all(|q| !q.answers.contains(&VARIES_ANSWER)));

        let mut rng = StdRng::seed_from_u64(4);
        let mut quiz = FillInBlankQuiz::new(catalog, 100, &mut rng);
        loop {
            assert!(!quiz.current().unwrap().is_time_sensitive());
            assert!(!quiz.blank().unwrap().display.contains("vary"));
            if !quiz.next(&mut rng) {
                break;
            }
        }
    }

    #[test]
    fn every_question_gets_a_blank() {
        let mut rng = StdRng::seed_from_u64(21);
        let mut quiz = FillInBlankQuiz::new(Catalog::standard(), 10, &mut rng);
        assert_eq!(quiz.len(), 10);
        loop {
            let blank = quiz.blank().unwrap();
            assert!(blank.display.contains(BLANK));
            assert!(is_eligible(quiz.current().unwrap()));
            if !quiz.next(&mut rng) {
                break;
            }
        }
    }

    #[test]
    fn canonical_answer_is_accepted() {
        let mut rng = StdRng::seed_from_u64(8);
        let mut quiz = FillInBlankQuiz::new(Catalog::standard(), 10, &mut rng);
        let canonical = quiz.blank().unwrap().canonical.clone();
        let attempt = quiz.submit(&canonical).unwrap();
        assert!(attempt.is_correct);
        assert_eq!(attempt.mode, StudyMode::FillInBlank);
        assert_eq!(quiz.score(), 1);
        assert!(quiz.submit(&canonical).is_none());
    }

    #[test]
    fn wrong_answer_reports_missing_key_words() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut quiz = FillInBlankQuiz::new(Catalog::standard(), 10, &mut rng);
        let attempt = quiz.submit("zzzz").unwrap();
        let result = quiz.last_result().unwrap();
        assert_eq!(attempt.is_correct, result.is_correct);
        assert_eq!(quiz.score(), usize::from(result.is_correct));
    }

    #[test]
    fn next_clears_previous_result() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut quiz = FillInBlankQuiz::new(Catalog::standard(), 3, &mut rng);
        quiz.submit("anything");
        assert!(quiz.next(&mut rng));
        assert!(!quiz.is_answered());
        assert!(quiz.next(&mut rng));
        assert!(!quiz.next(&mut rng));
    }
}
