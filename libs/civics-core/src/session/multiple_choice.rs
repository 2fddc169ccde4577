//! Multiple-choice quiz over a random selection of questions.

use super::StudySession;
use crate::catalog::Catalog;
use crate::types::{Attempt, Question, StudyMode};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Wrong options offered next to the correct one.
pub const DISTRACTOR_COUNT: usize = 3;

/// Shuffled options for `question`: its canonical answer plus distinct
/// canonical answers of other quizzable questions that differ from it.
pub fn build_options<R: Rng + ?Sized>(
    catalog: &Catalog,
    question: &Question,
    rng: &mut R,
) -> Vec<&'static str> {
    let correct = question.canonical_answer();

    // Several questions share an answer ("the President")
    let pool: BTreeSet<&'static str> = catalog
        .quizzable()
        .into_iter()
        .filter(|q| q.id != question.id)
        .map(|q| q.canonical_answer())
        .filter(|a| *a != correct)
        .collect();

    let mut distractors: Vec<&'static str> = pool.into_iter().collect();
    distractors.shuffle(rng);
    distractors.truncate(DISTRACTOR_COUNT);

    let mut options = distractors;
    options.push(correct);
    options.shuffle(rng);
    options
}

#[derive(Debug, Clone)]
pub struct MultipleChoiceQuiz {
    catalog: Catalog,
    length: usize,
    questions: Vec<&'static Question>,
    index: usize,
    options: Vec<&'static str>,
    answered: Option<bool>,
    score: usize,
}

impl MultipleChoiceQuiz {
    /// Quiz of `length` random questions.
    pub fn new<R: Rng + ?Sized>(catalog: Catalog, length: usize, rng: &mut R) -> Self {
        let mut quiz = Self {
            catalog,
            length,
            questions: Vec::new(),
            index: 0,
            options: Vec::new(),
            answered: None,
            score: 0,
        };
        quiz.restart(rng);
        quiz
    }

    /// Draw a fresh set of quizzable questions and clear the score.
    pub fn restart<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.questions = self.catalog.random(self.length, rng);
        self.index = 0;
        self.score = 0;
        self.load_question(rng);
    }

    pub fn options(&self) -> &[&'static str] {
        &self.options
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn is_answered(&self) -> bool {
        self.answered.is_some()
    }

    /// Correctness of the submitted answer for the current question.
    pub fn last_result(&self) -> Option<bool> {
        self.answered
    }

    /// Answer the current question. Any accepted answer counts as correct.
    /// Returns `None` if there is no question or it was already answered.
    pub fn submit(&mut self, selected: &str) -> Option<Attempt> {
        if self.answered.is_some() {
            return None;
        }
        let question = self.current()?;
        let is_correct = question.accepts(selected);
        if is_correct {
            self.score += 1;
        }
        self.answered = Some(is_correct);
        Some(Attempt::for_question(question, StudyMode::MultipleChoice, is_correct))
    }

    /// Move to the next question. Returns false on the last question.
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
        self.answered = None;
        self.options = match self.current() {
            Some(question) => build_options(&self.catalog, question, rng),
            None => Vec::new(),
        };
    }
}

impl StudySession for MultipleChoiceQuiz {
    fn mode(&self) -> StudyMode {
        StudyMode::MultipleChoice
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
    use crate::catalog::VARIES_ANSWER;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn quiz(seed: u64) -> (MultipleChoiceQuiz, StdRng) {
        let mut rng = StdRng::seed_from_u64(seed);
        let quiz = MultipleChoiceQuiz::new(Catalog::standard(), 10, &mut rng);
        (quiz, rng)
    }

    #[test]
    fn options_contain_correct_answer_once() {
        let (quiz, _) = quiz(11);
        let question = quiz.current().unwrap();
        let correct = question.canonical_answer();
        assert_eq!(quiz.options().len(), 4);
        assert_eq!(quiz.options().iter().filter(|o| **o == correct).count(), 1);
    }

    #[test]
    fn correct_submission_scores() {
        let (mut quiz, _) = quiz(5);
        let answer = quiz.current().unwrap().canonical_answer();
        let attempt = quiz.submit(answer).unwrap();
        assert!(attempt.is_correct);
        assert_eq!(attempt.mode, StudyMode::MultipleChoice);
        assert_eq!(quiz.score(), 1);
        assert_eq!(quiz.last_result(), Some(true));
    }

    #[test]
    fn any_accepted_answer_is_correct() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut quiz = MultipleChoiceQuiz::new(Catalog::standard(), 100, &mut rng);
        while quiz.current().map(|q| q.id) != Some(6) {
            assert!(quiz.next(&mut rng));
        }
        assert!(quiz.submit("press").unwrap().is_correct);
    }

    #[test]
    fn second_submission_is_ignored() {
        let (mut quiz, _) = quiz(9);
        assert!(quiz.submit("definitely wrong").is_some());
        assert!(quiz.submit("definitely wrong").is_none());
        assert_eq!(quiz.score(), 0);
    }

    #[test]
    fn next_clears_answer_until_last() {
        let (mut quiz, mut rng) = quiz(3);
        quiz.submit("x");
        assert!(quiz.next(&mut rng));
        assert!(!quiz.is_answered());
        for _ in 0..8 {
            assert!(quiz.next(&mut rng));
        }
        assert!(quiz.is_last());
        assert!(!quiz.next(&mut rng));
        assert_eq!(quiz.progress_percentage(), 100);
    }

    #[test]
    fn options_are_always_distinct() {
        let catalog = Catalog::standard();
        for id in [1, 15, 32] {
            let question = catalog.get(id).unwrap();
            for seed in 0..500 {
                let mut rng = StdRng::seed_from_u64(seed);
                let options = build_options(&catalog, question, &mut rng);
                let distinct: BTreeSet<&str> = options.iter().copied().collect();
                assert_eq!(distinct.len(), 4, "question {id}, seed {seed}: {options:?}");
                assert!(!options.contains(&VARIES_ANSWER));
            }
        }
    }

    #[test]
    fn quiz_skips_time_sensitive_questions() {
        let mut rng = StdRng::seed_from_u64(20);
        let mut quiz = MultipleChoiceQuiz::new(Catalog::standard(), 100, &mut rng);
        assert_eq!(quiz.len(), Catalog::standard().quizzable().len());
        loop {
            let question = quiz.current().unwrap();
            assert!(!question.is_time_sensitive());
            assert!(!quiz.options().contains(&VARIES_ANSWER));
            if !quiz.next(&mut rng) {
                break;
            }
        }
    }

    #[test]
    fn restart_clears_score() {
        let (mut quiz, mut rng) = quiz(4);
        let answer = quiz.current().unwrap().canonical_answer();
        quiz.submit(answer);
        quiz.restart(&mut rng);
        assert_eq!(quiz.score(), 0);
        assert_eq!(quiz.position(), 0);
        assert_eq!(quiz.len(), 10);
    }
}
