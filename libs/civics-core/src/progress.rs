//! Progress counters and the percentages shown on the progress page.

use crate::catalog::Catalog;
use crate::types::{Attempt, AttemptRecord, Category, StudyMode, Tally};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Number of study modes; the overall completion denominator is questions times modes.
const MODE_COUNT: usize = StudyMode::ALL.len();

/// Question count assumed by the original progress page.
const LEGACY_QUESTION_COUNT: usize = 100;

/// How completion denominators are computed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CompletionBasis {
    /// Denominators come from the live catalog and category completion only
    /// counts questions of that category.
    #[default]
    Catalog,
    /// Fixed 100/300 and 34/33/33 denominators with a category-blind count of
    /// attempted questions, matching the original numbers exactly.
    Legacy,
}

impl CompletionBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Catalog => "catalog",
            Self::Legacy => "legacy",
        }
    }

    /// Parse from string.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "catalog" => Some(Self::Catalog),
            "legacy" => Some(Self::Legacy),
            _ => None,
        }
    }
}

/// All counters for one identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressStore {
    pub questions: BTreeMap<u32, AttemptRecord>,
    pub categories: BTreeMap<Category, Tally>,
    pub modes: BTreeMap<StudyMode, Tally>,
}

impl Default for ProgressStore {
    fn default() -> Self {
        Self {
            questions: BTreeMap::new(),
            categories: Category::ALL.iter().map(|c| (*c, Tally::default())).collect(),
            modes: StudyMode::ALL.iter().map(|m| (*m, Tally::default())).collect(),
        }
    }
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one attempt against the question, its mode and (if given) its category.
    pub fn record_attempt(
        &mut self,
        question_id: u32,
        mode: StudyMode,
        is_correct: bool,
        category: Option<Category>,
        at: DateTime<Utc>,
    ) {
        let record = self
            .questions
            .entry(question_id)
            .or_insert_with(|| AttemptRecord::new(question_id));
        record.attempted += 1;
        if is_correct {
            record.correct += 1;
        }
        record.last_attempted_at = Some(at);

        if let Some(category) = category {
            self.categories.entry(category).or_default().record(is_correct);
        }

        self.modes.entry(mode).or_default().record(is_correct);
    }

    /// Count an attempt produced by a study session.
    pub fn record(&mut self, attempt: &Attempt, at: DateTime<Utc>) {
        self.record_attempt(
            attempt.question_id,
            attempt.mode,
            attempt.is_correct,
            attempt.category,
            at,
        );
    }

    /// Zero every tally and drop all question records.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn question(&self, question_id: u32) -> Option<&AttemptRecord> {
        self.questions.get(&question_id)
    }

    pub fn category_tally(&self, category: Category) -> Tally {
        self.categories.get(&category).copied().unwrap_or_default()
    }

    pub fn mode_tally(&self, mode: StudyMode) -> Tally {
        self.modes.get(&mode).copied().unwrap_or_default()
    }

    /// Sum of all mode tallies.
    pub fn total(&self) -> Tally {
        self.modes.values().fold(Tally::default(), |acc, t| acc + *t)
    }

    /// Ids of questions attempted at least once.
    pub fn attempted_question_ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.questions
            .values()
            .filter(|r| r.attempted > 0)
            .map(|r| r.question_id)
    }

    /// Number of distinct questions attempted in any mode.
    pub fn unique_attempted(&self) -> usize {
        self.attempted_question_ids().count()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty() && self.total().attempted == 0
    }
}

/// `round(100 * part / whole)`, or 0 when `whole` is 0.
pub fn percentage(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as u32
}

fn completion(part: usize, whole: usize) -> u32 {
    percentage(part, whole).min(100)
}

fn accuracy(tally: Tally) -> u32 {
    percentage(tally.correct as usize, tally.attempted as usize)
}

/// Percentages over a progress store.
#[derive(Debug, Clone, Copy)]
pub struct ProgressReport<'a> {
    store: &'a ProgressStore,
    catalog: Catalog,
    basis: CompletionBasis,
}

impl<'a> ProgressReport<'a> {
    pub fn new(store: &'a ProgressStore, catalog: Catalog, basis: CompletionBasis) -> Self {
        Self {
            store,
            catalog,
            basis,
        }
    }

    /// Completion for one mode, or overall when `mode` is `None`.
    ///
    /// Per-mode completion counts distinct questions attempted in any mode.
    /// Overall completion counts every attempt against questions times modes.
    pub fn completion_percentage(&self, mode: Option<StudyMode>) -> u32 {
        let questions = self.question_count();
        match mode {
            Some(_) => completion(self.store.unique_attempted(), questions),
            None => completion(self.store.total().attempted as usize, questions * MODE_COUNT),
        }
    }

    /// Accuracy for one mode, or across all modes when `mode` is `None`.
    pub fn accuracy_percentage(&self, mode: Option<StudyMode>) -> u32 {
        match mode {
            Some(mode) => accuracy(self.store.mode_tally(mode)),
            None => accuracy(self.store.total()),
        }
    }

    pub fn category_completion_percentage(&self, category: Category) -> u32 {
        match self.basis {
            CompletionBasis::Catalog => {
                let attempted = self
                    .store
                    .attempted_question_ids()
                    .filter_map(|id| self.catalog.get(id))
                    .filter(|q| q.category == category)
                    .map(|q| q.id)
                    .collect::<HashSet<_>>()
                    .len();
                completion(attempted, self.catalog.category_size(category))
            }
            CompletionBasis::Legacy => completion(
                self.store.unique_attempted(),
                category.legacy_size() as usize,
            ),
        }
    }

    pub fn category_accuracy_percentage(&self, category: Category) -> u32 {
        accuracy(self.store.category_tally(category))
    }

    /// Estimated test readiness: overall completion weighted by overall accuracy.
    pub fn readiness_percentage(&self) -> u32 {
        let product = self.completion_percentage(None) * self.accuracy_percentage(None);
        (product as f64 / 100.0).round() as u32
    }

    /// Every figure on the progress page at once.
    pub fn summary(&self) -> ProgressSummary {
        ProgressSummary {
            completion: self.completion_percentage(None),
            accuracy: self.accuracy_percentage(None),
            readiness: self.readiness_percentage(),
            modes: StudyMode::ALL
                .iter()
                .map(|mode| ModeSummary {
                    mode: *mode,
                    completion: self.completion_percentage(Some(*mode)),
                    accuracy: self.accuracy_percentage(Some(*mode)),
                })
                .collect(),
            categories: Category::ALL
                .iter()
                .map(|category| CategorySummary {
                    category: *category,
                    question_count: self.catalog.category_size(*category),
                    completion: self.category_completion_percentage(*category),
                    accuracy: self.category_accuracy_percentage(*category),
                })
                .collect(),
        }
    }

    fn question_count(&self) -> usize {
        match self.basis {
            CompletionBasis::Catalog => self.catalog.len(),
            CompletionBasis::Legacy => LEGACY_QUESTION_COUNT,
        }
    }
}

/// Progress page figures, all percentages in `0..=100`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSummary {
    pub completion: u32,
    pub accuracy: u32,
    pub readiness: u32,
    pub modes: Vec<ModeSummary>,
    pub categories: Vec<CategorySummary>,
}

impl ProgressSummary {
    /// All-zero summary shown while nobody is signed in.
    pub fn empty(catalog: Catalog) -> Self {
        ProgressReport::new(&ProgressStore::default(), catalog, CompletionBasis::Catalog).summary()
    }

    pub fn mode(&self, mode: StudyMode) -> Option<&ModeSummary> {
        self.modes.iter().find(|m| m.mode == mode)
    }

    pub fn category(&self, category: Category) -> Option<&CategorySummary> {
        self.categories.iter().find(|c| c.category == category)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModeSummary {
    pub mode: StudyMode,
    pub completion: u32,
    pub accuracy: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub question_count: usize,
    pub completion: u32,
    pub accuracy: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    fn report(store: &ProgressStore, basis: CompletionBasis) -> ProgressReport<'_> {
        ProgressReport::new(store, Catalog::standard(), basis)
    }

    #[test]
    fn new_store_has_zeroed_tallies() {
        let store = ProgressStore::new();
        assert_eq!(store.categories.len(), 3);
        assert_eq!(store.modes.len(), 3);
        assert_eq!(store.total(), Tally::default());
        assert!(store.is_empty());
    }

    #[test]
    fn repeated_attempts_accumulate() {
        let mut store = ProgressStore::new();
        let cat = Some(Category::AmericanGovernment);
        store.record_attempt(1, StudyMode::FillInBlank, true, cat, now());
        store.record_attempt(1, StudyMode::FillInBlank, false, cat, now());
        store.record_attempt(1, StudyMode::FillInBlank, true, cat, now());

        let record = store.question(1).unwrap();
        assert_eq!((record.attempted, record.correct), (3, 2));
        assert!(record.last_attempted_at.is_some());
        assert_eq!(
            store.mode_tally(StudyMode::FillInBlank),
            Tally { attempted: 3, correct: 2 }
        );
        assert_eq!(store.mode_tally(StudyMode::FlashCards), Tally::default());
        assert_eq!(
            store.category_tally(Category::AmericanGovernment),
            Tally { attempted: 3, correct: 2 }
        );
    }

    #[test]
    fn attempt_without_category_leaves_categories_alone() {
        let mut store = ProgressStore::new();
        store.record_attempt(5, StudyMode::FlashCards, true, None, now());
        for category in Category::ALL {
            assert_eq!(store.category_tally(category), Tally::default());
        }
        assert_eq!(store.total(), Tally { attempted: 1, correct: 1 });
    }

    #[test]
    fn correct_never_exceeds_attempted() {
        let mut store = ProgressStore::new();
        for i in 0..200u32 {
            let mode = StudyMode::ALL[(i % 3) as usize];
            let category = Category::ALL[(i % 3) as usize];
            store.record_attempt(i % 17 + 1, mode, i % 4 != 0, Some(category), now());
        }
        assert!(store.questions.values().all(|r| r.correct <= r.attempted));
        assert!(store.modes.values().all(|t| t.correct <= t.attempted));
        assert!(store.categories.values().all(|t| t.correct <= t.attempted));
    }

    #[test]
    fn accuracy_is_zero_without_attempts() {
        let store = ProgressStore::new();
        let report = report(&store, CompletionBasis::Catalog);
        assert_eq!(report.accuracy_percentage(None), 0);
        for mode in StudyMode::ALL {
            assert_eq!(report.accuracy_percentage(Some(mode)), 0);
        }
        for category in Category::ALL {
            assert_eq!(report.category_accuracy_percentage(category), 0);
        }
    }

    #[test]
    fn accuracy_rounds_half_up() {
        let mut store = ProgressStore::new();
        store.record_attempt(1, StudyMode::MultipleChoice, true, None, now());
        store.record_attempt(2, StudyMode::MultipleChoice, true, None, now());
        store.record_attempt(3, StudyMode::MultipleChoice, false, None, now());
        let mc = report(&store, CompletionBasis::Catalog);
        assert_eq!(mc.accuracy_percentage(Some(StudyMode::MultipleChoice)), 67);

        let mut store = ProgressStore::new();
        store.record_attempt(1, StudyMode::FlashCards, true, None, now());
        store.record_attempt(2, StudyMode::FlashCards, false, None, now());
        assert_eq!(report(&store, CompletionBasis::Catalog).accuracy_percentage(None), 50);
    }

    #[test]
    fn mode_completion_counts_unique_questions_from_any_mode() {
        let mut store = ProgressStore::new();
        store.record_attempt(1, StudyMode::FlashCards, true, None, now());
        store.record_attempt(1, StudyMode::FlashCards, true, None, now());
        store.record_attempt(2, StudyMode::MultipleChoice, false, None, now());
        let report = report(&store, CompletionBasis::Catalog);
        // 2 distinct questions out of 100, whichever mode is asked about
        assert_eq!(report.completion_percentage(Some(StudyMode::FillInBlank)), 2);
        // 3 attempts out of 300
        assert_eq!(report.completion_percentage(None), 1);
    }

    #[test]
    fn overall_completion_is_clamped() {
        let mut store = ProgressStore::new();
        for i in 0..400u32 {
            store.record_attempt(i % 100 + 1, StudyMode::FlashCards, true, None, now());
        }
        let report = report(&store, CompletionBasis::Legacy);
        assert_eq!(report.completion_percentage(None), 100);
        assert_eq!(report.completion_percentage(Some(StudyMode::FlashCards)), 100);
    }

    #[test]
    fn legacy_category_completion_is_category_blind() {
        let mut store = ProgressStore::new();
        // ten government questions only
        for id in 1..=10 {
            store.record_attempt(id, StudyMode::FlashCards, true, Some(Category::AmericanGovernment), now());
        }
        let legacy = report(&store, CompletionBasis::Legacy);
        assert_eq!(legacy.category_completion_percentage(Category::AmericanGovernment), 29);
        assert_eq!(legacy.category_completion_percentage(Category::IntegratedCivics), 30);

        let catalog = report(&store, CompletionBasis::Catalog);
        assert_eq!(catalog.category_completion_percentage(Category::AmericanGovernment), 18);
        assert_eq!(catalog.category_completion_percentage(Category::IntegratedCivics), 0);
    }

    #[test]
    fn readiness_combines_completion_and_accuracy() {
        let mut store = ProgressStore::new();
        for id in 1..=100 {
            store.record_attempt(id, StudyMode::FlashCards, id % 2 == 0, None, now());
            store.record_attempt(id, StudyMode::MultipleChoice, id % 2 == 0, None, now());
            store.record_attempt(id, StudyMode::FillInBlank, id % 2 == 0, None, now());
        }
        let report = report(&store, CompletionBasis::Catalog);
        assert_eq!(report.completion_percentage(None), 100);
        assert_eq!(report.accuracy_percentage(None), 50);
        assert_eq!(report.readiness_percentage(), 50);
    }

    #[test]
    fn reset_zeroes_everything() {
        let mut store = ProgressStore::new();
        store.record_attempt(3, StudyMode::FillInBlank, true, Some(Category::AmericanGovernment), now());
        store.reset();
        assert_eq!(store, ProgressStore::default());

        let summary = report(&store, CompletionBasis::Catalog).summary();
        assert_eq!(summary, ProgressSummary::empty(Catalog::standard()));
        assert_eq!(summary.completion, 0);
        assert!(summary.modes.iter().all(|m| m.completion == 0 && m.accuracy == 0));
        assert!(summary.categories.iter().all(|c| c.completion == 0 && c.accuracy == 0));
    }

    #[test]
    fn store_survives_json() {
        let mut store = ProgressStore::new();
        store.record_attempt(42, StudyMode::MultipleChoice, true, Some(Category::AmericanGovernment), now());
        let json = serde_json::to_string(&store).unwrap();
        assert!(json.contains("\"AMERICAN_GOVERNMENT\""));
        assert!(json.contains("\"multipleChoice\""));
        let back: ProgressStore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, store);
    }

    #[test]
    fn basis_parses() {
        assert_eq!(CompletionBasis::parse("legacy"), Some(CompletionBasis::Legacy));
        assert_eq!(CompletionBasis::parse("catalog"), Some(CompletionBasis::Catalog));
        assert_eq!(CompletionBasis::parse("other"), None);
    }
}
