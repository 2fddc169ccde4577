//! Core types for the civics study application.

use crate::error::CoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Main test section a question belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    AmericanGovernment,
    AmericanHistory,
    IntegratedCivics,
}

impl Category {
    /// All categories in test order.
    pub const ALL: [Category; 3] = [
        Self::AmericanGovernment,
        Self::AmericanHistory,
        Self::IntegratedCivics,
    ];

    /// Get the category name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AmericanGovernment => "AMERICAN_GOVERNMENT",
            Self::AmericanHistory => "AMERICAN_HISTORY",
            Self::IntegratedCivics => "INTEGRATED_CIVICS",
        }
    }

    /// Key of the display name in the translation tables.
    pub fn translation_key(&self) -> &'static str {
        match self {
            Self::AmericanGovernment => "category.americanGovernment",
            Self::AmericanHistory => "category.americanHistory",
            Self::IntegratedCivics => "category.integratedCivics",
        }
    }

    /// Category size assumed by the original progress page (34/33/33).
    pub fn legacy_size(&self) -> u32 {
        match self {
            Self::AmericanGovernment => 34,
            Self::AmericanHistory | Self::IntegratedCivics => 33,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AMERICAN_GOVERNMENT" => Ok(Self::AmericanGovernment),
            "AMERICAN_HISTORY" => Ok(Self::AmericanHistory),
            "INTEGRATED_CIVICS" => Ok(Self::IntegratedCivics),
            other => Err(CoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// Finer classification inside a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Subcategory {
    PrinciplesOfAmericanDemocracy,
    SystemOfGovernment,
    RightsAndResponsibilities,
    ColonialPeriodAndIndependence,
    #[serde(rename = "1800S")]
    The1800s,
    RecentAmericanHistory,
    Geography,
    Symbols,
    Holidays,
}

impl Subcategory {
    /// The category this subcategory is part of.
    pub const fn category(&self) -> Category {
        match self {
            Self::PrinciplesOfAmericanDemocracy
            | Self::SystemOfGovernment
            | Self::RightsAndResponsibilities => Category::AmericanGovernment,
            Self::ColonialPeriodAndIndependence | Self::The1800s | Self::RecentAmericanHistory => {
                Category::AmericanHistory
            }
            Self::Geography | Self::Symbols | Self::Holidays => Category::IntegratedCivics,
        }
    }
}

/// Study mode an attempt was made in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StudyMode {
    FlashCards,
    MultipleChoice,
    FillInBlank,
}

impl StudyMode {
    /// All study modes.
    pub const ALL: [StudyMode; 3] = [Self::FlashCards, Self::MultipleChoice, Self::FillInBlank];

    /// Get the mode name as stored.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FlashCards => "flashCards",
            Self::MultipleChoice => "multipleChoice",
            Self::FillInBlank => "fillInBlank",
        }
    }
}

impl fmt::Display for StudyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flashCards" => Ok(Self::FlashCards),
            "multipleChoice" => Ok(Self::MultipleChoice),
            "fillInBlank" => Ok(Self::FillInBlank),
            other => Err(CoreError::UnknownStudyMode(other.to_string())),
        }
    }
}

/// A civics test question. Questions live in a static table and are never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: u32,
    pub prompt: &'static str,
    /// Accepted answers; the first one is canonical.
    pub answers: &'static [&'static str],
    pub category: Category,
    pub subcategory: Subcategory,
    /// Part of the reduced set for applicants 65+ with 20+ years of residency.
    pub elderly_only: bool,
}

impl Question {
    /// The canonical (first) answer.
    pub fn canonical_answer(&self) -> &'static str {
        self.answers.first().copied().unwrap_or_default()
    }

    /// Whether the answer depends on where or when the test is taken.
    /// Such questions only carry the placeholder answer and cannot be graded.
    pub fn is_time_sensitive(&self) -> bool {
        self.answers.contains(&crate::catalog::VARIES_ANSWER)
    }

    /// Whether `answer` is one of the accepted answers, compared verbatim.
    pub fn accepts(&self, answer: &str) -> bool {
        self.answers.iter().any(|a| *a == answer)
    }
}

/// Counter pair for a study mode or category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tally {
    pub attempted: u32,
    pub correct: u32,
}

impl Tally {
    /// Count one attempt.
    pub fn record(&mut self, is_correct: bool) {
        self.attempted += 1;
        if is_correct {
            self.correct += 1;
        }
    }
}

impl std::ops::Add for Tally {
    type Output = Tally;

    fn add(self, rhs: Self) -> Self::Output {
        Tally {
            attempted: self.attempted + rhs.attempted,
            correct: self.correct + rhs.correct,
        }
    }
}

/// Per-question attempt history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttemptRecord {
    pub question_id: u32,
    pub attempted: u32,
    pub correct: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_attempted_at: Option<DateTime<Utc>>,
}

impl AttemptRecord {
    /// Empty record for a question that has not been attempted yet.
    pub fn new(question_id: u32) -> Self {
        Self {
            question_id,
            attempted: 0,
            correct: 0,
            last_attempted_at: None,
        }
    }
}

/// Outcome of answering a question in some study mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub question_id: u32,
    pub mode: StudyMode,
    pub is_correct: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl Attempt {
    /// Attempt on a catalog question, tagged with its category.
    pub fn for_question(question: &Question, mode: StudyMode, is_correct: bool) -> Self {
        Self {
            question_id: question.id,
            mode,
            is_correct,
            category: Some(question.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>(), Ok(category));
        }
        assert_eq!(
            "CIVICS".parse::<Category>(),
            Err(CoreError::UnknownCategory("CIVICS".to_string()))
        );
    }

    #[test]
    fn study_mode_serializes_camel_case() {
        let json = serde_json::to_string(&StudyMode::FillInBlank).unwrap();
        assert_eq!(json, "\"fillInBlank\"");
        assert_eq!("multipleChoice".parse::<StudyMode>(), Ok(StudyMode::MultipleChoice));
    }

    #[test]
    fn subcategory_1800s_uses_original_name() {
        let json = serde_json::to_string(&Subcategory::The1800s).unwrap();
        assert_eq!(json, "\"1800S\"");
        assert_eq!(Subcategory::The1800s.category(), Category::AmericanHistory);
    }

    #[test]
    fn tally_counts_correct_only_when_correct() {
        let mut tally = Tally::default();
        tally.record(true);
        tally.record(false);
        tally.record(true);
        assert_eq!(tally, Tally { attempted: 3, correct: 2 });
    }

    #[test]
    fn legacy_sizes() {
        assert_eq!(Category::AmericanGovernment.legacy_size(), 34);
        assert_eq!(Category::AmericanHistory.legacy_size(), 33);
        assert_eq!(Category::IntegratedCivics.legacy_size(), 33);
    }
}
