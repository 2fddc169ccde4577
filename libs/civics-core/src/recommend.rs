//! Study recommendations derived from progress percentages.

use crate::progress::ProgressReport;
use crate::types::{Category, StudyMode};
use serde::{Deserialize, Serialize};

/// Overall completion below which new users are pointed at flash cards.
pub const BEGINNER_COMPLETION: u32 = 30;

/// A suggestion shown on the progress page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Recommendation {
    StartWithFlashCards,
    FocusOnAmericanHistory,
    PracticeFillInBlank,
    ReviewElderlyQuestions,
}

impl Recommendation {
    /// Study mode the recommendation links to.
    pub fn study_mode(&self) -> StudyMode {
        match self {
            Self::PracticeFillInBlank => StudyMode::FillInBlank,
            Self::StartWithFlashCards | Self::FocusOnAmericanHistory | Self::ReviewElderlyQuestions => {
                StudyMode::FlashCards
            }
        }
    }
}

/// Recommendations in display order. The 65+ review is always included.
pub fn recommendations(report: &ProgressReport<'_>) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if report.completion_percentage(None) < BEGINNER_COMPLETION {
        out.push(Recommendation::StartWithFlashCards);
    }

    if report.category_completion_percentage(Category::AmericanHistory)
        < report.category_completion_percentage(Category::AmericanGovernment)
    {
        out.push(Recommendation::FocusOnAmericanHistory);
    }

    if report.accuracy_percentage(Some(StudyMode::FillInBlank))
        < report.accuracy_percentage(Some(StudyMode::MultipleChoice))
    {
        out.push(Recommendation::PracticeFillInBlank);
    }

    out.push(Recommendation::ReviewElderlyQuestions);
    out
}
