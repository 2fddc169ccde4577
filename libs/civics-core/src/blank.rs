//! Fill-in-the-blank prompt generation.
//!
//! The shortest accepted answer is used. Single-word answers are blanked
//! entirely; longer answers get `ceil(words / 2)` random blanks. Indices are
//! drawn with replacement, so the same word can be picked twice and fewer
//! words may end up blanked.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Text shown in place of a hidden word.
pub const BLANK: &str = "_______";

/// A masked answer ready for display plus the text it is checked against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlankedAnswer {
    /// The answer with some words replaced by [`BLANK`].
    pub display: String,
    /// Lowercased, trimmed answer used for checking.
    pub canonical: String,
}

/// First answer with the fewest characters.
pub fn shortest_answer<'a>(answers: &[&'a str]) -> Option<&'a str> {
    // min_by_key returns the first of several equal minimums
    answers.iter().copied().min_by_key(|answer| answer.chars().count())
}

/// Build a blanked answer from an answer set. Returns `None` for an empty set.
pub fn generate_blank<R: Rng + ?Sized>(answers: &[&str], rng: &mut R) -> Option<BlankedAnswer> {
    let answer = shortest_answer(answers)?;
    let canonical = answer.trim().to_lowercase();

    let mut words: Vec<&str> = answer.split_whitespace().collect();
    let display = if words.len() <= 1 {
        BLANK.to_string()
    } else {
        let blanks = words.len().div_ceil(2);
        for _ in 0..blanks {
            let index = rng.random_range(0..words.len());
            words[index] = BLANK;
        }
        words.join(" ")
    };

    Some(BlankedAnswer { display, canonical })
}

/// Number of blanks in a display string.
pub fn blank_count(display: &str) -> usize {
    display.split_whitespace().filter(|w| *w == BLANK).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_word_is_fully_blanked() {
        let mut rng = StdRng::seed_from_u64(1);
        let blank = generate_blank(&["Constitution"], &mut rng).unwrap();
        assert_eq!(blank.display, BLANK);
        assert_eq!(blank.canonical, "constitution");
    }

    #[test]
    fn two_words_get_one_blank() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let blank = generate_blank(&["the Constitution"], &mut rng).unwrap();
            let words: Vec<&str> = blank.display.split(' ').collect();
            assert_eq!(words.len(), 2);
            assert_eq!(blank_count(&blank.display), 1);
            assert!(words.contains(&"the") || words.contains(&"Constitution"));
            assert_eq!(blank.canonical, "the constitution");
        }
    }

    #[test]
    fn blanks_never_exceed_half_rounded_up() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let blank = generate_blank(&["protects basic rights of Americans"], &mut rng).unwrap();
            let hidden = blank_count(&blank.display);
            assert!((1..=3).contains(&hidden), "hidden = {hidden}");
            assert_eq!(blank.display.split(' ').count(), 5);
        }
    }

    #[test]
    fn shortest_answer_wins_and_ties_keep_order() {
        let answers = ["sets up the government", "press", "speech", "vote"];
        assert_eq!(shortest_answer(&answers), Some("vote"));
        assert_eq!(shortest_answer(&["life", "land", "liberty"]), Some("life"));
        assert_eq!(shortest_answer(&[]), None);
    }

    #[test]
    fn canonical_uses_shortest_answer() {
        let mut rng = StdRng::seed_from_u64(3);
        let answers = ["a change (to the Constitution)", "an addition (to the Constitution)"];
        let blank = generate_blank(&answers, &mut rng).unwrap();
        assert_eq!(blank.canonical, "a change (to the constitution)");
    }

    #[test]
    fn empty_answer_set_yields_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_blank(&[], &mut rng).is_none());
    }
}
