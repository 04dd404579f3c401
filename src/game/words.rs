//! Word bank, split by difficulty tier.

use super::{Difficulty, WordRng};

/// Four- and five-letter words.
pub const EASY_WORDS: &[&str] = &[
    "WINS", "LOSE", "BANK", "BIKE", "KITE", "FIGHT", "MIGHT", "BEACH", "ADULT", "STACK",
];

/// Six-letter words.
pub const MEDIUM_WORDS: &[&str] = &["STRING", "FLIGHT", "ENTITY", "EMPIRE", "FOLLOW"];

/// Seven-letter words.
pub const HARD_WORDS: &[&str] = &[
    "ALCOHOL", "COLLEGE", "CAPTURE", "FICTION", "DESPITE", "ONGOING", "OUTSIDE", "PACKAGE",
    "OVERALL", "NOTHING",
];

pub fn words_for(difficulty: Difficulty) -> &'static [&'static str] {
    match difficulty {
        Difficulty::Easy => EASY_WORDS,
        Difficulty::Medium => MEDIUM_WORDS,
        Difficulty::Hard => HARD_WORDS,
    }
}

/// Pick a word for `difficulty` uniformly at random.
pub fn choose_word(difficulty: Difficulty, rng: &mut WordRng) -> &'static str {
    let words = words_for(difficulty);
    words[rng.below(words.len())]
}
