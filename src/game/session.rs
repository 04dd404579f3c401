//! One round of Hangman: secret word, reveal buffer, remaining alphabet.

use heapless::{String, Vec};

use super::words::choose_word;
use super::{Difficulty, Outcome, WordRng};
use crate::config::{ALPHABET_LEN, CORRECT_LETTER_REWARD, MAX_WORD_LEN, WRONG_GUESS_PENALTY};
use crate::error::Error;

/// Shown in the reveal buffer for letters not yet guessed.
pub const PLACEHOLDER: u8 = b'_';

/// Result of a single guess.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Guess {
    /// The letter occurs in the word; `revealed` positions were filled.
    Hit { revealed: usize },
    /// The letter does not occur in the word.
    Miss,
}

impl Guess {
    pub fn is_hit(&self) -> bool {
        matches!(self, Guess::Hit { .. })
    }
}

#[derive(Clone, Debug)]
pub struct GameSession {
    difficulty: Difficulty,
    secret: String<MAX_WORD_LEN>,
    reveal: Vec<u8, MAX_WORD_LEN>,
    remaining: Vec<u8, ALPHABET_LEN>,
    wrong_guesses: usize,
    correct_guesses: usize,
    score: i32,
}

impl GameSession {
    /// Start a session with a random word for `difficulty`.
    pub fn start(difficulty: Difficulty, rng: &mut WordRng) -> Self {
        let word = choose_word(difficulty, rng);
        // Word bank entries are validated by tests; fall back to an empty
        // round rather than panicking.
        Self::with_word(difficulty, word).unwrap_or_else(|_| Self::blank(difficulty))
    }

    /// Start a session with a fixed word.
    pub fn with_word(difficulty: Difficulty, word: &str) -> Result<Self, Error> {
        let mut session = Self::blank(difficulty);
        session.load_word(word)?;
        Ok(session)
    }

    fn blank(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            secret: String::new(),
            reveal: Vec::new(),
            remaining: Vec::new(),
            wrong_guesses: 0,
            correct_guesses: 0,
            score: 0,
        }
    }

    /// Choose a fresh word and clear all per-round state.
    pub fn reset(&mut self, difficulty: Difficulty, rng: &mut WordRng) {
        *self = Self::start(difficulty, rng);
    }

    fn load_word(&mut self, word: &str) -> Result<(), Error> {
        if word.is_empty() || !word.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(Error::InvalidWord);
        }

        self.secret.clear();
        self.secret.push_str(word).map_err(|_| Error::InvalidWord)?;

        self.reveal.clear();
        for _ in 0..word.len() {
            self.reveal
                .push(PLACEHOLDER)
                .map_err(|_| Error::BufferOverflow)?;
        }

        self.remaining.clear();
        for letter in b'A'..=b'Z' {
            self.remaining
                .push(letter)
                .map_err(|_| Error::BufferOverflow)?;
        }

        self.wrong_guesses = 0;
        self.correct_guesses = 0;
        self.score = 0;
        Ok(())
    }

    /// Evaluate a guess and take the letter out of the pool.
    ///
    /// Every occurrence is revealed at once and rewarded per position.
    /// Win/loss is not decided here; see [`GameSession::outcome`].
    pub fn submit_guess(&mut self, letter: u8) -> Result<Guess, Error> {
        let pool_index = self
            .remaining
            .iter()
            .position(|&l| l == letter)
            .ok_or(Error::LetterUnavailable)?;
        self.remaining.remove(pool_index);

        let mut revealed = 0;
        for (slot, &secret) in self.reveal.iter_mut().zip(self.secret.as_bytes()) {
            if secret == letter {
                *slot = letter;
                revealed += 1;
            }
        }

        if revealed > 0 {
            self.correct_guesses += revealed;
            self.score += CORRECT_LETTER_REWARD * revealed as i32;
            debug!("hit {} x{}", letter as char, revealed);
            Ok(Guess::Hit { revealed })
        } else {
            self.wrong_guesses += 1;
            self.score -= WRONG_GUESS_PENALTY;
            debug!("miss {} ({} wrong)", letter as char, self.wrong_guesses);
            Ok(Guess::Miss)
        }
    }

    pub fn is_won(&self) -> bool {
        !self.secret.is_empty() && self.correct_guesses == self.secret.len()
    }

    pub fn is_lost(&self) -> bool {
        self.wrong_guesses >= self.difficulty.life_budget()
    }

    /// Loss takes precedence, matching the order the game loop checks in.
    pub fn outcome(&self) -> Option<Outcome> {
        if self.is_lost() {
            Some(Outcome::Lost)
        } else if self.is_won() {
            Some(Outcome::Won)
        } else {
            None
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn secret(&self) -> &str {
        self.secret.as_str()
    }

    /// Partially revealed word, `_` for unguessed positions.
    pub fn reveal(&self) -> &str {
        core::str::from_utf8(&self.reveal).unwrap_or("")
    }

    /// Letters still on offer, in alphabetical order.
    pub fn remaining(&self) -> &[u8] {
        &self.remaining
    }

    pub fn wrong_guesses(&self) -> usize {
        self.wrong_guesses
    }

    pub fn correct_guesses(&self) -> usize {
        self.correct_guesses
    }

    pub fn score(&self) -> i32 {
        self.score
    }
}
