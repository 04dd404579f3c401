//! Word-guessing game logic - difficulty tiers, limb plans, sessions.
//!
//! ## Components
//!
//! - **Words**: static word lists, one per difficulty tier
//! - **Rng**: xorshift32 generator seeded once at start-up
//! - **Session**: secret word, reveal buffer, remaining alphabet, counters

pub mod rng;
pub mod session;
pub mod words;

pub use rng::WordRng;
pub use session::{GameSession, Guess};

/// Difficulty tier selected from the menu.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

/// One drawable part of the hangman figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Limb {
    Head,
    Torso,
    ArmLeft,
    ArmRight,
    LegLeft,
    LegRight,
}

/// How a finished round ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    Won,
    Lost,
}

use Limb::*;

const EASY_STEPS: &[&[Limb]] = &[
    &[Head],
    &[Torso],
    &[ArmLeft],
    &[ArmRight],
    &[LegLeft],
    &[LegRight],
];
const MEDIUM_STEPS: &[&[Limb]] = &[&[Head, Torso], &[ArmLeft, ArmRight], &[LegLeft, LegRight]];
const HARD_STEPS: &[&[Limb]] = &[&[Head, Torso, ArmLeft], &[ArmRight, LegLeft, LegRight]];

impl Difficulty {
    /// Menu order.
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Difficulty at a menu index, if any.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "EASY",
            Difficulty::Medium => "MEDIUM",
            Difficulty::Hard => "HARD",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Difficulty::Easy => "Words are small",
            Difficulty::Medium => "Words are big",
            Difficulty::Hard => "Words are extra big",
        }
    }

    /// Figure parts revealed per wrong guess, in drawing order.
    ///
    /// Every plan draws the full six-part figure; the number of steps is
    /// the life budget.
    pub fn penalty_steps(self) -> &'static [&'static [Limb]] {
        match self {
            Difficulty::Easy => EASY_STEPS,
            Difficulty::Medium => MEDIUM_STEPS,
            Difficulty::Hard => HARD_STEPS,
        }
    }

    /// Wrong guesses tolerated before the round is lost.
    pub fn life_budget(self) -> usize {
        self.penalty_steps().len()
    }

    /// Limbs drawn for each wrong guess.
    pub fn limbs_per_miss(self) -> usize {
        self.penalty_steps()[0].len()
    }

    /// Limbs to draw for the `miss`-th wrong guess (1-based).
    pub fn limbs_for_miss(self, miss: usize) -> &'static [Limb] {
        miss.checked_sub(1)
            .and_then(|step| self.penalty_steps().get(step).copied())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn life_budgets() {
        assert_eq!(Difficulty::Easy.life_budget(), 6);
        assert_eq!(Difficulty::Medium.life_budget(), 3);
        assert_eq!(Difficulty::Hard.life_budget(), 2);
    }

    #[test]
    fn every_plan_draws_the_whole_figure_once() {
        for difficulty in Difficulty::ALL {
            let mut drawn: heapless::Vec<Limb, 6> = heapless::Vec::new();
            for step in difficulty.penalty_steps() {
                for limb in *step {
                    assert!(!drawn.contains(limb));
                    drawn.push(*limb).unwrap();
                }
            }
            assert_eq!(drawn.len(), 6);
        }
    }

    #[test]
    fn limbs_per_miss_matches_plan() {
        assert_eq!(Difficulty::Easy.limbs_per_miss(), 1);
        assert_eq!(Difficulty::Medium.limbs_per_miss(), 2);
        assert_eq!(Difficulty::Hard.limbs_per_miss(), 3);
    }

    #[test]
    fn limbs_for_miss_is_one_based_and_bounded() {
        assert!(Difficulty::Hard.limbs_for_miss(0).is_empty());
        assert_eq!(Difficulty::Hard.limbs_for_miss(1), &[Head, Torso, ArmLeft]);
        assert_eq!(Difficulty::Hard.limbs_for_miss(2), &[ArmRight, LegLeft, LegRight]);
        assert!(Difficulty::Hard.limbs_for_miss(3).is_empty());
    }

    #[test]
    fn index_roundtrip() {
        for (i, difficulty) in Difficulty::ALL.iter().enumerate() {
            assert_eq!(difficulty.index(), i);
            assert_eq!(Difficulty::from_index(i), Some(*difficulty));
        }
        assert_eq!(Difficulty::from_index(3), None);
    }
}
