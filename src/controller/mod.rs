//! Mode controller - owns all game state and routes encoder events.
//!
//! ## Modes
//!
//! ```text
//!   Menu ──Start──────────► Game ──lost / won with score ≤ 0──► Menu
//!    │  ──Difficulty──► Difficulty ──select──► Menu              │
//!    │  ──Leaderboard─► LeaderboardView ──select──► Menu     won, score > 0
//!    │                                                            ▼
//!    ◄──────────────── third letter ──────────────── LeaderboardEntry
//! ```
//!
//! Every return to the menu resets the session with the current
//! difficulty. Entering a mode sets `first_entry`, which makes the next
//! [`Controller::render`] clear the screen and draw the static layout;
//! afterwards only changed fields are repainted.

#[cfg(test)]
mod tests;

use heapless::Vec;

use crate::config::{ALPHABET_LEN, NAME_LEN};
use crate::game::{Difficulty, GameSession, Guess, Outcome, WordRng};
use crate::leaderboard::{Leaderboard, LeaderboardEntry};
use crate::store::RecordStore;
use crate::ui::input_logic::{clamp_wrap, step};
use crate::ui::screens::{self, MENU_ITEMS};
use crate::ui::{DisplaySink, InputEvent};

/// Main menu rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MenuItem {
    Start,
    Difficulty,
    Leaderboard,
}

impl MenuItem {
    pub const ALL: [MenuItem; 3] = [MenuItem::Start, MenuItem::Difficulty, MenuItem::Leaderboard];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Current screen together with its cursor state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Menu { selected: usize },
    Difficulty { selected: usize },
    /// `letter` indexes the session's remaining letters.
    Game { letter: usize },
    LeaderboardView,
    /// `letter` indexes `A..=Z`; `name` holds the letters chosen so far.
    LeaderboardEntry { letter: usize, name: Vec<u8, NAME_LEN> },
}

/// Discriminant of [`Mode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ModeKind {
    Menu,
    Difficulty,
    Game,
    LeaderboardView,
    LeaderboardEntry,
}

impl Mode {
    pub fn kind(&self) -> ModeKind {
        match self {
            Mode::Menu { .. } => ModeKind::Menu,
            Mode::Difficulty { .. } => ModeKind::Difficulty,
            Mode::Game { .. } => ModeKind::Game,
            Mode::LeaderboardView => ModeKind::LeaderboardView,
            Mode::LeaderboardEntry { .. } => ModeKind::LeaderboardEntry,
        }
    }
}

pub struct Controller<S> {
    mode: Mode,
    difficulty: Difficulty,
    session: GameSession,
    leaderboard: Leaderboard,
    store: S,
    rng: WordRng,
    /// Next render does a full redraw.
    first_entry: bool,
    /// Dynamic fields changed since the last render.
    dirty: bool,
    /// Wrong guesses whose limbs are already on screen.
    limbs_drawn: usize,
    /// Last leaderboard load or save failed.
    store_fault: bool,
}

impl<S: RecordStore> Controller<S> {
    /// Start in the menu on EASY, with the leaderboard read from `store`.
    pub fn new(store: S, seed: u32) -> Self {
        let mut rng = WordRng::new(seed);
        let difficulty = Difficulty::default();
        let session = GameSession::start(difficulty, &mut rng);
        let mut controller = Self {
            mode: Mode::Menu { selected: 0 },
            difficulty,
            session,
            leaderboard: Leaderboard::new(),
            store,
            rng,
            first_entry: true,
            dirty: true,
            limbs_drawn: 0,
            store_fault: false,
        };
        controller.reload_leaderboard();
        controller
    }

    /// Apply one input event to the current mode.
    pub fn handle(&mut self, event: InputEvent) {
        match event {
            InputEvent::Rotate(direction) => {
                let len = self.cursor_len();
                if let Some(cursor) = self.cursor_mut() {
                    *cursor = step(*cursor, len, direction);
                    self.dirty = true;
                }
            }
            InputEvent::Select => self.select(),
        }
    }

    /// Check the running round for a win or loss and leave the game screen
    /// if it ended. Returns the outcome so the caller can show a banner.
    pub fn tick(&mut self) -> Option<Outcome> {
        if self.mode.kind() != ModeKind::Game {
            return None;
        }

        let outcome = self.session.outcome()?;
        match outcome {
            Outcome::Won if self.session.score() > 0 => {
                info!("round won with {} points", self.session.score());
                self.enter(Mode::LeaderboardEntry {
                    letter: 0,
                    name: Vec::new(),
                });
            }
            Outcome::Won => {
                info!("round won without points");
                self.return_to_menu();
            }
            Outcome::Lost => {
                info!("round lost, word was {}", self.session.secret());
                self.return_to_menu();
            }
        }
        Some(outcome)
    }

    /// Draw whatever changed since the last call.
    pub fn render<D: DisplaySink>(&mut self, display: &mut D) {
        if !self.first_entry && !self.dirty {
            return;
        }
        let full = core::mem::replace(&mut self.first_entry, false);
        self.dirty = false;

        match &self.mode {
            Mode::Menu { selected } => {
                if full {
                    screens::menu_static(display, self.store_fault);
                }
                screens::menu_cursor(display, *selected);
            }
            Mode::Difficulty { selected } => {
                if full {
                    screens::difficulty_static(display);
                }
                let option = Difficulty::from_index(*selected).unwrap_or_default();
                screens::difficulty_option(display, option);
            }
            Mode::Game { letter } => {
                if full {
                    screens::game_static(display);
                    self.limbs_drawn = 0;
                }
                let session = &self.session;
                screens::game_reveal(display, session.reveal());
                screens::game_score(display, session.score());
                if let Some(&c) = session.remaining().get(*letter) {
                    screens::game_cursor(
                        display,
                        c,
                        session.wrong_guesses(),
                        session.difficulty().life_budget(),
                    );
                }
                while self.limbs_drawn < session.wrong_guesses() {
                    self.limbs_drawn += 1;
                    for &limb in session.difficulty().limbs_for_miss(self.limbs_drawn) {
                        screens::draw_limb(display, limb);
                    }
                }
            }
            Mode::LeaderboardView => {
                if full {
                    screens::leaderboard_static(
                        display,
                        self.leaderboard.entries(),
                        self.store_fault,
                    );
                }
            }
            Mode::LeaderboardEntry { letter, name } => {
                if full {
                    screens::name_entry_static(display, self.session.score());
                }
                screens::name_entry_progress(display, alphabet_letter(*letter), name);
            }
        }

        display.flush();
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Whether the last leaderboard load or save failed.
    pub fn store_fault(&self) -> bool {
        self.store_fault
    }

    /// Letter under the game cursor, if a round is on screen.
    pub fn cursor_letter(&self) -> Option<u8> {
        match self.mode {
            Mode::Game { letter } => self.session.remaining().get(letter).copied(),
            Mode::LeaderboardEntry { letter, .. } => Some(alphabet_letter(letter)),
            _ => None,
        }
    }

    fn select(&mut self) {
        match &mut self.mode {
            Mode::Menu { selected } => match MenuItem::from_index(*selected) {
                Some(MenuItem::Start) => {
                    self.reset_session();
                    info!("starting {} round", self.difficulty.label());
                    self.enter(Mode::Game { letter: 0 });
                }
                Some(MenuItem::Difficulty) => {
                    self.reset_session();
                    self.enter(Mode::Difficulty { selected: 0 });
                }
                Some(MenuItem::Leaderboard) => {
                    self.reset_session();
                    self.reload_leaderboard();
                    self.enter(Mode::LeaderboardView);
                }
                None => self.return_to_menu(),
            },
            Mode::Difficulty { selected } => {
                self.difficulty = Difficulty::from_index(*selected).unwrap_or_default();
                info!("difficulty set to {}", self.difficulty.label());
                self.return_to_menu();
            }
            Mode::Game { letter } => {
                let Some(&guess) = self.session.remaining().get(*letter) else {
                    return;
                };
                match self.session.submit_guess(guess) {
                    Ok(Guess::Hit { revealed }) => {
                        debug!("{} revealed {} position(s)", guess as char, revealed)
                    }
                    Ok(Guess::Miss) => debug!("{} missed", guess as char),
                    Err(e) => warn!("guess rejected: {}", e),
                }
                *letter = clamp_wrap(*letter, self.session.remaining().len());
                self.dirty = true;
            }
            Mode::LeaderboardView => self.return_to_menu(),
            Mode::LeaderboardEntry { letter, name } => {
                // The vector has room for exactly one more letter here.
                let _ = name.push(alphabet_letter(*letter));
                self.dirty = true;
                if name.len() == NAME_LEN {
                    let mut chosen = [0u8; NAME_LEN];
                    chosen.copy_from_slice(name);
                    self.submit_entry(chosen);
                    self.return_to_menu();
                }
            }
        }
    }

    /// Build the entry from the finished round, rank it and save the table.
    fn submit_entry(&mut self, name: [u8; NAME_LEN]) {
        let entry = match LeaderboardEntry::new(self.session.score(), name) {
            Ok(entry) => entry,
            Err(e) => {
                warn!("entry rejected: {}", e);
                return;
            }
        };
        self.leaderboard.insert(entry);
        match self.leaderboard.persist(&mut self.store) {
            Ok(()) => self.store_fault = false,
            Err(e) => {
                error!("leaderboard save failed: {}", e);
                self.store_fault = true;
            }
        }
    }

    fn reload_leaderboard(&mut self) {
        match self.leaderboard.load(&mut self.store) {
            Ok(()) => self.store_fault = false,
            Err(e) => {
                error!("leaderboard load failed: {}", e);
                self.store_fault = true;
            }
        }
    }

    fn reset_session(&mut self) {
        self.session.reset(self.difficulty, &mut self.rng);
        self.limbs_drawn = 0;
    }

    fn return_to_menu(&mut self) {
        self.reset_session();
        self.enter(Mode::Menu { selected: 0 });
    }

    fn enter(&mut self, mode: Mode) {
        debug!("mode {} -> {}", self.mode.kind(), mode.kind());
        self.mode = mode;
        self.first_entry = true;
        self.dirty = true;
    }

    /// Number of positions the current cursor cycles over.
    fn cursor_len(&self) -> usize {
        match self.mode {
            Mode::Menu { .. } => MENU_ITEMS.len(),
            Mode::Difficulty { .. } => Difficulty::ALL.len(),
            Mode::Game { .. } => self.session.remaining().len(),
            Mode::LeaderboardView => 0,
            Mode::LeaderboardEntry { .. } => ALPHABET_LEN,
        }
    }

    fn cursor_mut(&mut self) -> Option<&mut usize> {
        match &mut self.mode {
            Mode::Menu { selected } | Mode::Difficulty { selected } => Some(selected),
            Mode::Game { letter } | Mode::LeaderboardEntry { letter, .. } => Some(letter),
            Mode::LeaderboardView => None,
        }
    }
}

fn alphabet_letter(index: usize) -> u8 {
    b'A' + (index % ALPHABET_LEN) as u8
}
