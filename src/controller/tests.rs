use core::cell::{Cell, RefCell};
use std::string::String;
use std::vec::Vec;

use super::*;
use crate::error::{BusError, Error};
use crate::game::Limb;
use crate::leaderboard::slot_address;
use crate::store::MemoryStore;
use crate::ui::screens::limb_rect;
use crate::ui::{Color, Direction, TextSize};

const CW: InputEvent = InputEvent::Rotate(Direction::Clockwise);
const CCW: InputEvent = InputEvent::Rotate(Direction::CounterClockwise);
const SELECT: InputEvent = InputEvent::Select;

/// Memory-backed store that can be switched into a failing state.
#[derive(Default)]
struct TestStore {
    inner: RefCell<MemoryStore>,
    failing: Cell<bool>,
}

impl TestStore {
    fn failing() -> Self {
        let store = Self::default();
        store.failing.set(true);
        store
    }

    fn record(&self, slot: usize) -> [u8; 8] {
        let addr = slot_address(slot) as usize;
        let mut record = [0u8; 8];
        record.copy_from_slice(&self.inner.borrow().bytes()[addr..addr + 8]);
        record
    }
}

impl RecordStore for TestStore {
    fn burst_write(&mut self, device: u8, mem_addr: u8, data: &[u8]) -> Result<(), Error> {
        if self.failing.get() {
            return Err(BusError::AddressNack.into());
        }
        self.inner.borrow_mut().burst_write(device, mem_addr, data)
    }

    fn burst_read(&mut self, device: u8, mem_addr: u8, buf: &mut [u8]) -> Result<(), Error> {
        if self.failing.get() {
            return Err(BusError::AddressNack.into());
        }
        self.inner.borrow_mut().burst_read(device, mem_addr, buf)
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Op {
    Clear,
    Text(String, Color, Color),
    Rect(i32, i32, u32, u32, Color),
    Flush,
}

#[derive(Default)]
struct RecordingSink {
    ops: Vec<Op>,
}

impl RecordingSink {
    fn take(&mut self) -> Vec<Op> {
        core::mem::take(&mut self.ops)
    }
}

impl DisplaySink for RecordingSink {
    fn clear(&mut self) {
        self.ops.push(Op::Clear);
    }

    fn draw_text(&mut self, _x: i32, _y: i32, text: &str, fg: Color, bg: Color, _size: TextSize) {
        self.ops.push(Op::Text(text.into(), fg, bg));
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        self.ops.push(Op::Rect(x, y, w, h, color));
    }

    fn flush(&mut self) {
        self.ops.push(Op::Flush);
    }
}

fn has_text(ops: &[Op], needle: &str) -> bool {
    ops.iter()
        .any(|op| matches!(op, Op::Text(t, _, _) if t.contains(needle)))
}

fn limb_drawn(ops: &[Op], limb: Limb) -> bool {
    let (x, y, w, h) = limb_rect(limb);
    ops.contains(&Op::Rect(x, y, w, h, Color::White))
}

fn controller() -> Controller<TestStore> {
    Controller::new(TestStore::default(), 7)
}

/// Rotate the game cursor onto `letter`, select it and run the tick.
fn guess(ctrl: &mut Controller<TestStore>, letter: u8) -> Option<Outcome> {
    for _ in 0..ALPHABET_LEN {
        if ctrl.cursor_letter() == Some(letter) {
            break;
        }
        ctrl.handle(CW);
    }
    assert_eq!(ctrl.cursor_letter(), Some(letter));
    ctrl.handle(SELECT);
    ctrl.tick()
}

fn start_round(ctrl: &mut Controller<TestStore>) {
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    ctrl.handle(SELECT);
    assert_eq!(ctrl.mode().kind(), ModeKind::Game);
}

/// Guess every distinct letter of the secret.
fn win_round(ctrl: &mut Controller<TestStore>) -> Option<Outcome> {
    let secret: Vec<u8> = ctrl.session().secret().bytes().collect();
    let mut outcome = None;
    for c in secret {
        if ctrl.session().remaining().contains(&c) {
            assert_eq!(outcome, None);
            outcome = guess(ctrl, c);
        }
    }
    outcome
}

fn misses(ctrl: &Controller<TestStore>) -> Vec<u8> {
    let secret = ctrl.session().secret().as_bytes();
    (b'A'..=b'Z').filter(|c| !secret.contains(c)).collect()
}

#[test]
fn starts_in_menu_with_defaults() {
    let ctrl = controller();
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    assert_eq!(ctrl.difficulty(), Difficulty::Easy);
    assert_eq!(ctrl.leaderboard(), &Leaderboard::new());
    assert!(!ctrl.store_fault());
    assert_eq!(ctrl.session().wrong_guesses(), 0);
    assert_eq!(ctrl.session().remaining().len(), ALPHABET_LEN);
}

#[test]
fn menu_cursor_wraps_both_ways() {
    let mut ctrl = controller();
    ctrl.handle(CCW);
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 2 });
    ctrl.handle(CW);
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    ctrl.handle(CW);
    ctrl.handle(CW);
    ctrl.handle(CW);
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
}

#[test]
fn choosing_a_difficulty_returns_to_menu() {
    let mut ctrl = controller();
    ctrl.handle(CW);
    ctrl.handle(SELECT);
    assert_eq!(ctrl.mode(), &Mode::Difficulty { selected: 0 });

    ctrl.handle(CCW);
    assert_eq!(ctrl.mode(), &Mode::Difficulty { selected: 2 });
    ctrl.handle(SELECT);

    assert_eq!(ctrl.difficulty(), Difficulty::Hard);
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    assert_eq!(ctrl.session().difficulty(), Difficulty::Hard);
}

#[test]
fn guessed_letter_leaves_the_pool() {
    let mut ctrl = controller();
    start_round(&mut ctrl);
    let letter = ctrl.session().secret().as_bytes()[0];
    guess(&mut ctrl, letter);

    assert!(!ctrl.session().remaining().contains(&letter));
    assert_eq!(ctrl.session().remaining().len(), ALPHABET_LEN - 1);
    for _ in 0..ALPHABET_LEN {
        assert_ne!(ctrl.cursor_letter(), Some(letter));
        ctrl.handle(CW);
    }
}

#[test]
fn game_cursor_wraps_after_guessing_last_letter() {
    let mut ctrl = controller();
    start_round(&mut ctrl);
    ctrl.handle(CCW);
    assert_eq!(ctrl.cursor_letter(), Some(b'Z'));
    assert_eq!(ctrl.mode(), &Mode::Game { letter: 25 });

    ctrl.handle(SELECT);
    assert_eq!(ctrl.mode(), &Mode::Game { letter: 0 });
    assert_eq!(ctrl.cursor_letter(), Some(b'A'));
}

#[test]
fn winning_round_records_name_and_saves() {
    let mut ctrl = controller();
    start_round(&mut ctrl);
    let word_len = ctrl.session().secret().len() as i32;

    assert_eq!(win_round(&mut ctrl), Some(Outcome::Won));
    assert_eq!(ctrl.mode().kind(), ModeKind::LeaderboardEntry);
    assert_eq!(ctrl.session().score(), 1000 * word_len);
    assert_eq!(ctrl.cursor_letter(), Some(b'A'));

    ctrl.handle(SELECT);
    ctrl.handle(CW);
    ctrl.handle(SELECT);
    assert_eq!(ctrl.cursor_letter(), Some(b'B'));
    ctrl.handle(CW);
    assert_eq!(ctrl.tick(), None);
    ctrl.handle(SELECT);

    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    let expected = format!("{:04} ABC", 1000 * word_len);
    assert_eq!(ctrl.leaderboard().entries()[0].as_str(), expected);
    assert_eq!(ctrl.leaderboard().entries()[1].as_str(), "0000 AAA");
    assert_eq!(&ctrl.store().record(0), expected.as_bytes());
    assert_eq!(&ctrl.store().record(5), b"0000 AAA");
    assert_eq!(ctrl.session().score(), 0);
}

#[test]
fn losing_round_returns_to_menu_with_fresh_session() {
    let mut ctrl = controller();
    start_round(&mut ctrl);
    let wrong = misses(&ctrl);

    for &c in &wrong[..5] {
        assert_eq!(guess(&mut ctrl, c), None);
    }
    assert_eq!(ctrl.session().score(), -1250);
    assert_eq!(guess(&mut ctrl, wrong[5]), Some(Outcome::Lost));

    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    assert_eq!(ctrl.session().wrong_guesses(), 0);
    assert_eq!(ctrl.session().remaining().len(), ALPHABET_LEN);
    assert_eq!(ctrl.leaderboard(), &Leaderboard::new());
}

#[test]
fn hard_round_is_lost_after_two_misses() {
    let mut ctrl = controller();
    ctrl.handle(CW);
    ctrl.handle(SELECT);
    ctrl.handle(CCW);
    ctrl.handle(SELECT);
    start_round(&mut ctrl);

    let wrong = misses(&ctrl);
    assert_eq!(guess(&mut ctrl, wrong[0]), None);
    assert_eq!(guess(&mut ctrl, wrong[1]), Some(Outcome::Lost));
}

#[test]
fn leaderboard_view_ignores_rotation() {
    let mut ctrl = controller();
    ctrl.handle(CCW);
    ctrl.handle(SELECT);
    assert_eq!(ctrl.mode(), &Mode::LeaderboardView);

    ctrl.handle(CW);
    assert_eq!(ctrl.mode(), &Mode::LeaderboardView);
    ctrl.handle(SELECT);
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
}

#[test]
fn tick_outside_game_does_nothing() {
    let mut ctrl = controller();
    assert_eq!(ctrl.tick(), None);
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
}

#[test]
fn first_render_is_full_then_incremental() {
    let mut ctrl = controller();
    let mut sink = RecordingSink::default();

    ctrl.render(&mut sink);
    let ops = sink.take();
    assert_eq!(ops[0], Op::Clear);
    assert!(has_text(&ops, "HANGMAN"));
    assert_eq!(ops.last(), Some(&Op::Flush));

    ctrl.render(&mut sink);
    assert!(sink.take().is_empty());

    ctrl.handle(CW);
    ctrl.render(&mut sink);
    let ops = sink.take();
    assert!(!ops.contains(&Op::Clear));
    assert!(!has_text(&ops, "HANGMAN"));
    assert!(has_text(&ops, ">"));
}

#[test]
fn mode_change_triggers_full_redraw() {
    let mut ctrl = controller();
    let mut sink = RecordingSink::default();
    ctrl.render(&mut sink);
    sink.take();

    ctrl.handle(SELECT);
    ctrl.render(&mut sink);
    let ops = sink.take();
    assert_eq!(ops[0], Op::Clear);
    assert!(has_text(&ops, "SCORE"));
    assert!(has_text(&ops, "<A>"));
}

#[test]
fn limbs_are_drawn_once_per_miss() {
    let mut ctrl = controller();
    let mut sink = RecordingSink::default();
    start_round(&mut ctrl);
    ctrl.render(&mut sink);
    let ops = sink.take();
    assert!(!limb_drawn(&ops, Limb::Head));

    let wrong = misses(&ctrl);
    guess(&mut ctrl, wrong[0]);
    ctrl.render(&mut sink);
    let ops = sink.take();
    assert!(limb_drawn(&ops, Limb::Head));
    assert!(!limb_drawn(&ops, Limb::Torso));

    guess(&mut ctrl, wrong[1]);
    ctrl.render(&mut sink);
    let ops = sink.take();
    assert!(!limb_drawn(&ops, Limb::Head));
    assert!(limb_drawn(&ops, Limb::Torso));
    assert!(has_text(&ops, "2/6"));
}

#[test]
fn store_fault_is_reported_but_not_fatal() {
    let mut ctrl = Controller::new(TestStore::failing(), 3);
    assert!(ctrl.store_fault());

    let mut sink = RecordingSink::default();
    ctrl.render(&mut sink);
    assert!(has_text(&sink.take(), "NO LEADERBOARD"));

    ctrl.handle(CCW);
    ctrl.handle(SELECT);
    ctrl.render(&mut sink);
    let ops = sink.take();
    assert!(has_text(&ops, "UNAVAILABLE"));
    assert!(!has_text(&ops, "0000 AAA"));

    ctrl.handle(SELECT);
    start_round(&mut ctrl);
    assert_eq!(win_round(&mut ctrl), Some(Outcome::Won));
    for _ in 0..NAME_LEN {
        ctrl.handle(SELECT);
    }
    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    assert!(ctrl.store_fault());
    assert_eq!(ctrl.leaderboard().entries()[0].name(), "AAA");
    assert_ne!(ctrl.leaderboard().entries()[0].score(), 0);
}

#[test]
fn opening_leaderboard_reloads_and_clears_fault() {
    let mut ctrl = Controller::new(TestStore::failing(), 11);
    assert!(ctrl.store_fault());

    ctrl.store().failing.set(false);
    ctrl.store()
        .inner
        .borrow_mut()
        .burst_write(0x50, slot_address(0), b"4321 XYZ")
        .unwrap();

    ctrl.handle(CCW);
    ctrl.handle(SELECT);
    assert!(!ctrl.store_fault());
    assert_eq!(ctrl.leaderboard().entries()[0].as_str(), "4321 XYZ");

    let mut sink = RecordingSink::default();
    ctrl.render(&mut sink);
    assert!(has_text(&sink.take(), "1 4321 XYZ"));
}

/// One pass of the firmware loop: apply the event, repaint, then check
/// for the end of the round.
fn frame(
    ctrl: &mut Controller<TestStore>,
    sink: &mut RecordingSink,
    event: InputEvent,
) -> Option<Outcome> {
    ctrl.handle(event);
    ctrl.render(sink);
    ctrl.tick()
}

/// Like [`guess`], but rendering every pass. Returns what reached the
/// sink on the selecting pass together with the outcome.
fn guess_on_screen(
    ctrl: &mut Controller<TestStore>,
    sink: &mut RecordingSink,
    letter: u8,
) -> (Vec<Op>, Option<Outcome>) {
    while ctrl.cursor_letter() != Some(letter) {
        assert_eq!(frame(ctrl, sink, CW), None);
    }
    sink.take();
    let outcome = frame(ctrl, sink, SELECT);
    (sink.take(), outcome)
}

#[test]
fn completed_word_is_drawn_before_the_round_ends() {
    let mut ctrl = controller();
    let mut sink = RecordingSink::default();
    ctrl.render(&mut sink);
    assert_eq!(frame(&mut ctrl, &mut sink, SELECT), None);

    let secret: std::string::String = ctrl.session().secret().into();
    let mut last = (Vec::new(), None);
    for c in secret.bytes() {
        if ctrl.session().remaining().contains(&c) {
            last = guess_on_screen(&mut ctrl, &mut sink, c);
        }
    }

    let (ops, outcome) = last;
    assert_eq!(outcome, Some(Outcome::Won));
    assert!(has_text(&ops, &secret));
}

#[test]
fn final_limb_is_drawn_before_the_round_ends() {
    let mut ctrl = controller();
    let mut sink = RecordingSink::default();
    ctrl.render(&mut sink);
    assert_eq!(frame(&mut ctrl, &mut sink, SELECT), None);

    let wrong = misses(&ctrl);
    for &c in &wrong[..5] {
        assert_eq!(guess_on_screen(&mut ctrl, &mut sink, c).1, None);
    }
    let (ops, outcome) = guess_on_screen(&mut ctrl, &mut sink, wrong[5]);
    assert_eq!(outcome, Some(Outcome::Lost));
    assert!(limb_drawn(&ops, Limb::LegRight));
}

#[test]
fn clean_win_never_draws_a_limb() {
    let mut ctrl = controller();
    let mut sink = RecordingSink::default();
    ctrl.render(&mut sink);
    frame(&mut ctrl, &mut sink, SELECT);
    ctrl.session = GameSession::with_word(Difficulty::Easy, "WINS").unwrap();
    ctrl.first_entry = true;

    let mut drawn = Vec::new();
    let mut outcome = None;
    for c in *b"WINS" {
        while ctrl.cursor_letter() != Some(c) {
            frame(&mut ctrl, &mut sink, CW);
        }
        outcome = frame(&mut ctrl, &mut sink, SELECT);
        drawn.extend(sink.take());
    }

    assert_eq!(outcome, Some(Outcome::Won));
    assert_eq!(ctrl.session().wrong_guesses(), 0);
    let limbs = [
        Limb::Head,
        Limb::Torso,
        Limb::ArmLeft,
        Limb::ArmRight,
        Limb::LegLeft,
        Limb::LegRight,
    ];
    for limb in limbs {
        assert!(!limb_drawn(&drawn, limb));
    }
    assert!(has_text(&drawn, "WINS"));
}

#[test]
fn win_without_points_skips_name_entry() {
    let mut ctrl = controller();
    start_round(&mut ctrl);
    ctrl.session = GameSession::with_word(Difficulty::Easy, "A").unwrap();

    for c in *b"BCDEF" {
        assert_eq!(guess(&mut ctrl, c), None);
    }
    assert_eq!(guess(&mut ctrl, b'A'), Some(Outcome::Won));

    assert_eq!(ctrl.mode(), &Mode::Menu { selected: 0 });
    assert_eq!(ctrl.session().score(), 0);
    assert_eq!(ctrl.session().remaining().len(), ALPHABET_LEN);
    assert_eq!(ctrl.leaderboard(), &Leaderboard::new());
    assert_eq!(&ctrl.store().record(0), &[0xFF; 8]);
}
