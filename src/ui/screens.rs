//! Screen layouts for the 128×64 OLED.
//!
//! Each mode has a `*_static` function that clears and draws the fixed
//! parts once on entry, and one or more functions that repaint only the
//! fields that change. Dynamic fields are padded to a fixed width and
//! drawn with a black background so they overwrite their previous value.
//! Nothing here flushes.

use core::fmt::Write;

use heapless::String;

use super::{Color, DisplaySink, TextSize};
use crate::config::{LEADERBOARD_SLOTS, NAME_LEN};
use crate::game::{Difficulty, Limb, Outcome};
use crate::leaderboard::LeaderboardEntry;

pub const SCREEN_WIDTH: i32 = 128;
pub const SCREEN_HEIGHT: i32 = 64;

/// Menu rows, in cursor order.
pub const MENU_ITEMS: [&str; 3] = ["START", "DIFFICULTY", "LEADERBOARD"];

const MENU_FIRST_ROW: i32 = 22;
const MENU_ROW_PITCH: i32 = 10;
const CREDIT_LINE: &str = "KILLROOM Games 2022";
const STORE_FAULT_LINE: &str = "NO LEADERBOARD";

/// Rectangles (x, y, w, h) of the gallows, drawn once per round.
const GALLOWS: [(i32, i32, u32, u32); 4] = [
    (76, 60, 40, 2), // base
    (80, 4, 2, 56),  // pole
    (80, 4, 30, 2),  // beam
    (108, 4, 2, 6),  // rope
];

/// Screen rectangle (x, y, w, h) of a figure part.
pub const fn limb_rect(limb: Limb) -> (i32, i32, u32, u32) {
    match limb {
        Limb::Head => (104, 10, 10, 9),
        Limb::Torso => (106, 20, 6, 18),
        Limb::ArmLeft => (100, 20, 5, 14),
        Limb::ArmRight => (113, 20, 5, 14),
        Limb::LegLeft => (106, 39, 3, 16),
        Limb::LegRight => (109, 39, 3, 16),
    }
}

/// Accent used for a difficulty label.
pub fn difficulty_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => Color::Green,
        Difficulty::Medium => Color::Amber,
        Difficulty::Hard => Color::Red,
    }
}

/// X coordinate that centres `len` glyphs of `size`.
fn centred(len: usize, size: TextSize) -> i32 {
    let (w, _) = size.cell();
    ((SCREEN_WIDTH - len as i32 * w) / 2).max(0)
}

fn text<D: DisplaySink>(d: &mut D, x: i32, y: i32, s: &str, size: TextSize) {
    d.draw_text(x, y, s, Color::White, Color::Black, size);
}

// Menu

pub fn menu_static<D: DisplaySink>(d: &mut D, store_fault: bool) {
    d.clear();
    d.draw_text(
        centred(7, TextSize::Large),
        0,
        "HANGMAN",
        Color::White,
        Color::Black,
        TextSize::Large,
    );
    for (row, label) in MENU_ITEMS.iter().enumerate() {
        text(d, 12, MENU_FIRST_ROW + row as i32 * MENU_ROW_PITCH, label, TextSize::Small);
    }

    let y = SCREEN_HEIGHT - 10;
    if store_fault {
        let x = centred(STORE_FAULT_LINE.len(), TextSize::Small);
        d.draw_text(x, y, STORE_FAULT_LINE, Color::Red, Color::Black, TextSize::Small);
    } else {
        text(d, centred(CREDIT_LINE.len(), TextSize::Small), y, CREDIT_LINE, TextSize::Small);
    }
}

/// Move the `>` marker to `selected`.
pub fn menu_cursor<D: DisplaySink>(d: &mut D, selected: usize) {
    for row in 0..MENU_ITEMS.len() {
        let marker = if row == selected { ">" } else { " " };
        text(d, 0, MENU_FIRST_ROW + row as i32 * MENU_ROW_PITCH, marker, TextSize::Small);
    }
}

// Difficulty

pub fn difficulty_static<D: DisplaySink>(d: &mut D) {
    d.clear();
    text(d, 0, 0, "DIFFICULTY", TextSize::Small);
    text(d, 0, 40, "PENALTY:   LIMB(S)", TextSize::Small);
}

/// Name, penalty and word-size hint of the option under the cursor.
pub fn difficulty_option<D: DisplaySink>(d: &mut D, difficulty: Difficulty) {
    let mut name: String<12> = String::new();
    let _ = write!(name, "{:^10}", difficulty.label());
    d.draw_text(
        centred(name.len(), TextSize::Large),
        14,
        &name,
        difficulty_color(difficulty),
        Color::Black,
        TextSize::Large,
    );

    let mut penalty: String<2> = String::new();
    let _ = write!(penalty, "{}", difficulty.limbs_per_miss());
    text(d, 54, 40, &penalty, TextSize::Small);

    let mut hint: String<21> = String::new();
    let _ = write!(hint, "{:^21}", difficulty.description());
    text(d, 1, 52, &hint, TextSize::Small);
}

// Game

pub fn game_static<D: DisplaySink>(d: &mut D) {
    d.clear();
    for (x, y, w, h) in GALLOWS {
        d.fill_rect(x, y, w, h, Color::White);
    }
    text(d, 0, 28, "SCORE", TextSize::Small);
}

/// The reveal buffer. Short words use the large font.
pub fn game_reveal<D: DisplaySink>(d: &mut D, reveal: &str) {
    let size = if reveal.len() <= 7 {
        TextSize::Large
    } else {
        TextSize::Small
    };
    text(d, 0, 2, reveal, size);
}

pub fn game_score<D: DisplaySink>(d: &mut D, score: i32) {
    let mut field: String<8> = String::new();
    let _ = write!(field, "{:>6}", score);
    text(d, 32, 28, &field, TextSize::Small);
}

/// The letter under the cursor and the miss count.
pub fn game_cursor<D: DisplaySink>(d: &mut D, letter: u8, misses: usize, budget: usize) {
    let glyph = [b'<', letter, b'>'];
    if let Ok(s) = core::str::from_utf8(&glyph) {
        text(d, 0, 42, s, TextSize::Large);
    }

    let mut count: String<8> = String::new();
    let _ = write!(count, "{}/{}", misses, budget);
    text(d, 40, 48, &count, TextSize::Small);
}

pub fn draw_limb<D: DisplaySink>(d: &mut D, limb: Limb) {
    let (x, y, w, h) = limb_rect(limb);
    d.fill_rect(x, y, w, h, Color::White);
}

// Leaderboard view

/// Header plus the six rows in two columns, or a fault notice.
pub fn leaderboard_static<D: DisplaySink>(
    d: &mut D,
    entries: &[LeaderboardEntry; LEADERBOARD_SLOTS],
    store_fault: bool,
) {
    d.clear();
    text(d, centred(11, TextSize::Small), 0, "LEADERBOARD", TextSize::Small);

    if store_fault {
        d.draw_text(
            centred(11, TextSize::Small),
            28,
            "UNAVAILABLE",
            Color::Red,
            Color::Black,
            TextSize::Small,
        );
    } else {
        let half = LEADERBOARD_SLOTS / 2;
        for (i, entry) in entries.iter().enumerate() {
            let x = if i < half { 0 } else { 66 };
            let y = 14 + (i % half) as i32 * 12;
            let mut row: String<12> = String::new();
            let _ = write!(row, "{} {}", i + 1, entry);
            text(d, x, y, &row, TextSize::Small);
        }
    }

    text(d, centred(15, TextSize::Small), 54, "PRESS TO RETURN", TextSize::Small);
}

// Name entry

pub fn name_entry_static<D: DisplaySink>(d: &mut D, score: i32) {
    d.clear();
    text(d, centred(12, TextSize::Small), 0, "YOU MADE THE", TextSize::Small);
    text(d, centred(12, TextSize::Small), 10, "LEADERBOARD!", TextSize::Small);

    let mut line: String<20> = String::new();
    let _ = write!(line, "YOUR SCORE: {:04}", score);
    text(d, centred(line.len(), TextSize::Small), 22, &line, TextSize::Small);
    text(d, 0, 54, "ENTER NAME:   / 3", TextSize::Small);
}

/// Letter under the cursor, the name so far and the `n / 3` counter.
pub fn name_entry_progress<D: DisplaySink>(d: &mut D, letter: u8, name: &[u8]) {
    let glyph = [b'<', letter, b'>'];
    if let Ok(s) = core::str::from_utf8(&glyph) {
        text(d, centred(3, TextSize::Large), 32, s, TextSize::Large);
    }

    let mut typed = [b'_'; NAME_LEN];
    for (slot, &c) in typed.iter_mut().zip(name) {
        *slot = c;
    }
    if let Ok(s) = core::str::from_utf8(&typed) {
        text(d, 110, 54, s, TextSize::Small);
    }

    // 1-based position of the letter being chosen.
    let mut count: String<2> = String::new();
    let _ = write!(count, "{}", (name.len() + 1).min(NAME_LEN));
    text(d, 78, 54, &count, TextSize::Small);
}

// Banner

/// One phase of the win/lose banner. Even phases draw the accent on
/// black, odd phases swap them.
pub fn banner<D: DisplaySink>(d: &mut D, outcome: Outcome, phase: usize) {
    let (label, accent) = match outcome {
        Outcome::Won => (" YOU WIN! ", Color::Green),
        Outcome::Lost => (" YOU LOSE ", Color::Red),
    };
    let (fg, bg) = if phase % 2 == 0 {
        (accent, Color::Black)
    } else {
        (Color::Black, accent)
    };

    d.fill_rect(0, 20, SCREEN_WIDTH as u32, 24, bg);
    d.draw_text(
        centred(label.len(), TextSize::Large),
        22,
        label,
        fg,
        bg,
        TextSize::Large,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct TextLog {
        texts: std::vec::Vec<(i32, i32, std::string::String, Color, Color)>,
        rects: std::vec::Vec<(i32, i32, u32, u32, Color)>,
        clears: usize,
    }

    impl DisplaySink for TextLog {
        fn clear(&mut self) {
            self.clears += 1;
        }

        fn draw_text(&mut self, x: i32, y: i32, text: &str, fg: Color, bg: Color, _: TextSize) {
            self.texts.push((x, y, text.into(), fg, bg));
        }

        fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
            self.rects.push((x, y, w, h, color));
        }

        fn flush(&mut self) {}
    }

    impl TextLog {
        fn has(&self, needle: &str) -> bool {
            self.texts.iter().any(|(_, _, t, _, _)| t.contains(needle))
        }
    }

    fn inside_screen((x, y, w, h): (i32, i32, u32, u32)) -> bool {
        x >= 0 && y >= 0 && x + w as i32 <= SCREEN_WIDTH && y + h as i32 <= SCREEN_HEIGHT
    }

    #[test]
    fn figure_and_gallows_fit_on_screen_right_of_text() {
        let limbs = [
            Limb::Head,
            Limb::Torso,
            Limb::ArmLeft,
            Limb::ArmRight,
            Limb::LegLeft,
            Limb::LegRight,
        ];
        for limb in limbs {
            assert!(inside_screen(limb_rect(limb)));
            assert!(limb_rect(limb).0 >= 76);
        }
        for rect in GALLOWS {
            assert!(inside_screen(rect));
        }
    }

    #[test]
    fn menu_footer_reports_store_fault() {
        let mut log = TextLog::default();
        menu_static(&mut log, false);
        assert!(log.has(CREDIT_LINE));
        assert!(!log.has(STORE_FAULT_LINE));

        let mut log = TextLog::default();
        menu_static(&mut log, true);
        assert_eq!(log.clears, 1);
        assert!(log.has(STORE_FAULT_LINE));
    }

    #[test]
    fn menu_cursor_marks_one_row() {
        let mut log = TextLog::default();
        menu_cursor(&mut log, 2);
        let markers: std::vec::Vec<&str> = log.texts.iter().map(|t| t.2.as_str()).collect();
        assert_eq!(markers, [" ", " ", ">"]);
    }

    #[test]
    fn difficulty_option_shows_penalty_and_hint() {
        let mut log = TextLog::default();
        difficulty_option(&mut log, Difficulty::Hard);
        assert!(log.has("HARD"));
        assert!(log.has("3"));
        assert!(log.has("Words are extra big"));
        assert_eq!(log.texts[0].3, Color::Red);
    }

    #[test]
    fn leaderboard_rows_are_numbered() {
        let mut log = TextLog::default();
        leaderboard_static(&mut log, &[LeaderboardEntry::DEFAULT; LEADERBOARD_SLOTS], false);
        assert!(log.has("1 0000 AAA"));
        assert!(log.has("6 0000 AAA"));
        assert!(!log.has("UNAVAILABLE"));
    }

    #[test]
    fn leaderboard_fault_hides_rows() {
        let mut log = TextLog::default();
        leaderboard_static(&mut log, &[LeaderboardEntry::DEFAULT; LEADERBOARD_SLOTS], true);
        assert!(log.has("UNAVAILABLE"));
        assert!(!log.has("0000 AAA"));
    }

    #[test]
    fn name_progress_pads_missing_letters() {
        let mut log = TextLog::default();
        name_entry_progress(&mut log, b'C', b"AB");
        assert!(log.has("<C>"));
        assert!(log.has("AB_"));
        assert!(log.has("3"));
    }

    #[test]
    fn name_progress_counts_from_one() {
        let counter = |name: &[u8]| {
            let mut log = TextLog::default();
            name_entry_progress(&mut log, b'A', name);
            log.texts
                .iter()
                .find(|(x, y, _, _, _)| (*x, *y) == (78, 54))
                .map(|t| t.2.clone())
        };
        assert_eq!(counter(b"").as_deref(), Some("1"));
        assert_eq!(counter(b"A").as_deref(), Some("2"));
        assert_eq!(counter(b"AB").as_deref(), Some("3"));
        assert_eq!(counter(b"ABC").as_deref(), Some("3"));
    }

    #[test]
    fn banner_alternates_colours() {
        let mut even = TextLog::default();
        banner(&mut even, Outcome::Won, 0);
        let mut odd = TextLog::default();
        banner(&mut odd, Outcome::Won, 1);

        let (_, _, _, fg0, bg0) = even.texts[0].clone();
        let (_, _, _, fg1, bg1) = odd.texts[0].clone();
        assert_eq!((fg0, bg0), (Color::Green, Color::Black));
        assert_eq!((fg1, bg1), (Color::Black, Color::Green));
        assert!(odd.has("YOU WIN!"));
    }
}
