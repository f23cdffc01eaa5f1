//! Static per-level word banks.
//! Each group of words backs three consecutive levels; speed and mine count rise
//! within the group, then the next group switches to longer words at a slower pace.

/// Word list, fall speed (field percent per tick) and mine count for one level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WordBank {
    pub words: &'static [&'static str],
    pub speed: f64,
    pub mines_count: usize,
}

const THREE: &[&str] = &["cat", "dog", "sun", "bat", "run", "hat", "pen", "box", "toy"];
const FOUR: &[&str] = &["game", "play", "jump", "code", "fire", "move", "shot", "aims"];
const FIVE: &[&str] = &["arrow", "enemy", "focus", "dodge", "power", "level", "quick"];
const SIX: &[&str] = &["damage", "target", "attack", "charge", "player", "weapon"];
const SEVEN: &[&str] = &["survive", "ability", "control", "accuracy", "upgrade"];
const EIGHT: &[&str] = &["movement", "strategy", "collision", "reaction", "distance"];
const NINE: &[&str] = &["precision", "survivor", "mechanics", "controller", "execution"];
const TEN: &[&str] = &["performance", "procedural", "architecture", "difficulty"];
const ELEVEN: &[&str] = &["responsible", "maintaining", "synchronise", "visualising"];
const TWELVE: &[&str] = &["implementation", "determination", "configuration", "accessibility"];

const fn bank(words: &'static [&'static str], speed: f64, mines_count: usize) -> WordBank {
    WordBank { words, speed, mines_count }
}

pub const WORD_BANKS: [WordBank; 30] = [
    // Lv 1-3
    bank(THREE, 0.2, 3),
    bank(THREE, 0.4, 3),
    bank(THREE, 0.5, 4),
    // Lv 4-6
    bank(FOUR, 0.18, 3),
    bank(FOUR, 0.28, 3),
    bank(FOUR, 0.38, 4),
    // Lv 7-9
    bank(FIVE, 0.16, 4),
    bank(FIVE, 0.26, 4),
    bank(FIVE, 0.36, 5),
    // Lv 10-12
    bank(SIX, 0.15, 5),
    bank(SIX, 0.25, 5),
    bank(SIX, 0.35, 6),
    // Lv 13-15
    bank(SEVEN, 0.14, 6),
    bank(SEVEN, 0.24, 6),
    bank(SEVEN, 0.34, 7),
    // Lv 16-18
    bank(EIGHT, 0.13, 7),
    bank(EIGHT, 0.23, 7),
    bank(EIGHT, 0.33, 8),
    // Lv 19-21
    bank(NINE, 0.12, 8),
    bank(NINE, 0.22, 8),
    bank(NINE, 0.32, 9),
    // Lv 22-24
    bank(TEN, 0.11, 9),
    bank(TEN, 0.21, 9),
    bank(TEN, 0.31, 10),
    // Lv 25-27
    bank(ELEVEN, 0.1, 10),
    bank(ELEVEN, 0.2, 10),
    bank(ELEVEN, 0.3, 11),
    // Lv 28-30
    bank(TWELVE, 0.09, 11),
    bank(TWELVE, 0.19, 11),
    bank(TWELVE, 0.29, 12),
];

/// Bank for a 1-based level. Out-of-range levels reuse the nearest entry.
pub fn bank_for(level: u32) -> &'static WordBank {
    let idx = (level.max(1) as usize).min(WORD_BANKS.len()) - 1;
    &WORD_BANKS[idx]
}
