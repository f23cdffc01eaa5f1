//! Keystroke resolution against the single targeted mine.

use crate::model::{MISS_PENALTY, MineId, POINTS_PER_MINE, RunState, SHOT_TTL_MS, Shot};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyInput {
    /// Lowercased ASCII letter.
    Letter(char),
    Backspace,
    Escape,
}

impl KeyInput {
    /// Maps a DOM `KeyboardEvent.key` value; anything else is not gameplay input.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" | "Esc" => Some(Self::Escape),
            "Backspace" => Some(Self::Backspace),
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) if c.is_ascii_alphabetic() => {
                        Some(Self::Letter(c.to_ascii_lowercase()))
                    }
                    _ => None,
                }
            }
        }
    }
}

impl RunState {
    /// Next eligible target: the live mine scheduled to start earliest.
    pub fn next_target(&self) -> Option<MineId> {
        self.mines
            .iter()
            .filter(|m| !m.is_destroyed)
            .min_by_key(|m| m.delay_ms)
            .map(|m| m.id)
    }

    pub fn handle_key(&mut self, key: KeyInput) -> bool {
        if !self.is_active() {
            return false;
        }
        match key {
            KeyInput::Escape => {
                if self.input.is_empty() {
                    return false;
                }
                self.input.clear();
                true
            }
            KeyInput::Backspace => self.input.pop().is_some(),
            KeyInput::Letter(c) => self.type_letter(c),
        }
    }

    fn type_letter(&mut self, c: char) -> bool {
        let current = self.targeted_mine().map(|m| m.id);
        let Some(target_id) = current.or_else(|| self.next_target()) else {
            self.targeted = None;
            return false;
        };
        if self.targeted != Some(target_id) {
            self.targeted = Some(target_id);
            self.input.clear();
            self.errored = None;
        }
        let Some((word, x, y)) = self
            .mines
            .iter()
            .find(|m| m.id == target_id)
            .map(|m| (m.word, m.x, m.y))
        else {
            return false;
        };

        let mut candidate = self.input.to_ascii_lowercase();
        candidate.push(c.to_ascii_lowercase());
        let target_word = word.to_ascii_lowercase();

        if !target_word.starts_with(&candidate) {
            self.score = self.score.saturating_sub(MISS_PENALTY);
            self.stats.attempts += 1;
            self.input.clear();
            self.errored = Some(target_id);
            return true;
        }

        self.errored = None;
        self.emit_shot(target_id, x, y);
        if candidate == target_word {
            if let Some(m) = self.mines.iter_mut().find(|m| m.id == target_id) {
                m.is_destroyed = true;
            }
            self.score = self.score.saturating_add(POINTS_PER_MINE);
            self.stats.words_destroyed += 1;
            self.stats.attempts += 1;
            self.input.clear();
            self.targeted = self.next_target();
            log::debug!("destroyed '{}' (score {})", word, self.score);
        } else {
            self.input = candidate;
        }
        true
    }

    fn emit_shot(&mut self, mine_id: MineId, x: u32, y: f64) {
        self.shots.push(Shot { seq: self.next_shot_seq, mine_id, x, y, ttl_ms: SHOT_TTL_MS });
        self.next_shot_seq += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GameConfig, GameStatus, TICK_MS};

    fn run(seed: u64) -> RunState {
        RunState::new(GameConfig { countdown_ms: 0 }, seed)
    }

    fn type_word(rs: &mut RunState, word: &str) {
        for c in word.chars() {
            rs.handle_key(KeyInput::Letter(c));
        }
    }

    #[test]
    fn parses_dom_keys() {
        assert_eq!(KeyInput::from_key("a"), Some(KeyInput::Letter('a')));
        assert_eq!(KeyInput::from_key("Q"), Some(KeyInput::Letter('q')));
        assert_eq!(KeyInput::from_key("Escape"), Some(KeyInput::Escape));
        assert_eq!(KeyInput::from_key("Backspace"), Some(KeyInput::Backspace));
        assert_eq!(KeyInput::from_key("Shift"), None);
        assert_eq!(KeyInput::from_key("1"), None);
        assert_eq!(KeyInput::from_key(" "), None);
        assert_eq!(KeyInput::from_key("é"), None);
    }

    #[test]
    fn typing_first_word_destroys_only_that_mine() {
        let mut rs = run(1);
        let first = rs.mines[0].clone();
        type_word(&mut rs, first.word);
        assert_eq!(rs.score, 50);
        let destroyed: Vec<MineId> = rs.mines.iter().filter(|m| m.is_destroyed).map(|m| m.id).collect();
        assert_eq!(destroyed, vec![first.id]);
        assert_eq!(rs.stats.words_destroyed, 1);
        assert_eq!(rs.stats.attempts, 1);
        assert!(rs.input.is_empty());
        // next in spawn order is targeted right away
        assert_eq!(rs.targeted, Some(rs.mines[1].id));
        rs.tick(TICK_MS);
        assert!(rs.mines.iter().all(|m| m.id != first.id));
        assert_eq!(rs.mines.len(), 2);
    }

    #[test]
    fn uppercase_letters_match() {
        let mut rs = run(2);
        let word = rs.mines[0].word.to_ascii_uppercase();
        for c in word.chars() {
            rs.handle_key(KeyInput::Letter(c));
        }
        assert_eq!(rs.score, 50);
    }

    #[test]
    fn wrong_first_key_floors_score_and_clears_input() {
        let mut rs = run(3);
        let first = rs.mines[0].clone();
        let wrong = ('a'..='z').find(|c| !first.word.starts_with(*c)).unwrap();
        assert!(rs.handle_key(KeyInput::Letter(wrong)));
        assert_eq!(rs.score, 0);
        assert!(rs.input.is_empty());
        assert_eq!(rs.targeted, Some(first.id));
        assert_eq!(rs.errored, Some(first.id));
        assert_eq!(rs.stats.attempts, 1);
        assert!(rs.mines.iter().all(|m| !m.is_destroyed));
    }

    #[test]
    fn penalty_subtracts_five_and_keeps_target() {
        let mut rs = run(4);
        rs.score = 52;
        let first = rs.mines[0].clone();
        let mut chars = first.word.chars();
        let c0 = chars.next().unwrap();
        rs.handle_key(KeyInput::Letter(c0));
        assert_eq!(rs.input, c0.to_string());
        let wrong = ('a'..='z').find(|c| !first.word[1..].starts_with(*c)).unwrap();
        rs.handle_key(KeyInput::Letter(wrong));
        assert_eq!(rs.score, 47);
        assert!(rs.input.is_empty());
        assert_eq!(rs.targeted, Some(first.id));
        // retyping from scratch clears the error mark and still lands
        type_word(&mut rs, first.word);
        assert_eq!(rs.score, 97);
        assert!(rs.errored.is_none());
    }

    #[test]
    fn target_is_always_earliest_scheduled_live_mine() {
        let mut rs = run(5);
        for i in 0..rs.mines.len() {
            let expected = rs.mines[i].clone();
            assert_eq!(rs.next_target(), Some(expected.id));
            type_word(&mut rs, expected.word);
            assert!(rs.mines[i].is_destroyed);
            let views = rs.mine_views();
            assert!(views.iter().filter(|v| v.targeted).count() <= 1);
        }
        assert!(rs.targeted.is_none());
        // nothing left to target
        assert!(!rs.handle_key(KeyInput::Letter('a')));
        rs.tick(TICK_MS);
        assert_eq!(rs.status, GameStatus::LevelComplete);
    }

    #[test]
    fn escape_clears_prefix_without_penalty() {
        let mut rs = run(6);
        rs.score = 20;
        let first = rs.mines[0].clone();
        rs.handle_key(KeyInput::Letter(first.word.chars().next().unwrap()));
        assert!(rs.handle_key(KeyInput::Escape));
        assert!(rs.input.is_empty());
        assert_eq!(rs.score, 20);
        assert_eq!(rs.targeted, Some(first.id));
        assert!(!rs.handle_key(KeyInput::Escape));
    }

    #[test]
    fn backspace_edits_prefix_only() {
        let mut rs = run(7);
        let first = rs.mines[0].clone();
        let mut it = first.word.chars();
        let (a, b) = (it.next().unwrap(), it.next().unwrap());
        rs.handle_key(KeyInput::Letter(a));
        rs.handle_key(KeyInput::Letter(b));
        assert!(rs.handle_key(KeyInput::Backspace));
        assert_eq!(rs.input, a.to_string());
        assert!(rs.handle_key(KeyInput::Backspace));
        assert!(!rs.handle_key(KeyInput::Backspace));
        assert_eq!(rs.score, 0);
    }

    #[test]
    fn accepted_keys_emit_shots_that_expire() {
        let mut rs = run(8);
        let first = rs.mines[0].clone();
        rs.handle_key(KeyInput::Letter(first.word.chars().next().unwrap()));
        assert_eq!(rs.shots.len(), 1);
        assert_eq!(rs.shots[0].mine_id, first.id);
        assert_eq!(rs.shots[0].x, first.x);
        let score = rs.score;
        for _ in 0..(SHOT_TTL_MS / TICK_MS + 1) {
            rs.tick(TICK_MS);
        }
        assert!(rs.shots.is_empty());
        assert_eq!(rs.score, score);
    }

    #[test]
    fn keys_ignored_outside_active_play() {
        let mut rs = run(9);
        rs.pause();
        let c = rs.mines[0].word.chars().next().unwrap();
        assert!(!rs.handle_key(KeyInput::Letter(c)));
        assert!(rs.targeted.is_none());

        let mut rs = RunState::new(GameConfig { countdown_ms: 3000 }, 9);
        assert!(!rs.handle_key(KeyInput::Letter(c)));
    }

    #[test]
    fn stale_target_falls_back_to_selection() {
        let mut rs = run(10);
        rs.targeted = Some(9_999);
        let first = rs.mines[0].clone();
        type_word(&mut rs, first.word);
        assert!(rs.mines[0].is_destroyed);
        assert_eq!(rs.score, 50);
    }
}
