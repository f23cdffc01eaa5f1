//! Wave spawning: word draw, distinct horizontal slots and staggered start delays.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::model::{MAX_X, MIN_X, Mine, MineId, RunState, STAGGER_MS};
use crate::words::WordBank;

/// Builds a fresh wave for `bank`. Ids are allocated from `first_id` upwards.
pub fn spawn_mines<R: Rng + ?Sized>(bank: &WordBank, rng: &mut R, first_id: MineId) -> Vec<Mine> {
    let mut mines = Vec::with_capacity(bank.mines_count);
    let mut used_x: Vec<u32> = Vec::with_capacity(bank.mines_count);
    for i in 0..bank.mines_count {
        let Some(&word) = bank.words.choose(rng) else {
            log::warn!("word bank is empty, spawning no mines");
            break;
        };
        // Range holds 81 slots and a wave never exceeds 12 mines.
        let x = loop {
            let candidate = rng.gen_range(MIN_X..=MAX_X);
            if !used_x.contains(&candidate) {
                break candidate;
            }
        };
        used_x.push(x);
        mines.push(Mine {
            id: first_id + i as MineId,
            word,
            x,
            y: 0.0,
            is_destroyed: false,
            delay_ms: i as u32 * STAGGER_MS,
            has_started: false,
        });
    }
    mines
}

impl RunState {
    /// Replaces the active mine set with a new wave for the current level and
    /// resets targeting and the wave clock.
    pub fn spawn_wave(&mut self) {
        let bank = self.bank();
        let mines = spawn_mines(bank, &mut self.rng, self.next_mine_id);
        self.next_mine_id += mines.len() as MineId;
        log::info!("level {}: spawned {} mines", self.level, mines.len());
        self.mines = mines;
        self.targeted = None;
        self.input.clear();
        self.errored = None;
        self.wave_elapsed_ms = 0;
    }
}
