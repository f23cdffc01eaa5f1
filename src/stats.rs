//! Cumulative statistics across runs, kept as one JSON blob in the store.
//! Reads never fail: a missing or corrupt blob is treated as "no games yet".
//! Writes are best-effort and only logged on failure.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::rc::Rc;

use crate::model::RunReport;
use crate::storage::KeyValueStore;

pub const STATS_KEY: &str = "type-strike-stats";
pub const MAX_SESSIONS: usize = 10;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelStats {
    pub times_played: u32,
    pub best_score: u32,
    /// Running mean of accuracy percent over `times_played` runs.
    pub average_accuracy: f64,
    pub words_destroyed: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SessionStats {
    /// Epoch milliseconds.
    pub start_time: f64,
    pub end_time: f64,
    pub accuracy: u32,
    pub score: u32,
    pub level: u32,
    pub words_destroyed: u32,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStats {
    pub total_games_played: u32,
    pub highest_level: u32,
    pub highest_score: u32,
    pub total_score: u64,
    pub total_accuracy: u64,
    pub total_words_destroyed: u64,
    pub total_time_played_seconds: u64,
    pub level_stats: BTreeMap<u32, LevelStats>,
    pub session_stats: Vec<SessionStats>,
}

impl GameStats {
    /// Folds one finished run into the aggregates.
    pub fn record(&mut self, report: &RunReport, now_ms: f64) {
        self.total_games_played += 1;
        self.highest_level = self.highest_level.max(report.level_reached);
        self.highest_score = self.highest_score.max(report.final_score);
        self.total_score += u64::from(report.final_score);
        self.total_accuracy += u64::from(report.accuracy_percent);
        self.total_words_destroyed += u64::from(report.words_destroyed);
        self.total_time_played_seconds += report.seconds_played;

        let level = self.level_stats.entry(report.level_reached).or_default();
        level.times_played += 1;
        level.best_score = level.best_score.max(report.final_score);
        let n = f64::from(level.times_played);
        level.average_accuracy =
            (level.average_accuracy * (n - 1.0) + f64::from(report.accuracy_percent)) / n;
        level.words_destroyed += report.words_destroyed;

        self.session_stats.push(SessionStats {
            start_time: now_ms - report.seconds_played as f64 * 1000.0,
            end_time: now_ms,
            accuracy: report.accuracy_percent,
            score: report.final_score,
            level: report.level_reached,
            words_destroyed: report.words_destroyed,
        });
        if self.session_stats.len() > MAX_SESSIONS {
            let excess = self.session_stats.len() - MAX_SESSIONS;
            self.session_stats.drain(..excess);
        }
    }

    pub fn average_accuracy(&self) -> u32 {
        if self.total_games_played == 0 {
            return 0;
        }
        (self.total_accuracy as f64 / f64::from(self.total_games_played)).round() as u32
    }

    pub fn average_score(&self) -> u32 {
        if self.total_games_played == 0 {
            return 0;
        }
        (self.total_score as f64 / f64::from(self.total_games_played)).round() as u32
    }

    pub fn total_play_time(&self) -> String {
        crate::util::format_hours_minutes(self.total_time_played_seconds)
    }
}

/// Stats collaborator bound to one store slot.
#[derive(Clone)]
pub struct StatsManager {
    store: Rc<dyn KeyValueStore>,
}

impl PartialEq for StatsManager {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }
}

impl StatsManager {
    pub fn new(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn get_stats(&self) -> GameStats {
        let raw = match self.store.get_item(STATS_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return GameStats::default(),
            Err(e) => {
                log::warn!("could not read stats: {:#}", e);
                return GameStats::default();
            }
        };
        serde_json::from_str(&raw).unwrap_or_else(|e| {
            log::warn!("discarding corrupt stats blob: {}", e);
            GameStats::default()
        })
    }

    pub fn record_game_end(&self, report: &RunReport, now_ms: f64) {
        let mut stats = self.get_stats();
        stats.record(report, now_ms);
        self.save(&stats);
        log::info!(
            "recorded run: score {}, level {}, accuracy {}%",
            report.final_score,
            report.level_reached,
            report.accuracy_percent
        );
    }

    pub fn clear_all(&self) {
        if let Err(e) = self.store.remove_item(STATS_KEY) {
            log::error!("failed to clear stats: {:#}", e);
        }
    }

    pub fn average_accuracy(&self) -> u32 {
        self.get_stats().average_accuracy()
    }

    pub fn average_score_per_game(&self) -> u32 {
        self.get_stats().average_score()
    }

    pub fn total_play_time(&self) -> String {
        self.get_stats().total_play_time()
    }

    fn save(&self, stats: &GameStats) {
        let result = serde_json::to_string(stats)
            .map_err(anyhow::Error::from)
            .and_then(|s| self.store.set_item(STATS_KEY, &s));
        if let Err(e) = result {
            log::error!("failed to save stats: {:#}", e);
        }
    }
}
