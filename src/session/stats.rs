//! Per-game statistics.

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

/// Counters for one game, plus the instant it started.
///
/// Counters only ever increase, and only through `GameSession`.
#[derive(Clone, Debug)]
pub struct GameStats {
    sets_found: u32,
    hints_used: u32,
    cards_dealt: u32,
    started_at: Instant,
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Zeroed counters, clock starting now.
    pub fn new() -> Self {
        Self {
            sets_found: 0,
            hints_used: 0,
            cards_dealt: 0,
            started_at: Instant::now(),
        }
    }

    #[must_use]
    pub fn sets_found(&self) -> u32 {
        self.sets_found
    }

    #[must_use]
    pub fn hints_used(&self) -> u32 {
        self.hints_used
    }

    /// Cards moved from deck to board, including the opening deal.
    #[must_use]
    pub fn cards_dealt(&self) -> u32 {
        self.cards_dealt
    }

    #[must_use]
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Wall-clock time since the game started. Never decreases.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Copy out the current values for display.
    #[must_use]
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            elapsed: self.elapsed(),
            sets_found: self.sets_found,
            hints_used: self.hints_used,
            cards_dealt: self.cards_dealt,
        }
    }

    pub(crate) fn record_set(&mut self) {
        self.sets_found += 1;
    }

    pub(crate) fn record_hint(&mut self) {
        self.hints_used += 1;
    }

    pub(crate) fn record_dealt(&mut self, count: usize) {
        self.cards_dealt += count as u32;
    }
}

/// Point-in-time copy of `GameStats` handed to the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsSnapshot {
    pub elapsed: Duration,
    pub sets_found: u32,
    pub hints_used: u32,
    pub cards_dealt: u32,
}

impl StatsSnapshot {
    /// Elapsed time as `MM:SS`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed)
    }
}

/// Format a duration as zero-padded `MM:SS`, truncating to whole seconds.
///
/// Minutes are not capped, so an hour reads `60:00`.
#[must_use]
pub fn format_elapsed(elapsed: Duration) -> String {
    let seconds = elapsed.as_secs();
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = GameStats::new();
        assert_eq!(stats.sets_found(), 0);
        assert_eq!(stats.hints_used(), 0);
        assert_eq!(stats.cards_dealt(), 0);
    }

    #[test]
    fn test_counters() {
        let mut stats = GameStats::new();
        stats.record_dealt(12);
        stats.record_dealt(0);
        stats.record_set();
        stats.record_hint();
        stats.record_hint();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.cards_dealt, 12);
        assert_eq!(snapshot.sets_found, 1);
        assert_eq!(snapshot.hints_used, 2);
    }

    #[test]
    fn test_elapsed_is_monotonic() {
        let stats = GameStats::new();
        let first = stats.elapsed();
        let second = stats.elapsed();
        assert!(second >= first);
    }

    #[test]
    fn test_format_elapsed() {
        assert_eq!(format_elapsed(Duration::ZERO), "00:00");
        assert_eq!(format_elapsed(Duration::from_millis(59_999)), "00:59");
        assert_eq!(format_elapsed(Duration::from_secs(125)), "02:05");
        assert_eq!(format_elapsed(Duration::from_secs(3600)), "60:00");
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = StatsSnapshot {
            elapsed: Duration::from_secs(42),
            sets_found: 3,
            hints_used: 1,
            cards_dealt: 21,
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: StatsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(snapshot, deserialized);
        assert_eq!(deserialized.elapsed_display(), "00:42");
    }
}
