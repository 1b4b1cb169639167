//! Time control and search limits.
//!
//! Shared time management used by any engine implementation to respect a
//! wall-clock budget during search. The budget is soft: the clock is checked
//! at node entry only, so an individual evaluation can overrun it by its own
//! cost, which the safety margin absorbs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::types::Player;

/// Margin subtracted from the time budget so that a search wraps up before
/// the budget itself elapses. Sized to absorb one non-preemptible leaf
/// evaluation plus the return path out of the recursion.
pub const SAFETY_MARGIN: Duration = Duration::from_millis(150);

/// Limits that control when a search must stop deepening.
///
/// Depth is configurable per player because within one search both sides are
/// simulated: a node is cut off when the side to move at that node has
/// exhausted its own depth allowance. Both depths are clamped to the number
/// of empty cells at search start, so a shallow endgame is always solved
/// exactly rather than truncated.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum depth in plies when X is the side simulated at a node.
    pub depth_x: u32,
    /// Maximum depth in plies when O is the side simulated at a node.
    pub depth_o: u32,
    /// Wall-clock budget for this move (None = unlimited).
    pub move_time: Option<Duration>,
    /// Controller consulted at node entry for expiry.
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Same depth for both players, no time limit.
    pub fn depth(depth: u32) -> Self {
        Self::per_player(depth, depth)
    }

    /// Independent depths per player, no time limit.
    pub fn per_player(depth_x: u32, depth_o: u32) -> Self {
        Self {
            depth_x,
            depth_o,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Time constraint only (depth effectively unlimited).
    pub fn time(move_time: Duration) -> Self {
        Self::depth(u32::MAX).with_time(move_time)
    }

    /// Attach a wall-clock budget to these limits.
    pub fn with_time(mut self, move_time: Duration) -> Self {
        self.move_time = Some(move_time);
        self.time_control = TimeControl::new(Some(move_time));
        self
    }

    /// Depth allowance for the given side.
    #[inline]
    pub fn max_depth_for(&self, player: Player) -> u32 {
        match player {
            Player::X => self.depth_x,
            Player::O => self.depth_o,
        }
    }

    /// Check if search should stop due to the time limit.
    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(4)
    }
}

/// Thread-safe time controller tracking whether search should stop.
///
/// Cheaply cloneable and shareable; `is_stopped()` is an atomic load, so it
/// can be consulted at every node without measurable cost. An external owner
/// may also force a stop at any time.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    start_time: Arc<std::sync::RwLock<Option<Instant>>>,
    time_limit: Option<Duration>,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            start_time: Arc::new(std::sync::RwLock::new(None)),
            time_limit,
        }
    }

    /// Start the clock and clear any previous stop.
    pub fn start(&self) {
        *self.start_time.write().unwrap() = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Check the clock, applying the safety margin, and latch the stop flag
    /// once the effective budget is exhausted. Returns true once stopped.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        if let Some(limit) = self.time_limit {
            if let Some(start) = *self.start_time.read().unwrap() {
                if start.elapsed() >= limit.saturating_sub(SAFETY_MARGIN) {
                    self.stop();
                    return true;
                }
            }
        }

        false
    }

    /// Elapsed time since the clock started.
    pub fn elapsed(&self) -> Duration {
        self.start_time
            .read()
            .unwrap()
            .map(|s| s.elapsed())
            .unwrap_or(Duration::ZERO)
    }

    /// Remaining time (None if no limit).
    pub fn remaining(&self) -> Option<Duration> {
        let limit = self.time_limit?;
        let elapsed = self.elapsed();
        if elapsed >= limit {
            Some(Duration::ZERO)
        } else {
            Some(limit - elapsed)
        }
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
