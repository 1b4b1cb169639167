//! Leaf-evaluation statistics.
//!
//! Search records one entry per leaf (terminal, depth cutoff or time
//! cutoff); the reporting boundary reads the counters after each ply and at
//! game end. All aggregate queries are defined on empty collections and
//! return zero rather than failing, since the boundary may ask before any
//! search has run.

use std::collections::BTreeMap;

use serde::Serialize;

/// Counters for one reporting window (a round or a whole game).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EvalStats {
    /// Total number of leaf evaluations.
    pub total: u64,
    /// Leaf evaluations keyed by the depth at which they occurred.
    pub per_depth: BTreeMap<u32, u64>,
    /// Wall-clock seconds of each top-level search call, in order.
    pub times: Vec<f64>,
}

impl EvalStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_leaf(&mut self, depth: u32) {
        self.total += 1;
        *self.per_depth.entry(depth).or_insert(0) += 1;
    }

    pub fn record_time(&mut self, secs: f64) {
        self.times.push(secs);
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0 && self.times.is_empty()
    }

    /// Mean seconds per recorded search call; 0.0 when none were recorded.
    pub fn average_time(&self) -> f64 {
        if self.times.is_empty() {
            return 0.0;
        }
        self.times.iter().sum::<f64>() / self.times.len() as f64
    }

    pub fn total_time(&self) -> f64 {
        self.times.iter().sum()
    }

    /// Leaf-count-weighted mean evaluation depth; 0.0 when no leaves were
    /// recorded.
    pub fn average_depth(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        let weighted: u64 = self
            .per_depth
            .iter()
            .map(|(depth, count)| u64::from(*depth) * count)
            .sum();
        weighted as f64 / self.total as f64
    }

    pub fn clear(&mut self) {
        self.total = 0;
        self.per_depth.clear();
        self.times.clear();
    }
}

/// Pairs a cumulative window (lifetime of one game) with a per-round window
/// (drained after each ply). Every recording lands in both.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StatsCollector {
    cumulative: EvalStats,
    round: EvalStats,
}

impl StatsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_leaf(&mut self, depth: u32) {
        self.cumulative.record_leaf(depth);
        self.round.record_leaf(depth);
    }

    pub fn record_search_time(&mut self, secs: f64) {
        self.cumulative.record_time(secs);
        self.round.record_time(secs);
    }

    pub fn cumulative(&self) -> &EvalStats {
        &self.cumulative
    }

    pub fn round(&self) -> &EvalStats {
        &self.round
    }

    /// Hand the per-round window to the caller and start a fresh one. The
    /// cumulative window is untouched.
    pub fn drain_round(&mut self) -> EvalStats {
        std::mem::take(&mut self.round)
    }

    /// Full reset, used at game re-initialization.
    pub fn reset(&mut self) {
        self.cumulative.clear();
        self.round.clear();
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod stats_tests;
