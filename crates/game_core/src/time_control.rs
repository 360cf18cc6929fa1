//! Search clock and search limits.
//!
//! Time is cooperative: a search samples its clock only when it enters a node,
//! so slow move generation or evaluation at a single node can overrun the
//! nominal budget. Callers needing a hard wall-clock bound must impose it
//! outside the search.

use std::time::{Duration, Instant};

/// Start timestamp of one top-level search.
///
/// Captured once when the search begins; every node of that search measures
/// its elapsed time from the same instant.
#[derive(Debug, Clone, Copy)]
pub struct SearchClock {
    start: Instant,
}

impl SearchClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn started_at(&self) -> Instant {
        self.start
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

/// Depth and time limits that decide when a heuristic search stops expanding.
///
/// Either limit firing is enough. `time_buffer` is subtracted from the move
/// time so the search stops early enough to hand its answer back in time.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchLimits {
    /// Ply at which nodes are evaluated instead of expanded (None = unbounded)
    pub max_depth: Option<u32>,
    /// Time allowed for this move (None = infinite)
    pub move_time: Option<Duration>,
    /// Safety margin reserved out of `move_time`
    pub time_buffer: Duration,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u32) -> Self {
        Self {
            max_depth: Some(depth),
            move_time: None,
            time_buffer: Duration::ZERO,
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u32, move_time: Duration) -> Self {
        Self {
            max_depth: Some(depth),
            move_time: Some(move_time),
            time_buffer: Duration::ZERO,
        }
    }

    /// Create limits with only time constraint (infinite depth).
    pub fn time(move_time: Duration) -> Self {
        Self {
            max_depth: None,
            move_time: Some(move_time),
            time_buffer: Duration::ZERO,
        }
    }

    /// No limits at all: the search runs to terminal states.
    pub fn unlimited() -> Self {
        Self {
            max_depth: None,
            move_time: None,
            time_buffer: Duration::ZERO,
        }
    }

    pub fn with_time_buffer(mut self, buffer: Duration) -> Self {
        self.time_buffer = buffer;
        self
    }

    pub fn with_move_time(mut self, move_time: Duration) -> Self {
        self.move_time = Some(move_time);
        self
    }

    /// True once `depth` reaches the depth limit or `elapsed` has eaten the
    /// move time minus the buffer.
    pub fn is_exhausted(&self, depth: u32, elapsed: Duration) -> bool {
        if let Some(max_depth) = self.max_depth
            && depth >= max_depth
        {
            return true;
        }

        match self.move_time {
            Some(limit) => elapsed.saturating_add(self.time_buffer) >= limit,
            None => false,
        }
    }

    /// Get remaining time (None if no limit).
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        let limit = self.move_time?;
        Some(limit.saturating_sub(elapsed.saturating_add(self.time_buffer)))
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(3)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
