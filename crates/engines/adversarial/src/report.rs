//! Running search totals for an engine across the moves of a game.

use game_core::SearchStatistics;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineReport {
    /// Sum of every recorded search
    pub totals: SearchStatistics,
    pub moves_searched: u64,
    pub last_search: Option<SearchStatistics>,
}

/// Serialized form of a report, averages included.
#[derive(Serialize)]
struct ReportView<'a> {
    moves_searched: u64,
    total_nodes: u64,
    total_prunes: u64,
    max_depth_reached: u32,
    avg_nodes_per_move: f64,
    avg_prunes_per_move: f64,
    /// Percentage of visited nodes that ended in a cutoff
    prune_rate: f64,
    last_search: &'a Option<SearchStatistics>,
}

impl EngineReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, stats: &SearchStatistics) {
        self.totals.merge(stats);
        self.moves_searched += 1;
        self.last_search = Some(*stats);
    }

    pub fn avg_nodes_per_move(&self) -> f64 {
        self.average(self.totals.nodes_visited)
    }

    pub fn avg_prunes_per_move(&self) -> f64 {
        self.average(self.totals.pruning_count)
    }

    /// Prunes per hundred visited nodes, over all recorded searches.
    pub fn prune_rate(&self) -> f64 {
        if self.totals.nodes_visited == 0 {
            0.0
        } else {
            self.totals.pruning_count as f64 / self.totals.nodes_visited as f64 * 100.0
        }
    }

    fn average(&self, total: u64) -> f64 {
        if self.moves_searched == 0 {
            0.0
        } else {
            total as f64 / self.moves_searched as f64
        }
    }

    /// Pretty-printed JSON summary.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&ReportView {
            moves_searched: self.moves_searched,
            total_nodes: self.totals.nodes_visited,
            total_prunes: self.totals.pruning_count,
            max_depth_reached: self.totals.max_depth_reached,
            avg_nodes_per_move: self.avg_nodes_per_move(),
            avg_prunes_per_move: self.avg_prunes_per_move(),
            prune_rate: self.prune_rate(),
            last_search: &self.last_search,
        })
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
