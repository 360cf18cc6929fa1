//! Adversarial Search Engines
//!
//! Exhaustive minimax and alpha-beta, plus a depth/time bounded alpha-beta
//! that falls back to a static evaluator at the cutoff. All of them work on
//! any game implementing [`GameProblem`] and are exposed both as plain
//! functions and as [`Engine`] implementations.

mod config;
mod eval;
mod heuristic;
mod policy;
mod report;
mod search;

use game_core::{Engine, EngineResult, GameError, GameProblem, GameState, MoveOf, SearchLimits};
use log::debug;

pub use config::{ConfigError, EngineConfig};
pub use eval::{FeatureExtractor, WeightedEvaluator, MAX_EVAL, MIN_EVAL};
pub use heuristic::{heuristic_alphabeta, heuristic_alphabeta_search};
pub use policy::{
    CutoffTest, DepthCutoff, Evaluator, LimitsCutoff, MoveOrdering, NeverCutoff, ScoredOrdering,
};
pub use report::EngineReport;
pub use search::{alphabeta, alphabeta_search, minimax, minimax_search};

/// Plain minimax over the whole game tree.
///
/// Search limits are ignored: the game must be small enough to solve.
#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    /// Node counter for statistics
    nodes: u64,
}

impl MinimaxEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Nodes visited by the most recent search.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<P: GameProblem> Engine<P> for MinimaxEngine {
    fn search(
        &mut self,
        problem: &P,
        state: &P::State,
        _limits: &SearchLimits,
    ) -> Result<EngineResult<MoveOf<P>>, GameError> {
        let outcome = minimax(problem, state)?;
        self.nodes = outcome.stats.nodes_visited;
        Ok(outcome.into())
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Alpha-beta over the whole game tree; same answers as [`MinimaxEngine`],
/// fewer nodes.
#[derive(Debug, Clone, Default)]
pub struct AlphaBetaEngine {
    nodes: u64,
}

impl AlphaBetaEngine {
    pub fn new() -> Self {
        Self { nodes: 0 }
    }

    pub fn nodes(&self) -> u64 {
        self.nodes
    }
}

impl<P: GameProblem> Engine<P> for AlphaBetaEngine {
    fn search(
        &mut self,
        problem: &P,
        state: &P::State,
        _limits: &SearchLimits,
    ) -> Result<EngineResult<MoveOf<P>>, GameError> {
        let outcome = alphabeta(problem, state)?;
        self.nodes = outcome.stats.nodes_visited;
        Ok(outcome.into())
    }

    fn name(&self) -> &str {
        "Alpha-beta"
    }

    fn new_game(&mut self) {
        self.nodes = 0;
    }
}

/// Heuristic alpha-beta with an evaluator, an optional move ordering and a
/// config.
///
/// Keeps an [`EngineReport`] of every search since the last `new_game`. When
/// the cutoff fires at the root of a live game, a random legal move is played.
pub struct HeuristicEngine<S, E>
where
    S: GameState,
{
    eval: E,
    order: Option<Box<dyn MoveOrdering<S>>>,
    config: EngineConfig,
    report: EngineReport,
}

impl<S, E> HeuristicEngine<S, E>
where
    S: GameState,
    E: Evaluator<S>,
{
    pub fn new(eval: E) -> Self {
        Self {
            eval,
            order: None,
            config: EngineConfig::default(),
            report: EngineReport::new(),
        }
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_ordering(mut self, order: impl MoveOrdering<S> + 'static) -> Self {
        self.order = Some(Box::new(order));
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn report(&self) -> &EngineReport {
        &self.report
    }

    /// Picks a move within the config's own depth and time limits.
    pub fn choose_move<P>(&mut self, problem: &P, state: &S) -> Result<Option<S::Move>, GameError>
    where
        P: GameProblem<State = S>,
    {
        let limits = self.config.limits();
        Ok(self.run(problem, state, &limits)?.best_move)
    }

    fn run<P>(
        &mut self,
        problem: &P,
        state: &S,
        limits: &SearchLimits,
    ) -> Result<EngineResult<S::Move>, GameError>
    where
        P: GameProblem<State = S>,
    {
        let cutoff = LimitsCutoff(limits.clone());
        let outcome =
            heuristic_alphabeta(problem, state, &self.eval, &cutoff, self.order.as_deref())?;
        self.report.record(&outcome.stats);

        let mut result = EngineResult::from(outcome);
        if result.best_move.is_none() && !problem.is_terminal(state) {
            // Cut off at the root: still play something legal
            debug!("{}: no move searched, playing a random one", self.config.name);
            result.best_move = Some(random_engine::choose_random(problem, state));
        }
        Ok(result)
    }
}

impl<P, E> Engine<P> for HeuristicEngine<P::State, E>
where
    P: GameProblem,
    E: Evaluator<P::State>,
{
    fn search(
        &mut self,
        problem: &P,
        state: &P::State,
        limits: &SearchLimits,
    ) -> Result<EngineResult<MoveOf<P>>, GameError> {
        self.run(problem, state, limits)
    }

    fn name(&self) -> &str {
        &self.config.name
    }

    fn new_game(&mut self) {
        self.report = EngineReport::new();
    }
}
