//! Linear weighted evaluation over named features.

use std::collections::BTreeMap;

use game_core::GameState;

use crate::config::ConfigError;
use crate::policy::Evaluator;

/// Lowest value a heuristic may return; below this would claim a proven loss.
pub const MIN_EVAL: f64 = 0.01;
/// Highest value a heuristic may return; above this would claim a proven win.
pub const MAX_EVAL: f64 = 0.99;

const WEIGHT_TOLERANCE: f64 = 1e-6;

/// Extracts named features in [0, 1] from a state.
///
/// Features are scored for [`reference_player`](Self::reference_player):
/// 1.0 is as good as it gets for that player, 0.0 as bad.
pub trait FeatureExtractor {
    type State: GameState;

    /// Every name `features` may report, in a fixed order.
    fn feature_names(&self) -> &[&'static str];

    fn reference_player(&self) -> <Self::State as GameState>::Player;

    fn features(&self, state: &Self::State) -> Vec<(&'static str, f64)>;
}

/// `sum(weight * feature)`, clipped to [`MIN_EVAL`, `MAX_EVAL`].
///
/// For the non-reference player each feature counts as `1 - f`. A feature the
/// extractor does not report for some state, or reports as NaN or infinite,
/// counts as 0.5.
#[derive(Debug, Clone)]
pub struct WeightedEvaluator<X> {
    extractor: X,
    weights: Vec<(&'static str, f64)>,
}

impl<X: FeatureExtractor> WeightedEvaluator<X> {
    /// Builds an evaluator from named weights.
    ///
    /// Every key must be one of the extractor's features, no weight may be
    /// negative, and the weights must sum to 1.0. Features without a key get
    /// weight 0. An empty map weights all features equally.
    pub fn new(extractor: X, weights: &BTreeMap<String, f64>) -> Result<Self, ConfigError> {
        if weights.is_empty() {
            return Self::equal(extractor);
        }

        let names = extractor.feature_names();
        if let Some(unknown) = weights
            .keys()
            .find(|key| !names.iter().any(|name| *name == key.as_str()))
        {
            return Err(ConfigError::InvalidWeights(format!(
                "unknown feature '{unknown}' (known: {})",
                names.join(", ")
            )));
        }
        if let Some((name, weight)) = weights.iter().find(|(_, w)| !w.is_finite() || **w < 0.0) {
            return Err(ConfigError::InvalidWeights(format!(
                "weight for '{name}' must be a non-negative number, got {weight}"
            )));
        }
        let sum: f64 = weights.values().sum();
        if (sum - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(ConfigError::InvalidWeights(format!(
                "weights must sum to 1.0, got {sum}"
            )));
        }

        let weights = names
            .iter()
            .map(|&name| (name, weights.get(name).copied().unwrap_or(0.0)))
            .collect();
        Ok(Self { extractor, weights })
    }

    /// Every feature weighted `1 / n`.
    pub fn equal(extractor: X) -> Result<Self, ConfigError> {
        let names = extractor.feature_names();
        if names.is_empty() {
            return Err(ConfigError::InvalidWeights(
                "extractor reports no features".to_string(),
            ));
        }
        let weight = 1.0 / names.len() as f64;
        let weights = names.iter().map(|&name| (name, weight)).collect();
        Ok(Self { extractor, weights })
    }

    pub fn weights(&self) -> &[(&'static str, f64)] {
        &self.weights
    }

    pub fn extractor(&self) -> &X {
        &self.extractor
    }
}

impl<X: FeatureExtractor> Evaluator<X::State> for WeightedEvaluator<X> {
    fn evaluate(&self, state: &X::State, player: <X::State as GameState>::Player) -> f64 {
        let features = self.extractor.features(state);
        let for_reference = player == self.extractor.reference_player();

        let score: f64 = self
            .weights
            .iter()
            .map(|&(name, weight)| {
                let value = features
                    .iter()
                    .find(|(feature, _)| *feature == name)
                    .map(|&(_, value)| value)
                    .filter(|value| value.is_finite())
                    .map_or(0.5, |value| value.clamp(0.0, 1.0));
                let value = if for_reference { value } else { 1.0 - value };
                weight * value
            })
            .sum();

        score.clamp(MIN_EVAL, MAX_EVAL)
    }
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
