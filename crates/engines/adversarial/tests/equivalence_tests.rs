use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use adversarial_engine::{alphabeta, heuristic_alphabeta, minimax, NeverCutoff};
use game_core::games::tree::{Node, Side, TreeGame, TreeState};
use game_core::GameProblem;

const TREES: u64 = 256;
const MAX_HEIGHT: u32 = 5;

/// Random tree with 1..=3 children per branch and leaf values on a coarse
/// grid so ties are common.
fn random_node(rng: &mut StdRng, height: u32) -> Node {
    if height == 0 || (height < MAX_HEIGHT && rng.gen_bool(0.2)) {
        return Node::Leaf(rng.gen_range(0..=10) as f64 / 10.0);
    }
    let children = rng.gen_range(1..=3);
    Node::branch((0..children).map(|_| random_node(rng, height - 1)))
}

fn random_game(seed: u64) -> TreeGame {
    let mut rng = StdRng::seed_from_u64(seed);
    TreeGame::new(random_node(&mut rng, MAX_HEIGHT))
}

#[test]
fn alphabeta_agrees_with_minimax_on_random_trees() {
    let seeds: Vec<u64> = (0..TREES).collect();

    seeds.par_iter().for_each(|&seed| {
        let game = random_game(seed);
        let exhaustive = minimax(&game, game.initial()).unwrap();
        let pruned = alphabeta(&game, game.initial()).unwrap();

        assert_eq!(
            pruned.best_move(),
            exhaustive.best_move(),
            "best move differs for seed {seed}"
        );
        assert_eq!(pruned.value(), exhaustive.value(), "value differs for seed {seed}");
        assert!(
            pruned.stats.nodes_visited <= exhaustive.stats.nodes_visited,
            "seed {seed}: alphabeta visited {} nodes, minimax {}",
            pruned.stats.nodes_visited,
            exhaustive.stats.nodes_visited
        );
        assert_eq!(exhaustive.stats.pruning_count, 0);
        assert_eq!(exhaustive.stats.nodes_visited, game.initial().node().node_count() as u64);
        assert_eq!(exhaustive.stats.max_depth_reached, game.initial().node().height());
    });
}

#[test]
fn unbounded_heuristic_search_is_alphabeta() {
    let seeds: Vec<u64> = (TREES..2 * TREES).collect();
    let never_called = |_: &TreeState, _: Side| -> f64 { panic!("evaluated without a cutoff") };

    seeds.par_iter().for_each(|&seed| {
        let game = random_game(seed);
        let pruned = alphabeta(&game, game.initial()).unwrap();
        let heuristic =
            heuristic_alphabeta(&game, game.initial(), &never_called, &NeverCutoff, None).unwrap();

        assert_eq!(heuristic.best_move(), pruned.best_move(), "seed {seed}");
        assert_eq!(heuristic.value(), pruned.value(), "seed {seed}");
        assert_eq!(heuristic.stats, pruned.stats, "seed {seed}");
    });
}

#[test]
fn minimax_value_is_exact_from_either_side() {
    let seeds: Vec<u64> = (0..32).collect();

    seeds.par_iter().for_each(|&seed| {
        let game = random_game(seed);
        let root = game.initial();
        if game.is_terminal(root) {
            return;
        }
        // Value of the root for Max equals the best child value for Max
        let outcome = minimax(&game, root).unwrap();
        let best_child = game
            .actions(root)
            .into_iter()
            .map(|mv| {
                let child = game.result(root, &mv).unwrap();
                // Searched for Min, who moves there
                1.0 - minimax(&game, &child).unwrap().value()
            })
            .fold(f64::NEG_INFINITY, f64::max);

        assert!((outcome.value() - best_child).abs() < 1e-12, "seed {seed}");
    });
}
