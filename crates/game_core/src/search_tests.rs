use super::*;

#[test]
fn test_leaf_result_has_no_move() {
    let result = AdversarialSearchResult::<usize>::leaf(0.5);
    assert_eq!(result.value, 0.5);
    assert!(result.best_move.is_none());

    let result = AdversarialSearchResult::new(0.9, 3usize);
    assert_eq!(result.best_move, Some(3));
}

#[test]
fn test_statistics_track_deepest_visit() {
    let mut stats = SearchStatistics::new();
    stats.visit(0);
    stats.visit(2);
    stats.visit(1);
    stats.prune();

    assert_eq!(stats.nodes_visited, 3);
    assert_eq!(stats.pruning_count, 1);
    assert_eq!(stats.max_depth_reached, 2);
}

#[test]
fn test_statistics_merge() {
    let mut totals = SearchStatistics {
        nodes_visited: 10,
        pruning_count: 2,
        max_depth_reached: 3,
    };
    totals.merge(&SearchStatistics {
        nodes_visited: 5,
        pruning_count: 1,
        max_depth_reached: 2,
    });

    assert_eq!(totals.nodes_visited, 15);
    assert_eq!(totals.pruning_count, 3);
    assert_eq!(totals.max_depth_reached, 3);
}
