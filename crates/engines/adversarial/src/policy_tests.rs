use super::*;
use game_core::games::tree::{Node, Side, TreeState};

fn state() -> TreeState {
    TreeState::new(Node::uniform(&[0.1, 0.2, 0.3], 2))
}

#[test]
fn test_closures_are_policies() {
    let eval = |_: &TreeState, player: Side| if player == Side::Max { 0.7 } else { 0.3 };
    assert_eq!(eval.evaluate(&state(), Side::Max), 0.7);

    let cutoff = |_: &TreeState, depth: u32, _: Duration| depth > 1;
    assert!(!cutoff.should_cutoff(&state(), 1, Duration::ZERO));
    assert!(cutoff.should_cutoff(&state(), 2, Duration::ZERO));

    let reverse = |_: &TreeState, mut actions: Vec<usize>| {
        actions.reverse();
        actions
    };
    assert_eq!(reverse.order(&state(), vec![0, 1]), vec![1, 0]);
}

#[test]
fn test_depth_cutoff() {
    let cutoff = DepthCutoff(2);
    assert!(!CutoffTest::<TreeState>::should_cutoff(&cutoff, &state(), 1, Duration::ZERO));
    assert!(CutoffTest::<TreeState>::should_cutoff(&cutoff, &state(), 2, Duration::ZERO));
    assert!(!CutoffTest::<TreeState>::should_cutoff(
        &NeverCutoff,
        &state(),
        u32::MAX,
        Duration::MAX
    ));
}

#[test]
fn test_limits_cutoff_fires_on_time() {
    let cutoff = LimitsCutoff(SearchLimits::time(Duration::from_millis(50)));
    assert!(!CutoffTest::<TreeState>::should_cutoff(
        &cutoff,
        &state(),
        10,
        Duration::from_millis(10)
    ));
    assert!(CutoffTest::<TreeState>::should_cutoff(
        &cutoff,
        &state(),
        0,
        Duration::from_millis(50)
    ));
}

#[test]
fn test_scored_ordering_is_stable() {
    let ordering = ScoredOrdering::new(|_: &TreeState, mv: &usize| if *mv >= 2 { 1.0 } else { 0.0 });
    assert_eq!(ordering.order(&state(), vec![0, 1, 2, 3]), vec![2, 3, 0, 1]);
}
