use broadside::{AttackTracker, HuntStrategy, ShotResult, Targeting};
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[test]
fn test_hunt_probes_left_first() {
    let mut rng = SmallRng::seed_from_u64(1);
    let tracker = AttackTracker::new();
    let mut strategy = HuntStrategy::new();
    strategy.report_result((3, 3), ShotResult::Hit);

    assert_eq!(strategy.choose_target(&mut rng, &tracker), (2, 3));
}

#[test]
fn test_hunt_returns_last_open_neighbor() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut tracker = AttackTracker::new();
    // left, right and down are spent; only up remains
    tracker.mark(2, 3).unwrap();
    tracker.mark(4, 3).unwrap();
    tracker.mark(3, 4).unwrap();

    let mut strategy = HuntStrategy::new();
    strategy.report_result((3, 3), ShotResult::Hit);

    assert_eq!(strategy.choose_target(&mut rng, &tracker), (3, 2));
}

#[test]
fn test_hunt_skips_off_board_neighbors() {
    let mut rng = SmallRng::seed_from_u64(1);
    let tracker = AttackTracker::new();
    let mut strategy = HuntStrategy::new();
    strategy.report_result((0, 0), ShotResult::Hit);

    // left is off the board, so right comes first
    assert_eq!(strategy.choose_target(&mut rng, &tracker), (1, 0));
}

#[test]
fn test_exhausted_hunt_falls_back_to_random() {
    let mut rng = SmallRng::seed_from_u64(7);
    let mut tracker = AttackTracker::new();
    for (x, y) in [(2, 3), (4, 3), (3, 2), (3, 4)] {
        tracker.mark(x, y).unwrap();
    }

    let mut strategy = HuntStrategy::new();
    strategy.report_result((3, 3), ShotResult::Hit);

    let (x, y) = strategy.choose_target(&mut rng, &tracker);
    assert!(tracker.is_valid_target(x as isize, y as isize));
    assert_eq!(strategy.pending(), None);
}

#[test]
fn test_miss_does_not_abandon_hunt() {
    let mut rng = SmallRng::seed_from_u64(1);
    let mut tracker = AttackTracker::new();
    let mut strategy = HuntStrategy::new();

    strategy.report_result((3, 3), ShotResult::Hit);
    let first = strategy.choose_target(&mut rng, &tracker);
    assert_eq!(first, (2, 3));
    tracker.mark(2, 3).unwrap();
    strategy.report_result(first, ShotResult::Miss);

    // still hunting (3, 3): next cardinal neighbor is right
    assert_eq!(strategy.pending(), Some((3, 3)));
    assert_eq!(strategy.choose_target(&mut rng, &tracker), (4, 3));
}

#[test]
fn test_new_hit_overwrites_hunt_memory() {
    let mut rng = SmallRng::seed_from_u64(1);
    let tracker = AttackTracker::new();
    let mut strategy = HuntStrategy::new();

    strategy.report_result((3, 3), ShotResult::Hit);
    strategy.report_result((6, 6), ShotResult::Hit);
    assert_eq!(strategy.pending(), Some((6, 6)));
    assert_eq!(strategy.choose_target(&mut rng, &tracker), (5, 6));
}

#[test]
fn test_random_fire_never_repeats() {
    let mut rng = SmallRng::seed_from_u64(42);
    let mut tracker = AttackTracker::new();
    let mut strategy = HuntStrategy::new();

    for _ in 0..64 {
        let (x, y) = strategy.choose_target(&mut rng, &tracker);
        assert!(tracker.is_valid_target(x as isize, y as isize));
        tracker.mark(x, y).unwrap();
    }
    assert!(tracker.is_exhausted());
}
