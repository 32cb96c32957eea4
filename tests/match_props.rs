use broadside::{MatchEngine, Side, Signal, GRID_SIZE};
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// A full automated match always terminates, exactly one fleet is
    /// destroyed, the winning move is a hit, and trackers mirror the
    /// move log one-to-one.
    #[test]
    fn match_always_terminates(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut engine = MatchEngine::new_match(&mut rng).unwrap();

        // Each side can fire at most once per coordinate.
        let max_moves = 2 * GRID_SIZE * GRID_SIZE;
        let mut moves = 0;
        loop {
            match engine.advance(&mut rng).unwrap() {
                Signal::Continue => {
                    moves += 1;
                    prop_assert!(moves <= max_moves, "match did not terminate");
                }
                Signal::Halted => break,
            }
        }
        prop_assert!(engine.is_over());

        let a_destroyed = !engine.state().grid(Side::A).has_ship_cells();
        let b_destroyed = !engine.state().grid(Side::B).has_ship_cells();
        prop_assert!(a_destroyed != b_destroyed, "exactly one fleet must fall");

        let last = engine.move_log().last().unwrap();
        prop_assert!(last.hit);
        let winner = last.side;
        prop_assert!(!engine.state().grid(winner.opponent()).has_ship_cells());

        // Tracker marks correspond one-to-one with logged moves, and no
        // side ever repeated a coordinate.
        for side in [Side::A, Side::B] {
            let side_moves: Vec<(usize, usize)> = engine
                .move_log()
                .iter()
                .filter(|m| m.side == side)
                .map(|m| (m.x, m.y))
                .collect();
            prop_assert_eq!(
                engine.state().tracker(side).marked_count(),
                side_moves.len()
            );
            for &(x, y) in &side_moves {
                prop_assert!(engine.state().tracker(side).is_marked(x, y));
            }
            let mut unique = side_moves.clone();
            unique.sort_unstable();
            unique.dedup();
            prop_assert_eq!(unique.len(), side_moves.len());
        }
    }
}
