//! Heuristic opponent integration tests.

use std::collections::HashSet;

use rust_ttt::ai::{ComputerPolicy, HeuristicPolicy, MoveTier};
use rust_ttt::core::{Board, GameRng, Player, RandomSource, SequenceSource};

fn tier(board: &str) -> MoveTier {
    let board = Board::parse(board).unwrap();
    let mut rng = SequenceSource::new(vec![0]);
    HeuristicPolicy.choose_with_tier(&board, Player::Second, &mut rng).1
}

// =============================================================================
// Tier Ordering
// =============================================================================

#[test]
fn test_tier_order() {
    assert_eq!(tier("OO_ XX_ ___"), MoveTier::Win);
    assert_eq!(tier("XX_ _O_ ___"), MoveTier::Block);
    assert_eq!(tier("X__ ___ ___"), MoveTier::Center);
    assert_eq!(tier("___ _X_ ___"), MoveTier::Corner);
    assert_eq!(tier("XOX _X_ OXO"), MoveTier::Side);
}

/// Win/block tiers ignore the random source entirely.
#[test]
fn test_win_and_block_are_deterministic() {
    let board = Board::parse("XX_ _O_ ___").unwrap();
    let picks: HashSet<usize> = (0..20u64)
        .map(|seed| HeuristicPolicy.choose_move(&board, Player::Second, &mut GameRng::new(seed)))
        .collect();
    assert_eq!(picks, HashSet::from([2]));
}

/// Block scans cells in ascending order when the opponent has two threats.
#[test]
fn test_block_takes_lowest_threat() {
    // X threatens 2 (row 0-1-2) and 6 (column 0-3-6).
    let board = Board::parse("XX_ XO_ ___").unwrap();
    let mut rng = SequenceSource::new(vec![0]);
    assert_eq!(
        HeuristicPolicy.choose_with_tier(&board, Player::Second, &mut rng),
        (2, MoveTier::Block)
    );
}

// =============================================================================
// Randomised Tiers
// =============================================================================

/// Corner choices cover every open corner across seeds.
#[test]
fn test_corner_choice_is_spread() {
    let board = Board::parse("___ _X_ ___").unwrap();
    let picks: HashSet<usize> = (0..64u64)
        .map(|seed| HeuristicPolicy.choose_move(&board, Player::Second, &mut GameRng::new(seed)))
        .collect();
    assert_eq!(picks, HashSet::from([0, 2, 6, 8]));
}

/// Same seed, same corner.
#[test]
fn test_seeded_choice_repeats() {
    let board = Board::parse("___ _X_ ___").unwrap();
    let a = HeuristicPolicy.choose_move(&board, Player::Second, &mut GameRng::new(5));
    let b = HeuristicPolicy.choose_move(&board, Player::Second, &mut GameRng::new(5));
    assert_eq!(a, b);
}

/// A custom policy plugs into the same seam.
#[test]
fn test_custom_policy() {
    struct LastEmpty;

    impl ComputerPolicy for LastEmpty {
        fn choose_move(&self, board: &Board, _: Player, _: &mut dyn RandomSource) -> usize {
            board.empty_indices().last().unwrap()
        }
    }

    let engine = rust_ttt::BoardEngine::new(rust_ttt::Mode::VersusComputer);
    let mut rng = SequenceSource::new(vec![0]);
    assert_eq!(engine.compute_move_with(&LastEmpty, &mut rng), 8);
}

/// Heuristic self-play always finishes within nine plies.
#[test]
fn test_self_play_terminates() {
    for seed in 0..32u64 {
        let mut engine = rust_ttt::BoardEngine::new(rust_ttt::Mode::TwoPlayer);
        let mut rng = GameRng::new(seed);
        let mut plies = 0;

        while engine.is_active() {
            let mover = engine.current_player();
            let index = HeuristicPolicy.choose_move(engine.board(), mover, &mut rng);
            assert!(engine.place_mark(index).is_some());
            engine.evaluate_result();
            plies += 1;
        }

        assert!(plies <= 9);
        assert!(engine.status().is_over());
    }
}
