//! Tiered heuristic opponent.
//!
//! Tiers are tried in order and the first that yields a cell wins:
//!
//! 1. **Win**: a cell that completes a line for the computer
//! 2. **Block**: a cell that would complete a line for the opponent
//! 3. **Center**: cell 4
//! 4. **Corner**: random empty corner
//! 5. **Side**: random empty side
//!
//! Win and block scans go through empty cells in ascending order and
//! return the first hit, so they are deterministic. Only the corner and
//! side tiers consume randomness.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{Board, Player, RandomSource, CENTER, CORNERS, SIDES};

/// Strategy for choosing the computer's cell.
pub trait ComputerPolicy {
    /// Pick an empty cell for `player` on `board`.
    ///
    /// # Panics
    ///
    /// Implementations may panic if `board` has no empty cell; callers
    /// must not ask for a move once the game is over.
    fn choose_move(&self, board: &Board, player: Player, rng: &mut dyn RandomSource) -> usize;
}

/// Which tier produced a heuristic move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveTier {
    Win,
    Block,
    Center,
    Corner,
    Side,
}

/// The win / block / centre / corner / side heuristic.
#[derive(Clone, Copy, Debug, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    /// Pick a move and report the tier that chose it.
    ///
    /// # Panics
    ///
    /// If `board` has no empty cell.
    pub fn choose_with_tier(
        &self,
        board: &Board,
        player: Player,
        rng: &mut dyn RandomSource,
    ) -> (usize, MoveTier) {
        assert!(!board.is_full(), "computer move requested on a full board");

        let (index, tier) = if let Some(index) = Self::finishing_cell(board, player) {
            (index, MoveTier::Win)
        } else if let Some(index) = Self::finishing_cell(board, player.opponent()) {
            (index, MoveTier::Block)
        } else if board.is_empty(CENTER) {
            (CENTER, MoveTier::Center)
        } else if let Some(index) = Self::random_empty(board, &CORNERS, rng) {
            (index, MoveTier::Corner)
        } else if let Some(index) = Self::random_empty(board, &SIDES, rng) {
            (index, MoveTier::Side)
        } else {
            unreachable!("a non-full board has an empty centre, corner or side")
        };

        trace!(?player, index, ?tier, "computer move chosen");
        (index, tier)
    }

    /// First empty cell that completes a line for `player`.
    fn finishing_cell(board: &Board, player: Player) -> Option<usize> {
        board
            .empty_indices()
            .find(|&index| board.completes_line(index, player))
    }

    /// Uniform choice among the empty cells of `candidates`.
    fn random_empty(
        board: &Board,
        candidates: &[usize],
        rng: &mut dyn RandomSource,
    ) -> Option<usize> {
        let open: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&index| board.is_empty(index))
            .collect();

        if open.is_empty() {
            return None;
        }
        open.get(rng.pick_index(open.len())).copied()
    }
}

impl ComputerPolicy for HeuristicPolicy {
    fn choose_move(&self, board: &Board, player: Player, rng: &mut dyn RandomSource) -> usize {
        self.choose_with_tier(board, player, rng).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameRng, SequenceSource};

    fn choose(board: &str, picks: &[usize]) -> (usize, MoveTier) {
        let board = Board::parse(board).unwrap();
        let mut rng = SequenceSource::new(picks.to_vec());
        HeuristicPolicy.choose_with_tier(&board, Player::Second, &mut rng)
    }

    #[test]
    fn test_empty_board_takes_center() {
        assert_eq!(choose("___ ___ ___", &[]), (4, MoveTier::Center));
    }

    #[test]
    fn test_blocks_opponent() {
        assert_eq!(choose("XX_ _O_ ___", &[]), (2, MoveTier::Block));
    }

    #[test]
    fn test_win_beats_block() {
        assert_eq!(choose("OO_ XX_ ___", &[]), (2, MoveTier::Win));
    }

    #[test]
    fn test_first_winning_cell_in_index_order() {
        // O can win at 2 (row) or 6 (column); lowest index first.
        assert_eq!(choose("OO_ O_X _XX", &[]), (2, MoveTier::Win));
    }

    #[test]
    fn test_corner_uses_random_source() {
        // Centre taken, no threats: corners 0, 2, 6, 8 all open.
        assert_eq!(choose("___ _X_ ___", &[0]), (0, MoveTier::Corner));
        assert_eq!(choose("___ _X_ ___", &[1]), (2, MoveTier::Corner));
        assert_eq!(choose("___ _X_ ___", &[2]), (6, MoveTier::Corner));
        assert_eq!(choose("___ _X_ ___", &[3]), (8, MoveTier::Corner));
    }

    #[test]
    fn test_corner_skips_filled_corners() {
        // X at 0 and 4 with O at 8: no threats, corners 2 and 6 open.
        assert_eq!(choose("X__ _X_ __O", &[1]), (6, MoveTier::Corner));
    }

    #[test]
    fn test_side_when_corners_and_center_full() {
        // Only 3 and 5 open, and neither completes a line for anyone.
        let board = "XOX _X_ OXO";
        assert_eq!(choose(board, &[0]), (3, MoveTier::Side));
        assert_eq!(choose(board, &[1]), (5, MoveTier::Side));
    }

    #[test]
    fn test_tier_serialization() {
        let json = serde_json::to_string(&MoveTier::Corner).unwrap();
        assert_eq!(json, "\"Corner\"");
        assert_eq!(serde_json::from_str::<MoveTier>(&json).unwrap(), MoveTier::Corner);
    }

    #[test]
    fn test_trial_does_not_mutate_board() {
        let board = Board::parse("XX_ _O_ ___").unwrap();
        let before = board;
        let mut rng = GameRng::new(1);
        let _ = HeuristicPolicy.choose_move(&board, Player::Second, &mut rng);
        assert_eq!(board, before);
    }

    #[test]
    #[should_panic(expected = "full board")]
    fn test_full_board_panics() {
        let _ = choose("XOX XOO OXX", &[]);
    }
}
