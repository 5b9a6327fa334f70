//! Easy tier: a uniformly random empty square.

use crate::{Board, Position};
use rand::Rng;
use rand::seq::SliceRandom;

/// Picks any empty square with equal probability. No look-ahead.
pub fn pick<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<Position> {
    Position::valid_moves(board).choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    #[test]
    fn test_full_board() {
        let board: Board = "XOXOXXOXO".parse().unwrap();
        assert_eq!(pick(&board, &mut StdRng::seed_from_u64(0)), None);
    }

    #[test]
    fn test_distribution_is_uniform_over_empty_squares() {
        // Empty: 1, 3, 5, 7, 8
        let board: Board = "X.O.X.O..".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(2024);
        let trials = 10_000;
        let mut counts: HashMap<Position, u32> = HashMap::new();
        for _ in 0..trials {
            let pos = pick(&board, &mut rng).unwrap();
            *counts.entry(pos).or_default() += 1;
        }

        let mut seen: Vec<usize> = counts.keys().map(|p| p.to_index()).collect();
        seen.sort_unstable();
        assert_eq!(seen, [1, 3, 5, 7, 8]);

        let expected = trials / 5;
        for (pos, count) in counts {
            let deviation = count.abs_diff(expected);
            assert!(
                deviation < expected / 10,
                "{pos} chosen {count} times, expected about {expected}"
            );
        }
    }
}
