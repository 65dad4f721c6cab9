use crate::puzzle::{Board, ROW, SIZE};

/// Sum of Manhattan distances of every non-blank tile to its cell in a goal.
///
/// Goal cells are looked up from the goal board itself, so any reachable
/// layout can serve as the goal. The blank is left out: one move shifts
/// both the blank and a tile, and counting both would overestimate.
#[derive(Clone, Debug)]
pub struct Manhattan {
    /// `(row, col)` of each tile value in the goal, indexed by value.
    goal_pos: [(u8, u8); SIZE],
}

impl Manhattan {
    pub fn new(goal: &Board) -> Self {
        let mut goal_pos = [(0, 0); SIZE];
        for (cell, &tile) in goal.tiles().iter().enumerate() {
            goal_pos[tile as usize] = ((cell / ROW) as u8, (cell % ROW) as u8);
        }
        Self { goal_pos }
    }

    pub fn canonical() -> Self {
        Self::new(&Board::solved())
    }

    pub fn estimate(&self, board: &Board) -> u32 {
        board
            .tiles()
            .iter()
            .enumerate()
            .filter(|&(_, &tile)| tile != 0)
            .map(|(cell, &tile)| {
                let (goal_row, goal_col) = self.goal_pos[tile as usize];
                let row = (cell / ROW) as u8;
                let col = (cell % ROW) as u8;
                (row.abs_diff(goal_row) + col.abs_diff(goal_col)) as u32
            })
            .sum()
    }
}

/// Distance estimate towards [`Board::solved`].
pub fn manhattan(board: &Board) -> u32 {
    Manhattan::canonical().estimate(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::puzzle::Move;

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn goal_scores_zero() {
        assert_eq!(manhattan(&Board::solved()), 0);
    }

    #[test]
    fn known_boards() {
        let near = Board::new([0, 1, 3, 4, 2, 5, 7, 8, 6]).unwrap();
        assert_eq!(manhattan(&near), 4);

        let hardest = Board::new([8, 6, 7, 2, 5, 4, 3, 0, 1]).unwrap();
        assert_eq!(manhattan(&hardest), 21);
    }

    #[test]
    fn only_the_goal_scores_zero() {
        const FUZZ_TIMES: usize = 5_000;

        let mut prng = XorShiftRng::seed_from_u64(3);
        for _ in 0..FUZZ_TIMES {
            let board = Board::random(&mut prng);
            assert_eq!(manhattan(&board) == 0, board.is_solved());
        }
    }

    #[test]
    fn single_move_changes_estimate_by_one() {
        const FUZZ_TIMES: usize = 2_000;

        let heuristic = Manhattan::canonical();
        let mut prng = XorShiftRng::seed_from_u64(11);

        for _ in 0..FUZZ_TIMES {
            let board = Board::random(&mut prng);
            let h = heuristic.estimate(&board);
            for (_, next) in board.successors() {
                assert_eq!(heuristic.estimate(&next).abs_diff(h), 1);
            }
        }
    }

    #[test]
    fn custom_goal_is_honoured() {
        let goal = Board::new([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let heuristic = Manhattan::new(&goal);

        assert_eq!(heuristic.estimate(&goal), 0);
        assert!(heuristic.estimate(&Board::solved()) > 0);

        let one_away = goal.apply(Move::Right).unwrap();
        assert_eq!(heuristic.estimate(&one_away), 1);
    }
}
