use crate::puzzle::{Board, Move};
use crate::search::{Arena, NodeId};

/// One board along a solution together with the move that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// `None` for the starting board.
    pub movement: Option<Move>,
    pub board: Board,
}

/// Ordered walk from the initial board to the goal.
///
/// Only built by `reconstruct`, which always records the starting board, so
/// `steps` holds at least one entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    steps: Vec<Step>,
}

impl Solution {
    /// Starting board first, goal last.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Number of moves, one less than the number of steps.
    pub fn cost(&self) -> usize {
        self.steps.len() - 1
    }

    pub fn moves(&self) -> impl Iterator<Item = Move> + '_ {
        self.steps.iter().filter_map(|step| step.movement)
    }

    pub fn initial_board(&self) -> Board {
        self.steps[0].board
    }

    pub fn final_board(&self) -> Board {
        self.steps[self.steps.len() - 1].board
    }

    /// Whether applying the moves to `initial` one by one reproduces every
    /// recorded board.
    pub fn replay(&self, initial: &Board) -> bool {
        let mut steps = self.steps.iter();

        match steps.next() {
            Some(first) if first.movement.is_none() && first.board == *initial => {}
            _ => return false,
        }

        let mut board = *initial;
        for step in steps {
            let next = step.movement.and_then(|movement| board.apply(movement));
            match next {
                Some(next) if next == step.board => board = next,
                _ => return false,
            }
        }

        true
    }
}

/// Follows parent links from `terminal` back to the root.
pub(crate) fn reconstruct(arena: &Arena, terminal: NodeId) -> Solution {
    let mut steps = Vec::with_capacity(arena.get(terminal).g as usize + 1);

    let mut cursor = Some(terminal);
    while let Some(id) = cursor {
        let node = arena.get(id);
        steps.push(Step {
            movement: node.movement,
            board: node.board,
        });
        cursor = node.parent;
    }

    steps.reverse();
    debug_assert_eq!(steps.len(), arena.get(terminal).g as usize + 1);

    Solution { steps }
}
