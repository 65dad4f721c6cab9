use rand::{seq::SliceRandom, Rng};
use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Width and height of the grid.
pub const ROW: usize = 3;
/// Number of cells, blank included.
pub const SIZE: usize = ROW * ROW;

/// Direction the blank travels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// Successors are always generated in this order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// `(row, column)` delta applied to the blank.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match *self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A validated 3x3 layout stored row-major, `0` being the blank.
///
/// Boards are values: moving the blank produces a new board and leaves
/// the original untouched.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: [u8; SIZE],
    blank: u8,
}

impl Board {
    /// Checks that `tiles` is a permutation of `0..=8`.
    pub fn new(tiles: [u8; SIZE]) -> Result<Self, BoardError> {
        let blank = tiles
            .iter()
            .position(|&tile| tile == 0)
            .ok_or(BoardError::MissingBlank)?;

        let mut seen = [false; SIZE];
        for &tile in &tiles {
            let slot = seen
                .get_mut(tile as usize)
                .ok_or(BoardError::TileOutOfRange { tile })?;
            if *slot {
                return Err(BoardError::DuplicateTile { tile });
            }
            *slot = true;
        }

        Ok(Self {
            tiles,
            blank: blank as u8,
        })
    }

    /// The canonical goal: `1..=8` ascending with the blank last.
    pub fn solved() -> Self {
        Self {
            tiles: [1, 2, 3, 4, 5, 6, 7, 8, 0],
            blank: (SIZE - 1) as u8,
        }
    }

    /// Uniformly random permutation. Half of these cannot reach [`Board::solved`].
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut tiles = Self::solved().tiles;
        tiles.shuffle(rng);

        // Always a permutation of the solved tiles.
        let blank = tiles.iter().position(|&tile| tile == 0).unwrap_or(SIZE - 1);
        Self {
            tiles,
            blank: blank as u8,
        }
    }

    /// Random board guaranteed to be solvable towards [`Board::solved`].
    pub fn random_solvable<R: Rng + ?Sized>(rng: &mut R) -> Self {
        loop {
            let board = Self::random(rng);
            if board.is_solvable() {
                return board;
            }
        }
    }

    pub fn tiles(&self) -> &[u8; SIZE] {
        &self.tiles
    }

    /// Cell index of the blank, row-major.
    pub fn blank(&self) -> usize {
        self.blank as usize
    }

    pub fn tile_at(&self, row: usize, col: usize) -> u8 {
        self.tiles[row * ROW + col]
    }

    pub fn is_solved(&self) -> bool {
        *self == Self::solved()
    }

    /// Cell the blank would land on after `movement`, if it stays on the grid.
    fn target(&self, movement: Move) -> Option<usize> {
        let (dr, dc) = movement.as_offset();

        let new_row = (self.blank() / ROW) as isize + dr;
        let new_col = (self.blank() % ROW) as isize + dc;

        if new_row >= 0 && new_row < ROW as isize && new_col >= 0 && new_col < ROW as isize {
            Some(new_row as usize * ROW + new_col as usize)
        } else {
            None
        }
    }

    /// Moves that keep the blank on the grid, in [`Move::ALL`] order.
    pub fn legal_moves(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL
            .into_iter()
            .filter(move |&movement| self.target(movement).is_some())
    }

    /// Slides the blank one cell; `None` if that would leave the grid.
    pub fn apply(&self, movement: Move) -> Option<Self> {
        let target = self.target(movement)?;

        let mut tiles = self.tiles;
        tiles.swap(self.blank(), target);

        Some(Self {
            tiles,
            blank: target as u8,
        })
    }

    /// Every `(move, board)` pair one step away.
    pub fn successors(&self) -> impl Iterator<Item = (Move, Board)> + '_ {
        Move::ALL
            .into_iter()
            .filter_map(move |movement| Some((movement, self.apply(movement)?)))
    }

    /// Whether `goal` lies in the same permutation-parity class.
    ///
    /// On an odd-width grid every move preserves the inversion parity, so
    /// two boards are mutually reachable exactly when their parities agree.
    pub fn is_solvable_to(&self, goal: &Board) -> bool {
        count_inversions(&self.tiles) % 2 == count_inversions(&goal.tiles) % 2
    }

    pub fn is_solvable(&self) -> bool {
        self.is_solvable_to(&Self::solved())
    }
}

fn count_inversions(tiles: &[u8]) -> usize {
    tiles
        .iter()
        .enumerate()
        .filter(|&(_, &val)| val != 0)
        .map(|(i, &val)| {
            tiles[i + 1..]
                .iter()
                .filter(|&&next| next != 0 && next < val)
                .count()
        })
        .sum()
}

impl TryFrom<[u8; SIZE]> for Board {
    type Error = BoardError;

    fn try_from(tiles: [u8; SIZE]) -> Result<Self, Self::Error> {
        Self::new(tiles)
    }
}

/// Reads the first nine decimal digits in row-major order. Anything that is
/// not a digit is skipped, digits past the ninth are ignored.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tiles = [0; SIZE];
        let mut found = 0;

        for digit in s.chars().filter_map(|c| c.to_digit(10)).take(SIZE) {
            tiles[found] = digit as u8;
            found += 1;
        }

        if found < SIZE {
            return Err(BoardError::TooFewDigits { found });
        }

        Self::new(tiles)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.tiles.chunks(ROW) {
            for &val in row {
                if val == 0 {
                    write!(f, "   ")?;
                } else {
                    write!(f, "{:2} ", val)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({:?})", self.tiles)
    }
}
