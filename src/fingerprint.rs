use std::fmt;

use crate::puzzle::Board;

/// Decimal encoding of a board: tile `i` contributes `tile * 10^i`.
///
/// Injective only because every tile is a single digit; it must not be
/// reused for larger puzzles. A valid board always has a non-zero tile
/// somewhere, so every fingerprint is strictly positive.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(u32);

impl Fingerprint {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl Board {
    pub fn fingerprint(&self) -> Fingerprint {
        let mut hash = 0;
        let mut place = 1;
        for &tile in self.tiles() {
            hash += tile as u32 * place;
            place *= 10;
        }
        Fingerprint(hash)
    }
}

impl fmt::Debug for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Least significant digit is cell 0, so this reads as the board backwards.
        write!(f, "{:09}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashMap;

    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    #[test]
    fn fingerprint_is_positional_decimal_sum() {
        let board = Board::new([0, 1, 3, 4, 2, 5, 7, 8, 6]).unwrap();
        assert_eq!(board.fingerprint().get(), 687_524_310);
        assert_eq!(Board::solved().fingerprint().get(), 87_654_321);
    }

    #[test]
    fn fingerprints_are_positive_and_injective() {
        const FUZZ_TIMES: usize = 20_000;

        let mut prng = XorShiftRng::seed_from_u64(0xB0A4D);
        let mut seen: HashMap<Fingerprint, Board> = HashMap::new();

        for _ in 0..FUZZ_TIMES {
            let board = Board::random(&mut prng);
            let fingerprint = board.fingerprint();
            assert!(fingerprint.get() > 0);

            if let Some(previous) = seen.insert(fingerprint, board) {
                assert_eq!(previous, board);
            }
        }
    }
}
