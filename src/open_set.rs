use std::collections::TryReserveError;
use std::fmt;

pub const DEFAULT_ARITY: usize = 4;

#[derive(Clone, Copy)]
struct Entry<T> {
    f: u32,
    item: T,
}

/// Array-backed `D`-ary min-heap keyed by `f`.
///
/// There is no decrease-key: the same state may be pushed several times and
/// the caller discards the stale copies when they surface. Ties come out in
/// whatever order the heap shape dictates.
pub struct OpenSet<T, const D: usize = DEFAULT_ARITY> {
    heap: Vec<Entry<T>>,
}

impl<T: Copy, const D: usize> OpenSet<T, D> {
    const ARITY_AT_LEAST_TWO: () = assert!(D >= 2, "heap arity must be at least 2");

    pub fn with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let () = Self::ARITY_AT_LEAST_TWO;

        let mut heap = Vec::new();
        heap.try_reserve_exact(capacity)?;
        Ok(Self { heap })
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.heap.capacity()
    }

    pub fn push(&mut self, f: u32, item: T) -> Result<(), TryReserveError> {
        // double when full
        if self.heap.len() == self.heap.capacity() {
            self.heap.try_reserve_exact(self.heap.capacity().max(1))?;
        }

        self.heap.push(Entry { f, item });
        self.sift_up(self.heap.len() - 1);
        Ok(())
    }

    /// Removes the entry with the smallest `f`, or `None` when empty.
    pub fn pop_min(&mut self) -> Option<(u32, T)> {
        if self.heap.is_empty() {
            return None;
        }

        // The last entry takes the root's place and sinks from there.
        let top = self.heap.swap_remove(0);
        self.sift_down(0);
        Some((top.f, top.item))
    }

    pub fn peek_min(&self) -> Option<(u32, T)> {
        self.heap.first().map(|entry| (entry.f, entry.item))
    }

    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / D;
            if self.heap[pos].f < self.heap[parent].f {
                self.heap.swap(pos, parent);
                pos = parent;
            } else {
                break;
            }
        }
    }

    fn sift_down(&mut self, mut pos: usize) {
        let len = self.heap.len();
        loop {
            let first = D * pos + 1;
            if first >= len {
                break;
            }

            let mut child = first;
            for candidate in first + 1..(first + D).min(len) {
                if self.heap[candidate].f < self.heap[child].f {
                    child = candidate;
                }
            }

            if self.heap[child].f < self.heap[pos].f {
                self.heap.swap(pos, child);
                pos = child;
            } else {
                break;
            }
        }
    }
}

impl<T, const D: usize> fmt::Debug for OpenSet<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenSet")
            .field("arity", &D)
            .field("f", &self.heap.iter().map(|entry| entry.f).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::cmp::Reverse;
    use std::collections::BinaryHeap;

    use rand::{Rng, SeedableRng};
    use rand_xorshift::XorShiftRng;

    fn deterministic_prng() -> XorShiftRng {
        XorShiftRng::seed_from_u64(0x0BE5E7)
    }

    #[test]
    fn empty_pop_is_none() {
        let mut open: OpenSet<usize> = OpenSet::with_capacity(0).unwrap();
        assert!(open.is_empty());
        assert_eq!(open.pop_min(), None);
        assert_eq!(open.peek_min(), None);
    }

    #[test]
    fn storage_doubles_when_full() {
        let mut open: OpenSet<usize> = OpenSet::with_capacity(4).unwrap();
        let initial = open.capacity();

        for i in 0..=initial {
            open.push(i as u32, i).unwrap();
        }

        assert!(open.capacity() >= initial * 2);
        assert_eq!(open.len(), initial + 1);
    }

    fn pops_are_sorted<const D: usize>(prng: &mut XorShiftRng) {
        let mut open: OpenSet<usize, D> = OpenSet::with_capacity(1).unwrap();

        let count = prng.gen_range(0..500);
        let mut pushed: Vec<u32> = (0..count).map(|_| prng.gen_range(0..60)).collect();
        for (i, &f) in pushed.iter().enumerate() {
            open.push(f, i).unwrap();
        }

        let mut popped = Vec::with_capacity(count);
        while let Some((f, i)) = open.pop_min() {
            assert_eq!(pushed[i], f);
            popped.push(f);
        }

        pushed.sort_unstable();
        assert_eq!(popped, pushed);
    }

    #[test]
    fn pops_are_non_decreasing_for_any_arity() {
        const FUZZ_TIMES: usize = 200;

        let mut prng = deterministic_prng();

        for _ in 0..FUZZ_TIMES {
            pops_are_sorted::<2>(&mut prng);
            pops_are_sorted::<3>(&mut prng);
            pops_are_sorted::<4>(&mut prng);
            pops_are_sorted::<7>(&mut prng);
        }
    }

    #[test]
    fn interleaved_operations_match_binary_heap() {
        const FUZZ_TIMES: usize = 200;

        let mut prng = deterministic_prng();

        for _ in 0..FUZZ_TIMES {
            let mut open: OpenSet<u32> = OpenSet::with_capacity(8).unwrap();
            let mut reference = BinaryHeap::new();

            for _ in 0..prng.gen_range(0..400) {
                if prng.gen_bool(0.6) {
                    let f = prng.gen_range(0..40);
                    open.push(f, f).unwrap();
                    reference.push(Reverse(f));
                } else {
                    let expected = reference.pop().map(|Reverse(f)| (f, f));
                    assert_eq!(open.pop_min(), expected);
                }

                assert_eq!(open.len(), reference.len());
                assert_eq!(
                    open.peek_min().map(|(f, _)| f),
                    reference.peek().map(|&Reverse(f)| f)
                );
            }
        }
    }
}
