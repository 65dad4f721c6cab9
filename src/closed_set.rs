use std::collections::TryReserveError;
use std::fmt;

use crate::error::SolveError;
use crate::fingerprint::Fingerprint;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Slot {
    Empty,
    Occupied(Fingerprint),
}

/// Open-addressing set of settled fingerprints.
///
/// The fingerprint itself is the hash: a key starts probing at
/// `fingerprint % capacity` and walks forward one slot at a time. Capacity is
/// always prime, and the table grows to the next prime at least twice as
/// large before an insertion would push the load factor over its limit.
pub struct ClosedSet {
    slots: Vec<Slot>,
    len: usize,
    max_load_factor: f32,
}

impl ClosedSet {
    /// `max_load_factor` must lie strictly between 0 and 1 so that a scan
    /// from any start always reaches an empty slot.
    pub fn with_capacity(capacity: usize, max_load_factor: f32) -> Result<Self, SolveError> {
        if !(max_load_factor > 0.0 && max_load_factor < 1.0) {
            return Err(SolveError::InvalidConfig {
                reason: "load factor must lie strictly between 0 and 1",
            });
        }

        Ok(Self {
            slots: empty_slots(next_prime(capacity))?,
            len: 0,
            max_load_factor,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn load_factor(&self) -> f32 {
        self.len as f32 / self.capacity() as f32
    }

    /// Returns `false` if `key` was already present.
    pub fn insert(&mut self, key: Fingerprint) -> Result<bool, TryReserveError> {
        if self.contains(key) {
            return Ok(false);
        }

        while (self.len + 1) as f32 / self.capacity() as f32 > self.max_load_factor {
            self.rehash()?;
        }

        while !place(&mut self.slots, key) {
            self.rehash()?;
        }
        self.len += 1;

        Ok(true)
    }

    pub fn contains(&self, key: Fingerprint) -> bool {
        let capacity = self.capacity();
        let h = key.get() as usize;

        for i in 0..capacity {
            match self.slots[slot_index(h, i, capacity)] {
                Slot::Empty => return false,
                Slot::Occupied(other) if other == key => return true,
                Slot::Occupied(_) => {}
            }
        }

        false
    }

    fn rehash(&mut self) -> Result<(), TryReserveError> {
        let old_capacity = self.capacity();
        let mut new_capacity = old_capacity;

        // A table at least as large as the key count always takes every key.
        let slots = loop {
            new_capacity = next_prime(new_capacity * 2);
            let mut slots = empty_slots(new_capacity)?;
            let all_placed = self
                .slots
                .iter()
                .filter_map(|slot| match *slot {
                    Slot::Occupied(key) => Some(key),
                    Slot::Empty => None,
                })
                .all(|key| place(&mut slots, key));
            if all_placed {
                break slots;
            }
        };

        log::trace!(
            "closed set rehashed {} keys: capacity {} -> {}",
            self.len,
            old_capacity,
            slots.len()
        );

        self.slots = slots;
        Ok(())
    }

    /// Occupied keys in slot order.
    pub fn iter(&self) -> impl Iterator<Item = Fingerprint> + '_ {
        self.slots.iter().filter_map(|slot| match *slot {
            Slot::Occupied(key) => Some(key),
            Slot::Empty => None,
        })
    }
}

fn empty_slots(capacity: usize) -> Result<Vec<Slot>, TryReserveError> {
    let mut slots = Vec::new();
    slots.try_reserve_exact(capacity)?;
    slots.resize(capacity, Slot::Empty);
    Ok(slots)
}

fn slot_index(h: usize, i: usize, capacity: usize) -> usize {
    (h + i) % capacity
}

/// Writes `key` into the first empty slot at or after its home slot. Returns
/// `false` if every slot is taken.
fn place(slots: &mut [Slot], key: Fingerprint) -> bool {
    let capacity = slots.len();
    let h = key.get() as usize;

    for i in 0..capacity {
        let slot = &mut slots[slot_index(h, i, capacity)];
        if *slot == Slot::Empty {
            *slot = Slot::Occupied(key);
            return true;
        }
    }

    false
}

fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    let mut i = 2;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}

/// Smallest prime `>= n`.
fn next_prime(n: usize) -> usize {
    let mut candidate = n.max(2);
    while !is_prime(candidate) {
        candidate += 1;
    }
    candidate
}

impl fmt::Debug for ClosedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosedSet")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("keys", &self.iter().collect::<Vec<_>>())
            .finish()
    }
}
