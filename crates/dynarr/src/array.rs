//! The [`DynArray`] container.

use std::cmp::Ordering;
use std::fmt;

use crate::config::{ConfigError, DynArrayConfig};
use crate::error::DynArrayError;
use crate::sort::quicksort_by;
use crate::storage::SlotBuffer;

/// A growable array with bounds-checked indexed mutation.
///
/// Elements occupy slots `[0, len)` of the backing slot buffer in
/// insertion order; slots `[len, capacity)` are empty. Capacity doubles
/// when an append or insert finds the buffer full, and never shrinks.
///
/// Removing or clearing releases ownership immediately: the removed value
/// is moved out to the caller and cleared values are dropped in place.
pub struct DynArray<T> {
    slots: SlotBuffer<T>,
    len: usize,
}

impl<T> DynArray<T> {
    /// Create an empty array with the default initial capacity.
    pub fn new() -> Self {
        Self::from_slots(SlotBuffer::new(DynArrayConfig::DEFAULT_INITIAL_CAPACITY))
    }

    /// Create an empty array from a validated config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `config` fails [`DynArrayConfig::validate`].
    pub fn with_config(config: DynArrayConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_slots(SlotBuffer::new(config.initial_capacity)))
    }

    fn from_slots(slots: SlotBuffer<T>) -> Self {
        Self { slots, len: 0 }
    }

    /// Add `value` at the end, growing first if every slot is in use.
    pub fn append(&mut self, value: T) {
        self.reserve_one();
        self.slots.slots_mut()[self.len] = Some(value);
        self.len += 1;
    }

    /// Insert `value` at `index`, shifting `[index, len)` one slot right.
    ///
    /// `index == len` appends.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::IndexOutOfRange`] if `index > len`. The
    /// array is not modified on error.
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynArrayError> {
        if index > self.len {
            return Err(self.out_of_range(index));
        }
        self.reserve_one();
        // Slot `len` is empty; rotating it to `index` shifts the tail right.
        let slots = self.slots.slots_mut();
        slots[index..=self.len].rotate_right(1);
        slots[index] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// Borrow the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::IndexOutOfRange`] if `index >= len`.
    pub fn get(&self, index: usize) -> Result<&T, DynArrayError> {
        self.live()
            .get(index)
            .and_then(Option::as_ref)
            .ok_or_else(|| self.out_of_range(index))
    }

    /// Remove and return the element at `index`, shifting the tail left.
    ///
    /// The trailing slot vacated by the shift is left empty.
    ///
    /// # Errors
    ///
    /// Returns [`DynArrayError::IndexOutOfRange`] if `index >= len`. The
    /// array is not modified on error.
    pub fn remove_at(&mut self, index: usize) -> Result<T, DynArrayError> {
        let err = self.out_of_range(index);
        let len = self.len;
        let slots = self.slots.slots_mut();
        let removed = slots[..len]
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(err)?;
        // The emptied slot travels to `len - 1`.
        slots[index..len].rotate_left(1);
        self.len -= 1;
        Ok(removed)
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        let len = self.len;
        for slot in &mut self.slots.slots_mut()[..len] {
            *slot = None;
        }
        self.len = 0;
    }

    /// Number of elements.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Number of elements. Same as [`size`](Self::size).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the array holds no elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the backing buffer.
    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Sort the elements in place according to `compare`.
    ///
    /// Uses [`quicksort_by`]: last-element pivot, Lomuto partition, not
    /// stable, O(n²) on already-ordered input. A panicking comparator
    /// unwinds to the caller and leaves the array holding a permutation
    /// of its elements.
    pub fn sort_in_place<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        let len = self.len;
        quicksort_by(&mut self.slots.slots_mut()[..len], |a, b| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            _ => unreachable!("live slot empty"),
        });
    }

    /// Grow the buffer if no empty slot remains.
    fn reserve_one(&mut self) {
        if self.len == self.slots.capacity() {
            self.slots.grow();
        }
    }

    fn live(&self) -> &[Option<T>] {
        &self.slots.slots()[..self.len]
    }

    fn out_of_range(&self, index: usize) -> DynArrayError {
        DynArrayError::IndexOutOfRange {
            index,
            len: self.len,
        }
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DynArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.live().iter().flatten()).finish()
    }
}
