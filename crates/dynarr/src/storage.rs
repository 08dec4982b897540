//! Typed slot storage backing [`DynArray`](crate::DynArray).
//!
//! A [`SlotBuffer`] is a fixed-length boxed slice of `Option<T>` slots.
//! The slot count is the array's capacity. The buffer knows nothing about
//! which slots are live; the owning array tracks that with its length.

/// Contiguous, owned slot storage with doubling growth.
///
/// Slots are `Option<T>` so that unused capacity holds no value and a
/// vacated slot releases whatever it owned. The buffer never shrinks.
pub struct SlotBuffer<T> {
    slots: Box<[Option<T>]>,
}

impl<T> SlotBuffer<T> {
    /// Factor applied to the capacity on every growth.
    pub const GROWTH_FACTOR: usize = 2;

    /// Create a buffer with `capacity` empty slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
        }
    }

    /// Total number of slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Double the slot count, moving existing slots to the front of the
    /// new storage. Returns the new capacity.
    ///
    /// A zero-slot buffer grows to one slot.
    pub fn grow(&mut self) -> usize {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity.saturating_mul(Self::GROWTH_FACTOR).max(1);

        let mut slots = std::mem::take(&mut self.slots).into_vec();
        slots.resize_with(new_capacity, || None);
        self.slots = slots.into_boxed_slice();

        #[cfg(feature = "tracing")]
        tracing::trace!(old_capacity, new_capacity, "slot buffer grew");

        new_capacity
    }

    /// Shared view of every slot, used and unused.
    pub fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    /// Mutable view of every slot, used and unused.
    pub fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    /// Number of occupied slots.
    #[cfg(test)]
    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }
}
