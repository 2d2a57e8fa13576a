// SPDX-License-Identifier: Apache-2.0

use alloc::vec::Drain;
use alloc::vec::Vec;

/// Capacity of the first allocation made by a [`ScratchBuffer`].
pub const DEFAULT_INITIAL_CAPACITY: usize = 256;

/// Error types for ScratchBuffer operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScratchError {
    /// Attempted to remove more entries than are currently staged.
    Underflow {
        /// Number of entries the caller asked to remove.
        requested: usize,
        /// Number of entries actually in the buffer.
        available: usize,
    },
}

/// A growable stack of staged entries used as working memory during one parse.
///
/// String decoding stages bytes here; array and object builders stage their
/// children here until the closing bracket tells them how many there are.
/// Because recursion is depth-first, a nested collection always pops its own
/// region before its parent resumes, so the tail of the buffer is always the
/// innermost in-progress region.
///
/// Capacity grows by a factor of 1.5 (repeatedly, until the request fits) and
/// never shrinks, not even on [`reset`](Self::reset).
///
/// The view returned by [`truncate`](Self::truncate) borrows the buffer
/// mutably, so the buffer cannot be touched again until the caller has copied
/// or consumed the removed entries.
#[derive(Debug)]
pub struct ScratchBuffer<T> {
    data: Vec<T>,
    /// Logical capacity; the allocation in `data` is at least this large.
    capacity: usize,
    initial_capacity: usize,
}

impl<T> ScratchBuffer<T> {
    /// Create an empty buffer with the default first-allocation size.
    ///
    /// No memory is allocated until the first entry is staged.
    pub fn new() -> Self {
        Self::with_initial_capacity(DEFAULT_INITIAL_CAPACITY)
    }

    /// Create an empty buffer whose first allocation holds `initial_capacity` entries.
    pub fn with_initial_capacity(initial_capacity: usize) -> Self {
        Self {
            data: Vec::new(),
            capacity: 0,
            initial_capacity: initial_capacity.max(1),
        }
    }

    /// Number of staged entries.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if nothing is staged.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current capacity in entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Stage a single entry at the tail.
    ///
    /// # Returns
    /// The offset at which the entry was placed.
    pub fn push(&mut self, item: T) -> usize {
        self.reserve(1);
        let offset = self.data.len();
        self.data.push(item);
        offset
    }

    /// Stage a run of entries at the tail.
    ///
    /// # Returns
    /// The offset of the first appended entry.
    pub fn append(&mut self, items: &[T]) -> usize
    where
        T: Clone,
    {
        self.reserve(items.len());
        let offset = self.data.len();
        self.data.extend_from_slice(items);
        offset
    }

    /// Remove the last `n` entries, yielding them in staging order.
    ///
    /// Entries the caller does not consume are dropped with the iterator.
    ///
    /// # Errors
    /// [`ScratchError::Underflow`] if `n` exceeds [`len`](Self::len). The
    /// buffer is left untouched in that case.
    pub fn truncate(&mut self, n: usize) -> Result<Drain<'_, T>, ScratchError> {
        let available = self.data.len();
        let start = available.checked_sub(n).ok_or(ScratchError::Underflow {
            requested: n,
            available,
        })?;
        Ok(self.data.drain(start..))
    }

    /// Drop every staged entry, keeping the allocation.
    pub fn reset(&mut self) {
        self.data.clear();
    }

    fn reserve(&mut self, additional: usize) {
        let needed = self.data.len().saturating_add(additional);
        if needed <= self.capacity {
            return;
        }
        let mut new_capacity = if self.capacity == 0 {
            self.initial_capacity
        } else {
            self.capacity
        };
        while new_capacity < needed {
            new_capacity = new_capacity.saturating_add((new_capacity / 2).max(1));
        }
        self.data
            .reserve_exact(new_capacity.saturating_sub(self.data.len()));
        self.capacity = new_capacity;
    }
}

impl<T> Default for ScratchBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
