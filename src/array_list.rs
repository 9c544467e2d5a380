//! A hand-rolled growable list, in the shape of the classic array-backed
//! `ArrayList`.
//!
//! The backing buffer is a boxed slice of optional slots: the occupied prefix
//! `[0, len)` holds `Some`, everything after it is `None`. Using `Option<E>`
//! for slots keeps the "element or empty" distinction in the type instead of
//! behind an untyped array and a cast at read time.

use std::cmp::Ordering;
use std::fmt;

use itertools::Itertools;

use crate::error::ListError;
use crate::quicksort;

const DEFAULT_CAPACITY: usize = 10;

/// Growable positional list with amortized O(1) append, O(n) arbitrary
/// insert/remove, O(1) indexed access, and comparator-driven sorting.
///
/// Capacity only ever grows (by the 1.5x + 1 policy of [`grow`]); it never
/// shrinks, not even on [`clear`].
///
/// One compatibility quirk is preserved deliberately: the upper bounds check on
/// [`get`], [`insert`], and [`remove_at`] rejects `index > len`, not
/// `index >= len`, so `index == len` passes the check while naming a slot
/// that holds no element. See [`get`] for how that reads out.
///
/// [`get`]: ArrayList::get
/// [`insert`]: ArrayList::insert
/// [`remove_at`]: ArrayList::remove_at
/// [`clear`]: ArrayList::clear
/// [`grow`]: ArrayList::grow
#[derive(Debug)]
pub struct ArrayList<E> {
    slots: Box<[Option<E>]>,
    len: usize,
}

fn empty_slots<E>(capacity: usize) -> Box<[Option<E>]> {
    (0..capacity).map(|_| None).collect()
}

impl<E> ArrayList<E> {
    /// Creates an empty list with the default capacity of 10.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty list with exactly the requested capacity.
    /// Zero is legal; the first append will then allocate.
    pub fn with_capacity(capacity: usize) -> Self {
        ArrayList {
            slots: empty_slots(capacity),
            len: 0,
        }
    }

    /// Number of elements currently held.
    pub fn size(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Total slot count of the backing buffer, occupied or not.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Drops every element and resets the length to zero.
    /// The backing buffer keeps its capacity.
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.len = 0;
    }

    /// Returns the slot at `index`.
    ///
    /// Occupied slots read as `Ok(Some(element))`. The bounds
    /// quirk makes `index == len` pass the range check: while spare
    /// capacity exists that reads the empty slot as `Ok(None)`, and on a
    /// full buffer there is no physical slot to read, which reports
    /// `IndexOutOfBounds`. Anything past `len` is rejected outright.
    pub fn get(&self, index: usize) -> Result<Option<&E>, ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        match self.slots.get(index) {
            Some(slot) => Ok(slot.as_ref()),
            None => Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            }),
        }
    }

    /// Appends an element, growing the buffer first when it is full.
    /// Always returns `true`, the classic "collection changed" contract.
    pub fn add(&mut self, element: E) -> bool {
        if self.len == self.capacity() {
            self.grow(self.len + 1);
        }
        self.slots[self.len] = Some(element);
        self.len += 1;
        true
    }

    /// Inserts `element` at `index`, shifting `[index, len)` one slot to the
    /// right. `index == len` appends.
    pub fn insert(&mut self, index: usize, element: E) -> Result<(), ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        if self.len == self.capacity() {
            self.grow(self.len + 1);
        }
        for i in (index..self.len).rev() {
            self.slots[i + 1] = self.slots[i].take();
        }
        self.slots[index] = Some(element);
        self.len += 1;
        Ok(())
    }

    /// Appends every item in iteration order, growing once to fit.
    /// Returns `true` iff at least one item was appended.
    pub fn add_all<I>(&mut self, items: I) -> bool
    where
        I: IntoIterator<Item = E>,
    {
        let items: Vec<E> = items.into_iter().collect();
        if items.is_empty() {
            return false;
        }
        if items.len() > self.capacity() - self.len {
            self.grow(self.len + items.len());
        }
        for item in items {
            self.slots[self.len] = Some(item);
            self.len += 1;
        }
        true
    }

    /// Grows the backing buffer and returns the new capacity.
    ///
    /// A buffer with positive capacity grows to
    /// `max(capacity * 3 / 2 + 1, min_capacity)`; a zero-capacity buffer
    /// jumps to `max(10, min_capacity)`. The buffer is always reallocated
    /// and the occupied prefix moved over.
    pub fn grow(&mut self, min_capacity: usize) -> usize {
        let capacity = self.capacity();
        let new_capacity = if capacity > 0 {
            (capacity * 3 / 2 + 1).max(min_capacity)
        } else {
            DEFAULT_CAPACITY.max(min_capacity)
        };
        let mut new_slots = empty_slots(new_capacity);
        for (new_slot, old_slot) in new_slots.iter_mut().zip(self.slots.iter_mut()) {
            *new_slot = old_slot.take();
        }
        self.slots = new_slots;
        new_capacity
    }

    /// Removes and returns the element at `index`, shifting `[index + 1,
    /// len)` one slot to the left and clearing the vacated slot.
    ///
    /// `index == len` passes the primary bounds check (the same quirk)
    /// but names no element, so it reports `IndexOutOfBounds` without
    /// touching the list — same as every other rejected index.
    pub fn remove_at(&mut self, index: usize) -> Result<E, ListError> {
        if index > self.len {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }
        let Some(removed) = self.slots.get_mut(index).and_then(Option::take) else {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: self.len,
            });
        };
        for i in index..self.len - 1 {
            self.slots[i] = self.slots[i + 1].take();
        }
        self.len -= 1;
        Ok(removed)
    }

    /// Sorts the occupied prefix with the quicksort, using `compare` as the
    /// ordering. Equal elements may be reordered (the partition is not
    /// stable).
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&E, &E) -> Ordering,
    {
        if self.len < 2 {
            return;
        }
        // Empty slots sit past `high` and never enter the sorted range, but
        // the adapter still gives them a total order (after every element).
        let mut slot_compare = |a: &Option<E>, b: &Option<E>| match (a, b) {
            (Some(a), Some(b)) => compare(a, b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        quicksort::sort_range_by(&mut self.slots, 0, self.len - 1, &mut slot_compare);
    }
}

impl<E: Ord> ArrayList<E> {
    /// Sorts the occupied prefix in natural ascending order.
    pub fn sort(&mut self) {
        self.sort_by(E::cmp);
    }
}

impl<E: PartialEq> ArrayList<E> {
    /// Index of the first element equal to `value`, or `None`.
    pub fn index_of(&self, value: &E) -> Option<usize> {
        self.slots[..self.len]
            .iter()
            .position(|slot| slot.as_ref() == Some(value))
    }

    pub fn contains(&self, value: &E) -> bool {
        self.index_of(value).is_some()
    }

    /// Removes the first element equal to `value`. Returns whether anything
    /// was removed; an empty list or an absent value is a `false` no-op.
    pub fn remove(&mut self, value: &E) -> bool {
        match self.index_of(value) {
            Some(index) => self.remove_at(index).is_ok(),
            None => false,
        }
    }
}

impl<E: fmt::Display> ArrayList<E> {
    /// Space-joined rendering of the occupied prefix; empty string for an
    /// empty list.
    pub fn to_display_string(&self) -> String {
        self.slots[..self.len].iter().flatten().join(" ")
    }
}

impl<E: fmt::Display> fmt::Display for ArrayList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_display_string())
    }
}

impl<E> Default for ArrayList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> FromIterator<E> for ArrayList<E> {
    /// Builds a list from a finite iterator, preserving order. The resulting
    /// capacity equals the element count.
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        let slots: Box<[Option<E>]> = iter.into_iter().map(Some).collect();
        ArrayList {
            len: slots.len(),
            slots,
        }
    }
}
