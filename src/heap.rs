use std::fmt;

use thiserror::Error;

use crate::snapshot::{Snapshot, SnapshotHook, Style};

/// Failure cases of the fallible heap operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    #[error("heap contains no elements")]
    EmptyHeap,
    #[error("position {position} is outside the occupied range 1..={len}")]
    IndexOutOfRange { position: usize, len: usize },
}

/// Traversal order for `MaxHeap::sort`. The direction names the position
/// sweep, not the ordering of the result: an ascending sweep sifts every
/// position up and leaves the array in heap order, a descending sweep runs
/// the heap-sort extraction and leaves the contents in non-decreasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Array-backed binary max-heap that reports every mutation through an
/// optional snapshot hook.
///
/// Positions are 1-based: the root is position 1, position p has parent
/// p / 2 and children 2p and 2p + 1. Position p is stored at index p - 1.
pub struct MaxHeap<T: Ord> {
    data: Vec<T>,
    style: Style,
    hook: Option<SnapshotHook<T>>,
}

impl<T: Ord> MaxHeap<T> {
    pub fn new() -> Self {
        MaxHeap::with_style(Style::default())
    }

    pub fn with_style(style: Style) -> Self {
        MaxHeap {
            data: Vec::new(),
            style,
            hook: None,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Contents in level order, positions 1 through len.
    pub fn values(&self) -> &[T] {
        &self.data
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Register a callback to run after every mutation step, replacing any
    /// previous hook. Failed operations do not reach the hook.
    pub fn set_hook<F>(&mut self, hook: F)
    where
        F: FnMut(Snapshot<'_, T>) + 'static,
    {
        self.hook = Some(Box::new(hook));
    }

    pub fn clear_hook(&mut self) {
        self.hook = None;
    }

    /// The element at position 1, the maximum.
    /// Returns EmptyHeap when the heap has no elements.
    pub fn peek_max(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    /// Place a value at the first free position and walk it up toward the
    /// root until its parent is at least as large. Fires one snapshot.
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        self.emit();
    }

    /// Swap the maximum with the last position, shrink the heap by one, and
    /// sift the promoted value down. Fires one snapshot. The removed value
    /// is discarded; read it with peek_max beforehand if it is needed.
    /// Returns EmptyHeap when the heap has no elements.
    pub fn remove_max(&mut self) -> Result<(), HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        self.data.pop();
        self.sift_down(0, self.data.len());
        self.emit();
        Ok(())
    }

    /// Overwrite the value at a 1-based position, then restore heap order
    /// with a full ascending rebuild pass (not a local sift, which settles
    /// some arrays differently). Fires one snapshot after the rebuild.
    /// Returns IndexOutOfRange, touching nothing, when the position is 0 or
    /// past the last occupied position.
    pub fn change_priority(&mut self, position: usize, value: T) -> Result<(), HeapError> {
        if position == 0 || position > self.data.len() {
            return Err(HeapError::IndexOutOfRange {
                position,
                len: self.data.len(),
            });
        }
        self.data[position - 1] = value;
        self.rebuild();
        self.emit();
        Ok(())
    }

    /// Sweep every position in the given direction, firing one snapshot per
    /// step. Ascending sifts positions 1 through size up in turn, rebuilding
    /// heap order over the whole array. Descending swaps the root with
    /// positions size down to 2 and sifts down over the shrinking prefix;
    /// starting from a valid heap this sorts the contents in non-decreasing
    /// order and heap order does not survive it.
    pub fn sort(&mut self, direction: SortDirection) {
        match direction {
            SortDirection::Ascending => {
                for pos in 0..self.data.len() {
                    self.sift_up(pos);
                    self.emit();
                }
            }
            SortDirection::Descending => {
                for end in (1..self.data.len()).rev() {
                    self.data.swap(0, end);
                    self.sift_down(0, end);
                    self.emit();
                }
            }
        }
    }

    fn rebuild(&mut self) {
        /* Ascending sift-up sweep, equivalent to reinserting every element
        in place */
        for pos in 0..self.data.len() {
            self.sift_up(pos);
        }
    }

    fn sift_up(&mut self, mut pos: usize) {
        /* Walk the value at `pos` toward the root while its parent is
        strictly smaller */
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if self.data[parent] >= self.data[pos] {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    fn sift_down(&mut self, mut pos: usize, end: usize) {
        /* Walk the value at `pos` down within data[..end], stepping through
        the larger child; on a tie the left child wins */
        loop {
            let left = 2 * pos + 1;
            if left >= end {
                break;
            }
            let mut child = left;
            if left + 1 < end && self.data[left + 1] > self.data[left] {
                child = left + 1;
            }
            if self.data[child] <= self.data[pos] {
                break;
            }
            self.data.swap(pos, child);
            pos = child;
        }
    }

    fn emit(&mut self) {
        if let Some(hook) = self.hook.as_mut() {
            hook(Snapshot {
                values: &self.data,
                style: &self.style,
            });
        }
    }
}

impl<T: Ord> Default for MaxHeap<T> {
    fn default() -> Self {
        MaxHeap::new()
    }
}

impl<T: Ord> From<Vec<T>> for MaxHeap<T> {
    fn from(values: Vec<T>) -> Self {
        let mut heap = MaxHeap::new();
        heap.extend(values);
        heap
    }
}

impl<T: Ord> Extend<T> for MaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for MaxHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MaxHeap")
            .field("title", &self.style.title)
            .field("values", &self.data)
            .finish()
    }
}
