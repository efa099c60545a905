use std::fmt::{self, Debug, Formatter};
use std::slice;

/// A binary min-heap, storing a complete binary tree in a single contiguous buffer.
///
/// The children of the item at index `i` are at `2i + 1` and `2i + 2`, and its parent is at
/// `(i - 1) / 2`. Every item is less than or equal to both of its children between operations,
/// so the smallest item is always at index 0.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the MinHeap.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(log n)`* |
/// | `peek` | `O(1)` |
/// | `extract_min` | `O(log n)` |
/// | `remove_all` | `O(1)`** |
///
/// \* Amortized, the buffer may need to grow.
///
/// \** Not counting the time taken to drop the items.
pub struct MinHeap<T> {
    pub(crate) items: Vec<T>,
}

impl<T> MinHeap<T> {
    /// Creates a new, empty MinHeap.
    pub const fn new() -> MinHeap<T> {
        MinHeap {
            items: Vec::new(),
        }
    }

    /// Creates a new, empty MinHeap with room for `cap` items before reallocating.
    pub fn with_cap(cap: usize) -> MinHeap<T> {
        MinHeap {
            items: Vec::with_capacity(cap),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the smallest item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Drops every item in the heap.
    pub fn remove_all(&mut self) -> &mut Self {
        self.items.clear();
        self
    }

    /// Returns an iterator over the items in storage (level) order, which isn't sorted.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    pub(crate) const fn left_child_index(index: usize) -> usize {
        2 * index + 1
    }

    pub(crate) const fn right_child_index(index: usize) -> usize {
        2 * index + 2
    }

    pub(crate) const fn parent_index(index: usize) -> Option<usize> {
        match index {
            0 => None,
            i => Some((i - 1) / 2),
        }
    }
}

impl<T: Ord> MinHeap<T> {
    /// Appends `item` at the end of the buffer and then sifts it up until its parent is no
    /// greater than it.
    pub fn insert(&mut self, item: T) -> &mut Self {
        self.items.push(item);
        self.sift_up(self.items.len() - 1);
        self
    }

    /// Removes and returns the smallest item.
    ///
    /// The last item takes the place of the root and is then sifted down until neither of its
    /// children is smaller.
    pub fn extract_min(&mut self) -> Option<T> {
        let last = self.items.len().checked_sub(1)?;
        self.items.swap(0, last);
        let min = self.items.pop();
        self.sift_down(0);
        min
    }

    /// Consumes the heap, returning its items in ascending order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.len());
        while let Some(item) = self.extract_min() {
            sorted.push(item);
        }
        sorted
    }

    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = Self::parent_index(index) {
            if self.items[index] >= self.items[parent] {
                break;
            }
            self.items.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.smaller_child(index) {
            if self.items[index] <= self.items[child] {
                break;
            }
            self.items.swap(index, child);
            index = child;
        }
    }

    /// Returns the index of the smaller child of `index`. The right child only wins if it is
    /// strictly smaller than the left.
    fn smaller_child(&self, index: usize) -> Option<usize> {
        let left = Self::left_child_index(index);
        let right = Self::right_child_index(index);

        match (self.items.get(left), self.items.get(right)) {
            (Some(l), Some(r)) if r < l => Some(right),
            (Some(_), _) => Some(left),
            (None, _) => None,
        }
    }

    /// Checks the heap property at every index.
    #[cfg(test)]
    pub(crate) fn is_valid(&self) -> bool {
        (0..self.items.len()).all(|i| {
            [Self::left_child_index(i), Self::right_child_index(i)]
                .into_iter()
                .filter_map(|child| self.items.get(child))
                .all(|child| self.items[i] <= *child)
        })
    }
}

impl<T> Default for MinHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> Extend<T> for MinHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for MinHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = MinHeap::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Debug> Debug for MinHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("MinHeap")
            .field("items", &self.items)
            .field("len", &self.len())
            .finish()
    }
}
