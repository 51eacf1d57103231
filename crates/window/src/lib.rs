//! Tracks the n-th highest value of an unbounded stream.
//!
//! The n-th highest value is the minimum of the top n values, so the top n
//! values are kept in a binary min-heap of fixed capacity and the answer is
//! always found at its root.

use base::error::{CreateError, UpdateError};
use base::options::WindowOptions;

/// A fixed-capacity min-heap over the top `capacity` values seen so far.
///
/// `T` must be a total order. An inconsistent `Ord` implementation does not
/// cause memory unsafety, but the reported value is then unspecified.
#[derive(Debug, Clone)]
pub struct RankedWindow<T> {
    capacity: usize,
    heap: Vec<T>,
}

impl<T: Ord> RankedWindow<T> {
    pub fn new(capacity: usize) -> Result<Self, CreateError> {
        if capacity < 1 {
            return Err(CreateError::InvalidArgument {
                reason: "capacity must be at least 1".to_string(),
            });
        }
        let mut heap = Vec::<T>::new();
        heap.try_reserve_exact(capacity)
            .map_err(|e| CreateError::InvalidArgument {
                reason: format!("capacity {capacity} cannot be allocated: {e}"),
            })?;
        log::debug!("created a ranked window of capacity {capacity}");
        Ok(Self { capacity, heap })
    }

    pub fn from_options(options: &WindowOptions) -> Result<Self, CreateError> {
        Self::new(options.capacity()?)
    }

    /// Offers a value from the stream.
    ///
    /// While fewer than `capacity` values have been seen every value is kept.
    /// Afterwards a value replaces the current minimum only if it is strictly
    /// greater; otherwise it cannot be among the top values and is dropped.
    pub fn update(&mut self, value: T) {
        if self.heap.len() < self.capacity {
            self.heap.push(value);
            self.sift_up(self.heap.len() - 1);
        } else if value > self.heap[0] {
            self.heap[0] = value;
            self.sift_down(0);
        }
    }

    /// Like [`RankedWindow::update`], for sources that may yield absent values.
    /// An absent value is rejected and leaves the window untouched.
    pub fn try_update(&mut self, value: Option<T>) -> Result<(), UpdateError> {
        let value = value.ok_or(UpdateError::NullValue)?;
        self.update(value);
        Ok(())
    }

    /// Returns the n-th highest value, or `None` if fewer than n values have
    /// been seen.
    #[inline]
    pub fn query(&self) -> Option<&T> {
        if self.is_full() {
            self.heap.first()
        } else {
            None
        }
    }

    /// Whether [`RankedWindow::update`] would keep this value.
    pub fn admits(&self, value: &T) -> bool {
        !self.is_full() || *value > self.heap[0]
    }

    fn sift_up(&mut self, mut i: usize) {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.heap[i] >= self.heap[parent] {
                break;
            }
            self.heap.swap(i, parent);
            i = parent;
        }
    }

    fn sift_down(&mut self, mut i: usize) {
        let n = self.heap.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;
            let child = if right < n && self.heap[right] < self.heap[left] {
                right
            } else {
                left
            };
            if self.heap[child] >= self.heap[i] {
                break;
            }
            self.heap.swap(i, child);
            i = child;
        }
    }
}

impl<T> RankedWindow<T> {
    pub fn capacity(&self) -> usize {
        self.capacity
    }
    pub fn len(&self) -> usize {
        self.heap.len()
    }
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
    pub fn is_full(&self) -> bool {
        self.heap.len() == self.capacity
    }
    /// The retained values, in heap order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }
}

impl<T: Ord> RankedWindow<T> {
    /// The retained values in ascending order. Once the window is full the
    /// first element is the n-th highest value.
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut vec = self.heap;
        vec.sort();
        vec
    }
}

impl<T: Ord> Extend<T> for RankedWindow<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.update(value);
        }
    }
}

impl<'a, T> IntoIterator for &'a RankedWindow<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
