//! Min-heap capped at a fixed capacity, retaining the largest items seen.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// A min-heap holding at most `capacity` elements.
///
/// The root is always the smallest retained element, so after offering a
/// whole stream the heap holds the `capacity` largest items. Offering is
/// O(log capacity); memory stays O(capacity) regardless of stream length.
///
/// ```
/// use algo_patterns::bounded_heap::BoundedMinHeap;
///
/// let mut heap = BoundedMinHeap::new(2);
/// for n in [3, 1, 5, 12, 2, 11] {
///     heap.offer(n);
/// }
///
/// let mut top = heap.into_vec();
/// top.sort();
/// assert_eq!(top, vec![11, 12]);
/// ```
pub struct BoundedMinHeap<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
    capacity: usize,
}

impl<T: Ord> BoundedMinHeap<T> {
    pub fn new(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            capacity,
        }
    }

    /// Offers an item, keeping only the largest `capacity` seen so far.
    ///
    /// Below capacity the item is pushed. At capacity, the item replaces
    /// the current minimum only when it orders strictly above it; the
    /// replacement is a combined pop+push. With capacity 0 nothing is
    /// ever retained.
    pub fn offer(&mut self, item: T) {
        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(item));
        } else if let Some(Reverse(min)) = self.heap.peek() {
            if item > *min {
                self.heap.pop();
                self.heap.push(Reverse(item));
            }
        }
    }

    pub fn peek_min(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(min)| min)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Surrenders the retained elements, order unspecified.
    pub fn into_vec(self) -> Vec<T> {
        self.heap.into_iter().map(|Reverse(item)| item).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_up_to_capacity() {
        let mut heap = BoundedMinHeap::new(3);
        heap.offer(5);
        heap.offer(2);
        heap.offer(8);

        assert_eq!(heap.len(), 3);
        assert_eq!(heap.peek_min(), Some(&2));
    }

    #[test]
    fn evicts_minimum_for_larger_item() {
        let mut heap = BoundedMinHeap::new(3);
        for n in [5, 2, 8, 6] {
            heap.offer(n);
        }

        let mut retained = heap.into_vec();
        retained.sort();

        assert_eq!(retained, vec![5, 6, 8]);
    }

    #[test]
    fn keeps_minimum_for_equal_or_smaller_item() {
        let mut heap = BoundedMinHeap::new(2);
        for n in [4, 7, 4, 1] {
            heap.offer(n);
        }

        let mut retained = heap.into_vec();
        retained.sort();

        assert_eq!(retained, vec![4, 7]);
    }

    #[test]
    fn zero_capacity_retains_nothing() {
        let mut heap = BoundedMinHeap::new(0);
        heap.offer(1);
        heap.offer(2);

        assert!(heap.is_empty());
        assert_eq!(heap.peek_min(), None);
    }
}
