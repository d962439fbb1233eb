//! Top-K selection over a bounded min-heap.

use std::collections::HashMap;

use crate::bounded_heap::BoundedMinHeap;

/// Returns some `k` elements that are the `k` largest in the input,
/// order unspecified.
///
/// `k == 0` yields an empty vec; `k >= nums.len()` yields the whole input.
/// Otherwise a min-heap seeded with the first `k` elements scans the rest,
/// replacing its minimum whenever a larger element turns up. O(n log k).
pub fn top_k_largest(nums: &[i32], k: usize) -> Vec<i32> {
    if k == 0 {
        return Vec::new();
    }
    if k >= nums.len() {
        return nums.to_vec();
    }

    let mut heap = BoundedMinHeap::new(k);
    for &n in nums {
        heap.offer(n);
    }

    heap.into_vec()
}

/// Returns some `k` distinct values occurring most frequently in the input,
/// order unspecified.
///
/// `k == 0` yields an empty vec; `k` at or above the distinct-value count
/// yields every distinct value. Ties among equal counts are broken by the
/// heap's `(count, value)` ordering and are not part of the contract.
/// O(n + n log k).
pub fn top_k_frequent(nums: &[i32], k: usize) -> Vec<i32> {
    if k == 0 {
        return Vec::new();
    }

    let mut count_by_num: HashMap<i32, usize> = HashMap::with_capacity(nums.len());
    for &n in nums {
        *count_by_num.entry(n).or_insert(0) += 1;
    }

    if k >= count_by_num.len() {
        return count_by_num.into_keys().collect();
    }

    let mut heap = BoundedMinHeap::new(k);
    for (num, count) in count_by_num {
        heap.offer((count, num));
    }

    heap.into_vec().into_iter().map(|(_, num)| num).collect()
}
