//! Fixed-size sliding window over a numeric slice.

/// Maximum sum over all contiguous windows of exactly `k` elements.
///
/// Returns 0 for degenerate input: `k == 0`, `k` larger than the slice, or
/// an empty slice. One pass; the window sum gains the element entering on
/// the right and, once the window is full, sheds the oldest element on the
/// left before advancing.
pub fn max_sub_array_of_size_k(k: usize, arr: &[i32]) -> i64 {
    if arr.is_empty() || k == 0 || k > arr.len() {
        return 0;
    }

    let mut max_sum: i64 = 0;
    let mut window_sum: i64 = 0;
    let mut window_start = 0;

    for (window_end, &n) in arr.iter().enumerate() {
        window_sum += n as i64;

        if window_end >= k - 1 {
            max_sum = max_sum.max(window_sum);
            window_sum -= arr[window_start] as i64;
            window_start += 1;
        }
    }

    max_sum
}
