//! Two-pointer search over a sorted slice.

use std::cmp::Ordering;

/// Returns the 1-based indices of the two elements summing to `target`.
///
/// `numbers` must be sorted ascending and contain exactly one solution;
/// that precondition makes the post-loop state unreachable, and violating
/// it is a contract error that fails fast. The pointers start at the two
/// ends and converge: a sum below target advances the left pointer, above
/// target retreats the right one.
pub fn pair_with_target_sum(numbers: &[i32], target: i32) -> (usize, usize) {
    let mut low = 0;
    let mut high = numbers.len() - 1;

    while low < high {
        match (numbers[low] + numbers[high]).cmp(&target) {
            Ordering::Less => low += 1,
            Ordering::Greater => high -= 1,
            Ordering::Equal => return (low + 1, high + 1),
        }
    }

    unreachable!()
}
