//! Breadth-first traversal family: level-order, zigzag and minimum depth.

use std::collections::VecDeque;

use crate::tree::TreeNode;

/// Values grouped per level, top to bottom, left to right within a level.
///
/// The queue is drained one level at a time: the level size is captured
/// before the inner loop so nodes enqueued for the next level are not
/// mixed in. The empty tree yields an empty vec.
pub fn level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut result = Vec::new();
    let Some(root) = root else {
        return result;
    };

    let mut queue = VecDeque::from([root]);
    while !queue.is_empty() {
        let level_size = queue.len();
        let mut current_level = Vec::with_capacity(level_size);
        for _ in 0..level_size {
            let node = queue.pop_front().unwrap();
            current_level.push(node.val);
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        result.push(current_level);
    }
    result
}

/// Level-order with alternating direction, starting left-to-right.
///
/// Same queue mechanics as [`level_order`]; only the per-level buffer
/// changes, taking values at the back or the front depending on the
/// direction. Children are always enqueued left-then-right.
pub fn zigzag_level_order(root: Option<&TreeNode>) -> Vec<Vec<i32>> {
    let mut result = Vec::new();
    let Some(root) = root else {
        return result;
    };

    let mut queue = VecDeque::from([root]);
    let mut left_to_right = true;
    while !queue.is_empty() {
        let level_size = queue.len();
        let mut current_level = VecDeque::with_capacity(level_size);
        for _ in 0..level_size {
            let node = queue.pop_front().unwrap();
            if left_to_right {
                current_level.push_back(node.val);
            } else {
                current_level.push_front(node.val);
            }
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        result.push(current_level.into());
        left_to_right = !left_to_right;
    }
    result
}

/// Number of nodes on the shortest root-to-leaf path; 0 for the empty tree.
///
/// Queue entries carry their depth (root at 1). BFS visits shallower nodes
/// first, so the first leaf dequeued is at minimal depth.
pub fn min_depth(root: Option<&TreeNode>) -> usize {
    let Some(root) = root else {
        return 0;
    };

    let mut queue = VecDeque::from([(root, 1)]);
    while let Some((node, depth)) = queue.pop_front() {
        if node.is_leaf() {
            return depth;
        }
        if let Some(left) = node.left.as_deref() {
            queue.push_back((left, depth + 1));
        }
        if let Some(right) = node.right.as_deref() {
            queue.push_back((right, depth + 1));
        }
    }

    // A non-empty tree always has a leaf.
    unreachable!()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree;

    #[test]
    fn test_case_1() {
        let root = tree::parse("[3,9,20,null,null,15,7]").unwrap();

        let result = level_order(root.as_deref());

        assert_eq!(result, vec![vec![3], vec![9, 20], vec![15, 7]]);
    }

    #[test]
    fn level_order_empty_tree() {
        assert_eq!(level_order(None), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn zigzag_test_case_1() {
        let root = tree::parse("[3,9,20,null,null,15,7]").unwrap();

        let result = zigzag_level_order(root.as_deref());

        assert_eq!(result, vec![vec![3], vec![20, 9], vec![15, 7]]);
    }

    #[test]
    fn zigzag_flips_back_on_fourth_level() {
        let root = tree::parse("[1,2,3,4,5,6,7,8,9]").unwrap();

        let result = zigzag_level_order(root.as_deref());

        assert_eq!(
            result,
            vec![vec![1], vec![3, 2], vec![4, 5, 6, 7], vec![9, 8]]
        );
    }

    #[test]
    fn zigzag_empty_tree() {
        assert_eq!(zigzag_level_order(None), Vec::<Vec<i32>>::new());
    }

    #[test]
    fn min_depth_test_case_1() {
        let root = tree::parse("[3,9,20,null,null,15,7]").unwrap();

        assert_eq!(min_depth(root.as_deref()), 2);
    }

    #[test]
    fn min_depth_right_leaning_chain() {
        let root = tree::parse("[2,null,3,null,4,null,5,null,6]").unwrap();

        assert_eq!(min_depth(root.as_deref()), 5);
    }

    #[test]
    fn min_depth_shallow_leaf_wins() {
        let root = tree::parse("[1,2,3,4,5]").unwrap();

        assert_eq!(min_depth(root.as_deref()), 2);
    }

    #[test]
    fn min_depth_empty_tree() {
        assert_eq!(min_depth(None), 0);
    }
}
