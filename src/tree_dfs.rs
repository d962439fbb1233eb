//! Depth-first traversal family: recursive and iterative pre/in/post-order,
//! plus the two root-to-leaf path problems.
//!
//! The recursive forms use the call stack and so go as deep as the tree is
//! tall; on untrusted or chain-shaped input prefer the iterative forms,
//! which carry an explicit stack and produce identical output.

use std::collections::VecDeque;

use crate::tree::TreeNode;

pub fn pre_order(root: Option<&TreeNode>) -> Vec<i32> {
    fn traverse(node: Option<&TreeNode>, result: &mut Vec<i32>) {
        let Some(node) = node else { return };
        result.push(node.val);
        traverse(node.left.as_deref(), result);
        traverse(node.right.as_deref(), result);
    }

    let mut result = Vec::new();
    traverse(root, &mut result);
    result
}

pub fn in_order(root: Option<&TreeNode>) -> Vec<i32> {
    fn traverse(node: Option<&TreeNode>, result: &mut Vec<i32>) {
        let Some(node) = node else { return };
        traverse(node.left.as_deref(), result);
        result.push(node.val);
        traverse(node.right.as_deref(), result);
    }

    let mut result = Vec::new();
    traverse(root, &mut result);
    result
}

pub fn post_order(root: Option<&TreeNode>) -> Vec<i32> {
    fn traverse(node: Option<&TreeNode>, result: &mut Vec<i32>) {
        let Some(node) = node else { return };
        traverse(node.left.as_deref(), result);
        traverse(node.right.as_deref(), result);
        result.push(node.val);
    }

    let mut result = Vec::new();
    traverse(root, &mut result);
    result
}

pub fn pre_order_iterative(root: Option<&TreeNode>) -> Vec<i32> {
    let Some(root) = root else {
        return Vec::new();
    };

    let mut result = Vec::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        result.push(node.val);
        // LIFO, so the right child goes on first and left is visited first.
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
    }
    result
}

pub fn in_order_iterative(root: Option<&TreeNode>) -> Vec<i32> {
    let mut result = Vec::new();
    let mut stack: Vec<&TreeNode> = Vec::new();
    let mut current = root;

    while current.is_some() || !stack.is_empty() {
        while let Some(node) = current {
            stack.push(node);
            current = node.left.as_deref();
        }
        let node = stack.pop().unwrap();
        result.push(node.val);
        current = node.right.as_deref();
    }
    result
}

pub fn post_order_iterative(root: Option<&TreeNode>) -> Vec<i32> {
    let Some(root) = root else {
        return Vec::new();
    };

    // Reverse of a pre-order with children swapped: prepend each value and
    // push left before right.
    let mut result = VecDeque::new();
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        result.push_front(node.val);
        if let Some(left) = node.left.as_deref() {
            stack.push(left);
        }
        if let Some(right) = node.right.as_deref() {
            stack.push(right);
        }
    }
    result.into()
}

/// Sum of every root-to-leaf path read as a base-10 number.
///
/// The path 1→2 reads as 12; each step shifts the accumulated value one
/// decimal place before adding the node. Empty tree sums to 0.
pub fn sum_of_path_numbers(root: Option<&TreeNode>) -> i64 {
    fn traverse(node: Option<&TreeNode>, current: i64) -> i64 {
        let Some(node) = node else { return 0 };
        let current = current * 10 + node.val as i64;
        if node.is_leaf() {
            return current;
        }
        traverse(node.left.as_deref(), current) + traverse(node.right.as_deref(), current)
    }

    traverse(root, 0)
}

/// Every root-to-leaf path whose values sum to `target`.
///
/// The shared path buffer grows on the way down and must pop on the way
/// back up, matched or not, so sibling subtrees see only their ancestors.
pub fn all_paths_for_sum(root: Option<&TreeNode>, target: i32) -> Vec<Vec<i32>> {
    fn find_paths(
        node: Option<&TreeNode>,
        target: i32,
        current_sum: i32,
        current_path: &mut Vec<i32>,
        all_paths: &mut Vec<Vec<i32>>,
    ) {
        let Some(node) = node else { return };

        current_path.push(node.val);
        let current_sum = current_sum + node.val;

        if node.is_leaf() && current_sum == target {
            all_paths.push(current_path.clone());
        } else {
            find_paths(node.left.as_deref(), target, current_sum, current_path, all_paths);
            find_paths(node.right.as_deref(), target, current_sum, current_path, all_paths);
        }

        // Backtrack before returning to the parent.
        current_path.pop();
    }

    let mut all_paths = Vec::new();
    let mut current_path = Vec::new();
    find_paths(root, target, 0, &mut current_path, &mut all_paths);
    debug_assert!(current_path.is_empty());
    all_paths
}
