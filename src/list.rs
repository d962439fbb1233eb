//! Singly-linked list with in-place reversal.

#[derive(Debug, PartialEq, Eq)]
pub struct ListNode {
    pub val: i32,
    pub next: Option<Box<ListNode>>,
}

impl ListNode {
    pub fn new(val: i32) -> Self {
        Self { val, next: None }
    }

    /// Builds a chain from a slice, first element at the head.
    ///
    /// ```
    /// use algo_patterns::list::ListNode;
    ///
    /// let head = ListNode::from_slice(&[1, 2, 3]);
    /// assert_eq!(ListNode::to_vec(&head), vec![1, 2, 3]);
    /// ```
    pub fn from_slice(values: &[i32]) -> Option<Box<ListNode>> {
        let mut head = None;
        for &val in values.iter().rev() {
            head = Some(Box::new(ListNode { val, next: head }));
        }
        head
    }

    pub fn to_vec(head: &Option<Box<ListNode>>) -> Vec<i32> {
        let mut values = Vec::new();
        let mut current = head.as_deref();
        while let Some(node) = current {
            values.push(node.val);
            current = node.next.as_deref();
        }
        values
    }
}

/// Reverses the chain in place and returns the new head.
///
/// Single pass, no allocation: each step detaches `current`, points its
/// `next` link back at `prev` and advances. An empty chain comes back
/// unchanged.
pub fn reverse(head: Option<Box<ListNode>>) -> Option<Box<ListNode>> {
    let mut prev = None;
    let mut current = head;
    while let Some(mut node) = current {
        let next = node.next.take();
        node.next = prev;
        prev = Some(node);
        current = next;
    }
    prev
}
