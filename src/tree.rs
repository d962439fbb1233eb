//! Binary tree node and a level-order literal parser for fixtures.

use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParseTreeError {
    #[error("Tree literal must be wrapped in '[' and ']'")]
    MissingBrackets,
    #[error("Invalid value {0:?} in tree literal")]
    InvalidValue(String),
}

type Error = ParseTreeError;
type Result<T> = std::result::Result<T, Error>;

/// A node owning its children; the tree is acyclic and every node has
/// exactly one parent. Traversals borrow nodes and never mutate them.
#[derive(Debug, PartialEq, Eq)]
pub struct TreeNode {
    pub val: i32,
    pub left: Option<Box<TreeNode>>,
    pub right: Option<Box<TreeNode>>,
}

impl TreeNode {
    pub fn new(val: i32) -> Self {
        Self {
            val,
            left: None,
            right: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Parses a level-order tree literal into an owned tree.
///
/// The format is the usual bracketed list with `null` for absent children
/// and trailing `null`s optional: `"[3,9,20,null,null,15,7]"` is the tree
/// with 9 and 20 under 3, and 15 and 7 under 20. `"[]"` is the empty tree.
///
/// ```
/// use algo_patterns::tree;
///
/// let root = tree::parse("[1,2,3]").unwrap().unwrap();
/// assert_eq!(root.val, 1);
/// assert_eq!(root.left.unwrap().val, 2);
/// assert_eq!(root.right.unwrap().val, 3);
/// ```
pub fn parse(s: &str) -> Result<Option<Box<TreeNode>>> {
    let inner = s
        .trim()
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or(Error::MissingBrackets)?;

    let mut tokens: Vec<Option<i32>> = Vec::new();
    if !inner.trim().is_empty() {
        for token in inner.split(',') {
            let token = token.trim();
            if token == "null" {
                tokens.push(None);
            } else {
                let val = token
                    .parse()
                    .map_err(|_| Error::InvalidValue(token.to_string()))?;
                tokens.push(Some(val));
            }
        }
    }

    if tokens.first().copied().flatten().is_none() {
        return Ok(None);
    }

    Ok(Some(build(&tokens)))
}

// Two phases: a cursor walk pairs every non-null token with its two child
// slots in level order, then nodes are boxed in reverse so each parent can
// take ownership of children built before it.
fn build(tokens: &[Option<i32>]) -> Box<TreeNode> {
    let mut order = vec![0usize];
    let mut children: Vec<[Option<usize>; 2]> = Vec::new();
    let mut cursor = 1;

    let mut i = 0;
    while i < order.len() {
        let mut slots = [None, None];
        for slot in &mut slots {
            if cursor < tokens.len() {
                if tokens[cursor].is_some() {
                    order.push(cursor);
                    *slot = Some(order.len() - 1);
                }
                cursor += 1;
            }
        }
        children.push(slots);
        i += 1;
    }

    let mut built: Vec<Option<Box<TreeNode>>> = Vec::new();
    built.resize_with(order.len(), || None);
    for i in (0..order.len()).rev() {
        let [left, right] = children[i];
        built[i] = Some(Box::new(TreeNode {
            val: tokens[order[i]].unwrap(),
            left: left.and_then(|slot| built[slot].take()),
            right: right.and_then(|slot| built[slot].take()),
        }));
    }

    built[0].take().unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_empty_tree() {
        assert_eq!(parse("[]"), Ok(None));
    }

    #[test]
    fn parses_single_node() {
        let root = parse("[5]").unwrap().unwrap();

        assert_eq!(root.val, 5);
        assert!(root.is_leaf());
    }

    #[test]
    fn parses_gapped_levels() {
        let root = parse("[3,9,20,null,null,15,7]").unwrap().unwrap();

        assert!(root.left.as_ref().unwrap().is_leaf());
        let right = root.right.as_ref().unwrap();
        assert_eq!(right.left.as_ref().unwrap().val, 15);
        assert_eq!(right.right.as_ref().unwrap().val, 7);
    }

    #[test]
    fn parses_right_leaning_chain() {
        let root = parse("[2,null,3,null,4]").unwrap().unwrap();

        let second = root.right.as_ref().unwrap();
        assert!(second.left.is_none());
        assert_eq!(second.right.as_ref().unwrap().val, 4);
    }

    #[test]
    fn rejects_missing_brackets() {
        assert_eq!(parse("1,2,3"), Err(ParseTreeError::MissingBrackets));
    }

    #[test]
    fn rejects_bad_token() {
        assert_eq!(
            parse("[1,x]"),
            Err(ParseTreeError::InvalidValue("x".to_string()))
        );
    }
}
