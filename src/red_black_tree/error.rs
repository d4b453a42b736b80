use std::error;
use std::fmt;
use std::result;

/// A broken structural invariant found by `RedBlackSet::verify`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InvariantError {
    /// The root node is red.
    RedRoot,
    /// A red node has a red child.
    RedViolation,
    /// Two sibling subtrees have different black heights.
    BlackHeightMismatch { left: usize, right: usize },
    /// The in-order key sequence is not strictly increasing under the comparator.
    OrderViolation,
    /// A child's parent link does not point back at its parent.
    BrokenParentLink,
    /// The recorded length disagrees with the number of stored nodes.
    LengthMismatch { expected: usize, actual: usize },
}

impl error::Error for InvariantError {}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InvariantError::RedRoot => write!(f, "root node is red"),
            InvariantError::RedViolation => write!(f, "red node has a red child"),
            InvariantError::BlackHeightMismatch { left, right } => write!(
                f,
                "black height mismatch: left subtree has {}, right subtree has {}",
                left, right,
            ),
            InvariantError::OrderViolation => write!(f, "keys are not in strictly increasing order"),
            InvariantError::BrokenParentLink => write!(f, "parent link does not match child link"),
            InvariantError::LengthMismatch { expected, actual } => write!(
                f,
                "length mismatch: recorded {}, found {}",
                expected, actual,
            ),
        }
    }
}

pub type Result<T> = result::Result<T, InvariantError>;
