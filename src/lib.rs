//! An ordered set of unique keys backed by a red black tree.
//!
//! Keys are ordered by a comparator chosen when the set is constructed, nodes live in an arena
//! and are linked by handles, and the keys can be walked in both directions with a `Cursor` or
//! a double-ended iterator.
//!
//! # Examples
//!
//! ```
//! use red_black_set::RedBlackSet;
//!
//! let mut set = RedBlackSet::new();
//! for key in &[10, 20, 5, 15] {
//!     set.insert(*key);
//! }
//! assert!(set.remove(&10));
//!
//! let mut cursor = set.begin();
//! let mut keys = Vec::new();
//! while let Some(key) = cursor.value() {
//!     keys.push(*key);
//!     cursor.move_next();
//! }
//! assert_eq!(keys, vec![5, 15, 20]);
//! ```

pub mod arena;
pub mod comparator;
pub mod red_black_tree;

pub use crate::red_black_tree::RedBlackSet;
