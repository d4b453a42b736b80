use crate::arena::Handle;
use crate::red_black_tree::tree::Tree;
use std::fmt;
use std::ptr;

/// The order in which a `Cursor` walks the keys of a set.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Direction {
    /// Ascending comparator order. The sentinel position is past the last key.
    Forward,
    /// Descending comparator order. The sentinel position is before the first key.
    Reverse,
}

/// A bidirectional cursor over the keys of a `RedBlackSet`.
///
/// A cursor is either positioned at a key or at its sentinel. For a forward cursor the sentinel
/// is the position past the last key (`end`), and for a reverse cursor it is the position before
/// the first key (`rend`). `move_next` never leaves the sentinel, while `move_prev` from the
/// sentinel jumps back into the set: to the maximum for a forward cursor and to the minimum for a
/// reverse cursor.
///
/// The cursor borrows the set, so the set cannot be modified while a cursor is alive.
///
/// # Examples
///
/// ```
/// use red_black_set::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// set.insert(1);
/// set.insert(2);
///
/// let mut cursor = set.end();
/// assert_eq!(cursor.value(), None);
/// assert!(cursor.move_prev());
/// assert_eq!(cursor.value(), Some(&2));
/// assert!(cursor.move_prev());
/// assert_eq!(cursor.value(), Some(&1));
/// assert!(!cursor.move_prev());
/// assert!(!cursor.is_valid());
/// ```
pub struct Cursor<'a, T> {
    tree: &'a Tree<T>,
    current: Option<Handle>,
    direction: Direction,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(tree: &'a Tree<T>, current: Option<Handle>, direction: Direction) -> Self {
        Cursor {
            tree,
            current,
            direction,
        }
    }

    /// Returns the key at the cursor, or `None` at the sentinel.
    pub fn value(&self) -> Option<&'a T> {
        let tree = self.tree;
        self.current.map(|handle| tree.key(handle))
    }

    /// Returns `true` if the cursor is positioned at a key.
    pub fn is_valid(&self) -> bool {
        self.current.is_some()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Advances the cursor in its direction and returns `true` if it is still positioned at a
    /// key. At the sentinel the cursor stays put and `false` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    ///
    /// let mut cursor = set.rbegin();
    /// assert_eq!(cursor.value(), Some(&2));
    /// assert!(cursor.move_next());
    /// assert_eq!(cursor.value(), Some(&1));
    /// assert!(!cursor.move_next());
    /// assert!(!cursor.move_next());
    /// ```
    pub fn move_next(&mut self) -> bool {
        let handle = match self.current {
            Some(handle) => handle,
            None => return false,
        };
        self.current = match self.direction {
            Direction::Forward => self.tree.successor(handle),
            Direction::Reverse => self.tree.predecessor(handle),
        };
        self.current.is_some()
    }

    /// Moves the cursor against its direction and returns `true` if it is positioned at a key
    /// afterwards. From the sentinel, a forward cursor jumps to the maximum and a reverse cursor
    /// jumps to the minimum. Stepping back from the first key of the walk lands on the sentinel.
    pub fn move_prev(&mut self) -> bool {
        self.current = match (self.current, self.direction) {
            (None, Direction::Forward) => self.tree.last(),
            (None, Direction::Reverse) => self.tree.first(),
            (Some(handle), Direction::Forward) => self.tree.predecessor(handle),
            (Some(handle), Direction::Reverse) => self.tree.successor(handle),
        };
        self.current.is_some()
    }
}

impl<'a, T> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Cursor<'a, T> {}

// Two cursors are equal when they walk the same set in the same direction and sit at the same
// position.
impl<'a, T> PartialEq for Cursor<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.tree, other.tree)
            && self.current == other.current
            && self.direction == other.direction
    }
}

impl<'a, T> Eq for Cursor<'a, T> {}

impl<'a, T> fmt::Debug for Cursor<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("value", &self.value())
            .field("direction", &self.direction)
            .finish()
    }
}
