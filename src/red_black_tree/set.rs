use crate::arena::Handle;
use crate::comparator::{Comparator, NaturalOrder};
use crate::red_black_tree::cursor::{Cursor, Direction};
use crate::red_black_tree::error::Result;
use crate::red_black_tree::tree::Tree;
use log::debug;
use std::fmt;
use std::iter::FromIterator;
use std::vec;

/// The number of nodes allocated at a time by a set that is not given a chunk size.
pub const DEFAULT_CHUNK_SIZE: usize = 1024;

/// An ordered set implemented using a red black tree.
///
/// A red black tree is a self-balancing binary search tree that colors every node red or black so
/// that no red node has a red child and every path from a node to a leaf passes through the same
/// number of black nodes. Together these keep the height of the tree logarithmic in the number of
/// keys.
///
/// Keys are arranged by a comparator that is fixed when the set is constructed. `new` orders keys
/// by their `Ord` implementation and `with_comparator` accepts any `Comparator`, including
/// closures. Nodes are stored in an arena that grows a chunk at a time.
///
/// The set performs no internal synchronization; mutating it requires exclusive access.
///
/// # Examples
///
/// ```
/// use red_black_set::red_black_tree::RedBlackSet;
///
/// let mut set = RedBlackSet::new();
/// assert!(set.insert(0));
/// assert!(set.insert(3));
/// assert!(!set.insert(3));
///
/// assert_eq!(set.len(), 2);
///
/// assert_eq!(set.first(), Some(&0));
/// assert_eq!(set.ceil(&2), Some(&3));
///
/// assert!(set.remove(&0));
/// assert!(!set.remove(&1));
/// ```
pub struct RedBlackSet<T, C = NaturalOrder> {
    tree: Tree<T>,
    cmp: C,
}

impl<T> RedBlackSet<T>
where
    T: Ord,
{
    /// Constructs a new, empty `RedBlackSet<T>` ordered by `T`'s `Ord` implementation.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// ```
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackSet<T>` whose arena allocates `chunk_size` nodes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::with_chunk_size(64);
    /// assert_eq!(set.chunk_size(), 64);
    /// ```
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self::with_comparator_and_chunk_size(NaturalOrder, chunk_size)
    }
}

impl<T, C> RedBlackSet<T, C>
where
    C: Comparator<T>,
{
    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|a: &u32, b: &u32| b.cmp(a));
    /// set.insert(1);
    /// set.insert(2);
    /// assert_eq!(set.first(), Some(&2));
    /// ```
    pub fn with_comparator(cmp: C) -> Self {
        Self::with_comparator_and_chunk_size(cmp, DEFAULT_CHUNK_SIZE)
    }

    /// Constructs a new, empty `RedBlackSet<T, C>` ordered by `cmp` whose arena allocates
    /// `chunk_size` nodes at a time.
    ///
    /// # Panics
    ///
    /// Panics if `chunk_size` is zero.
    pub fn with_comparator_and_chunk_size(cmp: C, chunk_size: usize) -> Self {
        RedBlackSet {
            tree: Tree::new(chunk_size),
            cmp,
        }
    }

    /// Inserts a key into the set. Returns `true` if the key was inserted and `false` if an equal
    /// key already exists, in which case the set is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert!(set.insert(1));
    /// assert!(set.contains(&1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, key: T) -> bool {
        self.tree.insert(key, &self.cmp)
    }

    /// Removes a key from the set. Returns `true` if the key was present.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(set.remove(&1));
    /// assert!(!set.remove(&1));
    /// ```
    pub fn remove(&mut self, key: &T) -> bool {
        self.take(key).is_some()
    }

    /// Removes a key from the set and returns the stored key. Returns `None` if no equal key
    /// exists.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.take(&1), Some(1));
    /// assert_eq!(set.take(&1), None);
    /// ```
    pub fn take(&mut self, key: &T) -> Option<T> {
        let handle = self.tree.find(key, &self.cmp)?;
        Some(self.tree.remove(handle))
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert!(!set.contains(&0));
    /// assert!(set.contains(&1));
    /// ```
    pub fn contains(&self, key: &T) -> bool {
        self.tree.find(key, &self.cmp).is_some()
    }

    /// Returns a reference to the stored key that compares equal to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::with_comparator(|a: &(u32, char), b: &(u32, char)| a.0.cmp(&b.0));
    /// set.insert((1, 'a'));
    /// assert_eq!(set.get(&(1, 'z')), Some(&(1, 'a')));
    /// assert_eq!(set.get(&(2, 'a')), None);
    /// ```
    pub fn get(&self, key: &T) -> Option<&T> {
        self.key_of(self.tree.find(key, &self.cmp))
    }

    /// Returns a key in the set that is less than or equal to a particular key. Returns `None` if
    /// such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.floor(&0), None);
    /// assert_eq!(set.floor(&2), Some(&1));
    /// ```
    pub fn floor(&self, key: &T) -> Option<&T> {
        self.key_of(self.tree.floor(key, &self.cmp))
    }

    /// Returns a key in the set that is greater than or equal to a particular key. Returns `None`
    /// if such a key does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.ceil(&0), Some(&1));
    /// assert_eq!(set.ceil(&2), None);
    /// ```
    pub fn ceil(&self, key: &T) -> Option<&T> {
        self.key_of(self.tree.ceil(key, &self.cmp))
    }

    /// Checks the structure of the set: the root is black, no red node has a red child, every
    /// root-to-leaf path has the same number of black nodes, keys are strictly increasing in
    /// order, parent links match child links, and the length matches the number of nodes.
    ///
    /// A set only fails verification if its comparator is not a consistent total order.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = (0..100).collect();
    /// assert!(set.verify().is_ok());
    /// ```
    pub fn verify(&self) -> Result<()> {
        self.tree.check(&self.cmp).map_err(|err| {
            debug!("red black set failed verification: {}", err);
            err
        })
    }
}

impl<T, C> RedBlackSet<T, C> {
    fn key_of(&self, handle: Option<Handle>) -> Option<&T> {
        handle.map(|handle| self.tree.key(handle))
    }

    /// Returns the number of elements in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let set: RedBlackSet<u32> = RedBlackSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(2);
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        debug!("clearing red black set of {} keys", self.len());
        self.tree.clear();
    }

    /// Returns the comparator that orders the set.
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Returns the number of nodes the set's arena allocates at a time.
    pub fn chunk_size(&self) -> usize {
        self.tree.chunk_size()
    }

    /// Returns the minimum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    pub fn first(&self) -> Option<&T> {
        self.key_of(self.tree.first())
    }

    /// Returns the maximum key of the set. Returns `None` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    /// assert_eq!(set.last(), Some(&3));
    /// ```
    pub fn last(&self) -> Option<&T> {
        self.key_of(self.tree.last())
    }

    /// Returns a forward cursor at the minimum key, or at the end sentinel if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// assert_eq!(set.begin(), set.end());
    ///
    /// set.insert(1);
    /// set.insert(2);
    /// let mut cursor = set.begin();
    /// assert_eq!(cursor.value(), Some(&1));
    /// assert!(cursor.move_next());
    /// assert_eq!(cursor.value(), Some(&2));
    /// assert!(!cursor.move_next());
    /// assert_eq!(cursor, set.end());
    /// ```
    pub fn begin(&self) -> Cursor<'_, T> {
        Cursor::new(&self.tree, self.tree.first(), Direction::Forward)
    }

    /// Returns a forward cursor at the sentinel past the maximum key.
    pub fn end(&self) -> Cursor<'_, T> {
        Cursor::new(&self.tree, None, Direction::Forward)
    }

    /// Returns a reverse cursor at the maximum key, or at the reverse end sentinel if the set is
    /// empty.
    pub fn rbegin(&self) -> Cursor<'_, T> {
        Cursor::new(&self.tree, self.tree.last(), Direction::Reverse)
    }

    /// Returns a reverse cursor at the sentinel before the minimum key.
    pub fn rend(&self) -> Cursor<'_, T> {
        Cursor::new(&self.tree, None, Direction::Reverse)
    }

    /// Returns an iterator over the set. The iterator will yield keys using in-order traversal.
    ///
    /// # Examples
    ///
    /// ```
    /// use red_black_set::red_black_tree::RedBlackSet;
    ///
    /// let mut set = RedBlackSet::new();
    /// set.insert(1);
    /// set.insert(3);
    ///
    /// let mut iterator = set.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// ```
    pub fn iter(&self) -> RedBlackSetIter<'_, T> {
        RedBlackSetIter {
            tree: &self.tree,
            front: self.tree.first(),
            back: self.tree.last(),
            remaining: self.tree.len(),
        }
    }
}

impl<T, C> IntoIterator for RedBlackSet<T, C> {
    type IntoIter = RedBlackSetIntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter {
            keys: self.tree.into_keys().into_iter(),
        }
    }
}

impl<'a, T, C> IntoIterator for &'a RedBlackSet<T, C>
where
    T: 'a,
{
    type IntoIter = RedBlackSetIter<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An owning iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields owned keys.
pub struct RedBlackSetIntoIter<T> {
    keys: vec::IntoIter<T>,
}

impl<T> Iterator for RedBlackSetIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.keys.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<T> DoubleEndedIterator for RedBlackSetIntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.keys.next_back()
    }
}

impl<T> ExactSizeIterator for RedBlackSetIntoIter<T> {}

/// An iterator for `RedBlackSet<T, C>`.
///
/// This iterator traverses the elements of the set in-order and yields immutable references. It
/// can be driven from both ends.
pub struct RedBlackSetIter<'a, T> {
    tree: &'a Tree<T>,
    front: Option<Handle>,
    back: Option<Handle>,
    remaining: usize,
}

impl<'a, T> Iterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.front?;
        self.remaining -= 1;
        self.front = tree.successor(handle);
        Some(tree.key(handle))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for RedBlackSetIter<'a, T>
where
    T: 'a,
{
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let tree = self.tree;
        let handle = self.back?;
        self.remaining -= 1;
        self.back = tree.predecessor(handle);
        Some(tree.key(handle))
    }
}

impl<'a, T> ExactSizeIterator for RedBlackSetIter<'a, T> where T: 'a {}

impl<'a, T> Clone for RedBlackSetIter<'a, T> {
    fn clone(&self) -> Self {
        RedBlackSetIter {
            tree: self.tree,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<T, C> Default for RedBlackSet<T, C>
where
    C: Comparator<T> + Default,
{
    fn default() -> Self {
        Self::with_comparator(C::default())
    }
}

impl<T, C> FromIterator<T> for RedBlackSet<T, C>
where
    C: Comparator<T> + Default,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut set = Self::default();
        set.extend(iter);
        set
    }
}

impl<T, C> Extend<T> for RedBlackSet<T, C>
where
    C: Comparator<T>,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for key in iter {
            self.insert(key);
        }
    }
}

impl<T, C> fmt::Debug for RedBlackSet<T, C>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}
