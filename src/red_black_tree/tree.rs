use crate::arena::{Arena, Handle};
use crate::comparator::Comparator;
use crate::red_black_tree::error::{InvariantError, Result};
use crate::red_black_tree::node::{Color, Node, Side};
use log::trace;
use std::cmp::Ordering;
use std::mem;

/// The link structure of a red black tree. Keys are arranged by a comparator supplied to each
/// searching operation; the tree itself never stores one.
pub struct Tree<T> {
    arena: Arena<Node<T>>,
    root: Option<Handle>,
    len: usize,
}

impl<T> Tree<T> {
    pub fn new(chunk_size: usize) -> Self {
        Tree {
            arena: Arena::new(chunk_size),
            root: None,
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn chunk_size(&self) -> usize {
        self.arena.chunk_size()
    }

    pub fn key(&self, handle: Handle) -> &T {
        &self.arena[handle].key
    }

    pub fn clear(&mut self) {
        self.arena.clear();
        self.root = None;
        self.len = 0;
    }

    fn is_red(&self, handle: Option<Handle>) -> bool {
        match handle {
            Some(handle) => self.arena[handle].is_red(),
            None => false,
        }
    }

    fn set_color(&mut self, handle: Handle, color: Color) {
        self.arena[handle].color = color;
    }

    // `child` may be `None` when asking which slot of `parent` is empty.
    fn side_of(&self, parent: Handle, child: Option<Handle>) -> Side {
        if self.arena[parent].left == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    fn replace_child(&mut self, parent: Option<Handle>, old: Handle, new: Option<Handle>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let side = self.side_of(parent, Some(old));
                *self.arena[parent].child_mut(side) = new;
            },
        }
    }

    // Moves `x` down to its `side` and promotes the child on the other side in its place.
    fn rotate(&mut self, x: Handle, side: Side) {
        trace!("rotating {:?} to the {:?}", x, side);
        let other = side.opposite();
        let y = self.arena[x]
            .child(other)
            .expect("Expected child node to be `Some` for rotation.");

        let inner = self.arena[y].child(side);
        *self.arena[x].child_mut(other) = inner;
        if let Some(inner) = inner {
            self.arena[inner].parent = Some(x);
        }

        let parent = self.arena[x].parent;
        self.arena[y].parent = parent;
        self.replace_child(parent, x, Some(y));

        *self.arena[y].child_mut(side) = Some(x);
        self.arena[x].parent = Some(y);
    }

    pub fn find<C>(&self, key: &T, cmp: &C) -> Option<Handle>
    where
        C: Comparator<T>,
    {
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match cmp.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        None
    }

    /// Inserts `key` and returns `true`, or returns `false` without touching the tree if an equal
    /// key is already present.
    pub fn insert<C>(&mut self, key: T, cmp: &C) -> bool
    where
        C: Comparator<T>,
    {
        let mut parent = None;
        let mut side = Side::Left;
        let mut curr = self.root;
        while let Some(handle) = curr {
            side = match cmp.compare(&key, &self.arena[handle].key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return false,
            };
            parent = Some(handle);
            curr = self.arena[handle].child(side);
        }

        self.len += 1;
        match parent {
            None => {
                let root = self.arena.allocate(Node::new(key, Color::Black, None));
                self.root = Some(root);
            },
            Some(parent) => {
                let z = self.arena.allocate(Node::new(key, Color::Red, Some(parent)));
                *self.arena[parent].child_mut(side) = Some(z);
                self.insert_fixup(z);
            },
        }
        true
    }

    fn insert_fixup(&mut self, mut z: Handle) {
        while let Some(parent) = self.arena[z].parent {
            if !self.arena[parent].is_red() {
                break;
            }

            // a red node is never the root, so it has a parent
            let grandparent = self.arena[parent]
                .parent
                .expect("Expected red node to have a parent.");
            let side = self.side_of(grandparent, Some(parent));
            let uncle = self.arena[grandparent].child(side.opposite());

            if self.is_red(uncle) {
                trace!("insert fixup: recoloring below {:?}", grandparent);
                self.set_color(parent, Color::Black);
                if let Some(uncle) = uncle {
                    self.set_color(uncle, Color::Black);
                }
                self.set_color(grandparent, Color::Red);
                z = grandparent;
                continue;
            }

            let top = if self.side_of(parent, Some(z)) == side {
                parent
            } else {
                trace!("insert fixup: straightening zig-zag at {:?}", parent);
                self.rotate(parent, side);
                z
            };
            trace!("insert fixup: rotating at {:?}", grandparent);
            self.set_color(top, Color::Black);
            self.set_color(grandparent, Color::Red);
            self.rotate(grandparent, side.opposite());
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }

    /// Unlinks the node behind `z` and returns its key.
    pub fn remove(&mut self, z: Handle) -> T {
        let y = match (self.arena[z].left, self.arena[z].right) {
            (Some(_), Some(right)) => self.minimum(right),
            _ => z,
        };

        let x = self.arena[y].left.or(self.arena[y].right);
        let parent = self.arena[y].parent;
        if let Some(x) = x {
            self.arena[x].parent = parent;
        }
        self.replace_child(parent, y, x);

        let Node { key, color, .. } = self.arena.free(y);
        self.len -= 1;

        // `y` was the successor of `z`, so its key takes the place of the removed one
        let removed = if y == z {
            key
        } else {
            mem::replace(&mut self.arena[z].key, key)
        };

        if color == Color::Black {
            self.remove_fixup(x, parent);
        }
        removed
    }

    // `x` carries an extra black; `parent` is its parent even when `x` is `None`.
    fn remove_fixup(&mut self, mut x: Option<Handle>, mut parent: Option<Handle>) {
        while x != self.root && !self.is_red(x) {
            let p = parent.expect("Expected non-root node to have a parent.");
            let side = self.side_of(p, x);
            let far = side.opposite();
            let mut w = self.arena[p]
                .child(far)
                .expect("Expected doubly black node to have a sibling.");

            if self.arena[w].is_red() {
                trace!("remove fixup: rotating red sibling {:?}", w);
                self.set_color(w, Color::Black);
                self.set_color(p, Color::Red);
                self.rotate(p, side);
                w = self.arena[p]
                    .child(far)
                    .expect("Expected doubly black node to have a sibling.");
            }

            let near_child = self.arena[w].child(side);
            let far_child = self.arena[w].child(far);
            if !self.is_red(near_child) && !self.is_red(far_child) {
                trace!("remove fixup: pushing extra black up to {:?}", p);
                self.set_color(w, Color::Red);
                x = Some(p);
                parent = self.arena[p].parent;
                continue;
            }

            if !self.is_red(far_child) {
                trace!("remove fixup: rotating near child of {:?}", w);
                if let Some(near_child) = near_child {
                    self.set_color(near_child, Color::Black);
                }
                self.set_color(w, Color::Red);
                self.rotate(w, far);
                w = self.arena[p]
                    .child(far)
                    .expect("Expected doubly black node to have a sibling.");
            }

            trace!("remove fixup: rotating at {:?}", p);
            let parent_color = self.arena[p].color;
            self.set_color(w, parent_color);
            self.set_color(p, Color::Black);
            if let Some(far_child) = self.arena[w].child(far) {
                self.set_color(far_child, Color::Black);
            }
            self.rotate(p, side);
            x = self.root;
            parent = None;
        }

        if let Some(x) = x {
            self.set_color(x, Color::Black);
        }
    }

    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.arena[handle].child(side) {
            handle = child;
        }
        handle
    }

    // The next node in the direction of `side`: `Right` for the successor, `Left` for the
    // predecessor.
    fn step(&self, handle: Handle, side: Side) -> Option<Handle> {
        if let Some(child) = self.arena[handle].child(side) {
            return Some(self.extreme(child, side.opposite()));
        }

        let mut child = handle;
        let mut parent = self.arena[handle].parent;
        while let Some(curr) = parent {
            if self.arena[curr].child(side) != Some(child) {
                break;
            }
            child = curr;
            parent = self.arena[curr].parent;
        }
        parent
    }

    pub fn minimum(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Left)
    }

    pub fn maximum(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Right)
    }

    pub fn successor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Right)
    }

    pub fn predecessor(&self, handle: Handle) -> Option<Handle> {
        self.step(handle, Side::Left)
    }

    pub fn first(&self) -> Option<Handle> {
        self.root.map(|root| self.minimum(root))
    }

    pub fn last(&self) -> Option<Handle> {
        self.root.map(|root| self.maximum(root))
    }

    /// Returns the greatest key less than or equal to `key`.
    pub fn floor<C>(&self, key: &T, cmp: &C) -> Option<Handle>
    where
        C: Comparator<T>,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match cmp.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => {
                    best = Some(handle);
                    node.right
                },
                Ordering::Equal => return Some(handle),
            };
        }
        best
    }

    /// Returns the least key greater than or equal to `key`.
    pub fn ceil<C>(&self, key: &T, cmp: &C) -> Option<Handle>
    where
        C: Comparator<T>,
    {
        let mut best = None;
        let mut curr = self.root;
        while let Some(handle) = curr {
            let node = &self.arena[handle];
            curr = match cmp.compare(key, &node.key) {
                Ordering::Less => {
                    best = Some(handle);
                    node.left
                },
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(handle),
            };
        }
        best
    }

    /// Consumes the tree and returns its keys in order.
    pub fn into_keys(self) -> Vec<T> {
        let mut handles = Vec::with_capacity(self.len);
        let mut curr = self.first();
        while let Some(handle) = curr {
            handles.push(handle);
            curr = self.successor(handle);
        }

        let Tree { mut arena, .. } = self;
        handles
            .into_iter()
            .map(|handle| arena.free(handle).key)
            .collect()
    }

    /// Checks every red black invariant along with the parent links, the key order and the
    /// recorded length.
    pub fn check<C>(&self, cmp: &C) -> Result<()>
    where
        C: Comparator<T>,
    {
        if self.arena.len() != self.len {
            return Err(InvariantError::LengthMismatch {
                expected: self.len,
                actual: self.arena.len(),
            });
        }

        let root = match self.root {
            Some(root) => root,
            None if self.len == 0 => return Ok(()),
            None => {
                return Err(InvariantError::LengthMismatch {
                    expected: self.len,
                    actual: 0,
                })
            },
        };

        if self.arena[root].parent.is_some() {
            return Err(InvariantError::BrokenParentLink);
        }
        if self.arena[root].is_red() {
            return Err(InvariantError::RedRoot);
        }

        let mut count = 0;
        self.check_subtree(root, &mut count)?;
        if count != self.len {
            return Err(InvariantError::LengthMismatch {
                expected: self.len,
                actual: count,
            });
        }

        let mut curr = self.minimum(root);
        while let Some(next) = self.successor(curr) {
            if cmp.compare(self.key(curr), self.key(next)) != Ordering::Less {
                return Err(InvariantError::OrderViolation);
            }
            curr = next;
        }
        Ok(())
    }

    // Returns the black height of the subtree rooted at `handle`, not counting nil leaves.
    fn check_subtree(&self, handle: Handle, count: &mut usize) -> Result<usize> {
        *count += 1;
        let node = &self.arena[handle];
        let left = self.check_child(handle, node.left, count)?;
        let right = self.check_child(handle, node.right, count)?;
        if left != right {
            return Err(InvariantError::BlackHeightMismatch { left, right });
        }
        Ok(if node.is_red() { left } else { left + 1 })
    }

    fn check_child(
        &self,
        parent: Handle,
        child: Option<Handle>,
        count: &mut usize,
    ) -> Result<usize> {
        let child = match child {
            Some(child) => child,
            None => return Ok(0),
        };
        if self.arena[child].parent != Some(parent) {
            return Err(InvariantError::BrokenParentLink);
        }
        if self.arena[parent].is_red() && self.arena[child].is_red() {
            return Err(InvariantError::RedViolation);
        }
        self.check_subtree(child, count)
    }
}
