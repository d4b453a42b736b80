//! Total orders used to arrange the keys of a `RedBlackSet`.
//!
//! A comparator must describe a strict total order that stays the same for as long as a set uses
//! it. A comparator that is inconsistent, or that changes its answers after keys are inserted,
//! leaves the set in an unspecified (but memory-safe) state: lookups may miss keys and the tree
//! invariants may no longer hold.

use std::cmp::Ordering;

/// A three-way comparison between two keys.
///
/// Any `Fn(&T, &T) -> Ordering` is a comparator.
///
/// # Examples
///
/// ```
/// use red_black_set::comparator::Comparator;
/// use std::cmp::Ordering;
///
/// let by_len = |a: &&str, b: &&str| a.len().cmp(&b.len());
/// assert_eq!(by_len.compare(&"ab", &"c"), Ordering::Greater);
/// ```
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    T: ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// A zero-sized comparator that delegates to the `Ord` implementation of the key.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NaturalOrder;

impl<T> Comparator<T> for NaturalOrder
where
    T: Ord + ?Sized,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// Adapts a comparison function that returns a negative, zero, or positive integer.
///
/// # Examples
///
/// ```
/// use red_black_set::comparator::{Comparator, ThreeWay};
/// use std::cmp::Ordering;
///
/// let cmp = ThreeWay(|a: &i64, b: &i64| (a - b) as i32);
/// assert_eq!(cmp.compare(&1, &4), Ordering::Less);
/// assert_eq!(cmp.compare(&4, &4), Ordering::Equal);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ThreeWay<F>(pub F);

impl<T, F> Comparator<T> for ThreeWay<F>
where
    T: ?Sized,
    F: Fn(&T, &T) -> i32,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        (self.0)(left, right).cmp(&0)
    }
}

/// Reverses the order of another comparator.
#[derive(Clone, Copy, Debug, Default)]
pub struct Reverse<C>(pub C);

impl<T, C> Comparator<T> for Reverse<C>
where
    T: ?Sized,
    C: Comparator<T>,
{
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self.0.compare(right, left)
    }
}
