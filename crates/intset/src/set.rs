//! The canonical integer set value type.
//!
//! This module defines [`IntSet`], an immutable set of 32-bit integers held
//! in canonical form, together with its literal parsing, formatting, and
//! algebra.

use alloc::{boxed::Box, vec::Vec};
use core::{fmt, ops, str::FromStr};

use crate::{error::ParseError, parser, search, sort};

/// A set of 32-bit integers in canonical form.
///
/// Elements are held strictly increasing, which implies both sortedness and
/// uniqueness. A value is immutable once constructed: every operation takes
/// the set by shared reference and produces a fresh set or a scalar.
///
/// Sets are parsed from brace literals such as `"{1,2,3}"` (spaces around
/// numbers are allowed, a comma must separate consecutive numbers) and
/// display in the canonical form with no spaces.
///
/// # Examples
///
/// ```
/// use intset::IntSet;
///
/// let set: IntSet = "{ 3, 1, 2, 2 }".parse().unwrap();
/// assert_eq!(set.to_string(), "{1,2,3}");
/// assert_eq!(set.len(), 3);
/// assert!(set.contains(2));
/// ```
// Enable serde support for tests and when the optional `serde` feature is
// activated by downstream crates.  The `cfg_attr` conditional keeps the core
// crate free of a serde dependency in normal builds.  Decoding routes
// through `Vec<i32>`, which re-canonicalizes.
#[cfg_attr(any(test, feature = "serde"), derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(any(test, feature = "serde"), serde(from = "Vec<i32>", into = "Vec<i32>"))]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct IntSet {
    elems: Box<[i32]>,
}

impl IntSet {
    /// The empty set. Allocates nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::IntSet;
    ///
    /// assert_eq!(IntSet::new(), "{}".parse().unwrap());
    /// assert_eq!(IntSet::new().to_string(), "{}");
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps elements that are unique by construction.
    ///
    /// The parser and the algebra both funnel through here, so their results
    /// are re-sorted whatever order they were assembled in.
    pub(crate) fn from_unsorted_unique(mut elems: Vec<i32>) -> Self {
        sort::sort_ascending(&mut elems);
        debug_assert!(elems.windows(2).all(|w| w[0] < w[1]));
        Self {
            elems: elems.into_boxed_slice(),
        }
    }

    /// Number of elements, O(1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the set has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Returns `true` if `value` is an element of the set.
    ///
    /// Binary search, O(log n).
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::IntSet;
    ///
    /// let set: IntSet = "{1,5,9}".parse().unwrap();
    /// assert!(set.contains(5));
    /// assert!(!set.contains(4));
    /// ```
    #[must_use]
    pub fn contains(&self, value: i32) -> bool {
        search::contains(&self.elems, value)
    }

    /// The elements as an ascending slice.
    #[must_use]
    pub fn as_slice(&self) -> &[i32] {
        &self.elems
    }

    /// Iterates over the elements in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.elems.iter().copied()
    }

    /// Returns `true` if every element of `other` is an element of `self`
    /// (`self ⊇ other`).
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::IntSet;
    ///
    /// let a: IntSet = "{1,2,3}".parse().unwrap();
    /// let b: IntSet = "{1,3}".parse().unwrap();
    /// assert!(a.is_superset(&b));
    /// assert!(!b.is_superset(&a));
    /// ```
    #[must_use]
    pub fn is_superset(&self, other: &Self) -> bool {
        other.iter().all(|v| self.contains(v))
    }

    /// Returns `true` if every element of `self` is an element of `other`
    /// (`self ⊆ other`).
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// The elements common to `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::IntSet;
    ///
    /// let a: IntSet = "{1,2,3}".parse().unwrap();
    /// let b: IntSet = "{2,3,4}".parse().unwrap();
    /// assert_eq!(a.intersection(&b).to_string(), "{2,3}");
    /// ```
    #[must_use]
    pub fn intersection(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len().min(other.len()));
        for v in self.iter() {
            if other.contains(v) {
                out.push(v);
            }
        }
        Self::from_unsorted_unique(out)
    }

    /// The elements present in `self`, `other`, or both.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::IntSet;
    ///
    /// let a: IntSet = "{1,2}".parse().unwrap();
    /// let b: IntSet = "{2,3}".parse().unwrap();
    /// assert_eq!(a.union(&b).to_string(), "{1,2,3}");
    /// ```
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        out.extend(other.iter());
        for v in self.iter() {
            if !other.contains(v) {
                out.push(v);
            }
        }
        Self::from_unsorted_unique(out)
    }

    /// The elements of `self` that are not elements of `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::IntSet;
    ///
    /// let a: IntSet = "{1,2,3}".parse().unwrap();
    /// let b: IntSet = "{2}".parse().unwrap();
    /// assert_eq!(a.difference(&b).to_string(), "{1,3}");
    /// ```
    #[must_use]
    pub fn difference(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len());
        for v in self.iter() {
            if !other.contains(v) {
                out.push(v);
            }
        }
        Self::from_unsorted_unique(out)
    }

    /// The elements in exactly one of `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use intset::IntSet;
    ///
    /// let a: IntSet = "{1,2,3}".parse().unwrap();
    /// let b: IntSet = "{3,4}".parse().unwrap();
    /// assert_eq!(a.symmetric_difference(&b).to_string(), "{1,2,4}");
    /// ```
    #[must_use]
    pub fn symmetric_difference(&self, other: &Self) -> Self {
        let mut out = Vec::with_capacity(self.len() + other.len());
        for v in self.iter() {
            if !other.contains(v) {
                out.push(v);
            }
        }
        for v in other.iter() {
            if !self.contains(v) {
                out.push(v);
            }
        }
        Self::from_unsorted_unique(out)
    }
}

impl FromStr for IntSet {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let elems = parser::parse_literal(s.as_bytes())?;
        Ok(Self::from_unsorted_unique(elems))
    }
}

/// Canonicalizes arbitrary values: sorts, then collapses duplicates.
impl From<Vec<i32>> for IntSet {
    fn from(mut values: Vec<i32>) -> Self {
        sort::sort_ascending(&mut values);
        values.dedup();
        Self {
            elems: values.into_boxed_slice(),
        }
    }
}

impl From<IntSet> for Vec<i32> {
    fn from(set: IntSet) -> Self {
        set.elems.into_vec()
    }
}

impl FromIterator<i32> for IntSet {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a IntSet {
    type Item = i32;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, i32>>;

    fn into_iter(self) -> Self::IntoIter {
        self.elems.iter().copied()
    }
}

impl ops::BitOr for &IntSet {
    type Output = IntSet;

    /// `a | b` is the union of `a` and `b`.
    fn bitor(self, rhs: Self) -> IntSet {
        self.union(rhs)
    }
}

impl ops::BitAnd for &IntSet {
    type Output = IntSet;

    /// `a & b` is the intersection of `a` and `b`.
    fn bitand(self, rhs: Self) -> IntSet {
        self.intersection(rhs)
    }
}

impl ops::Sub for &IntSet {
    type Output = IntSet;

    /// `a - b` is the difference of `a` and `b`.
    fn sub(self, rhs: Self) -> IntSet {
        self.difference(rhs)
    }
}

impl ops::BitXor for &IntSet {
    type Output = IntSet;

    /// `a ^ b` is the symmetric difference of `a` and `b`.
    fn bitxor(self, rhs: Self) -> IntSet {
        self.symmetric_difference(rhs)
    }
}

/// Writes the canonical literal form: elements ascending, joined by `,` with
/// no spaces, wrapped in braces. The empty set renders as `{}`.
impl fmt::Display for IntSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for v in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            first = false;
            write!(f, "{v}")?;
        }
        f.write_str("}")
    }
}
