//! Membership over strings, collections and lazy sequences
//!
//! Collections and lazy sequences share one traversal ([`traverse`]) which
//! pulls a single element at a time and stops at the first match, so an
//! infinite [`Lazy`] sequence is safe as long as it eventually matches.
//! Strings are not sequences: membership in a string is substring search.

use std::borrow::Cow;
use std::collections::{btree_set, hash_set, vec_deque, BTreeSet, HashSet, VecDeque};
use std::fmt;
use std::{array, slice, vec};

/// A finite collection or a lazy sequence of elements.
pub trait Sequence {
    type Item;
    type Elements: Iterator<Item = Self::Item>;

    fn elements(self) -> Self::Elements;
}

impl<T> Sequence for Vec<T> {
    type Item = T;
    type Elements = vec::IntoIter<T>;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T> Sequence for &'a Vec<T> {
    type Item = &'a T;
    type Elements = slice::Iter<'a, T>;

    fn elements(self) -> Self::Elements {
        self.iter()
    }
}

impl<'a, T> Sequence for &'a [T] {
    type Item = &'a T;
    type Elements = slice::Iter<'a, T>;

    fn elements(self) -> Self::Elements {
        self.iter()
    }
}

impl<T, const N: usize> Sequence for [T; N] {
    type Item = T;
    type Elements = array::IntoIter<T, N>;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T, const N: usize> Sequence for &'a [T; N] {
    type Item = &'a T;
    type Elements = slice::Iter<'a, T>;

    fn elements(self) -> Self::Elements {
        self.iter()
    }
}

impl<T> Sequence for VecDeque<T> {
    type Item = T;
    type Elements = vec_deque::IntoIter<T>;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T> Sequence for &'a VecDeque<T> {
    type Item = &'a T;
    type Elements = vec_deque::Iter<'a, T>;

    fn elements(self) -> Self::Elements {
        self.iter()
    }
}

impl<T, S> Sequence for HashSet<T, S> {
    type Item = T;
    type Elements = hash_set::IntoIter<T>;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T, S> Sequence for &'a HashSet<T, S> {
    type Item = &'a T;
    type Elements = hash_set::Iter<'a, T>;

    fn elements(self) -> Self::Elements {
        self.iter()
    }
}

impl<T> Sequence for BTreeSet<T> {
    type Item = T;
    type Elements = btree_set::IntoIter<T>;

    fn elements(self) -> Self::Elements {
        self.into_iter()
    }
}

impl<'a, T> Sequence for &'a BTreeSet<T> {
    type Item = &'a T;
    type Elements = btree_set::Iter<'a, T>;

    fn elements(self) -> Self::Elements {
        self.iter()
    }
}

/// An iterator treated as a (possibly infinite) sequence.
#[derive(Debug, Clone)]
pub struct Lazy<I>(pub I);

impl<I: Iterator> Sequence for Lazy<I> {
    type Item = I::Item;
    type Elements = I;

    fn elements(self) -> Self::Elements {
        self.0
    }
}

/// Wrap anything iterable as a lazy [`Sequence`].
pub fn lazy<I: IntoIterator>(iter: I) -> Lazy<I::IntoIter> {
    Lazy(iter.into_iter())
}

/// Does any element of `seq` satisfy `matches`?
///
/// Elements are pulled one at a time; nothing after the first match is
/// produced.
pub fn traverse<S, F>(seq: S, mut matches: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item) -> bool,
{
    seq.elements().any(|item| matches(&item))
}

/// Containers that can be searched for a needle of type `T`.
pub trait Haystack<T: ?Sized> {
    fn holds(self, needle: &T) -> bool;
}

impl<S, T> Haystack<T> for S
where
    S: Sequence,
    S::Item: PartialEq<T>,
    T: ?Sized,
{
    fn holds(self, needle: &T) -> bool {
        traverse(self, |item| item == needle)
    }
}

macro_rules! text_haystack {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: fmt::Display + ?Sized> Haystack<T> for $ty {
                fn holds(self, needle: &T) -> bool {
                    self.contains(needle.to_string().as_str())
                }
            }
        )*
    };
}

text_haystack!(&str, String, &String, Cow<'_, str>);
