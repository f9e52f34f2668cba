//! Value introspection: nil, zero, empty and equality
//!
//! Each capability is its own trait, implemented explicitly per shape.
//! A type that has no implementation does not compile with the matching
//! check, rather than silently falling back to some other rule.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, BinaryHeap, HashMap, HashSet, LinkedList, VecDeque};
use std::rc::{self, Rc};
use std::sync::{self, Arc};
use std::time::Duration;

/// Shapes that can refer to nothing.
pub trait Nilable {
    fn is_nil(&self) -> bool;
}

impl<T> Nilable for Option<T> {
    fn is_nil(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Nilable for *const T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for *mut T {
    fn is_nil(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Nilable for rc::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: ?Sized> Nilable for sync::Weak<T> {
    fn is_nil(&self) -> bool {
        self.strong_count() == 0
    }
}

impl<T: Nilable + ?Sized> Nilable for &T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

impl<T: Nilable + ?Sized> Nilable for &mut T {
    fn is_nil(&self) -> bool {
        (**self).is_nil()
    }
}

/// Value types always hold something, even when zeroed.
macro_rules! never_nil {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Nilable for $ty {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    str, String,
);

macro_rules! never_nil_generic {
    ($($ty:ident),* $(,)?) => {
        $(
            impl<T: ?Sized> Nilable for $ty<T> {
                fn is_nil(&self) -> bool {
                    false
                }
            }
        )*
    };
}

never_nil_generic!(Box, Rc, Arc);

impl<T> Nilable for [T] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T, const N: usize> Nilable for [T; N] {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<T> Nilable for Vec<T> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V, S> Nilable for HashMap<K, V, S> {
    fn is_nil(&self) -> bool {
        false
    }
}

impl<K, V> Nilable for BTreeMap<K, V> {
    fn is_nil(&self) -> bool {
        false
    }
}

/// Shapes with a zero value.
///
/// Nil-able shapes are zero when nil, containers when they hold nothing,
/// and value types when they equal their `Default`. A derived struct opts
/// in with [`zero_when_default!`](crate::zero_when_default), which makes it
/// zero when each of its fields is.
pub trait Zeroable {
    fn is_zero(&self) -> bool;
}

/// Does `value` equal its type's `Default`?
pub fn is_default<T: Default + PartialEq>(value: &T) -> bool {
    *value == T::default()
}

/// Implement [`Zeroable`] for `Default + PartialEq` types.
#[macro_export]
macro_rules! zero_when_default {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::introspect::Zeroable for $ty {
                fn is_zero(&self) -> bool {
                    $crate::introspect::is_default(self)
                }
            }
        )*
    };
}

zero_when_default!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    String, Duration,
);

impl Zeroable for str {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T> Zeroable for Option<T> {
    fn is_zero(&self) -> bool {
        self.is_none()
    }
}

impl<T: ?Sized> Zeroable for *const T {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Zeroable for *mut T {
    fn is_zero(&self) -> bool {
        self.is_null()
    }
}

impl<T: ?Sized> Zeroable for rc::Weak<T> {
    fn is_zero(&self) -> bool {
        self.is_nil()
    }
}

impl<T: ?Sized> Zeroable for sync::Weak<T> {
    fn is_zero(&self) -> bool {
        self.is_nil()
    }
}

macro_rules! zero_when_empty {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T> Zeroable for $ty {
                fn is_zero(&self) -> bool {
                    self.is_empty()
                }
            }
        )*
    };
}

zero_when_empty!(Vec<T>, VecDeque<T>, LinkedList<T>, BinaryHeap<T>, BTreeSet<T>);

impl<T, S> Zeroable for HashSet<T, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S> Zeroable for HashMap<K, V, S> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> Zeroable for BTreeMap<K, V> {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Zeroable> Zeroable for [T] {
    fn is_zero(&self) -> bool {
        self.iter().all(Zeroable::is_zero)
    }
}

impl<T: Zeroable, const N: usize> Zeroable for [T; N] {
    fn is_zero(&self) -> bool {
        self.iter().all(Zeroable::is_zero)
    }
}

macro_rules! zero_tuple {
    ($(($($name:ident),+)),* $(,)?) => {
        $(
            impl<$($name: Zeroable),+> Zeroable for ($($name,)+) {
                #[allow(non_snake_case)]
                fn is_zero(&self) -> bool {
                    let ($($name,)+) = self;
                    $($name.is_zero())&&+
                }
            }
        )*
    };
}

zero_tuple!((A), (A, B), (A, B, C), (A, B, C, D));

macro_rules! zero_through_deref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Zeroable + ?Sized> Zeroable for $ty {
                fn is_zero(&self) -> bool {
                    Zeroable::is_zero(&**self)
                }
            }
        )*
    };
}

zero_through_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

impl<B> Zeroable for Cow<'_, B>
where
    B: Zeroable + ToOwned + ?Sized,
{
    fn is_zero(&self) -> bool {
        Zeroable::is_zero(&**self)
    }
}

/// Shapes that can be empty.
///
/// Nil handles are empty, containers are empty when they have no elements,
/// handles to a value are empty when the value is, and scalars are empty
/// when zero. Opt a zero-defined type in with [`empty_when_zero!`](crate::empty_when_zero).
pub trait Emptiable {
    fn is_empty(&self) -> bool;
}

impl Emptiable for str {
    fn is_empty(&self) -> bool {
        str::is_empty(self)
    }
}

impl Emptiable for String {
    fn is_empty(&self) -> bool {
        String::is_empty(self)
    }
}

impl<T> Emptiable for [T] {
    fn is_empty(&self) -> bool {
        <[T]>::is_empty(self)
    }
}

impl<T, const N: usize> Emptiable for [T; N] {
    fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<T> Emptiable for Vec<T> {
    fn is_empty(&self) -> bool {
        Vec::is_empty(self)
    }
}

impl<T> Emptiable for VecDeque<T> {
    fn is_empty(&self) -> bool {
        VecDeque::is_empty(self)
    }
}

impl<T> Emptiable for LinkedList<T> {
    fn is_empty(&self) -> bool {
        LinkedList::is_empty(self)
    }
}

impl<T> Emptiable for BinaryHeap<T> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }
}

impl<K, V, S> Emptiable for HashMap<K, V, S> {
    fn is_empty(&self) -> bool {
        HashMap::is_empty(self)
    }
}

impl<T, S> Emptiable for HashSet<T, S> {
    fn is_empty(&self) -> bool {
        HashSet::is_empty(self)
    }
}

impl<K, V> Emptiable for BTreeMap<K, V> {
    fn is_empty(&self) -> bool {
        BTreeMap::is_empty(self)
    }
}

impl<T> Emptiable for BTreeSet<T> {
    fn is_empty(&self) -> bool {
        BTreeSet::is_empty(self)
    }
}

impl<T: Emptiable> Emptiable for Option<T> {
    fn is_empty(&self) -> bool {
        match self {
            None => true,
            Some(value) => Emptiable::is_empty(value),
        }
    }
}

impl<T: Emptiable + ?Sized> Emptiable for rc::Weak<T> {
    fn is_empty(&self) -> bool {
        match self.upgrade() {
            None => true,
            Some(value) => Emptiable::is_empty(&*value),
        }
    }
}

impl<T: Emptiable + ?Sized> Emptiable for sync::Weak<T> {
    fn is_empty(&self) -> bool {
        match self.upgrade() {
            None => true,
            Some(value) => Emptiable::is_empty(&*value),
        }
    }
}

impl<B> Emptiable for Cow<'_, B>
where
    B: Emptiable + ToOwned + ?Sized,
{
    fn is_empty(&self) -> bool {
        Emptiable::is_empty(&**self)
    }
}

macro_rules! empty_through_deref {
    ($($ty:ty),* $(,)?) => {
        $(
            impl<T: Emptiable + ?Sized> Emptiable for $ty {
                fn is_empty(&self) -> bool {
                    Emptiable::is_empty(&**self)
                }
            }
        )*
    };
}

empty_through_deref!(&T, &mut T, Box<T>, Rc<T>, Arc<T>);

/// Implement [`Emptiable`] for types whose emptiness is their zero value.
#[macro_export]
macro_rules! empty_when_zero {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::introspect::Emptiable for $ty {
                fn is_empty(&self) -> bool {
                    $crate::introspect::Zeroable::is_zero(self)
                }
            }
        )*
    };
}

empty_when_zero!(
    (), bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

/// Structural equality.
///
/// Derived `PartialEq` compares contents recursively, never addresses. `fn`
/// pointers compare by the code they point to; closures have no equality.
pub fn equal<A, B>(a: &A, b: &B) -> bool
where
    A: PartialEq<B> + ?Sized,
    B: ?Sized,
{
    a == b
}
