//! Capabilities the ready-made predicates require from the bound values.

use core::ptr::NonNull;

/// A value with a number of elements.
pub trait Collection {
    /// The number of elements.
    fn len(&self) -> usize;

    /// Whether there are no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A sequence whose elements can be compared with each other.
pub trait Ordered {
    /// Whether no element is less than the element before it.
    fn is_sorted(&self) -> bool;
}

/// A value that may be null.
pub trait Nullable {
    /// Whether the value is null.
    fn is_null(&self) -> bool;
}

/// Checks that no element of `items` is less than its predecessor.
fn is_sorted_by_pairs<'a, T: PartialOrd + 'a>(mut items: impl Iterator<Item = &'a T>) -> bool {
    let mut previous = match items.next() {
        Some(first) => first,
        None => return true,
    };

    for item in items {
        if item < previous {
            return false;
        }

        previous = item;
    }

    true
}

impl<T> Collection for [T] {
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> Collection for [T; N] {
    fn len(&self) -> usize {
        N
    }
}

impl Collection for str {
    fn len(&self) -> usize {
        str::len(self)
    }
}

impl<T: PartialOrd> Ordered for [T] {
    fn is_sorted(&self) -> bool {
        is_sorted_by_pairs(self.iter())
    }
}

impl<T: PartialOrd, const N: usize> Ordered for [T; N] {
    fn is_sorted(&self) -> bool {
        is_sorted_by_pairs(self.iter())
    }
}

impl<T: ?Sized> Nullable for *const T {
    fn is_null(&self) -> bool {
        <*const T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for *mut T {
    fn is_null(&self) -> bool {
        <*mut T>::is_null(*self)
    }
}

impl<T: ?Sized> Nullable for NonNull<T> {
    fn is_null(&self) -> bool {
        false
    }
}

impl<T> Nullable for Option<T> {
    fn is_null(&self) -> bool {
        self.is_none()
    }
}

#[cfg(feature = "alloc")]
mod alloc_impls {
    use alloc::{
        boxed::Box,
        collections::{BTreeMap, BTreeSet, VecDeque},
        string::String,
        vec::Vec,
    };

    use super::*;

    /// Implements `Collection` using the inherent `len` method.
    macro_rules! collection_by_len {
        ($([$($generics:tt)*] $ty:ty),* $(,)?) => {$(
            impl<$($generics)*> Collection for $ty {
                fn len(&self) -> usize {
                    <$ty>::len(self)
                }
            }
        )*};
    }

    collection_by_len!(
        [T] Vec<T>,
        [T] VecDeque<T>,
        [K, V] BTreeMap<K, V>,
        [T] BTreeSet<T>,
        [] String,
    );

    impl<C: Collection + ?Sized> Collection for Box<C> {
        fn len(&self) -> usize {
            C::len(self)
        }
    }

    impl<T: PartialOrd> Ordered for Vec<T> {
        fn is_sorted(&self) -> bool {
            is_sorted_by_pairs(self.iter())
        }
    }

    impl<T: PartialOrd> Ordered for VecDeque<T> {
        fn is_sorted(&self) -> bool {
            is_sorted_by_pairs(self.iter())
        }
    }

    // Iteration is in ascending order.
    impl<T: Ord> Ordered for BTreeSet<T> {
        fn is_sorted(&self) -> bool {
            true
        }
    }

    impl<T: ?Sized> Nullable for Box<T> {
        fn is_null(&self) -> bool {
            false
        }
    }
}

#[cfg(feature = "std")]
mod std_impls {
    use std::collections::{HashMap, HashSet};

    use super::Collection;

    impl<K, V, S> Collection for HashMap<K, V, S> {
        fn len(&self) -> usize {
            HashMap::len(self)
        }
    }

    impl<T, S> Collection for HashSet<T, S> {
        fn len(&self) -> usize {
            HashSet::len(self)
        }
    }
}
