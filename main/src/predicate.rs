//! The ready-made predicates.
//!
//! Each of them is a zero-sized type implementing [`Predicate`]. Combine one with a policy to
//! get a check, e.g. `Throw<Positive>`, or use the aliases in
//! [`throw_on_fail`](crate::throw_on_fail) and [`assert_on_fail`](crate::assert_on_fail).
//!
//! All predicates except [`SameSize`] apply to a single slot of any bound kind and only look at
//! the bound value.

use num_traits::Zero;

use crate::{Collection, Nullable, Ordered, Predicate, Slot};

/// The value is greater than zero.
pub struct Positive;

impl<S: Slot> Predicate<S> for Positive
where
    S::Target: Zero + PartialOrd,
{
    const NAME: &'static str = "positive";

    fn test(slot: &S) -> bool {
        *slot.target() > <S::Target as Zero>::zero()
    }
}

/// The value is not zero.
pub struct NotZero;

impl<S: Slot> Predicate<S> for NotZero
where
    S::Target: Zero,
{
    const NAME: &'static str = "not_zero";

    fn test(slot: &S) -> bool {
        !slot.target().is_zero()
    }
}

/// The pointer is not null.
pub struct NotNull;

impl<S: Slot> Predicate<S> for NotNull
where
    S::Target: Nullable,
{
    const NAME: &'static str = "not_null";

    fn test(slot: &S) -> bool {
        !Nullable::is_null(slot.target())
    }
}

/// The collection has at least one element.
pub struct NotEmpty;

impl<S: Slot> Predicate<S> for NotEmpty
where
    S::Target: Collection,
{
    const NAME: &'static str = "not_empty";

    fn test(slot: &S) -> bool {
        !Collection::is_empty(slot.target())
    }
}

/// The elements of the sequence are in non-decreasing order.
pub struct Sorted;

impl<S: Slot> Predicate<S> for Sorted
where
    S::Target: Ordered,
{
    const NAME: &'static str = "sorted";

    fn test(slot: &S) -> bool {
        Ordered::is_sorted(slot.target())
    }
}

/// All collections in a tuple of slots have the same number of elements.
pub struct SameSize;

/// Implements `SameSize` for a tuple of slots.
macro_rules! same_size {
    ($first:ident 0 $(, $slot:ident $idx:tt)*) => {
        impl<$first: Slot $(, $slot: Slot)*> Predicate<($first, $($slot,)*)> for SameSize
        where
            $first::Target: Collection,
            $($slot::Target: Collection,)*
        {
            const NAME: &'static str = "same_size";

            #[allow(unused_variables)]
            fn test(slots: &($first, $($slot,)*)) -> bool {
                let len = Collection::len(slots.0.target());

                true $(&& Collection::len(slots.$idx.target()) == len)*
            }
        }
    };
}

same_size!(S0 0);
same_size!(S0 0, S1 1);
same_size!(S0 0, S1 1, S2 2);
same_size!(S0 0, S1 1, S2 2, S3 3);
same_size!(S0 0, S1 1, S2 2, S3 3, S4 4);
same_size!(S0 0, S1 1, S2 2, S3 3, S4 4, S5 5);
