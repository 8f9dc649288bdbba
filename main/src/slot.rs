//! Defines the bound kinds a slot of a [`Cond`](crate::Cond) can have.
//!
//! There are exactly three of them:
//!
//! - [`Owned<T>`]: the wrapper owns the value. Binding a temporary moves it into the wrapper, so
//!   it lives exactly as long as the wrapper does.
//! - `&'a mut T`: a mutable alias to a value owned elsewhere. Changes made through the wrapper
//!   are visible through the original binding.
//! - `&'a T`: a read-only alias. The wrapper never hands out mutable access to it.

use core::fmt;

/// Prevents implementations of the slot traits outside of this crate.
mod sealed {
    pub trait Sealed {}
}

/// An owned value bound to a slot.
///
/// This is the only bound kind that needs a wrapper type, the two aliasing kinds are plain
/// references. It is created while binding the arguments of [`Cond::new`](crate::Cond::new),
/// so it rarely needs to be named outside of type annotations.
#[repr(transparent)]
pub struct Owned<T>(T);

impl<T: fmt::Debug> fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A single bound parameter of a [`Cond`](crate::Cond).
pub trait Slot: sealed::Sealed {
    /// The type the slot gives access to.
    type Target: ?Sized;

    /// The way this slot appears when the slots of a wrapper are destructured.
    ///
    /// This is `&mut Target` for owned values and mutable aliases and `&Target` for read-only
    /// aliases.
    type View<'s>
    where
        Self: 's;

    /// What this slot turns into when the wrapper is consumed.
    type Inner;

    /// Returns a read-only reference to the bound value.
    fn target(&self) -> &Self::Target;

    /// Returns the view of this slot used for destructuring.
    fn view(&mut self) -> Self::View<'_>;

    /// Unwraps the slot.
    fn into_inner(self) -> Self::Inner;
}

/// A slot that allows mutating the bound value.
pub trait SlotMut: Slot {
    /// Returns a mutable reference to the bound value.
    fn target_mut(&mut self) -> &mut Self::Target;
}

impl<T> sealed::Sealed for Owned<T> {}

impl<T> Slot for Owned<T> {
    type Target = T;
    type View<'s> = &'s mut T where Self: 's;
    type Inner = T;

    fn target(&self) -> &T {
        &self.0
    }

    fn view(&mut self) -> &mut T {
        &mut self.0
    }

    fn into_inner(self) -> T {
        self.0
    }
}

impl<T> SlotMut for Owned<T> {
    fn target_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T: ?Sized> sealed::Sealed for &T {}

impl<'a, T: ?Sized> Slot for &'a T {
    type Target = T;
    type View<'s> = &'s T where Self: 's;
    type Inner = &'a T;

    fn target(&self) -> &T {
        self
    }

    fn view(&mut self) -> &T {
        self
    }

    fn into_inner(self) -> &'a T {
        self
    }
}

impl<T: ?Sized> sealed::Sealed for &mut T {}

impl<'a, T: ?Sized> Slot for &'a mut T {
    type Target = T;
    type View<'s> = &'s mut T where Self: 's;
    type Inner = &'a mut T;

    fn target(&self) -> &T {
        self
    }

    fn view(&mut self) -> &mut T {
        self
    }

    fn into_inner(self) -> &'a mut T {
        self
    }
}

impl<T: ?Sized> SlotMut for &mut T {
    fn target_mut(&mut self) -> &mut T {
        self
    }
}

/// The ordered record of all slots of a [`Cond`](crate::Cond).
///
/// This is either a single [`Slot`] or a tuple of up to six of them.
pub trait Slots: sealed::Sealed {
    /// The number of slots in the record.
    const ARITY: usize;

    /// The record with every slot replaced by its [`Slot::View`].
    type Parts<'s>
    where
        Self: 's;

    /// The record with every slot replaced by its [`Slot::Inner`].
    type Inner;

    /// Destructures the record into the views of its slots.
    fn parts(&mut self) -> Self::Parts<'_>;

    /// Unwraps every slot of the record.
    fn into_inner(self) -> Self::Inner;
}

/// Access to the slot at index `I` of a record.
pub trait SlotAt<const I: usize>: Slots {
    /// The slot at index `I`.
    type Slot: Slot;

    /// Returns a read-only reference to the value bound to the slot at index `I`.
    fn slot_target(&self) -> &<Self::Slot as Slot>::Target;

    /// Returns a mutable reference to the value bound to the slot at index `I`.
    fn slot_target_mut(&mut self) -> &mut <Self::Slot as Slot>::Target
    where
        Self::Slot: SlotMut;
}

/// Binds constructor arguments to a record of slots.
///
/// The implementations decide which arguments a slot kind accepts:
///
/// - [`Owned<T>`] accepts anything that converts [`Into`] a `T`.
/// - `&'a T` accepts both `&'a T` and `&'a mut T`.
/// - `&'a mut T` accepts only `&'a mut T`.
/// - A tuple of slots accepts a tuple of arguments, each bound to the slot at the same position.
pub trait Bind<S> {
    /// Binds `self` to the slot record `S`.
    fn bind(self) -> S;
}

impl<T, U: Into<T>> Bind<Owned<T>> for U {
    fn bind(self) -> Owned<T> {
        Owned(self.into())
    }
}

impl<'a, T: ?Sized> Bind<&'a T> for &'a T {
    fn bind(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> Bind<&'a T> for &'a mut T {
    fn bind(self) -> &'a T {
        self
    }
}

impl<'a, T: ?Sized> Bind<&'a mut T> for &'a mut T {
    fn bind(self) -> &'a mut T {
        self
    }
}

/// Implements the record traits for a single slot.
macro_rules! single_slot {
    ($([$($generics:tt)*] $ty:ty),* $(,)?) => {$(
        impl<$($generics)*> Slots for $ty {
            const ARITY: usize = 1;

            type Parts<'s> = <Self as Slot>::View<'s> where Self: 's;
            type Inner = <Self as Slot>::Inner;

            fn parts(&mut self) -> Self::Parts<'_> {
                Slot::view(self)
            }

            fn into_inner(self) -> Self::Inner {
                Slot::into_inner(self)
            }
        }

        impl<$($generics)*> SlotAt<0> for $ty {
            type Slot = Self;

            fn slot_target(&self) -> &<Self::Slot as Slot>::Target {
                Slot::target(self)
            }

            fn slot_target_mut(&mut self) -> &mut <Self::Slot as Slot>::Target
            where
                Self::Slot: SlotMut,
            {
                SlotMut::target_mut(self)
            }
        }
    )*};
}

single_slot!([T] Owned<T>, ['a, T: ?Sized] &'a T, ['a, T: ?Sized] &'a mut T);

/// Implements `SlotAt` for every position of a tuple.
macro_rules! slot_at {
    (@impl [$($all:ident),+] $slot:ident $idx:tt) => {
        impl<$($all: Slot),+> SlotAt<$idx> for ($($all,)+) {
            type Slot = $slot;

            fn slot_target(&self) -> &<Self::Slot as Slot>::Target {
                self.$idx.target()
            }

            fn slot_target_mut(&mut self) -> &mut <Self::Slot as Slot>::Target
            where
                Self::Slot: SlotMut,
            {
                self.$idx.target_mut()
            }
        }
    };
    ($all:tt $($slot:ident $idx:tt)+) => {
        $(slot_at!(@impl $all $slot $idx);)+
    };
}

/// Implements the record traits and `Bind` for a tuple of slots.
macro_rules! tuple_slots {
    ($arity:literal: $($slot:ident $arg:ident $idx:tt),+) => {
        impl<$($slot: Slot),+> sealed::Sealed for ($($slot,)+) {}

        impl<$($slot: Slot),+> Slots for ($($slot,)+) {
            const ARITY: usize = $arity;

            type Parts<'s> = ($($slot::View<'s>,)+) where Self: 's;
            type Inner = ($($slot::Inner,)+);

            fn parts(&mut self) -> Self::Parts<'_> {
                ($(self.$idx.view(),)+)
            }

            fn into_inner(self) -> Self::Inner {
                ($(self.$idx.into_inner(),)+)
            }
        }

        impl<$($slot, $arg),+> Bind<($($slot,)+)> for ($($arg,)+)
        where
            $($arg: Bind<$slot>),+
        {
            fn bind(self) -> ($($slot,)+) {
                ($(self.$idx.bind(),)+)
            }
        }

        slot_at!([$($slot),+] $($slot $idx)+);
    };
}

tuple_slots!(1: S0 A0 0);
tuple_slots!(2: S0 A0 0, S1 A1 1);
tuple_slots!(3: S0 A0 0, S1 A1 1, S2 A2 2);
tuple_slots!(4: S0 A0 0, S1 A1 1, S2 A2 2, S3 A3 3);
tuple_slots!(5: S0 A0 0, S1 A1 1, S2 A2 2, S3 A3 3, S4 A4 4);
tuple_slots!(6: S0 A0 0, S1 A1 1, S2 A2 2, S3 A3 3, S4 A4 4, S5 A5 5);
