//! Defines the precondition-checked wrapper.

use core::{
    convert::Infallible,
    fmt,
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use crate::{Bind, Check, Owned, Slot, SlotAt, SlotMut, Slots};

/// One or more values that satisfied the check `C` when they were bound.
///
/// `S` is the record of slots. It is either a single slot or a tuple of slots. A slot is
/// one of [`Owned<T>`], `&mut T` or `&T`. `C` is the [`Check`] run during construction.
///
/// ```rust
/// use pre::{throw_on_fail::Positive, Owned};
///
/// # fn main() -> Result<(), pre::Violation> {
/// let value: Positive<Owned<i32>> = Positive::new(5)?;
/// assert_eq!(*value + 1, 6);
///
/// assert!(Positive::<Owned<i32>>::new(-5).is_err());
/// # Ok(())
/// # }
/// ```
///
/// # Binding
///
/// Which arguments a slot accepts depends on its kind (see [`Bind`]). An owned slot accepts
/// anything convertible into its type. A read-only alias accepts shared and mutable references.
/// A mutable alias accepts nothing but a mutable reference:
///
/// ```rust,compile_fail
/// # use pre::throw_on_fail::Positive;
/// let value = 5;
/// let alias: Positive<&mut i32> = Positive::new(&value).unwrap();
/// ```
///
/// A mutable alias cannot outlive the temporary it was bound to either:
///
/// ```rust,compile_fail
/// # use pre::throw_on_fail::Positive;
/// let alias: Positive<&mut i32> = Positive::new(&mut 5).unwrap();
/// assert_eq!(*alias, 5);
/// ```
///
/// Owned slots never copy from a reference implicitly:
///
/// ```rust,compile_fail
/// # use pre::{throw_on_fail::NotNull, Owned};
/// let boxed = Some(Box::new(1));
/// let owned: NotNull<Owned<Option<Box<i32>>>> = NotNull::new(&boxed).unwrap();
/// ```
///
/// Neither from a mutable reference:
///
/// ```rust,compile_fail
/// # use pre::{throw_on_fail::Positive, Owned};
/// let mut x: i64 = 5;
/// let owned: Positive<Owned<i64>> = Positive::new(&mut x).unwrap();
/// ```
///
/// Aliases only bind to references, never to a value moved in:
///
/// ```rust,compile_fail
/// # use pre::throw_on_fail::Positive;
/// let x: i32 = 5;
/// let alias: Positive<&i32> = Positive::new(x).unwrap();
/// ```
///
/// ```rust,compile_fail
/// # use pre::throw_on_fail::Positive;
/// let x: i32 = 5;
/// let alias: Positive<&mut i32> = Positive::new(x).unwrap();
/// ```
///
/// # Access
///
/// A wrapper with a single slot dereferences to the bound value, so member access, indexing and
/// calling work on it directly. Owned slots and mutable aliases also dereference mutably. Read-only
/// aliases never do:
///
/// ```rust,compile_fail
/// # use pre::throw_on_fail::Positive;
/// let value = 5;
/// let mut alias: Positive<&i32> = Positive::new(&value).unwrap();
/// *alias = 7;
/// ```
///
/// The slots of any record are reachable with [`get`](Cond::get), [`get_mut`](Cond::get_mut) and
/// [`parts`](Cond::parts).
///
/// # Validate once
///
/// The check runs exactly once, when the wrapper is constructed. Mutating the bound values
/// through [`get_mut`](Cond::get_mut), [`DerefMut`], [`assign`](Cond::assign) or
/// [`parts`](Cond::parts) does not run it again, and neither does mutating the referent of an
/// alias from elsewhere. Use [`recheck`](Cond::recheck) after mutating if the precondition still
/// needs to hold.
///
/// The wrapper is neither [`Clone`] nor [`Copy`]:
///
/// ```rust,compile_fail
/// # use pre::{throw_on_fail::Positive, Owned};
/// fn duplicate<T: Clone>(value: &T) -> T {
///     value.clone()
/// }
///
/// let value: Positive<Owned<u8>> = Positive::new(1_u8).unwrap();
/// let copy = duplicate(&value);
/// ```
pub struct Cond<S, C> {
    /// The bound slots.
    slots: S,
    /// The check the slots satisfied.
    check: PhantomData<fn() -> C>,
}

impl<S: Slots, C: Check<S>> Cond<S, C> {
    /// Binds the arguments and runs the check against them.
    ///
    /// For a wrapper with a single slot, `args` is the argument for that slot. Otherwise it is a
    /// tuple with one argument per slot.
    ///
    /// # Errors
    ///
    /// Returns the error of the check if it fails. No wrapper exists in that case.
    pub fn new<A: Bind<S>>(args: A) -> Result<Self, C::Error> {
        let slots = args.bind();

        C::check(&slots)?;

        Ok(Cond {
            slots,
            check: PhantomData,
        })
    }

    /// Runs the check again against the current slots.
    ///
    /// # Errors
    ///
    /// Returns the error of the check if the bound values were changed in a way that violates
    /// the precondition.
    pub fn recheck(&self) -> Result<(), C::Error> {
        C::check(&self.slots)
    }
}

impl<S: Slots, C: Check<S, Error = Infallible>> Cond<S, C> {
    /// Binds the arguments to a wrapper whose check cannot return an error.
    ///
    /// This is the constructor for the [`Assert`](crate::Assert) policy, which panics instead.
    pub fn assured<A: Bind<S>>(args: A) -> Self {
        match Self::new(args) {
            Ok(cond) => cond,
            Err(never) => match never {},
        }
    }
}

impl<T, C: Check<Owned<T>>> Cond<Owned<T>, C> {
    /// Constructs the owned value in place and runs the check against it.
    ///
    /// ```rust
    /// # use pre::{throw_on_fail::NotEmpty, Owned};
    /// let filled: NotEmpty<Owned<Vec<u8>>> = NotEmpty::new_with(|| vec![1; 5]).unwrap();
    /// assert_eq!(filled.len(), 5);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns the error of the check if it fails.
    pub fn new_with(init: impl FnOnce() -> T) -> Result<Self, C::Error> {
        Self::new(init())
    }
}

impl<S: Slots, C> Cond<S, C> {
    /// Returns the value bound to slot `I`.
    pub fn get<const I: usize>(&self) -> &<<S as SlotAt<I>>::Slot as Slot>::Target
    where
        S: SlotAt<I>,
    {
        self.slots.slot_target()
    }

    /// Returns the value bound to slot `I` mutably.
    ///
    /// This is only available for owned slots and mutable aliases:
    ///
    /// ```rust,compile_fail
    /// # use pre::{throw_on_fail::SameSize, Owned};
    /// let shared = vec![1, 2];
    /// let mut both: SameSize<(Owned<Vec<i32>>, &Vec<i32>)> =
    ///     SameSize::new((vec![3, 4], &shared)).unwrap();
    /// both.get_mut::<1>().push(5);
    /// ```
    pub fn get_mut<const I: usize>(&mut self) -> &mut <<S as SlotAt<I>>::Slot as Slot>::Target
    where
        S: SlotAt<I>,
        <S as SlotAt<I>>::Slot: SlotMut,
    {
        self.slots.slot_target_mut()
    }

    /// Destructures the wrapper into one binding per slot.
    ///
    /// Owned slots and mutable aliases are returned as `&mut T`, read-only aliases as `&T`.
    ///
    /// ```rust
    /// # use pre::{throw_on_fail::SameSize, Owned};
    /// let names = ["a", "b"];
    /// let mut pair: SameSize<(Owned<Vec<u32>>, &[&str; 2])> =
    ///     SameSize::new((vec![1, 2], &names)).unwrap();
    ///
    /// let (ids, names) = pair.parts();
    /// ids[0] = 10;
    /// assert_eq!(names[0], "a");
    /// assert_eq!(pair.get::<0>(), &[10, 2]);
    /// ```
    pub fn parts(&mut self) -> S::Parts<'_> {
        self.slots.parts()
    }

    /// Consumes the wrapper and returns the bound values.
    ///
    /// Owned slots are moved out, aliases are returned as the references they were bound to.
    pub fn into_inner(self) -> S::Inner {
        Slots::into_inner(self.slots)
    }
}

impl<S: Slot, C> Cond<S, C> {
    /// Assigns to the single bound value without running the check.
    pub fn assign<U>(&mut self, value: U)
    where
        S: SlotMut,
        S::Target: Sized,
        U: Into<S::Target>,
    {
        *self.slots.target_mut() = value.into();
    }

    /// Borrows the already checked value as a read-only alias.
    ///
    /// This allows passing the value on to a function taking a wrapper with the same check,
    /// without copying and without checking again.
    pub fn reborrow(&self) -> Cond<&S::Target, C> {
        Cond {
            slots: self.slots.target(),
            check: PhantomData,
        }
    }

    /// Borrows the already checked value as a mutable alias.
    pub fn reborrow_mut(&mut self) -> Cond<&mut S::Target, C>
    where
        S: SlotMut,
    {
        Cond {
            slots: self.slots.target_mut(),
            check: PhantomData,
        }
    }
}

impl<S: Slot, C> Deref for Cond<S, C> {
    type Target = S::Target;

    fn deref(&self) -> &S::Target {
        self.slots.target()
    }
}

impl<S: SlotMut, C> DerefMut for Cond<S, C> {
    fn deref_mut(&mut self) -> &mut S::Target {
        self.slots.target_mut()
    }
}

impl<S: fmt::Debug, C> fmt::Debug for Cond<S, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("Cond").field(&self.slots).finish()
    }
}
