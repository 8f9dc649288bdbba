//! Defines how the slots of a [`Cond`](crate::Cond) are validated.

use core::{convert::Infallible, marker::PhantomData};

use crate::Violation;

/// Validates the slots of a [`Cond`](crate::Cond) during construction.
///
/// A check is attached to the wrapper type and never stored in an instance, so implementors
/// are usually zero-sized types that are never constructed.
///
/// Most checks are built from a [`Predicate`] and one of the two policies, [`Throw`] and
/// [`Assert`]. Implementing this trait directly allows using a custom error type.
pub trait Check<S: ?Sized> {
    /// The error returned when the check fails.
    type Error;

    /// Runs the check against all slots.
    fn check(slots: &S) -> Result<(), Self::Error>;
}

/// A named test on the slots of a [`Cond`](crate::Cond).
///
/// The name is used in the error message of [`Throw`] and in the panic message of [`Assert`].
///
/// Predicates can also be generated from a function using the
/// [`predicate`](macro@crate::predicate) attribute.
pub trait Predicate<S: ?Sized> {
    /// The name of the precondition this predicate tests.
    const NAME: &'static str;

    /// Returns whether the precondition holds for the given slots.
    fn test(slots: &S) -> bool;
}

/// Reports failing predicates as a [`Violation`].
///
/// Use this for preconditions on input that the caller must be able to recover from.
pub struct Throw<P>(PhantomData<fn() -> P>);

impl<S: ?Sized, P: Predicate<S>> Check<S> for Throw<P> {
    type Error = Violation;

    fn check(slots: &S) -> Result<(), Violation> {
        if P::test(slots) {
            Ok(())
        } else {
            report(P::NAME);

            Err(Violation::new(P::NAME))
        }
    }
}

/// Panics on failing predicates if debug assertions are enabled.
///
/// Use this for preconditions whose violation is a bug in the calling code. With debug
/// assertions disabled the predicate is not evaluated at all.
pub struct Assert<P>(PhantomData<fn() -> P>);

impl<S: ?Sized, P: Predicate<S>> Check<S> for Assert<P> {
    type Error = Infallible;

    fn check(slots: &S) -> Result<(), Infallible> {
        if cfg!(debug_assertions) && !P::test(slots) {
            report(P::NAME);

            panic!("precondition '{}' failed", P::NAME);
        }

        Ok(())
    }
}

cfg_if::cfg_if! {
    if #[cfg(feature = "tracing")] {
        /// Emits an event for a violated precondition.
        fn report(precondition: &'static str) {
            tracing::debug!(precondition, "precondition violated");
        }
    } else {
        fn report(_precondition: &'static str) {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct IsEven;

    impl Predicate<u32> for IsEven {
        const NAME: &'static str = "is_even";

        fn test(value: &u32) -> bool {
            value % 2 == 0
        }
    }

    #[test]
    fn throw_passes_holding_predicate() {
        assert_eq!(<Throw<IsEven> as Check<u32>>::check(&4), Ok(()));
    }

    #[test]
    fn throw_names_failing_predicate() {
        let err = <Throw<IsEven> as Check<u32>>::check(&3).unwrap_err();

        assert_eq!(err.precondition(), "is_even");
    }

    #[test]
    fn assert_passes_holding_predicate() {
        assert!(<Assert<IsEven> as Check<u32>>::check(&8).is_ok());
    }

    #[test]
    #[cfg_attr(debug_assertions, should_panic(expected = "precondition 'is_even' failed"))]
    fn assert_panics_on_failing_predicate() {
        let _ = <Assert<IsEven> as Check<u32>>::check(&7);
    }
}
