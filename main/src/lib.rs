//! Precondition-checked wrappers.
//!
//! A [`Cond<S, C>`] binds one or more values, runs the check `C` against them once during
//! construction and afterwards behaves like the bound values. A function that takes a `Cond`
//! therefore states its preconditions in its signature, and callers cannot forget to check them:
//!
//! ```rust
//! use pre::{throw_on_fail::{NotEmpty, SameSize}, Owned};
//!
//! fn mean(values: NotEmpty<&[f64]>) -> f64 {
//!     values.iter().sum::<f64>() / values.len() as f64
//! }
//!
//! fn dot(pair: SameSize<(&Vec<f64>, &Vec<f64>)>) -> f64 {
//!     let (a, b) = pair.into_inner();
//!     a.iter().zip(b).map(|(a, b)| a * b).sum()
//! }
//!
//! # fn main() -> Result<(), pre::Violation> {
//! assert_eq!(mean(NotEmpty::new(&[1.0, 2.0, 3.0][..])?), 2.0);
//! assert!(NotEmpty::<&[f64]>::new(&[][..]).is_err());
//!
//! let (a, b) = (vec![1.0, 2.0], vec![3.0, 4.0]);
//! assert_eq!(dot(SameSize::new((&a, &b))?), 11.0);
//! # Ok(())
//! # }
//! ```
//!
//! Every slot of a wrapper has one of three bound kinds: [`Owned<T>`], `&mut T` or `&T` (see
//! [`Slot`]). The check is a type parameter, usually a [`Predicate`] combined with a failure
//! policy: [`Throw`] returns a [`Violation`], [`Assert`] panics in debug builds. The ready-made
//! predicates live in [`predicate`], with aliases for both policies in [`throw_on_fail`] and
//! [`assert_on_fail`].
//!
//! # Features
//!
//! - `std` (default): implements the capability traits for `std` collections. Implies `alloc`.
//! - `alloc`: implements the capability traits for `alloc` collections.
//! - `tracing` (default): emits a `debug` event whenever a precondition is violated.
//!
//! Without `std` the crate is `no_std`.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![warn(missing_docs)]

#[cfg(feature = "alloc")]
extern crate alloc;

// Allows the generated code of the `predicate` attribute to refer to this crate by name.
extern crate self as pre;

mod check;
mod collection;
mod cond;
mod error;
mod on_fail;
pub mod predicate;
mod slot;

pub use crate::{
    check::{Assert, Check, Predicate, Throw},
    collection::{Collection, Nullable, Ordered},
    cond::Cond,
    error::Violation,
    on_fail::{assert_on_fail, throw_on_fail},
    slot::{Bind, Owned, Slot, SlotAt, SlotMut, Slots},
};

/// Turns a function returning `bool` into a [`Predicate`].
///
/// The function must take every parameter by reference. The attribute keeps the function and
/// generates a unit struct, named after the function in `UpperCamelCase`, that implements
/// [`Predicate`] for slots bound to the parameter types. A function with more than one parameter
/// generates an implementation for a tuple of slots.
///
/// ```rust
/// use pre::{predicate, Cond, Owned, Throw};
///
/// #[predicate]
/// fn even(value: &u32) -> bool {
///     value % 2 == 0
/// }
///
/// let four: Cond<Owned<u32>, Throw<Even>> = Cond::new(4_u32).unwrap();
/// assert_eq!(*four, 4);
///
/// let three = Cond::<&u32, Throw<Even>>::new(&3);
/// assert_eq!(three.unwrap_err().precondition(), "even");
/// ```
///
/// A different name for the struct can be given as an argument:
///
/// ```rust
/// use pre::{predicate, Cond, Throw};
///
/// #[predicate(InRange)]
/// fn within(value: &i64, bounds: &(i64, i64)) -> bool {
///     bounds.0 <= *value && *value < bounds.1
/// }
///
/// let bounds = (0, 10);
/// assert!(Cond::<(&i64, &(i64, i64)), Throw<InRange>>::new((&5, &bounds)).is_ok());
/// assert!(Cond::<(&i64, &(i64, i64)), Throw<InRange>>::new((&10, &bounds)).is_err());
/// ```
///
/// Parameters that are not references are rejected:
///
/// ```rust,compile_fail
/// use pre::predicate;
///
/// #[predicate]
/// fn small(value: u8) -> bool {
///     value < 10
/// }
/// ```
pub use pre_proc_macro::predicate;
