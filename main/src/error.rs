//! The error produced when a precondition does not hold.

use thiserror::Error;

/// A precondition was violated while constructing a [`Cond`](crate::Cond).
///
/// This is the error type of the [`Throw`](crate::Throw) policy. It carries the name of the
/// predicate that failed, so the message reads like `precondition 'positive' failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("precondition '{precondition}' failed")]
pub struct Violation {
    /// The name of the violated predicate.
    precondition: &'static str,
}

impl Violation {
    /// Creates a violation of the precondition with the given name.
    pub const fn new(precondition: &'static str) -> Self {
        Violation { precondition }
    }

    /// The name of the violated precondition.
    pub fn precondition(&self) -> &'static str {
        self.precondition
    }
}
