//! Provides the ready-made checks for both failure policies.

macro_rules! define_on_fail {
    (
        $(
            $(#[$meta:meta])*
            $module:ident => $policy:ident;
        )*
    ) => {
        $(
            $(#[$meta])*
            pub mod $module {
                use crate::{predicate, Cond, $policy};

                /// A value greater than zero.
                pub type Positive<S> = Cond<S, $policy<predicate::Positive>>;

                /// A value that is not zero.
                pub type NotZero<S> = Cond<S, $policy<predicate::NotZero>>;

                /// A pointer that is not null.
                pub type NotNull<S> = Cond<S, $policy<predicate::NotNull>>;

                /// A collection with at least one element.
                pub type NotEmpty<S> = Cond<S, $policy<predicate::NotEmpty>>;

                /// A sequence in non-decreasing order.
                pub type Sorted<S> = Cond<S, $policy<predicate::Sorted>>;

                /// A tuple of collections with the same number of elements.
                pub type SameSize<S> = Cond<S, $policy<predicate::SameSize>>;
            }
        )*
    };
}

define_on_fail! {
    /// Checks that panic when the precondition does not hold.
    ///
    /// The predicates are only evaluated if debug assertions are enabled. Construct these with
    /// [`Cond::assured`](crate::Cond::assured).
    ///
    /// ```rust
    /// use pre::{assert_on_fail::Sorted, Owned};
    ///
    /// let sorted: Sorted<Owned<Vec<i32>>> = Sorted::assured(vec![1, 2, 3]);
    /// assert_eq!(sorted.first(), Some(&1));
    /// ```
    assert_on_fail => Assert;

    /// Checks that return a [`Violation`](crate::Violation) when the precondition does not hold.
    ///
    /// ```rust
    /// use pre::{throw_on_fail::NotZero, Owned};
    ///
    /// let divisor: Result<NotZero<Owned<u32>>, _> = NotZero::new(0_u32);
    /// assert_eq!(
    ///     divisor.unwrap_err().to_string(),
    ///     "precondition 'not_zero' failed"
    /// );
    /// ```
    throw_on_fail => Throw;
}
