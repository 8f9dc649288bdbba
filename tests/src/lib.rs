//! This crate defines the integration tests for the `pre` crate.
//!
//! These are defined in a different crate, because otherwise `proc-macro-crate` does not work
//! properly.
//!
//! The programs in `pass/` must compile and run successfully. Programs that must not compile are
//! `compile_fail` documentation tests of `pre` itself.

#[cfg(test)]
mod tests {
    #[test]
    fn pass() {
        let t = trybuild::TestCases::new();
        t.pass("pass/*.rs");
    }
}
