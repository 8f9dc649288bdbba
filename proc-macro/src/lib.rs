//! Procedural macro implementations for [pre](https://docs.rs/pre/).
//!
//! This crate is an implementation detail of `pre`. Use the macros through `pre` instead.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use proc_macro_error::{abort, proc_macro_error};
use quote::quote;
use syn::{parse_macro_input, ItemFn};

use crate::{
    crate_name::crate_name,
    predicate::{PredicateAttr, PredicateFn},
};

mod crate_name;
mod helpers;
mod predicate;

/// Turns a function returning `bool` into a predicate type.
///
/// See the documentation of `pre::predicate` for details.
#[proc_macro_attribute]
#[proc_macro_error]
pub fn predicate(attr: TokenStream, function: TokenStream) -> TokenStream {
    // Keep the function around if anything goes wrong, so that its callers don't produce
    // additional errors.
    let dummy_function: TokenStream2 = function.clone().into();
    proc_macro_error::set_dummy(quote! {
        #dummy_function
    });

    let attr = parse_macro_input!(attr as PredicateAttr);
    let function = parse_macro_input!(function as ItemFn);

    match PredicateFn::new(attr, function) {
        Ok(predicate) => predicate.render(&crate_name()).into(),
        Err(err) => abort!(err),
    }
}
