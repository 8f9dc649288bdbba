//! Allows retrieving the name of the main crate.

use proc_macro2::Span;
use proc_macro_error::abort_call_site;
use std::env;
use syn::Ident;

/// Returns the name under which the main crate is reachable from the calling crate.
pub(crate) fn crate_name() -> Ident {
    let name = match proc_macro_crate::crate_name("pre") {
        // The main crate declares `extern crate self as pre`, so its own name works inside of it
        // as well as in its documentation tests.
        Ok(name) if name == "crate" => "pre".into(),
        Ok(name) => name,
        Err(err) => match env::var("CARGO_PKG_NAME") {
            // This allows for using the attribute inside of the main crate itself.
            //
            // This *may* lead to false positives, if someone also names their crate `pre`, however
            // it will very likely fail to compile at a later stage then.
            Ok(val) if val == "pre" => "pre".into(),
            _ => abort_call_site!("crate `pre` must be imported: {}", err),
        },
    };
    Ident::new(&name, Span::call_site())
}
