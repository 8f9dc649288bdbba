//! Provides helper functions for the predicate attribute.

use proc_macro2::Span;
use syn::{
    visit_mut::{self, VisitMut},
    Lifetime, ParenthesizedGenericArguments, TypeBareFn, TypeReference,
};

/// Converts a `snake_case` name to `UpperCamelCase`.
pub(crate) fn upper_camel_case(name: &str) -> String {
    let mut result = String::with_capacity(name.len());
    let mut at_word_start = true;

    for c in name.chars() {
        if c == '_' {
            at_word_start = true;
        } else if at_word_start {
            result.extend(c.to_uppercase());
            at_word_start = false;
        } else {
            result.push(c);
        }
    }

    // Names like `_` or `_1` have no word to start the identifier with.
    if !result.starts_with(|c: char| c.is_alphabetic()) {
        result.insert(0, '_');
    }

    result
}

/// Gives a name to every elided lifetime in a type.
///
/// The generated implementation is generic over the named lifetimes, so the predicate works for
/// all of them, just like the function it was generated from.
#[derive(Default)]
pub(crate) struct ElidedLifetimes {
    /// The lifetimes that were introduced so far.
    named: Vec<Lifetime>,
}

impl ElidedLifetimes {
    /// Returns the lifetimes that were introduced.
    pub(crate) fn into_lifetimes(self) -> Vec<Lifetime> {
        self.named
    }

    /// Introduces a new lifetime.
    fn fresh(&mut self, span: Span) -> Lifetime {
        let lifetime = Lifetime::new(&format!("'__pre{}", self.named.len()), span);
        self.named.push(lifetime.clone());
        lifetime
    }
}

impl VisitMut for ElidedLifetimes {
    fn visit_type_reference_mut(&mut self, reference: &mut TypeReference) {
        if reference.lifetime.is_none() {
            reference.lifetime = Some(self.fresh(Span::call_site()));
        }

        visit_mut::visit_type_reference_mut(self, reference);
    }

    fn visit_lifetime_mut(&mut self, lifetime: &mut Lifetime) {
        if lifetime.ident == "_" {
            *lifetime = self.fresh(lifetime.span());
        }
    }

    // Elided lifetimes in function pointers and `Fn` bounds belong to those and stay elided.
    fn visit_type_bare_fn_mut(&mut self, _: &mut TypeBareFn) {}

    fn visit_parenthesized_generic_arguments_mut(&mut self, _: &mut ParenthesizedGenericArguments) {}
}
