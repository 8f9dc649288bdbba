//! Defines how a function is turned into a predicate type.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    ext::IdentExt,
    parse::{Parse, ParseStream},
    visit_mut::VisitMut,
    FnArg, GenericParam, Ident, Index, ItemFn, Lifetime, LifetimeDef, PatType, ReturnType, Type,
    TypeReference,
};

use crate::helpers::{upper_camel_case, ElidedLifetimes};

/// The arguments of the `predicate` attribute.
pub(crate) struct PredicateAttr {
    /// The name of the generated type, if it was given explicitly.
    name: Option<Ident>,
}

impl Parse for PredicateAttr {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let name = if input.is_empty() {
            None
        } else {
            Some(input.parse()?)
        };

        Ok(PredicateAttr { name })
    }
}

/// A function that a predicate type is generated from.
pub(crate) struct PredicateFn {
    /// The function itself, which is emitted unchanged.
    function: ItemFn,
    /// The name of the generated type.
    name: Ident,
    /// The type each parameter refers to, in declaration order.
    targets: Vec<Type>,
    /// The lifetimes introduced for lifetimes that were elided in the targets.
    lifetimes: Vec<Lifetime>,
}

impl PredicateFn {
    /// Checks that the function can be used as a predicate.
    ///
    /// All problems with the function are reported at once.
    pub(crate) fn new(attr: PredicateAttr, function: ItemFn) -> syn::Result<Self> {
        let mut errors = Vec::new();
        let sig = &function.sig;

        if let Some(unsafety) = &sig.unsafety {
            errors.push(syn::Error::new_spanned(
                unsafety,
                "a predicate cannot be `unsafe`",
            ));
        }
        if let Some(asyncness) = &sig.asyncness {
            errors.push(syn::Error::new_spanned(
                asyncness,
                "a predicate cannot be `async`",
            ));
        }
        if let ReturnType::Default = sig.output {
            errors.push(syn::Error::new_spanned(
                &sig.ident,
                "a predicate must return `bool`",
            ));
        }
        if sig.inputs.is_empty() {
            errors.push(syn::Error::new(
                sig.paren_token.span,
                "a predicate needs at least one parameter",
            ));
        }

        let mut elided = ElidedLifetimes::default();
        let mut targets = Vec::with_capacity(sig.inputs.len());

        for input in &sig.inputs {
            match input {
                FnArg::Receiver(receiver) => errors.push(syn::Error::new_spanned(
                    receiver,
                    "a predicate cannot take `self`",
                )),
                FnArg::Typed(PatType { ty, .. }) => match &**ty {
                    Type::Reference(TypeReference {
                        mutability: None,
                        elem,
                        ..
                    }) => {
                        let mut target = (**elem).clone();
                        elided.visit_type_mut(&mut target);
                        targets.push(target);
                    }
                    Type::Reference(TypeReference {
                        mutability: Some(mutability),
                        ..
                    }) => errors.push(syn::Error::new_spanned(
                        mutability,
                        "predicate parameters must be shared references",
                    )),
                    other => errors.push(syn::Error::new_spanned(
                        other,
                        format!(
                            "predicate parameters must be references, try `&{}`",
                            quote!(#other)
                        ),
                    )),
                },
            }
        }

        let name = match attr.name {
            Some(name) => name,
            None => {
                let ident = &function.sig.ident;
                let name = upper_camel_case(&ident.unraw().to_string());

                if name == "_" {
                    errors.push(syn::Error::new_spanned(
                        ident,
                        format!(
                            "cannot derive a type name from `{}`, name it with `#[predicate(Name)]`",
                            ident
                        ),
                    ));

                    ident.clone()
                } else {
                    Ident::new(&name, ident.span())
                }
            }
        };

        let mut errors = errors.into_iter();
        if let Some(mut first) = errors.next() {
            for err in errors {
                first.combine(err);
            }
            return Err(first);
        }

        Ok(PredicateFn {
            function,
            name,
            targets,
            lifetimes: elided.into_lifetimes(),
        })
    }

    /// Renders the function together with the predicate type and its implementation.
    ///
    /// `krate` is the name under which the main crate is reachable.
    pub(crate) fn render(&self, krate: &Ident) -> TokenStream {
        let function = &self.function;
        let vis = &function.vis;
        let fn_name = &function.sig.ident;
        let name = &self.name;
        let precondition = fn_name.unraw().to_string();
        let doc = format!(
            "The precondition checked by [`{}`], usable as a `{}::Predicate`.",
            precondition, krate
        );

        let slots: Vec<Ident> = (0..self.targets.len())
            .map(|index| format_ident!("__PreSlot{}", index))
            .collect();

        let mut generics = function.sig.generics.clone();
        for lifetime in self.lifetimes.iter().rev() {
            generics
                .params
                .insert(0, GenericParam::Lifetime(LifetimeDef::new(lifetime.clone())));
        }
        for (slot, target) in slots.iter().zip(&self.targets) {
            generics
                .params
                .push(syn::parse_quote!(#slot: ::#krate::Slot<Target = #target>));
        }
        let (impl_generics, _, where_clause) = generics.split_for_impl();

        let (slots_type, arguments) = if let [slot] = &slots[..] {
            (quote!(#slot), vec![quote!(::#krate::Slot::target(slots))])
        } else {
            let arguments = (0..slots.len())
                .map(|index| {
                    let index = Index::from(index);
                    quote!(::#krate::Slot::target(&slots.#index))
                })
                .collect();

            (quote!((#(#slots,)*)), arguments)
        };

        quote! {
            #function

            #[doc = #doc]
            #[derive(Debug, Clone, Copy)]
            #vis struct #name;

            impl #impl_generics ::#krate::Predicate<#slots_type> for #name #where_clause {
                const NAME: &'static str = #precondition;

                fn test(slots: &#slots_type) -> bool {
                    #fn_name(#(#arguments),*)
                }
            }
        }
    }
}
