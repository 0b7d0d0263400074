//! Expansion of `#[call_operator]`.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::{ParseStream, Parser};
use syn::visit::{self, Visit};
use syn::{
    Attribute, FnArg, Ident, ImplItem, ImplItemFn, ItemImpl, Lifetime, ParenthesizedGenericArguments,
    Receiver, ReturnType, Signature, Token, TypeBareFn, TypeImplTrait, TypeReference,
};

/// Highest arity the runtime crate implements resolution for.
const MAX_ARITY: usize = 12;

/// Qualifiers Rust cannot spell on a method, given as attribute arguments.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ExtraQualifiers {
    volatile: bool,
    noexcept: bool,
    /// Explicit `&` or `&&`; otherwise the receiver decides.
    reference: Option<Reference>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Reference {
    Lvalue,
    Rvalue,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReceiverKind {
    /// `&self`
    Shared,
    /// `&mut self`
    Unique,
    /// `self`
    Owned,
}

pub(crate) fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream> {
    let extra = parse_extra_qualifiers(attr)?;
    let mut item: ItemImpl = syn::parse2(item)?;

    if let Some((_, path, _)) = &item.trait_ {
        return Err(syn::Error::new_spanned(
            path,
            "`#[call_operator]` must be applied to an inherent impl block",
        ));
    }

    let method = select_call_operator(&mut item)?;
    let receiver = method.sig.receiver().ok_or_else(|| {
        syn::Error::new_spanned(
            &method.sig,
            "the call operator must take `self`, `&self` or `&mut self`",
        )
    })?;
    let kind = receiver_kind(receiver)?;
    if kind == ReceiverKind::Owned && extra.reference == Some(Reference::Lvalue) {
        return Err(syn::Error::new_spanned(
            receiver,
            "a by-value `self` call operator cannot be `&`-qualified",
        ));
    }
    check_signature(&method.sig)?;

    let marker = format_ident!("{}", marker_name(kind, extra));
    let signature = signature_type(&method.sig);
    let self_ty = &item.self_ty;
    let (impl_generics, _, where_clause) = item.generics.split_for_impl();

    Ok(quote! {
        #item

        impl #impl_generics ::callable_traits::Normalize for #self_ty #where_clause {
            type Category = ::callable_traits::category::Functor;
            type Reduced = ::callable_traits::MemberFn<
                Self,
                #signature,
                ::callable_traits::qualifiers::#marker,
            >;
        }

        impl #impl_generics ::callable_traits::HasClass for #self_ty #where_clause {
            type Class = Self;
        }
    })
}

fn parse_extra_qualifiers(attr: TokenStream) -> syn::Result<ExtraQualifiers> {
    let parser = |input: ParseStream| -> syn::Result<ExtraQualifiers> {
        let mut extra = ExtraQualifiers::default();

        while !input.is_empty() {
            if input.peek(Token![&&]) || input.peek(Token![&]) {
                let span = input.span();
                let reference = if input.peek(Token![&&]) {
                    input.parse::<Token![&&]>()?;
                    Reference::Rvalue
                } else {
                    input.parse::<Token![&]>()?;
                    Reference::Lvalue
                };
                if extra.reference.replace(reference).is_some() {
                    return Err(syn::Error::new(span, "duplicate reference qualifier"));
                }
            } else {
                let ident: Ident = input.parse()?;
                let slot = if ident == "volatile" {
                    &mut extra.volatile
                } else if ident == "noexcept" {
                    &mut extra.noexcept
                } else {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!(
                            "unknown qualifier `{ident}`; expected `volatile`, `noexcept`, `&` or `&&`"
                        ),
                    ));
                };

                if *slot {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("duplicate qualifier `{ident}`"),
                    ));
                }
                *slot = true;
            }

            if !input.is_empty() {
                input.parse::<Token![,]>()?;
            }
        }

        Ok(extra)
    };

    parser.parse2(attr)
}

fn is_call_marker(attr: &Attribute) -> bool {
    attr.path().is_ident("call")
}

/// Picks the call operator and removes every `#[call]` marker from the block.
fn select_call_operator(item: &mut ItemImpl) -> syn::Result<ImplItemFn> {
    let mut marked = Vec::new();
    let mut with_receiver = Vec::new();

    for impl_item in &mut item.items {
        if let ImplItem::Fn(method) = impl_item {
            let before = method.attrs.len();
            method.attrs.retain(|attr| !is_call_marker(attr));

            if method.attrs.len() != before {
                marked.push(method.clone());
            }
            if method.sig.receiver().is_some() {
                with_receiver.push(method.clone());
            }
        }
    }

    let mut candidates = if marked.is_empty() {
        with_receiver
    } else {
        marked
    };

    match candidates.len() {
        0 => Err(syn::Error::new_spanned(
            &item.self_ty,
            "no call operator found; add a method taking `self`, `&self` or `&mut self`",
        )),
        1 => Ok(candidates.remove(0)),
        _ => Err(syn::Error::new_spanned(
            &candidates[1].sig.ident,
            "overloaded call operators are not supported; mark exactly one method with `#[call]`",
        )),
    }
}

fn receiver_kind(receiver: &Receiver) -> syn::Result<ReceiverKind> {
    if receiver.colon_token.is_some() {
        return Err(syn::Error::new_spanned(
            receiver,
            "typed receivers are not supported; use `self`, `&self` or `&mut self`",
        ));
    }

    Ok(match (&receiver.reference, &receiver.mutability) {
        (Some(_), None) => ReceiverKind::Shared,
        (Some(_), Some(_)) => ReceiverKind::Unique,
        (None, _) => ReceiverKind::Owned,
    })
}

/// Name of the qualifier marker type in `callable_traits::qualifiers`.
///
/// `&self` is `const`, `&mut self` is unqualified and `self` is `&&`.
fn marker_name(kind: ReceiverKind, extra: ExtraQualifiers) -> String {
    let mut name = String::new();
    if kind == ReceiverKind::Shared {
        name.push_str("Const");
    }
    if extra.volatile {
        name.push_str("Volatile");
    }
    let reference = match (extra.reference, kind) {
        (Some(reference), _) => Some(reference),
        (None, ReceiverKind::Owned) => Some(Reference::Rvalue),
        (None, _) => None,
    };
    match reference {
        Some(Reference::Lvalue) => name.push_str("LRef"),
        Some(Reference::Rvalue) => name.push_str("RRef"),
        None => {}
    }
    if extra.noexcept {
        name.push_str("NoExcept");
    }
    if name.is_empty() {
        name.push_str("Unqualified");
    }
    name
}

fn check_signature(sig: &Signature) -> syn::Result<()> {
    if let Some(param) = sig.generics.params.first() {
        return Err(syn::Error::new_spanned(
            param,
            "generic call operators are not supported",
        ));
    }
    if let Some(asyncness) = &sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "async call operators are not supported",
        ));
    }

    let arity = sig
        .inputs
        .iter()
        .filter(|arg| matches!(arg, FnArg::Typed(_)))
        .count();
    if arity > MAX_ARITY {
        return Err(syn::Error::new_spanned(
            &sig.inputs,
            format!("call operators take at most {MAX_ARITY} parameters, found {arity}"),
        ));
    }

    let mut checker = SignatureChecker::default();
    for input in &sig.inputs {
        if let FnArg::Typed(pat_type) = input {
            checker.visit_type(&pat_type.ty);
        }
    }
    if let ReturnType::Type(_, ty) = &sig.output {
        checker.visit_type(ty);
    }

    checker.error.map_or(Ok(()), Err)
}

/// Rejects types that would make the call operator's pointer type
/// higher-ranked or unnameable.
#[derive(Default)]
struct SignatureChecker {
    error: Option<syn::Error>,
}

impl SignatureChecker {
    fn push(&mut self, error: syn::Error) {
        match &mut self.error {
            Some(existing) => existing.combine(error),
            None => self.error = Some(error),
        }
    }
}

impl<'ast> Visit<'ast> for SignatureChecker {
    fn visit_type_reference(&mut self, node: &'ast TypeReference) {
        if node.lifetime.is_none() {
            self.push(syn::Error::new_spanned(
                node,
                "elided lifetimes are not supported in call operators; name the lifetime on the impl block",
            ));
        }
        visit::visit_type_reference(self, node);
    }

    fn visit_lifetime(&mut self, node: &'ast Lifetime) {
        if node.ident == "_" {
            self.push(syn::Error::new_spanned(
                node,
                "elided lifetimes are not supported in call operators; name the lifetime on the impl block",
            ));
        }
    }

    fn visit_type_impl_trait(&mut self, node: &'ast TypeImplTrait) {
        self.push(syn::Error::new_spanned(
            node,
            "`impl Trait` is not supported in call operators",
        ));
    }

    // Elision inside nested fn pointers and `Fn(..)` sugar binds locally.
    fn visit_type_bare_fn(&mut self, _node: &'ast TypeBareFn) {}

    fn visit_parenthesized_generic_arguments(&mut self, _node: &'ast ParenthesizedGenericArguments) {}
}

/// The call operator as a function-pointer type, receiver excluded.
fn signature_type(sig: &Signature) -> TokenStream {
    let unsafety = &sig.unsafety;
    let abi = &sig.abi;
    let inputs = sig.inputs.iter().filter_map(|arg| match arg {
        FnArg::Typed(pat_type) => Some(&pat_type.ty),
        FnArg::Receiver(_) => None,
    });
    let output = match &sig.output {
        ReturnType::Default => quote!(()),
        ReturnType::Type(_, ty) => quote!(#ty),
    };

    quote!(#unsafety #abi fn(#(#inputs),*) -> #output)
}
