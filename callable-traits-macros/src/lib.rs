//! Procedural macros for `callable-traits`.
//!
//! - `#[call_operator]` - Declare a type's call operator so the type resolves
//!   as a functor

extern crate proc_macro;

mod call_operator;

use proc_macro::TokenStream;

/// Declare the call operator of a type.
///
/// Applied to an inherent `impl` block. The call operator is the single
/// method marked `#[call]`, or, when no method is marked, the single method
/// taking a receiver. The annotated type then implements `Normalize` as a
/// functor and `HasClass` with itself as the class.
///
/// The receiver selects the qualifiers:
///
/// - `&self` - `const`
/// - `&mut self` - no qualifiers
/// - `self` - `&&`
///
/// `volatile` and `noexcept` have no Rust spelling and are passed as
/// arguments: `#[call_operator(volatile, noexcept)]`. A reference qualifier
/// can be given the same way (`#[call_operator(&)]`, `#[call_operator(&&)]`);
/// a by-value `self` cannot be `&`-qualified.
///
/// # Errors
///
/// Compilation fails when the block has no candidate method or more than
/// one (overloading), or when the call operator is generic, takes
/// `impl Trait` parameters, elides a lifetime or uses a typed receiver such
/// as `self: Box<Self>`.
///
/// # Example
///
/// ```ignore
/// #[call_operator(noexcept)]
/// impl Scale {
///     fn apply(&self, value: f64) -> f64 {
///         value * self.factor
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn call_operator(attr: TokenStream, item: TokenStream) -> TokenStream {
    call_operator::expand(attr.into(), item.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
