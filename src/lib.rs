//! Compile-time introspection of callable types.
//!
//! Given a callable type, this crate answers at compile time what its result
//! type, arity and parameter types are, which qualifiers it carries, and
//! whether it is a plain function, a member function or a functor.
//!
//! Resolution runs in three stages, each a trait:
//!
//! 1. [`Normalize`] decides the category and reduces the type to a function
//!    pointer or a [`MemberFn`].
//! 2. [`StripQualifiers`] removes qualification and records it in a
//!    [`QualifierSet`].
//! 3. [`Signature`] decomposes the canonical `fn(A0, .., An) -> R`.
//!
//! [`Callable`] flattens the three into one query surface.
//!
//! # Example
//!
//! ```rust
//! use callable_traits::{assert_type_eq, call_operator, member_fn, Callable, ClassType, ResultType};
//!
//! struct Accumulator {
//!     total: i64,
//! }
//!
//! #[call_operator]
//! impl Accumulator {
//!     fn add(&mut self, value: i64) -> i64 {
//!         self.total += value;
//!         self.total
//!     }
//! }
//!
//! assert!(<Accumulator as Callable>::IS_FUNCTOR);
//! assert!(!<Accumulator as Callable>::IS_CONST);
//! assert!(!<Accumulator as Callable>::IS_LVALUE_REFERENCE);
//! assert_type_eq!(ClassType<&'static Accumulator>, &'static Accumulator);
//!
//! type Flush = member_fn!(Accumulator, fn() -> bool, const && noexcept);
//! assert!(<Flush as Callable>::IS_MEMBER_FUNCTION);
//! assert_type_eq!(ResultType<Flush>, bool);
//! ```
//!
//! # Compile-time failures
//!
//! Unsupported queries are rejected by the type checker.
//!
//! A parameter index past the end:
//!
//! ```rust,compile_fail
//! use callable_traits::ArgType;
//!
//! fn third() -> Option<ArgType<fn(u8, u8) -> u8, 2>> {
//!     None
//! }
//! ```
//!
//! A functor with more than one call operator:
//!
//! ```rust,compile_fail
//! use callable_traits::call_operator;
//!
//! struct Overloaded;
//!
//! #[call_operator]
//! impl Overloaded {
//!     fn by_int(&self, value: i32) -> i32 { value }
//!     fn by_float(&self, value: f32) -> f32 { value }
//! }
//! ```
//!
//! A generic call operator:
//!
//! ```rust,compile_fail
//! use callable_traits::call_operator;
//!
//! struct Generic;
//!
//! #[call_operator]
//! impl Generic {
//!     fn call<T>(&self, value: T) -> T { value }
//! }
//! ```

#[macro_use]
mod macros;

// Lets `#[call_operator]` expansions name `::callable_traits` inside this crate.
extern crate self as callable_traits;

pub mod category;
pub mod cli;
pub mod closure;
pub mod config;
pub mod descriptor;
pub mod errors;
pub mod inspect;
pub mod member_fn;
pub mod normalize;
pub mod qualifiers;
pub mod signature;
pub mod strip;
pub mod testkit;
pub mod traits;

pub use callable_traits_macros::call_operator;

pub use crate::category::{Category, CategoryMarker};
pub use crate::closure::{closure, closure_mut, closure_once, Closure};
pub use crate::descriptor::{traits_of, traits_with_class_of, CallableDescriptor};
pub use crate::errors::InspectError;
pub use crate::member_fn::MemberFn;
pub use crate::normalize::Normalize;
pub use crate::qualifiers::{QualifierSet, Qualifiers, ReferenceKind};
pub use crate::signature::{ArgAt, ArgList, Signature};
pub use crate::strip::StripQualifiers;
pub use crate::traits::{
    Arg0Type, Arg1Type, Arg2Type, ArgType, Callable, ClassType, HasClass, ResultType,
};
