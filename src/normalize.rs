//! Category normalization: decide what kind of callable a type is and reduce
//! it to something [`StripQualifiers`] understands.
//!
//! - Function pointers are plain functions and reduce to themselves.
//! - [`MemberFn`] is a member function and reduces to itself.
//! - Functors reduce to the [`MemberFn`] of their call operator:
//!   [`Closure`](crate::Closure) wrappers, `dyn Fn*` trait objects and types
//!   annotated with `#[call_operator]`.
//! - `&T`, `&mut T` and `Box<T>` resolve like `T`.
//!
//! A type matching none of these has no `Normalize` impl and every query on
//! it fails to compile.

use crate::category::{CategoryMarker, Functor, MemberFunction, PlainFunction};
use crate::member_fn::MemberFn;
use crate::qualifiers::{Const, Qualifiers, RRef, Unqualified};
use crate::strip::StripQualifiers;

/// Stage one of resolution.
///
/// Implemented by this crate for every supported callable shape and by
/// `#[call_operator]` for user functors. A manual implementation declares a
/// functor by hand:
///
/// ```rust
/// use callable_traits::{category, member_fn, Callable, ClassType, HasClass, Normalize};
///
/// struct Counter;
///
/// impl Normalize for Counter {
///     type Category = category::Functor;
///     type Reduced = member_fn!(Counter, fn(u32) -> u32, &);
/// }
///
/// impl HasClass for Counter {
///     type Class = Counter;
/// }
///
/// assert!(<Counter as Callable>::IS_FUNCTOR);
/// assert!(<Counter as Callable>::IS_LVALUE_REFERENCE);
/// ```
///
/// Types that are not callable are rejected:
///
/// ```rust,compile_fail
/// use callable_traits::Callable;
///
/// let _ = <String as Callable>::ARITY;
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported callable",
    label = "no callable category for this type",
    note = "supported callables are function pointers, `MemberFn`, `dyn Fn*` trait objects, closures wrapped with `closure`/`closure_mut`/`closure_once`, and types annotated with `#[call_operator]`"
)]
pub trait Normalize {
    type Category: CategoryMarker;
    type Reduced: StripQualifiers;
}

macro_rules! normalize_fn_pointer {
    ($($A:ident),*) => {
        impl<R, $($A),*> Normalize for fn($($A),*) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),*> Normalize for unsafe fn($($A),*) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),*> Normalize for extern "C" fn($($A),*) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),*> Normalize for unsafe extern "C" fn($($A),*) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),*> Normalize for extern "C-unwind" fn($($A),*) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),*> Normalize for unsafe extern "C-unwind" fn($($A),*) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        normalize_variadic_fn_pointer!($($A),*);
    };
}

macro_rules! normalize_variadic_fn_pointer {
    () => {};
    ($($A:ident),+) => {
        impl<R, $($A),+> Normalize for extern "C" fn($($A),+, ...) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),+> Normalize for unsafe extern "C" fn($($A),+, ...) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),+> Normalize for extern "C-unwind" fn($($A),+, ...) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }

        impl<R, $($A),+> Normalize for unsafe extern "C-unwind" fn($($A),+, ...) -> R {
            type Category = PlainFunction;
            type Reduced = Self;
        }
    };
}

for_each_arity!(normalize_fn_pointer);

impl<C, F, Q> Normalize for MemberFn<C, F, Q>
where
    C: ?Sized,
    F: StripQualifiers,
    Q: Qualifiers,
{
    type Category = MemberFunction;
    type Reduced = Self;
}

macro_rules! normalize_fn_trait_object {
    (@bounds [$($A:ident),*] $(+ $bound:ident)*) => {
        impl<'a, R, $($A),*> Normalize for dyn Fn($($A),*) -> R $(+ $bound)* + 'a {
            type Category = Functor;
            type Reduced = MemberFn<Self, fn($($A),*) -> R, Const>;
        }

        impl<'a, R, $($A),*> Normalize for dyn FnMut($($A),*) -> R $(+ $bound)* + 'a {
            type Category = Functor;
            type Reduced = MemberFn<Self, fn($($A),*) -> R, Unqualified>;
        }

        impl<'a, R, $($A),*> Normalize for dyn FnOnce($($A),*) -> R $(+ $bound)* + 'a {
            type Category = Functor;
            type Reduced = MemberFn<Self, fn($($A),*) -> R, RRef>;
        }
    };
    ($($A:ident),*) => {
        normalize_fn_trait_object!(@bounds [$($A),*]);
        normalize_fn_trait_object!(@bounds [$($A),*] + Send);
        normalize_fn_trait_object!(@bounds [$($A),*] + Send + Sync);
    };
}

for_each_arity!(normalize_fn_trait_object);

impl<'a, T: Normalize + ?Sized> Normalize for &'a T {
    type Category = T::Category;
    type Reduced = T::Reduced;
}

impl<'a, T: Normalize + ?Sized> Normalize for &'a mut T {
    type Category = T::Category;
    type Reduced = T::Reduced;
}

impl<T: Normalize + ?Sized> Normalize for Box<T> {
    type Category = T::Category;
    type Reduced = T::Reduced;
}
