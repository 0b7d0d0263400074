//! The aggregated query surface.
//!
//! [`Callable`] composes normalization, qualifier stripping and signature
//! decomposition into one flat set of associated types and constants.
//! [`HasClass`] is kept separate so that asking a plain function for its
//! class type is a compile error instead of a placeholder answer.

use crate::category::{Category, CategoryMarker};
use crate::normalize::Normalize;
use crate::qualifiers::QualifierSet;
use crate::signature::{ArgAt, Signature};
use crate::strip::StripQualifiers;

/// Signature, qualifiers and category of a callable type.
///
/// Implemented for every type with a [`Normalize`] implementation.
///
/// # Example
///
/// ```rust
/// use callable_traits::{assert_type_eq, ArgType, Callable, ResultType};
///
/// type Handler = extern "C" fn(u32, *const u8) -> bool;
///
/// assert_eq!(<Handler as Callable>::ARITY, 2);
/// assert!(<Handler as Callable>::IS_NOEXCEPT);
/// assert!(!<Handler as Callable>::IS_MEMBER_FUNCTION);
/// assert_type_eq!(ResultType<Handler>, bool);
/// assert_type_eq!(ArgType<Handler, 1>, *const u8);
/// ```
///
/// Indexing past the last parameter does not compile:
///
/// ```rust,compile_fail
/// use callable_traits::ArgType;
///
/// fn zero_args() -> ArgType<fn() -> i32, 0> {
///     unimplemented!()
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a supported callable",
    label = "no callable category for this type"
)]
pub trait Callable {
    type Category: CategoryMarker;
    /// The canonical unqualified `fn(A0, .., An) -> R`.
    type Signature: Signature<Output = Self::Output, Args = Self::Args>;
    type Output;
    type Args: crate::signature::ArgList;

    const CATEGORY: Category;
    const ARITY: usize;
    const QUALIFIERS: QualifierSet;

    const IS_CONST: bool = Self::QUALIFIERS.is_const();
    const IS_VOLATILE: bool = Self::QUALIFIERS.is_volatile();
    const IS_LVALUE_REFERENCE: bool = Self::QUALIFIERS.is_lvalue_reference();
    const IS_RVALUE_REFERENCE: bool = Self::QUALIFIERS.is_rvalue_reference();
    const IS_NOEXCEPT: bool = Self::QUALIFIERS.is_noexcept();
    const IS_VARIADIC: bool = Self::QUALIFIERS.is_variadic();
    const IS_UNSAFE: bool = Self::QUALIFIERS.is_unsafe();

    /// True only for member-function pointers. A functor's call operator is
    /// a member function too, but the functor reports the category it was
    /// queried as.
    const IS_MEMBER_FUNCTION: bool = matches!(Self::CATEGORY, Category::MemberFunction);
    const IS_FUNCTOR: bool = matches!(Self::CATEGORY, Category::Functor);
}

type Unqualified<T> = <<T as Normalize>::Reduced as StripQualifiers>::Unqualified;

impl<T: Normalize + ?Sized> Callable for T {
    type Category = T::Category;
    type Signature = Unqualified<T>;
    type Output = <Unqualified<T> as Signature>::Output;
    type Args = <Unqualified<T> as Signature>::Args;

    const CATEGORY: Category = <T::Category as CategoryMarker>::KIND;
    const ARITY: usize = <Unqualified<T> as Signature>::ARITY;
    const QUALIFIERS: QualifierSet = <T::Reduced as StripQualifiers>::QUALIFIERS;
}

/// The enclosing type of a member function or functor.
///
/// Not implemented for plain functions:
///
/// ```rust,compile_fail
/// use callable_traits::ClassType;
///
/// fn class_of_plain() -> Option<ClassType<fn(i32) -> i32>> {
///     None
/// }
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no class type",
    label = "only member functions and functors have a class type"
)]
pub trait HasClass: Callable {
    type Class: ?Sized;
}

impl<C, F, Q> HasClass for crate::MemberFn<C, F, Q>
where
    C: ?Sized,
    Self: Normalize,
{
    type Class = C;
}

macro_rules! trait_object_class {
    (@bounds [$($A:ident),*] $(+ $bound:ident)*) => {
        impl<'a, R, $($A),*> HasClass for dyn Fn($($A),*) -> R $(+ $bound)* + 'a {
            type Class = Self;
        }

        impl<'a, R, $($A),*> HasClass for dyn FnMut($($A),*) -> R $(+ $bound)* + 'a {
            type Class = Self;
        }

        impl<'a, R, $($A),*> HasClass for dyn FnOnce($($A),*) -> R $(+ $bound)* + 'a {
            type Class = Self;
        }
    };
    ($($A:ident),*) => {
        trait_object_class!(@bounds [$($A),*]);
        trait_object_class!(@bounds [$($A),*] + Send);
        trait_object_class!(@bounds [$($A),*] + Send + Sync);
    };
}

for_each_arity!(trait_object_class);

/// Outer `&` threads into a functor's class; a member function's class is
/// unchanged.
impl<'a, T> HasClass for &'a T
where
    T: HasClass + Normalize + ?Sized,
    T::Class: 'a,
{
    type Class = <<T as Callable>::Category as CategoryMarker>::Shared<'a, T::Class>;
}

impl<'a, T> HasClass for &'a mut T
where
    T: HasClass + Normalize + ?Sized,
    T::Class: 'a,
{
    type Class = <<T as Callable>::Category as CategoryMarker>::Unique<'a, T::Class>;
}

impl<T> HasClass for Box<T>
where
    T: HasClass + Normalize + ?Sized,
{
    type Class = T::Class;
}

/// The result type of `T`.
pub type ResultType<T> = <T as Callable>::Output;

/// The type of parameter `I` of `T`; fails to compile when `I >= ARITY`.
pub type ArgType<T, const I: usize> = <<T as Callable>::Args as ArgAt<I>>::Type;

pub type Arg0Type<T> = ArgType<T, 0>;
pub type Arg1Type<T> = ArgType<T, 1>;
pub type Arg2Type<T> = ArgType<T, 2>;

/// The class type of a member function or functor.
pub type ClassType<T> = <T as HasClass>::Class;
