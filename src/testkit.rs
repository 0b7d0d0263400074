//! Assertion macros for testing callable resolution.
//!
//! - [`crate::assert_type_eq!`] - Assert two types are identical, at compile time
//! - [`crate::assert_qualifiers!`] - Assert the exact qualifier set of a callable
//!
//! # Example
//!
//! ```rust
//! use callable_traits::{assert_qualifiers, assert_type_eq, ResultType};
//!
//! assert_type_eq!(ResultType<fn(i32) -> u8>, u8);
//! assert_qualifiers!(unsafe extern "C" fn(i32), UNSAFE | NOEXCEPT);
//! ```

/// Assert that two types are the same type.
///
/// The check happens during type checking: a mismatch is a compile error
/// naming both types, not a test failure.
///
/// # Example
///
/// ```rust
/// use callable_traits::{assert_type_eq, Arg0Type};
///
/// assert_type_eq!(Arg0Type<fn(&'static str)>, &'static str);
/// ```
///
/// ```rust,compile_fail
/// use callable_traits::{assert_type_eq, Arg0Type};
///
/// assert_type_eq!(Arg0Type<fn(&'static str)>, String);
/// ```
#[macro_export]
macro_rules! assert_type_eq {
    ($left:ty, $right:ty $(,)?) => {{
        fn same<T: ?Sized>(
            _: ::core::marker::PhantomData<T>,
            _: ::core::marker::PhantomData<T>,
        ) {
        }
        same(
            ::core::marker::PhantomData::<$left>,
            ::core::marker::PhantomData::<$right>,
        );
    }};
}

/// Assert that a callable resolves to exactly the given qualifier flags.
///
/// Flags are [`QualifierSet`](crate::QualifierSet) constant names joined by
/// `|`; an empty list asserts no qualifiers at all.
///
/// # Example
///
/// ```rust
/// use callable_traits::{assert_qualifiers, member_fn};
///
/// struct Widget;
///
/// assert_qualifiers!(member_fn!(Widget, fn(), const &&), CONST | RVALUE_REFERENCE);
/// assert_qualifiers!(fn(i32) -> i32,);
/// ```
#[macro_export]
macro_rules! assert_qualifiers {
    ($callable:ty, $($flag:ident)|*) => {
        assert_eq!(
            <$callable as $crate::Callable>::QUALIFIERS,
            $crate::QualifierSet::empty()$(.union($crate::QualifierSet::$flag))*,
            "qualifiers of `{}`",
            stringify!($callable),
        )
    };
}
