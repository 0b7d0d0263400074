//! Member-function pointer types.
//!
//! Rust has no pointer-to-member type, so a member is declared explicitly as
//! `MemberFn<Class, Signature, Qualifiers>`: the enclosing type, the
//! signature without the receiver, and one qualifier form from
//! [`qualifiers`](crate::qualifiers). [`member_fn!`](crate::member_fn) spells
//! the qualifiers the way they are written on a C++ member declaration.

use std::fmt;
use std::marker::PhantomData;

use crate::qualifiers::Unqualified;

/// A member function of `C` with signature `F` (receiver excluded) and
/// qualifier form `Q`.
///
/// `F` may be any function-pointer shape; a C-variadic
/// `unsafe extern "C" fn(A0, ...)` declares a variadic member.
///
/// This type only exists at the type level and cannot be constructed.
pub struct MemberFn<C: ?Sized, F, Q = Unqualified> {
    _marker: PhantomData<(fn() -> *const C, fn() -> F, fn() -> Q)>,
}

impl<C: ?Sized, F, Q> fmt::Debug for MemberFn<C, F, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(std::any::type_name::<Self>())
    }
}

/// Spell a [`MemberFn`] type with declaration-style qualifiers.
///
/// Accepts any combination of `const`, `volatile`, one of `&` / `&&`, and
/// `noexcept`, in that order: the 24 forms of the qualifier table. Anything
/// else fails to expand.
///
/// # Example
///
/// ```rust
/// use callable_traits::{member_fn, Callable};
///
/// struct Socket;
///
/// type Transmit = member_fn!(Socket, unsafe extern "C" fn(*const u8, ...) -> isize, const volatile && noexcept);
///
/// assert!(<Transmit as Callable>::IS_CONST);
/// assert!(<Transmit as Callable>::IS_VOLATILE);
/// assert!(<Transmit as Callable>::IS_RVALUE_REFERENCE);
/// assert!(!<Transmit as Callable>::IS_LVALUE_REFERENCE);
/// assert!(<Transmit as Callable>::IS_NOEXCEPT);
/// assert!(<Transmit as Callable>::IS_VARIADIC);
/// assert_eq!(<Transmit as Callable>::ARITY, 1);
/// ```
///
/// ```rust,compile_fail
/// use callable_traits::member_fn;
///
/// struct Socket;
///
/// // Both reference qualifiers at once is not a valid form.
/// type Broken = member_fn!(Socket, fn(), & &&);
/// ```
#[macro_export]
macro_rules! member_fn {
    (@qualifiers) => { $crate::qualifiers::Unqualified };
    (@qualifiers const) => { $crate::qualifiers::Const };
    (@qualifiers volatile) => { $crate::qualifiers::Volatile };
    (@qualifiers const volatile) => { $crate::qualifiers::ConstVolatile };
    (@qualifiers &) => { $crate::qualifiers::LRef };
    (@qualifiers const &) => { $crate::qualifiers::ConstLRef };
    (@qualifiers volatile &) => { $crate::qualifiers::VolatileLRef };
    (@qualifiers const volatile &) => { $crate::qualifiers::ConstVolatileLRef };
    (@qualifiers &&) => { $crate::qualifiers::RRef };
    (@qualifiers const &&) => { $crate::qualifiers::ConstRRef };
    (@qualifiers volatile &&) => { $crate::qualifiers::VolatileRRef };
    (@qualifiers const volatile &&) => { $crate::qualifiers::ConstVolatileRRef };
    (@qualifiers noexcept) => { $crate::qualifiers::NoExcept };
    (@qualifiers const noexcept) => { $crate::qualifiers::ConstNoExcept };
    (@qualifiers volatile noexcept) => { $crate::qualifiers::VolatileNoExcept };
    (@qualifiers const volatile noexcept) => { $crate::qualifiers::ConstVolatileNoExcept };
    (@qualifiers & noexcept) => { $crate::qualifiers::LRefNoExcept };
    (@qualifiers const & noexcept) => { $crate::qualifiers::ConstLRefNoExcept };
    (@qualifiers volatile & noexcept) => { $crate::qualifiers::VolatileLRefNoExcept };
    (@qualifiers const volatile & noexcept) => { $crate::qualifiers::ConstVolatileLRefNoExcept };
    (@qualifiers && noexcept) => { $crate::qualifiers::RRefNoExcept };
    (@qualifiers const && noexcept) => { $crate::qualifiers::ConstRRefNoExcept };
    (@qualifiers volatile && noexcept) => { $crate::qualifiers::VolatileRRefNoExcept };
    (@qualifiers const volatile && noexcept) => { $crate::qualifiers::ConstVolatileRRefNoExcept };
    (@qualifiers $($other:tt)*) => {
        ::core::compile_error!(concat!(
            "unsupported member function qualifiers `",
            stringify!($($other)*),
            "`; expected [const] [volatile] [& | &&] [noexcept]"
        ))
    };

    ($class:ty, $signature:ty $(,)?) => {
        $crate::MemberFn<$class, $signature, $crate::qualifiers::Unqualified>
    };
    ($class:ty, $signature:ty, $($qualifier:tt)+) => {
        $crate::MemberFn<$class, $signature, $crate::member_fn!(@qualifiers $($qualifier)+)>
    };
}
