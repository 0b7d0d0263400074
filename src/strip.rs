//! Qualifier stripping: reduce a qualified callable to its canonical
//! `fn(A0, .., An) -> R` and the flags that were removed on the way.
//!
//! Function pointers contribute the flags their type spells out:
//!
//! | pointer shape                              | flags                      |
//! |--------------------------------------------|----------------------------|
//! | `fn`                                       | -                          |
//! | `unsafe fn`                                | `UNSAFE`                   |
//! | `extern "C" fn`                            | `NOEXCEPT`                 |
//! | `unsafe extern "C" fn`                     | `UNSAFE NOEXCEPT`          |
//! | `extern "C-unwind" fn`                     | -                          |
//! | `unsafe extern "C-unwind" fn`              | `UNSAFE`                   |
//! | `extern "C" fn(A0, .., ...)`               | `NOEXCEPT VARIADIC`        |
//! | `unsafe extern "C" fn(A0, .., ...)`        | `UNSAFE NOEXCEPT VARIADIC` |
//! | `extern "C-unwind" fn(A0, .., ...)`        | `VARIADIC`                 |
//! | `unsafe extern "C-unwind" fn(A0, .., ...)` | `UNSAFE VARIADIC`          |
//!
//! `extern "C"` functions abort instead of unwinding, which is the Rust
//! reading of a no-throw guarantee.
//!
//! A [`MemberFn`] adds the flags of its qualifier form to those of its
//! signature.

use crate::member_fn::MemberFn;
use crate::qualifiers::{QualifierSet, Qualifiers};
use crate::signature::Signature;

/// Stage two of resolution.
pub trait StripQualifiers {
    /// The canonical safe Rust-ABI signature.
    type Unqualified: Signature;

    const QUALIFIERS: QualifierSet;
}

macro_rules! strip_fn_pointer {
    ($($A:ident),*) => {
        impl<R, $($A),*> StripQualifiers for fn($($A),*) -> R {
            type Unqualified = fn($($A),*) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::empty();
        }

        impl<R, $($A),*> StripQualifiers for unsafe fn($($A),*) -> R {
            type Unqualified = fn($($A),*) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::UNSAFE;
        }

        impl<R, $($A),*> StripQualifiers for extern "C" fn($($A),*) -> R {
            type Unqualified = fn($($A),*) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::NOEXCEPT;
        }

        impl<R, $($A),*> StripQualifiers for unsafe extern "C" fn($($A),*) -> R {
            type Unqualified = fn($($A),*) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::UNSAFE.union(QualifierSet::NOEXCEPT);
        }

        impl<R, $($A),*> StripQualifiers for extern "C-unwind" fn($($A),*) -> R {
            type Unqualified = fn($($A),*) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::empty();
        }

        impl<R, $($A),*> StripQualifiers for unsafe extern "C-unwind" fn($($A),*) -> R {
            type Unqualified = fn($($A),*) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::UNSAFE;
        }

        strip_variadic_fn_pointer!($($A),*);
    };
}

// C-variadic pointers need at least one fixed parameter.
macro_rules! strip_variadic_fn_pointer {
    () => {};
    ($($A:ident),+) => {
        impl<R, $($A),+> StripQualifiers for extern "C" fn($($A),+, ...) -> R {
            type Unqualified = fn($($A),+) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::NOEXCEPT.union(QualifierSet::VARIADIC);
        }

        impl<R, $($A),+> StripQualifiers for unsafe extern "C" fn($($A),+, ...) -> R {
            type Unqualified = fn($($A),+) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::UNSAFE
                .union(QualifierSet::NOEXCEPT)
                .union(QualifierSet::VARIADIC);
        }

        impl<R, $($A),+> StripQualifiers for extern "C-unwind" fn($($A),+, ...) -> R {
            type Unqualified = fn($($A),+) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::VARIADIC;
        }

        impl<R, $($A),+> StripQualifiers for unsafe extern "C-unwind" fn($($A),+, ...) -> R {
            type Unqualified = fn($($A),+) -> R;
            const QUALIFIERS: QualifierSet = QualifierSet::UNSAFE.union(QualifierSet::VARIADIC);
        }
    };
}

for_each_arity!(strip_fn_pointer);

impl<C, F, Q> StripQualifiers for MemberFn<C, F, Q>
where
    C: ?Sized,
    F: StripQualifiers,
    Q: Qualifiers,
{
    type Unqualified = F::Unqualified;
    const QUALIFIERS: QualifierSet = F::QUALIFIERS.union(Q::SET);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_type_eq;
    use crate::qualifiers::{ConstVolatileRRefNoExcept, LRef};
    use std::ffi::{c_char, c_int};

    fn flags<T: StripQualifiers>() -> QualifierSet {
        T::QUALIFIERS
    }

    #[test]
    fn test_abi_and_safety_become_flags() {
        assert_eq!(flags::<fn(i32) -> i32>(), QualifierSet::empty());
        assert_eq!(flags::<unsafe fn(i32) -> i32>(), QualifierSet::UNSAFE);
        assert_eq!(flags::<extern "C" fn(i32) -> i32>(), QualifierSet::NOEXCEPT);
        assert_eq!(
            flags::<unsafe extern "C" fn(i32) -> i32>(),
            QualifierSet::UNSAFE | QualifierSet::NOEXCEPT
        );
        assert_eq!(flags::<extern "C-unwind" fn()>(), QualifierSet::empty());
        assert_eq!(flags::<unsafe extern "C-unwind" fn()>(), QualifierSet::UNSAFE);
    }

    #[test]
    fn test_variadic_pointer_strips_the_ellipsis() {
        type Printf = unsafe extern "C" fn(*const c_char, ...) -> c_int;

        assert!(flags::<Printf>().is_variadic());
        assert_type_eq!(
            <Printf as StripQualifiers>::Unqualified,
            fn(*const c_char) -> c_int
        );
    }

    #[test]
    fn test_every_variadic_abi_sets_its_own_flags() {
        assert_eq!(
            flags::<extern "C" fn(i32, ...) -> i32>(),
            QualifierSet::NOEXCEPT | QualifierSet::VARIADIC
        );
        assert_eq!(
            flags::<extern "C-unwind" fn(i32, ...)>(),
            QualifierSet::VARIADIC
        );
        assert_eq!(
            flags::<unsafe extern "C-unwind" fn(i32, ...)>(),
            QualifierSet::UNSAFE | QualifierSet::VARIADIC
        );
        assert_type_eq!(
            <extern "C-unwind" fn(u8, *const c_char, ...) -> c_int as StripQualifiers>::Unqualified,
            fn(u8, *const c_char) -> c_int
        );
    }

    #[test]
    fn test_every_shape_reduces_to_the_safe_rust_pointer() {
        assert_type_eq!(
            <unsafe extern "C-unwind" fn(u8, u16) -> u32 as StripQualifiers>::Unqualified,
            fn(u8, u16) -> u32
        );
        assert_type_eq!(
            <extern "C" fn() as StripQualifiers>::Unqualified,
            fn()
        );
    }

    #[test]
    fn test_member_flags_merge_form_and_signature() {
        struct Widget;

        assert_eq!(
            flags::<MemberFn<Widget, fn(), LRef>>(),
            QualifierSet::LVALUE_REFERENCE
        );
        assert_eq!(
            flags::<MemberFn<Widget, unsafe extern "C" fn(i32, ...), ConstVolatileRRefNoExcept>>(),
            QualifierSet::CONST
                | QualifierSet::VOLATILE
                | QualifierSet::RVALUE_REFERENCE
                | QualifierSet::NOEXCEPT
                | QualifierSet::VARIADIC
                | QualifierSet::UNSAFE
        );
    }
}
