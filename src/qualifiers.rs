//! Qualifier flags and the table of qualified call forms.
//!
//! A member call can be qualified along three independent axes:
//!
//! - cv: none, `const`, `volatile`, `const volatile`
//! - reference: none, `&`, `&&`
//! - exception: throwing or `noexcept`
//!
//! Each of the 24 combinations is an uninhabited marker type below carrying
//! exactly one [`QualifierSet`]. Variadic-ness is not part of the table: it
//! comes from the signature the qualifiers are attached to, which doubles the
//! table to 48 resolvable member forms.
//!
//! Rust receivers cover three of the forms directly:
//!
//! | receiver    | marker          |
//! |-------------|-----------------|
//! | `&self`     | [`Const`]       |
//! | `&mut self` | [`Unqualified`] |
//! | `self`      | [`RRef`]        |

use bitflags::bitflags;
use std::fmt;

bitflags! {
    /// Qualifiers attached to a callable itself, as opposed to its parameters.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct QualifierSet: u8 {
        /// `const` call operator or member (`&self` in Rust terms)
        const CONST = 1 << 0;
        /// `volatile` call operator or member
        const VOLATILE = 1 << 1;
        /// `&` reference qualifier
        const LVALUE_REFERENCE = 1 << 2;
        /// `&&` reference qualifier (by-value `self` in Rust terms)
        const RVALUE_REFERENCE = 1 << 3;
        /// Cannot unwind (`noexcept`, or an `extern "C"` ABI)
        const NOEXCEPT = 1 << 4;
        /// Trailing C-variadic `...`
        const VARIADIC = 1 << 5;
        /// `unsafe` function pointer
        const UNSAFE = 1 << 6;
    }
}

/// Reference category of a qualified call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    None,
    Lvalue,
    Rvalue,
}

impl QualifierSet {
    pub const fn is_const(self) -> bool {
        self.contains(Self::CONST)
    }

    pub const fn is_volatile(self) -> bool {
        self.contains(Self::VOLATILE)
    }

    pub const fn is_lvalue_reference(self) -> bool {
        self.contains(Self::LVALUE_REFERENCE)
    }

    pub const fn is_rvalue_reference(self) -> bool {
        self.contains(Self::RVALUE_REFERENCE)
    }

    pub const fn is_noexcept(self) -> bool {
        self.contains(Self::NOEXCEPT)
    }

    pub const fn is_variadic(self) -> bool {
        self.contains(Self::VARIADIC)
    }

    pub const fn is_unsafe(self) -> bool {
        self.contains(Self::UNSAFE)
    }

    /// At most one reference qualifier may be present.
    pub const fn is_well_formed(self) -> bool {
        !(self.is_lvalue_reference() && self.is_rvalue_reference())
    }

    pub const fn reference(self) -> ReferenceKind {
        if self.is_lvalue_reference() {
            ReferenceKind::Lvalue
        } else if self.is_rvalue_reference() {
            ReferenceKind::Rvalue
        } else {
            ReferenceKind::None
        }
    }
}

impl fmt::Display for QualifierSet {
    /// Renders the C++-style spelling, e.g. `const volatile && noexcept`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let words = [
            (self.is_unsafe(), "unsafe"),
            (self.is_const(), "const"),
            (self.is_volatile(), "volatile"),
            (self.is_lvalue_reference(), "&"),
            (self.is_rvalue_reference(), "&&"),
            (self.is_noexcept(), "noexcept"),
            (self.is_variadic(), "..."),
        ];
        let spelled: Vec<&str> = words
            .iter()
            .filter(|(present, _)| *present)
            .map(|(_, word)| *word)
            .collect();
        write!(f, "{}", spelled.join(" "))
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A type-level qualifier form: one row of the qualifier table.
///
/// Sealed: the table below is the complete set of forms.
pub trait Qualifiers: sealed::Sealed {
    /// The flags this form sets.
    const SET: QualifierSet;
    /// Declaration spelling accepted by [`member_fn!`](crate::member_fn).
    const SPELLING: &'static str;
}

macro_rules! qualifier_table {
    ($($(#[$doc:meta])* $name:ident => [$($flag:ident)|*], $spelling:literal;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug)]
            pub enum $name {}

            impl sealed::Sealed for $name {}

            impl Qualifiers for $name {
                const SET: QualifierSet = QualifierSet::empty()$(.union(QualifierSet::$flag))*;
                const SPELLING: &'static str = $spelling;
            }

            const _: () = assert!(
                <$name as Qualifiers>::SET.is_well_formed(),
                concat!(stringify!($name), " sets both reference qualifiers"),
            );
        )*

        /// Every qualified form as `(marker name, flags)`, in table order.
        pub const FORMS: &[(&str, QualifierSet)] = &[
            $((stringify!($name), <$name as Qualifiers>::SET),)*
        ];
    };
}

qualifier_table! {
    /// No qualifiers (`&mut self`).
    Unqualified => [], "";
    /// `&self`
    Const => [CONST], "const";
    Volatile => [VOLATILE], "volatile";
    ConstVolatile => [CONST | VOLATILE], "const volatile";

    LRef => [LVALUE_REFERENCE], "&";
    ConstLRef => [CONST | LVALUE_REFERENCE], "const &";
    VolatileLRef => [VOLATILE | LVALUE_REFERENCE], "volatile &";
    ConstVolatileLRef => [CONST | VOLATILE | LVALUE_REFERENCE], "const volatile &";

    /// `self`
    RRef => [RVALUE_REFERENCE], "&&";
    ConstRRef => [CONST | RVALUE_REFERENCE], "const &&";
    VolatileRRef => [VOLATILE | RVALUE_REFERENCE], "volatile &&";
    ConstVolatileRRef => [CONST | VOLATILE | RVALUE_REFERENCE], "const volatile &&";

    NoExcept => [NOEXCEPT], "noexcept";
    ConstNoExcept => [CONST | NOEXCEPT], "const noexcept";
    VolatileNoExcept => [VOLATILE | NOEXCEPT], "volatile noexcept";
    ConstVolatileNoExcept => [CONST | VOLATILE | NOEXCEPT], "const volatile noexcept";

    LRefNoExcept => [LVALUE_REFERENCE | NOEXCEPT], "& noexcept";
    ConstLRefNoExcept => [CONST | LVALUE_REFERENCE | NOEXCEPT], "const & noexcept";
    VolatileLRefNoExcept => [VOLATILE | LVALUE_REFERENCE | NOEXCEPT], "volatile & noexcept";
    ConstVolatileLRefNoExcept => [CONST | VOLATILE | LVALUE_REFERENCE | NOEXCEPT], "const volatile & noexcept";

    RRefNoExcept => [RVALUE_REFERENCE | NOEXCEPT], "&& noexcept";
    ConstRRefNoExcept => [CONST | RVALUE_REFERENCE | NOEXCEPT], "const && noexcept";
    VolatileRRefNoExcept => [VOLATILE | RVALUE_REFERENCE | NOEXCEPT], "volatile && noexcept";
    ConstVolatileRRefNoExcept => [CONST | VOLATILE | RVALUE_REFERENCE | NOEXCEPT], "const volatile && noexcept";
}
