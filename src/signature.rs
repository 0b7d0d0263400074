//! Signature decomposition: result type, arity and indexed parameters of an
//! unqualified `fn(A0, .., An) -> R`.
//!
//! Only the canonical safe Rust-ABI pointer implements [`Signature`]; every
//! other callable shape reaches it through
//! [`StripQualifiers`](crate::strip::StripQualifiers).

use std::any::type_name;

/// The ordered parameter list of a signature, as a tuple.
pub trait ArgList {
    /// Number of parameters.
    const LEN: usize;

    /// `std::any::type_name` of every parameter, in declaration order.
    fn type_names() -> Vec<&'static str>;
}

/// Indexed access into an [`ArgList`].
///
/// Implemented only for `I < LEN`, so an out-of-range query does not compile.
#[diagnostic::on_unimplemented(
    message = "argument list `{Self}` has no parameter at the requested index",
    label = "parameter index out of range for this callable"
)]
pub trait ArgAt<const I: usize>: ArgList {
    type Type;
}

/// An unqualified function signature.
pub trait Signature {
    type Output;
    type Args: ArgList;

    const ARITY: usize = <Self::Args as ArgList>::LEN;
}

macro_rules! impl_signature {
    ($($A:ident),*) => {
        impl<$($A),*> ArgList for ($($A,)*) {
            const LEN: usize = count_idents!($($A)*);

            fn type_names() -> Vec<&'static str> {
                vec![$(type_name::<$A>()),*]
            }
        }

        impl<R, $($A),*> Signature for fn($($A),*) -> R {
            type Output = R;
            type Args = ($($A,)*);
        }
    };
}

for_each_arity!(impl_signature);

macro_rules! impl_arg_at {
    (@one [$($A:ident),+] $index:tt $selected:ident) => {
        impl<$($A),+> ArgAt<$index> for ($($A,)+) {
            type Type = $selected;
        }
    };
    ($names:tt; $($index:tt => $selected:ident),+) => {
        $(impl_arg_at!(@one $names $index $selected);)+
    };
}

impl_arg_at!([A0]; 0 => A0);
impl_arg_at!([A0, A1]; 0 => A0, 1 => A1);
impl_arg_at!([A0, A1, A2]; 0 => A0, 1 => A1, 2 => A2);
impl_arg_at!([A0, A1, A2, A3]; 0 => A0, 1 => A1, 2 => A2, 3 => A3);
impl_arg_at!([A0, A1, A2, A3, A4]; 0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4);
impl_arg_at!([A0, A1, A2, A3, A4, A5];
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5);
impl_arg_at!([A0, A1, A2, A3, A4, A5, A6];
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6);
impl_arg_at!([A0, A1, A2, A3, A4, A5, A6, A7];
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7);
impl_arg_at!([A0, A1, A2, A3, A4, A5, A6, A7, A8];
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8);
impl_arg_at!([A0, A1, A2, A3, A4, A5, A6, A7, A8, A9];
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8,
    9 => A9);
impl_arg_at!([A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10];
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8,
    9 => A9, 10 => A10);
impl_arg_at!([A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11];
    0 => A0, 1 => A1, 2 => A2, 3 => A3, 4 => A4, 5 => A5, 6 => A6, 7 => A7, 8 => A8,
    9 => A9, 10 => A10, 11 => A11);
