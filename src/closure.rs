//! Closures as functors.
//!
//! A closure type cannot be named, so it is resolved through a value:
//! [`closure`], [`closure_mut`] and [`closure_once`] wrap it in a
//! [`Closure`] that records the argument tuple (inferred from the closure's
//! signature) and the kind of call operator it is used through.

use std::fmt;
use std::marker::PhantomData;

use crate::category::Functor;
use crate::member_fn::MemberFn;
use crate::normalize::Normalize;
use crate::qualifiers::{Const, Qualifiers, RRef, Unqualified};
use crate::traits::HasClass;

/// `F` is callable through `Fn` with the argument tuple `Args`.
pub trait FnArgs<Args> {}

/// `F` is callable through `FnMut` with the argument tuple `Args`.
pub trait FnMutArgs<Args> {}

/// `F` is callable through `FnOnce` with the argument tuple `Args`.
pub trait FnOnceArgs<Args> {
    type Output;
}

macro_rules! impl_closure_args {
    ($($A:ident),*) => {
        impl<F, R, $($A),*> FnArgs<($($A,)*)> for F where F: Fn($($A),*) -> R {}

        impl<F, R, $($A),*> FnMutArgs<($($A,)*)> for F where F: FnMut($($A),*) -> R {}

        impl<F, R, $($A),*> FnOnceArgs<($($A,)*)> for F
        where
            F: FnOnce($($A),*) -> R,
        {
            type Output = R;
        }

        impl<F, R, Q, $($A),*> Normalize for Closure<F, ($($A,)*), Q>
        where
            F: FnOnce($($A),*) -> R,
            Q: Qualifiers,
        {
            type Category = Functor;
            type Reduced = MemberFn<F, fn($($A),*) -> R, Q>;
        }
    };
}

for_each_arity!(impl_closure_args);

/// A closure paired with its argument tuple and call-operator form `Q`.
///
/// The class type of a `Closure` is the closure type itself; the wrapper is
/// transparent to resolution.
pub struct Closure<F, Args, Q> {
    f: F,
    _signature: PhantomData<fn(Args) -> Q>,
}

impl<F, Args, Q> Closure<F, Args, Q> {
    fn new(f: F) -> Self {
        Self {
            f,
            _signature: PhantomData,
        }
    }

    pub fn get_ref(&self) -> &F {
        &self.f
    }

    pub fn into_inner(self) -> F {
        self.f
    }
}

impl<F, Args, Q> fmt::Debug for Closure<F, Args, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("type", &std::any::type_name::<F>())
            .finish()
    }
}

impl<F, Args, Q> HasClass for Closure<F, Args, Q>
where
    Self: Normalize,
{
    type Class = F;
}

/// Resolve a closure through its `Fn` call operator (`const`).
///
/// # Example
///
/// ```rust
/// use callable_traits::{closure, traits_of, Category};
///
/// let describe = traits_of(&closure(|_: i32, _: *mut f32| -> *const u8 { std::ptr::null() }));
///
/// assert_eq!(describe.category, Category::Functor);
/// assert_eq!(describe.arity, 2);
/// assert!(describe.is_const);
/// assert!(!describe.is_lvalue_reference);
/// assert!(!describe.is_member_function);
/// ```
pub fn closure<F, Args>(f: F) -> Closure<F, Args, Const>
where
    F: FnArgs<Args>,
{
    Closure::new(f)
}

/// Resolve a closure through its `FnMut` call operator (no qualifiers).
pub fn closure_mut<F, Args>(f: F) -> Closure<F, Args, Unqualified>
where
    F: FnMutArgs<Args>,
{
    Closure::new(f)
}

/// Resolve a closure through its `FnOnce` call operator (`&&`).
pub fn closure_once<F, Args>(f: F) -> Closure<F, Args, RRef>
where
    F: FnOnceArgs<Args>,
{
    Closure::new(f)
}
