//! Callable categories: the enumerated tag and its type-level markers.

use serde::Serialize;
use std::fmt;

/// The structural kind of a callable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Function pointers of any ABI or safety.
    PlainFunction,
    /// Member-function pointers declared with [`MemberFn`](crate::MemberFn).
    MemberFunction,
    /// Closures, trait objects and `#[call_operator]` types.
    Functor,
}

impl Category {
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::PlainFunction => "plain function",
            Category::MemberFunction => "member function",
            Category::Functor => "functor",
        }
    }

    /// Only member functions and functors have an enclosing class type.
    pub fn has_class(&self) -> bool {
        !matches!(self, Category::PlainFunction)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Type-level counterpart of [`Category`].
///
/// `Shared` and `Unique` describe how a `&`/`&mut` wrapper around a callable
/// of this category changes its class type: functors thread the outer
/// reference through, member-function pointers keep their class unchanged.
pub trait CategoryMarker: sealed::Sealed {
    const KIND: Category;

    type Shared<'a, C: ?Sized + 'a>: ?Sized + 'a;
    type Unique<'a, C: ?Sized + 'a>: ?Sized + 'a;
}

/// Marker for [`Category::PlainFunction`].
#[derive(Debug)]
pub enum PlainFunction {}

/// Marker for [`Category::MemberFunction`].
#[derive(Debug)]
pub enum MemberFunction {}

/// Marker for [`Category::Functor`].
#[derive(Debug)]
pub enum Functor {}

impl sealed::Sealed for PlainFunction {}
impl sealed::Sealed for MemberFunction {}
impl sealed::Sealed for Functor {}

impl CategoryMarker for PlainFunction {
    const KIND: Category = Category::PlainFunction;

    // Plain functions have no class; these are never observed.
    type Shared<'a, C: ?Sized + 'a> = C;
    type Unique<'a, C: ?Sized + 'a> = C;
}

impl CategoryMarker for MemberFunction {
    const KIND: Category = Category::MemberFunction;

    type Shared<'a, C: ?Sized + 'a> = C;
    type Unique<'a, C: ?Sized + 'a> = C;
}

impl CategoryMarker for Functor {
    const KIND: Category = Category::Functor;

    type Shared<'a, C: ?Sized + 'a> = &'a C;
    type Unique<'a, C: ?Sized + 'a> = &'a mut C;
}
