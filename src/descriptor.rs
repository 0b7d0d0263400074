//! Runtime view of a resolved callable.
//!
//! [`CallableDescriptor`] copies the compile-time answers of [`Callable`]
//! into plain values so they can be printed, compared or serialized. Type
//! names come from [`std::any::type_name`] and are meant for display only.

use std::any::type_name;

use serde::Serialize;

use crate::category::Category;
use crate::qualifiers::QualifierSet;
use crate::signature::ArgList;
use crate::traits::{Callable, HasClass};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CallableDescriptor {
    pub category: Category,
    pub result_type: &'static str,
    pub arity: usize,
    pub arg_types: Vec<&'static str>,
    pub is_const: bool,
    pub is_volatile: bool,
    pub is_lvalue_reference: bool,
    pub is_rvalue_reference: bool,
    pub is_noexcept: bool,
    pub is_variadic: bool,
    pub is_unsafe: bool,
    pub is_member_function: bool,
    pub is_functor: bool,
    /// Only set by [`CallableDescriptor::with_class`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_type: Option<&'static str>,
}

impl CallableDescriptor {
    /// Describe `T` without its class type.
    pub fn of<T: Callable + ?Sized>() -> Self {
        Self {
            category: T::CATEGORY,
            result_type: type_name::<T::Output>(),
            arity: T::ARITY,
            arg_types: <T::Args as ArgList>::type_names(),
            is_const: T::IS_CONST,
            is_volatile: T::IS_VOLATILE,
            is_lvalue_reference: T::IS_LVALUE_REFERENCE,
            is_rvalue_reference: T::IS_RVALUE_REFERENCE,
            is_noexcept: T::IS_NOEXCEPT,
            is_variadic: T::IS_VARIADIC,
            is_unsafe: T::IS_UNSAFE,
            is_member_function: T::IS_MEMBER_FUNCTION,
            is_functor: T::IS_FUNCTOR,
            class_type: None,
        }
    }

    /// Describe a member function or functor, including its class type.
    pub fn with_class<T: HasClass + ?Sized>() -> Self {
        Self {
            class_type: Some(type_name::<T::Class>()),
            ..Self::of::<T>()
        }
    }

    /// The flags as a [`QualifierSet`].
    pub fn qualifiers(&self) -> QualifierSet {
        let mut set = QualifierSet::empty();
        set.set(QualifierSet::CONST, self.is_const);
        set.set(QualifierSet::VOLATILE, self.is_volatile);
        set.set(QualifierSet::LVALUE_REFERENCE, self.is_lvalue_reference);
        set.set(QualifierSet::RVALUE_REFERENCE, self.is_rvalue_reference);
        set.set(QualifierSet::NOEXCEPT, self.is_noexcept);
        set.set(QualifierSet::VARIADIC, self.is_variadic);
        set.set(QualifierSet::UNSAFE, self.is_unsafe);
        set
    }

    /// The qualifier spelling in declaration order, e.g. `const volatile &&`.
    pub fn qualifier_spelling(&self) -> String {
        self.qualifiers().to_string()
    }
}

/// Describe the callable type of a value.
///
/// Closures are named through [`closure`](crate::closure) and friends, so
/// this is the way to inspect them.
pub fn traits_of<T: Callable>(_value: &T) -> CallableDescriptor {
    CallableDescriptor::of::<T>()
}

/// Like [`traits_of`], including the class type.
pub fn traits_with_class_of<T: HasClass>(_value: &T) -> CallableDescriptor {
    CallableDescriptor::with_class::<T>()
}
