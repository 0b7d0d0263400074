//! The built-in callables `callable-inspect` knows how to describe.

use std::ffi::{c_char, c_int};

use crate::closure::closure;
use crate::descriptor::{traits_with_class_of, CallableDescriptor};
use crate::errors::InspectError;
use crate::{call_operator, member_fn};

/// Owner of the member-function entries.
pub struct Port;

/// A functor declared with `#[call_operator]`.
pub struct Scale {
    pub factor: f64,
}

#[call_operator(noexcept)]
impl Scale {
    pub fn apply(&self, value: f64) -> f64 {
        value * self.factor
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogueEntry {
    pub name: &'static str,
    /// How the callable is written in Rust
    pub signature: &'static str,
    pub descriptor: CallableDescriptor,
}

macro_rules! entry {
    ($name:literal, $signature:literal, $descriptor:expr) => {
        CatalogueEntry {
            name: $name,
            signature: $signature,
            descriptor: $descriptor,
        }
    };
}

pub fn catalogue() -> Vec<CatalogueEntry> {
    vec![
        entry!(
            "lambda",
            "closure(|_: f32| {})",
            traits_with_class_of(&closure(|_: f32| {}))
        ),
        entry!(
            "printf",
            "unsafe extern \"C\" fn(*const c_char, ...) -> c_int",
            CallableDescriptor::of::<unsafe extern "C" fn(*const c_char, ...) -> c_int>()
        ),
        entry!(
            "volatile_ref",
            "member_fn!(Port, fn(), volatile &)",
            CallableDescriptor::with_class::<member_fn!(Port, fn(), volatile &)>()
        ),
        entry!(
            "rvalue_ref_noexcept",
            "member_fn!(Port, fn(), && noexcept)",
            CallableDescriptor::with_class::<member_fn!(Port, fn(), && noexcept)>()
        ),
        entry!(
            "boxed_fn",
            "Box<dyn Fn(i32, f32)>",
            CallableDescriptor::with_class::<Box<dyn Fn(i32, f32)>>()
        ),
        entry!(
            "scale",
            "#[call_operator(noexcept)] Scale::apply(&self, f64) -> f64",
            CallableDescriptor::with_class::<Scale>()
        ),
        entry!(
            "foo",
            "fn(i32) -> i32",
            CallableDescriptor::of::<fn(i32) -> i32>()
        ),
    ]
}

pub fn entry_names(entries: &[CatalogueEntry]) -> Vec<&'static str> {
    entries.iter().map(|entry| entry.name).collect()
}

/// Keep the named entries, in the order given. An empty list keeps all.
pub fn select(
    entries: Vec<CatalogueEntry>,
    names: &[String],
) -> Result<Vec<CatalogueEntry>, InspectError> {
    if names.is_empty() {
        return Ok(entries);
    }

    names
        .iter()
        .map(|name| {
            entries
                .iter()
                .find(|entry| entry.name == name.as_str())
                .cloned()
                .ok_or_else(|| InspectError::UnknownEntry {
                    name: name.clone(),
                    available: entry_names(&entries).join(", "),
                })
        })
        .collect()
}
