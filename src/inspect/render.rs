use std::fmt::{self, Write};

use serde::Serialize;

use super::catalogue::CatalogueEntry;
use crate::descriptor::CallableDescriptor;
use crate::errors::InspectError;

#[derive(Serialize)]
struct Report<'a> {
    name: &'a str,
    signature: &'a str,
    #[serde(flatten)]
    descriptor: &'a CallableDescriptor,
}

pub fn render_json(entries: &[CatalogueEntry]) -> Result<String, InspectError> {
    let reports: Vec<Report<'_>> = entries
        .iter()
        .map(|entry| Report {
            name: entry.name,
            signature: entry.signature,
            descriptor: &entry.descriptor,
        })
        .collect();

    Ok(serde_json::to_string_pretty(&reports)?)
}

pub fn render_terminal(entries: &[CatalogueEntry]) -> Result<String, InspectError> {
    let mut out = String::new();
    for entry in entries {
        write_entry(&mut out, entry)?;
    }
    Ok(out)
}

fn write_entry(out: &mut impl Write, entry: &CatalogueEntry) -> fmt::Result {
    let d = &entry.descriptor;

    writeln!(out, "Callable signature           : {}", entry.signature)?;
    writeln!(out, "Callable is a member function: {}", d.is_member_function)?;
    writeln!(out, "Callable is a functor        : {}", d.is_functor)?;
    writeln!(out, "Callable is const            : {}", d.is_const)?;
    writeln!(out, "Callable is volatile         : {}", d.is_volatile)?;
    writeln!(out, "Callable is lvalue reference : {}", d.is_lvalue_reference)?;
    writeln!(out, "Callable is rvalue reference : {}", d.is_rvalue_reference)?;
    writeln!(out, "Callable is noexcept         : {}", d.is_noexcept)?;
    writeln!(out, "Callable is variadic         : {}", d.is_variadic)?;
    writeln!(out, "Callable is unsafe           : {}", d.is_unsafe)?;
    writeln!(out, "Callable has result type     : {}", d.result_type)?;
    writeln!(out, "Callable has arity           : {}", d.arity)?;
    for (index, arg) in d.arg_types.iter().enumerate() {
        writeln!(out, "Callable has argument {} type : {}", index, arg)?;
    }
    if let Some(class) = d.class_type {
        writeln!(out, "Callable has class type      : {}", class)?;
    }
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inspect::catalogue::{catalogue, select};

    fn only(name: &str) -> Vec<CatalogueEntry> {
        select(catalogue(), &[name.to_string()]).unwrap()
    }

    #[test]
    fn test_terminal_output_lists_every_field() {
        let out = render_terminal(&only("printf")).unwrap();

        assert!(out.starts_with(
            "Callable signature           : unsafe extern \"C\" fn(*const c_char, ...) -> c_int\n"
        ));
        assert!(out.contains("Callable is variadic         : true\n"));
        assert!(out.contains("Callable has arity           : 1\n"));
        assert!(out.contains("Callable has argument 0 type : *const i8")
            || out.contains("Callable has argument 0 type : *const u8"));
        assert!(!out.contains("class type"));
        assert!(out.ends_with("\n\n"));
    }

    #[test]
    fn test_terminal_output_shows_class_when_known() {
        let out = render_terminal(&only("volatile_ref")).unwrap();

        assert!(out.contains("Callable is a member function: true\n"));
        assert!(out.contains("Callable has arity           : 0\n"));
        assert!(!out.contains("argument 0"));
        assert!(out.contains("Callable has class type      : "));
    }

    #[test]
    fn test_write_error_is_propagated() {
        struct Full;

        impl Write for Full {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let entries = only("foo");
        assert!(write_entry(&mut Full, &entries[0]).is_err());
    }

    #[test]
    fn test_json_output_flattens_descriptor() {
        let json = render_json(&only("foo")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value[0]["name"], "foo");
        assert_eq!(value[0]["category"], "plain_function");
        assert_eq!(value[0]["arity"], 1);
        assert_eq!(value[0]["arg_types"][0], "i32");
        assert_eq!(value[0]["result_type"], "i32");
    }
}
