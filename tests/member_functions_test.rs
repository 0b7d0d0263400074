//! Every member qualifier form, with a plain signature and each C-variadic
//! pointer shape.

use callable_traits::{
    assert_type_eq, member_fn, Arg0Type, Arg1Type, Callable, CallableDescriptor, Category,
    ClassType, MemberFn, QualifierSet, ResultType,
};
use pretty_assertions::assert_eq;

struct Widget;

const UNSAFE_C_VARIADIC: QualifierSet = QualifierSet::UNSAFE
    .union(QualifierSet::NOEXCEPT)
    .union(QualifierSet::VARIADIC);
const C_VARIADIC: QualifierSet = QualifierSet::NOEXCEPT.union(QualifierSet::VARIADIC);
const UNWIND_VARIADIC: QualifierSet = QualifierSet::VARIADIC;
const UNSAFE_UNWIND_VARIADIC: QualifierSet = QualifierSet::UNSAFE.union(QualifierSet::VARIADIC);

macro_rules! member_form_tests {
    ($($test:ident: [$($qualifier:tt)*] => $($flag:ident)|*;)*) => {
        $(
            #[test]
            fn $test() {
                type Plain = member_fn!(Widget, fn(i32, f64) -> u8, $($qualifier)*);
                type Variadic = member_fn!(Widget, unsafe extern "C" fn(i32, ...) -> u8, $($qualifier)*);
                type SafeVariadic = member_fn!(Widget, extern "C" fn(i32, ...) -> u8, $($qualifier)*);
                type UnwindVariadic = member_fn!(Widget, extern "C-unwind" fn(i32, ...) -> u8, $($qualifier)*);
                type UnsafeUnwindVariadic =
                    member_fn!(Widget, unsafe extern "C-unwind" fn(i32, ...) -> u8, $($qualifier)*);

                let expected = QualifierSet::empty()$(.union(QualifierSet::$flag))*;

                assert_eq!(<Plain as Callable>::QUALIFIERS, expected);
                assert_eq!(<Variadic as Callable>::QUALIFIERS, expected.union(UNSAFE_C_VARIADIC));
                assert_eq!(<SafeVariadic as Callable>::QUALIFIERS, expected.union(C_VARIADIC));
                assert_eq!(<UnwindVariadic as Callable>::QUALIFIERS, expected.union(UNWIND_VARIADIC));
                assert_eq!(
                    <UnsafeUnwindVariadic as Callable>::QUALIFIERS,
                    expected.union(UNSAFE_UNWIND_VARIADIC)
                );

                assert_eq!(<Plain as Callable>::CATEGORY, Category::MemberFunction);
                assert!(<Plain as Callable>::IS_MEMBER_FUNCTION);
                assert!(!<Plain as Callable>::IS_FUNCTOR);
                assert!(!<Plain as Callable>::IS_VARIADIC);
                assert!(<Variadic as Callable>::IS_VARIADIC);

                assert_eq!(<Plain as Callable>::ARITY, 2);
                assert_eq!(<Variadic as Callable>::ARITY, 1);
                assert_eq!(<UnwindVariadic as Callable>::ARITY, 1);
                assert_type_eq!(ResultType<Plain>, u8);
                assert_type_eq!(ResultType<Variadic>, u8);
                assert_type_eq!(Arg0Type<Plain>, i32);
                assert_type_eq!(Arg1Type<Plain>, f64);
                assert_type_eq!(Arg0Type<Variadic>, i32);
                assert_type_eq!(ClassType<Plain>, Widget);
                assert_type_eq!(ClassType<Variadic>, Widget);
                assert_type_eq!(ClassType<SafeVariadic>, Widget);
                assert_type_eq!(<UnsafeUnwindVariadic as Callable>::Signature, fn(i32) -> u8);
            }
        )*
    };
}

member_form_tests! {
    test_unqualified: [] => ;
    test_const: [const] => CONST;
    test_volatile: [volatile] => VOLATILE;
    test_const_volatile: [const volatile] => CONST | VOLATILE;

    test_lref: [&] => LVALUE_REFERENCE;
    test_const_lref: [const &] => CONST | LVALUE_REFERENCE;
    test_volatile_lref: [volatile &] => VOLATILE | LVALUE_REFERENCE;
    test_const_volatile_lref: [const volatile &] => CONST | VOLATILE | LVALUE_REFERENCE;

    test_rref: [&&] => RVALUE_REFERENCE;
    test_const_rref: [const &&] => CONST | RVALUE_REFERENCE;
    test_volatile_rref: [volatile &&] => VOLATILE | RVALUE_REFERENCE;
    test_const_volatile_rref: [const volatile &&] => CONST | VOLATILE | RVALUE_REFERENCE;

    test_noexcept: [noexcept] => NOEXCEPT;
    test_const_noexcept: [const noexcept] => CONST | NOEXCEPT;
    test_volatile_noexcept: [volatile noexcept] => VOLATILE | NOEXCEPT;
    test_const_volatile_noexcept: [const volatile noexcept] => CONST | VOLATILE | NOEXCEPT;

    test_lref_noexcept: [& noexcept] => LVALUE_REFERENCE | NOEXCEPT;
    test_const_lref_noexcept: [const & noexcept] => CONST | LVALUE_REFERENCE | NOEXCEPT;
    test_volatile_lref_noexcept: [volatile & noexcept] => VOLATILE | LVALUE_REFERENCE | NOEXCEPT;
    test_const_volatile_lref_noexcept: [const volatile & noexcept] => CONST | VOLATILE | LVALUE_REFERENCE | NOEXCEPT;

    test_rref_noexcept: [&& noexcept] => RVALUE_REFERENCE | NOEXCEPT;
    test_const_rref_noexcept: [const && noexcept] => CONST | RVALUE_REFERENCE | NOEXCEPT;
    test_volatile_rref_noexcept: [volatile && noexcept] => VOLATILE | RVALUE_REFERENCE | NOEXCEPT;
    test_const_volatile_rref_noexcept: [const volatile && noexcept] => CONST | VOLATILE | RVALUE_REFERENCE | NOEXCEPT;
}

#[test]
fn test_transmit_scenario() {
    type Transmit = member_fn!(Widget, unsafe extern "C" fn(i32, ...), const volatile && noexcept);

    assert!(<Transmit as Callable>::IS_CONST);
    assert!(<Transmit as Callable>::IS_VOLATILE);
    assert!(<Transmit as Callable>::IS_RVALUE_REFERENCE);
    assert!(!<Transmit as Callable>::IS_LVALUE_REFERENCE);
    assert!(<Transmit as Callable>::IS_NOEXCEPT);
    assert!(<Transmit as Callable>::IS_VARIADIC);
}

#[test]
fn test_signature_abi_contributes_to_member_flags() {
    type Callback = member_fn!(Widget, extern "C" fn(u32), const &);

    assert_eq!(
        <Callback as Callable>::QUALIFIERS,
        QualifierSet::CONST | QualifierSet::LVALUE_REFERENCE | QualifierSet::NOEXCEPT
    );
}

#[test]
fn test_outer_reference_keeps_member_class() {
    type Method = member_fn!(Widget, fn(String) -> usize, volatile &);

    assert_type_eq!(ClassType<&'static Method>, Widget);
    assert_type_eq!(ClassType<&'static mut Method>, Widget);
    assert_type_eq!(ClassType<Box<Method>>, Widget);
    assert_eq!(
        CallableDescriptor::with_class::<&'static Method>(),
        CallableDescriptor::with_class::<Method>()
    );
}

#[test]
fn test_unsized_class_is_accepted() {
    type Method = MemberFn<str, fn() -> usize>;

    assert_type_eq!(ClassType<Method>, str);
    assert_eq!(<Method as Callable>::ARITY, 0);
}

#[test]
fn test_member_descriptor_spells_qualifiers() {
    let descriptor =
        CallableDescriptor::with_class::<member_fn!(Widget, unsafe fn(i8), const && noexcept)>();

    assert_eq!(descriptor.qualifier_spelling(), "unsafe const && noexcept");
    assert!(descriptor
        .class_type
        .is_some_and(|name| name.ends_with("Widget")));
}
