//! Internal code-generation helpers shared by the resolution stages.

/// Invokes `$callback!` once per supported arity with the generic parameter
/// names for that arity.
macro_rules! for_each_arity {
    ($callback:ident) => {
        $callback!();
        $callback!(A0);
        $callback!(A0, A1);
        $callback!(A0, A1, A2);
        $callback!(A0, A1, A2, A3);
        $callback!(A0, A1, A2, A3, A4);
        $callback!(A0, A1, A2, A3, A4, A5);
        $callback!(A0, A1, A2, A3, A4, A5, A6);
        $callback!(A0, A1, A2, A3, A4, A5, A6, A7);
        $callback!(A0, A1, A2, A3, A4, A5, A6, A7, A8);
        $callback!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9);
        $callback!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10);
        $callback!(A0, A1, A2, A3, A4, A5, A6, A7, A8, A9, A10, A11);
    };
}

macro_rules! count_idents {
    () => { 0usize };
    ($head:ident $($tail:ident)*) => { 1usize + count_idents!($($tail)*) };
}
