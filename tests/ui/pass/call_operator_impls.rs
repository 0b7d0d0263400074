use callable_traits::{call_operator, Callable, ClassType, HasClass};

pub struct Lexer<'src> {
    input: &'src str,
}

#[call_operator(noexcept)]
impl<'src> Lexer<'src> {
    pub fn new(input: &'src str) -> Self {
        Lexer { input }
    }

    #[call]
    pub fn next_token(&mut self) -> Option<&'src str> {
        let trimmed = self.input.trim_start();
        let end = trimmed.find(' ').unwrap_or(trimmed.len());
        let (token, rest) = trimmed.split_at(end);
        self.input = rest;
        (!token.is_empty()).then_some(token)
    }

    pub fn remaining(&self) -> &'src str {
        self.input
    }
}

pub struct Wrapper<T>(T);

#[call_operator]
impl<T> Wrapper<T>
where
    T: Copy + Into<u64>,
{
    fn widen(self, extra: u64) -> u64 {
        self.0.into() + extra
    }
}

fn class_name<T: HasClass + ?Sized>() -> &'static str {
    std::any::type_name::<ClassType<T>>()
}

fn main() {
    const _: () = assert!(<Lexer<'static> as Callable>::IS_NOEXCEPT);
    const _: () = assert!(<Wrapper<u8> as Callable>::IS_RVALUE_REFERENCE);

    let mut lexer = Lexer::new("a b");
    assert_eq!(lexer.next_token(), Some("a"));
    assert_eq!(lexer.remaining(), " b");
    assert_eq!(Wrapper(3u8).widen(4), 7);
    assert!(class_name::<&'static mut Lexer<'static>>().starts_with("&mut "));
}
