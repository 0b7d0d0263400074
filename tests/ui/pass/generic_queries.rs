use callable_traits::{member_fn, ArgType, Callable, ClassType, HasClass, ResultType};

struct Device;

fn describe<T: Callable + ?Sized>() -> (usize, bool) {
    (T::ARITY, T::IS_VARIADIC)
}

fn first_arg<T>(value: ArgType<T, 0>) -> ArgType<T, 0>
where
    T: Callable,
    T::Args: callable_traits::ArgAt<0>,
{
    value
}

fn result_of<T: Callable>(value: ResultType<T>) -> ResultType<T> {
    value
}

fn class_of<T: HasClass>() -> &'static str {
    std::any::type_name::<ClassType<T>>()
}

type Ioctl = member_fn!(Device, unsafe extern "C" fn(u32, ...) -> i32, volatile &);

fn main() {
    assert_eq!(describe::<Ioctl>(), (1, true));
    assert_eq!(describe::<dyn Fn(u8) -> u8>(), (1, false));
    assert_eq!(describe::<extern "C" fn(u8, u16, ...)>(), (2, true));
    assert_eq!(describe::<unsafe extern "C-unwind" fn(u8, ...) -> u8>(), (1, true));
    assert_eq!(first_arg::<Ioctl>(7u32), 7);
    assert_eq!(result_of::<fn() -> &'static str>("done"), "done");
    assert!(class_of::<Ioctl>().ends_with("Device"));
}
