//! Check macros
//!
//! Each macro borrows the sink expression, forwards the subject arguments to
//! the function of the same name in [`check`](crate::check), and turns any
//! trailing `"template", args..` into a [`Message::Formatted`](crate::Message).

#[doc(hidden)]
#[macro_export]
macro_rules! __message {
    () => {
        $crate::Message::Standard
    };
    ($($fmt:tt)+) => {
        $crate::Message::Formatted(::std::format_args!($($fmt)+))
    };
}

#[macro_export]
macro_rules! nil {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::nil(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_nil {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_nil(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! zero {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::zero(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_zero {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_zero(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! empty {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::empty(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_empty {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_empty(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! is_true {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::is_true(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! is_false {
    ($t:expr, $v:expr $(, $($msg:tt)+)?) => {
        $crate::check::is_false(&$t, $v, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! equal {
    ($t:expr, $a:expr, $b:expr $(, $($msg:tt)+)?) => {
        $crate::check::equal(&$t, $a, $b, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_equal {
    ($t:expr, $a:expr, $b:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_equal(&$t, $a, $b, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! equal_func {
    ($t:expr, $a:expr, $b:expr, $cmp:expr $(, $($msg:tt)+)?) => {
        $crate::check::equal_func(&$t, $a, $b, $cmp, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_equal_func {
    ($t:expr, $a:expr, $b:expr, $cmp:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_equal_func(&$t, $a, $b, $cmp, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! error {
    ($t:expr, $got:expr, $want:expr $(, $($msg:tt)+)?) => {
        $crate::check::error(&$t, $got, $want, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_error {
    ($t:expr, $got:expr, $not_want:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_error(&$t, $got, $not_want, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! contains {
    ($t:expr, $container:expr, $target:expr $(, $($msg:tt)+)?) => {
        $crate::check::contains(&$t, $container, $target, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_contains {
    ($t:expr, $container:expr, $target:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_contains(&$t, $container, $target, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! contains_func {
    ($t:expr, $container:expr, $pred:expr $(, $($msg:tt)+)?) => {
        $crate::check::contains_func(&$t, $container, $pred, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_contains_func {
    ($t:expr, $container:expr, $pred:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_contains_func(&$t, $container, $pred, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! has_prefix {
    ($t:expr, $s:expr, $prefix:expr $(, $($msg:tt)+)?) => {
        $crate::check::has_prefix(&$t, $s, $prefix, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! has_no_prefix {
    ($t:expr, $s:expr, $prefix:expr $(, $($msg:tt)+)?) => {
        $crate::check::has_no_prefix(&$t, $s, $prefix, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! has_suffix {
    ($t:expr, $s:expr, $suffix:expr $(, $($msg:tt)+)?) => {
        $crate::check::has_suffix(&$t, $s, $suffix, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! has_no_suffix {
    ($t:expr, $s:expr, $suffix:expr $(, $($msg:tt)+)?) => {
        $crate::check::has_no_suffix(&$t, $s, $suffix, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! panics {
    ($t:expr, $f:expr $(, $($msg:tt)+)?) => {
        $crate::check::panics(&$t, $f, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! not_panics {
    ($t:expr, $f:expr $(, $($msg:tt)+)?) => {
        $crate::check::not_panics(&$t, $f, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! panic_is {
    ($t:expr, $f:expr, $expected:expr $(, $($msg:tt)+)?) => {
        $crate::check::panic_is(&$t, $f, $expected, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! greater {
    ($t:expr, $a:expr, $b:expr $(, $($msg:tt)+)?) => {
        $crate::check::greater(&$t, $a, $b, $crate::__message!($($($msg)+)?))
    };
}

#[macro_export]
macro_rules! smaller {
    ($t:expr, $a:expr, $b:expr $(, $($msg:tt)+)?) => {
        $crate::check::smaller(&$t, $a, $b, $crate::__message!($($($msg)+)?))
    };
}
