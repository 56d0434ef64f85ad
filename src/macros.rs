// src/macros.rs

/// Defines functions whose every call is timed and reported.
///
/// Each function keeps its name (used in the report), its doc comments and other
/// attributes, its visibility and its signature. By default reports go to stdout;
/// start the invocation with `using <reporter>;` to send them elsewhere.
///
/// ```
/// timewrap::time_it! {
///     /// Add two numbers.
///     pub fn add(a: i32, b: i32) -> i32 {
///         a + b
///     }
/// }
///
/// assert_eq!(add(5, 7), 12); // prints "[TIMER] Function 'add' took 0.0000 seconds."
/// ```
///
/// Parameters are passed through as written, so `mut` bindings and destructuring
/// patterns work. Generic functions and methods taking `self` are not supported; wrap
/// those with [`wrap`](crate::wrap) instead.
#[macro_export]
macro_rules! time_it {
    (using $reporter:expr; $($rest:tt)*) => {
        $crate::__timed_fns!(measure, $reporter; $($rest)*);
    };
    ($($rest:tt)*) => {
        $crate::__timed_fns!(measure, $crate::Reporter::default(); $($rest)*);
    };
}

/// Like [`time_it!`], for functions returning `Result`: a call that returns `Err` is
/// not reported.
#[macro_export]
macro_rules! try_time_it {
    (using $reporter:expr; $($rest:tt)*) => {
        $crate::__timed_fns!(measure_fallible, $reporter; $($rest)*);
    };
    ($($rest:tt)*) => {
        $crate::__timed_fns!(measure_fallible, $crate::Reporter::default(); $($rest)*);
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __timed_fns {
    ($method:ident, $reporter:expr;) => {};
    (
        $method:ident, $reporter:expr;
        $(#[$meta:meta])*
        $vis:vis fn $name:ident ( $($params:tt)* ) -> $ret:ty $body:block
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        $vis fn $name($($params)*) -> $ret {
            $reporter.$method(stringify!($name), move || -> $ret { $body })
        }
        $crate::__timed_fns!($method, $reporter; $($rest)*);
    };
    (
        $method:ident, $reporter:expr;
        $(#[$meta:meta])*
        $vis:vis fn $name:ident ( $($params:tt)* ) $body:block
        $($rest:tt)*
    ) => {
        $(#[$meta])*
        $vis fn $name($($params)*) {
            $reporter.$method(stringify!($name), move || { $body })
        }
        $crate::__timed_fns!($method, $reporter; $($rest)*);
    };
}
