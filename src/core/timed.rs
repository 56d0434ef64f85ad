// src/core/timed.rs

use crate::{
    core::report::Reporter,
    models::CallableInfo,
};
use std::borrow::Cow;
use std::fmt;

/// A callable that can be invoked with its arguments packed in a tuple.
///
/// Implemented for every `Fn` of up to eight arguments, which is what lets [`Timed`]
/// wrap callables of any arity: `wrap("add", add).call((5, 7))`.
pub trait Invoke<Args> {
    /// What the callable returns.
    type Output;

    /// Calls with the unpacked arguments.
    fn invoke(&self, args: Args) -> Self::Output;
}

macro_rules! impl_invoke {
    ($($arg:ident),*) => {
        impl<Func, Ret, $($arg,)*> Invoke<($($arg,)*)> for Func
        where
            Func: Fn($($arg),*) -> Ret,
        {
            type Output = Ret;

            #[allow(non_snake_case)]
            #[inline]
            fn invoke(&self, ($($arg,)*): ($($arg,)*)) -> Ret {
                self($($arg),*)
            }
        }
    };
}

impl_invoke!();
impl_invoke!(A1);
impl_invoke!(A1, A2);
impl_invoke!(A1, A2, A3);
impl_invoke!(A1, A2, A3, A4);
impl_invoke!(A1, A2, A3, A4, A5);
impl_invoke!(A1, A2, A3, A4, A5, A6);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7);
impl_invoke!(A1, A2, A3, A4, A5, A6, A7, A8);

/// A callable wrapped for timing.
///
/// Calling it behaves exactly like calling the wrapped callable, plus one report line
/// per successful return. It keeps no state between invocations.
#[derive(Clone)]
pub struct Timed<F> {
    pub(crate) inner: F,
    info: CallableInfo,
    pub(crate) reporter: Reporter,
}

impl<F> fmt::Debug for Timed<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Timed")
            .field("info", &self.info)
            .field("reporter", &self.reporter)
            .finish_non_exhaustive()
    }
}

/// Wraps `f` for timing under `name`, reporting to stdout.
pub fn wrap<F>(name: impl Into<Cow<'static, str>>, f: F) -> Timed<F> {
    Timed::new(name, f, Reporter::default())
}

impl Reporter {
    /// Wraps `f` for timing under `name`, reporting through this reporter.
    pub fn wrap<F>(&self, name: impl Into<Cow<'static, str>>, f: F) -> Timed<F> {
        Timed::new(name, f, self.clone())
    }
}

impl<F> Timed<F> {
    /// Wraps `inner` under `name`, reporting through `reporter`.
    pub fn new(name: impl Into<Cow<'static, str>>, inner: F, reporter: Reporter) -> Self {
        Self {
            inner,
            info: CallableInfo::new(name),
            reporter,
        }
    }

    /// Attaches documentation to the wrapper's identity metadata.
    pub fn with_doc(mut self, doc: impl Into<Cow<'static, str>>) -> Self {
        self.info = self.info.with_doc(doc);
        self
    }

    /// The name used in reports.
    pub fn name(&self) -> &str {
        &self.info.name
    }

    /// The attached documentation, if any.
    pub fn doc(&self) -> Option<&str> {
        self.info.doc.as_deref()
    }

    /// All identity metadata.
    pub fn info(&self) -> &CallableInfo {
        &self.info
    }

    /// The reporter this wrapper emits through.
    pub fn reporter(&self) -> &Reporter {
        &self.reporter
    }

    /// The wrapped callable.
    pub fn inner(&self) -> &F {
        &self.inner
    }

    /// Unwraps, giving back the callable.
    pub fn into_inner(self) -> F {
        self.inner
    }

    /// Invokes the wrapped callable with `args` and reports the elapsed time.
    ///
    /// The return value is passed through untouched. If the callable panics, the
    /// panic unwinds past the report, so nothing is emitted for that call.
    pub fn call<Args>(&self, args: Args) -> F::Output
    where
        F: Invoke<Args>,
    {
        self.reporter.measure(self.name(), || self.inner.invoke(args))
    }

    /// Invokes a callable returning `Result`, reporting only on `Ok`.
    ///
    /// An `Err` is returned exactly as the callable produced it, and no report is emitted.
    pub fn try_call<Args, T, E>(&self, args: Args) -> Result<T, E>
    where
        F: Invoke<Args, Output = Result<T, E>>,
    {
        self.reporter
            .measure_fallible(self.name(), || self.inner.invoke(args))
    }
}
