use crate::domain::ports::{ArgRecord, Callable};
use std::time::Instant;

/// Adapter giving a plain function a name and the `Callable` contract.
pub struct Func<F> {
    name: &'static str,
    f: F,
}

impl<F> Func<F> {
    pub fn new(name: &'static str, f: F) -> Self {
        Self { name, f }
    }
}

impl<A, R, F> Callable<A> for Func<F>
where
    F: Fn(A) -> R,
{
    type Output = R;

    fn name(&self) -> &str {
        self.name
    }

    fn call(&self, args: A) -> R {
        (self.f)(args)
    }
}

/// Logs the argument bundle at warning level, then delegates. Empty bundles
/// get an explicit message instead of an empty rendering.
pub struct ArgLogging<C> {
    inner: C,
}

impl<C> ArgLogging<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<A, C> Callable<A> for ArgLogging<C>
where
    A: ArgRecord,
    C: Callable<A>,
{
    type Output = C::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn call(&self, args: A) -> Self::Output {
        let positional = args.positional();
        if positional.is_empty() {
            tracing::warn!("The function {} has no positional arguments.", self.name());
        } else {
            tracing::warn!(
                "The function {} has following positional arguments: ({}).",
                self.name(),
                positional.join(", ")
            );
        }

        let named = args.named();
        if named.is_empty() {
            tracing::warn!("The function {} has no keyword arguments.", self.name());
        } else {
            tracing::warn!(
                "The function {} has following keyword arguments: {}.",
                self.name(),
                named.join(", ")
            );
        }

        self.inner.call(args)
    }
}

/// Measures wall time around the delegated call and logs it at warning level.
pub struct Timing<C> {
    inner: C,
}

impl<C> Timing<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

impl<A, C> Callable<A> for Timing<C>
where
    C: Callable<A>,
{
    type Output = C::Output;

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn call(&self, args: A) -> Self::Output {
        let start = Instant::now();
        let value = self.inner.call(args);
        let elapsed = start.elapsed();
        tracing::warn!(
            "The function {} took {:.9} seconds.",
            self.name(),
            elapsed.as_secs_f64()
        );
        value
    }
}
