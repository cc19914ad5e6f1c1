//! Optional span/event instrumentation for the decode and filter stages.
//!
//! The pipeline stages call these macros unconditionally; with the `tracing`
//! feature enabled they forward to `tracing` spans and events, and without it
//! they compile away so the offline batch path carries no logging cost.

/// Open an info-level span around a pipeline stage.
#[cfg(feature = "tracing")]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        tracing::info_span!($name $(, $($field)*)?)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_span {
    ($name:expr $(, $($field:tt)*)?) => {
        $crate::trace::NoopSpan
    };
}

/// Record a measurement (dimensions, buffer sizes) as an info-level event.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        tracing::info!(name: $name, $($key = $value),+)
    };
    ($name:expr) => {
        tracing::info!(name: $name)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($name:expr, $($key:ident = $value:expr),+ $(,)?) => {
        // Field expressions still evaluate so their inputs count as used.
        let _ = ($($value,)+);
    };
    ($name:expr) => {};
}

pub(crate) use trace_event;
pub(crate) use trace_span;

/// Stand-in span guard for builds without the `tracing` feature.
///
/// Lets call sites keep the `let _guard = trace_span!(...).entered();` shape
/// regardless of the feature set.
#[cfg(not(feature = "tracing"))]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Mirrors `Span::entered()`.
    #[inline]
    pub fn entered(self) -> Self {
        self
    }
}
