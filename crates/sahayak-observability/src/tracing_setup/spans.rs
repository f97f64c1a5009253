//! Span definitions per operation: prefetch, lookup, sweep, fetch.

/// Create a prefetch span.
#[macro_export]
macro_rules! prefetch_span {
    ($grade:expr, $language:expr) => {
        tracing::info_span!("sahayak.prefetch", grade = $grade, language = %$language)
    };
}

/// Create a lookup span.
#[macro_export]
macro_rules! lookup_span {
    ($query:expr) => {
        tracing::debug_span!("sahayak.lookup", query = %$query)
    };
}

/// Create a retention sweep span.
#[macro_export]
macro_rules! sweep_span {
    ($max_age_days:expr) => {
        tracing::info_span!("sahayak.sweep", max_age_days = $max_age_days)
    };
}

/// Create a remote fetch span.
#[macro_export]
macro_rules! fetch_span {
    ($key:expr) => {
        tracing::info_span!("sahayak.fetch", key = %$key)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PREFETCH: &str = "sahayak.prefetch";
    pub const LOOKUP: &str = "sahayak.lookup";
    pub const SWEEP: &str = "sahayak.sweep";
    pub const FETCH: &str = "sahayak.fetch";
}
