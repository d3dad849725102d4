use thiserror::Error;

/// Crate specific Errors implementation.
#[derive(Debug, Error, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CronError {
    /// The input is not a valid five-field cron expression.
    ///
    /// Carries the offending expression verbatim. Every failure mode maps
    /// to this kind: wrong field count, an unrecognized field form, or an
    /// out-of-domain value.
    #[error("wrong pattern: {0}")]
    WrongPattern(String),
}
