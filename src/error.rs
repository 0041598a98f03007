use crate::casing::CasingStyle;
use thiserror::Error;

/// Errors raised by the casing transformer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CasingError {
    /// The requested style can be detected but not produced.
    #[error("cannot convert a string to {0} casing")]
    InvalidTargetStyle(CasingStyle),
}

/// Errors raised by the numeric helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NumError {
    #[error("the minimum value is larger than the maximum value")]
    InvalidRange,

    #[error("attempted to take a modulus by zero")]
    DivideByZero,

    #[error("cannot map from a range with zero length")]
    EmptyInputRange,

    #[error("value cannot be represented in the target type")]
    Unrepresentable,
}
