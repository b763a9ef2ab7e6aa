use std::fmt;

/// Errors surfaced by the fallible library entry points.
///
/// Matrix arithmetic deeper in the crate treats shape misuse as programmer
/// error and panics; the constructors, loss and training functions validate
/// their inputs up front and return one of these instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Operand dimensions are incompatible, or a class label falls outside
    /// the valid range for the configured output width.
    ShapeMismatch {
        /// Context for the mismatch (e.g. "input columns", "label").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value (for labels, the exclusive upper bound).
        expected: usize,
    },

    /// A size or hyperparameter that must be positive was zero.
    InvalidConfig(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ShapeMismatch { what, got, expected } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            Error::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
        }
    }
}

impl std::error::Error for Error {}
