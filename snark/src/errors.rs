use pinocchio_algebra::prelude::AlgebraError;
use std::{error, fmt};

pub(crate) type Result<T> = core::result::Result<T, SnarkError>;

/// Errors raised while flattening a circuit or running the proof system.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SnarkError {
    /// Algebra error
    Algebra(AlgebraError),
    /// A constraint reads the signal before any constraint assigns it.
    UseBeforeSet(usize),
    /// A constraint assigns a signal that is already assigned.
    DoubleAssign(usize),
    /// The number of provided inputs differs from the circuit declaration.
    InputsLengthMismatch,
    /// Division by zero during witness evaluation.
    DivisionByZero,
    /// Polynomial division by a divisor whose leading coefficient is zero.
    IllFormedDivisor,
    /// The combined witness polynomial is not divisible by the target.
    UnsatisfiedWitness,
    /// The trusted-setup consistency self-check failed; this indicates a bug
    /// in the scalar arithmetic or the curve backend, never a bad circuit.
    SetupInternalError,
    /// The entropy source failed to produce random bytes.
    EntropyFailure,
}

impl fmt::Display for SnarkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SnarkError::*;
        match self {
            Algebra(e) => write!(f, "Algebra: {}", e),
            UseBeforeSet(signal) => write!(f, "Signal {} is used before it is set.", signal),
            DoubleAssign(signal) => write!(f, "Signal {} is assigned more than once.", signal),
            InputsLengthMismatch => f.write_str("Given inputs do not match the circuit inputs."),
            DivisionByZero => f.write_str("Division by zero."),
            IllFormedDivisor => {
                f.write_str("The leading coefficient of the divisor polynomial is zero.")
            }
            UnsatisfiedWitness => {
                f.write_str("The witness does not satisfy the constraint system.")
            }
            SetupInternalError => f.write_str("The trusted-setup self-check failed."),
            EntropyFailure => f.write_str("The entropy source failed."),
        }
    }
}

impl error::Error for SnarkError {}

impl From<AlgebraError> for SnarkError {
    fn from(e: AlgebraError) -> SnarkError {
        SnarkError::Algebra(e)
    }
}
