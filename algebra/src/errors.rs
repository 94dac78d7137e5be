use ark_std::{error, fmt};

/// Errors raised by the algebra backend.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AlgebraError {
    /// Could not decode an object from its byte representation.
    DeserializationError,
    /// Could not encode an object into its byte representation.
    SerializationError,
    /// The element has no multiplicative inverse.
    GroupInversionError,
    /// Unexpected parameter for method or function.
    ParameterError,
}

impl fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use AlgebraError::*;
        f.write_str(match self {
            DeserializationError => "Could not deserialize object.",
            SerializationError => "Could not serialize object.",
            GroupInversionError => "Group element not invertible.",
            ParameterError => "Unexpected parameter for method or function.",
        })
    }
}

impl error::Error for AlgebraError {}
