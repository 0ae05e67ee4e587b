use thiserror::Error;

/// Reasons a set of airfoil parameters is rejected before any geometry is generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProfileError {
    #[error("both a NACA number ({naca}) and a thickness ({thickness}) were given, use only one")]
    ConflictingInput { naca: String, thickness: f64 },

    #[error("only 4-digit NACA numbers supported, got \"{0}\"")]
    UnsupportedFormat(String),

    #[error("NACA number \"{0}\" contains non-digit characters")]
    InvalidDigits(String),

    #[error("NACA number must be given as text, got {0}")]
    TypeMismatch(String),

    #[error("invalid {field}: {reason}")]
    InvalidParameter { field: &'static str, reason: String },

    #[error("NACA number \"{0}\" has camber but no camber position")]
    UndefinedCamberPosition(String),
}

impl ProfileError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ProfileError::InvalidParameter {
            field,
            reason: reason.into(),
        }
    }
}
