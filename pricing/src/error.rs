use thiserror::Error;

pub type Result<T> = std::result::Result<T, PricingError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PricingError {
    /// A structural precondition on an input does not hold.
    #[error("invalid parameter `{field}` = {value}: {reason}")]
    InvalidParameter {
        field: &'static str,
        value: f64,
        reason: &'static str,
    },
    /// The inputs are valid but the evaluation left the finite range of f64.
    #[error("domain error: {message}")]
    DomainError { message: String },
}

impl PricingError {
    pub fn invalid(field: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            field,
            value,
            reason,
        }
    }

    pub fn domain(message: impl Into<String>) -> Self {
        Self::DomainError {
            message: message.into(),
        }
    }

    /// The name of the offending field, if this is a parameter error.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidParameter { field, .. } => Some(field),
            Self::DomainError { .. } => None,
        }
    }
}

/// Fails unless `value` is finite and strictly positive.
pub fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() {
        return Err(PricingError::invalid(field, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(PricingError::invalid(field, value, "must be positive"));
    }
    Ok(())
}
