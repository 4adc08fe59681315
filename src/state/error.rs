//! Failures of simulated view actions (claim, schedule, complete, ...).

pub use access::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ActionError {
    #[error("no item with id {0}")]
    NotFound(u32),
    #[error("listing {0} has already been claimed")]
    AlreadyClaimed(u32),
    #[error("cannot move from {from} to {to}")]
    InvalidTransition { from: &'static str, to: &'static str },
    #[error("{day}: start must be a valid time before end")]
    InvalidTimeWindow { day: &'static str },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: u32, max: u32 },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Require a non-blank form value, returning it trimmed.
///
/// # Errors
///
/// `MissingField(field)` when `value` is empty after trimming.
pub fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_owned())
}
