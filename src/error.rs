use thiserror::Error;

use crate::validate::ValidationError;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum GenerationError {
    /// Every attempt produced a town that failed validation. Carries the
    /// errors of the last attempt.
    #[error(
        "no valid town for seed '{seed}' after {attempts} attempt(s): {}",
        format_errors(.errors)
    )]
    Exhausted {
        seed: String,
        attempts: usize,
        errors: Vec<ValidationError>,
    },

    #[error("max_attempts must be at least 1")]
    ZeroAttempts,
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("[{}] {}", e.kind, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}
