//! V1 API handlers.

mod projects;
mod system;
mod tasks;

#[cfg(test)]
mod system_test;

pub use projects::*;
pub use system::*;
pub use tasks::*;

use super::ApiError;

/// Reject empty or whitespace-only text fields.
fn require_text(field: &str, value: String) -> Result<String, ApiError> {
    if value.trim().is_empty() {
        return Err(ApiError::InvalidInput(format!("{} must not be blank", field)));
    }
    Ok(value)
}
