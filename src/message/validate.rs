//! Advisory checks against the protocol's size limits.

use crate::error::ValidationError;

use super::types::{Message, MAX_MESSAGE_LENGTH, MAX_PARAMS};

/// Length of the CR-LF line terminator.
const TERMINATOR_LEN: usize = 2;

impl Message {
    /// Check the message against the 512-byte and 15-parameter limits.
    ///
    /// Every violation is reported, not just the first. Construction and
    /// transmission are never blocked by these checks.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        let length = self.to_string().len() + TERMINATOR_LEN;
        if length > MAX_MESSAGE_LENGTH {
            errors.push(ValidationError::TooLong {
                length,
                max: MAX_MESSAGE_LENGTH,
            });
        }

        let count = self.params.len();
        if count > MAX_PARAMS {
            errors.push(ValidationError::TooManyParams {
                count,
                max: MAX_PARAMS,
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether [`validate`](Self::validate) finds no violations.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}
