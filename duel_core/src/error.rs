//! Errors raised while validating battle input

use thiserror::Error;

/// Input rejected before a battle is set up
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DuelError {
    #[error("character `{name}` cannot enter battle: {reason}")]
    InvalidCharacterState { name: String, reason: String },
    #[error("level {level} is outside the supported range 1..=1000")]
    InvalidLevel { level: u32 },
    #[error("battle constants are unusable: {reason}")]
    InvalidConstants { reason: String },
}

impl DuelError {
    pub(crate) fn character(name: &str, reason: impl Into<String>) -> Self {
        DuelError::InvalidCharacterState {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
