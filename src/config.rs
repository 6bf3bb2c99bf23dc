//! Game configuration
//!
//! Word length bounds and attempt limit for every round of a session.

use std::ops::RangeInclusive;
use thiserror::Error;

/// Shortest selectable word length by default
pub const DEFAULT_MIN_LENGTH: usize = 5;
/// Longest selectable word length by default
pub const DEFAULT_MAX_LENGTH: usize = 10;
/// Guesses allowed per round by default
pub const DEFAULT_ATTEMPT_LIMIT: usize = 6;

/// Invalid configuration values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("minimum word length must be at least 1")]
    ZeroLength,
    #[error("minimum word length {min} is greater than maximum {max}")]
    EmptyLengthRange { min: usize, max: usize },
    #[error("attempt limit must be at least 1")]
    ZeroAttempts,
}

/// Validated game settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    min_length: usize,
    max_length: usize,
    attempt_limit: usize,
}

impl GameConfig {
    /// Build a configuration
    ///
    /// # Errors
    /// Returns `ConfigError` if the length range is empty or starts at zero,
    /// or if the attempt limit is zero.
    pub fn new(
        min_length: usize,
        max_length: usize,
        attempt_limit: usize,
    ) -> Result<Self, ConfigError> {
        if min_length == 0 {
            return Err(ConfigError::ZeroLength);
        }
        if min_length > max_length {
            return Err(ConfigError::EmptyLengthRange {
                min: min_length,
                max: max_length,
            });
        }
        if attempt_limit == 0 {
            return Err(ConfigError::ZeroAttempts);
        }

        Ok(Self {
            min_length,
            max_length,
            attempt_limit,
        })
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    #[must_use]
    pub const fn length_range(&self) -> RangeInclusive<usize> {
        self.min_length..=self.max_length
    }

    #[must_use]
    pub const fn attempt_limit(&self) -> usize {
        self.attempt_limit
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            attempt_limit: DEFAULT_ATTEMPT_LIMIT,
        }
    }
}
