//! Window scaling infrastructure.
//!
//! The settings store only says "apply this stored scale".  A stored scale of
//! `0.0` means "platform default", which the host resolves by reading the
//! [`SCALE_ENV_VAR`] environment variable and otherwise using `1.0`.
//!
//! # Testability
//!
//! The `WindowScaler` trait allows tests to record applied scales without a
//! real window; see [`mock::RecordingWindowScaler`].

use std::cell::Cell;

use appearance_core::resolve_scale;
use tracing::info;

use crate::application::settings_store::WindowScaler;

pub mod mock;

/// Environment variable consulted when the stored scale is `0.0`.
pub const SCALE_ENV_VAR: &str = "APPEARANCE_SCALE";

/// Resolves the scale the window should use for a stored value, consulting
/// [`SCALE_ENV_VAR`] when the stored value is the platform default.
pub fn effective_scale(stored: f32) -> f32 {
    let env = std::env::var(SCALE_ENV_VAR).ok();
    resolve_scale(stored, env.as_deref())
}

/// Window scaler for headless hosts: resolves the effective scale and logs it.
#[derive(Debug, Default)]
pub struct LoggingWindowScaler {
    applied: Cell<Option<f32>>,
}

impl LoggingWindowScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective scale from the last `apply_scale_to_window` call.
    pub fn last_applied(&self) -> Option<f32> {
        self.applied.get()
    }
}

impl WindowScaler for LoggingWindowScaler {
    fn apply_scale_to_window(&self, scale: f32) {
        let effective = effective_scale(scale);
        info!(stored = scale, effective, "applying window scale");
        self.applied.set(Some(effective));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_scaler_records_explicit_scale() {
        // Arrange
        let scaler = LoggingWindowScaler::new();
        assert_eq!(scaler.last_applied(), None);

        // Act
        scaler.apply_scale_to_window(1.3);

        // Assert: an explicit scale never consults the environment
        assert_eq!(scaler.last_applied(), Some(1.3));
    }

    #[test]
    fn test_effective_scale_is_positive_for_platform_default() {
        // The environment may or may not set the variable; either way the
        // result must be a usable scale.
        let scale = effective_scale(0.0);
        assert!(scale.is_finite() && scale > 0.0);
    }
}
