//! Recording window scaler for testing.
//!
//! Allows tests to observe every scale the settings store applied without a
//! real window.

use std::cell::RefCell;

use crate::application::settings_store::WindowScaler;

/// A [`WindowScaler`] that records the stored scale of every call.
#[derive(Debug, Default)]
pub struct RecordingWindowScaler {
    calls: RefCell<Vec<f32>>,
}

impl RecordingWindowScaler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every scale passed to `apply_scale_to_window`, oldest first.
    pub fn calls(&self) -> Vec<f32> {
        self.calls.borrow().clone()
    }
}

impl WindowScaler for RecordingWindowScaler {
    fn apply_scale_to_window(&self, scale: f32) {
        self.calls.borrow_mut().push(scale);
    }
}
