//! Infrastructure layer for the appearance settings.
//!
//! Contains OS-facing adapters: the settings file repository, the window
//! scaler, and the command bridge used by the presentation layer.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `appearance_core`, but MUST NOT be imported by the `application` or domain
//! layers.

pub mod storage;
pub mod ui_bridge;
pub mod window;
