//! Storage infrastructure: settings file persistence.
//!
//! This module provides a thin adapter between the settings store and the
//! file system.  The `settings_file` sub-module handles:
//!
//! - Resolving the platform-appropriate settings path.
//! - Reading the JSON settings file (defaults on first run).
//! - Writing the file back when the user presses Apply.
//!
//! The `memory` sub-module is an in-process repository for tests and for
//! hosts that do not persist settings.

pub mod memory;
pub mod settings_file;
