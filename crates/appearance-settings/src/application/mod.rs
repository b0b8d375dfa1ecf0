//! Application layer for the appearance settings screen.
//!
//! # What is the "application" layer? (for beginners)
//!
//! In Clean Architecture the *application* layer sits between the domain
//! (pure value types in `appearance-core`) and the infrastructure (files,
//! environment variables, the real window).
//!
//! Code in this layer:
//!
//! - **Orchestrates** domain values to fulfil a user action ("pick the red
//!   accent", "apply").
//! - **Depends on abstractions** (the `SettingsRepository` and `WindowScaler`
//!   traits) rather than concrete implementations.
//! - **Contains no file system access** of its own.
//!
//! # Sub-modules
//!
//! - **`settings_store`** – Owns the settings record; load, mutate, apply.
//! - **`selection`**      – Palette swatches and the observer set refreshed on
//!   every accent change.
//! - **`preview`**        – The preview image derived from the theme.

pub mod preview;
pub mod selection;
pub mod settings_store;
