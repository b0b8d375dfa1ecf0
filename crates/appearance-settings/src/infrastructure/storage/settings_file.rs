//! JSON-file persistence for the appearance settings.
//!
//! Reads and writes [`SettingsRecord`] at the platform-appropriate path:
//! - Windows:  `%APPDATA%\appearance\settings.json`
//! - Linux:    `~/.config/appearance/settings.json` (or `$XDG_CONFIG_HOME`)
//! - macOS:    `~/Library/Preferences/appearance/settings.json`
//!
//! # First run (for beginners)
//!
//! The first time the settings screen opens there is no file yet.  That is
//! not an error: [`load_settings`] creates the parent directory so the later
//! save will succeed, and returns the default record.
//!
//! # Permissions
//!
//! On Unix the directory is created `0700` (owner only) and the file is
//! written `0644` (owner read/write, everyone else read-only).
//!
//! # Crash safety
//!
//! Saving overwrites the whole file in place.  A crash in the middle of a
//! write can leave a truncated file; the next load then reports a decode
//! error and the screen falls back to defaults.

use std::fs;
use std::path::{Path, PathBuf};

use appearance_core::{decode_record, encode_record, SettingsRecord};
use tracing::{debug, warn};

use crate::application::settings_store::{SettingsRepository, StorageError};

/// Directory under the platform config base that holds the settings file.
const APP_DIR_NAME: &str = "appearance";

/// Name of the settings file.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[cfg(unix)]
const DIR_MODE: u32 = 0o700;

#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

// ── Storage path ──────────────────────────────────────────────────────────────

/// Resolves the full path to the settings file.
///
/// Falls back to `./settings.json` (with a warning) when the platform config
/// directory cannot be determined, e.g. in a stripped container without
/// `HOME`.
pub fn storage_path() -> PathBuf {
    match platform_config_dir() {
        Some(dir) => dir.join(APP_DIR_NAME).join(SETTINGS_FILE_NAME),
        None => {
            warn!("could not determine platform config directory; using ./{SETTINGS_FILE_NAME}");
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }
}

/// Resolves the platform config base directory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(PathBuf::from)
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| PathBuf::from(h).join("Library").join("Preferences"))
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        // XDG_CONFIG_HOME or ~/.config
        std::env::var_os("XDG_CONFIG_HOME")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
    }
}

// ── Load / save ───────────────────────────────────────────────────────────────

/// Loads the record at `path`, returning [`SettingsRecord::default()`] if the
/// file does not exist yet.
///
/// # Errors
///
/// Returns [`StorageError::Io`] for file-system errors other than "not found"
/// (including failure to create the parent directory on first run), and
/// [`StorageError::Codec`] if the content does not decode.
pub fn load_settings(path: &Path) -> Result<SettingsRecord, StorageError> {
    match fs::read(path) {
        Ok(bytes) => Ok(decode_record(&bytes)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("no settings file at {}; using defaults", path.display());
            if let Some(dir) = path.parent() {
                ensure_dir(dir)?;
            }
            Ok(SettingsRecord::default())
        }
        Err(source) => Err(StorageError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Persists `record` to `path`, overwriting any previous content.
///
/// Creates the parent directory if it does not exist.
///
/// # Errors
///
/// Returns [`StorageError::Io`] for file-system failures or
/// [`StorageError::Codec`] if encoding fails.
pub fn save_settings(path: &Path, record: &SettingsRecord) -> Result<(), StorageError> {
    if let Some(dir) = path.parent() {
        ensure_dir(dir)?;
    }

    let content = encode_record(record)?;
    fs::write(path, content).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(FILE_MODE)).map_err(|source| {
            StorageError::Io {
                path: path.to_path_buf(),
                source,
            }
        })?;
    }

    Ok(())
}

/// Creates `dir` and any missing parents.  Succeeds if it already exists.
fn ensure_dir(dir: &Path) -> Result<(), StorageError> {
    // `Path::new("settings.json").parent()` is `Some("")`: the working directory.
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(DIR_MODE);
    }

    builder.create(dir).map_err(|source| StorageError::Io {
        path: dir.to_path_buf(),
        source,
    })
}

// ── Repository ────────────────────────────────────────────────────────────────

/// [`SettingsRepository`] backed by a JSON file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSettingsRepository {
    path: PathBuf,
}

impl FileSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at [`storage_path()`].
    pub fn at_default_location() -> Self {
        Self::new(storage_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SettingsRepository for FileSettingsRepository {
    fn load(&self) -> Result<SettingsRecord, StorageError> {
        load_settings(&self.path)
    }

    fn save(&self, record: &SettingsRecord) -> Result<(), StorageError> {
        save_settings(&self.path, record)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use appearance_core::{AccentColor, Theme};

    /// A fresh, not-yet-created directory under the system temp dir.
    fn scratch_dir() -> PathBuf {
        std::env::temp_dir().join(format!("appearance_test_{}", uuid::Uuid::new_v4()))
    }

    fn sample_record() -> SettingsRecord {
        SettingsRecord {
            theme: Theme::Light,
            primary_color: Some(AccentColor::Red),
            scale: 1.3,
        }
    }

    // ── First run ─────────────────────────────────────────────────────────────

    #[test]
    fn test_load_missing_file_returns_default_and_creates_parent() {
        // Arrange
        let root = scratch_dir();
        let path = root.join("nested").join(SETTINGS_FILE_NAME);

        // Act
        let record = load_settings(&path).expect("first run must not be an error");

        // Assert
        assert_eq!(record, SettingsRecord::default());
        assert!(path.parent().unwrap().is_dir(), "parent directory must be created");
        assert!(!path.exists(), "load must not create the file itself");

        // Cleanup
        fs::remove_dir_all(&root).ok();
    }

    #[cfg(unix)]
    #[test]
    fn test_created_directory_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        load_settings(&path).unwrap();

        let mode = fs::metadata(&root).unwrap().permissions().mode() & 0o777;
        // The process umask can only remove bits from 0700.
        assert_eq!(mode & !0o700, 0, "directory mode was {mode:o}");

        fs::remove_dir_all(&root).ok();
    }

    // ── Save ──────────────────────────────────────────────────────────────────

    #[test]
    fn test_save_then_load_round_trip() {
        // Arrange
        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        let record = sample_record();

        // Act
        save_settings(&path, &record).expect("save");
        let loaded = load_settings(&path).expect("load");

        // Assert
        assert_eq!(loaded, record);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_repeated_save_does_not_accumulate() {
        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        let record = sample_record();

        save_settings(&path, &record).unwrap();
        let first = fs::read(&path).unwrap();
        save_settings(&path, &record).unwrap();
        let second = fs::read(&path).unwrap();

        assert_eq!(first, second);
        assert_eq!(load_settings(&path).unwrap(), record);

        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_save_overwrites_longer_previous_content() {
        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        fs::create_dir_all(&root).unwrap();
        let padded = format!(
            "{{ \"themeName\": \"dark\", \"pad\": \"{}\" }}",
            "x".repeat(4096)
        );
        fs::write(&path, padded).unwrap();

        save_settings(&path, &SettingsRecord::default()).unwrap();

        assert_eq!(load_settings(&path).unwrap(), SettingsRecord::default());

        fs::remove_dir_all(&root).ok();
    }

    #[cfg(unix)]
    #[test]
    fn test_saved_file_mode_is_0644() {
        use std::os::unix::fs::PermissionsExt;

        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        save_settings(&path, &sample_record()).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o644);

        fs::remove_dir_all(&root).ok();
    }

    // ── Failures ──────────────────────────────────────────────────────────────

    #[test]
    fn test_load_corrupt_file_returns_codec_error() {
        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        fs::create_dir_all(&root).unwrap();
        fs::write(&path, b"{ not json").unwrap();

        let result = load_settings(&path);

        assert!(matches!(result, Err(StorageError::Codec(_))), "got {result:?}");
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_load_directory_in_place_of_file_returns_io_error() {
        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        fs::create_dir_all(&path).unwrap();

        let result = load_settings(&path);

        assert!(matches!(result, Err(StorageError::Io { .. })), "got {result:?}");
        fs::remove_dir_all(&root).ok();
    }

    #[test]
    fn test_save_into_directory_path_returns_io_error() {
        let root = scratch_dir();
        let path = root.join(SETTINGS_FILE_NAME);
        fs::create_dir_all(&path).unwrap();

        let result = save_settings(&path, &sample_record());

        assert!(matches!(result, Err(StorageError::Io { .. })), "got {result:?}");
        fs::remove_dir_all(&root).ok();
    }

    // ── Path formation ────────────────────────────────────────────────────────

    #[test]
    fn test_storage_path_ends_with_settings_json() {
        let path = storage_path();
        assert!(
            path.ends_with(SETTINGS_FILE_NAME),
            "settings file must be named settings.json, got {path:?}"
        );
    }

    #[test]
    fn test_storage_path_uses_app_directory_when_platform_dir_known() {
        if platform_config_dir().is_some() {
            let path = storage_path();
            assert!(path.parent().unwrap().ends_with(APP_DIR_NAME), "got {path:?}");
        }
        // Without a platform config dir the fallback path is acceptable too.
    }

    #[test]
    fn test_ensure_dir_accepts_empty_parent() {
        assert!(ensure_dir(Path::new("")).is_ok());
    }

    // ── Repository ────────────────────────────────────────────────────────────

    #[test]
    fn test_file_repository_delegates_to_path() {
        let root = scratch_dir();
        let repo = FileSettingsRepository::new(root.join(SETTINGS_FILE_NAME));

        assert_eq!(repo.load().unwrap(), SettingsRecord::default());
        repo.save(&sample_record()).unwrap();
        assert_eq!(repo.load().unwrap(), sample_record());
        assert!(repo.path().is_file());

        fs::remove_dir_all(&root).ok();
    }
}
