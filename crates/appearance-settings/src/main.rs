//! Appearance settings: command-line host.
//!
//! Drives the same settings store a GUI settings screen would, so the stored
//! appearance can be inspected and changed from a terminal or a script.
//!
//! # Usage
//!
//! ```text
//! appearance-settings [--path <FILE>] show [--json]
//! appearance-settings [--path <FILE>] set [--theme <THEME>] [--accent <COLOUR>]
//!                                         [--scale <SCALE>] [--no-apply]
//! ```
//!
//! # Environment variable overrides
//!
//! | Variable                  | Description                                   |
//! |---------------------------|-----------------------------------------------|
//! | `APPEARANCE_SETTINGS_PATH`| Settings file to use instead of the default   |
//! | `APPEARANCE_SCALE`        | Window scale used while the stored scale is 0 |
//! | `RUST_LOG`                | Log filter (default `info`)                   |
//!
//! Logs go to stderr so `show --json` output stays machine-readable.

use std::path::PathBuf;
use std::rc::Rc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use appearance_settings::application::settings_store::SettingsStore;
use appearance_settings::infrastructure::storage::settings_file::FileSettingsRepository;
use appearance_settings::infrastructure::ui_bridge::{
    apply_appearance, get_appearance, update_appearance, AppearanceDto, AppearanceUpdateDto,
};
use appearance_settings::infrastructure::window::LoggingWindowScaler;

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Inspect and change the stored appearance settings.
#[derive(Debug, Parser)]
#[command(
    name = "appearance-settings",
    about = "Inspect and change theme, accent colour and window scale",
    version
)]
struct Cli {
    /// Settings file to read and write.
    ///
    /// Defaults to `appearance/settings.json` under the platform
    /// configuration directory.
    #[arg(long, global = true, env = "APPEARANCE_SETTINGS_PATH")]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the current settings.
    Show {
        /// Print the settings snapshot as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Change one or more settings and save them.
    Set {
        /// `dark`, `light` or `system`.
        #[arg(long)]
        theme: Option<String>,

        /// A palette colour: blue, green, yellow, orange, red or grey.
        #[arg(long)]
        accent: Option<String>,

        /// A preset name (tiny, small, normal, large, huge), a positive
        /// number, or `0` for the platform default.
        #[arg(long)]
        scale: Option<String>,

        /// Validate and print the result without saving it.
        #[arg(long)]
        no_apply: bool,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let repository = match cli.path {
        Some(path) => FileSettingsRepository::new(path),
        None => FileSettingsRepository::at_default_location(),
    };
    info!(path = %repository.path().display(), "using settings file");

    let mut store = SettingsStore::new(Rc::new(repository), Rc::new(LoggingWindowScaler::new()));
    store.register_palette_swatches();
    store.set_preview_listener(|variant| {
        debug!(image = variant.resource_name(), "preview updated");
    });

    match cli.command {
        Command::Show { json } => {
            let snapshot = into_data(get_appearance(&store).data, None)?;
            print_snapshot(&snapshot, json)?;
        }
        Command::Set {
            theme,
            accent,
            scale,
            no_apply,
        } => {
            if theme.is_none() && accent.is_none() && scale.is_none() {
                bail!("nothing to set: pass at least one of --theme, --accent or --scale");
            }

            let update = AppearanceUpdateDto {
                theme,
                accent,
                scale,
            };
            let result = update_appearance(&mut store, update);
            let snapshot = into_data(result.data, result.error)?;

            if no_apply {
                info!("--no-apply given, settings not saved");
            } else {
                let applied = apply_appearance(&store);
                if let Some(error) = applied.error {
                    bail!(error);
                }
            }
            print_snapshot(&snapshot, false)?;
        }
    }

    Ok(())
}

fn into_data(data: Option<AppearanceDto>, error: Option<String>) -> anyhow::Result<AppearanceDto> {
    match (data, error) {
        (Some(data), _) => Ok(data),
        (None, Some(error)) => bail!(error),
        (None, None) => bail!("command returned no data"),
    }
}

fn print_snapshot(snapshot: &AppearanceDto, json: bool) -> anyhow::Result<()> {
    if json {
        let text = serde_json::to_string_pretty(snapshot)
            .context("failed to serialise settings snapshot")?;
        println!("{text}");
        return Ok(());
    }

    println!("theme:   {}", snapshot.theme);
    println!("choices: {}", snapshot.theme_choices.join(", "));
    println!("preview: {}", snapshot.preview_image);
    let accent_note = if snapshot.accent_unset { " (unset)" } else { "" };
    println!("accent:  {}{accent_note}", snapshot.accent);
    for swatch in &snapshot.palette {
        let marker = if swatch.selected { '*' } else { ' ' };
        println!("  {marker} {:<7} {}", swatch.name, swatch.rgba);
    }
    match &snapshot.scale_preset {
        Some(preset) => println!("scale:   {} ({preset})", snapshot.scale),
        None if snapshot.scale == 0.0 => {
            println!("scale:   platform default (effective {})", snapshot.effective_scale)
        }
        None => println!("scale:   {}", snapshot.scale),
    }
    Ok(())
}
