//! Employee Form - desktop data-entry form for employee records.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use employee_form as app;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::config::{AppConfig, ConfigLoadResult, LoggingConfig};
use app::ui::App;
use app::{AppError, Result};

/// Desktop data-entry form for employee records.
#[derive(Parser)]
#[command(name = "employee-form")]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long)]
    dev: bool,

    /// Path to the config file (overrides --dev)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the default config to the config path and exit
    #[arg(long)]
    init_config: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Determine config path based on mode
    let config_path = match cli.config {
        Some(path) => path,
        None if cli.dev => PathBuf::from("config.toml"),
        None => AppConfig::default_path(),
    };

    if cli.init_config {
        write_default_config(&config_path).context("Failed to write default config")?;
        println!("Default config written to {}", config_path.display());
        return Ok(());
    }

    let (config, config_error) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => (config, None),
        ConfigLoadResult::Missing => (AppConfig::default(), None),
        ConfigLoadResult::Invalid(e) => (AppConfig::default(), Some(e.to_string())),
    };

    // Initialize logging
    let _log_guard = init_logging(&config.logging).context("Failed to initialize logging")?;

    tracing::info!("Employee Form starting...");
    tracing::info!("Config path: {:?}", config_path);
    match &config_error {
        Some(e) => tracing::warn!("Config invalid, using defaults: {}", e),
        None => tracing::info!(
            "Reference data: {} genders, {} departments, {} designations",
            config.reference.genders.len(),
            config.reference.departments.len(),
            config.reference.designations.len()
        ),
    }

    run_app(config, config_error).context("Employee Form exited with an error")?;
    Ok(())
}

/// Set up console logging, plus a daily log file when a directory is configured.
fn init_logging(logging: &LoggingConfig) -> anyhow::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(&logging.level))?;
    let registry = tracing_subscriber::registry().with(filter).with(fmt::layer());

    match &logging.directory {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "employee-form.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            registry.with(fmt::layer().with_writer(writer).with_ansi(false)).init();
            Ok(Some(guard))
        }
        None => {
            registry.init();
            Ok(None)
        }
    }
}

fn write_default_config(path: &Path) -> Result<()> {
    AppConfig::default().save(path)?;
    Ok(())
}

/// Run the form window.
fn run_app(config: AppConfig, config_error: Option<String>) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Form")
            .with_inner_size([config.ui.window_width, config.ui.window_height])
            .with_min_inner_size([640.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Employee Form",
        options,
        Box::new(move |cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(&config, config_error)))
        }),
    )
    .map_err(|e| AppError::ui(e.to_string()))
}
