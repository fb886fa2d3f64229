use std::path::PathBuf;

use cellray_core::{ShadowMode, ViewerConfig};
use clap::{Parser, ValueEnum};
use log::LevelFilter;

/// Log levels accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Shadow ray direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShadowArg {
    /// Cast along the negated normal (finds no shadows on outward faces)
    SurfaceNormal,
    /// Cast toward the light
    TowardLight,
}

impl From<ShadowArg> for ShadowMode {
    fn from(arg: ShadowArg) -> Self {
        match arg {
            ShadowArg::SurfaceNormal => ShadowMode::SurfaceNormal,
            ShadowArg::TowardLight => ShadowMode::TowardLight,
        }
    }
}

/// Command line arguments
#[derive(Debug, Parser)]
#[command(name = "cellray")]
#[command(about = "A first-person ray tracer drawn in terminal cells")]
pub struct Args {
    /// JSON configuration file; built-in defaults are used without it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Grid width in cells
    #[arg(long)]
    pub width: Option<usize>,

    /// Grid height in cells
    #[arg(long)]
    pub height: Option<usize>,

    /// Antialiasing density (N x N samples per cell)
    #[arg(long)]
    pub aa: Option<i32>,

    /// How shadow rays are aimed
    #[arg(long, value_enum)]
    pub shadow_mode: Option<ShadowArg>,

    /// Render this many simulation steps without a terminal, then exit
    #[arg(long)]
    pub frames: Option<u32>,

    /// After a headless run, save the last frame as a PNG here
    #[arg(long, requires = "frames")]
    pub dump: Option<PathBuf>,

    /// Write logs to this file (the terminal is busy drawing)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Logging level; falls back to RUST_LOG, then to "info" with a log file or "warn" without
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevel>,
}

impl Args {
    /// Apply command line overrides on top of a loaded configuration.
    pub fn apply_overrides(&self, config: &mut ViewerConfig) {
        if let Some(width) = self.width {
            config.render.width = width;
        }
        if let Some(height) = self.height {
            config.render.height = height;
        }
        if let Some(aa) = self.aa {
            config.render.aa_sample_sqrt = aa;
        }
        if let Some(mode) = self.shadow_mode {
            config.render.shadow_mode = mode.into();
        }
    }
}
