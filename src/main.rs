#![allow(non_snake_case)]

mod app;
mod components;
mod config;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use buttonkit_core::{ButtonSize, ButtonTag};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::config::GalleryConfig;

/// Gallery configuration, set once from the command line and config file
static GALLERY_CONFIG: OnceLock<GalleryConfig> = OnceLock::new();

/// Get the gallery configuration (defaults if unset)
pub fn gallery_config() -> GalleryConfig {
    GALLERY_CONFIG.get().cloned().unwrap_or_default()
}

/// buttonkit gallery - every button configuration on one page
#[derive(Parser, Debug)]
#[command(name = "buttonkit-gallery")]
#[command(about = "Interactive gallery for buttonkit buttons")]
struct Args {
    /// JSON config file (size, tag, loading, href, label, class, loading_ms)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial preview size (xxsmall, xsmall, small, medium, large, xlarge)
    #[arg(short, long)]
    size: Option<ButtonSize>,

    /// Initial preview element (button or a)
    #[arg(short, long)]
    tag: Option<ButtonTag>,

    /// Start the preview in the loading state
    #[arg(short, long)]
    loading: bool,

    /// Log filter, overrides RUST_LOG (e.g. "debug" or "buttonkit_core=trace")
    #[arg(long)]
    log_level: Option<String>,
}

fn init_tracing(log_level: Option<&str>) {
    let filter = match log_level {
        Some(level) => EnvFilter::new(level),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,buttonkit=debug,buttonkit_core=debug")),
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing(args.log_level.as_deref());

    let config = config::load(args.config.as_deref())?.with_overrides(
        args.size,
        args.tag,
        args.loading,
    );

    tracing::info!(
        size = %config.size,
        tag = %config.tag,
        loading = config.loading,
        "Starting buttonkit gallery"
    );

    let _ = GALLERY_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("buttonkit gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(960.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
