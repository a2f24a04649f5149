mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use anyhow::{Context, Result};
use app::ReliabilityApp;
use clap::Parser;
use eframe::egui;
use reliability_viewer::data::loader;
use reliability_viewer::BrowserConfig;
use state::AppState;

#[derive(Parser, Debug)]
#[command(name = "reliability-viewer")]
#[command(about = "Browse and compare vehicles by reliability index", long_about = None)]
struct Args {
    /// Dataset file (.json, .csv or .parquet); the bundled data is used otherwise
    dataset: Option<PathBuf>,

    /// JSON file overriding the browser limits
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&args.log_level))
        .init();

    let config = match &args.config {
        Some(path) => BrowserConfig::from_file(path)?,
        None => BrowserConfig::default(),
    };
    log::debug!("Using {config:?}");

    let mut state = AppState::new(config.clone(), loader::bundled()?);
    if let Some(path) = &args.dataset {
        state.open_path(path);
    }

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(config.window_size)
        .with_min_inner_size([720.0, 480.0]);
    match eframe::icon_data::from_png_bytes(include_bytes!("../assets/logo.png")) {
        Ok(icon) => viewport = viewport.with_icon(icon),
        Err(e) => log::warn!("Could not decode window icon: {e}"),
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Reliability Viewer – Fiabilité automobile",
        options,
        Box::new(|cc| {
            // Install image loaders so egui can render png/jpg/etc.
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(ReliabilityApp::new(state)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
    .context("running the viewer")
}
