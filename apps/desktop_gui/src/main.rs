use std::path::PathBuf;

mod controller;
mod simulation;
mod ui;

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::ui::PanelApp;

#[derive(Parser, Debug)]
#[command(about = "Coefficient tuning panel")]
struct Args {
    /// Setting name shown in the panel description.
    #[arg(long, default_value = "custom")]
    label: String,
    /// Settings file; defaults to ./panel.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let settings = panel_core::load_settings(args.config.as_deref())
        .context("failed to load panel settings")?;
    tracing::info!(label = %args.label, ?settings, "starting tuning panel");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Coefficient Tuning Panel")
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([900.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Coefficient Tuning Panel",
        options,
        Box::new(move |_cc| Ok(Box::new(PanelApp::new(args.label, &settings)))),
    )
    .map_err(|err| anyhow::anyhow!("desktop window failed: {err}"))
}
