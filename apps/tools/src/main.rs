use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use panel_core::{
    progression::{evaluate, fixed_point, identity},
    render::SeriesRenderer,
    svg::SvgSurface,
    CoefficientPair, SessionKey, Settings,
};

#[derive(Parser, Debug)]
struct Cli {
    /// Settings file; defaults to ./panel.toml when present.
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the progression series for a coefficient pair.
    Series {
        #[arg(long, allow_hyphen_values = true)]
        a: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        b: Option<f64>,
        /// Print the identity series instead.
        #[arg(long)]
        identity: bool,
        #[arg(long)]
        json: bool,
    },
    /// Render the preview chart to an SVG file.
    Chart {
        #[arg(long, allow_hyphen_values = true)]
        a: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        b: Option<f64>,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print the data route for a session key.
    Route { key: String },
}

fn pair_from(settings: &Settings, a: Option<f64>, b: Option<f64>) -> CoefficientPair {
    CoefficientPair::new(a.unwrap_or(settings.initial_a), b.unwrap_or(settings.initial_b))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();
    let cli = Cli::parse();
    let settings =
        panel_core::load_settings(cli.config.as_deref()).context("failed to load panel settings")?;

    match cli.command {
        Command::Series {
            a,
            b,
            identity: want_identity,
            json,
        } => {
            let pair = pair_from(&settings, a, b);
            let series = if want_identity {
                identity()
            } else {
                evaluate(pair)
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&series)?);
            } else {
                for point in series.points() {
                    println!("{:.2}\t{:.6}", point.x, point.y);
                }
            }
        }
        Command::Chart { a, b, out } => {
            let pair = pair_from(&settings, a, b);
            let mut surface = SvgSurface::new(settings.chart_width, settings.chart_height);
            SeriesRenderer::new(settings.margins()).render(&evaluate(pair), &identity(), &mut surface);
            surface.write_to(&out)?;
            tracing::info!(path = %out.display(), a = pair.a(), b = pair.b(), "chart written");
            match fixed_point(pair) {
                Some(value) => println!("wrote {} (fixed point {value:.3})", out.display()),
                None => println!("wrote {} (every point is fixed)", out.display()),
            }
        }
        Command::Route { key } => {
            println!("{}", SessionKey::new(key).route_under(&settings.data_route_prefix));
        }
    }

    Ok(())
}
