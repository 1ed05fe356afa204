//! cmaps - inspect, resample and preview colormaps
//!
//! This is the main entry point for the cmaps command-line tool.

use anyhow::Context;
use tracing::{error, info};

use cmaps::config::{Command, OutputFormat};
use cmaps::interpolation::get_interpolator;
use cmaps::{init_tracing, log_timed_operation, render, ColormapRegistry, Config};

fn main() -> anyhow::Result<()> {
    // Load configuration
    let (config, command) = Config::load().map_err(|e| {
        eprintln!("Configuration error: {}", e);
        e
    })?;

    init_tracing(&config.log_level);

    // Validate configuration
    config.validate().map_err(|e| {
        error!("Invalid configuration: {}", e);
        e
    })?;

    info!("Starting cmaps v{}", env!("CARGO_PKG_VERSION"));

    let registry = log_timed_operation("load_registry", || ColormapRegistry::from_config(&config))
        .with_context(|| {
            format!(
                "failed to load colormaps from {}",
                config.data.file_dir.display()
            )
        })?;

    info!("Found {} colormaps", registry.len());

    let interpolator = get_interpolator(&config.data.interpolation_method)?;
    let lookup = |name: &str, lutsize: Option<usize>, reverse: bool| {
        let lutsize = lutsize.or(config.data.default_lutsize);
        registry
            .get_cmap_with(name, lutsize, reverse, interpolator.as_ref())
            .with_context(|| format!("cannot resolve colormap '{}'", name))
    };

    match command {
        Command::List => {
            for name in registry.names() {
                println!("{}", name);
            }
        }
        Command::Show {
            name,
            lutsize,
            reverse,
            format,
        } => {
            let table = lookup(&name, lutsize, reverse)?;
            match format {
                OutputFormat::Text => print!("{}", table),
                OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&table)?),
            }
        }
        Command::Segment { name, anchors } => {
            let table = lookup(&name, None, false)?;
            let segment = table.to_segment(anchors.unwrap_or(table.len()))?;
            println!("{}", serde_json::to_string_pretty(&segment.segment_data())?);
        }
        Command::Plot {
            name,
            output,
            width,
            height,
            lutsize,
            reverse,
        } => {
            let table = lookup(&name, lutsize, reverse)?;
            let width = width.unwrap_or(config.render.width);
            let height = height.unwrap_or(config.render.height);
            let img = render::colorbar(&table, width, height)?;
            render::save_png(&img, &output)?;
            info!("Wrote {} to {}", table.name(), output.display());
        }
    }

    Ok(())
}
