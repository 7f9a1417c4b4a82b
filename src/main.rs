// src/main.rs
use anyhow::Result;
use clap::Parser;
use itertools::Itertools;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use fieldscope::cli::{Cli, Commands};
use fieldscope::fields::FIELD_GEOMETRIES;
use fieldscope::processing::{calculate_spectral_indices, IndexLayer};
use fieldscope::raster::{Band, RasterBand};
use fieldscope::service::{Sentinel2Service, DEFAULT_FETCH_DELAY};

#[derive(Serialize)]
struct LayerStats {
    layer: String,
    min: f32,
    max: f32,
    mean: f32,
}

fn raster_stats(layer: &str, raster: &RasterBand) -> LayerStats {
    let data = raster.data();
    let (min, max) = data
        .iter()
        .copied()
        .minmax()
        .into_option()
        .unwrap_or((0.0, 0.0));
    let mean = if data.is_empty() {
        0.0
    } else {
        data.iter().sum::<f32>() / data.len() as f32
    };
    LayerStats {
        layer: layer.to_string(),
        min,
        max,
        mean,
    }
}

fn print_stats(stats: &[LayerStats], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
    } else {
        for s in stats {
            println!(
                "{:<26} min {:>8.4}  mean {:>8.4}  max {:>8.4}",
                s.layer, s.min, s.mean, s.max
            );
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let service = Sentinel2Service::new(cli.grid_size, DEFAULT_FETCH_DELAY);

    match &cli.command {
        Commands::Fields => {
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&FIELD_GEOMETRIES)?);
            } else {
                for field in &FIELD_GEOMETRIES {
                    println!(
                        "{:<10} {:<14} center {:.4}, {:.4}",
                        field.id, field.name, field.center.lat, field.center.lon
                    );
                }
            }
        }
        Commands::Dates { field } => {
            let dates = service.get_available_dates(field);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&dates)?);
            } else {
                for date in dates {
                    println!("{date}");
                }
            }
        }
        Commands::Bands { field, date } => {
            info!(field = %field, "fetching acquisition");
            let dataset = service.fetch_sentinel2_data(field, date.as_deref()).await?;
            if !cli.json {
                println!(
                    "acquisition {}  cloud cover {:.1}%  resolution {}m",
                    dataset.metadata.acquisition_date,
                    dataset.metadata.cloud_cover,
                    dataset.metadata.resolution
                );
            }
            let stats: Vec<LayerStats> = Band::ALL
                .iter()
                .map(|b| raster_stats(b.label(), dataset.bands.band(*b)))
                .collect();
            print_stats(&stats, cli.json)?;
        }
        Commands::Indices { field, date, layer } => {
            info!(field = %field, "fetching acquisition");
            let dataset = service.fetch_sentinel2_data(field, date.as_deref()).await?;
            let indices = calculate_spectral_indices(&dataset);
            let layers: Vec<IndexLayer> = match layer {
                Some(name) => vec![IndexLayer::from_name(name)],
                None => IndexLayer::ALL.to_vec(),
            };
            let stats: Vec<LayerStats> = layers
                .iter()
                .map(|l| raster_stats(l.as_str(), indices.layer(*l)))
                .collect();
            print_stats(&stats, cli.json)?;
        }
    }

    Ok(())
}
