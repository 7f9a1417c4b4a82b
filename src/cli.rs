// src/cli.rs
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fieldscope")]
#[command(about = "Synthetic Sentinel-2 spectral index engine for farm fields")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emit JSON instead of plain text
    #[arg(long, global = true)]
    pub json: bool,

    /// Grid size of the synthesized rasters
    #[arg(long, default_value = "80", global = true)]
    pub grid_size: usize,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List known fields and their geometry
    Fields,

    /// List available acquisition dates for a field
    Dates {
        /// Field id (e.g. field-1)
        field: String,
    },

    /// Synthesize an acquisition and report per-band statistics
    Bands {
        /// Field id (e.g. field-1)
        field: String,

        /// Acquisition date (YYYY-MM-DD); defaults to latest
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Synthesize an acquisition and report spectral index statistics
    Indices {
        /// Field id (e.g. field-1)
        field: String,

        /// Acquisition date (YYYY-MM-DD); defaults to latest
        #[arg(short, long)]
        date: Option<String>,

        /// Restrict output to one layer (unknown names fall back to ndvi)
        #[arg(short, long)]
        layer: Option<String>,
    },
}
