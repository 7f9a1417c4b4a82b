// src/raster.rs
use serde::Serialize;

/// A single spectral band: a rectangular grid of reflectance-like values,
/// stored flat in row-major order with the shape carried alongside.
#[derive(Debug, Clone, PartialEq)]
pub struct RasterBand {
    shape: (usize, usize), // (rows, cols)
    data: Vec<f32>,
}

impl RasterBand {
    pub fn new(shape: (usize, usize), data: Vec<f32>) -> Self {
        debug_assert_eq!(shape.0 * shape.1, data.len());
        Self { shape, data }
    }

    /// Band of uniform value.
    pub fn filled(shape: (usize, usize), value: f32) -> Self {
        Self {
            shape,
            data: vec![value; shape.0 * shape.1],
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape.0
    }

    pub fn cols(&self) -> usize {
        self.shape.1
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Bounds-checked pixel read.
    pub fn get(&self, row: usize, col: usize) -> Option<f32> {
        if row < self.shape.0 && col < self.shape.1 {
            Some(self.data[row * self.shape.1 + col])
        } else {
            None
        }
    }

    /// Pixel read that treats out-of-range coordinates as 0. Index math uses
    /// this so a malformed upstream band degrades to a zero fill instead of
    /// panicking.
    pub fn get_or_zero(&self, row: usize, col: usize) -> f32 {
        self.get(row, col).unwrap_or(0.0)
    }
}

/// Sentinel-2 band identifiers at the resolutions this engine simulates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    B02,
    B03,
    B04,
    B05,
    B06,
    B07,
    B08,
    B8A,
    B11,
    B12,
}

impl Band {
    pub const ALL: [Band; 10] = [
        Band::B02,
        Band::B03,
        Band::B04,
        Band::B05,
        Band::B06,
        Band::B07,
        Band::B08,
        Band::B8A,
        Band::B11,
        Band::B12,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Band::B02 => "B02 (Blue, 490nm)",
            Band::B03 => "B03 (Green, 560nm)",
            Band::B04 => "B04 (Red, 665nm)",
            Band::B05 => "B05 (Red Edge, 705nm)",
            Band::B06 => "B06 (Red Edge, 740nm)",
            Band::B07 => "B07 (Red Edge, 783nm)",
            Band::B08 => "B08 (NIR, 842nm)",
            Band::B8A => "B8A (Narrow NIR, 865nm)",
            Band::B11 => "B11 (SWIR, 1610nm)",
            Band::B12 => "B12 (SWIR, 2190nm)",
        }
    }

    /// Nominal reflectance range the synthesizer targets for this band.
    pub fn nominal_range(&self) -> (f32, f32) {
        match self {
            Band::B02 => (0.1, 0.2),
            Band::B03 => (0.2, 0.3),
            Band::B04 => (0.3, 0.4),
            Band::B05 => (0.4, 0.5),
            Band::B06 => (0.5, 0.6),
            Band::B07 => (0.6, 0.7),
            Band::B08 => (0.7, 0.8),
            Band::B8A => (0.75, 0.85),
            Band::B11 => (0.2, 0.4),
            Band::B12 => (0.1, 0.3),
        }
    }
}

/// The ten synthesized spectral bands of one acquisition. All bands share
/// identical square dimensions.
#[derive(Debug, Clone)]
pub struct BandSet {
    pub b02: RasterBand,
    pub b03: RasterBand,
    pub b04: RasterBand,
    pub b05: RasterBand,
    pub b06: RasterBand,
    pub b07: RasterBand,
    pub b08: RasterBand,
    pub b8a: RasterBand,
    pub b11: RasterBand,
    pub b12: RasterBand,
}

impl BandSet {
    pub fn band(&self, band: Band) -> &RasterBand {
        match band {
            Band::B02 => &self.b02,
            Band::B03 => &self.b03,
            Band::B04 => &self.b04,
            Band::B05 => &self.b05,
            Band::B06 => &self.b06,
            Band::B07 => &self.b07,
            Band::B08 => &self.b08,
            Band::B8A => &self.b8a,
            Band::B11 => &self.b11,
            Band::B12 => &self.b12,
        }
    }

    pub fn shape(&self) -> (usize, usize) {
        self.b02.shape()
    }
}

/// Geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct AcquisitionMetadata {
    /// ISO date (YYYY-MM-DD).
    pub acquisition_date: String,
    /// Synthetic cloud cover, percent in [0, 20).
    pub cloud_cover: f32,
    /// Meters per pixel. Always 10 for the simulated product.
    pub resolution: u32,
    /// Field center, copied from the static geometry table.
    pub coordinates: LatLon,
}

/// One synthesized acquisition: the band rasters plus their metadata.
/// Cached by the service under a (field, date) key.
#[derive(Debug, Clone)]
pub struct SatelliteDataset {
    pub bands: BandSet,
    pub metadata: AcquisitionMetadata,
}
