// src/processing/mod.rs
pub mod indices;

pub use indices::{Chlorophyll, EVI, LAI, NDVI, NDWI, SAVI};

use crate::raster::{BandSet, RasterBand, SatelliteDataset};

/// Per-pixel band-algebra transform producing a derived raster shaped like
/// its inputs.
pub trait IndexCalculator {
    fn calculate(&self, bands: &BandSet) -> RasterBand;
    fn name(&self) -> &str;
}

/// The six derived rasters computed from one acquisition. Always produced as
/// a complete set; each raster matches the source band dimensions.
#[derive(Debug, Clone)]
pub struct SpectralIndexSet {
    pub ndvi: RasterBand,
    pub evi: RasterBand,
    pub savi: RasterBand,
    pub ndwi: RasterBand,
    pub chlorophyll: RasterBand,
    pub lai: RasterBand,
}

/// Selectable visualization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexLayer {
    Ndvi,
    Evi,
    Savi,
    Ndwi,
    Chlorophyll,
    Lai,
}

impl IndexLayer {
    pub const ALL: [IndexLayer; 6] = [
        IndexLayer::Ndvi,
        IndexLayer::Evi,
        IndexLayer::Savi,
        IndexLayer::Ndwi,
        IndexLayer::Chlorophyll,
        IndexLayer::Lai,
    ];

    /// Unrecognized names resolve to NDVI so a bad layer name from the UI
    /// degrades to the default view instead of failing.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ndvi" => IndexLayer::Ndvi,
            "evi" => IndexLayer::Evi,
            "savi" => IndexLayer::Savi,
            "ndwi" => IndexLayer::Ndwi,
            "chlorophyll" => IndexLayer::Chlorophyll,
            "lai" => IndexLayer::Lai,
            _ => IndexLayer::Ndvi,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            IndexLayer::Ndvi => "ndvi",
            IndexLayer::Evi => "evi",
            IndexLayer::Savi => "savi",
            IndexLayer::Ndwi => "ndwi",
            IndexLayer::Chlorophyll => "chlorophyll",
            IndexLayer::Lai => "lai",
        }
    }
}

impl SpectralIndexSet {
    pub fn layer(&self, layer: IndexLayer) -> &RasterBand {
        match layer {
            IndexLayer::Ndvi => &self.ndvi,
            IndexLayer::Evi => &self.evi,
            IndexLayer::Savi => &self.savi,
            IndexLayer::Ndwi => &self.ndwi,
            IndexLayer::Chlorophyll => &self.chlorophyll,
            IndexLayer::Lai => &self.lai,
        }
    }
}

/// Derive all six spectral indices from an acquisition. Pure and idempotent;
/// recomputing from the same dataset yields identical rasters.
pub fn calculate_spectral_indices(dataset: &SatelliteDataset) -> SpectralIndexSet {
    let bands = &dataset.bands;
    SpectralIndexSet {
        ndvi: NDVI::new(None).calculate(bands),
        evi: EVI::new(None).calculate(bands),
        savi: SAVI::new(SAVI::DEFAULT_SOIL_FACTOR, None).calculate(bands),
        ndwi: NDWI::new(None).calculate(bands),
        chlorophyll: Chlorophyll::new(None).calculate(bands),
        lai: LAI::new(None).calculate(bands),
    }
}

/// Select the raster to visualize by layer name, falling back to NDVI on an
/// unknown name.
pub fn get_visualization_data<'a>(indices: &'a SpectralIndexSet, layer: &str) -> &'a RasterBand {
    indices.layer(IndexLayer::from_name(layer))
}
