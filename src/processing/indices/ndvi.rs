// src/processing/indices/ndvi.rs
use crate::processing::IndexCalculator;
use crate::raster::{BandSet, RasterBand};

/// Normalized Difference Vegetation Index (NDVI) calculator.
///
/// NDVI = (NIR - RED) / (NIR + RED), from B08 and B04. A pixel whose
/// denominator is exactly zero resolves to 0.
pub struct NDVI {
    name: String,
}

impl NDVI {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| "NDVI".to_string()),
        }
    }
}

impl IndexCalculator for NDVI {
    fn calculate(&self, bands: &BandSet) -> RasterBand {
        super::map2(&bands.b08, &bands.b04, |nir, red| {
            let denominator = nir + red;
            if denominator == 0.0 {
                0.0
            } else {
                (nir - red) / denominator
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
