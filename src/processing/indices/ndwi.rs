// src/processing/indices/ndwi.rs
use crate::processing::IndexCalculator;
use crate::raster::{BandSet, RasterBand};

/// Normalized Difference Water Index (NDWI) calculator.
///
/// NDWI = (NIR - SWIR) / (NIR + SWIR), from B08 and B11. A pixel whose
/// denominator is exactly zero resolves to 0.
pub struct NDWI {
    name: String,
}

impl NDWI {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| "NDWI".to_string()),
        }
    }
}

impl IndexCalculator for NDWI {
    fn calculate(&self, bands: &BandSet) -> RasterBand {
        super::map2(&bands.b08, &bands.b11, |nir, swir| {
            let denominator = nir + swir;
            if denominator == 0.0 {
                0.0
            } else {
                (nir - swir) / denominator
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
