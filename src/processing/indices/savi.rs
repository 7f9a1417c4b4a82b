// src/processing/indices/savi.rs
use crate::processing::IndexCalculator;
use crate::raster::{BandSet, RasterBand};

/// Soil Adjusted Vegetation Index (SAVI) calculator.
///
/// SAVI = (1 + L) * (NIR - RED) / (NIR + RED + L), from B08 and B04. A pixel
/// whose denominator is exactly zero resolves to 0.
pub struct SAVI {
    soil_factor: f32,
    name: String,
}

impl SAVI {
    pub const DEFAULT_SOIL_FACTOR: f32 = 0.5;

    pub fn new(soil_factor: f32, name: Option<String>) -> Self {
        Self {
            soil_factor,
            name: name.unwrap_or_else(|| "SAVI".to_string()),
        }
    }
}

impl IndexCalculator for SAVI {
    fn calculate(&self, bands: &BandSet) -> RasterBand {
        let l = self.soil_factor;

        super::map2(&bands.b08, &bands.b04, move |nir, red| {
            let denominator = nir + red + l;
            if denominator == 0.0 {
                0.0
            } else {
                (1.0 + l) * (nir - red) / denominator
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
