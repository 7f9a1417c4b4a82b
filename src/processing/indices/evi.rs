// src/processing/indices/evi.rs
use crate::processing::IndexCalculator;
use crate::raster::{BandSet, RasterBand};

/// Enhanced Vegetation Index (EVI) calculator.
///
/// EVI = G * (NIR - RED) / (NIR + C1*RED - C2*BLUE + L), from B08, B04 and
/// B02. A pixel whose denominator is exactly zero resolves to 0.
pub struct EVI {
    name: String,
}

impl EVI {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| "EVI".to_string()),
        }
    }
}

impl IndexCalculator for EVI {
    fn calculate(&self, bands: &BandSet) -> RasterBand {
        // EVI coefficients from MODIS documentation
        const G: f32 = 2.5; // Gain factor
        const L: f32 = 1.0; // Soil adjustment factor
        const C1: f32 = 6.0; // Aerosol resistance (red)
        const C2: f32 = 7.5; // Aerosol resistance (blue)

        super::map3(&bands.b08, &bands.b04, &bands.b02, |nir, red, blue| {
            let denominator = nir + C1 * red - C2 * blue + L;
            if denominator == 0.0 {
                0.0
            } else {
                G * (nir - red) / denominator
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
