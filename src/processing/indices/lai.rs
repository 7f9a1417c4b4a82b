// src/processing/indices/lai.rs
use crate::processing::IndexCalculator;
use crate::raster::{BandSet, RasterBand};

/// Leaf Area Index (LAI) approximation from NDVI.
///
/// LAI = max(0, -ln(1 - NDVI) / 0.5), with NDVI recomputed inline from B08
/// and B04. Degenerate pixels resolve to 0: a zero NDVI denominator, and
/// NDVI == 1 exactly, where the log argument hits 0. Negative NDVI clamps to
/// 0 through the outer max.
pub struct LAI {
    name: String,
}

impl LAI {
    /// Extinction coefficient of the Beer-Lambert approximation.
    const K: f32 = 0.5;

    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| "LAI".to_string()),
        }
    }
}

impl IndexCalculator for LAI {
    fn calculate(&self, bands: &BandSet) -> RasterBand {
        super::map2(&bands.b08, &bands.b04, |nir, red| {
            let denominator = nir + red;
            let ndvi = if denominator == 0.0 {
                0.0
            } else {
                (nir - red) / denominator
            };

            let log_arg = 1.0 - ndvi;
            if log_arg <= 0.0 {
                0.0
            } else {
                (-log_arg.ln() / Self::K).max(0.0)
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
