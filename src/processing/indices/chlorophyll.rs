// src/processing/indices/chlorophyll.rs
use crate::processing::IndexCalculator;
use crate::raster::{BandSet, RasterBand};

/// Red-edge chlorophyll proxy calculator.
///
/// CHL = (RedEdge / RED) - 1, from B05 and B04. A pixel with RED == 0
/// resolves to 0.
pub struct Chlorophyll {
    name: String,
}

impl Chlorophyll {
    pub fn new(name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| "Chlorophyll".to_string()),
        }
    }
}

impl IndexCalculator for Chlorophyll {
    fn calculate(&self, bands: &BandSet) -> RasterBand {
        super::map2(&bands.b05, &bands.b04, |red_edge, red| {
            if red == 0.0 {
                0.0
            } else {
                red_edge / red - 1.0
            }
        })
    }

    fn name(&self) -> &str {
        &self.name
    }
}
