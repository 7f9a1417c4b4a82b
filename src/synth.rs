// src/synth.rs
use rand::Rng;

use crate::raster::{Band, BandSet, RasterBand};

/// Generate one synthetic band: a size x size grid of reflectance values with
/// agricultural field structure layered on top of the nominal [min, max]
/// range.
///
/// Spatial structure, per pixel:
/// - 3 column-zones x 2 row-zones of differing crop health: the leftmost
///   column-zone is healthiest (+25% of span), the rightmost slightly
///   stressed (-15%), the bottom row-zone better irrigated (+10%);
/// - sinusoidal row/furrow patterns;
/// - uniform noise in [-0.04, 0.04] from the injected generator;
/// - an edge-decay penalty beyond 45% of `size` from the grid center;
/// - two fixed rectangular stress patches.
///
/// The final value is clamped to [0, 1], not to [min, max] - a band whose
/// nominal range sits near either end of the unit interval can therefore
/// spill past it. Downstream index math relies on this clamp, so keep it.
pub fn generate_band<R: Rng>(size: usize, min: f32, max: f32, rng: &mut R) -> RasterBand {
    let span = max - min;
    let sz = size as f32;
    let center = sz / 2.0;

    let mut data = Vec::with_capacity(size * size);
    for i in 0..size {
        for j in 0..size {
            let fi = i as f32;
            let fj = j as f32;

            // Zone partition uses fractional divisors so the three column
            // zones stay equal-width for sizes not divisible by 3.
            let zone_x = (fj / (sz / 3.0)).floor() as u32;
            let zone_y = (fi / (sz / 2.0)).floor() as u32;

            let mut base = min + span * 0.6;
            if zone_x == 0 {
                base += span * 0.25;
            }
            if zone_x == 2 {
                base -= span * 0.15;
            }
            if zone_y == 1 {
                base += span * 0.1;
            }

            let row_pattern = (fj * 0.8).sin() * 0.03;
            let column_pattern = (fi * 0.6).cos() * 0.02;

            let noise = (rng.gen::<f32>() - 0.5) * 0.08;

            let dist = ((fi - center).powi(2) + (fj - center).powi(2)).sqrt();
            let edge_effect = if dist > sz * 0.45 { -0.08 } else { 0.0 };

            // Stressed patches (disease/pest areas) at fixed relative windows.
            let stress_patch1 = if fi > sz * 0.6 && fi < sz * 0.8 && fj > sz * 0.1 && fj < sz * 0.3
            {
                -0.15
            } else {
                0.0
            };
            let stress_patch2 = if fi > sz * 0.2 && fi < sz * 0.4 && fj > sz * 0.7 && fj < sz * 0.9
            {
                -0.1
            } else {
                0.0
            };

            let value =
                base + row_pattern + column_pattern + noise + edge_effect + stress_patch1
                    + stress_patch2;
            data.push(value.clamp(0.0, 1.0));
        }
    }

    RasterBand::new((size, size), data)
}

/// Synthesize a full ten-band acquisition at the given grid size. Each band
/// uses its nominal Sentinel-2 reflectance range.
pub fn synthesize_band_set<R: Rng>(size: usize, rng: &mut R) -> BandSet {
    let mut make = |band: Band| {
        let (min, max) = band.nominal_range();
        generate_band(size, min, max, rng)
    };

    BandSet {
        b02: make(Band::B02),
        b03: make(Band::B03),
        b04: make(Band::B04),
        b05: make(Band::B05),
        b06: make(Band::B06),
        b07: make(Band::B07),
        b08: make(Band::B08),
        b8a: make(Band::B8A),
        b11: make(Band::B11),
        b12: make(Band::B12),
    }
}
