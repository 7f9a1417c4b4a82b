// src/processing/indices/mod.rs
pub mod chlorophyll;
pub mod evi;
pub mod lai;
pub mod ndvi;
pub mod ndwi;
pub mod savi;

// Re-export indices
pub use chlorophyll::Chlorophyll;
pub use evi::EVI;
pub use lai::LAI;
pub use ndvi::NDVI;
pub use ndwi::NDWI;
pub use savi::SAVI;

use rayon::prelude::*;

use crate::raster::RasterBand;

/// Apply a two-band per-pixel transform. The output takes the first band's
/// shape; when the second band disagrees, its out-of-range pixels read as 0
/// rather than panicking.
pub(crate) fn map2(
    a: &RasterBand,
    b: &RasterBand,
    f: impl Fn(f32, f32) -> f32 + Sync,
) -> RasterBand {
    let (rows, cols) = a.shape();
    let a_data = a.data();
    let b_data = b.data();
    let aligned = b.shape() == a.shape();

    let mut result = vec![0.0f32; rows * cols];
    result.par_iter_mut().enumerate().for_each(|(i, out)| {
        let bv = if aligned {
            b_data[i]
        } else {
            b.get_or_zero(i / cols, i % cols)
        };
        *out = f(a_data[i], bv);
    });

    RasterBand::new((rows, cols), result)
}

/// Three-band variant of [`map2`], same shape and zero-fill rules.
pub(crate) fn map3(
    a: &RasterBand,
    b: &RasterBand,
    c: &RasterBand,
    f: impl Fn(f32, f32, f32) -> f32 + Sync,
) -> RasterBand {
    let (rows, cols) = a.shape();
    let a_data = a.data();
    let b_data = b.data();
    let c_data = c.data();
    let b_aligned = b.shape() == a.shape();
    let c_aligned = c.shape() == a.shape();

    let mut result = vec![0.0f32; rows * cols];
    result.par_iter_mut().enumerate().for_each(|(i, out)| {
        let bv = if b_aligned {
            b_data[i]
        } else {
            b.get_or_zero(i / cols, i % cols)
        };
        let cv = if c_aligned {
            c_data[i]
        } else {
            c.get_or_zero(i / cols, i % cols)
        };
        *out = f(a_data[i], bv, cv);
    });

    RasterBand::new((rows, cols), result)
}
