// src/service.rs
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{Days, Local};
use parking_lot::Mutex;
use rand::Rng;
use tokio::sync::OnceCell;
use tracing::debug;

use crate::error::Sentinel2Error;
use crate::fields::field_geometry;
use crate::raster::{AcquisitionMetadata, SatelliteDataset};
use crate::synth::synthesize_band_set;

pub const DEFAULT_GRID_SIZE: usize = 80;
pub const DEFAULT_FETCH_DELAY: Duration = Duration::from_secs(1);

/// Cached accessor for synthesized Sentinel-2 acquisitions.
///
/// Datasets are memoized by (field, date) key for the lifetime of the
/// service; a cache hit returns the stored `Arc`, so repeated fetches of the
/// same key are reference-stable and downstream consumers can memoize on
/// object identity. The cache never evicts.
///
/// The service is constructed by the composition root rather than reached
/// through a global; tests inject a small grid and a short fetch delay.
pub struct Sentinel2Service {
    cache: Mutex<HashMap<String, Arc<OnceCell<Arc<SatelliteDataset>>>>>,
    grid_size: usize,
    fetch_delay: Duration,
}

impl Default for Sentinel2Service {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_FETCH_DELAY)
    }
}

impl Sentinel2Service {
    pub fn new(grid_size: usize, fetch_delay: Duration) -> Self {
        Self {
            cache: Mutex::new(HashMap::new()),
            grid_size,
            fetch_delay,
        }
    }

    /// Fetch the acquisition for a field, synthesizing it on first request.
    ///
    /// `date` defaults to today when unspecified; the cache key uses
    /// `"latest"` in that case. On a miss this awaits the simulated network
    /// delay before resolving. Fails with [`Sentinel2Error::UnknownField`]
    /// for a field id absent from the geometry table.
    pub async fn fetch_sentinel2_data(
        &self,
        field_id: &str,
        date: Option<&str>,
    ) -> Result<Arc<SatelliteDataset>, Sentinel2Error> {
        let cache_key = format!("{}-{}", field_id, date.unwrap_or("latest"));

        // One cell per key: concurrent misses on the same key await a single
        // in-flight synthesis instead of racing to overwrite each other.
        let cell = {
            let mut cache = self.cache.lock();
            Arc::clone(cache.entry(cache_key.clone()).or_default())
        };

        if let Some(dataset) = cell.get() {
            debug!(key = %cache_key, "satellite cache hit");
            return Ok(Arc::clone(dataset));
        }

        let dataset = cell
            .get_or_try_init(|| self.synthesize_dataset(&cache_key, field_id, date))
            .await?;
        Ok(Arc::clone(dataset))
    }

    async fn synthesize_dataset(
        &self,
        cache_key: &str,
        field_id: &str,
        date: Option<&str>,
    ) -> Result<Arc<SatelliteDataset>, Sentinel2Error> {
        debug!(key = %cache_key, "satellite cache miss, synthesizing acquisition");

        // Simulated network latency; the only suspension point in the engine.
        tokio::time::sleep(self.fetch_delay).await;

        let field = field_geometry(field_id)
            .ok_or_else(|| Sentinel2Error::UnknownField(field_id.to_string()))?;

        let mut rng = rand::thread_rng();
        let bands = synthesize_band_set(self.grid_size, &mut rng);
        let metadata = AcquisitionMetadata {
            acquisition_date: date.map(str::to_owned).unwrap_or_else(|| {
                Local::now().date_naive().format("%Y-%m-%d").to_string()
            }),
            cloud_cover: rng.gen::<f32>() * 20.0,
            resolution: 10,
            coordinates: field.center,
        };

        Ok(Arc::new(SatelliteDataset { bands, metadata }))
    }

    /// 36 acquisition dates at the ~5 day Sentinel-2 revisit interval, newest
    /// first, ending today. Purely presentational: recomputed on every call,
    /// never consults the cache and never validates the field id.
    pub fn get_available_dates(&self, _field_id: &str) -> Vec<String> {
        let today = Local::now().date_naive();
        (0u64..36)
            .map(|i| (today - Days::new(i * 5)).format("%Y-%m-%d").to_string())
            .collect()
    }

    /// Number of materialized datasets held by the cache.
    pub fn cache_len(&self) -> usize {
        self.cache.lock().values().filter(|c| c.initialized()).count()
    }

    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}
