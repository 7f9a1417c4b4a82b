// tests/service_tests.rs
use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;

use fieldscope::error::Sentinel2Error;
use fieldscope::service::Sentinel2Service;

/// Small grid and short delay keep the async tests quick.
fn test_service() -> Sentinel2Service {
    Sentinel2Service::new(16, Duration::from_millis(5))
}

#[tokio::test]
async fn test_cache_returns_same_dataset() {
    let service = test_service();

    let first = service
        .fetch_sentinel2_data("field-1", Some("2024-01-01"))
        .await
        .unwrap();
    let second = service
        .fetch_sentinel2_data("field-1", Some("2024-01-01"))
        .await
        .unwrap();

    assert!(Arc::ptr_eq(&first, &second));
    assert_eq!(service.cache_len(), 1);
}

#[tokio::test]
async fn test_distinct_keys_get_distinct_datasets() {
    let service = test_service();

    let dated = service
        .fetch_sentinel2_data("field-1", Some("2024-01-01"))
        .await
        .unwrap();
    let other_date = service
        .fetch_sentinel2_data("field-1", Some("2024-01-06"))
        .await
        .unwrap();
    let latest = service.fetch_sentinel2_data("field-1", None).await.unwrap();

    assert!(!Arc::ptr_eq(&dated, &other_date));
    assert!(!Arc::ptr_eq(&dated, &latest));
    assert_eq!(service.cache_len(), 3);
}

#[tokio::test]
async fn test_unknown_field_rejected() {
    let service = test_service();

    let err = service
        .fetch_sentinel2_data("field-does-not-exist", None)
        .await
        .unwrap_err();
    match err {
        Sentinel2Error::UnknownField(id) => assert_eq!(id, "field-does-not-exist"),
    }
    assert_eq!(service.cache_len(), 0);
}

#[tokio::test]
async fn test_concurrent_fetches_share_one_synthesis() {
    let service = test_service();

    let (a, b) = tokio::join!(
        service.fetch_sentinel2_data("field-2", Some("2024-03-15")),
        service.fetch_sentinel2_data("field-2", Some("2024-03-15")),
    );

    let a = a.unwrap();
    let b = b.unwrap();
    assert!(Arc::ptr_eq(&a, &b));
    assert_eq!(service.cache_len(), 1);
}

#[tokio::test]
async fn test_available_dates_shape() {
    let service = test_service();

    let dates = service.get_available_dates("field-1");
    assert_eq!(dates.len(), 36);

    let parsed: Vec<NaiveDate> = dates
        .iter()
        .map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").unwrap())
        .collect();
    for pair in parsed.windows(2) {
        assert_eq!(pair[0] - pair[1], chrono::Duration::days(5));
    }

    // The date list does not validate the field id.
    assert_eq!(service.get_available_dates("field-does-not-exist").len(), 36);
}

#[tokio::test]
async fn test_metadata_stamping() {
    let service = test_service();

    let dataset = service
        .fetch_sentinel2_data("field-2", Some("2024-05-20"))
        .await
        .unwrap();

    assert_eq!(dataset.metadata.acquisition_date, "2024-05-20");
    assert_eq!(dataset.metadata.resolution, 10);
    assert!((0.0..20.0).contains(&dataset.metadata.cloud_cover));
    assert!((dataset.metadata.coordinates.lat - 28.7011).abs() < 1e-9);
    assert!((dataset.metadata.coordinates.lon - 77.1015).abs() < 1e-9);

    let shape = dataset.bands.shape();
    assert_eq!(shape, (16, 16));
}

#[tokio::test]
async fn test_clear_cache_forces_resynthesis() {
    let service = test_service();

    let first = service
        .fetch_sentinel2_data("field-3", Some("2024-01-01"))
        .await
        .unwrap();
    service.clear_cache();
    assert_eq!(service.cache_len(), 0);

    let second = service
        .fetch_sentinel2_data("field-3", Some("2024-01-01"))
        .await
        .unwrap();
    assert!(!Arc::ptr_eq(&first, &second));
}
