// src/fields.rs
use serde::Serialize;

use crate::raster::LatLon;

/// Bounding box in degrees.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct BoundingBox {
    pub north: f64,
    pub south: f64,
    pub east: f64,
    pub west: f64,
}

/// Static per-field geometry. Read-only; used to stamp acquisition metadata.
#[derive(Debug, Clone, Serialize)]
pub struct FieldGeometry {
    pub id: &'static str,
    pub name: &'static str,
    pub bounds: BoundingBox,
    pub center: LatLon,
}

/// Demo field definitions.
pub static FIELD_GEOMETRIES: [FieldGeometry; 3] = [
    FieldGeometry {
        id: "field-1",
        name: "North Field",
        bounds: BoundingBox {
            north: 28.7041,
            south: 28.7021,
            east: 77.1025,
            west: 77.1005,
        },
        center: LatLon {
            lat: 28.7031,
            lon: 77.1015,
        },
    },
    FieldGeometry {
        id: "field-2",
        name: "South Field",
        bounds: BoundingBox {
            north: 28.7021,
            south: 28.7001,
            east: 77.1025,
            west: 77.1005,
        },
        center: LatLon {
            lat: 28.7011,
            lon: 77.1015,
        },
    },
    FieldGeometry {
        id: "field-3",
        name: "East Field",
        bounds: BoundingBox {
            north: 28.7041,
            south: 28.7011,
            east: 77.1045,
            west: 77.1025,
        },
        center: LatLon {
            lat: 28.7026,
            lon: 77.1035,
        },
    },
];

pub fn field_geometry(id: &str) -> Option<&'static FieldGeometry> {
    FIELD_GEOMETRIES.iter().find(|f| f.id == id)
}
