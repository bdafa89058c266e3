//! # Geographic Utilities
//!
//! Distance computations and the proximity test used by the grouper.
//!
//! ## Overview
//!
//! | Function | Description |
//! |----------|-------------|
//! | [`haversine_distance_km`] | Great-circle distance between two GPS points |
//! | [`planar_distance_km`] | Distance in the pair-local planar frame |
//! | [`points_close`] | Great-circle proximity test |
//! | [`points_close_with`] | Proximity test with an explicit [`DistanceModel`] |
//! | [`compute_center`] | Centroid of a set of points |
//! | [`km_to_degrees`] | Convert kilometres to approximate degrees at a latitude |
//!
//! ## Two distance models
//!
//! The grouper measures great-circle distance, the overlap finder measures in a
//! planar frame. At the working scale (a few kilometres) they agree to well
//! under a metre, but they are not interchangeable: thresholds were chosen
//! against each model separately. Call sites pick one through [`DistanceModel`]
//! rather than sharing a single distance function.
//!
//! All distances are in kilometres.

use geo::{Distance, Haversine, Point};

use crate::projection::project;
use crate::{GeoPoint, EARTH_RADIUS_KM};

// =============================================================================
// Distance Functions
// =============================================================================

/// Calculate the great-circle distance between two GPS points in kilometres.
///
/// Uses the haversine formula on a sphere of radius [`EARTH_RADIUS_KM`].
///
/// # Example
///
/// ```rust
/// use track_overlap::{GeoPoint, geo_utils};
///
/// let london = GeoPoint::new(51.5074, -0.1278);
/// let paris = GeoPoint::new(48.8566, 2.3522);
///
/// let distance = geo_utils::haversine_distance_km(&london, &paris);
/// assert!((distance - 343.56).abs() < 1.0); // ~344 km
/// ```
#[inline]
pub fn haversine_distance_km(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    let point1 = Point::new(p1.longitude, p1.latitude);
    let point2 = Point::new(p2.longitude, p2.latitude);
    Haversine::distance(point1, point2) / 1000.0
}

/// Distance between two GPS points in their shared planar frame, in kilometres.
///
/// This is the distance [`crate::find_overlaps`] reasons about.
#[inline]
pub fn planar_distance_km(p1: &GeoPoint, p2: &GeoPoint) -> f64 {
    project(p1, p2).distance
}

/// How distance between two points is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DistanceModel {
    /// Haversine distance on a sphere.
    #[default]
    GreatCircle,
    /// Equirectangular distance anchored at the pair's mean latitude.
    Planar,
}

impl DistanceModel {
    /// Distance between two points in kilometres under this model.
    #[inline]
    pub fn distance_km(&self, p1: &GeoPoint, p2: &GeoPoint) -> f64 {
        match self {
            DistanceModel::GreatCircle => haversine_distance_km(p1, p2),
            DistanceModel::Planar => planar_distance_km(p1, p2),
        }
    }
}

// =============================================================================
// Proximity
// =============================================================================

/// Check whether two points are strictly closer than `threshold_km` (great-circle).
///
/// The usual threshold is [`crate::DEFAULT_PROXIMITY_KM`] (50 m).
///
/// # Example
///
/// ```rust
/// use track_overlap::{GeoPoint, points_close, DEFAULT_PROXIMITY_KM};
///
/// let a = GeoPoint::new(51.5074, -0.1278);
/// let b = GeoPoint::new(51.5076, -0.1278); // ~22 m north
///
/// assert!(points_close(&a, &b, DEFAULT_PROXIMITY_KM));
/// assert!(points_close(&a, &a, 0.001));
/// ```
#[inline]
pub fn points_close(p1: &GeoPoint, p2: &GeoPoint, threshold_km: f64) -> bool {
    points_close_with(DistanceModel::GreatCircle, p1, p2, threshold_km)
}

/// Check whether two points are strictly closer than `threshold_km` under `model`.
#[inline]
pub fn points_close_with(
    model: DistanceModel,
    p1: &GeoPoint,
    p2: &GeoPoint,
    threshold_km: f64,
) -> bool {
    model.distance_km(p1, p2) < threshold_km
}

// =============================================================================
// Center / Span
// =============================================================================

/// Compute the geographic center (centroid) of a set of points.
///
/// Returns the arithmetic mean of all latitude and longitude values, or
/// `None` for empty input. Fine for the small areas a point group covers;
/// not meaningful across the antimeridian.
pub fn compute_center(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }

    let sum_lat: f64 = points.iter().map(|p| p.latitude).sum();
    let sum_lng: f64 = points.iter().map(|p| p.longitude).sum();
    let n = points.len() as f64;

    Some(GeoPoint::new(sum_lat / n, sum_lng / n))
}

/// Convert kilometres to approximate degrees at a given latitude.
///
/// Returns the longitude span, which is never smaller than the latitude span,
/// so it is safe to use for a square search box. The cosine is clamped so the
/// span stays finite near the poles.
#[inline]
pub fn km_to_degrees(km: f64, latitude: f64) -> f64 {
    let cos_lat = latitude.to_radians().cos().max(0.1);
    (km / EARTH_RADIUS_KM).to_degrees() / cos_lat
}

// =============================================================================
// Unit Tests
// =============================================================================
