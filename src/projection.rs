//! # Local Planar Projection
//!
//! Converts a pair of GPS points into a flat (x, y) frame in kilometres and back.
//!
//! The frame is equirectangular and anchored at the pair's mean latitude:
//!
//! ```text
//! x = R · lng · cos(anchor)
//! y = R · lat
//! ```
//!
//! A frame is only meaningful for the pair it was built from. There is no
//! shared global frame: every call to [`project`] re-anchors. This is accurate
//! for short baselines (tens of metres to a few kilometres), which is the
//! working scale of the overlap analysis.

use crate::{GeoPoint, EARTH_RADIUS_KM};

/// A point in a pair-local planar frame, in kilometres.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanarPoint {
    pub x: f64,
    pub y: f64,
}

impl PlanarPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point in the same frame.
    #[inline]
    pub fn distance_to(&self, other: &PlanarPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Two points projected into their shared frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarPair {
    /// First input point
    pub a: PlanarPoint,
    /// Second input point
    pub b: PlanarPoint,
    /// Planar distance between `a` and `b` in kilometres
    pub distance: f64,
    /// Mean latitude of the pair in radians (the cosine anchor)
    pub anchor_lat: f64,
}

impl PlanarPair {
    /// Place another GPS point in this pair's frame.
    pub fn locate(&self, p: &GeoPoint) -> PlanarPoint {
        to_planar(p, self.anchor_lat.cos())
    }
}

/// Project two GPS points into a planar frame anchored at their mean latitude.
///
/// # Example
///
/// ```rust
/// use track_overlap::{GeoPoint, projection::project};
///
/// let p1 = GeoPoint::new(38.5655527, -98.5169269);
/// let p2 = GeoPoint::new(38.5655023, -98.4984944);
///
/// let pair = project(&p1, &p2);
/// assert!((pair.distance - 1.6).abs() < 0.01);
/// ```
pub fn project(p1: &GeoPoint, p2: &GeoPoint) -> PlanarPair {
    let anchor_lat = ((p1.latitude + p2.latitude) / 2.0).to_radians();
    let cos_anchor = anchor_lat.cos();

    let a = to_planar(p1, cos_anchor);
    let b = to_planar(p2, cos_anchor);

    PlanarPair {
        a,
        b,
        distance: a.distance_to(&b),
        anchor_lat,
    }
}

/// Map two planar points back to GPS coordinates.
///
/// Latitude comes straight from `y`. Longitude is unscaled with the average of
/// the two recovered latitudes as anchor, which mirrors [`project`]: for a pair
/// that was projected together the recovered anchor is the original one, so a
/// round trip returns the input points.
pub fn unproject(a: &PlanarPoint, b: &PlanarPoint) -> (GeoPoint, GeoPoint) {
    let lat_a = (a.y / EARTH_RADIUS_KM).to_degrees();
    let lat_b = (b.y / EARTH_RADIUS_KM).to_degrees();

    let cos_anchor = ((lat_a + lat_b) / 2.0).to_radians().cos();
    let lng_a = (a.x / (EARTH_RADIUS_KM * cos_anchor)).to_degrees();
    let lng_b = (b.x / (EARTH_RADIUS_KM * cos_anchor)).to_degrees();

    (GeoPoint::new(lat_a, lng_a), GeoPoint::new(lat_b, lng_b))
}

#[inline]
fn to_planar(p: &GeoPoint, cos_anchor: f64) -> PlanarPoint {
    PlanarPoint {
        x: EARTH_RADIUS_KM * p.longitude.to_radians() * cos_anchor,
        y: EARTH_RADIUS_KM * p.latitude.to_radians(),
    }
}
