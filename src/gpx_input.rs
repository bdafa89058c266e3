//! Reading track points from GPX.
//!
//! Only input is handled here; rendering results is left to the caller.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use gpx::{read, Gpx};
use log::debug;
use thiserror::Error;

use crate::{points_from_latlngs, GeoPoint};

/// Error raised while loading a GPX track.
#[derive(Debug, Error)]
pub enum TrackError {
    #[error("cannot open track: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid GPX: {0}")]
    Parse(String),
    #[error("no usable track points")]
    NoPoints,
}

/// Read every track point of a GPX document, in document order.
///
/// Points from all tracks and segments are concatenated. Coordinates that
/// fail [`GeoPoint::is_valid`] are dropped.
pub fn read_track<R: Read>(reader: R) -> Result<Vec<GeoPoint>, TrackError> {
    let gpx: Gpx = read(reader).map_err(|e| TrackError::Parse(e.to_string()))?;

    // geo_types points are (x = lng, y = lat)
    let latlngs: Vec<Option<[f64; 2]>> = gpx
        .tracks
        .iter()
        .flat_map(|track| &track.segments)
        .flat_map(|segment| &segment.points)
        .map(|pt| {
            let point = pt.point();
            Some([point.y(), point.x()])
        })
        .collect();

    let points = points_from_latlngs(&latlngs);
    if points.is_empty() {
        return Err(TrackError::NoPoints);
    }
    Ok(points)
}

/// Open and read a GPX file with [`read_track`].
pub fn load_track(path: &Path) -> Result<Vec<GeoPoint>, TrackError> {
    let file = File::open(path)?;
    let points = read_track(BufReader::new(file))?;
    debug!("Loaded {} points from {}", points.len(), path.display());
    Ok(points)
}
