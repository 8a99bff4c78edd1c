//! GPX track extraction.
//!
//! Deliberately tolerant: a `<trkpt>` with an unparsable lat/lon is
//! skipped without failing the document, and a missing or unparsable
//! `<ele>` defaults to zero. Distance keeps accumulating from the last
//! accepted point, so a skipped point does not reset the chain.

use super::{ParsedTrack, TrackError, TrackPoint};
use crate::geo;
use quick_xml::de::from_str;
use serde::Deserialize;
use std::path::Path;

/// Read and parse a GPX file from disk.
pub fn parse_gpx_file(path: &Path) -> Result<ParsedTrack, TrackError> {
    let content = std::fs::read_to_string(path)?;
    parse_gpx(&content)
}

/// Parse GPX text into an ordered point list with cumulative distance.
///
/// A document with no `<trkpt>` elements (or where none survive
/// filtering) parses to an empty point list, not an error; callers decide
/// whether an empty track is acceptable.
pub fn parse_gpx(content: &str) -> Result<ParsedTrack, TrackError> {
    let doc: GpxDocument =
        from_str(content).map_err(|e| TrackError::Parse(format!("Invalid GPX file: {}", e)))?;

    let mut points = Vec::new();
    let mut distance_km = 0.0;
    let mut previous: Option<(f64, f64)> = None;

    for track in &doc.trk {
        for segment in &track.trkseg {
            for trkpt in &segment.trkpt {
                let lat = trkpt.lat.as_deref().and_then(parse_coord);
                let lon = trkpt.lon.as_deref().and_then(parse_coord);
                let (lat, lon) = match (lat, lon) {
                    (Some(lat), Some(lon)) => (lat, lon),
                    _ => {
                        tracing::warn!("skipping trackpoint with unparsable coordinates");
                        continue;
                    }
                };

                let elevation_m = trkpt
                    .ele
                    .as_deref()
                    .and_then(parse_coord)
                    .unwrap_or(0.0);

                if let Some((prev_lat, prev_lon)) = previous {
                    distance_km += geo::haversine_distance(prev_lat, prev_lon, lat, lon) / 1000.0;
                }

                points.push(TrackPoint {
                    lat,
                    lon,
                    elevation_m,
                    distance_km,
                });
                previous = Some((lat, lon));
            }
        }
    }

    Ok(ParsedTrack {
        points,
        name: extract_name(&doc),
    })
}

/// Track name: top-level metadata name preferred over the per-track name.
fn extract_name(doc: &GpxDocument) -> Option<String> {
    let metadata_name = doc
        .metadata
        .as_ref()
        .and_then(|m| m.name.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty());

    if let Some(name) = metadata_name {
        return Some(name.to_string());
    }

    doc.trk
        .iter()
        .find_map(|t| t.name.as_deref())
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

fn parse_coord(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok()
}

// GPX XML structures

#[derive(Debug, Deserialize)]
struct GpxDocument {
    metadata: Option<Metadata>,
    #[serde(default)]
    trk: Vec<Track>,
}

#[derive(Debug, Deserialize)]
struct Metadata {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Track {
    name: Option<String>,
    #[serde(default)]
    trkseg: Vec<TrackSegment>,
}

#[derive(Debug, Deserialize)]
struct TrackSegment {
    #[serde(default)]
    trkpt: Vec<TrackPointXml>,
}

#[derive(Debug, Deserialize)]
struct TrackPointXml {
    // Attributes kept as strings so a single bad value skips one point
    // instead of failing the whole document.
    #[serde(rename = "@lat")]
    lat: Option<String>,
    #[serde(rename = "@lon")]
    lon: Option<String>,
    #[serde(rename = "ele")]
    ele: Option<String>,
}
