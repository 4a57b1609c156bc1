//! Core types for the city catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A WGS84 coordinate pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// An owned city record, the shape handed to consumers (map views, list UIs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityEntry {
    /// Stable identifier, assigned once and never reused.
    pub id: u32,
    /// Canonical display name, e.g. "Sault Ste. Marie".
    pub name: String,
    pub coordinate: Coordinate,
}

// Identity is carried by `id` alone: two records with the same id are the
// same city even if the other fields diverge.
impl PartialEq for CityEntry {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for CityEntry {}

impl Hash for CityEntry {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for CityEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>2}  {}  ({:.4}, {:.4})",
            self.id, self.name, self.coordinate.latitude, self.coordinate.longitude
        )
    }
}

/// Latitudinal/longitudinal extent of a map viewport, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoordinateSpan {
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

/// A preconfigured map viewport (center plus span).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MapRegion {
    pub center: Coordinate,
    pub span: CoordinateSpan,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn entry(id: u32, name: &str) -> CityEntry {
        CityEntry {
            id,
            name: name.to_string(),
            coordinate: Coordinate {
                latitude: 0.0,
                longitude: 0.0,
            },
        }
    }

    #[test]
    fn test_equality_by_id_only() {
        let a = entry(7, "Berkley");
        let b = entry(7, "Somewhere Stale");
        let c = entry(8, "Berkley");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_hash_by_id_only() {
        let mut set = HashSet::new();
        set.insert(entry(3, "Alpena"));
        set.insert(entry(3, "Alpena (old transcription)"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&entry(3, "anything")));
    }

    #[test]
    fn test_display_format() {
        let e = CityEntry {
            id: 1,
            name: "Adrian".to_string(),
            coordinate: Coordinate {
                latitude: 41.8975,
                longitude: -84.0372,
            },
        };
        assert_eq!(format!("{}", e), " 1  Adrian  (41.8975, -84.0372)");
    }
}
