//! The canonical city table and read accessors.
//!
//! The table is the single source of truth: rows are declared in id order,
//! ids run 1..=N with no gaps, and names keep their canonical punctuation
//! ("Sault Ste. Marie", "St. Ignace"). Coordinates are transcribed literals,
//! WGS84 decimal degrees. Nothing here mutates after compile time, so the
//! whole module is safe for unsynchronized concurrent reads.

use super::types::{CityEntry, Coordinate, CoordinateSpan, MapRegion};

/// One compact row of the static table. Borrowed, `'static` data; convert to
/// an owned [`CityEntry`] with [`CityRow::to_entry`].
#[derive(Debug, Clone, Copy)]
pub struct CityRow {
    pub id: u32,
    pub name: &'static str,
    pub latitude: f64,
    pub longitude: f64,
}

/// All Michigan cities in the catalog, in declaration order.
pub const CITIES: &[CityRow] = &[
    CityRow { id: 1, name: "Adrian", latitude: 41.8975, longitude: -84.0372 },
    CityRow { id: 2, name: "Albion", latitude: 42.2431, longitude: -84.7530 },
    CityRow { id: 3, name: "Alpena", latitude: 45.0617, longitude: -83.4327 },
    CityRow { id: 4, name: "Ann Arbor", latitude: 42.2808, longitude: -83.7430 },
    CityRow { id: 5, name: "Bay City", latitude: 43.5945, longitude: -83.8889 },
    CityRow { id: 6, name: "Benton Harbor", latitude: 42.1167, longitude: -86.4542 },
    CityRow { id: 7, name: "Berkley", latitude: 42.4987, longitude: -83.1835 },
    CityRow { id: 8, name: "Big Rapids", latitude: 43.6981, longitude: -85.4837 },
    CityRow { id: 9, name: "Birmingham", latitude: 42.5467, longitude: -83.2115 },
    CityRow { id: 10, name: "Bloomfield Hills", latitude: 42.5837, longitude: -83.2454 },
    CityRow { id: 11, name: "Cadillac", latitude: 44.2517, longitude: -85.4012 },
    CityRow { id: 12, name: "Charlevoix", latitude: 45.3181, longitude: -85.2584 },
    CityRow { id: 13, name: "Chelsea", latitude: 42.3181, longitude: -84.0208 },
    CityRow { id: 14, name: "Clawson", latitude: 42.5339, longitude: -83.1463 },
    CityRow { id: 15, name: "Dearborn", latitude: 42.3223, longitude: -83.1763 },
    CityRow { id: 16, name: "Detroit", latitude: 42.3314, longitude: -83.0458 },
    CityRow { id: 17, name: "East Lansing", latitude: 42.7368, longitude: -84.4837 },
    CityRow { id: 18, name: "East Pointe", latitude: 42.466595, longitude: -82.959213 },
    CityRow { id: 19, name: "Ecorse", latitude: 42.2543, longitude: -83.1499 },
    CityRow { id: 20, name: "Escanaba", latitude: 45.7453, longitude: -87.0646 },
    CityRow { id: 21, name: "Fenton", latitude: 42.79781, longitude: -83.70495 },
    CityRow { id: 22, name: "Ferndale", latitude: 42.4606, longitude: -83.1346 },
    CityRow { id: 23, name: "Flint", latitude: 43.0125, longitude: -83.6875 },
    CityRow { id: 24, name: "Grand Rapids", latitude: 42.9634, longitude: -85.6681 },
    CityRow { id: 25, name: "Grand Haven", latitude: 43.0631, longitude: -86.2285 },
    CityRow { id: 26, name: "Hancock", latitude: 47.1275, longitude: -88.5809 },
    CityRow { id: 27, name: "Holland", latitude: 42.7875, longitude: -86.1089 },
    CityRow { id: 28, name: "Houghton", latitude: 47.1215, longitude: -88.5695 },
    CityRow { id: 29, name: "Iron Mountain", latitude: 45.8202, longitude: -88.0659 },
    CityRow { id: 30, name: "Ishpeming", latitude: 46.4874, longitude: -87.6674 },
    CityRow { id: 31, name: "Jackson", latitude: 42.2459, longitude: -84.4013 },
    CityRow { id: 32, name: "Kalamazoo", latitude: 42.2917, longitude: -85.5872 },
    CityRow { id: 33, name: "Lansing", latitude: 42.7325, longitude: -84.5555 },
    CityRow { id: 34, name: "Lapeer", latitude: 43.0514, longitude: -83.3188 },
    CityRow { id: 35, name: "Marquette", latitude: 46.5437, longitude: -87.3954 },
    CityRow { id: 36, name: "Menominee", latitude: 45.1077, longitude: -87.6141 },
    CityRow { id: 37, name: "Midland", latitude: 43.6156, longitude: -84.2472 },
    CityRow { id: 38, name: "Monroe", latitude: 41.9165, longitude: -83.3977 },
    CityRow { id: 39, name: "Mount Clemens", latitude: 42.5973, longitude: -82.8780 },
    CityRow { id: 40, name: "Mount Pleasant", latitude: 43.5978, longitude: -84.7675 },
    CityRow { id: 41, name: "Muskegon", latitude: 43.2342, longitude: -86.2484 },
    CityRow { id: 42, name: "Novi", latitude: 42.4806, longitude: -83.4755 },
    CityRow { id: 43, name: "Owosso", latitude: 42.9978, longitude: -84.1744 },
    CityRow { id: 44, name: "Pontiac", latitude: 42.6389, longitude: -83.2911 },
    CityRow { id: 45, name: "Port Huron", latitude: 42.9709, longitude: -82.4249 },
    CityRow { id: 46, name: "Riverview", latitude: 42.1742, longitude: -83.1827 },
    CityRow { id: 47, name: "Roseville", latitude: 42.4972, longitude: -82.9371 },
    CityRow { id: 48, name: "Royal Oak", latitude: 42.4895, longitude: -83.1446 },
    CityRow { id: 49, name: "Saginaw", latitude: 43.4195, longitude: -83.9508 },
    CityRow { id: 50, name: "Sault Ste. Marie", latitude: 46.4953, longitude: -84.3453 },
    CityRow { id: 51, name: "Southfield", latitude: 42.4734, longitude: -83.2219 },
    CityRow { id: 52, name: "St. Ignace", latitude: 45.8724, longitude: -84.7275 },
    CityRow { id: 53, name: "Traverse City", latitude: 44.7631, longitude: -85.6206 },
    CityRow { id: 54, name: "Wyandotte", latitude: 42.2142, longitude: -83.1499 },
    CityRow { id: 55, name: "Ypsilanti", latitude: 42.2411, longitude: -83.6138 },
];

impl CityRow {
    /// 1:1 field copy into the owned record type.
    pub fn to_entry(&self) -> CityEntry {
        CityEntry {
            id: self.id,
            name: self.name.to_string(),
            coordinate: Coordinate {
                latitude: self.latitude,
                longitude: self.longitude,
            },
        }
    }
}

/// Every city, in declaration order. Fresh owned records on every call.
pub fn all_entries() -> Vec<CityEntry> {
    CITIES.iter().map(CityRow::to_entry).collect()
}

/// Look up one city by id. `None` when no row carries that id.
pub fn entry(id: u32) -> Option<CityEntry> {
    row_for_id(id).map(CityRow::to_entry)
}

/// Look up the compact table row by id. A linear scan is plenty at this size.
pub fn row_for_id(id: u32) -> Option<&'static CityRow> {
    CITIES.iter().find(|row| row.id == id)
}

/// Number of cities in the catalog.
pub fn count() -> usize {
    CITIES.len()
}

/// A viewport covering both Michigan peninsulas with some padding, for
/// consuming map UIs.
pub fn map_region() -> MapRegion {
    MapRegion {
        center: Coordinate {
            latitude: 43.802819,
            longitude: -86.112938,
        },
        span: CoordinateSpan {
            latitude_delta: 6.0,
            longitude_delta: 8.0,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::collections::HashSet;

    #[test]
    fn test_count_matches_table() {
        assert_eq!(count(), 55);
        assert_eq!(all_entries().len(), count());
    }

    #[test]
    fn test_ids_contiguous_from_one() {
        for (i, row) in CITIES.iter().enumerate() {
            assert_eq!(row.id as usize, i + 1);
        }
    }

    #[test]
    fn test_names_unique_and_non_empty() {
        let names: HashSet<&str> = CITIES.iter().map(|row| row.name).collect();
        assert_eq!(names.len(), CITIES.len());
        assert!(names.iter().all(|n| !n.is_empty()));
    }

    #[test]
    fn test_entry_lookup() {
        let adrian = entry(1).unwrap();
        assert_eq!(adrian.id, 1);
        assert_eq!(adrian.name, "Adrian");
        assert_abs_diff_eq!(adrian.coordinate.latitude, 41.8975);
        assert_abs_diff_eq!(adrian.coordinate.longitude, -84.0372);
    }

    #[test]
    fn test_entry_lookup_every_valid_id() {
        for id in 1..=count() as u32 {
            let e = entry(id).unwrap();
            assert_eq!(e.id, id);
        }
    }

    #[test]
    fn test_entry_unknown_id() {
        assert!(entry(0).is_none());
        assert!(entry(56).is_none());
        assert!(entry(u32::MAX).is_none());
    }

    #[test]
    fn test_declaration_order_endpoints() {
        let all = all_entries();
        assert_eq!(all.first().unwrap().name, "Adrian");
        assert_eq!(all.last().unwrap().name, "Ypsilanti");
        assert_eq!(all.last().unwrap().id, 55);
    }

    #[test]
    fn test_row_entry_round_trip() {
        for row in CITIES {
            let e = row.to_entry();
            let back = row_for_id(e.id).unwrap();
            assert_eq!(back.id, row.id);
            assert_eq!(e.name, back.name);
            assert_eq!(e.coordinate.latitude, back.latitude);
            assert_eq!(e.coordinate.longitude, back.longitude);
        }
    }

    #[test]
    fn test_map_region_covers_both_peninsulas() {
        let region = map_region();
        assert_abs_diff_eq!(region.center.latitude, 43.802819);
        assert_abs_diff_eq!(region.center.longitude, -86.112938);
        assert_abs_diff_eq!(region.span.latitude_delta, 6.0);
        assert_abs_diff_eq!(region.span.longitude_delta, 8.0);
    }
}
