//! The city catalog: a fixed, ordered table of Michigan cities with stable
//! ids, canonical names, and WGS84 coordinates, plus read-only accessors.

pub mod data;
pub mod types;

pub use data::{all_entries, count, entry, map_region, row_for_id, CityRow, CITIES};
pub use types::{CityEntry, Coordinate, CoordinateSpan, MapRegion};
