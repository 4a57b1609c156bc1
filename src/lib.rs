//! Static reference dataset of Michigan cities.
//!
//! One canonical, immutable table of 55 cities with stable ids, display
//! names, and WGS84 coordinates, plus random sampling without replacement
//! and an HTTP facade for remote consumers. The catalog and sampler are
//! pure: no I/O, no persistence, no shared mutable state.

pub mod catalog;
pub mod sampling;
pub mod server;

pub use catalog::{
    all_entries, count, entry, map_region, CityEntry, CityRow, Coordinate, CoordinateSpan,
    MapRegion,
};
pub use sampling::sample;
