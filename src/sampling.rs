//! Random sampling over the catalog.

use crate::catalog::{self, CityEntry, CityRow};
use rand::seq::SliceRandom;

/// Draw `count` distinct cities at random, without replacement, in a
/// uniformly random order.
///
/// - `count <= 0` returns `None`: an invalid request, deliberately distinct
///   from an empty result.
/// - `count >= catalog::count()` returns the whole catalog in declaration
///   order. This path never touches the RNG; callers get the table as-is.
/// - Otherwise the catalog is shuffled (Fisher–Yates via [`SliceRandom`])
///   and truncated, so every city has equal inclusion probability and every
///   ordering of the chosen cities is equally likely.
///
/// Each call draws fresh randomness from [`rand::thread_rng`]; the catalog
/// itself is never mutated.
pub fn sample(count: i64) -> Option<Vec<CityEntry>> {
    if count <= 0 {
        return None;
    }

    if count >= catalog::count() as i64 {
        return Some(catalog::all_entries());
    }

    let mut rows: Vec<&CityRow> = catalog::CITIES.iter().collect();
    rows.shuffle(&mut rand::thread_rng());
    rows.truncate(count as usize);
    Some(rows.into_iter().map(CityRow::to_entry).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_non_positive_count_is_absent() {
        assert!(sample(0).is_none());
        assert!(sample(-5).is_none());
        assert!(sample(i64::MIN).is_none());
    }

    #[test]
    fn test_in_range_count_exact_and_distinct() {
        let cities = sample(3).unwrap();
        assert_eq!(cities.len(), 3);
        let ids: HashSet<u32> = cities.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 3);
        for id in ids {
            assert!(catalog::entry(id).is_some());
        }
    }

    #[test]
    fn test_oversized_count_returns_whole_catalog_in_order() {
        let cities = sample(10_000).unwrap();
        assert_eq!(cities.len(), catalog::count());
        assert_eq!(cities.first().unwrap().id, 1);
        assert_eq!(cities.last().unwrap().id, catalog::count() as u32);
        for (i, city) in cities.iter().enumerate() {
            assert_eq!(city.id as usize, i + 1);
        }
    }

    #[test]
    fn test_exact_count_returns_whole_catalog_in_order() {
        let cities = sample(catalog::count() as i64).unwrap();
        assert_eq!(cities.len(), catalog::count());
        assert_eq!(cities.first().unwrap().id, 1);
    }

    #[test]
    fn test_repeated_draws_vary() {
        // Statistical property: 100 draws of 5 from 55 cities collapsing to
        // one ordered result has probability ~0 with a working shuffle.
        let draws: HashSet<Vec<u32>> = (0..100)
            .map(|_| sample(5).unwrap().iter().map(|c| c.id).collect())
            .collect();
        assert!(draws.len() > 1);
    }
}
