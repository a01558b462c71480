use ahash::AHashMap;
use rand::Rng;
use rand::seq::{IndexedRandom, IteratorRandom};

use crate::grid::{District, Location, Region};

/// Randomly partition a region into `num_districts` contiguous districts.
///
/// Seeds each district at a distinct random location, then repeatedly picks
/// a random unassigned location bordering an assigned one and folds it into
/// that neighbor's district, until the region is covered.  Growth keeps
/// every district contiguous at all times; district sizes can end up far
/// from equal.  Use [`snake_partition`](crate::redistrict::snake_partition)
/// when balance matters more than variety.
///
/// A count below 1 is treated as 1 and a count above the number of
/// locations is capped at it.  The empty region yields no districts.  The
/// result is deterministic for a given `rng` state.
pub fn random_partition<R: Rng + ?Sized>(
    region: &Region,
    num_districts: usize,
    rng: &mut R,
) -> Vec<District> {
    if region.is_empty() {
        return Vec::new();
    }
    let num_districts = num_districts.clamp(1, region.size());

    // Seed districts with random starting locations.
    let seeds = region.locations().choose_multiple(rng, num_districts);
    let mut assignments: AHashMap<Location, usize> = seeds
        .into_iter()
        .enumerate()
        .map(|(district, loc)| (loc, district))
        .collect();

    // Expand districts until all locations are assigned.
    let mut unassigned: Vec<Location> = region
        .locations()
        .filter(|loc| !assignments.contains_key(loc))
        .collect();
    while !unassigned.is_empty() {
        let mut claims = Vec::new();
        for (i, loc) in unassigned.iter().enumerate() {
            for neighbor in loc.neighbors() {
                if let Some(&district) = assignments.get(&neighbor) {
                    claims.push((i, district));
                }
            }
        }

        // The region is a connected grid, so a frontier claim always exists
        // while anything remains unassigned.
        let &(i, district) = claims.choose(rng).unwrap();
        assignments.insert(unassigned.swap_remove(i), district);
    }

    let mut members = vec![Vec::new(); num_districts];
    for loc in region.locations() {
        // Every location was assigned by the expansion loop.
        let &district = assignments.get(&loc).unwrap();
        members[district].push(loc);
    }
    members.into_iter().map(District::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn partitions_cover_the_region_disjointly() {
        let region = Region::square(4);
        let mut rng = StdRng::seed_from_u64(7);
        let districts = random_partition(&region, 4, &mut rng);

        assert_eq!(districts.len(), 4);
        let total: usize = districts.iter().map(District::size).sum();
        assert_eq!(total, region.size());
        for loc in region.locations() {
            assert_eq!(districts.iter().filter(|d| d.contains(&loc)).count(), 1);
        }
    }

    #[test]
    fn every_district_is_contiguous_and_seeded() {
        let region = Region::square(5);
        let mut rng = StdRng::seed_from_u64(42);
        for k in [1, 2, 3, 5, 8] {
            let districts = random_partition(&region, k, &mut rng);
            assert_eq!(districts.len(), k);
            for district in &districts {
                assert!(!district.is_empty());
                assert!(district.is_contiguous());
            }
        }
    }

    #[test]
    fn zero_count_is_normalized_to_one() {
        let region = Region::square(3);
        let mut rng = StdRng::seed_from_u64(1);
        let districts = random_partition(&region, 0, &mut rng);
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].size(), 9);
    }

    #[test]
    fn counts_above_the_region_size_are_capped() {
        let region = Region::square(2);
        let mut rng = StdRng::seed_from_u64(3);
        let districts = random_partition(&region, 9, &mut rng);
        assert_eq!(districts.len(), 4);
        assert!(districts.iter().all(|d| d.size() == 1));
    }

    #[test]
    fn empty_region_yields_no_districts() {
        let mut rng = StdRng::seed_from_u64(5);
        assert!(random_partition(&Region::empty(), 3, &mut rng).is_empty());
    }

    #[test]
    fn identical_seeds_give_identical_partitions() {
        let region = Region::square(4);
        let first = random_partition(&region, 3, &mut StdRng::seed_from_u64(11));
        let second = random_partition(&region, 3, &mut StdRng::seed_from_u64(11));

        let mut first_sorted = first;
        first_sorted.sort_unstable();
        let mut second_sorted = second;
        second_sorted.sort_unstable();
        assert_eq!(first_sorted, second_sorted);
    }
}
