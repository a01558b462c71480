use std::cmp::Ordering;

use crate::grid::{District, Location, Region};

/// All of a region's locations in boustrophedon order: the first row left to
/// right, the next row right to left, and so on, alternating direction by
/// row parity.
pub fn snake_order(region: &Region) -> Vec<Location> {
    let mut locations: Vec<Location> = region.locations().collect();
    locations.sort_unstable_by(snake_compare);
    locations
}

/// Comparator for boustrophedon ordering: row first, then x ascending on
/// even rows and descending on odd rows.
fn snake_compare(a: &Location, b: &Location) -> Ordering {
    a.y.cmp(&b.y).then_with(|| {
        if a.y.rem_euclid(2) == 0 {
            a.x.cmp(&b.x)
        } else {
            b.x.cmp(&a.x)
        }
    })
}

/// Split a region into `num_districts` districts of near-equal size by
/// slicing the boustrophedon ordering into consecutive runs.
///
/// A count below 1 is treated as 1.  The returned districts are pairwise
/// disjoint, cover the region exactly, and their sizes differ by at most
/// one: with `v` voters and `k` districts, the first `v % k` districts in
/// generation order receive one extra location.  Runs in O(v log v).
///
/// This is a generate-without-test heuristic: no contiguity check is
/// performed and none is promised.  Callers that need the guarantee should
/// post-validate with [`District::is_contiguous`] or use
/// [`exact_partition`](crate::redistrict::exact_partition) instead.
pub fn snake_partition(region: &Region, num_districts: usize) -> Vec<District> {
    let num_districts = num_districts.max(1);
    let base = region.num_voters() / num_districts;
    let extra = region.num_voters() % num_districts;

    let ordered = snake_order(region);
    let mut districts = Vec::with_capacity(num_districts);
    let mut start = 0;
    for i in 0..num_districts {
        let len = if i < extra { base + 1 } else { base };
        districts.push(District::new(ordered[start..start + len].iter().copied()));
        start += len;
    }
    districts
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Every location of the region appears in exactly one district.
    fn covers_exactly(districts: &[District], region: &Region) -> bool {
        let total: usize = districts.iter().map(District::size).sum();
        total == region.size()
            && region
                .locations()
                .all(|loc| districts.iter().filter(|d| d.contains(&loc)).count() == 1)
    }

    #[test]
    fn order_snakes_through_a_three_by_three() {
        let order = snake_order(&Region::square(3));
        assert_eq!(
            order,
            vec![
                Location::new(0, 0),
                Location::new(1, 0),
                Location::new(2, 0),
                Location::new(2, 1),
                Location::new(1, 1),
                Location::new(0, 1),
                Location::new(0, 2),
                Location::new(1, 2),
                Location::new(2, 2),
            ]
        );
    }

    #[test]
    fn consecutive_order_entries_share_an_edge() {
        let order = snake_order(&Region::square(4));
        for pair in order.windows(2) {
            assert!(
                pair[0].is_adjacent(&pair[1]),
                "{} and {} are not adjacent",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn single_district_takes_the_whole_region() {
        for side in [0, 1, 2, 3, 4] {
            let region = Region::square(side);
            let districts = snake_partition(&region, 1);
            assert_eq!(districts.len(), 1);
            assert_eq!(districts[0].size(), side * side);
        }
    }

    #[test]
    fn counts_and_sizes_match_the_request() {
        let region = Region::square(3);

        let districts = snake_partition(&region, 3);
        assert_eq!(districts.len(), 3);
        assert!(districts.iter().all(|d| d.size() == 3));
        assert!(covers_exactly(&districts, &region));

        let districts = snake_partition(&region, 2);
        assert_eq!(districts.len(), 2);
        let mut sizes: Vec<usize> = districts.iter().map(District::size).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![4, 5]);
        assert!(covers_exactly(&districts, &region));

        let districts = snake_partition(&region, 4);
        assert_eq!(districts.len(), 4);
        let mut sizes: Vec<usize> = districts.iter().map(District::size).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![2, 2, 2, 3]);
        assert!(covers_exactly(&districts, &region));

        let districts = snake_partition(&region, 5);
        assert_eq!(districts.len(), 5);
        let mut sizes: Vec<usize> = districts.iter().map(District::size).collect();
        sizes.sort_unstable();
        assert_eq!(sizes, vec![1, 2, 2, 2, 2]);
        assert!(covers_exactly(&districts, &region));
    }

    #[test]
    fn leading_districts_carry_the_remainder() {
        // 9 voters over 2 districts: the first district gets the extra one.
        let districts = snake_partition(&Region::square(3), 2);
        assert_eq!(districts[0].size(), 5);
        assert_eq!(districts[1].size(), 4);
    }

    #[test]
    fn zero_count_is_normalized_to_one() {
        let districts = snake_partition(&Region::square(2), 0);
        assert_eq!(districts.len(), 1);
        assert_eq!(districts[0].size(), 4);
    }

    #[test]
    fn empty_region_yields_one_empty_district() {
        let districts = snake_partition(&Region::empty(), 1);
        assert_eq!(districts.len(), 1);
        assert!(districts[0].is_empty());
    }

    #[test]
    fn three_by_three_slices_are_contiguous() {
        // Holds for these configurations because consecutive snake-order
        // entries share an edge; the partitioner itself never checks.
        let region = Region::square(3);
        for k in 1..=5 {
            for district in snake_partition(&region, k) {
                assert!(
                    district.is_contiguous(),
                    "district {district:?} of k={k} is not contiguous"
                );
            }
        }
    }

    #[test]
    fn two_by_two_halves() {
        let districts = snake_partition(&Region::square(2), 2);
        assert_eq!(districts.len(), 2);
        assert!(districts.iter().all(|d| d.size() == 2));
        assert!(districts.iter().all(District::is_contiguous));
    }
}
