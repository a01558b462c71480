use std::collections::BTreeSet;

use ahash::AHashSet;
use anyhow::{Result, ensure};

use crate::grid::{District, Location, Region};

/// Generate every distinct district of exactly `district_size` locations
/// that can be traced through the region as a self-avoiding run of
/// pairwise-adjacent steps.
///
/// Special cases: a region no larger than the requested size yields the
/// single district covering the whole region, size 1 yields one singleton
/// district per location, and the empty region yields nothing.  A size of
/// zero is an error.
///
/// The same shape is reachable through many traces; duplicates are
/// collapsed by location-set identity and the result is sorted, so repeated
/// calls with identical inputs return identical output.
///
/// This enumeration is the computational bottleneck of the crate: the
/// number of traces grows steeply with region and district size.  Growth is
/// anchored at each starting location and the recursion depth is bounded by
/// the target size, so the cost stays far below naive subset enumeration.
pub fn all_districts_of_size(region: &Region, district_size: usize) -> Result<Vec<District>> {
    ensure!(district_size > 0, "district size must be positive");

    if region.is_empty() {
        return Ok(Vec::new());
    }
    if region.size() <= district_size {
        return Ok(vec![District::new(region.locations())]);
    }
    if district_size == 1 {
        return Ok(region.locations().map(|loc| District::new([loc])).collect());
    }

    let mut seen: AHashSet<BTreeSet<Location>> = AHashSet::new();
    for anchor in region.locations() {
        let mut in_trace = BTreeSet::from([anchor]);
        extend_trace(region, district_size, anchor, &mut in_trace, &mut seen);
    }

    let mut districts: Vec<District> = seen.into_iter().map(District::new).collect();
    districts.sort_unstable();
    Ok(districts)
}

/// Depth-first extension of a self-avoiding trace from its last location.
fn extend_trace(
    region: &Region,
    target: usize,
    last: Location,
    in_trace: &mut BTreeSet<Location>,
    seen: &mut AHashSet<BTreeSet<Location>>,
) {
    if in_trace.len() == target {
        seen.insert(in_trace.clone());
        return;
    }

    for next in last.neighbors() {
        if region.contains(&next) && in_trace.insert(next) {
            extend_trace(region, target, next, in_trace, seen);
            in_trace.remove(&next);
        }
    }
}
