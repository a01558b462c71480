use std::collections::BTreeSet;

use ahash::AHashSet;
use anyhow::{Result, ensure};

use crate::graph::Graph;
use crate::grid::{District, Location, Region};

/// Partition a region into contiguous districts of exactly `district_size`
/// locations, or report that no such tiling exists.
///
/// Unlike [`snake_partition`](crate::redistrict::snake_partition), the
/// result is verified: districts are pairwise disjoint, cover the region,
/// and each is contiguous with exactly `district_size` members.  Returns
/// `None` when the region admits no tiling.  A size of zero is an error.
pub fn exact_partition(region: &Region, district_size: usize) -> Result<Option<Vec<District>>> {
    tile(&Graph::from_region(region), district_size)
}

/// Partition an adjacency graph into contiguous districts of exactly
/// `district_size` vertices, or report that no tiling exists.
///
/// Rejects quickly when some component's size is not a multiple of
/// `district_size`, then runs a backtracking search: grow every connected
/// candidate of the target size around the smallest remaining location,
/// remove it, and recurse on the remainder, pruning any remainder that
/// fails the divisibility check.  The divisibility condition alone is
/// necessary but not sufficient, so the search can still come back empty
/// for graphs that pass it.  The input graph is not modified.
pub fn tile(graph: &Graph, district_size: usize) -> Result<Option<Vec<District>>> {
    ensure!(district_size > 0, "district size must be positive");

    if !graph.is_partitionable(district_size)? {
        return Ok(None);
    }

    Ok(solve(graph, district_size).map(|sets| {
        let mut districts: Vec<District> = sets.into_iter().map(District::new).collect();
        districts.sort_unstable();
        districts
    }))
}

/// Backtracking step: carve one district containing the smallest remaining
/// location, then tile the rest.
fn solve(graph: &Graph, district_size: usize) -> Option<Vec<BTreeSet<Location>>> {
    if graph.is_empty() {
        return Some(Vec::new());
    }

    // Non-empty, so a smallest vertex exists.  Any tiling must cover it, so
    // enumerating the candidates that contain it keeps the search complete.
    let anchor = graph.vertices().min().unwrap();
    for candidate in connected_sets_around(graph, anchor, district_size) {
        let rest = graph.without(candidate.iter());
        if rest
            .components()
            .iter()
            .any(|component| component.len() % district_size != 0)
        {
            continue;
        }
        if let Some(mut tail) = solve(&rest, district_size) {
            tail.push(candidate);
            return Some(tail);
        }
    }
    None
}

/// Every connected set of exactly `size` vertices containing `anchor`, each
/// produced once.
///
/// Anchored growth: candidates are pulled from an ordered extension list
/// and, once tried, stay banned for the rest of the branch, so no set is
/// reached along two different orders.
fn connected_sets_around(graph: &Graph, anchor: Location, size: usize) -> Vec<BTreeSet<Location>> {
    let mut result = Vec::new();
    let mut set = BTreeSet::from([anchor]);

    let mut frontier: Vec<Location> = graph.neighbors(&anchor).collect();
    frontier.sort_unstable();

    let mut considered: AHashSet<Location> = frontier.iter().copied().collect();
    considered.insert(anchor);

    grow(graph, size, &mut set, frontier, &mut considered, &mut result);
    result
}

fn grow(
    graph: &Graph,
    size: usize,
    set: &mut BTreeSet<Location>,
    mut frontier: Vec<Location>,
    considered: &mut AHashSet<Location>,
    result: &mut Vec<BTreeSet<Location>>,
) {
    if set.len() == size {
        result.push(set.clone());
        return;
    }

    while let Some(next) = frontier.pop() {
        // Extending with `next` opens up its not-yet-considered neighbors.
        let mut fresh: Vec<Location> = graph
            .neighbors(&next)
            .filter(|v| !considered.contains(v))
            .collect();
        fresh.sort_unstable();
        considered.extend(fresh.iter().copied());

        let mut extended = frontier.clone();
        extended.extend(fresh.iter().copied());

        set.insert(next);
        grow(graph, size, set, extended, considered, result);
        set.remove(&next);

        // `next` stays considered: it must not re-enter this branch through
        // a later candidate's neighborhood.
        for v in &fresh {
            considered.remove(v);
        }
    }
}
