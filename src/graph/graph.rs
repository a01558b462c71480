use ahash::{AHashMap, AHashSet};
use anyhow::{Result, bail};

use crate::grid::{Location, Region};

/// A 4-connected adjacency graph over a set of locations.
///
/// Every vertex maps to the set of its neighbors.  Edges are symmetric and
/// self-loop-free; an isolated vertex maps to an empty set rather than being
/// absent.  Graphs are values: builders return fresh structures and no
/// operation mutates its input, so a removal can be probed without
/// committing to it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    adjacency: AHashMap<Location, AHashSet<Location>>,
}

impl Graph {
    /// Build the adjacency graph over all locations of a region.
    pub fn from_region(region: &Region) -> Self {
        Self::from_locations(region.locations())
    }

    /// Build the adjacency graph over an arbitrary collection of locations.
    ///
    /// Two locations are connected iff both are present and differ by
    /// exactly one step along one axis.  Duplicates are ignored.
    pub fn from_locations<I>(locations: I) -> Self
    where
        I: IntoIterator<Item = Location>,
    {
        let vertices: AHashSet<Location> = locations.into_iter().collect();
        let adjacency = vertices
            .iter()
            .map(|&u| {
                let neighbors = u
                    .neighbors()
                    .into_iter()
                    .filter(|v| vertices.contains(v))
                    .collect();
                (u, neighbors)
            })
            .collect();
        Self { adjacency }
    }

    /// Build a graph from caller-supplied adjacency sets, validating them.
    ///
    /// Fails on self-loops, on edges whose far end is not a vertex of the
    /// map, and on asymmetric edges.
    pub fn from_adjacency(adjacency: AHashMap<Location, AHashSet<Location>>) -> Result<Self> {
        for (u, neighbors) in adjacency.iter() {
            for v in neighbors.iter() {
                if u == v {
                    bail!("self-loop at {u}");
                }
                let Some(back) = adjacency.get(v) else {
                    bail!("edge ({u}, {v}) points outside the vertex set");
                };
                if !back.contains(u) {
                    bail!("asymmetric edge: ({u}, {v}) present but ({v}, {u}) missing");
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Number of vertices.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns true if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// Returns true if `location` is a vertex of the graph.
    #[inline]
    pub fn contains(&self, location: &Location) -> bool {
        self.adjacency.contains_key(location)
    }

    /// Degree of `location`; zero if it is not a vertex.
    #[inline]
    pub fn degree(&self, location: &Location) -> usize {
        self.adjacency.get(location).map_or(0, |n| n.len())
    }

    /// Iterate over the graph's vertices in arbitrary order.
    pub fn vertices(&self) -> impl Iterator<Item = Location> + '_ {
        self.adjacency.keys().copied()
    }

    /// Iterate over the neighbors of `location`; empty if it is not a
    /// vertex.
    pub fn neighbors(&self, location: &Location) -> impl Iterator<Item = Location> + '_ {
        self.adjacency
            .get(location)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter())
            .copied()
    }

    /// A copy of this graph with the given locations and their incident
    /// edges removed.  The receiver is left untouched.
    pub fn without<'a, I>(&self, locations: I) -> Self
    where
        I: IntoIterator<Item = &'a Location>,
    {
        let removed: AHashSet<Location> = locations.into_iter().copied().collect();
        let adjacency = self
            .adjacency
            .iter()
            .filter(|&(u, _)| !removed.contains(u))
            .map(|(&u, neighbors)| {
                let kept = neighbors
                    .iter()
                    .filter(|v| !removed.contains(v))
                    .copied()
                    .collect();
                (u, kept)
            })
            .collect();
        Self { adjacency }
    }
}
