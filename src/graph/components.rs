use std::collections::{BTreeSet, VecDeque};

use ahash::AHashSet;
use anyhow::{Result, ensure};

use crate::graph::Graph;
use crate::grid::Location;

impl Graph {
    /// Decompose the graph into its maximal connected components.
    ///
    /// Every vertex lands in exactly one component and the components
    /// together cover the vertex set; the empty graph yields no components.
    /// Components are emitted in order of their smallest location, so
    /// repeated calls produce identical output.
    pub fn components(&self) -> Vec<BTreeSet<Location>> {
        let mut components = Vec::new();
        let mut visited: AHashSet<Location> = AHashSet::with_capacity(self.num_vertices());

        let mut vertices: Vec<Location> = self.vertices().collect();
        vertices.sort_unstable();

        for u in vertices {
            if !visited.insert(u) {
                continue;
            }

            let mut component = BTreeSet::from([u]);
            let mut queue = VecDeque::from([u]);
            while let Some(v) = queue.pop_front() {
                for w in self.neighbors(&v) {
                    if visited.insert(w) {
                        component.insert(w);
                        queue.push_back(w);
                    }
                }
            }
            components.push(component);
        }
        components
    }

    /// Cheap necessary condition for an exact-size contiguous tiling: every
    /// connected component must have a size divisible by `district_size`.
    ///
    /// Rules out impossible inputs before a constructive search is
    /// attempted; passing it does not guarantee a tiling exists.  The empty
    /// graph is vacuously partitionable.  A district size of zero is an
    /// error.
    pub fn is_partitionable(&self, district_size: usize) -> Result<bool> {
        ensure!(district_size > 0, "district size must be positive");
        Ok(self
            .components()
            .iter()
            .all(|component| component.len() % district_size == 0))
    }
}
