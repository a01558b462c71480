#![doc = "Gridmander public API"]
//! An algorithmic redistricting core for square grids: partition a region of
//! locations into contiguous districts, enumerate every district of a given
//! size, or search for a verified exact-size tiling over the adjacency graph.

pub mod graph;
pub mod grid;
pub mod redistrict;

#[doc(inline)]
pub use grid::{District, Location, Region};

#[doc(inline)]
pub use graph::Graph;

#[doc(inline)]
pub use redistrict::{
    all_districts_of_size, exact_partition, random_partition, snake_order, snake_partition, tile,
};
