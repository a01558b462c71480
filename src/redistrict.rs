//! Partitioning and enumeration operations over a [`Region`](crate::Region).
//!
//! Two partitioners with deliberately distinct guarantees:
//!
//! * [`snake_partition`]: fast boustrophedon heuristic; exact counts and
//!   near-equal sizes, no contiguity verification.
//! * [`exact_partition`] / [`tile`]: backtracking search producing a
//!   verified tiling into contiguous districts of one exact size, or
//!   reporting that none exists.
//!
//! Alongside them, [`all_districts_of_size`] enumerates every distinct
//! district of a given size and [`random_partition`] grows contiguous
//! districts from random seeds.

mod enumerate;
mod exact;
mod random;
mod snake;

pub use enumerate::all_districts_of_size;
pub use exact::{exact_partition, tile};
pub use random::random_partition;
pub use snake::{snake_order, snake_partition};
