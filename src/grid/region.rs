use std::collections::BTreeSet;

use anyhow::{Result, bail};

use crate::grid::Location;

/// An immutable square grid of unique locations.
///
/// A region with side length `n` holds exactly the `n * n` locations of an
/// axis-aligned square.  The simple voter model assigns one voter per
/// location, so `num_voters` and `size` coincide.  Constructed once per
/// scenario and never mutated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Region {
    side: usize,
    locations: BTreeSet<Location>,
}

impl Region {
    /// The region with no locations.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a square region of the given side length with origin `(0, 0)`.
    pub fn square(side: usize) -> Self {
        let locations = (0..side as i32)
            .flat_map(|y| (0..side as i32).map(move |x| Location::new(x, y)))
            .collect();
        Self { side, locations }
    }

    /// Create a region from an explicit collection of locations.
    ///
    /// Duplicates are ignored.  Fails unless the deduplicated set fills a
    /// square bounding box exactly.
    pub fn from_locations<I>(locations: I) -> Result<Self>
    where
        I: IntoIterator<Item = Location>,
    {
        let locations: BTreeSet<Location> = locations.into_iter().collect();
        if locations.is_empty() {
            return Ok(Self::empty());
        }

        // Non-empty, so the extrema exist.
        let min_x = locations.iter().map(|loc| loc.x).min().unwrap();
        let max_x = locations.iter().map(|loc| loc.x).max().unwrap();
        let min_y = locations.iter().map(|loc| loc.y).min().unwrap();
        let max_y = locations.iter().map(|loc| loc.y).max().unwrap();

        let width = (max_x - min_x + 1) as usize;
        let height = (max_y - min_y + 1) as usize;
        if width != height {
            bail!("locations span a {width}x{height} box, expected a square");
        }
        if locations.len() != width * height {
            bail!(
                "{} locations cannot fill a {width}x{width} grid",
                locations.len()
            );
        }

        Ok(Self { side: width, locations })
    }

    /// Number of locations in the region.
    #[inline]
    pub fn size(&self) -> usize {
        self.locations.len()
    }

    /// Side length of the square grid.
    #[inline]
    pub fn side(&self) -> usize {
        self.side
    }

    /// Number of voters: one per location in the simple model.
    #[inline]
    pub fn num_voters(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the region has no locations.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Returns true if `location` is part of the region.
    #[inline]
    pub fn contains(&self, location: &Location) -> bool {
        self.locations.contains(location)
    }

    /// Iterate over the region's locations in coordinate order.
    pub fn locations(&self) -> impl Iterator<Item = Location> + '_ {
        self.locations.iter().copied()
    }
}
