//! Random example request sets.
//!
//! Produces unique request positions drawn uniformly from the disk, for
//! demos and for exercising the policies on varied input.

use rand::Rng;
use std::collections::HashSet;

use crate::models::{DiskExtent, Position, RequestSet};

/// Number of requests in a generated example set.
pub const EXAMPLE_REQUEST_COUNT: usize = 5;

/// How many example requests fit on `extent`.
///
/// [`EXAMPLE_REQUEST_COUNT`], capped by the number of positions.
pub fn example_request_count(extent: DiskExtent) -> usize {
    let size = usize::try_from(extent.size()).unwrap_or(usize::MAX);
    EXAMPLE_REQUEST_COUNT.min(size)
}

/// Draws `count` distinct positions on `extent`, in draw order.
///
/// `count` is capped by the disk size so the draw always terminates.
pub fn random_requests<R: Rng + ?Sized>(
    rng: &mut R,
    extent: DiskExtent,
    count: usize,
) -> RequestSet {
    let size = usize::try_from(extent.size()).unwrap_or(usize::MAX);
    let count = count.min(size);

    let mut seen: HashSet<Position> = HashSet::with_capacity(count);
    let mut positions = Vec::with_capacity(count);
    while positions.len() < count {
        let position = rng.random_range(0..extent.size());
        if seen.insert(position) {
            positions.push(position);
        }
    }

    RequestSet::new(positions)
}

/// An example request set of [`example_request_count`] positions.
pub fn example_requests<R: Rng + ?Sized>(rng: &mut R, extent: DiskExtent) -> RequestSet {
    random_requests(rng, extent, example_request_count(extent))
}
