//! Disk geometry and pending request models.

use serde::{Deserialize, Serialize};

/// A head or request position on the disk, in `[0, size)`.
pub type Position = u64;

/// Absolute head movement between two positions.
pub type Distance = u64;

/// Size of the simulated disk.
///
/// Valid positions are `0..size`. A size of zero is a precondition
/// violation rejected by [`crate::validation`], not by this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiskExtent {
    size: u64,
}

impl DiskExtent {
    /// Creates an extent of `size` positions.
    pub fn new(size: u64) -> Self {
        Self { size }
    }

    /// Number of addressable positions.
    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    /// Highest addressable position (`size - 1`), the C-SCAN turnaround point.
    #[inline]
    pub fn last_position(&self) -> Position {
        self.size.saturating_sub(1)
    }

    /// Whether `position` lies on the disk.
    #[inline]
    pub fn contains(&self, position: Position) -> bool {
        position < self.size
    }
}

/// Pending I/O targets in insertion order.
///
/// Insertion order matters: SSTF breaks distance ties in favour of the
/// earliest-inserted request. Duplicates are rejected by the caller
/// (see [`crate::validation::validate_input`]); the set does not check.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RequestSet {
    positions: Vec<Position>,
}

impl RequestSet {
    /// Wraps already-validated positions.
    pub fn new(positions: Vec<Position>) -> Self {
        Self { positions }
    }

    /// Copies positions from a slice.
    pub fn from_slice(positions: &[Position]) -> Self {
        Self::new(positions.to_vec())
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions in insertion order.
    pub fn as_slice(&self) -> &[Position] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = Position> + '_ {
        self.positions.iter().copied()
    }

    pub fn contains(&self, position: Position) -> bool {
        self.positions.contains(&position)
    }

    /// Positions sorted ascending, the sweep order of SCAN and C-SCAN.
    pub fn sorted(&self) -> Vec<Position> {
        let mut sorted = self.positions.clone();
        sorted.sort_unstable();
        sorted
    }
}

impl FromIterator<Position> for RequestSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl From<Vec<Position>> for RequestSet {
    fn from(positions: Vec<Position>) -> Self {
        Self::new(positions)
    }
}
