use derive_more::{Display, Error};

use crate::geometry::CornerLocation;

/// Errors reported by panel and hexagon operations
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Two panel descriptors claim the same corner location
    #[display("panel {panel} has the same location as an earlier panel ({location})")]
    DuplicateLocation {
        panel: usize,
        location: CornerLocation,
    },
    /// No panel descriptor occupies this corner location
    #[display("missing the {location} panel")]
    MissingLocation { location: CornerLocation },
    /// LED count does not fit the panel storage or cannot form three sides
    #[display("panel LED count {count} is outside 3..={max}")]
    InvalidLedCount { count: u16, max: usize },
    /// Strip start corner and winding put the first run on a side the panel lacks
    #[display("strip starting at {start} does not fit a panel at {location}")]
    InvalidStartCorner {
        location: CornerLocation,
        start: CornerLocation,
    },
    /// The requested corner is not a corner of this panel
    #[display("corner {corner} does not belong to this panel")]
    CornerNotOnPanel { corner: CornerLocation },
    /// Pixel index outside the strip
    #[display("pixel index {index} out of bounds (strip has {len} pixels)")]
    IndexOutOfBounds { index: u16, len: u16 },
    /// Action queue has no free slots
    #[display("action queue is full")]
    QueueFull,
}
