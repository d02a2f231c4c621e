use embassy_time::Duration;

use crate::color::Rgb;
use crate::geometry::CornerLocation;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillDirection {
    /// Sweep away from the corner, capping the far side once both sides are lit
    FromCorner,
    /// Light the far side at once, then sweep toward the corner
    ToCorner,
}

/// A corner fill, deferred as a whole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillRequest {
    pub direction: FillDirection,
    pub percent: f32,
    pub color: Rgb,
    /// Corner to fill from or toward; `None` uses the corner at the hexagon center
    pub corner: Option<CornerLocation>,
    pub duration: Duration,
}
