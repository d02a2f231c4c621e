//! Hexagon and triangle topology
//!
//! Pure lookup tables that map the six hexagon corner positions and the
//! strip winding onto the local sides of a triangular panel.
//!
//! ```text
//!   LT  MT  RT
//!   /\ \/ /\
//!   \/ /\ \/
//!   LB  MB  RB
//! ```

use derive_more::Display;

/// One of the six symmetric positions around the hexagon
///
/// Also used for the corners of a single panel.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum CornerLocation {
    #[display("LEFT TOP")]
    LeftTop = 0,
    #[display("MIDDLE TOP")]
    MiddleTop = 1,
    #[display("RIGHT TOP")]
    RightTop = 2,
    #[display("RIGHT BOTTOM")]
    RightBottom = 3,
    #[display("MIDDLE BOTTOM")]
    MiddleBottom = 4,
    #[display("LEFT BOTTOM")]
    LeftBottom = 5,
}

/// Side of a panel in its local frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum SideLocation {
    Top = 0,
    Right = 1,
    Bottom = 2,
    Left = 3,
}

/// Direction in which the physical strip winds around its panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindDirection {
    Clockwise,
    CounterClockwise,
}

/// Which way a triangle points, fixed by its hexagon position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelShape {
    /// Flat side at the bottom: right, bottom and left sides
    PointUp,
    /// Flat side at the top: top, right and left sides
    PointDown,
}

impl CornerLocation {
    /// All locations in hexagon order
    pub const ALL: [Self; 6] = [
        Self::LeftTop,
        Self::MiddleTop,
        Self::RightTop,
        Self::RightBottom,
        Self::MiddleBottom,
        Self::LeftBottom,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Shape of a panel placed at this hexagon position
    pub const fn shape(self) -> PanelShape {
        match self {
            Self::MiddleTop | Self::LeftBottom | Self::RightBottom => PanelShape::PointDown,
            Self::MiddleBottom | Self::LeftTop | Self::RightTop => PanelShape::PointUp,
        }
    }

    /// Corner diametrically opposite this one
    ///
    /// For a panel at this position, that is the corner touching the
    /// hexagon center.
    pub const fn opposite(self) -> Self {
        match self {
            Self::MiddleTop => Self::MiddleBottom,
            Self::MiddleBottom => Self::MiddleTop,
            Self::LeftTop => Self::RightBottom,
            Self::LeftBottom => Self::RightTop,
            Self::RightTop => Self::LeftBottom,
            Self::RightBottom => Self::LeftTop,
        }
    }

    /// Side facing away from this corner
    pub const fn opposite_side(self) -> SideLocation {
        match self {
            Self::MiddleTop => SideLocation::Bottom,
            Self::MiddleBottom => SideLocation::Top,
            Self::LeftTop | Self::LeftBottom => SideLocation::Right,
            Self::RightTop | Self::RightBottom => SideLocation::Left,
        }
    }

    /// The two sides meeting at this corner, as (vertical, horizontal)
    ///
    /// Middle corners sit between the left and right sides.
    pub const fn adjacent_sides(self) -> (SideLocation, SideLocation) {
        match self {
            Self::MiddleTop | Self::MiddleBottom => (SideLocation::Left, SideLocation::Right),
            Self::LeftTop => (SideLocation::Top, SideLocation::Left),
            Self::RightTop => (SideLocation::Top, SideLocation::Right),
            Self::LeftBottom => (SideLocation::Bottom, SideLocation::Left),
            Self::RightBottom => (SideLocation::Bottom, SideLocation::Right),
        }
    }

    /// The other side meeting at this corner, seen from `side`
    pub fn other_side(self, side: SideLocation) -> SideLocation {
        let (vertical, horizontal) = self.adjacent_sides();
        match self {
            Self::MiddleTop | Self::MiddleBottom => {
                if side == SideLocation::Left {
                    SideLocation::Right
                } else {
                    SideLocation::Left
                }
            }
            _ if side == horizontal => vertical,
            _ => horizontal,
        }
    }
}

impl PanelShape {
    /// The three sides a panel of this shape has
    pub const fn sides(self) -> [SideLocation; 3] {
        match self {
            Self::PointUp => [SideLocation::Right, SideLocation::Bottom, SideLocation::Left],
            Self::PointDown => [SideLocation::Top, SideLocation::Right, SideLocation::Left],
        }
    }

    pub fn has_side(self, side: SideLocation) -> bool {
        self.sides().contains(&side)
    }

    /// Side following `current` when walking the strip in `wind` direction
    ///
    /// Returns `None` if `current` is not a side of this shape.
    pub const fn next_side(
        self,
        current: SideLocation,
        wind: WindDirection,
    ) -> Option<SideLocation> {
        let cw = matches!(wind, WindDirection::Clockwise);
        let next = match (self, current) {
            (Self::PointDown, SideLocation::Top) => {
                if cw {
                    SideLocation::Right
                } else {
                    SideLocation::Left
                }
            }
            (Self::PointDown, SideLocation::Right) => {
                if cw {
                    SideLocation::Left
                } else {
                    SideLocation::Top
                }
            }
            (Self::PointDown, SideLocation::Left) => {
                if cw {
                    SideLocation::Top
                } else {
                    SideLocation::Right
                }
            }
            (Self::PointUp, SideLocation::Right) => {
                if cw {
                    SideLocation::Bottom
                } else {
                    SideLocation::Left
                }
            }
            (Self::PointUp, SideLocation::Bottom) => {
                if cw {
                    SideLocation::Left
                } else {
                    SideLocation::Right
                }
            }
            (Self::PointUp, SideLocation::Left) => {
                if cw {
                    SideLocation::Right
                } else {
                    SideLocation::Bottom
                }
            }
            (Self::PointDown, SideLocation::Bottom) | (Self::PointUp, SideLocation::Top) => {
                return None;
            }
        };
        Some(next)
    }
}

/// Side occupied by the first run of pixels of a strip
///
/// Depends only on the corner where the strip starts and its winding.
pub const fn first_segment_side(start: CornerLocation, wind: WindDirection) -> SideLocation {
    let cw = matches!(wind, WindDirection::Clockwise);
    match start {
        CornerLocation::MiddleTop => {
            if cw {
                SideLocation::Right
            } else {
                SideLocation::Left
            }
        }
        CornerLocation::MiddleBottom => {
            if cw {
                SideLocation::Left
            } else {
                SideLocation::Right
            }
        }
        CornerLocation::LeftTop => {
            if cw {
                SideLocation::Top
            } else {
                SideLocation::Left
            }
        }
        CornerLocation::LeftBottom => {
            if cw {
                SideLocation::Left
            } else {
                SideLocation::Bottom
            }
        }
        CornerLocation::RightTop => {
            if cw {
                SideLocation::Right
            } else {
                SideLocation::Top
            }
        }
        CornerLocation::RightBottom => {
            if cw {
                SideLocation::Bottom
            } else {
                SideLocation::Right
            }
        }
    }
}
