#![no_std]

pub mod clock;
pub mod color;
pub mod driver;
pub mod effect;
pub mod error;
pub mod geometry;
pub mod hexagon;
pub mod led;
pub mod math8;
pub mod panel;
pub mod scheduler;
pub mod segment;
pub mod strip;

pub use clock::Clock;
pub use color::{Rgb, color, rgb_from_u32, rgb_to_u32};
pub use driver::{MemoryDriver, PixelDriver, SmartLedsDriver};
pub use effect::{PanelAction, speed_to_duration};
pub use error::Error;
pub use geometry::{CornerLocation, PanelShape, SideLocation, WindDirection};
pub use hexagon::{Hexagon, HexagonAction, HexagonConfig};
pub use panel::{TriPanel, TriPanelConfig};
pub use scheduler::{ActionQueue, Scheduled};
pub use segment::PanelSegment;

pub use embassy_time::{Duration, Instant};
