//! Wind-direction indicator.
//!
//! The indicator is a downward arrow rotated by the reported bearing, with a
//! screen-reader text equivalent.

use std::fmt;

const ARROW: &str = "⬇";
const COMPASS_POINTS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindDirection {
    degrees: u16,
}

impl WindDirection {
    pub fn new(degrees: u16) -> Self {
        Self { degrees }
    }

    pub fn degrees(&self) -> u16 {
        self.degrees
    }

    pub fn arrow(&self) -> &'static str {
        ARROW
    }

    /// CSS transform applied to the arrow, e.g. `rotate(90deg)`
    pub fn transform(&self) -> String {
        format!("rotate({}deg)", self.degrees)
    }

    pub fn style(&self) -> String {
        format!("transform: {}", self.transform())
    }

    /// Accessible text equivalent of the arrow
    pub fn screen_reader_text(&self) -> String {
        format!("Wind Direction: {} degrees", self.degrees)
    }

    /// Nearest of the eight principal compass points
    pub fn compass_point(&self) -> &'static str {
        let bearing = usize::from(self.degrees % 360);
        COMPASS_POINTS[((bearing * 2 + 45) / 90) % COMPASS_POINTS.len()]
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}° ({})", ARROW, self.degrees, self.compass_point())
    }
}
