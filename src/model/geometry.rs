//! Paper-space geometry primitives
//!
//! All values are in paper units (inches) with the origin at the top-left
//! corner of the page and y growing downward.

use serde::Serialize;

/// Blank border left around a grid centered on the page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Margins {
    /// Top and bottom margin
    pub top_margin: f32,
    /// Left and right margin
    pub side_margin: f32,
}

impl Margins {
    /// True when the grid extends past the paper edge on either axis
    pub fn is_negative(&self) -> bool {
        self.top_margin < 0.0 || self.side_margin < 0.0
    }
}

/// A single grid cell on the page
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub row: usize,
    pub col: usize,
}

impl Slot {
    /// Map this slot through a uniform scale (e.g. pixels per inch)
    pub fn scaled(&self, factor: f32) -> Slot {
        Slot {
            x: self.x * factor,
            y: self.y * factor,
            width: self.width * factor,
            height: self.height * factor,
            ..*self
        }
    }

    /// Position of this slot in row-major fill order
    pub fn index(&self, grid_cols: usize) -> usize {
        self.row * grid_cols + self.col
    }
}

/// A straight stroke from (x1, y1) to (x2, y2)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LineSegment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl LineSegment {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Signed length along the segment's axis; negative for inverted ticks
    pub fn length(&self) -> f32 {
        (self.x2 - self.x1) + (self.y2 - self.y1)
    }

    pub fn scaled(&self, factor: f32) -> LineSegment {
        LineSegment {
            x1: self.x1 * factor,
            y1: self.y1 * factor,
            x2: self.x2 * factor,
            y2: self.y2 * factor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_scaled() {
        let slot = Slot {
            x: 0.75,
            y: 0.5,
            width: 3.5,
            height: 2.0,
            row: 1,
            col: 1,
        };
        let px = slot.scaled(100.0);
        assert_eq!(px.x, 75.0);
        assert_eq!(px.y, 50.0);
        assert_eq!(px.width, 350.0);
        assert_eq!(px.height, 200.0);
        assert_eq!((px.row, px.col), (1, 1));
        assert_eq!(slot.index(2), 3);
    }

    #[test]
    fn test_segment_length() {
        assert_eq!(LineSegment::new(0.0, 1.0, 0.375, 1.0).length(), 0.375);
        assert_eq!(LineSegment::new(2.0, 0.0, 2.0, 0.25).length(), 0.25);
        // Ticks pointing the "wrong" way when the margin is negative
        assert!(LineSegment::new(0.0, 1.0, -0.5, 1.0).length() < 0.0);
    }

    #[test]
    fn test_negative_margins() {
        let ok = Margins {
            top_margin: 0.5,
            side_margin: 0.0,
        };
        assert!(!ok.is_negative());
        let overflow = Margins {
            top_margin: 0.5,
            side_margin: -0.25,
        };
        assert!(overflow.is_negative());
    }
}
