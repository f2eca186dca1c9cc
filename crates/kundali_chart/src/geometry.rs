//! Fixed geometry of the North Indian diamond chart.
//!
//! The chart is a 400x400 square split by both diagonals and by the diamond
//! joining the four edge midpoints. That yields 12 regions: four diamonds
//! (houses 1, 4, 7, 10 at top, left, bottom, right) and eight triangles
//! (2-3 top-left, 5-6 bottom-left, 8-9 bottom-right, 11-12 top-right).
//! Houses run counter-clockwise from the top diamond.

use serde::Serialize;

/// Side length of the square frame, in SVG user units.
pub const CHART_SIZE: f64 = 400.0;

/// A 2D point (SVG user units; y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// This point shifted by `d`.
    pub fn offset(self, d: Point) -> Self {
        Self::new(self.x + d.x, self.y + d.y)
    }
}

pub const CENTER: Point = Point::new(200.0, 200.0);
pub const TOP_LEFT: Point = Point::new(0.0, 0.0);
pub const TOP_RIGHT: Point = Point::new(CHART_SIZE, 0.0);
pub const BOTTOM_LEFT: Point = Point::new(0.0, CHART_SIZE);
pub const BOTTOM_RIGHT: Point = Point::new(CHART_SIZE, CHART_SIZE);
pub const MID_TOP: Point = Point::new(200.0, 0.0);
pub const MID_LEFT: Point = Point::new(0.0, 200.0);
pub const MID_BOTTOM: Point = Point::new(200.0, CHART_SIZE);
pub const MID_RIGHT: Point = Point::new(CHART_SIZE, 200.0);

/// A straight line of the chart frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Interior lines: the two diagonals, then the diamond edges.
pub const FRAME_SEGMENTS: [Segment; 6] = [
    Segment { from: TOP_LEFT, to: BOTTOM_RIGHT },
    Segment { from: TOP_RIGHT, to: BOTTOM_LEFT },
    Segment { from: MID_TOP, to: MID_LEFT },
    Segment { from: MID_LEFT, to: MID_BOTTOM },
    Segment { from: MID_BOTTOM, to: MID_RIGHT },
    Segment { from: MID_RIGHT, to: MID_TOP },
];

/// Anchor points for one fixed house region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HouseAnchor {
    /// House number (1-12).
    pub bhava: u8,
    /// Centre of the planet cluster, near the region's centroid.
    pub planets: Point,
    /// Sign-number label, near the region's inner edge.
    pub sign: Point,
}

const fn anchor(bhava: u8, px: f64, py: f64, sx: f64, sy: f64) -> HouseAnchor {
    HouseAnchor {
        bhava,
        planets: Point::new(px, py),
        sign: Point::new(sx, sy),
    }
}

/// Anchors for houses 1-12, in house order.
pub const HOUSE_ANCHORS: [HouseAnchor; 12] = [
    anchor(1, 200.0, 90.0, 200.0, 175.0),
    anchor(2, 100.0, 40.0, 100.0, 90.0),
    anchor(3, 40.0, 100.0, 90.0, 100.0),
    anchor(4, 100.0, 200.0, 165.0, 200.0),
    anchor(5, 40.0, 300.0, 90.0, 300.0),
    anchor(6, 100.0, 360.0, 100.0, 310.0),
    anchor(7, 200.0, 310.0, 200.0, 225.0),
    anchor(8, 300.0, 360.0, 300.0, 310.0),
    anchor(9, 360.0, 300.0, 310.0, 300.0),
    anchor(10, 300.0, 200.0, 235.0, 200.0),
    anchor(11, 360.0, 100.0, 310.0, 100.0),
    anchor(12, 300.0, 40.0, 300.0, 90.0),
];

/// Anchors for house `number` (1-12).
pub fn house_anchor(number: u8) -> Option<&'static HouseAnchor> {
    HOUSE_ANCHORS.iter().find(|a| a.bhava == number)
}
