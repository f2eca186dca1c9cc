//! North Indian kundali diagram.
//!
//! Layout and rendering are split: [`layout_chart`] turns houses into a
//! [`ChartDiagram`] of absolute positions, and [`render_svg`] serializes a
//! diagram to SVG text. House regions are fixed; only the sign numbers and
//! planet glyphs inside them change between charts.

pub mod cluster;
pub mod diagram;
pub mod geometry;
pub mod svg;

pub use cluster::{COLUMN_SPREAD, PAIR_SPREAD, ROW_SPREAD, cluster_offset, cluster_offsets};
pub use diagram::{ChartDiagram, GlyphPlacement, SignLabel, layout_chart};
pub use geometry::{
    CENTER, CHART_SIZE, FRAME_SEGMENTS, HOUSE_ANCHORS, HouseAnchor, Point, Segment, house_anchor,
};
pub use svg::{render_chart_svg, render_svg};
