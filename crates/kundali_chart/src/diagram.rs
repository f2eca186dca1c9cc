//! Diagram model: everything a renderer needs, with absolute positions.

use kundali_base::{Bhava, Graha, Rashi};
use serde::Serialize;

use crate::cluster::cluster_offset;
use crate::geometry::{CENTER, CHART_SIZE, FRAME_SEGMENTS, Point, Segment, house_anchor};

/// Sign number drawn in a house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SignLabel {
    pub bhava: u8,
    pub rashi: Rashi,
    pub at: Point,
}

/// One planet glyph.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GlyphPlacement {
    pub bhava: u8,
    pub graha: Graha,
    pub retrograde: bool,
    /// House planet anchor.
    pub anchor: Point,
    /// Offset from the anchor within the house cluster.
    pub offset: Point,
}

impl GlyphPlacement {
    /// Absolute position of the glyph.
    pub fn position(&self) -> Point {
        self.anchor.offset(self.offset)
    }

    /// Text drawn for the glyph, without the retrograde marker.
    pub const fn code(&self) -> &'static str {
        self.graha.code()
    }
}

/// A laid-out chart, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartDiagram {
    pub size: f64,
    /// "Lagna: <sign>" badge text.
    pub caption: String,
    pub segments: Vec<Segment>,
    pub center: Point,
    pub sign_labels: Vec<SignLabel>,
    pub glyphs: Vec<GlyphPlacement>,
}

/// Lay out a chart for the given houses.
///
/// Each house is matched to its fixed region by number; a house with a
/// number outside 1-12 has no region and is skipped.
pub fn layout_chart(bhavas: &[Bhava], ascendant_name: &str) -> ChartDiagram {
    let mut sign_labels = Vec::with_capacity(bhavas.len());
    let mut glyphs = Vec::new();

    for bhava in bhavas {
        let Some(anchor) = house_anchor(bhava.number) else {
            continue;
        };
        sign_labels.push(SignLabel {
            bhava: bhava.number,
            rashi: bhava.rashi,
            at: anchor.sign,
        });

        let count = bhava.grahas.len();
        for (i, placed) in bhava.grahas.iter().enumerate() {
            glyphs.push(GlyphPlacement {
                bhava: bhava.number,
                graha: placed.graha,
                retrograde: placed.retrograde,
                anchor: anchor.planets,
                offset: cluster_offset(i, count),
            });
        }
    }

    ChartDiagram {
        size: CHART_SIZE,
        caption: format!("Lagna: {ascendant_name}"),
        segments: FRAME_SEGMENTS.to_vec(),
        center: CENTER,
        sign_labels,
        glyphs,
    }
}
