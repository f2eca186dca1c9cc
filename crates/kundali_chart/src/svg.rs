//! SVG rendering of a [`ChartDiagram`].
//!
//! Output is a pure function of the diagram: the same diagram always renders
//! to the same bytes.

use kundali_base::Bhava;

use crate::diagram::{ChartDiagram, GlyphPlacement, layout_chart};

const LINE_COLOR: &str = "#FCD34D";
const FRAME_FILL: &str = "rgba(30, 27, 75, 0.5)";
const SIGN_TEXT: &str = "#DDD6FE";
const SIGN_BOX_FILL: &str = "rgba(139, 92, 246, 0.3)";
const SIGN_BOX_STROKE: &str = "rgba(139, 92, 246, 0.5)";
const GLYPH_HIGHLIGHT: &str = "#FCD34D";
const GLYPH_PLAIN: &str = "#FFFFFF";

/// Side of the rounded square behind each sign number.
const SIGN_BOX: f64 = 20.0;

/// Height reserved above the frame for the lagna badge.
const CAPTION_BAND: f64 = 24.0;

fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

fn render_glyph(svg: &mut String, glyph: &GlyphPlacement) {
    let fill = if glyph.graha.is_highlighted() {
        GLYPH_HIGHLIGHT
    } else {
        GLYPH_PLAIN
    };
    let p = glyph.position();
    svg.push_str(&format!(
        "<text x=\"{}\" y=\"{}\" fill=\"{fill}\" font-size=\"10\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}",
        p.x,
        p.y,
        glyph.code()
    ));
    if glyph.retrograde {
        svg.push_str("<tspan font-size=\"7\" dy=\"-3\" dx=\"1\">R</tspan>");
    }
    svg.push_str("</text>\n");
}

/// Render a laid-out diagram as a standalone SVG document.
pub fn render_svg(diagram: &ChartDiagram) -> String {
    let size = diagram.size;
    let mut svg = String::new();

    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 {} {size} {}\" width=\"{size}\" height=\"{}\">\n",
        -CAPTION_BAND,
        size + CAPTION_BAND,
        size + CAPTION_BAND,
    ));
    svg.push_str(&format!(
        "<text x=\"0\" y=\"{}\" fill=\"{LINE_COLOR}\" font-size=\"10\" font-weight=\"bold\">{}</text>\n",
        -CAPTION_BAND / 3.0,
        escape_xml(&diagram.caption)
    ));
    svg.push_str(&format!(
        "<rect x=\"1\" y=\"1\" width=\"{}\" height=\"{}\" stroke=\"{LINE_COLOR}\" stroke-width=\"1.5\" fill=\"{FRAME_FILL}\"/>\n",
        size - 2.0,
        size - 2.0
    ));

    for seg in &diagram.segments {
        svg.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{LINE_COLOR}\" stroke-width=\"1.5\" stroke-opacity=\"0.7\"/>\n",
            seg.from.x, seg.from.y, seg.to.x, seg.to.y
        ));
    }

    for label in &diagram.sign_labels {
        let half = SIGN_BOX / 2.0;
        svg.push_str(&format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{SIGN_BOX}\" height=\"{SIGN_BOX}\" rx=\"4\" fill=\"{SIGN_BOX_FILL}\" stroke=\"{SIGN_BOX_STROKE}\" stroke-width=\"0.5\"/>\n",
            label.at.x - half,
            label.at.y - half
        ));
        svg.push_str(&format!(
            "<text x=\"{}\" y=\"{}\" fill=\"{SIGN_TEXT}\" font-size=\"12\" font-weight=\"bold\" text-anchor=\"middle\" dominant-baseline=\"middle\">{}</text>\n",
            label.at.x,
            label.at.y,
            label.rashi.number()
        ));
    }

    for glyph in &diagram.glyphs {
        render_glyph(&mut svg, glyph);
    }

    svg.push_str(&format!(
        "<circle cx=\"{}\" cy=\"{}\" r=\"2\" fill=\"{LINE_COLOR}\"/>\n",
        diagram.center.x, diagram.center.y
    ));
    svg.push_str("</svg>\n");
    svg
}

/// Lay out and render houses in one step.
pub fn render_chart_svg(bhavas: &[Bhava], ascendant_name: &str) -> String {
    render_svg(&layout_chart(bhavas, ascendant_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kundali_base::{Graha, PlacedGraha, Rashi, build_bhavas};

    fn sample() -> Vec<Bhava> {
        let mut bhavas = build_bhavas(Rashi::Mesha);
        for (g, n, r) in [
            (Graha::Surya, 1, false),
            (Graha::Shani, 1, true),
            (Graha::Rahu, 4, true),
            (Graha::Ketu, 10, false),
        ] {
            let b = &mut bhavas[n - 1];
            b.grahas.push(PlacedGraha::new(g, b.rashi, 3.25, r, b.number));
        }
        bhavas
    }

    #[test]
    fn escapes_markup() {
        assert_eq!(escape_xml("a<b & \"c\""), "a&lt;b &amp; &quot;c&quot;");
    }

    #[test]
    fn document_structure() {
        let svg = render_chart_svg(&sample(), "Aries");
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>\n"));
        assert!(svg.contains("viewBox=\"0 -24 400 424\""));
        assert!(svg.contains(">Lagna: Aries</text>"));
        assert_eq!(svg.matches("<line ").count(), 6);
        assert_eq!(svg.matches("rx=\"4\"").count(), 12);
        assert!(svg.contains("<circle cx=\"200\" cy=\"200\" r=\"2\""));
    }

    #[test]
    fn frame_lines_render_integers() {
        let svg = render_chart_svg(&sample(), "Aries");
        assert!(svg.contains("<line x1=\"0\" y1=\"0\" x2=\"400\" y2=\"400\""));
        assert!(svg.contains("<line x1=\"200\" y1=\"0\" x2=\"0\" y2=\"200\""));
    }

    #[test]
    fn glyphs_with_retrograde_marker() {
        let svg = render_chart_svg(&sample(), "Aries");
        assert_eq!(svg.matches("dx=\"1\">R</tspan>").count(), 2);
        // Sun and Saturn share house 1: a pair around (200, 90).
        assert!(svg.contains(&format!("<text x=\"192\" y=\"90\" fill=\"{GLYPH_HIGHLIGHT}\"")));
        assert!(svg.contains("<text x=\"208\" y=\"90\" fill=\"#FFFFFF\""));
        assert!(svg.contains(">Sa<tspan"));
        assert!(svg.contains(">Ke</text>"));
    }

    #[test]
    fn sign_numbers_drawn() {
        let svg = render_chart_svg(&sample(), "Aries");
        assert!(svg.contains("<text x=\"200\" y=\"175\""));
        assert!(svg.contains(">12</text>"));
    }

    #[test]
    fn caption_is_escaped() {
        let svg = render_chart_svg(&sample(), "<Aries>");
        assert!(svg.contains("Lagna: &lt;Aries&gt;"));
    }

    #[test]
    fn rendering_is_pure() {
        let houses = sample();
        assert_eq!(
            render_chart_svg(&houses, "Aries"),
            render_chart_svg(&houses, "Aries")
        );
    }
}
