//! Sub-layout of planet glyphs inside one house.
//!
//! Offsets are relative to the house's planet anchor:
//! - 1 glyph: on the anchor
//! - 2 glyphs: side by side
//! - 3 glyphs: a triangle, one above and two below
//! - 4 or more: a two-column grid with two rows; the fifth glyph onward
//!   lands on the second row again and overlaps it

use crate::geometry::Point;

/// Horizontal half-gap for a pair.
pub const PAIR_SPREAD: f64 = 8.0;

/// Horizontal half-gap for triangle and grid columns.
pub const COLUMN_SPREAD: f64 = 10.0;

/// Vertical half-gap for triangle and grid rows.
pub const ROW_SPREAD: f64 = 8.0;

/// Offset of glyph `i` in a house holding `count` glyphs.
pub const fn cluster_offset(i: usize, count: usize) -> Point {
    match count {
        0 | 1 => Point::new(0.0, 0.0),
        2 => {
            let x = if i == 0 { -PAIR_SPREAD } else { PAIR_SPREAD };
            Point::new(x, 0.0)
        }
        3 => match i {
            0 => Point::new(0.0, -ROW_SPREAD),
            1 => Point::new(-COLUMN_SPREAD, ROW_SPREAD),
            _ => Point::new(COLUMN_SPREAD, ROW_SPREAD),
        },
        _ => {
            let x = if i % 2 == 0 { -COLUMN_SPREAD } else { COLUMN_SPREAD };
            let y = if i / 2 == 0 { -ROW_SPREAD } else { ROW_SPREAD };
            Point::new(x, y)
        }
    }
}

/// Offsets for every glyph in a house holding `count` glyphs.
pub fn cluster_offsets(count: usize) -> Vec<Point> {
    (0..count).map(|i| cluster_offset(i, count)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pts(v: &[(f64, f64)]) -> Vec<Point> {
        v.iter().map(|&(x, y)| Point::new(x, y)).collect()
    }

    #[test]
    fn empty_house() {
        assert!(cluster_offsets(0).is_empty());
    }

    #[test]
    fn single_glyph_on_anchor() {
        assert_eq!(cluster_offsets(1), pts(&[(0.0, 0.0)]));
    }

    #[test]
    fn pair_side_by_side() {
        assert_eq!(cluster_offsets(2), pts(&[(-8.0, 0.0), (8.0, 0.0)]));
    }

    #[test]
    fn triangle() {
        assert_eq!(
            cluster_offsets(3),
            pts(&[(0.0, -8.0), (-10.0, 8.0), (10.0, 8.0)])
        );
    }

    #[test]
    fn four_in_grid() {
        assert_eq!(
            cluster_offsets(4),
            pts(&[(-10.0, -8.0), (10.0, -8.0), (-10.0, 8.0), (10.0, 8.0)])
        );
    }

    #[test]
    fn fifth_glyph_overlaps_second_row() {
        let five = cluster_offsets(5);
        assert_eq!(five[4], Point::new(-10.0, 8.0));
        assert_eq!(five[4], five[2]);
    }

    #[test]
    fn nine_glyphs_use_four_slots() {
        let nine = cluster_offsets(9);
        assert_eq!(nine.len(), 9);
        for (i, p) in nine.iter().enumerate().skip(4) {
            assert_eq!(*p, nine[2 + i % 2], "glyph {i}");
        }
    }
}
