//! Outer ring: N equal angular wedges, each classified into the positive or
//! negative half, independently hoverable and clickable.

use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::Context;

use crate::model::Polarity;

use super::geometry::{angle_of, describe_arc, ArcStroke, Point};

pub const DEFAULT_SEGMENT_COUNT: usize = 36;
/// Visual gap trimmed off each side of a wedge, in degrees.
pub const SEGMENT_GAP_DEG: f64 = 0.5;

pub const POSITIVE_COLOR: Color = Color::Rgb(120, 255, 138);
pub const NEGATIVE_COLOR: Color = Color::Rgb(242, 60, 60);
const DIM_COLOR: Color = Color::Rgb(68, 68, 68);
const LABEL_COLOR: Color = Color::Rgb(204, 204, 204);

/// Segment `index` belongs to the positive half iff it falls in the 180°
/// spanning the east reference direction, i.e. the first or last quarter of
/// the index range. Holds for any even `count`.
pub fn classify(index: usize, count: usize) -> Polarity {
    debug_assert!(index < count, "segment index {index} out of range 0..{count}");
    if index < count / 4 || index >= (3 * count) / 4 {
        Polarity::Positive
    } else {
        Polarity::Negative
    }
}

/// Angular interval `[start, end]` of segment `index`, gap already applied.
pub fn segment_span(index: usize, count: usize) -> (f64, f64) {
    let step = 360.0 / count as f64;
    (
        index as f64 * step + SEGMENT_GAP_DEG,
        (index + 1) as f64 * step - SEGMENT_GAP_DEG,
    )
}

/// Visual emphasis ladder for one segment. Hover wins regardless of active
/// state; hover never changes classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Active,
    Hovered,
    Dim,
}

pub fn emphasis(index: usize, count: usize, polarity: Polarity, hovered: Option<usize>) -> Emphasis {
    if hovered == Some(index) {
        Emphasis::Hovered
    } else if classify(index, count) == polarity {
        Emphasis::Active
    } else {
        Emphasis::Dim
    }
}

pub fn half_color(polarity: Polarity) -> Color {
    match polarity {
        Polarity::Positive => POSITIVE_COLOR,
        Polarity::Negative => NEGATIVE_COLOR,
    }
}

/// Render-time view of the outer ring, derived fresh each frame.
#[derive(Debug, Clone, Copy)]
pub struct SegmentRing {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub count: usize,
    pub stroke: f64,
    pub world_height: f64,
}

impl SegmentRing {
    pub fn draw(&self, ctx: &mut Context, polarity: Polarity, hovered: Option<usize>) {
        for i in 0..self.count {
            let (start, end) = segment_span(i, self.count);
            let e = emphasis(i, self.count, polarity, hovered);
            let color = match e {
                Emphasis::Dim => DIM_COLOR,
                _ => half_color(classify(i, self.count)),
            };
            let width = match e {
                Emphasis::Hovered => self.stroke * 1.5,
                _ => self.stroke,
            };
            ctx.draw(&ArcStroke {
                arc: describe_arc(self.cx, self.cy, self.radius, start, end),
                width,
                world_height: self.world_height,
                color,
            });
        }

        let style = Style::default().fg(LABEL_COLOR);
        let offset = self.radius + self.stroke * 1.5;
        self.print_local(ctx, self.cy - offset, Line::styled("Positive", style));
        self.print_local(ctx, self.cy + offset, Line::styled("Negative", style));
    }

    fn print_local(&self, ctx: &mut Context, y: f64, line: Line<'static>) {
        ctx.print(self.cx, self.world_height - y, line);
    }

    /// Hit test in widget-local coordinates. The radial band is the stroke
    /// width padded for cell-grid coarseness; the inter-segment gap is dead
    /// space.
    pub fn hit(&self, p: Point) -> Option<usize> {
        let center = Point { x: self.cx, y: self.cy };
        if (p.distance(center) - self.radius).abs() > self.stroke {
            return None;
        }
        let angle = angle_of(self.cx, self.cy, p);
        let step = 360.0 / self.count as f64;
        let index = ((angle / step).floor() as usize).min(self.count - 1);
        let within = angle - index as f64 * step;
        if within < SEGMENT_GAP_DEG || within > step - SEGMENT_GAP_DEG {
            return None;
        }
        Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::geometry::polar_to_cartesian;

    #[test]
    fn classification_matches_quarter_rule() {
        let n = 36;
        for i in 0..n {
            let expected = if i < n / 4 || i >= (3 * n) / 4 {
                Polarity::Positive
            } else {
                Polarity::Negative
            };
            assert_eq!(classify(i, n), expected, "segment {i}");
        }
    }

    #[test]
    fn halves_are_balanced_for_even_counts() {
        for n in [4, 6, 10, 36, 72] {
            let positive = (0..n).filter(|&i| classify(i, n) == Polarity::Positive).count();
            assert_eq!(positive, n / 2, "count {n}");
        }
    }

    #[test]
    fn span_applies_gap_both_sides() {
        let (start, end) = segment_span(0, 36);
        assert_eq!(start, 0.5);
        assert_eq!(end, 9.5);
        let (start, end) = segment_span(35, 36);
        assert_eq!(start, 350.5);
        assert_eq!(end, 359.5);
    }

    #[test]
    fn hover_overrides_emphasis_without_touching_classification() {
        let n = 36;
        // segment 18 is in the negative half; current polarity positive
        assert_eq!(emphasis(18, n, Polarity::Positive, None), Emphasis::Dim);
        assert_eq!(emphasis(18, n, Polarity::Positive, Some(18)), Emphasis::Hovered);
        // hovering an active segment also reads hovered
        assert_eq!(emphasis(0, n, Polarity::Positive, Some(0)), Emphasis::Hovered);
        assert_eq!(classify(18, n), Polarity::Negative);
    }

    fn ring() -> SegmentRing {
        SegmentRing {
            cx: 200.0,
            cy: 300.0,
            radius: 180.0,
            count: 36,
            stroke: 20.0,
            world_height: 600.0,
        }
    }

    #[test]
    fn hit_finds_segment_at_its_center_angle() {
        let r = ring();
        for i in [0, 5, 17, 35] {
            let (start, end) = segment_span(i, r.count);
            let mid = (start + end) / 2.0;
            let p = polar_to_cartesian(r.cx, r.cy, r.radius, mid);
            assert_eq!(r.hit(p), Some(i), "segment {i}");
        }
    }

    #[test]
    fn hit_rejects_gap_and_off_band_points() {
        let r = ring();
        // exactly on a wedge boundary, inside the gap
        let boundary = polar_to_cartesian(r.cx, r.cy, r.radius, 10.0);
        assert_eq!(r.hit(boundary), None);
        // far inside the ring
        let inner = polar_to_cartesian(r.cx, r.cy, 50.0, 45.0);
        assert_eq!(r.hit(inner), None);
        // outside the band
        let outer = polar_to_cartesian(r.cx, r.cy, r.radius + 60.0, 45.0);
        assert_eq!(r.hit(outer), None);
    }
}
