//! Angle and coordinate math for the wheel, plus the canvas shapes built on it.
//!
//! Widget-local coordinates follow the screen convention: origin top-left,
//! x rightward, y downward. Angles are degrees clockwise from the top of the
//! circle. The braille canvas world puts y upward instead; that flip happens
//! inside the shapes at paint time, never in the kernel math.

use ratatui::style::Color;
use ratatui::widgets::canvas::{Painter, Shape};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn distance(&self, other: Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Point at `radius` from `(cx, cy)` at `angle_deg` clockwise from top.
/// Pure and total; periodic mod 360.
pub fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point {
        x: cx + radius * rad.cos(),
        y: cy + radius * rad.sin(),
    }
}

/// Inverse mapping used for hit-testing: degrees clockwise from top in `[0, 360)`.
pub fn angle_of(cx: f64, cy: f64, p: Point) -> f64 {
    let deg = (p.y - cy).atan2(p.x - cx).to_degrees() + 90.0;
    deg.rem_euclid(360.0)
}

/// Descriptor of a fixed-radius arc between two angles.
///
/// Endpoint ordering is end-then-start: `start` is the point at `end_angle`
/// and `end` the point at `start_angle`, with the sweep fixed
/// counter-clockwise between them. `large_arc` disambiguates which of the two
/// possible arcs is meant purely by angular span. Preserve this ordering;
/// spans near 180° bulge the wrong way otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcPath {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    /// Endpoint at `end_angle`.
    pub start: Point,
    /// Endpoint at `start_angle`.
    pub end: Point,
    pub large_arc: bool,
}

pub fn describe_arc(cx: f64, cy: f64, radius: f64, start_angle: f64, end_angle: f64) -> ArcPath {
    ArcPath {
        cx,
        cy,
        radius,
        start_angle,
        end_angle,
        start: polar_to_cartesian(cx, cy, radius, end_angle),
        end: polar_to_cartesian(cx, cy, radius, start_angle),
        large_arc: end_angle - start_angle > 180.0,
    }
}

/// Drawable arc with stroke width, sampled onto the braille grid.
pub struct ArcStroke {
    pub arc: ArcPath,
    pub width: f64,
    /// Height of the widget-local coordinate space; used for the y flip into
    /// the canvas' y-up world.
    pub world_height: f64,
    pub color: Color,
}

impl Shape for ArcStroke {
    fn draw(&self, painter: &mut Painter) {
        let span = self.arc.end_angle - self.arc.start_angle;
        let steps = ((span.abs() * 4.0).ceil() as usize).max(2);
        let half = self.width / 2.0;
        let mut r = self.arc.radius - half;
        while r <= self.arc.radius + half {
            for i in 0..=steps {
                let angle = self.arc.start_angle + span * (i as f64 / steps as f64);
                let p = polar_to_cartesian(self.arc.cx, self.arc.cy, r, angle);
                if let Some((x, y)) = painter.get_point(p.x, self.world_height - p.y) {
                    painter.paint(x, y, self.color);
                }
            }
            r += 2.0;
        }
    }
}

/// Filled disc, used for the dial anchors.
pub struct Disc {
    pub center: Point,
    pub radius: f64,
    pub world_height: f64,
    pub color: Color,
}

impl Shape for Disc {
    fn draw(&self, painter: &mut Painter) {
        let r = self.radius;
        let mut dy = -r;
        while dy <= r {
            let mut dx = -r;
            while dx <= r {
                if dx * dx + dy * dy <= r * r {
                    let x = self.center.x + dx;
                    let y = self.center.y + dy;
                    if let Some((px, py)) = painter.get_point(x, self.world_height - y) {
                        painter.paint(px, py, self.color);
                    }
                }
                dx += 1.0;
            }
            dy += 1.0;
        }
    }
}

/// Circle outline in widget-local coordinates.
pub struct Ring {
    pub center: Point,
    pub radius: f64,
    pub world_height: f64,
    pub color: Color,
}

impl Shape for Ring {
    fn draw(&self, painter: &mut Painter) {
        let steps = ((self.radius * 6.0).ceil() as usize).max(16);
        for i in 0..steps {
            let angle = 360.0 * (i as f64 / steps as f64);
            let p = polar_to_cartesian(self.center.x, self.center.y, self.radius, angle);
            if let Some((x, y)) = painter.get_point(p.x, self.world_height - p.y) {
                painter.paint(x, y, self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn approx(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS
    }

    #[test]
    fn angle_zero_points_up() {
        let p = polar_to_cartesian(100.0, 100.0, 50.0, 0.0);
        assert!(approx(p, Point { x: 100.0, y: 50.0 }));
    }

    #[test]
    fn angle_90_points_east() {
        let p = polar_to_cartesian(100.0, 100.0, 50.0, 90.0);
        assert!(approx(p, Point { x: 150.0, y: 100.0 }));
    }

    #[test]
    fn periodic_mod_360() {
        let a = polar_to_cartesian(0.0, 0.0, 10.0, 45.0);
        let b = polar_to_cartesian(0.0, 0.0, 10.0, 45.0 + 720.0);
        let c = polar_to_cartesian(0.0, 0.0, 10.0, 45.0 - 360.0);
        assert!(approx(a, b));
        assert!(approx(a, c));
    }

    #[test]
    fn angle_of_inverts_polar_to_cartesian() {
        for deg in [0.0, 10.0, 89.9, 135.0, 180.0, 270.0, 359.5] {
            let p = polar_to_cartesian(40.0, 60.0, 25.0, deg);
            assert!((angle_of(40.0, 60.0, p) - deg).abs() < 1e-6, "angle {deg}");
        }
    }

    #[test]
    fn describe_arc_endpoints_are_end_then_start() {
        let arc = describe_arc(200.0, 300.0, 180.0, 10.0, 19.0);
        assert!(approx(arc.start, polar_to_cartesian(200.0, 300.0, 180.0, 19.0)));
        assert!(approx(arc.end, polar_to_cartesian(200.0, 300.0, 180.0, 10.0)));
    }

    #[test]
    fn large_arc_flag_set_only_above_180() {
        assert!(!describe_arc(0.0, 0.0, 1.0, 0.0, 90.0).large_arc);
        assert!(!describe_arc(0.0, 0.0, 1.0, 0.0, 180.0).large_arc);
        assert!(describe_arc(0.0, 0.0, 1.0, 0.0, 180.1).large_arc);
        assert!(describe_arc(0.0, 0.0, 1.0, 30.0, 300.0).large_arc);
    }
}
