//! Inner dial: three fixed anchors, one per likelihood, rotating as a rigid
//! group so the active anchor always sits at the top reference angle.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::canvas::Context;

use crate::model::Likelihood;

use super::geometry::{polar_to_cartesian, Disc, Point, Ring};

pub const DIAL_COLOR: Color = Color::Rgb(41, 62, 107);
const OUTLINE_COLOR: Color = Color::White;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DialAnchor {
    pub likelihood: Likelihood,
    pub angle: f64,
}

/// The three fixed anchors, in [`Likelihood::ALL`] order.
pub const ANCHORS: [DialAnchor; 3] = [
    DialAnchor { likelihood: Likelihood::Probable, angle: 0.0 },
    DialAnchor { likelihood: Likelihood::Plausible, angle: 120.0 },
    DialAnchor { likelihood: Likelihood::Possible, angle: 240.0 },
];

/// Index of `likelihood` in the anchor table, defaulting to 0 should the
/// table and the enum ever drift apart. Never panics.
pub fn anchor_index(likelihood: Likelihood) -> usize {
    ANCHORS
        .iter()
        .position(|a| a.likelihood == likelihood)
        .unwrap_or(0)
}

/// Group rotation in degrees: the negated anchor angle, so the active anchor
/// lands at the top reference angle once the whole group is rotated.
pub fn rotation_for(likelihood: Likelihood) -> f64 {
    -ANCHORS[anchor_index(likelihood)].angle
}

/// Labels ride inside the rotated group but must stay upright, so they are
/// counter-rotated about their own anchor point by the group's negation.
/// Terminal text is upright by construction; the identity is kept (and
/// tested) as the geometric contract.
pub fn label_rotation(group_rotation: f64) -> f64 {
    -group_rotation
}

/// Render-time view of the dial, derived fresh each frame.
#[derive(Debug, Clone, Copy)]
pub struct Dial {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
    pub dot_radius: f64,
    /// Hit-test capture radius around each anchor, padded for cell coarseness.
    pub capture: f64,
    pub world_height: f64,
}

impl Dial {
    /// Position of anchor `index` after the group rotation is applied.
    pub fn anchor_point(&self, index: usize, rotation: f64) -> Point {
        polar_to_cartesian(self.cx, self.cy, self.radius, ANCHORS[index].angle + rotation)
    }

    pub fn draw(&self, ctx: &mut Context, likelihood: Likelihood, hovered: Option<usize>) {
        let rotation = rotation_for(likelihood);
        let selected = anchor_index(likelihood);

        for (idx, anchor) in ANCHORS.iter().enumerate() {
            let pos = self.anchor_point(idx, rotation);
            let is_hovered = hovered == Some(idx);
            let is_selected = idx == selected;

            let dot = if is_hovered { self.dot_radius * 1.25 } else { self.dot_radius };
            ctx.draw(&Disc {
                center: pos,
                radius: dot,
                world_height: self.world_height,
                color: DIAL_COLOR,
            });
            if is_hovered || is_selected {
                ctx.draw(&Ring {
                    center: pos,
                    radius: dot + 2.0,
                    world_height: self.world_height,
                    color: OUTLINE_COLOR,
                });
                if is_hovered {
                    ctx.draw(&Ring {
                        center: pos,
                        radius: dot + 4.0,
                        world_height: self.world_height,
                        color: OUTLINE_COLOR,
                    });
                }
                let label = anchor.likelihood.label().to_uppercase();
                let style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
                ctx.print(
                    pos.x,
                    self.world_height - (pos.y - dot - 10.0),
                    Line::styled(label, style),
                );
            }
        }
    }

    /// Nearest anchor within the capture radius, at the rotated positions.
    pub fn hit(&self, p: Point, likelihood: Likelihood) -> Option<usize> {
        let rotation = rotation_for(likelihood);
        let mut best: Option<(usize, f64)> = None;
        for idx in 0..ANCHORS.len() {
            let d = p.distance(self.anchor_point(idx, rotation));
            if d <= self.capture && best.map_or(true, |(_, bd)| d < bd) {
                best = Some((idx, d));
            }
        }
        best.map(|(idx, _)| idx)
    }
}
