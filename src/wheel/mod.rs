//! The signal wheel: a controlled two-ring radial selector.
//!
//! The outer ring encodes polarity as 36 clickable wedges; the inner dial
//! encodes likelihood as three anchors rotating as a rigid group. The widget
//! owns no selection state. It borrows the host's [`Selection`] each frame,
//! derives every visual from it, and answers pointer input with at most one
//! [`SelectionUpdate`] proposal per click. Applying the proposal is host
//! policy.

pub mod dial;
pub mod geometry;
pub mod segments;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols::Marker;
use ratatui::text::Line;
use ratatui::widgets::canvas::Canvas;
use ratatui::widgets::{Block, Borders, StatefulWidget, Widget};

use crate::model::{Selection, SelectionUpdate};

use dial::{Dial, ANCHORS, DIAL_COLOR};
use geometry::{Point, Ring};
use segments::{classify, SegmentRing, DEFAULT_SEGMENT_COUNT};

/// Presentation-only configuration. Nothing here affects classification or
/// rotation.
#[derive(Debug, Clone, Copy)]
pub struct WheelConfig {
    /// Width of the widget-local coordinate space.
    pub size: f64,
    pub segment_count: usize,
    /// Vertical stretch of the local space relative to `size`.
    pub height_scale: f64,
    pub show_title: bool,
}

impl Default for WheelConfig {
    fn default() -> Self {
        Self {
            size: 400.0,
            segment_count: DEFAULT_SEGMENT_COUNT,
            height_scale: 1.5,
            show_title: false,
        }
    }
}

/// Snapshot of the geometry derived at render time, kept only so pointer
/// events arriving before the next frame can be hit-tested against what is
/// actually on screen.
#[derive(Debug, Clone, Copy)]
pub struct WheelLayout {
    pub area: Rect,
    pub size: f64,
    pub height: f64,
    pub segment_count: usize,
    pub cx: f64,
    pub cy: f64,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub dial_radius: f64,
    stroke: f64,
}

impl WheelLayout {
    pub fn new(area: Rect, config: &WheelConfig) -> Self {
        let size = config.size;
        let height = size * config.height_scale;
        // proportions of the original 400-wide wheel
        Self {
            area,
            size,
            height,
            segment_count: config.segment_count,
            cx: size / 2.0,
            cy: height / 2.0,
            outer_radius: size * 0.45,
            inner_radius: size * 0.25,
            dial_radius: size * 0.325,
            stroke: size * 0.05,
        }
    }

    pub fn ring(&self) -> SegmentRing {
        SegmentRing {
            cx: self.cx,
            cy: self.cy,
            radius: self.outer_radius,
            count: self.segment_count,
            stroke: self.stroke,
            world_height: self.height,
        }
    }

    pub fn dial(&self) -> Dial {
        Dial {
            cx: self.cx,
            cy: self.cy,
            radius: self.dial_radius,
            dot_radius: self.size * 0.02,
            capture: self.size * 0.045,
            world_height: self.height,
        }
    }

    /// Terminal cell to widget-local coordinates; `None` outside the area.
    pub fn local_point(&self, column: u16, row: u16) -> Option<Point> {
        let a = self.area;
        if a.width == 0 || a.height == 0 {
            return None;
        }
        if column < a.x || column >= a.x + a.width || row < a.y || row >= a.y + a.height {
            return None;
        }
        let cell_x = (column - a.x) as f64 + 0.5;
        let cell_y = (row - a.y) as f64 + 0.5;
        Some(Point {
            x: cell_x / a.width as f64 * self.size,
            y: cell_y / a.height as f64 * self.height,
        })
    }

    /// Inverse of [`local_point`](Self::local_point): the cell containing a
    /// widget-local point. Used by tests to synthesize pointer events.
    pub fn cell_at(&self, p: Point) -> (u16, u16) {
        let a = self.area;
        let col = a.x + ((p.x / self.size * a.width as f64) as u16).min(a.width.saturating_sub(1));
        let row = a.y + ((p.y / self.height * a.height as f64) as u16).min(a.height.saturating_sub(1));
        (col, row)
    }
}

/// Ephemeral widget state: hover slots, the layout snapshot, and the unwired
/// futures-cone reporting slot. Selection never lives here.
#[derive(Debug, Default)]
pub struct WheelState {
    pub hovered_segment: Option<usize>,
    pub hovered_anchor: Option<usize>,
    layout: Option<WheelLayout>,
    selected_cone: Option<String>,
}

impl WheelState {
    /// Recompute and store the layout snapshot for `area`. Called by the
    /// widget on every render; tests call it directly.
    pub fn prepare(&mut self, area: Rect, config: &WheelConfig) -> WheelLayout {
        let layout = WheelLayout::new(area, config);
        self.layout = Some(layout);
        layout
    }

    /// Translate a pointer event into at most one selection proposal.
    ///
    /// Moves only update the hover slots; leaving the widget clears them.
    /// A left click on a segment of the other half proposes a polarity flip
    /// with likelihood unchanged; a same-half click proposes nothing. A left
    /// click on an anchor always proposes that likelihood with polarity
    /// unchanged. Clicks never touch hover state.
    pub fn handle_mouse(&mut self, event: MouseEvent, current: Selection) -> Option<SelectionUpdate> {
        let layout = self.layout?;
        let Some(p) = layout.local_point(event.column, event.row) else {
            self.hovered_segment = None;
            self.hovered_anchor = None;
            return None;
        };
        match event.kind {
            MouseEventKind::Moved => {
                self.hovered_anchor = layout.dial().hit(p, current.likelihood);
                self.hovered_segment = layout.ring().hit(p);
                None
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(idx) = layout.dial().hit(p, current.likelihood) {
                    return Some(anchor_click(idx, current));
                }
                if let Some(i) = layout.ring().hit(p) {
                    return segment_click(i, layout.segment_count, current);
                }
                None
            }
            _ => None,
        }
    }

    /// Futures-cone reporting hook. Recorded, nothing reads it yet.
    pub fn set_cone(&mut self, cone: impl Into<String>) {
        self.selected_cone = Some(cone.into());
    }

    pub fn selected_cone(&self) -> Option<&str> {
        self.selected_cone.as_deref()
    }
}

/// Click on segment `index`: propose the segment's half iff it differs from
/// the current polarity. Same-half clicks are a no-op (no proposal at all).
pub fn segment_click(index: usize, count: usize, current: Selection) -> Option<SelectionUpdate> {
    let polarity = classify(index, count);
    if polarity == current.polarity {
        return None;
    }
    Some(SelectionUpdate {
        polarity,
        likelihood: current.likelihood,
    })
}

/// Click on anchor `index`: always propose that likelihood, even when it is
/// already active (the host sees an identical pair and may ignore it).
pub fn anchor_click(index: usize, current: Selection) -> SelectionUpdate {
    SelectionUpdate {
        polarity: current.polarity,
        likelihood: ANCHORS[index].likelihood,
    }
}

/// The wheel widget. Borrows the host-owned selection for one frame.
pub struct SignalWheel<'a> {
    selection: &'a Selection,
    config: WheelConfig,
}

impl<'a> SignalWheel<'a> {
    pub fn new(selection: &'a Selection) -> Self {
        Self {
            selection,
            config: WheelConfig::default(),
        }
    }

    pub fn config(mut self, config: WheelConfig) -> Self {
        self.config = config;
        self
    }
}

impl StatefulWidget for SignalWheel<'_> {
    type State = WheelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut WheelState) {
        let inner = if self.config.show_title {
            let block = Block::default().borders(Borders::ALL).title(" SIGNAL WHEEL ");
            let inner = block.inner(area);
            block.render(area, buf);
            inner
        } else {
            area
        };

        let layout = state.prepare(inner, &self.config);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let selection = *self.selection;
        let hovered_segment = state.hovered_segment;
        let hovered_anchor = state.hovered_anchor;
        let center = Point { x: layout.cx, y: layout.cy };

        let canvas = Canvas::default()
            .marker(Marker::Braille)
            .x_bounds([0.0, layout.size])
            .y_bounds([0.0, layout.height])
            .paint(|ctx| {
                layout.ring().draw(ctx, selection.polarity, hovered_segment);

                ctx.draw(&Ring {
                    center,
                    radius: layout.inner_radius,
                    world_height: layout.height,
                    color: DIAL_COLOR,
                });
                ctx.draw(&Ring {
                    center,
                    radius: layout.inner_radius - layout.size * 0.0375,
                    world_height: layout.height,
                    color: DIAL_COLOR,
                });
                ctx.print(
                    layout.cx,
                    layout.height - layout.cy,
                    Line::styled(
                        selection.likelihood.label().to_uppercase(),
                        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                    ),
                );

                layout.dial().draw(ctx, selection.likelihood, hovered_anchor);
            });
        canvas.render(inner, buf);
    }
}
