// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Markup canvas for media display and shape drawing.
//!
//! This module renders the active media asset, maps pointer gestures into
//! natural-space session events, and draws the live shape set on top. All
//! geometry handed to the session is natural-space; everything painted is
//! screen-space.

use crate::editor::session::{AnnotationSession, CommitOutcome, Gesture};
use crate::editor::tools::Tool;
use crate::editor::viewport::Viewport;
use crate::models::comment::ReviewData;
use crate::models::shape::{Shape, ShapeKind};
use crate::util::geometry::sq_segment_distance;

/// Stroke weight in screen pixels. Stays constant while the media scales.
const STROKE_WIDTH: f32 = 4.0;

/// Invisible hit region around a shape, in screen pixels.
const HIT_STROKE_WIDTH: f32 = 20.0;

/// Arrowhead size in screen pixels.
const ARROWHEAD_LENGTH: f32 = 12.0;

/// Result of canvas interaction.
pub enum CanvasAction {
    None,
    /// A drawn shape was committed to history.
    Committed(ShapeKind),
    /// An arrow finished moving to a new position.
    Moved,
    /// A shape was removed with the eraser.
    Erased,
}

/// Display the canvas area and feed pointer interactions to the session.
pub fn show(
    ui: &mut egui::Ui,
    session: &mut AnnotationSession,
    viewport: &mut Viewport,
    review: &Option<ReviewData>,
    image_texture: &Option<egui::TextureHandle>,
) -> CanvasAction {
    let mut action = CanvasAction::None;
    ui.style_mut().visuals.extreme_bg_color = egui::Color32::from_gray(40);

    let available_size = ui.available_size();

    egui::Frame::canvas(ui.style()).show(ui, |ui| {
        ui.set_min_size(available_size);

        if let Some(texture) = image_texture {
            if let Some((natural_width, natural_height)) = viewport.natural_size() {
                // Fit the media into the available space, preserving aspect.
                let available = ui.available_size();
                let media_aspect = natural_width as f32 / natural_height as f32;
                let available_aspect = available.x / available.y;

                let (display_width, display_height) = if media_aspect > available_aspect {
                    let width = available.x;
                    (width, width / media_aspect)
                } else {
                    let height = available.y;
                    (height * media_aspect, height)
                };

                let x_offset = (available.x - display_width) / 2.0;
                let y_offset = (available.y - display_height) / 2.0;

                let media_rect = egui::Rect::from_min_size(
                    ui.min_rect().min + egui::vec2(x_offset, y_offset),
                    egui::vec2(display_width, display_height),
                );

                // The ratio follows the rendered width through resizes and
                // panel changes; stored geometry never moves.
                viewport.set_rendered_width(display_width);

                ui.painter().image(
                    texture.id(),
                    media_rect,
                    egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                    egui::Color32::WHITE,
                );

                if !session.is_read_only() && session.tool() != Tool::None {
                    action = handle_pointer(ui, session, viewport, media_rect);
                }

                let painter = ui.painter();
                let ratio = viewport.ratio();
                for (index, shape) in session.shapes().iter().enumerate() {
                    let offset = session.drag_offset(index);
                    draw_shape(painter, shape, offset, &media_rect, ratio);
                }
            }
        } else if review.is_some() {
            ui.centered_and_justified(|ui| {
                ui.label(
                    egui::RichText::new("Loading media...").color(egui::Color32::WHITE),
                );
            });
        } else {
            // Welcome message when nothing is loaded yet.
            ui.centered_and_justified(|ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(20.0);
                    ui.heading(
                        egui::RichText::new("REDLINE")
                            .size(32.0)
                            .color(egui::Color32::from_gray(200)),
                    );
                    ui.label(
                        egui::RichText::new("Location-exact review markup for media assets")
                            .size(14.0)
                            .color(egui::Color32::from_gray(150)),
                    );
                    ui.add_space(20.0);
                    ui.label(
                        egui::RichText::new("Open a media file to start a review")
                            .color(egui::Color32::from_gray(180)),
                    );
                    ui.add_space(10.0);
                    ui.label(
                        egui::RichText::new("File → Open Media...")
                            .weak()
                            .color(egui::Color32::from_gray(130)),
                    );
                });
            });
        }
    });

    // Status line under the canvas.
    ui.separator();
    ui.horizontal(|ui| {
        ui.label(format!("Tool: {:?}", session.tool()));
        ui.separator();
        if session.is_read_only() {
            ui.label("Viewing comment markup (read-only)");
        } else if review.is_some() {
            match session.gesture() {
                Gesture::Idle => ui.label(format!("{} shapes", session.shapes().len())),
                Gesture::Drawing { .. } => ui.label("Drawing..."),
                Gesture::Dragging { .. } => ui.label("Moving arrow..."),
            };
        } else {
            ui.label("No media loaded");
        }
    });

    action
}

/// Route pointer events on the media surface into the session.
fn handle_pointer(
    ui: &mut egui::Ui,
    session: &mut AnnotationSession,
    viewport: &Viewport,
    media_rect: egui::Rect,
) -> CanvasAction {
    let mut action = CanvasAction::None;

    let response = ui
        .allocate_rect(media_rect, egui::Sense::click_and_drag())
        .on_hover_cursor(match session.tool() {
            Tool::Eraser => egui::CursorIcon::PointingHand,
            _ => egui::CursorIcon::Crosshair,
        });

    // Half the hit stroke on each side of a segment, in natural space.
    let hit_tolerance = viewport.scale_width(HIT_STROKE_WIDTH) / 2.0;

    if response.drag_started_by(egui::PointerButton::Primary) && session.tool().is_drawing_tool()
    {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or_else(|| response.interact_pointer_pos());
        if let Some(pos) = origin {
            let (x, y) = to_natural(viewport, media_rect, pos);
            // Under the arrow tool a press on an existing arrow moves it
            // instead of starting a new shape.
            let dragging = session.tool() == Tool::Arrow
                && hit_test(session.shapes(), x, y, hit_tolerance)
                    .map_or(false, |index| session.begin_drag(index, x, y));
            if !dragging {
                session.pointer_down(x, y);
            }
        }
    }

    if response.dragged_by(egui::PointerButton::Primary) {
        if let Some(pos) = response.interact_pointer_pos() {
            let (x, y) = to_natural(viewport, media_rect, pos);
            session.pointer_move(x, y);
        }
    }

    if response.drag_stopped_by(egui::PointerButton::Primary) {
        match session.pointer_up() {
            Some(CommitOutcome::Committed(kind)) => action = CanvasAction::Committed(kind),
            Some(CommitOutcome::Moved) => action = CanvasAction::Moved,
            Some(CommitOutcome::Discarded) | None => {}
        }
    }

    if session.tool() == Tool::Eraser && response.clicked() {
        if let Some(pos) = response.interact_pointer_pos() {
            let (x, y) = to_natural(viewport, media_rect, pos);
            if let Some(index) = hit_test(session.shapes(), x, y, hit_tolerance) {
                if session.erase(index) {
                    action = CanvasAction::Erased;
                }
            }
        }
    }

    action
}

/// Map a screen position on the media surface into natural pixel space.
fn to_natural(viewport: &Viewport, media_rect: egui::Rect, pos: egui::Pos2) -> (f32, f32) {
    viewport.to_natural(pos.x - media_rect.min.x, pos.y - media_rect.min.y)
}

/// Topmost shape whose path passes within `tolerance` of (x, y), if any.
/// Later shapes render on top, so scan back to front.
fn hit_test(shapes: &[Shape], x: f32, y: f32, tolerance: f32) -> Option<usize> {
    let sq_tolerance = tolerance * tolerance;
    for (index, shape) in shapes.iter().enumerate().rev() {
        let points = shape.points();
        if points.len() < 4 {
            continue;
        }
        for segment in points.windows(4).step_by(2) {
            let sq_dist =
                sq_segment_distance(x, y, segment[0], segment[1], segment[2], segment[3]);
            if sq_dist <= sq_tolerance {
                return Some(index);
            }
        }
    }
    None
}

/// Draw one shape, projected from natural space onto the media rect.
fn draw_shape(
    painter: &egui::Painter,
    shape: &Shape,
    offset: (f32, f32),
    media_rect: &egui::Rect,
    ratio: f32,
) {
    let points = shape.points();
    if points.len() < 4 {
        return;
    }

    let (r, g, b) = shape.color().rgb();
    let color = egui::Color32::from_rgb(r, g, b);
    let stroke = egui::Stroke::new(STROKE_WIDTH, color);

    let screen: Vec<egui::Pos2> = points
        .chunks_exact(2)
        .map(|pair| {
            egui::pos2(
                media_rect.min.x + (pair[0] + offset.0) * ratio,
                media_rect.min.y + (pair[1] + offset.1) * ratio,
            )
        })
        .collect();

    match shape.kind() {
        ShapeKind::Line => {
            painter.add(egui::Shape::line(screen, stroke));
        }
        ShapeKind::Arrow => {
            if let (Some(&start), Some(&end)) = (screen.first(), screen.last()) {
                painter.line_segment([start, end], stroke);
                draw_arrowhead(painter, start, end, color);
            }
        }
    }
}

/// Filled triangular head at the arrow's end point.
fn draw_arrowhead(
    painter: &egui::Painter,
    start: egui::Pos2,
    end: egui::Pos2,
    color: egui::Color32,
) {
    let dir = end - start;
    let len = dir.length();
    if len <= f32::EPSILON {
        return;
    }
    let dir = dir / len;
    let normal = egui::vec2(-dir.y, dir.x);
    let base = end - dir * ARROWHEAD_LENGTH;

    painter.add(egui::Shape::convex_polygon(
        vec![
            end,
            base + normal * (ARROWHEAD_LENGTH * 0.5),
            base - normal * (ARROWHEAD_LENGTH * 0.5),
        ],
        color,
        egui::Stroke::NONE,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::shape::ShapeColor;

    #[test]
    fn test_hit_test_prefers_topmost() {
        let shapes = vec![
            Shape::Line {
                color: ShapeColor::Red,
                points: vec![0.0, 0.0, 100.0, 0.0],
            },
            Shape::Arrow {
                color: ShapeColor::Blue,
                points: vec![0.0, 0.0, 100.0, 0.0],
            },
        ];

        // Both shapes cover the query point; the later one wins.
        assert_eq!(hit_test(&shapes, 50.0, 0.0, 10.0), Some(1));
    }

    #[test]
    fn test_hit_test_respects_tolerance() {
        let shapes = vec![Shape::Line {
            color: ShapeColor::Red,
            points: vec![0.0, 0.0, 100.0, 0.0],
        }];

        assert_eq!(hit_test(&shapes, 50.0, 9.0, 10.0), Some(0));
        assert_eq!(hit_test(&shapes, 50.0, 11.0, 10.0), None);
        assert_eq!(hit_test(&shapes, 150.0, 0.0, 10.0), None);
    }

    #[test]
    fn test_hit_test_skips_seed_only_shapes() {
        let shapes = vec![Shape::new(ShapeKind::Line, ShapeColor::Red, 5.0, 5.0)];
        assert_eq!(hit_test(&shapes, 5.0, 5.0, 10.0), None);
    }
}
