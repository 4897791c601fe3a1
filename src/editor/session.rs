// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Pointer-driven markup state for the active canvas.
//!
//! The session owns the working shape list, the undo history and the
//! in-flight gesture. Pointer events arrive already mapped into natural
//! pixel coordinates; the session never sees screen space.

use std::mem;

use crate::editor::history::History;
use crate::editor::tools::{Tool, ToolState};
use crate::models::comment::ShapePayload;
use crate::models::shape::{Shape, ShapeColor, ShapeKind};
use crate::util::simplify::simplify;

/// Pointer moves smaller than this on both axes are treated as jitter
/// while a stroke is in progress.
const MOVE_THRESHOLD: f32 = 5.0;

/// Tolerance handed to the line simplifier when a freehand stroke is
/// committed.
const SIMPLIFY_TOLERANCE: f32 = 2.0;

/// What the pointer is currently doing, with the data the gesture needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Idle,
    Drawing {
        last_x: f32,
        last_y: f32,
    },
    Dragging {
        index: usize,
        start_x: f32,
        start_y: f32,
        current_x: f32,
        current_y: f32,
    },
}

/// How a finished gesture settled, so callers can react.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    Committed(ShapeKind),
    Discarded,
    Moved,
}

pub struct AnnotationSession {
    tools: ToolState,
    shapes: Vec<Shape>,
    history: History,
    gesture: Gesture,
    read_only: bool,
}

impl AnnotationSession {
    pub fn new() -> Self {
        Self {
            tools: ToolState::default(),
            shapes: Vec::new(),
            history: History::new(),
            gesture: Gesture::Idle,
            read_only: false,
        }
    }

    pub fn tool(&self) -> Tool {
        self.tools.tool
    }

    /// Switch the active tool, settling any stroke still in flight so it
    /// is not left dangling under the new tool.
    pub fn set_tool(&mut self, tool: Tool) {
        if tool == self.tools.tool {
            return;
        }
        self.pointer_up();
        self.tools.tool = tool;
    }

    pub fn color(&self) -> ShapeColor {
        self.tools.color
    }

    /// Applies to shapes created from now on; existing shapes keep theirs.
    pub fn set_color(&mut self, color: ShapeColor) {
        self.tools.color = color;
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Start a stroke at the pointer's down position. The down point seeds
    /// the shape so a minimal drag already yields a visible segment.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        if self.read_only || self.gesture != Gesture::Idle {
            return;
        }
        let kind = match self.tools.tool.shape_kind() {
            Some(kind) => kind,
            None => return,
        };
        self.shapes.push(Shape::new(kind, self.tools.color, x, y));
        self.gesture = Gesture::Drawing { last_x: x, last_y: y };
    }

    /// Feed a pointer position into the active gesture. Lines accumulate
    /// points, arrows replace their endpoint, drags track the pointer.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        match self.gesture {
            Gesture::Drawing { last_x, last_y } => {
                if (x - last_x).abs() < MOVE_THRESHOLD && (y - last_y).abs() < MOVE_THRESHOLD {
                    return;
                }
                if let Some(shape) = self.shapes.last_mut() {
                    match shape.kind() {
                        ShapeKind::Line => {
                            shape.points_mut().extend_from_slice(&[x, y]);
                        }
                        ShapeKind::Arrow => {
                            let points = shape.points_mut();
                            points.truncate(2);
                            points.extend_from_slice(&[x, y]);
                        }
                    }
                    self.gesture = Gesture::Drawing { last_x: x, last_y: y };
                }
            }
            Gesture::Dragging {
                index,
                start_x,
                start_y,
                ..
            } => {
                self.gesture = Gesture::Dragging {
                    index,
                    start_x,
                    start_y,
                    current_x: x,
                    current_y: y,
                };
            }
            Gesture::Idle => {}
        }
    }

    /// End the active gesture. A stroke that never grew past its seed
    /// point is discarded, finished lines are simplified, and a finished
    /// drag bakes its offset into the shape's stored points.
    pub fn pointer_up(&mut self) -> Option<CommitOutcome> {
        match mem::replace(&mut self.gesture, Gesture::Idle) {
            Gesture::Idle => None,
            Gesture::Drawing { .. } => Some(self.commit_stroke()),
            Gesture::Dragging {
                index,
                start_x,
                start_y,
                current_x,
                current_y,
            } => {
                let shape = self.shapes.get_mut(index)?;
                shape.translate(current_x - start_x, current_y - start_y);
                self.history.push(self.shapes.clone());
                Some(CommitOutcome::Moved)
            }
        }
    }

    fn commit_stroke(&mut self) -> CommitOutcome {
        let kind = match self.shapes.last_mut() {
            Some(shape) if shape.point_count() > 1 => {
                if shape.kind() == ShapeKind::Line {
                    let simplified = simplify(shape.points(), SIMPLIFY_TOLERANCE);
                    *shape.points_mut() = simplified;
                }
                shape.kind()
            }
            Some(_) => {
                self.shapes.pop();
                return CommitOutcome::Discarded;
            }
            None => return CommitOutcome::Discarded,
        };
        self.history.push(self.shapes.clone());
        CommitOutcome::Committed(kind)
    }

    /// Remove the shape at `index`, recording the removal in history.
    pub fn erase(&mut self, index: usize) -> bool {
        if self.read_only || index >= self.shapes.len() {
            return false;
        }
        self.shapes.remove(index);
        self.history.push(self.shapes.clone());
        true
    }

    /// Begin repositioning an arrow. Only arrows move, and only while the
    /// arrow tool is selected.
    pub fn begin_drag(&mut self, index: usize, x: f32, y: f32) -> bool {
        if self.read_only || self.gesture != Gesture::Idle || self.tools.tool != Tool::Arrow {
            return false;
        }
        match self.shapes.get(index) {
            Some(shape) if shape.kind() == ShapeKind::Arrow => {
                self.gesture = Gesture::Dragging {
                    index,
                    start_x: x,
                    start_y: y,
                    current_x: x,
                    current_y: y,
                };
                true
            }
            _ => false,
        }
    }

    /// Current preview offset for the shape at `index`. Stored points stay
    /// untouched until the drag commits, so rendering applies this on top.
    pub fn drag_offset(&self, index: usize) -> (f32, f32) {
        match self.gesture {
            Gesture::Dragging {
                index: dragged,
                start_x,
                start_y,
                current_x,
                current_y,
            } if dragged == index => (current_x - start_x, current_y - start_y),
            _ => (0.0, 0.0),
        }
    }

    /// Step back one history entry. Abandons any gesture in flight.
    pub fn undo(&mut self) -> bool {
        if self.read_only || !self.history.undo() {
            return false;
        }
        self.shapes = self.history.current().to_vec();
        self.gesture = Gesture::Idle;
        true
    }

    pub fn redo(&mut self) -> bool {
        if self.read_only || !self.history.redo() {
            return false;
        }
        self.shapes = self.history.current().to_vec();
        self.gesture = Gesture::Idle;
        true
    }

    /// Wipe the canvas as an undoable step.
    pub fn clear(&mut self) {
        if self.read_only || self.shapes.is_empty() {
            return;
        }
        self.shapes.clear();
        self.gesture = Gesture::Idle;
        self.history.push(Vec::new());
    }

    /// Show a stored payload for review. The canvas locks until `reset`
    /// puts it back into drawing mode.
    pub fn load_payload(&mut self, payload: Option<&ShapePayload>) {
        self.shapes = payload.map(|p| p.shapes.clone()).unwrap_or_default();
        self.history.reset();
        self.gesture = Gesture::Idle;
        self.read_only = true;
    }

    /// Return to an empty, editable canvas.
    pub fn reset(&mut self) {
        self.shapes.clear();
        self.history.reset();
        self.gesture = Gesture::Idle;
        self.read_only = false;
    }

    /// Hand the drawn shapes off for a comment submission. The engine
    /// resets after every submission, markup or not (tool down, history
    /// back to its baseline); the payload is `None` when there is nothing
    /// to attach.
    pub fn take_submission(&mut self) -> Option<ShapePayload> {
        if self.read_only {
            return None;
        }
        let shapes = mem::take(&mut self.shapes);
        self.history.reset();
        self.gesture = Gesture::Idle;
        self.tools.tool = Tool::None;
        if shapes.is_empty() {
            None
        } else {
            Some(ShapePayload { shapes })
        }
    }
}

impl Default for AnnotationSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_session() -> AnnotationSession {
        let mut session = AnnotationSession::new();
        session.set_tool(Tool::Line);
        session
    }

    #[test]
    fn test_freehand_stroke_commits_simplified() {
        let mut session = line_session();

        session.pointer_down(0.0, 0.0);
        session.pointer_move(10.0, 10.0);
        session.pointer_move(20.0, 20.0);
        session.pointer_move(30.0, 30.0);
        assert_eq!(session.shapes()[0].points().len(), 8);

        let outcome = session.pointer_up();
        assert_eq!(outcome, Some(CommitOutcome::Committed(ShapeKind::Line)));
        // Collinear interior points drop out on commit.
        assert_eq!(session.shapes()[0].points(), &[0.0, 0.0, 30.0, 30.0]);
        assert!(session.can_undo());
    }

    #[test]
    fn test_small_moves_are_jitter() {
        let mut session = line_session();

        session.pointer_down(100.0, 100.0);
        session.pointer_move(103.0, 103.0);
        session.pointer_move(104.0, 100.0);
        assert_eq!(session.shapes()[0].points(), &[100.0, 100.0]);

        session.pointer_move(110.0, 110.0);
        assert_eq!(
            session.shapes()[0].points(),
            &[100.0, 100.0, 110.0, 110.0]
        );

        // The threshold is measured from the last recorded point.
        session.pointer_move(111.0, 111.0);
        assert_eq!(session.shapes()[0].points().len(), 4);
    }

    #[test]
    fn test_click_without_movement_is_discarded() {
        let mut session = line_session();

        session.pointer_down(50.0, 50.0);
        let outcome = session.pointer_up();

        assert_eq!(outcome, Some(CommitOutcome::Discarded));
        assert!(session.shapes().is_empty());
        assert!(!session.can_undo());
    }

    #[test]
    fn test_arrow_tracks_endpoint_only() {
        let mut session = AnnotationSession::new();
        session.set_tool(Tool::Arrow);

        session.pointer_down(10.0, 10.0);
        session.pointer_move(30.0, 30.0);
        assert_eq!(session.shapes()[0].points(), &[10.0, 10.0, 30.0, 30.0]);

        session.pointer_move(60.0, 40.0);
        assert_eq!(session.shapes()[0].points(), &[10.0, 10.0, 60.0, 40.0]);

        let outcome = session.pointer_up();
        assert_eq!(outcome, Some(CommitOutcome::Committed(ShapeKind::Arrow)));
    }

    #[test]
    fn test_arrow_drag_bakes_offset() {
        let mut session = AnnotationSession::new();
        session.set_tool(Tool::Arrow);
        session.pointer_down(0.0, 0.0);
        session.pointer_move(50.0, 50.0);
        session.pointer_up();

        assert!(session.begin_drag(0, 20.0, 20.0));
        session.pointer_move(30.0, 15.0);
        assert_eq!(session.drag_offset(0), (10.0, -5.0));
        // Stored geometry is untouched until the drag ends.
        assert_eq!(session.shapes()[0].points(), &[0.0, 0.0, 50.0, 50.0]);

        let outcome = session.pointer_up();
        assert_eq!(outcome, Some(CommitOutcome::Moved));
        assert_eq!(session.shapes()[0].points(), &[10.0, -5.0, 60.0, 45.0]);

        assert!(session.undo());
        assert_eq!(session.shapes()[0].points(), &[0.0, 0.0, 50.0, 50.0]);
    }

    #[test]
    fn test_drag_gated_on_arrow_tool_and_kind() {
        let mut session = line_session();
        session.pointer_down(0.0, 0.0);
        session.pointer_move(20.0, 0.0);
        session.pointer_up();

        // Lines never move, even under the arrow tool.
        session.set_tool(Tool::Arrow);
        assert!(!session.begin_drag(0, 5.0, 0.0));

        session.pointer_down(40.0, 40.0);
        session.pointer_move(80.0, 80.0);
        session.pointer_up();
        assert!(session.begin_drag(1, 60.0, 60.0));

        session.pointer_up();
        session.set_tool(Tool::Line);
        assert!(!session.begin_drag(1, 60.0, 60.0));
    }

    #[test]
    fn test_erase_records_history() {
        let mut session = line_session();
        session.pointer_down(0.0, 0.0);
        session.pointer_move(20.0, 0.0);
        session.pointer_up();
        session.pointer_down(0.0, 40.0);
        session.pointer_move(20.0, 40.0);
        session.pointer_up();

        assert!(session.erase(0));
        assert_eq!(session.shapes().len(), 1);
        assert_eq!(session.shapes()[0].points(), &[0.0, 40.0, 20.0, 40.0]);

        assert!(!session.erase(5));

        assert!(session.undo());
        assert_eq!(session.shapes().len(), 2);
    }

    #[test]
    fn test_read_only_blocks_editing() {
        let payload = ShapePayload {
            shapes: vec![Shape::new(ShapeKind::Arrow, ShapeColor::Red, 1.0, 2.0)],
        };

        let mut session = AnnotationSession::new();
        session.set_tool(Tool::Line);
        session.load_payload(Some(&payload));
        assert!(session.is_read_only());
        assert_eq!(session.shapes().len(), 1);

        session.pointer_down(10.0, 10.0);
        assert_eq!(session.gesture(), Gesture::Idle);
        assert_eq!(session.shapes().len(), 1);
        assert!(!session.erase(0));
        assert!(!session.undo());
        assert_eq!(session.take_submission(), None);

        session.reset();
        assert!(!session.is_read_only());
        assert!(session.shapes().is_empty());
    }

    #[test]
    fn test_tool_switch_settles_stroke() {
        let mut session = line_session();
        session.pointer_down(0.0, 0.0);
        session.pointer_move(20.0, 0.0);

        session.set_tool(Tool::Arrow);
        assert_eq!(session.gesture(), Gesture::Idle);
        assert_eq!(session.shapes().len(), 1);
        assert!(session.can_undo());
    }

    #[test]
    fn test_submission_takes_shapes_and_resets() {
        let mut session = line_session();
        session.pointer_down(0.0, 0.0);
        session.pointer_move(20.0, 0.0);
        session.pointer_up();

        let payload = session.take_submission();
        assert_eq!(payload.map(|p| p.shapes.len()), Some(1));
        assert!(session.shapes().is_empty());
        assert_eq!(session.tool(), Tool::None);
        assert!(!session.can_undo());

        assert_eq!(session.take_submission(), None);
    }

    #[test]
    fn test_submission_without_markup_still_resets() {
        let mut session = line_session();
        session.pointer_down(0.0, 0.0);
        session.pointer_move(20.0, 0.0);
        session.pointer_up();
        assert!(session.erase(0));
        assert!(session.shapes().is_empty());
        assert!(session.can_undo());

        // A text-only submission attaches nothing, but the engine still
        // ends up in its post-submission state: undo must not bring the
        // erased markup back.
        assert_eq!(session.take_submission(), None);
        assert_eq!(session.tool(), Tool::None);
        assert!(!session.can_undo());
        assert!(!session.undo());
        assert!(session.shapes().is_empty());
    }

    #[test]
    fn test_undo_redo_walks_commits() {
        let mut session = line_session();
        session.pointer_down(0.0, 0.0);
        session.pointer_move(20.0, 0.0);
        session.pointer_up();
        session.pointer_down(0.0, 40.0);
        session.pointer_move(20.0, 40.0);
        session.pointer_up();

        assert!(session.undo());
        assert_eq!(session.shapes().len(), 1);
        assert!(session.undo());
        assert!(session.shapes().is_empty());
        assert!(!session.undo());

        assert!(session.redo());
        assert!(session.redo());
        assert_eq!(session.shapes().len(), 2);
        assert!(!session.redo());
    }
}
