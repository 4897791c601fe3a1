// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Tool and color selection state.

use crate::models::shape::{ShapeColor, ShapeKind};

/// Active markup tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Line,
    Arrow,
    Eraser,
    /// No drawing interaction; the canvas is inert except for viewing.
    None,
}

impl Tool {
    /// Shape kind produced by this tool, if it draws one.
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Tool::Line => Some(ShapeKind::Line),
            Tool::Arrow => Some(ShapeKind::Arrow),
            Tool::Eraser | Tool::None => None,
        }
    }

    /// Check if this tool creates shapes (line or arrow).
    pub fn is_drawing_tool(&self) -> bool {
        self.shape_kind().is_some()
    }
}

impl Default for Tool {
    fn default() -> Self {
        Tool::None
    }
}

/// Toolbar selection handed to the drawing state machine.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolState {
    pub tool: Tool,
    pub color: ShapeColor,
}
