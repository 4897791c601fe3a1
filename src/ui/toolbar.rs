// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Toolbar for tool selection, stroke color and history controls.

use crate::editor::session::AnnotationSession;
use crate::editor::tools::Tool;
use crate::models::shape::ShapeColor;

/// Display the markup toolbar. Everything here acts on the session
/// directly; the canvas picks the changes up on the same frame.
pub fn show(ui: &mut egui::Ui, session: &mut AnnotationSession) {
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        ui.add_enabled_ui(!session.is_read_only(), |ui| {
            ui.label("Tools:");

            ui.separator();

            tool_button(ui, session, Tool::Line, "⟋ Line");
            tool_button(ui, session, Tool::Arrow, "➤ Arrow");
            tool_button(ui, session, Tool::Eraser, "⌫ Eraser");

            ui.separator();

            ui.label("Color:");
            for color in ShapeColor::ALL {
                color_swatch(ui, session, color);
            }

            ui.separator();

            if ui
                .add_enabled(session.can_undo(), egui::Button::new("⟲ Undo"))
                .clicked()
            {
                session.undo();
            }
            if ui
                .add_enabled(session.can_redo(), egui::Button::new("⟳ Redo"))
                .clicked()
            {
                session.redo();
            }
            if ui
                .add_enabled(!session.shapes().is_empty(), egui::Button::new("Clear"))
                .clicked()
            {
                session.clear();
            }

            ui.separator();

            let hint = match session.tool() {
                Tool::Line => "Drag to draw a freehand line",
                Tool::Arrow => "Drag to draw an arrow, or drag an existing arrow to move it",
                Tool::Eraser => "Click a shape to remove it",
                Tool::None => "Pick a tool to mark up the media",
            };
            ui.label(egui::RichText::new(hint).italics().weak());
        });

        if session.is_read_only() {
            ui.label(
                egui::RichText::new("Markup locked while viewing a comment")
                    .italics()
                    .weak(),
            );
        }
    });
}

/// Selectable tool button. Clicking the active tool again puts it down
/// (back to `Tool::None`).
fn tool_button(ui: &mut egui::Ui, session: &mut AnnotationSession, tool: Tool, label: &str) {
    let selected = session.tool() == tool;
    if ui.selectable_label(selected, label).clicked() {
        session.set_tool(if selected { Tool::None } else { tool });
    }
}

/// One clickable palette entry, outlined when active.
fn color_swatch(ui: &mut egui::Ui, session: &mut AnnotationSession, color: ShapeColor) {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::click());

    let selected = session.color() == color;
    let outline = if selected {
        egui::Stroke::new(2.0, ui.visuals().strong_text_color())
    } else {
        egui::Stroke::new(1.0, egui::Color32::from_gray(90))
    };
    let (r, g, b) = color.rgb();
    ui.painter()
        .rect(rect, 3.0, egui::Color32::from_rgb(r, g, b), outline);

    if response.on_hover_text(color.hex()).clicked() {
        session.set_color(color);
    }
}
