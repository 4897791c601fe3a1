// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Comment panel: draft composition and the review's comment list.
//!
//! Selecting a listed comment plays its saved markup back on the canvas
//! read-only; submitting a draft captures whatever is currently drawn.

use crate::models::comment::ReviewData;

/// Result of comment panel interaction.
pub enum CommentsAction {
    None,
    /// View the comment at this index (canvas goes read-only).
    Select(usize),
    /// Leave comment viewing and return to drawing.
    Deselect,
    /// Submit the draft with this message.
    Submit(String),
    /// Remove the comment at this index.
    Delete(usize),
}

/// Display the comment panel for the loaded review.
pub fn show(
    ui: &mut egui::Ui,
    review: &Option<ReviewData>,
    active_comment: Option<usize>,
    draft: &mut String,
    markup_shapes: usize,
) -> CommentsAction {
    let mut action = CommentsAction::None;

    ui.heading("Comments");
    ui.separator();

    let review = match review {
        Some(review) => review,
        None => {
            ui.label(
                egui::RichText::new("Open a media file to start a review.").weak(),
            );
            return action;
        }
    };

    let viewing = active_comment.is_some();

    ui.add_enabled_ui(!viewing, |ui| {
        ui.add(
            egui::TextEdit::multiline(draft)
                .desired_rows(3)
                .desired_width(f32::INFINITY)
                .hint_text("Leave feedback..."),
        );
        ui.horizontal(|ui| {
            let can_submit = !draft.trim().is_empty();
            if ui
                .add_enabled(can_submit, egui::Button::new("Submit"))
                .clicked()
            {
                action = CommentsAction::Submit(draft.trim().to_string());
            }
            if markup_shapes > 0 {
                ui.label(
                    egui::RichText::new(format!("{} shapes attached", markup_shapes)).weak(),
                );
            }
        });
    });

    if viewing && ui.button("Back to drawing").clicked() {
        action = CommentsAction::Deselect;
    }

    ui.separator();

    if review.comments.is_empty() {
        ui.label(egui::RichText::new("No comments yet.").weak());
        return action;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .show(ui, |ui| {
            for (index, comment) in review.comments.iter().enumerate() {
                let selected = active_comment == Some(index);
                ui.horizontal(|ui| {
                    let label = format!("#{} {}", comment.id, comment.message);
                    let response = ui.selectable_label(selected, label);
                    if response.clicked() {
                        // Clicking the selected comment puts it away again.
                        action = if selected {
                            CommentsAction::Deselect
                        } else {
                            CommentsAction::Select(index)
                        };
                    }
                    if comment.annotation.is_some() {
                        ui.label("✏").on_hover_text("Has markup");
                    }
                    if let Some((start, end)) = comment.time_range {
                        ui.label(
                            egui::RichText::new(format!("{:.1}s to {:.1}s", start, end)).weak(),
                        );
                    }
                    if ui.small_button("🗑").on_hover_text("Delete comment").clicked() {
                        action = CommentsAction::Delete(index);
                    }
                });
            }
        });

    action
}
