// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Main application state and egui App implementation.
//!
//! This module contains the main application structure that implements
//! the egui::App trait, wiring the markup session, the viewport and the
//! review document to the UI panels.

use crate::editor::session::AnnotationSession;
use crate::editor::tools::Tool;
use crate::editor::viewport::Viewport;
use crate::models::comment::{Comment, ReviewData};
use crate::models::shape::ShapeKind;
use crate::ui::{canvas, comments, toolbar};
use std::sync::mpsc::{channel, Receiver};

/// Result of background media loading.
struct LoadedMedia {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    review: ReviewData,
}

/// Main application state.
pub struct RedlineApp {
    /// Markup session for the active media
    session: AnnotationSession,

    /// Scale context between natural and rendered space
    viewport: Viewport,

    /// Current review document (if media is loaded)
    review: Option<ReviewData>,

    /// Index of the comment being viewed, if any
    active_comment: Option<usize>,

    /// Draft text for the next comment
    draft: String,

    /// Loaded media texture for display
    media_texture: Option<egui::TextureHandle>,

    /// Receiver for background media loading
    media_loader: Option<Receiver<Result<LoadedMedia, String>>>,

    /// Loading state message
    loading_message: Option<String>,
}

impl Default for RedlineApp {
    fn default() -> Self {
        Self::new()
    }
}

impl RedlineApp {
    /// Create a new Redline application instance.
    pub fn new() -> Self {
        Self {
            session: AnnotationSession::new(),
            viewport: Viewport::new(),
            review: None,
            active_comment: None,
            draft: String::new(),
            media_texture: None,
            media_loader: None,
            loading_message: None,
        }
    }

    /// Load a media file and start a fresh review for it (asynchronously).
    pub fn load_media_file(&mut self, path: std::path::PathBuf, _ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.media_loader = Some(receiver);
        self.loading_message = Some("Loading media...".to_string());

        let path_string = path.to_string_lossy().to_string();

        // Spawn background thread for decoding
        std::thread::spawn(move || {
            let result = (|| -> Result<LoadedMedia, String> {
                let loaded_img = crate::io::media::load_image(&path)
                    .map_err(|e| format!("Failed to load media: {}", e))?;

                log::info!(
                    "Loaded media: {} ({}x{})",
                    path.display(),
                    loaded_img.width,
                    loaded_img.height
                );

                let review = ReviewData::new(path_string, loaded_img.width, loaded_img.height);

                Ok(LoadedMedia {
                    width: loaded_img.width,
                    height: loaded_img.height,
                    pixels: loaded_img.pixels,
                    review,
                })
            })();

            let _ = sender.send(result);
        });
    }

    /// Import a review document and load its referenced media (asynchronously).
    fn import_review(&mut self, path: std::path::PathBuf, _ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.media_loader = Some(receiver);
        self.loading_message = Some("Loading review and media...".to_string());

        // Spawn background thread for loading
        std::thread::spawn(move || {
            let result = (|| -> Result<LoadedMedia, String> {
                let extension = path.extension().and_then(|s| s.to_str());
                let review = match extension {
                    Some("yaml") | Some("yml") => crate::io::serialization::import_yaml(&path)
                        .map_err(|e| format!("Failed to import YAML: {}", e))?,
                    Some("json") => crate::io::serialization::import_json(&path)
                        .map_err(|e| format!("Failed to import JSON: {}", e))?,
                    _ => return Err(format!("Unsupported file extension: {:?}", extension)),
                };

                log::info!(
                    "Imported {} comments from {}",
                    review.comments.len(),
                    path.display()
                );

                let media_path = std::path::PathBuf::from(&review.media_file);
                if !media_path.exists() {
                    return Err(format!(
                        "Referenced media not found: {}",
                        media_path.display()
                    ));
                }

                let loaded_img = crate::io::media::load_image(&media_path)
                    .map_err(|e| format!("Failed to load media: {}", e))?;

                log::info!("Loaded media: {}", media_path.display());

                Ok(LoadedMedia {
                    width: loaded_img.width,
                    height: loaded_img.height,
                    pixels: loaded_img.pixels,
                    review,
                })
            })();

            let _ = sender.send(result);
        });
    }

    /// Export the review document to a file.
    fn export_review(&self, path: std::path::PathBuf) {
        if let Some(ref review) = self.review {
            let extension = path.extension().and_then(|s| s.to_str());
            let result = match extension {
                Some("yaml") | Some("yml") => crate::io::serialization::export_yaml(review, &path),
                Some("json") => crate::io::serialization::export_json(review, &path),
                _ => {
                    log::error!("Unsupported file extension: {:?}", extension);
                    return;
                }
            };

            match result {
                Ok(_) => log::info!("Exported review to {}", path.display()),
                Err(e) => log::error!("Failed to export review: {}", e),
            }
        }
    }

    /// Attach the drawn markup to a new comment and append it to the
    /// review. The session resets immediately; persistence is the
    /// document's problem from here on.
    fn submit_comment(&mut self, message: String) {
        let payload = self.session.take_submission();
        if let Some(ref mut review) = self.review {
            let comment = Comment {
                id: review.next_comment_id(),
                message,
                time_range: None,
                annotation: payload,
            };
            review.comments.push(comment);
            log::info!("Submitted comment, total: {}", review.comments.len());
        }
        self.draft.clear();
    }

    /// Select a comment for read-only playback, or `None` to return to
    /// drawing mode.
    fn set_active_comment(&mut self, index: Option<usize>) {
        self.active_comment = index;
        match index {
            Some(idx) => {
                let payload = self
                    .review
                    .as_ref()
                    .and_then(|r| r.comments.get(idx))
                    .and_then(|c| c.annotation.as_ref());
                self.session.load_payload(payload);
                log::info!("Viewing comment {}", idx);
            }
            None => self.session.reset(),
        }
    }

    fn delete_comment(&mut self, index: usize) {
        // Deleting the comment being viewed leaves viewing mode first.
        if self.active_comment == Some(index) {
            self.set_active_comment(None);
        }

        if let Some(ref mut review) = self.review {
            if index < review.comments.len() {
                review.comments.remove(index);
                log::info!("Deleted comment, total: {}", review.comments.len());
            }
        }

        // Keep the selection pointing at the same comment after removal.
        if let Some(active) = self.active_comment {
            if active > index {
                self.active_comment = Some(active - 1);
            }
        }
    }

    /// Apply a finished background load: upload the texture and bind a
    /// fresh session to the new media.
    fn apply_loaded_media(&mut self, loaded: LoadedMedia, ctx: &egui::Context) {
        let size = [loaded.width as usize, loaded.height as usize];
        let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &loaded.pixels);
        let texture = ctx.load_texture("media", color_image, egui::TextureOptions::LINEAR);
        self.media_texture = Some(texture);

        // The decoded dimensions are the natural space; imported documents
        // are corrected to match the file on disk.
        let mut review = loaded.review;
        review.natural_width = loaded.width;
        review.natural_height = loaded.height;

        self.viewport = Viewport::new();
        self.viewport.set_natural_size(loaded.width, loaded.height);

        // Media change resets the markup session.
        self.session.reset();
        self.active_comment = None;
        self.draft.clear();
        self.review = Some(review);

        log::info!("Media ready ({}x{})", loaded.width, loaded.height);
    }
}

impl eframe::App for RedlineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed media loading
        if let Some(ref receiver) = self.media_loader {
            if let Ok(result) = receiver.try_recv() {
                self.media_loader = None;
                self.loading_message = None;

                match result {
                    Ok(loaded) => self.apply_loaded_media(loaded, ctx),
                    Err(e) => log::error!("Failed to load media: {}", e),
                }
            }
        }

        // Request repaint if still loading (to update spinner)
        if self.loading_message.is_some() {
            ctx.request_repaint();
        }

        // Top menu bar
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("File", |ui| {
                    if ui.button("Open Media...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Images", &["jpg", "jpeg", "png", "bmp", "tiff", "tif"])
                            .pick_file()
                        {
                            self.load_media_file(path, ctx);
                        }
                        ui.close_menu();
                    }
                    if ui.button("Open Review...").clicked() {
                        if let Some(path) = rfd::FileDialog::new()
                            .add_filter("Reviews", &["yaml", "yml", "json"])
                            .pick_file()
                        {
                            self.import_review(path, ctx);
                        }
                        ui.close_menu();
                    }
                    ui.separator();
                    ui.menu_button("Export Review", |ui| {
                        if ui.button("Export as YAML...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("YAML", &["yaml", "yml"])
                                .set_file_name("review.yaml")
                                .save_file()
                            {
                                self.export_review(path);
                            }
                            ui.close_menu();
                        }
                        if ui.button("Export as JSON...").clicked() {
                            if let Some(path) = rfd::FileDialog::new()
                                .add_filter("JSON", &["json"])
                                .set_file_name("review.json")
                                .save_file()
                            {
                                self.export_review(path);
                            }
                            ui.close_menu();
                        }
                    });
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("Edit", |ui| {
                    if ui
                        .add_enabled(self.session.can_undo(), egui::Button::new("Undo (Ctrl+Z)"))
                        .clicked()
                    {
                        if self.session.undo() {
                            log::info!("Undo from menu");
                        }
                        ui.close_menu();
                    }

                    if ui
                        .add_enabled(
                            self.session.can_redo(),
                            egui::Button::new("Redo (Ctrl+Shift+Z)"),
                        )
                        .clicked()
                    {
                        if self.session.redo() {
                            log::info!("Redo from menu");
                        }
                        ui.close_menu();
                    }
                });

                ui.menu_button("Help", |ui| {
                    if ui.button("About").clicked() {
                        ui.close_menu();
                    }
                });
            });
        });

        // Toolbar
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            toolbar::show(ui, &mut self.session);
        });

        // Comment panel (right side)
        let markup_shapes = if self.session.is_read_only() {
            0
        } else {
            self.session.shapes().len()
        };
        let comments_action = egui::SidePanel::right("comments")
            .default_width(300.0)
            .show(ctx, |ui| {
                comments::show(
                    ui,
                    &self.review,
                    self.active_comment,
                    &mut self.draft,
                    markup_shapes,
                )
            })
            .inner;

        match comments_action {
            comments::CommentsAction::Select(idx) => self.set_active_comment(Some(idx)),
            comments::CommentsAction::Deselect => self.set_active_comment(None),
            comments::CommentsAction::Submit(message) => self.submit_comment(message),
            comments::CommentsAction::Delete(idx) => self.delete_comment(idx),
            comments::CommentsAction::None => {}
        }

        // Handle keyboard events
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            if self.active_comment.is_some() {
                self.set_active_comment(None);
            } else {
                // Put the active tool down; settles any stroke in flight.
                self.session.set_tool(Tool::None);
            }
        }

        if !ctx.wants_keyboard_input() {
            // Handle undo (Ctrl+Z)
            if ctx.input(|i| {
                i.modifiers.command && i.key_pressed(egui::Key::Z) && !i.modifiers.shift
            }) {
                if self.session.undo() {
                    log::info!("Undo");
                }
            }

            // Handle redo (Ctrl+Shift+Z or Ctrl+Y)
            if ctx.input(|i| {
                (i.modifiers.command && i.modifiers.shift && i.key_pressed(egui::Key::Z))
                    || (i.modifiers.command && i.key_pressed(egui::Key::Y))
            }) {
                if self.session.redo() {
                    log::info!("Redo");
                }
            }
        }

        // Main canvas (center)
        let canvas_action = egui::CentralPanel::default()
            .show(ctx, |ui| {
                // Show loading overlay if loading
                if let Some(ref message) = self.loading_message {
                    ui.centered_and_justified(|ui| {
                        ui.vertical_centered(|ui| {
                            ui.add_space(20.0);
                            ui.spinner();
                            ui.add_space(10.0);
                            ui.label(
                                egui::RichText::new(message)
                                    .size(16.0)
                                    .color(egui::Color32::from_gray(200)),
                            );
                        });
                    });
                    canvas::CanvasAction::None
                } else {
                    canvas::show(
                        ui,
                        &mut self.session,
                        &mut self.viewport,
                        &self.review,
                        &self.media_texture,
                    )
                }
            })
            .inner;

        match canvas_action {
            canvas::CanvasAction::Committed(ShapeKind::Line) => {
                // Extension point for usage tracking of freehand draws.
                log::debug!("Line committed");
            }
            canvas::CanvasAction::Committed(ShapeKind::Arrow) => {
                log::debug!("Arrow committed");
            }
            canvas::CanvasAction::Moved => {
                log::debug!("Arrow moved");
            }
            canvas::CanvasAction::Erased => {
                log::debug!("Shape erased");
            }
            canvas::CanvasAction::None => {}
        }
    }
}
