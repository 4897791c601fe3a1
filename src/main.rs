// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Redline - location-exact review markup for media assets.
//!
//! A cross-platform desktop application for drawing freehand lines and
//! arrows over a media asset and pinning review comments to the markup.

mod app;
mod editor;
mod io;
mod models;
mod ui;
mod util;

use anyhow::Result;
use app::RedlineApp;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    // Configure egui options
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 720.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Redline - Media Review Markup"),
        ..Default::default()
    };

    // Run the application
    eframe::run_native(
        "Redline",
        options,
        Box::new(|_cc| Ok(Box::new(RedlineApp::new()))),
    )
    .map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}
