// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Media asset loading.
//!
//! Decodes image files into RGBA pixel buffers ready to be uploaded as
//! egui textures. Runs on a background thread, so nothing here touches
//! the UI context.

use anyhow::Result;
use std::path::Path;

/// Decoded media asset in its natural dimensions.
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// RGBA8 pixel data, row-major.
    pub pixels: Vec<u8>,
}

/// Decode an image file into an RGBA8 buffer.
pub fn load_image(path: &Path) -> Result<LoadedImage> {
    let img = image::open(path)?;
    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();

    Ok(LoadedImage {
        width,
        height,
        pixels: rgba.into_raw(),
    })
}
