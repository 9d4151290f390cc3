//! Viewport screenshot to PNG.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use eframe::egui;
use image::{Rgba, RgbaImage};

/// Tracks an outstanding screenshot request across frames.
#[derive(Debug, Default)]
pub struct Screenshot {
    pending: bool,
}

impl Screenshot {
    /// Ask the backend for a viewport capture; it arrives as an input event
    /// on a later frame.
    pub fn request(&mut self, ctx: &egui::Context) {
        self.pending = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// If a capture arrived this frame, ask where to save it and write the PNG.
    ///
    /// Returns the saved path. `None` when nothing arrived, the dialog was
    /// cancelled, or writing failed.
    pub fn handle(&mut self, ctx: &egui::Context) -> Option<PathBuf> {
        if !self.pending {
            return None;
        }
        let image = ctx.input(|i| {
            i.events.iter().rev().find_map(|e| {
                if let egui::Event::Screenshot { image, .. } = e {
                    Some(Arc::clone(image))
                } else {
                    None
                }
            })
        })?;
        self.pending = false;

        let path = rfd::FileDialog::new()
            .set_file_name(default_file_name())
            .add_filter("PNG", &["png"])
            .save_file()?;
        match save_png(&image, &path) {
            Ok(()) => {
                log::info!("Saved viewport screenshot to {:?}", path);
                Some(path)
            }
            Err(e) => {
                log::error!("Failed to save viewport screenshot to {:?}: {}", path, e);
                None
            }
        }
    }
}

/// `scatter_<millis>.png`
pub fn default_file_name() -> String {
    format!("scatter_{}.png", chrono::Local::now().timestamp_millis())
}

pub fn to_rgba_image(image: &egui::ColorImage) -> RgbaImage {
    let [w, h] = image.size;
    let mut out = RgbaImage::new(w as u32, h as u32);
    for y in 0..h {
        for x in 0..w {
            let p = image.pixels[y * w + x];
            out.put_pixel(x as u32, y as u32, Rgba([p.r(), p.g(), p.b(), p.a()]));
        }
    }
    out
}

pub fn save_png(image: &egui::ColorImage, path: &Path) -> Result<(), image::ImageError> {
    to_rgba_image(image).save_with_format(path, image::ImageFormat::Png)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_name_is_png() {
        let name = default_file_name();
        assert!(name.starts_with("scatter_"));
        assert!(name.ends_with(".png"));
    }

    #[test]
    fn converts_pixels_row_major() {
        #[rustfmt::skip]
        let rgba = [
            255, 255, 255, 255,   255, 0, 0, 255,
            255, 255, 255, 255,   255, 255, 255, 255,
        ];
        let img = egui::ColorImage::from_rgba_unmultiplied([2, 2], &rgba);
        let out = to_rgba_image(&img);
        assert_eq!(out.dimensions(), (2, 2));
        assert_eq!(out.get_pixel(1, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(out.get_pixel(0, 1), &Rgba([255, 255, 255, 255]));
    }
}
