use std::sync::Arc;

use eframe::egui::{self, Color32, ColorImage, TextureHandle, TextureOptions};

use crate::picture::PictureRef;

/// Display pixels per grid cell
pub const SCALE: u32 = 10;

/// Retained-texture rendering bridge.
///
/// Keeps one texel per grid cell and shows it scaled by [`SCALE`] with
/// nearest-neighbor filtering. `sync` diffs against the previously drawn
/// picture and touches only the cells that changed; a dimension change
/// (or the first frame) rebuilds and resizes the whole surface.
pub struct Renderer {
    texture: Option<TextureHandle>,
    buffer: ColorImage,
    last: Option<PictureRef>,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            texture: None,
            buffer: ColorImage::new([0, 0], Color32::BLACK),
            last: None,
        }
    }

    /// Bring the retained surface in line with `picture`
    pub fn sync(&mut self, ctx: &egui::Context, picture: &PictureRef) {
        if let Some(last) = &self.last {
            if Arc::ptr_eq(last, picture) {
                return;
            }
        }

        let size = [picture.width() as usize, picture.height() as usize];
        match &self.last {
            Some(last) if self.buffer.size == size => {
                let mut patched = 0usize;
                for (i, (old, new)) in last.cells().iter().zip(picture.cells()).enumerate() {
                    if old != new {
                        self.buffer.pixels[i] = new.to_color32();
                        patched += 1;
                    }
                }
                log::trace!("renderer patched {patched} cells");
            }
            _ => {
                log::debug!("renderer rebuilding {}x{} surface", size[0], size[1]);
                self.buffer = ColorImage::new(size, Color32::BLACK);
                for (i, color) in picture.cells().iter().enumerate() {
                    self.buffer.pixels[i] = color.to_color32();
                }
            }
        }

        match &mut self.texture {
            Some(texture) => texture.set(self.buffer.clone(), TextureOptions::NEAREST),
            None => {
                self.texture =
                    Some(ctx.load_texture("picture", self.buffer.clone(), TextureOptions::NEAREST));
            }
        }
        self.last = Some(picture.clone());
    }

    /// Size of the displayed surface in points: `width*SCALE x height*SCALE`
    pub fn surface_size(&self) -> egui::Vec2 {
        egui::vec2(
            (self.buffer.size[0] as u32 * SCALE) as f32,
            (self.buffer.size[1] as u32 * SCALE) as f32,
        )
    }

    /// Paint the synced surface into `rect`
    pub fn paint(&self, painter: &egui::Painter, rect: egui::Rect) {
        if let Some(texture) = &self.texture {
            painter.image(
                texture.id(),
                rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                Color32::WHITE,
            );
        }
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
