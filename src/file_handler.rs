use std::sync::Arc;

use eframe::egui;
use parking_lot::Mutex;

use crate::color::Color;
use crate::error::EditorError;
use crate::picture::{Picture, PictureRef};

#[cfg(not(target_arch = "wasm32"))]
const IMAGE_EXTENSIONS: [&str; 6] = ["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Name offered by the save dialog
pub const EXPORT_FILENAME: &str = "artwork.png";

struct LoadResult {
    request: u64,
    outcome: Result<PictureRef, EditorError>,
}

/// Load/save adapter around the picture model.
///
/// Loading runs off-thread (the open dialog and the decode both block) and
/// lands in a shared slot the app polls each frame. Every request carries
/// a monotonically increasing id; a result whose id is no longer the
/// newest is discarded, so two racing loads can never apply out of order.
pub struct FileHandler {
    results: Arc<Mutex<Vec<LoadResult>>>,
    newest_request: u64,
    processed_drops: Vec<String>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self {
            results: Arc::new(Mutex::new(Vec::new())),
            newest_request: 0,
            processed_drops: Vec::new(),
        }
    }

    /// Open a file dialog on a worker thread and decode the chosen image.
    /// The result arrives through [`FileHandler::poll`].
    #[cfg(not(target_arch = "wasm32"))]
    pub fn start_load(&mut self) {
        self.newest_request += 1;
        let request = self.newest_request;
        let slot = Arc::clone(&self.results);

        std::thread::spawn(move || {
            let Some(path) = rfd::FileDialog::new()
                .add_filter("images", &IMAGE_EXTENSIONS)
                .pick_file()
            else {
                log::info!("load request {request} cancelled");
                return;
            };
            log::info!("load request {request}: decoding {}", path.display());
            let outcome = std::fs::read(&path)
                .map_err(|err| EditorError::LoadFailure(err.to_string()))
                .and_then(|bytes| picture_from_bytes(&bytes));
            slot.lock().push(LoadResult { request, outcome });
        });
    }

    /// Collect finished loads. Returns the newest result, if any; stale
    /// results (superseded by a later request) are dropped.
    pub fn poll(&mut self) -> Option<Result<PictureRef, EditorError>> {
        let mut latest = None;
        for result in self.results.lock().drain(..) {
            if result.request == self.newest_request {
                latest = Some(result.outcome);
            } else {
                log::info!(
                    "discarding stale load result for request {} (newest is {})",
                    result.request,
                    self.newest_request
                );
            }
        }
        latest
    }

    /// Decode image files dropped onto the window. Same contract as a
    /// dialog load, minus the dialog.
    pub fn check_dropped_files(
        &mut self,
        ctx: &egui::Context,
    ) -> Option<Result<PictureRef, EditorError>> {
        let dropped = ctx.input(|i| i.raw.dropped_files.clone());
        for file in dropped {
            let name = if let Some(path) = &file.path {
                path.display().to_string()
            } else if !file.name.is_empty() {
                file.name.clone()
            } else {
                "unknown".to_owned()
            };
            if self.processed_drops.contains(&name) {
                continue;
            }
            self.processed_drops.push(name.clone());

            if let Some(bytes) = &file.bytes {
                log::info!("decoding dropped file from memory: {name}");
                return Some(picture_from_bytes(bytes));
            }

            #[cfg(not(target_arch = "wasm32"))]
            if let Some(path) = &file.path {
                log::info!("decoding dropped file: {}", path.display());
                let outcome = std::fs::read(path)
                    .map_err(|err| EditorError::LoadFailure(err.to_string()))
                    .and_then(|bytes| picture_from_bytes(&bytes));
                return Some(outcome);
            }

            log::warn!("dropped file has no accessible data: {name}");
        }
        None
    }

    /// Ask for a destination and export the picture as a PNG at one pixel
    /// per cell. Returns `Ok(())` when the user cancels.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self, picture: &Picture) -> Result<(), EditorError> {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(EXPORT_FILENAME)
            .save_file()
        else {
            return Ok(());
        };
        picture_to_image(picture)
            .save(&path)
            .map_err(|err| EditorError::SaveFailure(err.to_string()))?;
        log::info!("exported picture to {}", path.display());
        Ok(())
    }
}

impl Default for FileHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode an image and sample it into a picture: one cell per pixel, RGB
/// channels formatted canonically, alpha ignored
pub fn picture_from_bytes(bytes: &[u8]) -> Result<PictureRef, EditorError> {
    let decoded =
        image::load_from_memory(bytes).map_err(|err| EditorError::LoadFailure(err.to_string()))?;
    let rgba = decoded.to_rgba8();
    let cells = rgba
        .pixels()
        .map(|pixel| Color::rgb(pixel[0], pixel[1], pixel[2]))
        .collect();
    Picture::from_cells(rgba.width(), rgba.height(), cells)
        .map(Arc::new)
        .map_err(|err| EditorError::LoadFailure(err.to_string()))
}

/// Render a picture to a bitmap at one pixel per cell, ready to encode
pub fn picture_to_image(picture: &Picture) -> image::RgbImage {
    let width = picture.width();
    let mut bitmap = image::RgbImage::new(width, picture.height());
    for (i, color) in picture.cells().iter().enumerate() {
        let (r, g, b) = color.channels();
        let x = i as u32 % width;
        let y = i as u32 / width;
        bitmap.put_pixel(x, y, image::Rgb([r, g, b]));
    }
    bitmap
}
