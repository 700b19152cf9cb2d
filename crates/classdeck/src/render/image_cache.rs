use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use eframe::egui;

/// Textures for atmosphere images, decoded on first use and kept for the
/// life of the presentation. Paths resolve against the deck's directory.
pub struct ImageCache {
    base_path: PathBuf,
    textures: RefCell<HashMap<String, Option<egui::TextureHandle>>>,
}

impl ImageCache {
    pub fn new(base_path: PathBuf) -> Self {
        Self {
            base_path,
            textures: RefCell::new(HashMap::new()),
        }
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        let p = Path::new(path);
        if p.is_absolute() && p.exists() {
            p.to_path_buf()
        } else {
            self.base_path.join(path.trim_start_matches('/'))
        }
    }

    /// The texture for `path`, or `None` if it cannot be read. A failed
    /// load is remembered so it is only reported once.
    pub fn get_or_load(&self, ui: &egui::Ui, path: &str) -> Option<egui::TextureHandle> {
        if let Some(cached) = self.textures.borrow().get(path) {
            return cached.clone();
        }

        let resolved = self.resolve(path);
        let texture = match decode(&resolved) {
            Ok(image) => {
                tracing::debug!(path = %resolved.display(), "atmosphere image loaded");
                Some(
                    ui.ctx()
                        .load_texture(path, image, egui::TextureOptions::LINEAR),
                )
            }
            Err(e) => {
                tracing::warn!(path = %resolved.display(), error = %e, "cannot load image");
                None
            }
        };
        self.textures
            .borrow_mut()
            .insert(path.to_string(), texture.clone());
        texture
    }
}

fn decode(path: &Path) -> Result<egui::ColorImage, image::ImageError> {
    let rgba = image::open(path)?.into_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw()))
}
