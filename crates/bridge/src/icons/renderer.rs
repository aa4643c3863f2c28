use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, ImageResult, RgbaImage};
use mini_launcher_platform::{Canvas, IconRepresentation, PackageId, PackageRegistry};
use std::sync::Arc;
use tracing::{debug, warn};

/// Turns a package's icon representation into pixels.
#[derive(Clone)]
pub struct IconRenderer {
    registry: Arc<dyn PackageRegistry>,
}

impl IconRenderer {
    pub fn new(registry: Arc<dyn PackageRegistry>) -> Self {
        Self { registry }
    }

    /// Rasterize a package icon.
    ///
    /// Flat bitmaps are returned as-is. Layered icons are drawn onto a
    /// transparent canvas of their intrinsic size. Unknown packages and
    /// other icon kinds yield `None`.
    pub fn rasterize(&self, package: &PackageId) -> Option<RgbaImage> {
        let icon = match self.registry.load_icon(package) {
            Ok(icon) => icon,
            Err(e) if e.is_not_found() => {
                debug!("No icon for {}: {}", package, e);
                return None;
            }
            Err(e) => {
                warn!("Failed to load icon for {}: {}", package, e);
                return None;
            }
        };

        match icon {
            IconRepresentation::Bitmap(image) => Some(image),
            IconRepresentation::Layered(drawable) => {
                let (width, height) = drawable.intrinsic_size();
                if width == 0 || height == 0 {
                    warn!("Layered icon for {} has no intrinsic size", package);
                    return None;
                }
                let mut canvas = Canvas::transparent(width, height);
                drawable.draw(&mut canvas);
                Some(canvas.into_image())
            }
            IconRepresentation::Other(kind) => {
                debug!("Icon kind '{}' for {} is not rendered", kind, package);
                None
            }
        }
    }

    /// Rasterize and encode as PNG.
    pub fn render_png(&self, package: &PackageId) -> Option<Vec<u8>> {
        let image = self.rasterize(package)?;
        match encode_png(&image) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                warn!("Failed to encode icon for {}: {}", package, e);
                None
            }
        }
    }
}

pub fn encode_png(image: &RgbaImage) -> ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(bytes)
}
