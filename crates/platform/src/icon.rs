//! Icon representations returned by the package registry.
//!
//! A registry hands back either a flat bitmap or a layered drawable that
//! knows how to paint itself onto a [`Canvas`]. Anything else is reported
//! as [`IconRepresentation::Other`] and left to the caller to ignore.

use image::imageops::{self, FilterType};
use image::{GrayImage, RgbaImage};
use std::fmt;

pub enum IconRepresentation {
    Bitmap(RgbaImage),
    Layered(Box<dyn LayeredDrawable>),
    /// Kind name of a representation with no rasterization path.
    Other(String),
}

impl IconRepresentation {
    pub fn kind(&self) -> &str {
        match self {
            IconRepresentation::Bitmap(_) => "bitmap",
            IconRepresentation::Layered(_) => "layered",
            IconRepresentation::Other(kind) => kind,
        }
    }
}

impl fmt::Debug for IconRepresentation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IconRepresentation::Bitmap(image) => f
                .debug_tuple("Bitmap")
                .field(&image.dimensions())
                .finish(),
            IconRepresentation::Layered(drawable) => f
                .debug_tuple("Layered")
                .field(&drawable.intrinsic_size())
                .finish(),
            IconRepresentation::Other(kind) => f.debug_tuple("Other").field(kind).finish(),
        }
    }
}

/// An icon composited at draw time from separate layers.
pub trait LayeredDrawable: Send + Sync {
    /// Natural (width, height) in pixels.
    fn intrinsic_size(&self) -> (u32, u32);

    /// Paint every layer onto the canvas, filling its bounds.
    fn draw(&self, canvas: &mut Canvas);
}

/// Transparent RGBA drawing surface.
pub struct Canvas {
    surface: RgbaImage,
}

impl Canvas {
    pub fn transparent(width: u32, height: u32) -> Self {
        Self {
            surface: RgbaImage::new(width, height),
        }
    }

    pub fn width(&self) -> u32 {
        self.surface.width()
    }

    pub fn height(&self) -> u32 {
        self.surface.height()
    }

    /// Alpha-blend `image` over the surface, stretched to the canvas bounds.
    pub fn draw_image(&mut self, image: &RgbaImage) {
        if image.dimensions() == self.surface.dimensions() {
            imageops::overlay(&mut self.surface, image, 0, 0);
        } else {
            let scaled = imageops::resize(image, self.width(), self.height(), FilterType::Triangle);
            imageops::overlay(&mut self.surface, &scaled, 0, 0);
        }
    }

    /// Multiply every pixel's alpha by the mask's luminance.
    pub fn apply_mask(&mut self, mask: &GrayImage) {
        let scaled;
        let mask = if mask.dimensions() == self.surface.dimensions() {
            mask
        } else {
            scaled = imageops::resize(mask, self.width(), self.height(), FilterType::Triangle);
            &scaled
        };

        for (pixel, coverage) in self.surface.pixels_mut().zip(mask.pixels()) {
            let alpha = u16::from(pixel[3]) * u16::from(coverage[0]) / 255;
            pixel[3] = alpha as u8;
        }
    }

    pub fn into_image(self) -> RgbaImage {
        self.surface
    }
}

/// Background + foreground layers with an optional shape mask.
pub struct AdaptiveIcon {
    pub background: RgbaImage,
    pub foreground: RgbaImage,
    pub mask: Option<GrayImage>,
}

impl AdaptiveIcon {
    pub fn new(background: RgbaImage, foreground: RgbaImage) -> Self {
        Self {
            background,
            foreground,
            mask: None,
        }
    }

    pub fn with_mask(mut self, mask: GrayImage) -> Self {
        self.mask = Some(mask);
        self
    }
}

impl LayeredDrawable for AdaptiveIcon {
    fn intrinsic_size(&self) -> (u32, u32) {
        let (bw, bh) = self.background.dimensions();
        let (fw, fh) = self.foreground.dimensions();
        (bw.max(fw), bh.max(fh))
    }

    fn draw(&self, canvas: &mut Canvas) {
        canvas.draw_image(&self.background);
        canvas.draw_image(&self.foreground);
        if let Some(mask) = &self.mask {
            canvas.apply_mask(mask);
        }
    }
}
