//! In-memory RGBA drawing surface.
//!
//! Primitives use paint semantics: covered pixels are replaced with the
//! given color, alpha included. Nothing is blended. Coordinates outside the
//! canvas are clipped.

use image::{Rgba, RgbaImage};

/// A mutable RGBA pixel buffer.
#[derive(Debug, Clone)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas filled with `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Color at `(x, y)`, or `None` when outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    /// Set a single pixel.
    pub fn point(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(pixel) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *pixel = color;
        }
    }

    /// Fill the ellipse inscribed in the inclusive bounding box
    /// `[x0, y0, x1, y1]`.
    ///
    /// Fractional box coordinates are truncated toward zero, so a box of
    /// zero extent paints exactly one pixel. A pixel is painted when its
    /// center falls inside the ellipse grown by half a pixel on each side.
    pub fn ellipse(&mut self, bbox: [f32; 4], color: Rgba<u8>) {
        let [x0, y0, x1, y1] = bbox.map(|v| v as i32);
        let (x0, x1) = (x0.min(x1), x0.max(x1));
        let (y0, y1) = (y0.min(y1), y0.max(y1));

        let cx = (x0 + x1) as f32 / 2.0;
        let cy = (y0 + y1) as f32 / 2.0;
        let rx = (x1 - x0) as f32 / 2.0 + 0.5;
        let ry = (y1 - y0) as f32 / 2.0 + 0.5;

        let max_x = self.width() as i32 - 1;
        let max_y = self.height() as i32 - 1;

        for y in y0.max(0)..=y1.min(max_y) {
            let dy = (y as f32 - cy) / ry;
            for x in x0.max(0)..=x1.min(max_x) {
                let dx = (x as f32 - cx) / rx;
                if dx * dx + dy * dy <= 1.0 {
                    self.image.put_pixel(x as u32, y as u32, color);
                }
            }
        }
    }

    /// Fill the circle of `radius` about `(cx, cy)`.
    pub fn circle(&mut self, cx: f32, cy: f32, radius: f32, color: Rgba<u8>) {
        self.ellipse([cx - radius, cy - radius, cx + radius, cy + radius], color);
    }
}
