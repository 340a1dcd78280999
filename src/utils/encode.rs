//! PNG and ICO encoding of a finished canvas.
//!
//! Both encoders produce bytes in memory so nothing touches the disk until
//! every format has encoded successfully.

use std::io::Cursor;

use ico::{IconDir, IconDirEntry, IconImage, ResourceType};
use image::ImageFormat;
use image::imageops::{self, FilterType};

use crate::canvas::Canvas;
use crate::error::IconError;

/// Largest frame an ICO directory entry can describe.
pub const MAX_ICO_SIZE: u32 = 256;

/// Encode the canvas as an RGBA PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, IconError> {
    let mut bytes = Vec::new();
    canvas
        .as_image()
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Encode the canvas as a multi-resolution ICO with one frame per entry
/// in `sizes`.
///
/// Frames are downsampled from the canvas with a Lanczos filter; a size
/// equal to the canvas width reuses the pixels as-is.
pub fn encode_ico(canvas: &Canvas, sizes: &[u32]) -> Result<Vec<u8>, IconError> {
    if let Some(&bad) = sizes.iter().find(|&&s| s == 0 || s > MAX_ICO_SIZE) {
        return Err(IconError::InvalidIconSize(bad));
    }

    let mut icon_dir = IconDir::new(ResourceType::Icon);
    for &size in sizes {
        let rgba = if size == canvas.width() && size == canvas.height() {
            canvas.as_image().as_raw().clone()
        } else {
            imageops::resize(canvas.as_image(), size, size, FilterType::Lanczos3).into_raw()
        };

        let frame = IconImage::from_rgba_data(size, size, rgba);
        let entry =
            IconDirEntry::encode(&frame).map_err(|e| IconError::EncodeIco { size, source: e })?;
        icon_dir.add_entry(entry);
    }

    let mut bytes = Vec::new();
    let largest = sizes.iter().copied().max().unwrap_or(0);
    icon_dir
        .write(&mut bytes)
        .map_err(|e| IconError::EncodeIco {
            size: largest,
            source: e,
        })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    fn sample_canvas() -> Canvas {
        let mut canvas = Canvas::new(256, 256, Rgba([10, 15, 30, 255]));
        canvas.circle(128.0, 128.0, 60.0, Rgba([240, 249, 255, 255]));
        canvas
    }

    #[test]
    fn png_decodes_as_rgba_with_same_pixels() {
        let canvas = sample_canvas();
        let bytes = encode_png(&canvas).unwrap();

        let decoded = image::load_from_memory(&bytes).unwrap();
        assert_eq!(decoded.color(), image::ColorType::Rgba8);
        assert_eq!(decoded.to_rgba8().as_raw(), canvas.as_image().as_raw());
    }

    #[test]
    fn ico_contains_every_requested_size() {
        let sizes = [256, 128, 64, 48, 32, 16];
        let bytes = encode_ico(&sample_canvas(), &sizes).unwrap();

        let icon_dir = IconDir::read(Cursor::new(&bytes)).unwrap();
        assert_eq!(icon_dir.resource_type(), ResourceType::Icon);
        let widths: Vec<u32> = icon_dir.entries().iter().map(|e| e.width()).collect();
        assert_eq!(widths, sizes);
        for entry in icon_dir.entries() {
            assert_eq!(entry.width(), entry.height());
        }
    }

    #[test]
    fn ico_frames_are_downsampled_from_canvas() {
        let bytes = encode_ico(&sample_canvas(), &[16]).unwrap();
        let icon_dir = IconDir::read(Cursor::new(&bytes)).unwrap();
        let frame = icon_dir.entries()[0].decode().unwrap();

        assert_eq!(frame.width(), 16);
        assert_eq!(frame.rgba_data().len(), 16 * 16 * 4);
        // Center of the frame sits inside the bright disc
        let center = ((8 * 16 + 8) * 4) as usize;
        assert!(frame.rgba_data()[center] > 200);
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        let canvas = sample_canvas();
        assert!(matches!(
            encode_ico(&canvas, &[32, 0]),
            Err(IconError::InvalidIconSize(0))
        ));
        assert!(matches!(
            encode_ico(&canvas, &[512]),
            Err(IconError::InvalidIconSize(512))
        ));
    }
}
