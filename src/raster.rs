//! Conversion of bitmaps into the esc/pos raster bit-image stream.
//!
//! The printer consumes images as bands of 8 (low resolution) or 24 (high
//! resolution) vertical dots, one band per ESC * command, packed column by
//! column with the most significant bit on top. Everything here is pure
//! byte construction; nothing is written to a transport.

use crate::{Error, command::{Command, Justification, Resolution}};
use image::{DynamicImage, GenericImageView, GrayImage, imageops};

/// Pixel value treated as paper. Anything else gets ink.
const BACKGROUND: u8 = 255;

/// Blank columns inserted before the image data to realize the requested
/// alignment against the printable width.
pub fn alignment_blanks(justification: Justification, width: u32, max_width: u32) -> u32 {
    match justification {
        Justification::Left => 0,
        Justification::Center => (max_width - width) / 2,
        Justification::Right => max_width - width
    }
}

/// Turns a bitmap into a ready-to-send raster command sequence.
///
/// `scale` resizes the image so that `1.0` spans the full printable width of
/// the selected resolution; `None` takes the bitmap as is. The bitmap is
/// validated completely before a single byte is produced: a too-wide or
/// degenerate image yields an error and an untouched transport.
pub fn rasterize(image: &DynamicImage, resolution: Resolution, justification: Justification, scale: Option<f64>, base_width: u16) -> Result<Vec<u8>, Error> {
    let bitmap = binarize(image, resolution, scale, base_width)?;
    let (width, height) = bitmap.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }
    let max_width = resolution.max_width(base_width);
    if width > max_width {
        return Err(Error::ImageTooWide{width, max_width});
    }

    let band_height = resolution.band_height();
    let bands = (height + band_height - 1) / band_height;
    let blanks = alignment_blanks(justification, width, max_width);
    let columns = width + blanks;

    let mut feed = Vec::new();
    for band in 0..bands {
        feed.extend_from_slice(&Command::RasterMode{resolution}.as_bytes());
        // Column count, low byte first
        feed.push((columns % 256) as u8);
        feed.push((columns / 256) as u8);
        // Alignment padding. Each blank column still carries its full share
        // of data bytes.
        for _ in 0..(blanks * resolution.bytes_per_column()) {
            feed.push(0x00);
        }
        for x in 0..width {
            for chunk in 0..resolution.bytes_per_column() {
                let mut packed = 0u8;
                for bit in 0..8 {
                    let y = band * band_height + chunk * 8 + bit;
                    // Rows past the bitmap stay blank, which pads the last
                    // band from the bottom.
                    if y < height && bitmap.get_pixel(x, y).0[0] != BACKGROUND {
                        packed |= 1 << (7 - bit);
                    }
                }
                feed.push(packed);
            }
        }
    }
    Ok(feed)
}

/// Reduces the bitmap to one luma byte per pixel, resizing first when a
/// scaling factor was requested.
fn binarize(image: &DynamicImage, resolution: Resolution, scale: Option<f64>, base_width: u16) -> Result<GrayImage, Error> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }
    if let Some(scale) = scale {
        if scale <= 0.0 || scale > 1.0 {
            return Err(Error::InvalidScale(scale));
        }
        // Normalize against the base width so that 1.0 always spans the
        // printable area, no matter the bitmap's native size.
        let factor = scale * (base_width as f64) / (width as f64);
        let (horizontal, vertical) = match resolution {
            // High resolution doubles the dot count on both axes.
            Resolution::High => (2.0 * factor, 2.0 * factor),
            // Low resolution dots are taller than wide, so the vertical
            // factor shrinks by 2/3 to keep the aspect ratio on paper.
            Resolution::Low => (factor, factor * 2.0 / 3.0)
        };
        let new_width = (horizontal * (width as f64)).round() as u32;
        let new_height = (vertical * (height as f64)).round() as u32;
        if new_width == 0 || new_height == 0 {
            return Err(Error::EmptyImage);
        }
        Ok(imageops::resize(&image.to_luma8(), new_width, new_height, imageops::FilterType::Nearest))
    } else {
        Ok(image.to_luma8())
    }
}
