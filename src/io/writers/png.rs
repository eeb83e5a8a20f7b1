use std::path::Path;

use image::{ImageFormat, RgbImage, RgbaImage};

use crate::error::Result;

/// Decode any supported raster and convert it to 8-bit RGBA
pub fn read_rgba(input: &Path) -> Result<RgbaImage> {
    Ok(image::open(input)?.to_rgba8())
}

/// Encode as PNG regardless of the output extension's case
pub fn write_rgb_png(output: &Path, img: &RgbImage) -> Result<()> {
    img.save_with_format(output, ImageFormat::Png)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, Rgba};

    #[test]
    fn writes_uppercase_extension_as_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("OUT.PNG");
        write_rgb_png(&path, &RgbImage::from_pixel(3, 2, Rgb([1, 2, 3]))).unwrap();
        let back = read_rgba(&path).unwrap();
        assert_eq!(back.dimensions(), (3, 2));
        assert_eq!(back.get_pixel(0, 0), &Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn unreadable_file_is_an_image_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(read_rgba(&path).is_err());
    }
}
