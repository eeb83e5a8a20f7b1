use image::{RgbaImage, imageops};
use tracing::debug;

/// Bounding box of all pixels with non-zero alpha as `(x, y, width, height)`.
/// Returns `None` for a fully transparent image.
pub fn opaque_bounds(img: &RgbaImage) -> Option<(u32, u32, u32, u32)> {
    let (mut min_x, mut min_y) = (u32::MAX, u32::MAX);
    let (mut max_x, mut max_y) = (0u32, 0u32);
    let mut found = false;

    for (x, y, px) in img.enumerate_pixels() {
        if px.0[3] != 0 {
            found = true;
            min_x = min_x.min(x);
            min_y = min_y.min(y);
            max_x = max_x.max(x);
            max_y = max_y.max(y);
        }
    }

    found.then(|| (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1))
}

/// Crop to the opaque bounding box. A fully transparent image is returned unchanged.
pub fn crop_to_opaque(img: &RgbaImage) -> RgbaImage {
    match opaque_bounds(img) {
        Some((x, y, w, h)) => {
            debug!(
                "Cropping {}x{} to opaque region {}x{} at ({}, {})",
                img.width(),
                img.height(),
                w,
                h,
                x,
                y
            );
            imageops::crop_imm(img, x, y, w, h).to_image()
        }
        None => {
            debug!("Image is fully transparent, keeping as is");
            img.clone()
        }
    }
}
