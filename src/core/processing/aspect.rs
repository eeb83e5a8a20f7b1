use image::{RgbImage, RgbaImage, imageops};
use tracing::debug;

use crate::core::processing::padding::flatten_onto_canvas;

/// Target width for a given height: `floor(ratio * rows)`
pub fn target_width(rows: u32, ratio: f64) -> u32 {
    (ratio * rows as f64).floor() as u32
}

/// Enforce a fixed width:height ratio keeping the height. The source stays
/// left-aligned; narrower images are padded on the right with `fill`, wider
/// ones lose their right overflow. The result is always opaque.
pub fn enforce_aspect_ratio(img: &RgbaImage, ratio: f64, fill: [u8; 3]) -> RgbImage {
    let (cols, rows) = img.dimensions();
    let target = target_width(rows, ratio);

    if cols == target {
        debug!("Already at target width {}, flattening", target);
        flatten_onto_canvas(img, cols, fill)
    } else if cols < target {
        debug!("Padding width {} -> {}", cols, target);
        flatten_onto_canvas(img, target, fill)
    } else {
        debug!("Cropping width {} -> {}", cols, target);
        let cropped = imageops::crop_imm(img, 0, 0, target, rows).to_image();
        flatten_onto_canvas(&cropped, target, fill)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    const WHITE: [u8; 3] = [255, 255, 255];

    #[test]
    fn target_width_uses_floor() {
        assert_eq!(target_width(10, 9.8), 98);
        assert_eq!(target_width(3, 9.8), 29);
        assert_eq!(target_width(1, 9.8), 9);
    }

    #[test]
    fn output_width_is_fixed_for_all_cases() {
        for cols in [5u32, 49, 100, 400] {
            let img = RgbaImage::from_pixel(cols, 5, Rgba([1, 2, 3, 255]));
            let out = enforce_aspect_ratio(&img, 9.8, WHITE);
            assert_eq!(out.dimensions(), (49, 5), "source width {}", cols);
        }
    }

    #[test]
    fn narrow_image_is_left_aligned_with_white_padding() {
        let img = RgbaImage::from_pixel(10, 2, Rgba([0, 0, 0, 255]));
        let out = enforce_aspect_ratio(&img, 9.8, WHITE);
        assert_eq!(out.dimensions(), (19, 2));
        assert_eq!(out.get_pixel(9, 1).0, [0, 0, 0]);
        assert_eq!(out.get_pixel(10, 1).0, WHITE);
        assert_eq!(out.get_pixel(18, 0).0, WHITE);
    }

    #[test]
    fn wide_image_keeps_left_part() {
        let img = RgbaImage::from_fn(30, 2, |x, _| {
            if x < 19 {
                Rgba([0, 0, 0, 255])
            } else {
                Rgba([255, 0, 0, 255])
            }
        });
        let out = enforce_aspect_ratio(&img, 9.8, WHITE);
        assert_eq!(out.dimensions(), (19, 2));
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
    }
}
