use image::{RgbImage, RgbaImage};

use crate::core::params::NormalizeParams;
use crate::core::processing::aspect::enforce_aspect_ratio;
use crate::core::processing::crop::crop_to_opaque;

/// Crop to the opaque region, then enforce the configured aspect ratio
pub fn normalize_rgba(img: &RgbaImage, params: &NormalizeParams) -> RgbImage {
    let cropped = crop_to_opaque(img);
    enforce_aspect_ratio(&cropped, params.ratio, params.fill)
}
