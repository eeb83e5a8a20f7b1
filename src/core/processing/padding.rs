use image::{Rgb, RgbImage, RgbaImage};
use tracing::info;

/// Alpha-blend one 8-bit channel over the background, rounding to nearest.
#[inline]
pub fn blend_channel(src: u8, bg: u8, alpha: u8) -> u8 {
    let a = alpha as u32;
    let v = src as u32 * a + bg as u32 * (255 - a) + 128;
    (((v >> 8) + v) >> 8) as u8
}

/// Flatten `img` onto a `canvas_cols` x `img.height()` canvas filled with `fill`,
/// left-aligned at x = 0. Source columns beyond `canvas_cols` are discarded;
/// canvas columns beyond the source width stay solid `fill`.
pub fn flatten_onto_canvas(img: &RgbaImage, canvas_cols: u32, fill: [u8; 3]) -> RgbImage {
    let rows = img.height();
    let copy_cols = img.width().min(canvas_cols);
    let pad_cols = canvas_cols - copy_cols;

    info!(
        "Flattening: cols={}, rows={}, canvas_cols={}, pad_cols={}",
        img.width(),
        rows,
        canvas_cols,
        pad_cols
    );

    let mut canvas = RgbImage::from_pixel(canvas_cols, rows, Rgb(fill));
    for row in 0..rows {
        for col in 0..copy_cols {
            let [r, g, b, a] = img.get_pixel(col, row).0;
            canvas.put_pixel(
                col,
                row,
                Rgb([
                    blend_channel(r, fill[0], a),
                    blend_channel(g, fill[1], a),
                    blend_channel(b, fill[2], a),
                ]),
            );
        }
    }
    canvas
}
