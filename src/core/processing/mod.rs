//! Raster building blocks for elevation images: crop to the opaque region,
//! right-pad or right-crop to a fixed width:height ratio, and flatten onto
//! an opaque background.
pub mod aspect;
pub mod crop;
pub mod padding;
pub mod pipeline;
