//! Output writers: flattened PNGs and device-type YAML documents.
pub mod png;
pub mod yaml;
