//! Core building blocks: image normalization primitives, device-record
//! derivation and the parameter presets. These are consumed by the
//! high-level `api` module.
pub mod device;
pub mod params;
pub mod processing;
