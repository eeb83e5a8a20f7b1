use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{OutputNaming, WeightUnit};

/// Width multiplier applied to the image height. Nominally 10:1, kept at 9.8.
pub const DEFAULT_ASPECT_RATIO: f64 = 9.8;
/// Largest accepted `ratio`; keeps `ratio * height` well inside `u32`.
pub const MAX_ASPECT_RATIO: f64 = 100.0;
pub const DEFAULT_IMAGE_DIR: &str = "front-rear";
pub const DEFAULT_CSV_FILE: &str = "models.csv";
pub const DEFAULT_OUTPUT_DIR: &str = "Cisco";
pub const DEFAULT_ELEVATION_DIR: &str = "elevation-images";

const CATALYST_1300_DATASHEET: &str = "[Catalyst 1300 Datasheet](https://www.cisco.com/c/en/us/products/collateral/switches/catalyst-1300-series-switches/nb-06-cat1300-ser-data-sheet-cte-en.html)";

/// Image normalizer parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NormalizeParams {
    /// Target width as a multiple of the (cropped) height
    pub ratio: f64,
    /// RGB background the image is flattened onto
    pub fill: [u8; 3],
    pub naming: OutputNaming,
    /// Filename prefix used with `OutputNaming::Prefixed`
    pub prefix: String,
    /// Log and count failures instead of aborting the batch
    pub continue_on_error: bool,
}

impl Default for NormalizeParams {
    fn default() -> Self {
        Self {
            ratio: DEFAULT_ASPECT_RATIO,
            fill: [255, 255, 255],
            naming: OutputNaming::Overwrite,
            prefix: "final_".to_string(),
            continue_on_error: false,
        }
    }
}

/// Device-record generator parameters suitable for config files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerateParams {
    pub manufacturer: String,
    /// Prepended to the slugified model, joined with '-'
    pub slug_prefix: String,
    /// Literal (from, to) substitution applied to the display model name
    pub model_rewrite: Option<(String, String)>,
    pub comments: String,
    pub u_height: f64,
    pub is_full_depth: bool,
    pub weight_unit: WeightUnit,
    pub output_dir: PathBuf,
    /// Checked (never written) for `<slug>.front.png` / `<slug>.rear.png`
    pub elevation_dir: PathBuf,
    pub extension: String,
    pub continue_on_error: bool,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self {
            manufacturer: "Cisco".to_string(),
            slug_prefix: "cisco".to_string(),
            model_rewrite: Some(("C1300".to_string(), "Catalyst 1300".to_string())),
            comments: CATALYST_1300_DATASHEET.to_string(),
            u_height: 1.0,
            is_full_depth: false,
            weight_unit: WeightUnit::Lb,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            elevation_dir: PathBuf::from(DEFAULT_ELEVATION_DIR),
            extension: "yaml".to_string(),
            continue_on_error: false,
        }
    }
}

/// Load a JSON preset; fields absent from the file keep their defaults
pub fn load_params<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
