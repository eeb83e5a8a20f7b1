use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::device::console::{ConsolePort, derive_console_ports};
use crate::core::device::interfaces::{Interface, derive_interfaces};
use crate::core::device::row::DeviceRow;
use crate::core::device::slug::slugify;
use crate::core::params::GenerateParams;
use crate::io::elevation::find_elevation_images;
use crate::types::WeightUnit;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PowerPort {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub maximum_draw: i64,
}

/// Device-type definition derived from one CSV row. Field order is the
/// serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub manufacturer: String,
    pub model: String,
    pub slug: String,
    pub part_number: String,
    pub u_height: f64,
    pub is_full_depth: bool,
    pub front_image: bool,
    pub rear_image: bool,
    pub comments: String,
    pub weight: f64,
    pub weight_unit: WeightUnit,
    pub interfaces: Vec<Interface>,
    #[serde(rename = "console-ports")]
    pub console_ports: Vec<ConsolePort>,
    #[serde(rename = "power-ports")]
    pub power_ports: Vec<PowerPort>,
}

/// Display name with the configured substring expanded
pub fn display_model(model: &str, params: &GenerateParams) -> String {
    match &params.model_rewrite {
        Some((from, to)) if !from.is_empty() => model.replace(from.as_str(), to),
        _ => model.to_string(),
    }
}

/// `<prefix>-<slugify(model)>`, computed from the model as it appears in the CSV
pub fn device_slug(model: &str, params: &GenerateParams) -> String {
    let base = slugify(model);
    if params.slug_prefix.is_empty() {
        base
    } else {
        format!("{}-{}", params.slug_prefix, base)
    }
}

/// Assemble the full record, probing `params.elevation_dir` for front/rear images
pub fn build_device_record(row: &DeviceRow, params: &GenerateParams) -> DeviceRecord {
    let slug = device_slug(&row.model, params);
    let (front_image, rear_image) = find_elevation_images(&params.elevation_dir, &slug);
    debug!(
        "{}: slug={}, front_image={}, rear_image={}",
        row.model, slug, front_image, rear_image
    );

    DeviceRecord {
        manufacturer: params.manufacturer.clone(),
        model: display_model(&row.model, params),
        slug,
        part_number: row.model.clone(),
        u_height: params.u_height,
        is_full_depth: params.is_full_depth,
        front_image,
        rear_image,
        comments: params.comments.clone(),
        weight: row.weight_lbs,
        weight_unit: params.weight_unit,
        interfaces: derive_interfaces(row),
        console_ports: derive_console_ports(row),
        power_ports: vec![PowerPort {
            name: "PSU0".to_string(),
            kind: row.psu0.clone(),
            // range-checked by `DeviceRow::from_record`
            maximum_draw: row.draw_watts.round_ties_even() as i64,
        }],
    }
}
