use serde::{Deserialize, Serialize};

use crate::core::device::row::{CONSOLE_COLUMNS, DeviceRow};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolePort {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

/// One console port per non-blank `con0`/`con1`/`con2` cell, in column order
pub fn derive_console_ports(row: &DeviceRow) -> Vec<ConsolePort> {
    CONSOLE_COLUMNS
        .iter()
        .zip(&row.consoles)
        .filter_map(|(name, value)| {
            let kind = value.trim();
            (!kind.is_empty()).then(|| ConsolePort {
                name: name.to_string(),
                kind: kind.to_string(),
            })
        })
        .collect()
}
