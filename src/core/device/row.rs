use csv::StringRecord;

use crate::error::{Error, Result};

pub const COL_MODEL: &str = "Model";
pub const COL_STACKING: &str = "Stacking";
pub const COL_GI_COPPER: &str = "GigabitEthernet Copper";
pub const COL_GI_SFP: &str = "GigabitEthernet SFP";
pub const COL_GI_COMBO: &str = "GigabitEthernet Combo";
pub const COL_TWO_GI: &str = "TwoGigabitEthernet";
pub const COL_TEN_GI_COPPER: &str = "TenGigabitEthernet Copper";
pub const COL_TEN_GI_SFPP: &str = "TenGigabitEthernet SFP+";
pub const COL_TEN_GI_COMBO: &str = "TenGigabitEthernet Combo";
pub const COL_OOB: &str = "OOB";
pub const COL_PSU0: &str = "psu0";
pub const COL_DRAW: &str = "Draw";
pub const COL_WEIGHT: &str = "Weight (pounds)";
pub const CONSOLE_COLUMNS: [&str; 3] = ["con0", "con1", "con2"];

/// Per-category physical port counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PortCounts {
    pub gi_copper: u32,
    pub gi_sfp: u32,
    pub gi_combo: u32,
    pub two_gi: u32,
    pub ten_gi_copper: u32,
    pub ten_gi_sfpp: u32,
    pub ten_gi_combo: u32,
}

/// One validated row of the model CSV
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceRow {
    pub model: String,
    /// Raw `Stacking` cell; empty when the column is absent
    pub stacking: String,
    pub counts: PortCounts,
    /// Raw `OOB` cell; empty when the column is absent
    pub oob: String,
    pub psu0: String,
    pub draw_watts: f64,
    pub weight_lbs: f64,
    /// Raw `con0`..`con2` cells; empty when absent
    pub consoles: [String; 3],
}

impl DeviceRow {
    /// Build a row from a CSV record. `row` is the 1-based data row number used in errors.
    pub fn from_record(headers: &StringRecord, record: &StringRecord, row: usize) -> Result<Self> {
        let fields = Fields {
            headers,
            record,
            row,
        };

        let counts = PortCounts {
            gi_copper: fields.count(COL_GI_COPPER)?,
            gi_sfp: fields.count(COL_GI_SFP)?,
            gi_combo: fields.count(COL_GI_COMBO)?,
            two_gi: fields.count(COL_TWO_GI)?,
            ten_gi_copper: fields.count(COL_TEN_GI_COPPER)?,
            ten_gi_sfpp: fields.count(COL_TEN_GI_SFPP)?,
            ten_gi_combo: fields.count(COL_TEN_GI_COMBO)?,
        };

        Ok(Self {
            model: fields.required(COL_MODEL)?.to_string(),
            stacking: fields.optional(COL_STACKING).to_string(),
            counts,
            oob: fields.optional(COL_OOB).to_string(),
            psu0: fields.required(COL_PSU0)?.to_string(),
            draw_watts: fields.watts(COL_DRAW)?,
            weight_lbs: fields.number(COL_WEIGHT)?,
            consoles: CONSOLE_COLUMNS.map(|c| fields.optional(c).to_string()),
        })
    }

    /// `Stacking` equals "true" ignoring case and surrounding whitespace
    pub fn is_stacking(&self) -> bool {
        self.stacking.trim().eq_ignore_ascii_case("true")
    }

    /// PoE models carry `P-` (which also covers `FP-`) in their name
    pub fn is_poe(&self) -> bool {
        let upper = self.model.to_uppercase();
        upper.contains("P-") || upper.contains("FP-")
    }

    /// `OOB` is a non-empty run of ASCII digits with a value above zero
    pub fn has_oob(&self) -> bool {
        !self.oob.is_empty()
            && self.oob.chars().all(|c| c.is_ascii_digit())
            && !self.oob.trim_start_matches('0').is_empty()
    }
}

struct Fields<'a> {
    headers: &'a StringRecord,
    record: &'a StringRecord,
    row: usize,
}

impl<'a> Fields<'a> {
    fn get(&self, column: &str) -> Option<&'a str> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|idx| self.record.get(idx))
    }

    fn required(&self, column: &'static str) -> Result<&'a str> {
        self.get(column).ok_or(Error::MissingField {
            row: self.row,
            field: column,
        })
    }

    fn optional(&self, column: &str) -> &'a str {
        self.get(column).unwrap_or("")
    }

    fn count(&self, column: &'static str) -> Result<u32> {
        let raw = self.required(column)?;
        raw.trim().parse::<u32>().map_err(|_| Error::InvalidCount {
            row: self.row,
            field: column,
            value: raw.to_string(),
        })
    }

    fn number(&self, column: &'static str) -> Result<f64> {
        let raw = self.required(column)?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| Error::InvalidNumber {
                row: self.row,
                field: column,
                value: raw.to_string(),
            })
    }

    /// A number whose ties-even rounding fits in an `i64`
    fn watts(&self, column: &'static str) -> Result<f64> {
        let value = self.number(column)?;
        let rounded = value.round_ties_even();
        if rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
            Ok(value)
        } else {
            Err(Error::InvalidNumber {
                row: self.row,
                field: column,
                value: self.optional(column).to_string(),
            })
        }
    }
}
