//! Shared types and enums used across devtype.
//! Includes `InterfaceType`, the PoE attributes (`PoeMode`, `PoeType`), `WeightUnit`
//! and `OutputNaming` for the image normalizer.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum InterfaceType {
    #[serde(rename = "1000base-t")]
    Base1000T,
    #[serde(rename = "1000base-x-sfp")]
    Base1000XSfp,
    #[serde(rename = "2.5gbase-t")]
    Base2500T,
    #[serde(rename = "10gbase-t")]
    Base10GT,
    #[serde(rename = "10gbase-x-sfpp")]
    Base10GXSfpp,
    #[serde(rename = "virtual")]
    Virtual,
}

impl std::fmt::Display for InterfaceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InterfaceType::Base1000T => "1000base-t",
            InterfaceType::Base1000XSfp => "1000base-x-sfp",
            InterfaceType::Base2500T => "2.5gbase-t",
            InterfaceType::Base10GT => "10gbase-t",
            InterfaceType::Base10GXSfpp => "10gbase-x-sfpp",
            InterfaceType::Virtual => "virtual",
        };
        write!(f, "{}", s)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PoeMode {
    Pse,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum PoeType {
    #[serde(rename = "type2-ieee802.3at")]
    Type2Ieee8023at,
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeightUnit {
    #[default]
    Lb,
    Kg,
}

impl std::fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WeightUnit::Lb => write!(f, "lb"),
            WeightUnit::Kg => write!(f, "kg"),
        }
    }
}

/// Where a normalized PNG is written relative to its source
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize)]
pub enum OutputNaming {
    /// Replace the source file in place
    Overwrite,
    /// Write a sibling file whose name carries the configured prefix
    Prefixed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interface_type_display_matches_serialized_form() {
        for t in [
            InterfaceType::Base1000T,
            InterfaceType::Base1000XSfp,
            InterfaceType::Base2500T,
            InterfaceType::Base10GT,
            InterfaceType::Base10GXSfpp,
            InterfaceType::Virtual,
        ] {
            let json = serde_json::to_string(&t).unwrap();
            assert_eq!(json, format!("\"{}\"", t));
        }
    }

    #[test]
    fn poe_attributes_serialize_to_library_strings() {
        assert_eq!(serde_json::to_string(&PoeMode::Pse).unwrap(), "\"pse\"");
        assert_eq!(
            serde_json::to_string(&PoeType::Type2Ieee8023at).unwrap(),
            "\"type2-ieee802.3at\""
        );
    }
}
