use serde::{Deserialize, Serialize};

use crate::core::device::row::DeviceRow;
use crate::types::{InterfaceType, PoeMode, PoeType};

const GI_COMBO_DESCRIPTION: &str = "SFP/RJ45 Combo";
const TEN_GI_COMBO_DESCRIPTION: &str = "SFP+/RJ45 Combo";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interface {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InterfaceType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poe_mode: Option<PoeMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub poe_type: Option<PoeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mgmt_only: Option<bool>,
}

impl Interface {
    fn port(name: String, kind: InterfaceType) -> Self {
        Self {
            name,
            kind,
            description: None,
            enabled: true,
            poe_mode: None,
            poe_type: None,
            mgmt_only: None,
        }
    }
}

/// Naming scheme for the 1G-class and 10G-class sequences
struct PortNaming {
    base_1g: &'static str,
    base_10g: &'static str,
}

impl PortNaming {
    fn for_row(row: &DeviceRow) -> Self {
        if row.is_stacking() {
            Self {
                base_1g: "GigabitEthernet1/0/",
                base_10g: "TenGigabitEthernet1/0/",
            }
        } else {
            Self {
                base_1g: "GigabitEthernet",
                base_10g: "TenGigabitEthernet",
            }
        }
    }
}

/// Derive the ordered interface list for a row.
///
/// Category order is fixed and determines numbering: Gigabit copper, SFP,
/// combo and multi-gig share one counter; the three ten-gig categories
/// share another. An `OOB` port and the trailing `Vlan1` follow.
pub fn derive_interfaces(row: &DeviceRow) -> Vec<Interface> {
    let naming = PortNaming::for_row(row);
    let counts = row.counts;
    let is_poe = row.is_poe();

    let mut interfaces = Vec::new();
    let mut next_1g = 1u32;
    let mut next_10g = 1u32;

    let mut push_1g = |interfaces: &mut Vec<Interface>,
                       kind: InterfaceType,
                       description: Option<&str>,
                       poe: bool| {
        let mut iface = Interface::port(format!("{}{}", naming.base_1g, next_1g), kind);
        iface.description = description.map(str::to_string);
        if poe {
            iface.poe_mode = Some(PoeMode::Pse);
            iface.poe_type = Some(PoeType::Type2Ieee8023at);
        }
        interfaces.push(iface);
        next_1g += 1;
    };

    for _ in 0..counts.gi_copper {
        push_1g(&mut interfaces, InterfaceType::Base1000T, None, is_poe);
    }
    for _ in 0..counts.gi_sfp {
        push_1g(&mut interfaces, InterfaceType::Base1000XSfp, None, false);
    }
    for _ in 0..counts.gi_combo {
        push_1g(
            &mut interfaces,
            InterfaceType::Base1000XSfp,
            Some(GI_COMBO_DESCRIPTION),
            false,
        );
    }
    for _ in 0..counts.two_gi {
        push_1g(&mut interfaces, InterfaceType::Base2500T, None, false);
    }

    let mut push_10g =
        |interfaces: &mut Vec<Interface>, kind: InterfaceType, description: Option<&str>| {
            let mut iface = Interface::port(format!("{}{}", naming.base_10g, next_10g), kind);
            iface.description = description.map(str::to_string);
            interfaces.push(iface);
            next_10g += 1;
        };

    for _ in 0..counts.ten_gi_copper {
        push_10g(&mut interfaces, InterfaceType::Base10GT, None);
    }
    for _ in 0..counts.ten_gi_sfpp {
        push_10g(&mut interfaces, InterfaceType::Base10GXSfpp, None);
    }
    for _ in 0..counts.ten_gi_combo {
        push_10g(
            &mut interfaces,
            InterfaceType::Base10GXSfpp,
            Some(TEN_GI_COMBO_DESCRIPTION),
        );
    }

    if row.has_oob() {
        let mut oob = Interface::port("OOB".to_string(), InterfaceType::Base1000T);
        oob.mgmt_only = Some(true);
        interfaces.push(oob);
    }

    let mut vlan = Interface::port("Vlan1".to_string(), InterfaceType::Virtual);
    vlan.mgmt_only = Some(false);
    interfaces.push(vlan);

    interfaces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::device::row::tests::parse;

    fn names(ifaces: &[Interface]) -> Vec<&str> {
        ifaces.iter().map(|i| i.name.as_str()).collect()
    }

    #[test]
    fn non_stacking_numbering() {
        let row = parse("C1300-8T-E-2G,false,2,1,0,0,1,0,0,0,,,,ac,10,2").unwrap();
        let ifaces = derive_interfaces(&row);
        assert_eq!(
            names(&ifaces),
            [
                "GigabitEthernet1",
                "GigabitEthernet2",
                "GigabitEthernet3",
                "TenGigabitEthernet1",
                "Vlan1"
            ]
        );
        assert_eq!(ifaces[0].kind, InterfaceType::Base1000T);
        assert_eq!(ifaces[2].kind, InterfaceType::Base1000XSfp);
        assert_eq!(ifaces[3].kind, InterfaceType::Base10GT);
        assert_eq!(ifaces[4].kind, InterfaceType::Virtual);
        assert_eq!(ifaces[4].mgmt_only, Some(false));
    }

    #[test]
    fn stacking_numbering() {
        let row = parse("C1300-8T-E-2G,True,2,1,0,0,1,0,0,0,,,,ac,10,2").unwrap();
        assert_eq!(
            names(&derive_interfaces(&row)),
            [
                "GigabitEthernet1/0/1",
                "GigabitEthernet1/0/2",
                "GigabitEthernet1/0/3",
                "TenGigabitEthernet1/0/1",
                "Vlan1"
            ]
        );
    }

    #[test]
    fn one_gig_counter_is_shared_across_four_categories() {
        let row = parse("M,false,1,1,1,1,1,1,1,,,,,ac,10,2").unwrap();
        let ifaces = derive_interfaces(&row);
        let summary: Vec<(&str, InterfaceType, Option<&str>)> = ifaces
            .iter()
            .map(|i| (i.name.as_str(), i.kind, i.description.as_deref()))
            .collect();
        assert_eq!(
            summary,
            [
                ("GigabitEthernet1", InterfaceType::Base1000T, None),
                ("GigabitEthernet2", InterfaceType::Base1000XSfp, None),
                ("GigabitEthernet3", InterfaceType::Base1000XSfp, Some("SFP/RJ45 Combo")),
                ("GigabitEthernet4", InterfaceType::Base2500T, None),
                ("TenGigabitEthernet1", InterfaceType::Base10GT, None),
                ("TenGigabitEthernet2", InterfaceType::Base10GXSfpp, None),
                ("TenGigabitEthernet3", InterfaceType::Base10GXSfpp, Some("SFP+/RJ45 Combo")),
                ("Vlan1", InterfaceType::Virtual, None),
            ]
        );
    }

    #[test]
    fn poe_only_on_gigabit_copper() {
        let row = parse("C1300-24FP-4G,false,3,1,1,1,1,1,1,1,,,,ac,10,2").unwrap();
        for iface in derive_interfaces(&row) {
            let copper_gi = iface.kind == InterfaceType::Base1000T && iface.name != "OOB";
            if copper_gi {
                assert_eq!(iface.poe_mode, Some(PoeMode::Pse));
                assert_eq!(iface.poe_type, Some(PoeType::Type2Ieee8023at));
            } else {
                assert_eq!(iface.poe_mode, None, "{}", iface.name);
                assert_eq!(iface.poe_type, None, "{}", iface.name);
            }
        }
    }

    #[test]
    fn no_poe_without_marker() {
        let row = parse("C1300-24T-4G,false,3,0,0,0,0,0,0,,,,,ac,10,2").unwrap();
        assert!(derive_interfaces(&row).iter().all(|i| i.poe_mode.is_none()));
    }

    #[test]
    fn oob_interface() {
        let zero = parse("M,false,1,0,0,0,0,0,0,0,,,,ac,10,2").unwrap();
        assert!(derive_interfaces(&zero).iter().all(|i| i.name != "OOB"));

        let two = parse("M,false,1,0,0,0,0,0,0,2,,,,ac,10,2").unwrap();
        let ifaces = derive_interfaces(&two);
        let oob: Vec<_> = ifaces.iter().filter(|i| i.name == "OOB").collect();
        assert_eq!(oob.len(), 1);
        assert_eq!(oob[0].kind, InterfaceType::Base1000T);
        assert_eq!(oob[0].mgmt_only, Some(true));
        assert_eq!(ifaces[ifaces.len() - 2].name, "OOB");
        assert_eq!(ifaces.last().unwrap().name, "Vlan1");
    }

    #[test]
    fn zero_ports_still_yields_vlan() {
        let row = parse("M,false,0,0,0,0,0,0,0,,,,,ac,10,2").unwrap();
        assert_eq!(names(&derive_interfaces(&row)), ["Vlan1"]);
    }
}
