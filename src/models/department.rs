//! Civic departments and their fixed service catalogues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the three service providers reachable from the kiosk.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Department {
    Electricity,
    #[serde(rename = "Gas Distribution")]
    Gas,
    #[serde(rename = "Municipal Services")]
    Municipal,
}

const ELECTRICITY_SERVICES: &[&str] = &[
    "Meter Fault",
    "Power Outage",
    "Bill Correction",
    "New Connection",
];

const GAS_SERVICES: &[&str] = &[
    "Leakage Report",
    "Cylinder Refill Issue",
    "New Pipeline Connection",
    "Name Change",
];

const MUNICIPAL_SERVICES: &[&str] = &[
    "Water Supply",
    "Waste Collection",
    "Street Light Repair",
    "Road Repair",
];

impl Department {
    /// Departments in the order they are offered on the services screen
    pub const ALL: [Department; 3] = [
        Department::Electricity,
        Department::Gas,
        Department::Municipal,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Department::Electricity => "Electricity",
            Department::Gas => "Gas Distribution",
            Department::Municipal => "Municipal Services",
        }
    }

    /// Short label used on chart axes
    pub fn short_label(&self) -> &'static str {
        match self {
            Department::Electricity => "Electricity",
            Department::Gas => "Gas",
            Department::Municipal => "Municipal",
        }
    }

    /// Services a citizen can request from this department
    pub fn services(&self) -> &'static [&'static str] {
        match self {
            Department::Electricity => ELECTRICITY_SERVICES,
            Department::Gas => GAS_SERVICES,
            Department::Municipal => MUNICIPAL_SERVICES,
        }
    }

    pub fn offers(&self, service: &str) -> bool {
        self.services().contains(&service)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown department: {0:?}")]
pub struct UnknownDepartment(pub String);

impl FromStr for Department {
    type Err = UnknownDepartment;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|dept| dept.label() == s)
            .ok_or_else(|| UnknownDepartment(s.to_string()))
    }
}
