//! Manufactured product families that carry automatic BOM rules.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProductFamily {
    #[serde(rename = "Pile Casing Stock")]
    PileCasing,
    #[serde(rename = "Bored Pile Auger")]
    BoredPileAuger,
    #[serde(rename = "Drilling Barrel")]
    DrillingBarrel,
    #[serde(rename = "Cleaning Bucket")]
    CleaningBucket,
    #[serde(rename = "Tremie Pipe Trial")]
    TremiePipe,
    #[serde(rename = "Core Barrel")]
    CoreBarrel,
    #[serde(rename = "CFA Auger")]
    CfaAuger,
    #[serde(rename = "Extension Bar")]
    ExtensionBar,
    #[serde(rename = "High Tensile Adapter")]
    HighTensileAdapter,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unknown product family: {0}")]
pub struct UnknownFamily(pub String);

impl ProductFamily {
    pub const ALL: [ProductFamily; 9] = [
        Self::PileCasing,
        Self::BoredPileAuger,
        Self::DrillingBarrel,
        Self::CleaningBucket,
        Self::TremiePipe,
        Self::CoreBarrel,
        Self::CfaAuger,
        Self::ExtensionBar,
        Self::HighTensileAdapter,
    ];

    /// Product template name as it appears in the ERP catalog.
    pub fn template_name(&self) -> &'static str {
        match self {
            Self::PileCasing => "Pile Casing Stock",
            Self::BoredPileAuger => "Bored Pile Auger",
            Self::DrillingBarrel => "Drilling Barrel",
            Self::CleaningBucket => "Cleaning Bucket",
            Self::TremiePipe => "Tremie Pipe Trial",
            Self::CoreBarrel => "Core Barrel",
            Self::CfaAuger => "CFA Auger",
            Self::ExtensionBar => "Extension Bar",
            Self::HighTensileAdapter => "High Tensile Adapter",
        }
    }

    pub fn from_template_name(name: &str) -> Result<Self, UnknownFamily> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|f| f.template_name() == name)
            .ok_or_else(|| UnknownFamily(name.to_string()))
    }
}

impl fmt::Display for ProductFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template_name())
    }
}

impl FromStr for ProductFamily {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_template_name(s)
    }
}
