//! Enumerations for growth stages, planting methods and environments.

use std::str::FromStr;

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Growth-cycle phase a task belongs to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Bed preparation, sowing and transplanting
    Transplant,

    /// Rooting and early growth after planting
    Establish,

    /// Vegetative growth
    Veg,

    /// Flowering and fruit set
    Flower,

    /// Harvest window
    Harvest,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Transplant => "transplant",
            Stage::Establish => "establish",
            Stage::Veg => "veg",
            Stage::Flower => "flower",
            Stage::Harvest => "harvest",
        }
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "transplant" => Ok(Stage::Transplant),
            "establish" => Ok(Stage::Establish),
            "veg" => Ok(Stage::Veg),
            "flower" => Ok(Stage::Flower),
            "harvest" => Ok(Stage::Harvest),
            _ => Err(format!("Invalid stage: {s}")),
        }
    }
}

/// How the crop is brought into the field.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// Direct sowing
    Seed,

    /// Transplanting raised seedlings
    Transplant,

    /// Transplanting grafted seedlings
    Grafting,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Seed => "seed",
            Method::Transplant => "transplant",
            Method::Grafting => "grafting",
        }
    }
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "seed" => Ok(Method::Seed),
            "transplant" => Ok(Method::Transplant),
            "grafting" => Ok(Method::Grafting),
            _ => Err(format!("Invalid method: {s}")),
        }
    }
}

/// Cultivation setting. Affects task timing through the environment factor.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Open field
    Open,

    /// Protected cultivation under cover
    Greenhouse,

    /// Soilless cultivation on nutrient solution
    Hydroponic,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Open => "open",
            Environment::Greenhouse => "greenhouse",
            Environment::Hydroponic => "hydroponic",
        }
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Environment::Open),
            "greenhouse" => Ok(Environment::Greenhouse),
            "hydroponic" => Ok(Environment::Hydroponic),
            _ => Err(format!("Invalid environment: {s}")),
        }
    }
}
