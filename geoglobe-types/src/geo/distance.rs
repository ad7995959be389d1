//! Great-circle distance between geo points.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::GeoError;
use crate::geo::datum::Datum;
use crate::geo::traits::point::{validate, GeoPoint};

const KM_TO_MILES: f64 = 0.621371;
const KM_TO_NAUTICAL_MILES: f64 = 0.539957;

/// Unit of a linear distance on the Earth surface.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistanceUnit {
    /// Kilometers (`km`).
    #[default]
    #[serde(rename = "km")]
    Kilometers,
    /// Statute miles (`mi`).
    #[serde(rename = "mi")]
    Miles,
    /// Nautical miles (`nm`).
    #[serde(rename = "nm")]
    NauticalMiles,
}

impl DistanceUnit {
    /// Converts a distance in kilometers into this unit.
    pub fn from_km(&self, km: f64) -> f64 {
        match self {
            DistanceUnit::Kilometers => km,
            DistanceUnit::Miles => km * KM_TO_MILES,
            DistanceUnit::NauticalMiles => km * KM_TO_NAUTICAL_MILES,
        }
    }

    /// Short name of the unit.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::Miles => "mi",
            DistanceUnit::NauticalMiles => "nm",
        }
    }
}

impl FromStr for DistanceUnit {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "km" => Ok(DistanceUnit::Kilometers),
            "mi" => Ok(DistanceUnit::Miles),
            "nm" => Ok(DistanceUnit::NauticalMiles),
            other => Err(GeoError::UnknownUnit(other.to_string())),
        }
    }
}

impl Display for DistanceUnit {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// Great-circle distance between two points on the Earth, computed with the haversine formula over the
/// [mean Earth radius](Datum::MEAN_EARTH).
pub fn distance(
    a: &impl GeoPoint<Num = f64>,
    b: &impl GeoPoint<Num = f64>,
    unit: DistanceUnit,
) -> Result<f64, GeoError> {
    validate(a)?;
    validate(b)?;

    let km = Datum::MEAN_EARTH.radius_km() * a.central_angle(b);
    Ok(unit.from_km(km))
}
