/// Reference body used to convert angular distances into linear ones.
///
/// The globe is modelled as a perfect sphere, so the only parameter is its radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Datum {
    radius_km: f64,
}

impl Datum {
    /// Mean radius of the Earth, 6371 km.
    pub const MEAN_EARTH: Self = Datum { radius_km: 6371.0 };

    /// Radius of the sphere in kilometers.
    pub fn radius_km(&self) -> f64 {
        self.radius_km
    }
}
