// mean radius, km
pub const EARTH_RADIUS_KM: f64 = 6371.008;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn to_radians(self) -> (f64, f64) {
        (self.lat.to_radians(), self.lng.to_radians())
    }
}

/// Great-circle distance in kilometers, spherical law of cosines.
pub fn great_circle_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lng1) = a.to_radians();
    let (lat2, lng2) = b.to_radians();
    let delta = (lng2 - lng1).abs();

    let arc = lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta.cos();
    // rounding can push identical or antipodal points just outside acos's domain
    arc.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_KM
}
