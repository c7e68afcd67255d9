//! Great-circle distance on a spherical Earth

/// Mean Earth radius (km)
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance in kilometres between two `[longitude, latitude]` points
pub fn haversine_km(a: [f64; 2], b: [f64; 2]) -> f64 {
    let (lon1, lat1) = (a[0].to_radians(), a[1].to_radians());
    let (lon2, lat2) = (b[0].to_radians(), b[1].to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}
