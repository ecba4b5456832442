//! Great-circle distance between geographic coordinates.

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate distance between two coordinates in kilometers
///
/// Uses the spherical law of cosines:
/// `d = R * acos(cos(lat1)*cos(lat2)*cos(lon2-lon1) + sin(lat1)*sin(lat2))`
/// with all angles in radians.
///
/// # Arguments
/// * `lat1`, `lon1` - First coordinate (degrees)
/// * `lat2`, `lon2` - Second coordinate (degrees)
///
/// # Returns
/// Distance in kilometers
pub fn distance_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let central = phi1.cos() * phi2.cos() * delta_lambda.cos() + phi1.sin() * phi2.sin();

    // Rounding can push the cosine a hair outside [-1, 1], which is out of
    // acos's domain.
    EARTH_RADIUS_KM * central.clamp(-1.0, 1.0).acos()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_between_moscow_and_st_petersburg() {
        // Tverskaya 1 to Nevsky 28, roughly 635 km
        let distance = distance_km(55.7600, 37.6175, 59.9358, 30.3259);
        assert!(distance > 620.0 && distance < 650.0);
    }

    #[test]
    fn test_distance_within_one_city() {
        // Tverskaya 1 to Arbat 25, roughly 2 km
        let distance = distance_km(55.7600, 37.6175, 55.7500, 37.5914);
        assert!(distance > 1.5 && distance < 2.5);
    }

    #[test]
    fn test_distance_to_same_point_is_zero() {
        let distance = distance_km(55.7961, 49.1064, 55.7961, 49.1064);
        assert_eq!(distance, 0.0);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let forward = distance_km(56.8389, 60.6057, 55.7961, 49.1064);
        let backward = distance_km(55.7961, 49.1064, 56.8389, 60.6057);
        assert!((forward - backward).abs() < 1e-9);
    }
}
