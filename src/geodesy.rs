//! Great-circle bearing, distance and coordinate formatting
//!
//! Pure functions over geodetic coordinates on a spherical Earth model.
//! Inputs are not validated; out-of-range coordinates are transformed
//! mathematically like any other angle.

use crate::core::{GeoCoordinate, EARTH_RADIUS_KM};

/// Axis a coordinate component belongs to, for hemisphere suffixes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

/// Normalize an angle into [0, 360) degrees
pub fn normalize_degrees(deg: f64) -> f64 {
    ((deg % 360.0) + 360.0) % 360.0
}

/// Initial bearing from `origin` toward `target`, degrees clockwise from
/// true north, in [0, 360).
///
/// Uses the spherical law-of-cosines formulation:
/// `atan2(sin Δlon, cos lat1 · tan lat2 − sin lat1 · cos Δlon)`.
/// Degenerate at the poles and for identical endpoints, where both atan2
/// arguments collapse to zero and the result is 0° by IEEE convention.
pub fn bearing(origin: &GeoCoordinate, target: &GeoCoordinate) -> f64 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = target.latitude.to_radians();
    let delta_lon = (target.longitude - origin.longitude).to_radians();

    let y = delta_lon.sin();
    let x = lat1.cos() * lat2.tan() - lat1.sin() * delta_lon.cos();

    normalize_degrees(y.atan2(x).to_degrees())
}

/// Great-circle distance between two coordinates via the haversine
/// formula, rounded to the nearest whole kilometer.
pub fn distance_km(origin: &GeoCoordinate, target: &GeoCoordinate) -> u32 {
    let lat1 = origin.latitude.to_radians();
    let lat2 = target.latitude.to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = (target.longitude - origin.longitude).to_radians();

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    (EARTH_RADIUS_KM * c).round() as u32
}

/// Format one coordinate component as degrees, minutes and seconds with a
/// hemisphere suffix. Zero maps to the positive hemisphere (N or E).
pub fn format_coordinate(value: f64, axis: Axis) -> String {
    let absolute = value.abs();
    let degrees = absolute.floor();
    let minutes = ((absolute - degrees) * 60.0).floor();
    let seconds = (((absolute - degrees) * 60.0 - minutes) * 60.0).round();

    let suffix = match axis {
        Axis::Latitude => {
            if value >= 0.0 {
                "N"
            } else {
                "S"
            }
        }
        Axis::Longitude => {
            if value >= 0.0 {
                "E"
            } else {
                "W"
            }
        }
    };

    format!(
        "{}° {}' {}\" {}",
        degrees as u32, minutes as u32, seconds as u32, suffix
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KAABA;

    #[test]
    fn test_bearing_in_range() {
        let points = [
            GeoCoordinate::new(0.0, 0.0),
            GeoCoordinate::new(51.5074, -0.1278),
            GeoCoordinate::new(-6.2088, 106.8456),
            GeoCoordinate::new(40.7128, -74.0060),
        ];

        for origin in &points {
            let b = bearing(origin, &KAABA);
            assert!(b >= 0.0 && b < 360.0, "bearing {} out of range", b);
        }
    }

    #[test]
    fn test_bearing_known_values() {
        // From the null island toward Mecca: north-east
        let b = bearing(&GeoCoordinate::new(0.0, 0.0), &KAABA);
        assert!((b - 58.508).abs() < 0.01);

        // From London: south-east
        let b = bearing(&GeoCoordinate::new(51.5074, -0.1278), &KAABA);
        assert!((b - 118.987).abs() < 0.01);

        // From Jakarta the target lies to the west of north
        let b = bearing(&GeoCoordinate::new(-6.2088, 106.8456), &KAABA);
        assert!((b - 295.152).abs() < 0.01);
    }

    #[test]
    fn test_bearing_degenerate_at_identical_endpoints() {
        // Both atan2 arguments are zero here; IEEE atan2(0, 0) gives 0.0.
        // The value carries no directional meaning.
        let b = bearing(&KAABA, &KAABA);
        assert!(b.is_finite());
        assert_eq!(b, 0.0);
    }

    #[test]
    fn test_distance_symmetry() {
        let london = GeoCoordinate::new(51.5074, -0.1278);
        let jakarta = GeoCoordinate::new(-6.2088, 106.8456);

        assert_eq!(distance_km(&london, &KAABA), distance_km(&KAABA, &london));
        assert_eq!(
            distance_km(&jakarta, &london),
            distance_km(&london, &jakarta)
        );
    }

    #[test]
    fn test_distance_zero_for_identical_endpoints() {
        assert_eq!(distance_km(&KAABA, &KAABA), 0);
    }

    #[test]
    fn test_distance_known_values() {
        let d = distance_km(&GeoCoordinate::new(0.0, 0.0), &KAABA);
        assert_eq!(d, 4933);

        let d = distance_km(&GeoCoordinate::new(51.5074, -0.1278), &KAABA);
        assert_eq!(d, 4794);

        // One degree of longitude on the equator
        let d = distance_km(
            &GeoCoordinate::new(0.0, 0.0),
            &GeoCoordinate::new(0.0, 1.0),
        );
        assert_eq!(d, 111);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(359.0), 359.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }

    #[test]
    fn test_normalize_degrees_idempotent() {
        for raw in [-720.5, -1.0, 0.0, 45.3, 359.999, 1080.25] {
            let once = normalize_degrees(raw);
            assert_eq!(normalize_degrees(once), once);
        }
    }

    #[test]
    fn test_format_coordinate_latitude() {
        assert_eq!(
            format_coordinate(21.4225, Axis::Latitude),
            "21° 25' 21\" N"
        );
        assert_eq!(
            format_coordinate(-0.1278, Axis::Latitude),
            "0° 7' 40\" S"
        );
    }

    #[test]
    fn test_format_coordinate_longitude() {
        assert_eq!(
            format_coordinate(39.8262, Axis::Longitude),
            "39° 49' 34\" E"
        );
        assert_eq!(
            format_coordinate(-74.0060, Axis::Longitude),
            "74° 0' 22\" W"
        );
    }

    #[test]
    fn test_format_coordinate_zero_maps_to_positive_hemisphere() {
        assert_eq!(format_coordinate(0.0, Axis::Latitude), "0° 0' 0\" N");
        assert_eq!(format_coordinate(0.0, Axis::Longitude), "0° 0' 0\" E");
    }
}
