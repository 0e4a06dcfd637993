//! Observer-dependent stage: parallax, refraction, zenith, azimuth and incidence.

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use super::GeocentricSun;
use crate::math::{acos, asin, atan, atan2, cos, deg2rad, limit_degrees, rad2deg, sin, tan};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Earth flattening factor (WGS84).
const EARTH_FLATTENING_FACTOR: f64 = 0.99664719;

/// Earth radius in meters (WGS84).
const EARTH_RADIUS_METERS: f64 = 6378140.0;

/// Apparent angular radius of the sun's disk in degrees.
pub const SUN_RADIUS: f64 = 0.26667;

/// Sun position as seen by an observer on the Earth's surface.
///
/// All angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TopocentricSun {
    /// Observer local hour angle H, in [0, 360).
    pub hour_angle: f64,
    /// Equatorial horizontal parallax of the sun ξ.
    pub equatorial_parallax: f64,
    /// Parallax in right ascension Δα.
    pub right_ascension_parallax: f64,
    /// Topocentric right ascension α′.
    pub right_ascension: f64,
    /// Topocentric declination δ′.
    pub declination: f64,
    /// Topocentric local hour angle H′.
    pub local_hour_angle: f64,
    /// Elevation angle without refraction e0.
    pub elevation_uncorrected: f64,
    /// Refraction correction Δe, zero when the sun is below the horizon.
    pub refraction_correction: f64,
    /// Refraction corrected elevation angle e.
    pub elevation: f64,
    /// Zenith angle, 90 - e.
    pub zenith: f64,
    /// Azimuth westward from south, in [0, 360).
    pub azimuth_astro: f64,
    /// Azimuth eastward from north, in [0, 360).
    pub azimuth: f64,
}

/// Moves a geocentric sun position to an observer.
///
/// `pressure` is in hPa, `temperature` in °C and `atmos_refract` is the
/// refraction at the horizon in degrees (usually 0.5667). Inputs are not
/// validated.
///
/// # Example
/// ```
/// use nrel_spa::{spa, time::JulianDate};
///
/// let jd = JulianDate::from_calendar(2003, 10, 17, 12, 30, 30.0, 0.8, -7.0, 67.0);
/// let geocentric = spa::geocentric_sun(&jd);
/// let sun = spa::topocentric::topocentric_sun(
///     &geocentric, 39.742476, -105.1786, 1830.14, 820.0, 11.0, 0.5667,
/// );
/// assert!((sun.zenith - 50.11226).abs() < 1e-4);
/// ```
#[must_use]
pub fn topocentric_sun(
    geocentric: &GeocentricSun,
    latitude: f64,
    longitude: f64,
    elevation: f64,
    pressure: f64,
    temperature: f64,
    atmos_refract: f64,
) -> TopocentricSun {
    // 3.9-3.10. Observer hour angle and equatorial horizontal parallax
    let hour_angle =
        observer_hour_angle(geocentric.sidereal_time, longitude, geocentric.right_ascension);
    let equatorial_parallax = sun_equatorial_horizontal_parallax(geocentric.radius_vector);

    // 3.11-3.12. Parallax in right ascension, topocentric declination and hour angle
    let (right_ascension_parallax, declination) = right_ascension_parallax_and_declination(
        latitude,
        elevation,
        equatorial_parallax,
        hour_angle,
        geocentric.declination,
    );
    let right_ascension = geocentric.right_ascension + right_ascension_parallax;
    let local_hour_angle = hour_angle - right_ascension_parallax;

    // 3.13-3.14. Elevation with refraction and zenith
    let elevation_uncorrected = elevation_angle(latitude, declination, local_hour_angle);
    let refraction_correction =
        refraction_correction(pressure, temperature, atmos_refract, elevation_uncorrected);
    let elevation_angle = elevation_uncorrected + refraction_correction;
    let zenith = 90.0 - elevation_angle;

    // 3.15. Azimuth
    let azimuth_astro = azimuth_astro(local_hour_angle, latitude, declination);
    let azimuth = limit_degrees(azimuth_astro + 180.0);

    TopocentricSun {
        hour_angle,
        equatorial_parallax,
        right_ascension_parallax,
        right_ascension,
        declination,
        local_hour_angle,
        elevation_uncorrected,
        refraction_correction,
        elevation: elevation_angle,
        zenith,
        azimuth_astro,
        azimuth,
    }
}

/// Angle of incidence of the sun on a tilted surface, in degrees.
///
/// `slope` is measured from the horizontal, `azm_rotation` from south toward
/// west, like `azimuth_astro`.
///
/// # Example
/// ```
/// use nrel_spa::spa::topocentric::incidence_angle;
///
/// // a horizontal surface sees the sun at its zenith angle
/// assert!((incidence_angle(35.0, 120.0, 0.0, 0.0) - 35.0).abs() < 1e-10);
/// // sun 30° above the northern horizon grazes a south-facing 30° tilt
/// assert!((incidence_angle(60.0, 180.0, 0.0, 30.0) - 90.0).abs() < 1e-10);
/// ```
#[must_use]
pub fn incidence_angle(zenith: f64, azimuth_astro: f64, azm_rotation: f64, slope: f64) -> f64 {
    let zenith_rad = deg2rad(zenith);
    let slope_rad = deg2rad(slope);

    rad2deg(acos(
        cos(zenith_rad) * cos(slope_rad)
            + sin(slope_rad) * sin(zenith_rad) * cos(deg2rad(azimuth_astro - azm_rotation)),
    ))
}

/// Atmospheric refraction correction Δe in degrees.
///
/// Applied only while the sun's upper limb can still be above the horizon,
/// that is for `e0 ≥ -(SUN_RADIUS + atmos_refract)`; below that it is 0.
#[must_use]
pub fn refraction_correction(pressure: f64, temperature: f64, atmos_refract: f64, e0: f64) -> f64 {
    if e0 >= -(SUN_RADIUS + atmos_refract) {
        (pressure / 1010.0) * (283.0 / (273.0 + temperature)) * 1.02
            / (60.0 * tan(deg2rad(e0 + 10.3 / (e0 + 5.11))))
    } else {
        0.0
    }
}

fn observer_hour_angle(nu: f64, longitude: f64, alpha: f64) -> f64 {
    limit_degrees(nu + longitude - alpha)
}

fn sun_equatorial_horizontal_parallax(r: f64) -> f64 {
    8.794 / (3600.0 * r)
}

/// Returns (Δα, δ′) in degrees.
fn right_ascension_parallax_and_declination(
    latitude: f64,
    elevation: f64,
    xi: f64,
    h: f64,
    delta: f64,
) -> (f64, f64) {
    let lat_rad = deg2rad(latitude);
    let xi_rad = deg2rad(xi);
    let h_rad = deg2rad(h);
    let delta_rad = deg2rad(delta);

    let u = atan(EARTH_FLATTENING_FACTOR * tan(lat_rad));
    let y = EARTH_FLATTENING_FACTOR * sin(u) + elevation * sin(lat_rad) / EARTH_RADIUS_METERS;
    let x = cos(u) + elevation * cos(lat_rad) / EARTH_RADIUS_METERS;

    let delta_alpha_rad = atan2(
        -x * sin(xi_rad) * sin(h_rad),
        cos(delta_rad) - x * sin(xi_rad) * cos(h_rad),
    );
    let delta_prime = rad2deg(atan2(
        (sin(delta_rad) - y * sin(xi_rad)) * cos(delta_alpha_rad),
        cos(delta_rad) - x * sin(xi_rad) * cos(h_rad),
    ));

    (rad2deg(delta_alpha_rad), delta_prime)
}

pub(crate) fn elevation_angle(latitude: f64, delta_prime: f64, h_prime: f64) -> f64 {
    let lat_rad = deg2rad(latitude);
    let delta_prime_rad = deg2rad(delta_prime);

    rad2deg(asin(
        sin(lat_rad) * sin(delta_prime_rad)
            + cos(lat_rad) * cos(delta_prime_rad) * cos(deg2rad(h_prime)),
    ))
}

fn azimuth_astro(h_prime: f64, latitude: f64, delta_prime: f64) -> f64 {
    let h_prime_rad = deg2rad(h_prime);
    let lat_rad = deg2rad(latitude);

    limit_degrees(rad2deg(atan2(
        sin(h_prime_rad),
        cos(h_prime_rad) * sin(lat_rad) - tan(deg2rad(delta_prime)) * cos(lat_rad),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spa::geocentric_sun;
    use crate::time::JulianDate;

    const EPSILON: f64 = 1e-8;

    fn reference_sun(elevation: f64) -> TopocentricSun {
        let jd = JulianDate::from_calendar(2003, 10, 17, 12, 30, 30.0, 0.8, -7.0, 67.0);
        topocentric_sun(
            &geocentric_sun(&jd),
            39.742476,
            -105.1786,
            elevation,
            820.0,
            11.0,
            0.5667,
        )
    }

    #[test]
    fn test_reference_intermediates() {
        let sun = reference_sun(1830.14);

        assert!((sun.hour_angle - 11.109235799).abs() < EPSILON);
        assert!((sun.equatorial_parallax - 2.451253489714e-3).abs() < 1e-12);
        assert!((sun.right_ascension_parallax - -3.686442262871e-4).abs() < 1e-10);
        assert!((sun.declination - -9.316182080).abs() < EPSILON);
        assert!((sun.right_ascension - 202.227047840).abs() < EPSILON);
        assert!((sun.local_hour_angle - 11.109604443).abs() < EPSILON);
        assert!((sun.elevation_uncorrected - 39.871407566).abs() < EPSILON);
        assert!((sun.refraction_correction - 1.633243954926e-2).abs() < 1e-10);
        assert!((sun.elevation - 39.887740005).abs() < EPSILON);
        assert!((sun.zenith - 50.112259995).abs() < EPSILON);
        assert!((sun.azimuth_astro - 14.344445693).abs() < EPSILON);
        assert!((sun.azimuth - 194.344445693).abs() < EPSILON);
    }

    #[test]
    fn test_parallax_grows_with_elevation() {
        let jd = JulianDate::from_calendar(2003, 10, 17, 12, 30, 30.0, 0.8, -7.0, 67.0);
        let geocentric = geocentric_sun(&jd);

        let mut previous_shift = 0.0;
        let mut previous_declination_shift = 0.0;
        for elevation in [0.0, 1000.0, 10_000.0, 100_000.0, 1_000_000.0] {
            let sun = reference_sun(elevation);
            let shift = sun.right_ascension_parallax.abs();
            assert!(
                shift > previous_shift,
                "parallax at {elevation} m ({shift}) not above {previous_shift}"
            );
            previous_shift = shift;

            // a northern observer sees the sun pushed south
            assert!(sun.declination < geocentric.declination);
            let declination_shift = (sun.declination - geocentric.declination).abs();
            assert!(
                declination_shift > previous_declination_shift,
                "declination shift at {elevation} m ({declination_shift}) not above {previous_declination_shift}"
            );
            previous_declination_shift = declination_shift;
        }
    }

    #[test]
    fn test_refraction_threshold() {
        let threshold = -(SUN_RADIUS + 0.5667);

        assert_eq!(refraction_correction(1013.25, 15.0, 0.5667, threshold - 1e-9), 0.0);
        assert_eq!(refraction_correction(1013.25, 15.0, 0.5667, -10.0), 0.0);

        let at_threshold = refraction_correction(1013.25, 15.0, 0.5667, threshold);
        let just_above = refraction_correction(1013.25, 15.0, 0.5667, threshold + 1e-6);
        assert!(at_threshold > 0.0);
        assert!(just_above > 0.0);

        // about half a degree at the horizon, a minute of arc at 45°
        let horizon = refraction_correction(1013.25, 15.0, 0.5667, 0.0);
        assert!(horizon > 0.45 && horizon < 0.5, "{horizon}");
        let high = refraction_correction(1013.25, 15.0, 0.5667, 45.0);
        assert!(high > 0.015 && high < 0.018, "{high}");
    }

    #[test]
    fn test_refraction_follows_atmosphere() {
        let thin = refraction_correction(500.0, 15.0, 0.5667, 10.0);
        let dense = refraction_correction(1013.25, 15.0, 0.5667, 10.0);
        let cold = refraction_correction(1013.25, -30.0, 0.5667, 10.0);
        assert!(thin < dense);
        assert!(cold > dense);
        assert_eq!(refraction_correction(0.0, 15.0, 0.5667, 10.0), 0.0);
    }

    #[test]
    fn test_incidence_angle() {
        assert!(
            (incidence_angle(50.112259995, 14.344445693, -10.0, 30.0) - 25.189120887).abs()
                < EPSILON
        );
        assert!((incidence_angle(0.0, 0.0, 0.0, 90.0) - 90.0).abs() < EPSILON);
        assert!((incidence_angle(60.0, 180.0, 0.0, 30.0) - 90.0).abs() < EPSILON);
    }

    #[test]
    fn test_azimuth_conventions() {
        let sun = reference_sun(1830.14);
        assert!((limit_degrees(sun.azimuth - sun.azimuth_astro) - 180.0).abs() < EPSILON);
        assert!((0.0..360.0).contains(&sun.azimuth));
    }
}
