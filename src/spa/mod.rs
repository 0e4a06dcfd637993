//! SPA algorithm implementation.
//!
//! High-accuracy solar positioning based on the NREL algorithm by Reda & Andreas (2003).
//! Accuracy: ±0.0003° for years -2000 to 6000.
//!
//! The calculation runs in three stages. [`geocentric_sun`] depends only on
//! time and yields the sun's apparent right ascension and declination.
//! [`topocentric::topocentric_sun`] moves that to the observer, applying
//! parallax and refraction. [`rise_set::sun_times`] interpolates the sun's
//! path over three days to find sunrise, transit and sunset. [`calculate`]
//! validates a request and runs whichever stages it asks for.
//!
//! Reference: Reda, I.; Andreas, A. (2003). Solar position algorithm for solar radiation applications.
//! Solar Energy, 76(5), 577-589. DOI: <http://dx.doi.org/10.1016/j.solener.2003.12.003>

#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]

use crate::math::{
    asin, atan2, cos, deg2rad, limit_degrees, polynomial, rad2deg, sin, tan,
    third_order_polynomial,
};
use crate::time::JulianDate;
use crate::{ObservationRequest, Result, SpaOutput};
use log::{debug, trace};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod coefficients;
pub mod rise_set;
pub mod topocentric;

use coefficients::{
    NUTATION_COEFFS, OBLIQUITY_COEFFS, TERMS_B, TERMS_L, TERMS_PE, TERMS_R, TERMS_Y,
};
use topocentric::TopocentricSun;

/// Aberration constant in arcseconds.
const ABERRATION_CONSTANT: f64 = -20.4898;

/// Seconds per hour conversion factor.
const SECONDS_PER_HOUR: f64 = 3600.0;

/// Nutation sums are in 0.0001 arcseconds.
const NUTATION_UNITS_PER_DEGREE: f64 = 36_000_000.0;

/// Sun position for one instant as seen from the center of the Earth.
///
/// Angles are in degrees, the radius vector in astronomical units.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeocentricSun {
    /// Earth heliocentric longitude L, in [0, 360).
    pub heliocentric_longitude: f64,
    /// Earth heliocentric latitude B.
    pub heliocentric_latitude: f64,
    /// Earth radius vector R (AU).
    pub radius_vector: f64,
    /// Geocentric longitude θ, in [0, 360).
    pub geocentric_longitude: f64,
    /// Geocentric latitude β.
    pub geocentric_latitude: f64,
    /// Fundamental nutation arguments X0 through X4.
    pub fundamental_arguments: [f64; 5],
    /// Nutation in longitude Δψ.
    pub nutation_longitude: f64,
    /// Nutation in obliquity Δε.
    pub nutation_obliquity: f64,
    /// Mean obliquity of the ecliptic ε0, in arcseconds.
    pub mean_obliquity: f64,
    /// True obliquity of the ecliptic ε.
    pub true_obliquity: f64,
    /// Aberration correction Δτ.
    pub aberration_correction: f64,
    /// Apparent sun longitude λ.
    pub apparent_longitude: f64,
    /// Greenwich mean sidereal time ν0, in [0, 360).
    pub mean_sidereal_time: f64,
    /// Greenwich apparent sidereal time ν.
    pub sidereal_time: f64,
    /// Geocentric right ascension α, in [0, 360).
    pub right_ascension: f64,
    /// Geocentric declination δ.
    pub declination: f64,
}

/// Every intermediate value of one calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics {
    /// Julian date of the requested instant, carrying the request's ΔT.
    pub julian_date: JulianDate,
    /// Time-dependent stage.
    pub geocentric: GeocentricSun,
    /// Observer-dependent stage.
    pub topocentric: TopocentricSun,
}

#[derive(Debug, Clone, Copy)]
struct DeltaPsiEpsilon {
    delta_psi: f64,
    delta_epsilon: f64,
}

/// Runs a full solar position calculation.
///
/// The request is validated first; nothing is computed when a field is out
/// of range. Incidence and rise/set outputs are only produced when the
/// request's [`OutputSelector`](crate::OutputSelector) asks for them.
///
/// # Errors
/// Returns the error for the first invalid field, see [`ObservationRequest::validate`].
///
/// # Example
/// ```
/// use nrel_spa::{spa, ObservationRequest, OutputSelector};
///
/// let request = ObservationRequest::default()
///     .with_date(2003, 10, 17)
///     .with_time(12, 30, 30.0)
///     .with_timezone(-7.0)
///     .with_delta_ut1(0.8)
///     .with_delta_t(67.0)
///     .with_location(39.742476, -105.1786)
///     .with_elevation(1830.14)
///     .with_atmosphere(820.0, 11.0)
///     .with_surface(30.0, -10.0)
///     .with_output(OutputSelector::All);
///
/// let output = spa::calculate(&request).unwrap();
/// assert!((output.zenith() - 50.11226).abs() < 1e-4);
/// assert!((output.azimuth() - 194.34445).abs() < 1e-4);
/// assert!((output.incidence().unwrap() - 25.18912).abs() < 1e-4);
/// ```
pub fn calculate(request: &ObservationRequest) -> Result<SpaOutput> {
    calculate_with_diagnostics(request).map(|(output, _)| output)
}

/// Same as [`calculate`], also returning every intermediate value.
///
/// # Errors
/// Returns the error for the first invalid field, see [`ObservationRequest::validate`].
pub fn calculate_with_diagnostics(
    request: &ObservationRequest,
) -> Result<(SpaOutput, Diagnostics)> {
    if let Err(error) = request.validate() {
        debug!(
            "rejected request (status {}): {error}",
            error.status_code()
        );
        return Err(error);
    }

    let jd = request.julian_date();
    let geocentric = geocentric_sun(&jd);
    let topocentric = topocentric::topocentric_sun(
        &geocentric,
        request.latitude,
        request.longitude,
        request.elevation,
        request.pressure,
        request.temperature,
        request.atmos_refract,
    );

    let mut output = SpaOutput::new(
        topocentric.zenith,
        topocentric.azimuth,
        topocentric.azimuth_astro,
    );

    if request.output.includes_incidence() {
        output = output.with_incidence(topocentric::incidence_angle(
            topocentric.zenith,
            topocentric.azimuth_astro,
            request.azm_rotation,
            request.slope,
        ));
    }

    if request.output.includes_rise_set() {
        let eot = rise_set::equation_of_time(&jd, &geocentric);
        output = output.with_rise_set(eot, rise_set::sun_times(request));
    }

    trace!(
        "jd {} zenith {} azimuth {}",
        jd.julian_date(),
        output.zenith(),
        output.azimuth()
    );

    Ok((
        output,
        Diagnostics {
            julian_date: jd,
            geocentric,
            topocentric,
        },
    ))
}

/// Computes the time-dependent part of the algorithm for one instant.
///
/// No validation is done; the series are only fitted for years -2000 to 6000.
///
/// # Example
/// ```
/// use nrel_spa::{spa, time::JulianDate};
///
/// let jd = JulianDate::new(2_451_545.0, 64.0);
/// let sun = spa::geocentric_sun(&jd);
/// assert!((sun.radius_vector - 0.9833).abs() < 1e-3);
/// assert!((sun.declination + 23.0).abs() < 0.1);
/// ```
#[must_use]
pub fn geocentric_sun(jd: &JulianDate) -> GeocentricSun {
    let jc = jd.julian_century();
    let jce = jd.julian_ephemeris_century();
    let jme = jd.julian_ephemeris_millennium();

    // 3.2. Earth heliocentric position
    let heliocentric_longitude = limit_degrees(rad2deg(earth_values(&TERMS_L, jme)));
    let heliocentric_latitude = rad2deg(earth_values(&TERMS_B, jme));
    let radius_vector = earth_values(&TERMS_R, jme);

    let geocentric_longitude = geocentric_longitude(heliocentric_longitude);
    let geocentric_latitude = -heliocentric_latitude;

    // 3.3. Nutation in longitude and obliquity
    let fundamental_arguments = fundamental_arguments(jce);
    let nutation = nutation_longitude_and_obliquity(jce, &fundamental_arguments);

    // 3.4. True obliquity of the ecliptic
    let mean_obliquity = polynomial(&OBLIQUITY_COEFFS, jme / 10.0);
    let true_obliquity = mean_obliquity / SECONDS_PER_HOUR + nutation.delta_epsilon;

    // 3.5-3.6. Aberration and apparent sun longitude
    let aberration_correction = ABERRATION_CONSTANT / (SECONDS_PER_HOUR * radius_vector);
    let apparent_longitude = geocentric_longitude + nutation.delta_psi + aberration_correction;

    // 3.7. Apparent sidereal time at Greenwich
    let mean_sidereal_time = greenwich_mean_sidereal_time(jd.julian_date(), jc);
    let sidereal_time =
        mean_sidereal_time + nutation.delta_psi * cos(deg2rad(true_obliquity));

    // 3.8. Geocentric right ascension and declination
    let right_ascension =
        geocentric_right_ascension(apparent_longitude, true_obliquity, geocentric_latitude);
    let declination =
        geocentric_declination(geocentric_latitude, true_obliquity, apparent_longitude);

    trace!(
        "jde {} L {heliocentric_longitude} B {heliocentric_latitude} R {radius_vector} \
         dpsi {} eps {true_obliquity} alpha {right_ascension} delta {declination}",
        jd.julian_ephemeris_day(),
        nutation.delta_psi
    );

    GeocentricSun {
        heliocentric_longitude,
        heliocentric_latitude,
        radius_vector,
        geocentric_longitude,
        geocentric_latitude,
        fundamental_arguments,
        nutation_longitude: nutation.delta_psi,
        nutation_obliquity: nutation.delta_epsilon,
        mean_obliquity,
        true_obliquity,
        aberration_correction,
        apparent_longitude,
        mean_sidereal_time,
        sidereal_time,
        right_ascension,
        declination,
    }
}

/// Sums `A·cos(B + C·JME)` over one series of periodic terms.
fn earth_periodic_term_summation(terms: &[[f64; 3]], jme: f64) -> f64 {
    terms
        .iter()
        .map(|[a, b, c]| a * cos(b + c * jme))
        .sum()
}

/// Combines the series sums as a polynomial in JME, in radians (or AU for R).
fn earth_values(series: &[&[[f64; 3]]], jme: f64) -> f64 {
    // L has the most series (6)
    let mut sums = [0.0; 6];
    for (sum, terms) in sums.iter_mut().zip(series) {
        *sum = earth_periodic_term_summation(terms, jme);
    }
    polynomial(&sums[..series.len()], jme) / 1e8
}

fn geocentric_longitude(heliocentric_longitude: f64) -> f64 {
    let theta = heliocentric_longitude + 180.0;
    if theta >= 360.0 {
        theta - 360.0
    } else {
        theta
    }
}

/// X0..X4 in degrees.
fn fundamental_arguments(jce: f64) -> [f64; 5] {
    NUTATION_COEFFS.map(|[a, b, c, d]| third_order_polynomial(a, b, c, d, jce))
}

fn nutation_longitude_and_obliquity(jce: f64, x: &[f64; 5]) -> DeltaPsiEpsilon {
    let mut sum_psi = 0.0;
    let mut sum_epsilon = 0.0;

    for (y_terms, [a, b, c, d]) in TERMS_Y.iter().zip(TERMS_PE) {
        let xy_term_sum = deg2rad(
            x.iter()
                .zip(y_terms)
                .map(|(x_j, &y_j)| x_j * f64::from(y_j))
                .sum(),
        );
        sum_psi += (a + b * jce) * sin(xy_term_sum);
        sum_epsilon += (c + d * jce) * cos(xy_term_sum);
    }

    DeltaPsiEpsilon {
        delta_psi: sum_psi / NUTATION_UNITS_PER_DEGREE,
        delta_epsilon: sum_epsilon / NUTATION_UNITS_PER_DEGREE,
    }
}

fn greenwich_mean_sidereal_time(jd: f64, jc: f64) -> f64 {
    limit_degrees(
        280.46061837
            + 360.98564736629 * (jd - 2_451_545.0)
            + jc * jc * (0.000387933 - jc / 38710000.0),
    )
}

fn geocentric_right_ascension(lambda: f64, epsilon: f64, beta: f64) -> f64 {
    let lambda_rad = deg2rad(lambda);
    let epsilon_rad = deg2rad(epsilon);

    limit_degrees(rad2deg(atan2(
        sin(lambda_rad) * cos(epsilon_rad) - tan(deg2rad(beta)) * sin(epsilon_rad),
        cos(lambda_rad),
    )))
}

fn geocentric_declination(beta: f64, epsilon: f64, lambda: f64) -> f64 {
    let beta_rad = deg2rad(beta);
    let epsilon_rad = deg2rad(epsilon);

    rad2deg(asin(
        sin(beta_rad) * cos(epsilon_rad)
            + cos(beta_rad) * sin(epsilon_rad) * sin(deg2rad(lambda)),
    ))
}
