//! Equation of time and sunrise, solar transit and sunset.
//!
//! Follows Appendix A.2 of Reda & Andreas (2003). The sun's geocentric right
//! ascension and declination are taken at 0 UT on the day before, of and
//! after the requested date, interpolated at the approximate event times and
//! refined with one correction step.

#![allow(clippy::similar_names)]
#![allow(clippy::unreadable_literal)]

use super::topocentric::{elevation_angle, SUN_RADIUS};
use super::{geocentric_sun, GeocentricSun};
use crate::math::{
    abs, acos, cos, dayfrac_to_local_hour, deg2rad, limit_degrees, limit_degrees_180,
    limit_degrees_180pm, limit_minutes, limit_zero_to_one, rad2deg, sin,
};
use crate::time::{JulianDate, SECONDS_PER_DAY};
use crate::{ObservationRequest, SunTimes};
use log::debug;

/// Sidereal rotation of the Earth in degrees per solar day.
const SIDEREAL_DEGREES_PER_DAY: f64 = 360.985647;

#[derive(Debug, Clone, Copy)]
struct AlphaDelta {
    alpha: f64,
    delta: f64,
}

/// Event indices into the per-event arrays.
const TRANSIT: usize = 0;
const RISE: usize = 1;
const SET: usize = 2;

/// Equation of time in minutes: apparent minus mean solar time.
///
/// `geocentric` must be the position at `jd`.
#[must_use]
pub fn equation_of_time(jd: &JulianDate, geocentric: &GeocentricSun) -> f64 {
    let m = sun_mean_longitude(jd.julian_ephemeris_millennium());

    limit_minutes(
        4.0 * (m - 0.0057183 - geocentric.right_ascension
            + geocentric.nutation_longitude * cos(deg2rad(geocentric.true_obliquity))),
    )
}

/// Sun's mean longitude M in degrees, [0, 360).
#[must_use]
pub fn sun_mean_longitude(jme: f64) -> f64 {
    limit_degrees(
        280.4664567
            + jme
                * (360007.6982779
                    + jme
                        * (0.03032028
                            + jme
                                * (1.0 / 49931.0
                                    + jme * (-1.0 / 15300.0 + jme * (-1.0 / 2000000.0))))),
    )
}

/// Sunrise, transit and sunset on the request's calendar date.
///
/// Uses the request's date, timezone, ΔT, location and `atmos_refract`; the
/// time of day and `delta_ut1` are ignored. Times come back as local clock
/// hours. Inputs are not validated.
///
/// When the sun stays above or below the horizon all day every field of the
/// result is [`SunTimes::NO_EVENT`].
///
/// # Example
/// ```
/// use nrel_spa::{spa, ObservationRequest};
///
/// let request = ObservationRequest::default()
///     .with_date(2003, 10, 17)
///     .with_timezone(-7.0)
///     .with_delta_t(67.0)
///     .with_location(39.742476, -105.1786);
/// let times = spa::rise_set::sun_times(&request);
/// assert!((times.sunrise() - 6.2121).abs() < 1e-3);
/// assert!((times.sunset() - 17.3387).abs() < 1e-3);
/// ```
#[must_use]
pub fn sun_times(request: &ObservationRequest) -> SunTimes {
    let latitude = request.latitude;
    let longitude = request.longitude;

    // 0 UT with the caller's ΔT for sidereal time
    let day_start = JulianDate::from_calendar(
        request.year,
        request.month,
        request.day,
        0,
        0,
        0.0,
        0.0,
        0.0,
        request.delta_t,
    );
    let nu = geocentric_sun(&day_start).sidereal_time;

    // α and δ at 0 TT on the previous, same and next day
    let day_start_tt = day_start.with_delta_t(0.0);
    let alpha_delta = [-1.0, 0.0, 1.0].map(|offset| {
        let sun = geocentric_sun(&day_start_tt.add_days(offset));
        AlphaDelta {
            alpha: sun.right_ascension,
            delta: sun.declination,
        }
    });

    let transit_estimate = approx_sun_transit_time(alpha_delta[1].alpha, longitude, nu);
    let h0_prime = -(SUN_RADIUS + request.atmos_refract);

    let Some(h0) = sun_hour_angle_at_rise_set(latitude, alpha_delta[1].delta, h0_prime) else {
        debug!(
            "no sunrise or sunset on {}-{:02}-{:02} at latitude {latitude}",
            request.year, request.month, request.day
        );
        return SunTimes::no_event();
    };

    let m_rts = approx_sun_rise_and_set(transit_estimate, h0);

    let mut h_prime = [0.0; 3];
    let mut delta_prime = [0.0; 3];
    let mut h_rts = [0.0; 3];
    for (i, &m) in m_rts.iter().enumerate() {
        let nu_i = nu + SIDEREAL_DEGREES_PER_DAY * m;
        let n = m + request.delta_t / SECONDS_PER_DAY;

        let alpha_prime = rts_alpha_delta_prime(alpha_delta.map(|ad| ad.alpha), n);
        delta_prime[i] = rts_alpha_delta_prime(alpha_delta.map(|ad| ad.delta), n);
        h_prime[i] = limit_degrees_180pm(nu_i + longitude - alpha_prime);
        h_rts[i] = elevation_angle(latitude, delta_prime[i], h_prime[i]);
    }

    let event_hour = |event: usize| {
        let m = m_rts[event]
            + (h_rts[event] - h0_prime)
                / (360.0
                    * cos(deg2rad(delta_prime[event]))
                    * cos(deg2rad(latitude))
                    * sin(deg2rad(h_prime[event])));
        dayfrac_to_local_hour(m, request.timezone)
    };

    SunTimes::new(
        event_hour(RISE),
        dayfrac_to_local_hour(m_rts[TRANSIT] - h_prime[TRANSIT] / 360.0, request.timezone),
        event_hour(SET),
        h_prime[RISE],
        h_prime[SET],
        h_rts[TRANSIT],
    )
}

/// Approximate transit time m0 as a fraction of a day, not yet wrapped.
fn approx_sun_transit_time(alpha_zero: f64, longitude: f64, nu: f64) -> f64 {
    (alpha_zero - longitude - nu) / 360.0
}

/// Local hour angle H0 in [0, 180) at which the sun's center sits at `h0_prime`.
///
/// `None` when the sun never reaches that altitude (or never drops below it).
fn sun_hour_angle_at_rise_set(latitude: f64, delta_zero: f64, h0_prime: f64) -> Option<f64> {
    let latitude_rad = deg2rad(latitude);
    let delta_zero_rad = deg2rad(delta_zero);
    let argument = (sin(deg2rad(h0_prime)) - sin(latitude_rad) * sin(delta_zero_rad))
        / (cos(latitude_rad) * cos(delta_zero_rad));

    (-1.0..=1.0)
        .contains(&argument)
        .then(|| limit_degrees_180(rad2deg(acos(argument))))
}

/// Returns [transit, rise, set] as day fractions in [0, 1).
fn approx_sun_rise_and_set(transit: f64, h0: f64) -> [f64; 3] {
    let h0_dfrac = h0 / 360.0;
    let mut m_rts = [0.0; 3];
    m_rts[RISE] = limit_zero_to_one(transit - h0_dfrac);
    m_rts[SET] = limit_zero_to_one(transit + h0_dfrac);
    m_rts[TRANSIT] = limit_zero_to_one(transit);
    m_rts
}

/// Interpolates a value sampled at 0 TT on three consecutive days.
///
/// Differences of two or more (a right ascension passing 360°) are wrapped
/// into [0, 1).
fn rts_alpha_delta_prime(ad: [f64; 3], n: f64) -> f64 {
    let mut a = ad[1] - ad[0];
    let mut b = ad[2] - ad[1];

    if abs(a) >= 2.0 {
        a = limit_zero_to_one(a);
    }
    if abs(b) >= 2.0 {
        b = limit_zero_to_one(b);
    }

    ad[1] + n * (a + b + (b - a) * n) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OutputSelector;

    const EPSILON: f64 = 1e-6;

    fn denver() -> ObservationRequest {
        ObservationRequest::default()
            .with_date(2003, 10, 17)
            .with_time(12, 30, 30.0)
            .with_timezone(-7.0)
            .with_delta_ut1(0.8)
            .with_delta_t(67.0)
            .with_location(39.742476, -105.1786)
            .with_elevation(1830.14)
            .with_atmosphere(820.0, 11.0)
            .with_output(OutputSelector::ZenithAzimuthRiseSet)
    }

    fn tromso(month: u32, temperature: f64) -> ObservationRequest {
        ObservationRequest::default()
            .with_date(2023, month, 21)
            .with_timezone(2.0)
            .with_delta_t(69.0)
            .with_location(69.65, 18.95)
            .with_atmosphere(1013.25, temperature)
    }

    #[test]
    fn test_reference_rise_transit_set() {
        let times = sun_times(&denver());

        assert!((times.sunrise() - 6.212066609).abs() < EPSILON);
        assert!((times.transit() - 11.768045029).abs() < EPSILON);
        assert!((times.sunset() - 17.338666514).abs() < EPSILON);
        assert!((times.sunrise_hour_angle() - -83.496338242).abs() < EPSILON);
        assert!((times.sunset_hour_angle() - 83.524274108).abs() < EPSILON);
        assert!((times.transit_altitude() - 40.954406824).abs() < EPSILON);
    }

    #[test]
    fn test_rise_set_ignores_time_of_day() {
        let noon = sun_times(&denver());
        let midnight = sun_times(&denver().with_time(0, 0, 0.0).with_delta_ut1(0.0));
        assert_eq!(noon, midnight);
    }

    #[test]
    fn test_equation_of_time() {
        let request = denver();
        let jd = request.julian_date();
        let eot = equation_of_time(&jd, &geocentric_sun(&jd));
        assert!((eot - 14.641512650).abs() < EPSILON);
    }

    #[test]
    fn test_polar_day_and_night() {
        for month in [6, 12] {
            let times = sun_times(&tromso(month, 5.0));
            assert!(!times.has_events());
            assert_eq!(times.sunrise(), SunTimes::NO_EVENT);
            assert_eq!(times.transit(), SunTimes::NO_EVENT);
            assert_eq!(times.sunset(), SunTimes::NO_EVENT);
            assert_eq!(times.sunrise_hour_angle(), SunTimes::NO_EVENT);
            assert_eq!(times.sunset_hour_angle(), SunTimes::NO_EVENT);
            assert_eq!(times.transit_altitude(), SunTimes::NO_EVENT);
        }
    }

    #[test]
    fn test_hour_angle_at_rise_set() {
        assert_eq!(sun_hour_angle_at_rise_set(69.65, 23.44, -0.83337), None);
        assert_eq!(sun_hour_angle_at_rise_set(69.65, -23.44, -0.83337), None);

        // equator at equinox: just over 90° because of refraction and the disk
        let h0 = sun_hour_angle_at_rise_set(0.0, 0.0, -0.83337).unwrap();
        assert!((h0 - 90.83337).abs() < 1e-9);
    }

    #[test]
    fn test_approx_rise_and_set_wraps() {
        let m = approx_sun_rise_and_set(-0.2, 90.0);
        assert!((m[TRANSIT] - 0.8).abs() < 1e-12);
        assert!((m[RISE] - 0.55).abs() < 1e-12);
        assert!((m[SET] - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_interpolation() {
        // linear sequence reproduces itself
        assert!((rts_alpha_delta_prime([10.0, 11.0, 12.0], 0.5) - 11.5).abs() < 1e-12);
        assert!((rts_alpha_delta_prime([10.0, 11.0, 12.0], 0.0) - 11.0).abs() < 1e-12);

        // right ascension passing through 360°
        let across = rts_alpha_delta_prime([358.9, 359.9, 0.9], 0.5);
        let unwrapped = rts_alpha_delta_prime([358.9, 359.9, 360.9], 0.5);
        assert!((across - 359.9).abs() < 1.0);
        assert!(across < unwrapped);
    }

    #[test]
    fn test_sun_mean_longitude() {
        assert!((sun_mean_longitude(0.0) - 280.4664567).abs() < 1e-12);
        let m = sun_mean_longitude(0.5);
        assert!((0.0..360.0).contains(&m));
    }
}
