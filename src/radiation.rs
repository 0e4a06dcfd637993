//! Clear-sky direct beam radiation from the sun's elevation.
//!
//! A simple empirical model (Masters, "Renewable and Efficient Electric Power
//! Systems", p. 412): extraterrestrial flux and optical depth vary sinusoidally
//! over the year, and attenuation grows with the air mass the beam crosses.
//! Feed it the refraction corrected elevation from [`SpaOutput::elevation`].
//!
//! ```
//! use nrel_spa::{radiation, spa, ObservationRequest};
//!
//! let request = ObservationRequest::default()
//!     .with_date(2023, 6, 21)
//!     .with_time(12, 0, 0.0)
//!     .with_timezone(-7.0)
//!     .with_location(37.7749, -122.4194);
//! let output = spa::calculate(&request).unwrap();
//!
//! let day = radiation::day_of_year(2023, 6, 21);
//! let watts = radiation::direct_radiation(day, output.elevation());
//! assert!(watts > 800.0 && watts < 1000.0);
//! ```
//!
//! [`SpaOutput::elevation`]: crate::SpaOutput::elevation

use crate::math::{deg2rad, exp, sin};
use core::f64::consts::PI;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone};

const DAYS_PER_YEAR: f64 = 365.0;

/// Relative optical path length through the atmosphere, `1 / sin(elevation)`.
///
/// Returns `f64::INFINITY` with the sun exactly on the horizon. Negative
/// elevations give negative values and have no physical meaning.
///
/// # Example
/// ```
/// # use nrel_spa::radiation::air_mass_ratio;
/// assert!((air_mass_ratio(90.0) - 1.0).abs() < 1e-12);
/// assert!((air_mass_ratio(30.0) - 2.0).abs() < 1e-12);
/// assert_eq!(air_mass_ratio(0.0), f64::INFINITY);
/// ```
#[must_use]
pub fn air_mass_ratio(elevation: f64) -> f64 {
    let sine = sin(deg2rad(elevation));
    if sine == 0.0 {
        f64::INFINITY
    } else {
        1.0 / sine
    }
}

/// Apparent extraterrestrial flux in W/m² for a 1-based day of the year.
#[must_use]
pub fn apparent_extraterrestrial_flux(day_of_year: u32) -> f64 {
    1160.0 + 75.0 * sin(2.0 * PI / DAYS_PER_YEAR * (f64::from(day_of_year) - 275.0))
}

/// Optical depth of the atmosphere for a 1-based day of the year.
#[must_use]
pub fn optical_depth(day_of_year: u32) -> f64 {
    0.174 + 0.035 * sin(2.0 * PI / DAYS_PER_YEAR * (f64::from(day_of_year) - 100.0))
}

/// Clear-sky direct beam radiation in W/m² normal to the beam.
///
/// Zero when the sun is at or below the horizon.
#[must_use]
pub fn direct_radiation(day_of_year: u32, elevation: f64) -> f64 {
    if elevation <= 0.0 {
        return 0.0;
    }
    let flux = apparent_extraterrestrial_flux(day_of_year);
    let depth = optical_depth(day_of_year);
    flux * exp(-depth * air_mass_ratio(elevation))
}

/// Same as [`direct_radiation`], taking the day of the year from the UTC date of `datetime`.
#[cfg(feature = "chrono")]
#[must_use]
pub fn direct_radiation_at<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>, elevation: f64) -> f64 {
    direct_radiation(datetime.with_timezone(&chrono::Utc).ordinal(), elevation)
}

/// 1-based day of the year in the proleptic Gregorian calendar.
///
/// Out-of-range months are clamped into 1..=12 and days into 1..=31.
///
/// # Example
/// ```
/// # use nrel_spa::radiation::day_of_year;
/// assert_eq!(day_of_year(2023, 1, 1), 1);
/// assert_eq!(day_of_year(2023, 12, 31), 365);
/// assert_eq!(day_of_year(2024, 12, 31), 366);
/// ```
#[must_use]
pub fn day_of_year(year: i32, month: u32, day: u32) -> u32 {
    const CUMULATIVE_DAYS: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

    let month_index = month.clamp(1, 12) as usize - 1;
    let leap_day = u32::from(month > 2 && is_leap_year(year));
    CUMULATIVE_DAYS[month_index] + leap_day + day.clamp(1, 31)
}

const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}
