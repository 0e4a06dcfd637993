//! Julian date and the derived time scales used by the solar position algorithm.
//!
//! The calendar conversion follows Meeus, "Astronomical Algorithms", as used
//! by Reda & Andreas (2003): dates before 1582-10-15 are read in the Julian
//! calendar, later ones in the Gregorian calendar.

#![allow(clippy::unreadable_literal)]
#![allow(clippy::similar_names)]

use crate::math::trunc;
#[cfg(feature = "chrono")]
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{Datelike, TimeZone, Timelike};

/// Seconds per day (86,400)
pub(crate) const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day Number for J2000.0 epoch (2000-01-01 12:00:00 UTC)
const J2000_JDN: f64 = 2_451_545.0;

/// Days per Julian century
const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Last Julian Day still counted in the Julian calendar (1582-10-14 12:00 Gregorian).
const GREGORIAN_REFORM_JD: f64 = 2_299_160.0;

/// Julian date plus ΔT, the pair every ephemeris time scale derives from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JulianDate {
    /// Julian Date (JD) referenced to UT1
    jd: f64,
    /// ΔT = TT - UT1 in seconds
    delta_t: f64,
}

impl JulianDate {
    /// Wraps an existing Julian Date.
    ///
    /// # Example
    /// ```
    /// # use nrel_spa::time::JulianDate;
    /// let jd = JulianDate::new(2_451_545.0, 64.0);
    /// assert_eq!(jd.julian_century(), 0.0);
    /// ```
    #[must_use]
    pub const fn new(jd: f64, delta_t: f64) -> Self {
        Self { jd, delta_t }
    }

    /// Computes the Julian Date of a local calendar date and time.
    ///
    /// `timezone` is the local offset from UTC in hours (negative west of
    /// Greenwich) and is subtracted to reach UTC; `delta_ut1` (seconds) is
    /// added to reach UT1. Hour 24 lands on midnight of the following day.
    /// No range checks are made here, see [`crate::ObservationRequest::validate`].
    ///
    /// # Example
    /// ```
    /// # use nrel_spa::time::JulianDate;
    /// let jd = JulianDate::from_calendar(2003, 10, 17, 12, 30, 30.0, 0.8, -7.0, 67.0);
    /// assert!((jd.julian_date() - 2_452_930.312_856_481).abs() < 1e-8);
    /// ```
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn from_calendar(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: f64,
        delta_ut1: f64,
        timezone: f64,
        delta_t: f64,
    ) -> Self {
        let day_decimal = f64::from(day)
            + (f64::from(hour) - timezone
                + (f64::from(minute) + (second + delta_ut1) / 60.0) / 60.0)
                / 24.0;

        Self {
            jd: calculate_julian_date(year, month, day_decimal),
            delta_t,
        }
    }

    /// Computes the Julian Date of a timezone-aware chrono `DateTime`.
    ///
    /// The instant is converted to UTC first, so the offset of `datetime`
    /// only matters through the instant it denotes.
    ///
    /// # Errors
    /// Returns an error if the UTC calendar fields or `delta_ut1`/`delta_t`
    /// are outside the supported range.
    ///
    /// # Example
    /// ```
    /// # use nrel_spa::time::JulianDate;
    /// use chrono::{FixedOffset, TimeZone};
    ///
    /// let tz = FixedOffset::west_opt(7 * 3600).unwrap();
    /// let dt = tz.with_ymd_and_hms(2003, 10, 17, 12, 30, 30).unwrap();
    /// let jd = JulianDate::from_datetime(&dt, 0.8, 67.0).unwrap();
    /// assert!((jd.julian_date() - 2_452_930.312_856_481).abs() < 1e-8);
    /// ```
    #[cfg(feature = "chrono")]
    pub fn from_datetime<Tz: TimeZone>(
        datetime: &chrono::DateTime<Tz>,
        delta_ut1: f64,
        delta_t: f64,
    ) -> Result<Self> {
        let utc = datetime.with_timezone(&chrono::Utc);
        let second = f64::from(utc.second()) + f64::from(utc.nanosecond()) / 1e9;

        crate::error::check_calendar(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            second,
        )?;
        crate::error::check_delta_ut1(delta_ut1)?;
        crate::error::check_delta_t(delta_t)?;

        Ok(Self::from_calendar(
            utc.year(),
            utc.month(),
            utc.day(),
            utc.hour(),
            utc.minute(),
            second,
            delta_ut1,
            0.0,
            delta_t,
        ))
    }

    /// Gets the Julian Date (JD) value.
    #[must_use]
    pub const fn julian_date(&self) -> f64 {
        self.jd
    }

    /// Gets the ΔT value in seconds.
    #[must_use]
    pub const fn delta_t(&self) -> f64 {
        self.delta_t
    }

    /// Julian Ephemeris Day, JDE = JD + ΔT/86400.
    #[must_use]
    pub fn julian_ephemeris_day(&self) -> f64 {
        self.jd + self.delta_t / SECONDS_PER_DAY
    }

    /// Julian Century, JC = (JD - 2451545) / 36525.
    #[must_use]
    pub fn julian_century(&self) -> f64 {
        (self.jd - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Julian Ephemeris Century, JCE = (JDE - 2451545) / 36525.
    #[must_use]
    pub fn julian_ephemeris_century(&self) -> f64 {
        (self.julian_ephemeris_day() - J2000_JDN) / DAYS_PER_CENTURY
    }

    /// Julian Ephemeris Millennium, JME = JCE / 10.
    #[must_use]
    pub fn julian_ephemeris_millennium(&self) -> f64 {
        self.julian_ephemeris_century() / 10.0
    }

    /// Shifts the date by whole or fractional days, keeping ΔT.
    #[must_use]
    pub fn add_days(self, days: f64) -> Self {
        Self {
            jd: self.jd + days,
            delta_t: self.delta_t,
        }
    }

    /// Same instant with a different ΔT.
    #[must_use]
    pub const fn with_delta_t(self, delta_t: f64) -> Self {
        Self {
            jd: self.jd,
            delta_t,
        }
    }
}

/// Julian Date from a year, month and fractional day.
///
/// Integer parts truncate toward zero.
fn calculate_julian_date(year: i32, month: u32, day_decimal: f64) -> f64 {
    let (y, m) = if month < 3 {
        (f64::from(year - 1), f64::from(month + 12))
    } else {
        (f64::from(year), f64::from(month))
    };

    let mut jd = trunc(365.25 * (y + 4716.0)) + trunc(30.6001 * (m + 1.0)) + day_decimal - 1524.5;

    if jd > GREGORIAN_REFORM_JD {
        let a = trunc(y / 100.0);
        jd += 2.0 - a + trunc(a / 4.0);
    }

    jd
}
