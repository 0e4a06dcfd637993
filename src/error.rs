//! Error types and input validators.
//!
//! Each variant names the input that failed its range check and carries the
//! rejected value. [`Error::status_code`] maps a variant to the numeric code
//! used by the reference C implementation, so callers that log or persist
//! status codes keep working.

use core::fmt;

/// Result type alias for operations in this crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Input validation failures.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Year outside -2000..=6000.
    InvalidYear {
        /// The rejected year.
        value: i32,
    },
    /// Month outside 1..=12.
    InvalidMonth {
        /// The rejected month.
        value: u32,
    },
    /// Day outside 1..=31.
    InvalidDay {
        /// The rejected day.
        value: u32,
    },
    /// Hour outside 0..=24.
    InvalidHour {
        /// The rejected hour.
        value: u32,
    },
    /// Minute outside 0..=59, or non-zero at hour 24.
    InvalidMinute {
        /// The rejected minute.
        value: u32,
    },
    /// Second outside [0, 60), or non-zero at hour 24.
    InvalidSecond {
        /// The rejected second.
        value: f64,
    },
    /// ΔT outside ±8000 seconds.
    InvalidDeltaT {
        /// The rejected ΔT in seconds.
        value: f64,
    },
    /// Time zone outside ±18 hours.
    InvalidTimezone {
        /// The rejected offset in hours.
        value: f64,
    },
    /// Longitude outside ±180 degrees.
    InvalidLongitude {
        /// The rejected longitude.
        value: f64,
    },
    /// Latitude outside ±90 degrees.
    InvalidLatitude {
        /// The rejected latitude.
        value: f64,
    },
    /// Elevation below -6,500,000 meters.
    InvalidElevation {
        /// The rejected elevation in meters.
        value: f64,
    },
    /// Pressure outside 0..=5000 hPa.
    InvalidPressure {
        /// The rejected pressure in hPa.
        value: f64,
    },
    /// Temperature at or below -273 °C or above 6000 °C.
    InvalidTemperature {
        /// The rejected temperature in °C.
        value: f64,
    },
    /// Surface slope outside ±360 degrees.
    InvalidSlope {
        /// The rejected slope.
        value: f64,
    },
    /// Surface azimuth rotation outside ±360 degrees.
    InvalidAzimuthRotation {
        /// The rejected rotation.
        value: f64,
    },
    /// Refraction constant outside ±5 degrees.
    InvalidAtmosRefract {
        /// The rejected refraction constant.
        value: f64,
    },
    /// UT1-UTC correction outside the open interval (-1, 1) seconds.
    InvalidDeltaUt1 {
        /// The rejected correction in seconds.
        value: f64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidYear { value } => {
                write!(f, "invalid year {value} (must be between -2000 and 6000)")
            }
            Self::InvalidMonth { value } => {
                write!(f, "invalid month {value} (must be between 1 and 12)")
            }
            Self::InvalidDay { value } => {
                write!(f, "invalid day {value} (must be between 1 and 31)")
            }
            Self::InvalidHour { value } => {
                write!(f, "invalid hour {value} (must be between 0 and 24)")
            }
            Self::InvalidMinute { value } => {
                write!(
                    f,
                    "invalid minute {value} (must be between 0 and 59, and 0 at hour 24)"
                )
            }
            Self::InvalidSecond { value } => {
                write!(
                    f,
                    "invalid second {value} (must be in [0, 60), and 0 at hour 24)"
                )
            }
            Self::InvalidDeltaT { value } => {
                write!(f, "invalid delta T {value} s (must be within ±8000 s)")
            }
            Self::InvalidTimezone { value } => {
                write!(f, "invalid timezone {value} h (must be within ±18 h)")
            }
            Self::InvalidLongitude { value } => {
                write!(
                    f,
                    "invalid longitude {value}° (must be between -180° and +180°)"
                )
            }
            Self::InvalidLatitude { value } => {
                write!(
                    f,
                    "invalid latitude {value}° (must be between -90° and +90°)"
                )
            }
            Self::InvalidElevation { value } => {
                write!(f, "invalid elevation {value} m (must be at least -6500000 m)")
            }
            Self::InvalidPressure { value } => {
                write!(
                    f,
                    "invalid pressure {value} hPa (must be between 0 and 5000)"
                )
            }
            Self::InvalidTemperature { value } => {
                write!(
                    f,
                    "invalid temperature {value}°C (must be above -273°C and at most 6000°C)"
                )
            }
            Self::InvalidSlope { value } => {
                write!(f, "invalid slope {value}° (must be within ±360°)")
            }
            Self::InvalidAzimuthRotation { value } => {
                write!(f, "invalid azimuth rotation {value}° (must be within ±360°)")
            }
            Self::InvalidAtmosRefract { value } => {
                write!(
                    f,
                    "invalid atmospheric refraction {value}° (must be within ±5°)"
                )
            }
            Self::InvalidDeltaUt1 { value } => {
                write!(
                    f,
                    "invalid UT1-UTC correction {value} s (must be strictly between -1 and 1)"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

impl Error {
    /// Creates an invalid year error.
    #[must_use]
    pub const fn invalid_year(value: i32) -> Self {
        Self::InvalidYear { value }
    }

    /// Creates an invalid month error.
    #[must_use]
    pub const fn invalid_month(value: u32) -> Self {
        Self::InvalidMonth { value }
    }

    /// Creates an invalid day error.
    #[must_use]
    pub const fn invalid_day(value: u32) -> Self {
        Self::InvalidDay { value }
    }

    /// Creates an invalid hour error.
    #[must_use]
    pub const fn invalid_hour(value: u32) -> Self {
        Self::InvalidHour { value }
    }

    /// Creates an invalid minute error.
    #[must_use]
    pub const fn invalid_minute(value: u32) -> Self {
        Self::InvalidMinute { value }
    }

    /// Creates an invalid second error.
    #[must_use]
    pub const fn invalid_second(value: f64) -> Self {
        Self::InvalidSecond { value }
    }

    /// Creates an invalid ΔT error.
    #[must_use]
    pub const fn invalid_delta_t(value: f64) -> Self {
        Self::InvalidDeltaT { value }
    }

    /// Creates an invalid timezone error.
    #[must_use]
    pub const fn invalid_timezone(value: f64) -> Self {
        Self::InvalidTimezone { value }
    }

    /// Creates an invalid longitude error.
    #[must_use]
    pub const fn invalid_longitude(value: f64) -> Self {
        Self::InvalidLongitude { value }
    }

    /// Creates an invalid latitude error.
    #[must_use]
    pub const fn invalid_latitude(value: f64) -> Self {
        Self::InvalidLatitude { value }
    }

    /// Creates an invalid elevation error.
    #[must_use]
    pub const fn invalid_elevation(value: f64) -> Self {
        Self::InvalidElevation { value }
    }

    /// Creates an invalid pressure error.
    #[must_use]
    pub const fn invalid_pressure(value: f64) -> Self {
        Self::InvalidPressure { value }
    }

    /// Creates an invalid temperature error.
    #[must_use]
    pub const fn invalid_temperature(value: f64) -> Self {
        Self::InvalidTemperature { value }
    }

    /// Creates an invalid slope error.
    #[must_use]
    pub const fn invalid_slope(value: f64) -> Self {
        Self::InvalidSlope { value }
    }

    /// Creates an invalid azimuth rotation error.
    #[must_use]
    pub const fn invalid_azimuth_rotation(value: f64) -> Self {
        Self::InvalidAzimuthRotation { value }
    }

    /// Creates an invalid refraction constant error.
    #[must_use]
    pub const fn invalid_atmos_refract(value: f64) -> Self {
        Self::InvalidAtmosRefract { value }
    }

    /// Creates an invalid UT1-UTC correction error.
    #[must_use]
    pub const fn invalid_delta_ut1(value: f64) -> Self {
        Self::InvalidDeltaUt1 { value }
    }

    /// Numeric status code of the failing input.
    ///
    /// Success is status 0 and is represented by `Ok`, so this is never 0.
    ///
    /// # Example
    /// ```
    /// # use nrel_spa::Error;
    /// assert_eq!(Error::invalid_year(7000).status_code(), 1);
    /// assert_eq!(Error::invalid_delta_ut1(1.5).status_code(), 17);
    /// ```
    #[must_use]
    pub const fn status_code(&self) -> u8 {
        match self {
            Self::InvalidYear { .. } => 1,
            Self::InvalidMonth { .. } => 2,
            Self::InvalidDay { .. } => 3,
            Self::InvalidHour { .. } => 4,
            Self::InvalidMinute { .. } => 5,
            Self::InvalidSecond { .. } => 6,
            Self::InvalidDeltaT { .. } => 7,
            Self::InvalidTimezone { .. } => 8,
            Self::InvalidLongitude { .. } => 9,
            Self::InvalidLatitude { .. } => 10,
            Self::InvalidElevation { .. } => 11,
            Self::InvalidPressure { .. } => 12,
            Self::InvalidTemperature { .. } => 13,
            Self::InvalidSlope { .. } => 14,
            Self::InvalidAzimuthRotation { .. } => 15,
            Self::InvalidAtmosRefract { .. } => 16,
            Self::InvalidDeltaUt1 { .. } => 17,
        }
    }
}

/// Validates the calendar date and time of day.
///
/// Hour 24 is accepted only as `24:00:00`, which means midnight of the next day.
///
/// # Errors
/// Returns the error for the first out-of-range field, in the order year,
/// month, day, hour, minute, second.
pub fn check_calendar(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    second: f64,
) -> Result<()> {
    check_date(year, month, day)?;
    check_time_of_day(hour, minute, second)?;
    check_end_of_day(hour, minute, second)
}

pub(crate) fn check_date(year: i32, month: u32, day: u32) -> Result<()> {
    if !(-2000..=6000).contains(&year) {
        return Err(Error::invalid_year(year));
    }
    if !(1..=12).contains(&month) {
        return Err(Error::invalid_month(month));
    }
    if !(1..=31).contains(&day) {
        return Err(Error::invalid_day(day));
    }
    Ok(())
}

pub(crate) fn check_time_of_day(hour: u32, minute: u32, second: f64) -> Result<()> {
    if hour > 24 {
        return Err(Error::invalid_hour(hour));
    }
    if minute > 59 {
        return Err(Error::invalid_minute(minute));
    }
    if !(0.0..60.0).contains(&second) {
        return Err(Error::invalid_second(second));
    }
    Ok(())
}

pub(crate) fn check_end_of_day(hour: u32, minute: u32, second: f64) -> Result<()> {
    if hour == 24 && minute > 0 {
        return Err(Error::invalid_minute(minute));
    }
    if hour == 24 && second > 0.0 {
        return Err(Error::invalid_second(second));
    }
    Ok(())
}

/// Validates pressure is within 0 to 5000 hPa.
///
/// # Errors
/// Returns `InvalidPressure` for out-of-range or non-finite values.
pub fn check_pressure(pressure: f64) -> Result<()> {
    if !(0.0..=5000.0).contains(&pressure) {
        return Err(Error::invalid_pressure(pressure));
    }
    Ok(())
}

/// Validates temperature is above -273 °C and at most 6000 °C.
///
/// # Errors
/// Returns `InvalidTemperature` for out-of-range or non-finite values.
pub fn check_temperature(temperature: f64) -> Result<()> {
    if !(temperature > -273.0 && temperature <= 6000.0) {
        return Err(Error::invalid_temperature(temperature));
    }
    Ok(())
}

/// Validates the UT1-UTC correction lies strictly between -1 and 1 seconds.
///
/// # Errors
/// Returns `InvalidDeltaUt1` for out-of-range or non-finite values.
pub fn check_delta_ut1(delta_ut1: f64) -> Result<()> {
    if !(delta_ut1 > -1.0 && delta_ut1 < 1.0) {
        return Err(Error::invalid_delta_ut1(delta_ut1));
    }
    Ok(())
}

/// Validates |ΔT| is at most 8000 seconds.
///
/// # Errors
/// Returns `InvalidDeltaT` for out-of-range or non-finite values.
pub fn check_delta_t(delta_t: f64) -> Result<()> {
    if !(-8000.0..=8000.0).contains(&delta_t) {
        return Err(Error::invalid_delta_t(delta_t));
    }
    Ok(())
}

/// Validates |timezone| is at most 18 hours.
///
/// # Errors
/// Returns `InvalidTimezone` for out-of-range or non-finite values.
pub fn check_timezone(timezone: f64) -> Result<()> {
    if !(-18.0..=18.0).contains(&timezone) {
        return Err(Error::invalid_timezone(timezone));
    }
    Ok(())
}

/// Validates longitude is within the valid range (-180 to +180 degrees).
///
/// # Errors
/// Returns `InvalidLongitude` if longitude is outside -180 to +180 degrees.
pub fn check_longitude(longitude: f64) -> Result<()> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(Error::invalid_longitude(longitude));
    }
    Ok(())
}

/// Validates latitude is within the valid range (-90 to +90 degrees).
///
/// # Errors
/// Returns `InvalidLatitude` if latitude is outside -90 to +90 degrees.
pub fn check_latitude(latitude: f64) -> Result<()> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(Error::invalid_latitude(latitude));
    }
    Ok(())
}

/// Validates longitude then latitude.
///
/// # Errors
/// Returns `InvalidLongitude` or `InvalidLatitude` for out-of-range coordinates.
pub fn check_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    check_longitude(longitude)?;
    check_latitude(latitude)?;
    Ok(())
}

/// Validates |atmos_refract| is at most 5 degrees.
///
/// # Errors
/// Returns `InvalidAtmosRefract` for out-of-range or non-finite values.
pub fn check_atmos_refract(atmos_refract: f64) -> Result<()> {
    if !(-5.0..=5.0).contains(&atmos_refract) {
        return Err(Error::invalid_atmos_refract(atmos_refract));
    }
    Ok(())
}

/// Validates elevation is at least -6,500,000 meters.
///
/// # Errors
/// Returns `InvalidElevation` for values below the limit or NaN.
pub fn check_elevation(elevation: f64) -> Result<()> {
    if elevation.is_nan() || elevation < -6_500_000.0 {
        return Err(Error::invalid_elevation(elevation));
    }
    Ok(())
}

/// Validates slope and azimuth rotation of the receiving surface.
///
/// # Errors
/// Returns `InvalidSlope` or `InvalidAzimuthRotation` when either exceeds ±360 degrees.
pub fn check_surface(slope: f64, azm_rotation: f64) -> Result<()> {
    if !(-360.0..=360.0).contains(&slope) {
        return Err(Error::invalid_slope(slope));
    }
    if !(-360.0..=360.0).contains(&azm_rotation) {
        return Err(Error::invalid_azimuth_rotation(azm_rotation));
    }
    Ok(())
}
