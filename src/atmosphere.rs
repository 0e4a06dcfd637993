//! Standard atmosphere estimates of pressure and temperature from site elevation.
//!
//! Useful when only the observer's elevation is known: the results feed
//! [`ObservationRequest::pressure`] and [`ObservationRequest::temperature`]
//! directly. The barometric formula used here holds in the troposphere, up to
//! about 11,000 m.
//!
//! ```
//! use nrel_spa::{atmosphere, ObservationRequest};
//!
//! let elevation = 1830.14;
//! let request = ObservationRequest::default()
//!     .with_elevation(elevation)
//!     .with_atmosphere(
//!         atmosphere::pressure_at_elevation(elevation),
//!         atmosphere::temperature_at_elevation(elevation),
//!     );
//! assert!((request.pressure - 811.86).abs() < 0.01);
//! ```
//!
//! [`ObservationRequest::pressure`]: crate::ObservationRequest::pressure
//! [`ObservationRequest::temperature`]: crate::ObservationRequest::temperature

#![allow(clippy::unreadable_literal)]

use crate::math::powf;
use log::debug;

/// Sea-level standard pressure in hPa.
pub const STANDARD_PRESSURE: f64 = 1013.25;

/// Sea-level standard temperature in kelvin.
pub const STANDARD_TEMPERATURE: f64 = 288.15;

/// Temperature change with height in K/m.
pub const TEMPERATURE_LAPSE_RATE: f64 = -0.0065;

/// Universal gas constant in J/(mol·K).
pub const GAS_CONSTANT: f64 = 8.31432;

/// Standard gravitational acceleration in m/s².
pub const GRAVITY: f64 = 9.80665;

/// Molar mass of dry air in kg/mol.
pub const AIR_MOLAR_MASS: f64 = 0.0289644;

/// Upper edge of the troposphere in meters.
pub const TROPOPAUSE_ELEVATION: f64 = 11_000.0;

const ZERO_CELSIUS: f64 = 273.15;

/// Pressure in hPa at `elevation` meters above sea level.
///
/// Elevations below sea level extrapolate the same formula.
///
/// # Example
/// ```
/// # use nrel_spa::atmosphere::pressure_at_elevation;
/// assert_eq!(pressure_at_elevation(0.0), 1013.25);
/// assert!((pressure_at_elevation(1000.0) - 898.746).abs() < 1e-3);
/// ```
#[must_use]
pub fn pressure_at_elevation(elevation: f64) -> f64 {
    if elevation > TROPOPAUSE_ELEVATION {
        debug!("barometric formula used above the troposphere at {elevation} m");
    }
    let exponent = (GRAVITY * AIR_MOLAR_MASS) / (GAS_CONSTANT * TEMPERATURE_LAPSE_RATE);
    STANDARD_PRESSURE
        * powf(
            STANDARD_TEMPERATURE / (STANDARD_TEMPERATURE + TEMPERATURE_LAPSE_RATE * elevation),
            exponent,
        )
}

/// Temperature in °C at `elevation` meters above sea level.
///
/// Sea level is 15 °C, dropping 6.5 °C per kilometer.
#[must_use]
pub fn temperature_at_elevation(elevation: f64) -> f64 {
    kelvin_at_elevation(elevation) - ZERO_CELSIUS
}

/// Temperature in kelvin at `elevation` meters above sea level.
#[must_use]
pub fn kelvin_at_elevation(elevation: f64) -> f64 {
    STANDARD_TEMPERATURE + TEMPERATURE_LAPSE_RATE * elevation
}
