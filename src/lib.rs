//! # NREL Solar Position Algorithm
//!
//! Topocentric sun position, surface incidence angle, equation of time and
//! sunrise/transit/sunset times after Reda & Andreas (NREL, 2003).

#![cfg_attr(not(feature = "std"), no_std)]
//!
//! The algorithm is valid for years -2000 to 6000 with an uncertainty of
//! ±0.0003° in zenith and azimuth. A single call turns an
//! [`ObservationRequest`] into a [`SpaOutput`]:
//!
//! 1. calendar date and time to Julian day and its ephemeris time scales
//! 2. heliocentric position of the Earth from the VSOP87 periodic terms
//! 3. nutation, aberration and sidereal time to geocentric right ascension and declination
//! 4. parallax and refraction for the observer to topocentric zenith and azimuth
//! 5. optionally the incidence angle on a tilted surface
//! 6. optionally the equation of time and the sun's rise, transit and set for the day
//!
//! Every input is range checked before anything is computed. The first invalid
//! field is reported as an [`Error`], whose [`Error::status_code`] matches the
//! numeric codes of the NREL reference implementation.
//!
//! ## Feature Flags
//!
//! - `std` (default): native float math
//! - `chrono` (default): `DateTime<Tz>` conversions for requests and event times
//! - `libm`: pure Rust math for `no_std` environments
//! - `serde`: `Serialize`/`Deserialize` for request and result types
//!
//! ```toml
//! # no_std, numeric API only
//! nrel-spa = { version = "0.1", default-features = false, features = ["libm"] }
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use nrel_spa::{spa, ObservationRequest, OutputSelector};
//!
//! let request = ObservationRequest::default()
//!     .with_date(2003, 10, 17)
//!     .with_time(12, 30, 30.0)
//!     .with_timezone(-7.0)
//!     .with_delta_ut1(0.8)
//!     .with_delta_t(67.0)
//!     .with_location(39.742476, -105.1786)
//!     .with_elevation(1830.14)
//!     .with_atmosphere(820.0, 11.0)
//!     .with_surface(30.0, -10.0)
//!     .with_output(OutputSelector::All);
//!
//! let output = spa::calculate(&request).unwrap();
//! println!("Zenith: {:.6}°", output.zenith());
//! println!("Azimuth: {:.6}°", output.azimuth());
//!
//! let times = output.sun_times().unwrap();
//! println!("Sunrise: {:.6} h, sunset: {:.6} h", times.sunrise(), times.sunset());
//! ```
//!
//! ### With chrono
//! ```rust
//! # #[cfg(feature = "chrono")] {
//! use chrono::{DateTime, FixedOffset};
//! use nrel_spa::{spa, ObservationRequest, OutputSelector};
//!
//! let datetime = "2026-06-21T12:00:00+02:00".parse::<DateTime<FixedOffset>>().unwrap();
//! let request = ObservationRequest::from_datetime(&datetime)
//!     .with_delta_t(69.0)
//!     .with_location(48.21, 16.37)
//!     .with_elevation(190.0)
//!     .with_output(OutputSelector::ZenithAzimuthRiseSet);
//!
//! let output = spa::calculate(&request).unwrap();
//! if let Some(sunrise) = output.sun_times().and_then(|t| t.sunrise_time()) {
//!     println!("Sunrise: {sunrise}");
//! }
//! # }
//! ```
//!
//! ## Coordinate System
//!
//! - **Azimuth**: 0° = North, measured clockwise (0° to 360°)
//! - **Astronomers' azimuth**: 0° = South, measured westward
//! - **Zenith angle**: 0° = directly overhead, 90° = horizon
//! - **Event times**: fractional local hours; [`SunTimes::NO_EVENT`] when the sun never crosses the horizon

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery, clippy::cargo, clippy::all)]
#![allow(
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cargo_common_metadata,
    clippy::multiple_crate_versions, // Acceptable for dev-dependencies
    clippy::float_cmp, // Exact comparisons of sentinels and constants
)]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("either the `std` or the `libm` feature must be enabled");

// Public API exports
pub use crate::error::{Error, Result};
pub use crate::spa::{calculate, calculate_with_diagnostics, Diagnostics, GeocentricSun};
pub use crate::types::{ObservationRequest, OutputSelector, SpaOutput, SunTimes};

// Algorithm modules
pub mod atmosphere;
pub mod radiation;
pub mod spa;

// Core modules
pub mod error;
pub mod types;

// Public modules
pub mod math;
pub mod time;
