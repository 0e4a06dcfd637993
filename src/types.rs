//! Request and result types for solar position calculations.

use crate::error::{
    check_atmos_refract, check_coordinates, check_date, check_delta_t, check_delta_ut1,
    check_elevation, check_end_of_day, check_pressure, check_surface, check_temperature,
    check_time_of_day, check_timezone,
};
#[cfg(feature = "chrono")]
use crate::math::floor;
use crate::time::JulianDate;
use crate::Result;
#[cfg(feature = "chrono")]
use chrono::{Datelike, NaiveTime, Offset, TimeZone, Timelike};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Selects which outputs a calculation produces.
///
/// Zenith and azimuth are always computed. Inputs that only feed an output
/// that was not requested are not validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputSelector {
    /// Zenith and azimuth only.
    #[default]
    ZenithAzimuth,
    /// Zenith, azimuth and surface incidence angle.
    ZenithAzimuthIncidence,
    /// Zenith, azimuth, equation of time and sunrise/transit/sunset.
    ZenithAzimuthRiseSet,
    /// Everything.
    All,
}

impl OutputSelector {
    /// Whether the surface incidence angle is produced.
    #[must_use]
    pub const fn includes_incidence(self) -> bool {
        matches!(self, Self::ZenithAzimuthIncidence | Self::All)
    }

    /// Whether the equation of time and sunrise/transit/sunset are produced.
    #[must_use]
    pub const fn includes_rise_set(self) -> bool {
        matches!(self, Self::ZenithAzimuthRiseSet | Self::All)
    }
}

/// Everything a single solar position calculation needs.
///
/// Fields are public; the `with_*` methods are shorthands for building a
/// request from [`ObservationRequest::default`].
///
/// # Example
/// ```
/// # use nrel_spa::{ObservationRequest, OutputSelector};
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
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ObservationRequest {
    /// Year, -2000 to 6000.
    pub year: i32,
    /// Month, 1 to 12.
    pub month: u32,
    /// Day of month, 1 to 31.
    pub day: u32,
    /// Local clock hour, 0 to 24 (24 only as 24:00:00).
    pub hour: u32,
    /// Minute, 0 to 59.
    pub minute: u32,
    /// Second including fraction, 0 to <60.
    pub second: f64,
    /// UT1 - UTC in seconds, strictly between -1 and 1.
    pub delta_ut1: f64,
    /// Local offset from UTC in hours, negative west of Greenwich.
    pub timezone: f64,
    /// TT - UT1 in seconds.
    pub delta_t: f64,
    /// Observer longitude in degrees, negative west of Greenwich.
    pub longitude: f64,
    /// Observer latitude in degrees, negative south of the equator.
    pub latitude: f64,
    /// Observer elevation in meters.
    pub elevation: f64,
    /// Annual average local pressure in hPa (millibars).
    pub pressure: f64,
    /// Annual average local temperature in °C.
    pub temperature: f64,
    /// Surface slope in degrees, measured from the horizontal plane.
    pub slope: f64,
    /// Surface azimuth rotation in degrees, measured from south toward west.
    pub azm_rotation: f64,
    /// Atmospheric refraction at sunrise and sunset in degrees.
    pub atmos_refract: f64,
    /// Which outputs to compute.
    pub output: OutputSelector,
}

impl Default for ObservationRequest {
    /// J2000.0 noon at 0°N 0°E, sea level, standard atmosphere, horizontal surface.
    fn default() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
            hour: 12,
            minute: 0,
            second: 0.0,
            delta_ut1: 0.0,
            timezone: 0.0,
            delta_t: 0.0,
            longitude: 0.0,
            latitude: 0.0,
            elevation: 0.0,
            pressure: 1013.25,
            temperature: 15.0,
            slope: 0.0,
            azm_rotation: 0.0,
            atmos_refract: 0.5667,
            output: OutputSelector::ZenithAzimuth,
        }
    }
}

impl ObservationRequest {
    /// Builds a request from the local calendar fields and UTC offset of a chrono `DateTime`.
    ///
    /// Offsets are taken as fixed hours, so the result matches what a caller
    /// would enter by hand for that local clock reading. All other fields keep
    /// their defaults.
    ///
    /// # Example
    /// ```
    /// # use nrel_spa::ObservationRequest;
    /// use chrono::{DateTime, FixedOffset};
    ///
    /// let dt = "2003-10-17T12:30:30-07:00".parse::<DateTime<FixedOffset>>().unwrap();
    /// let request = ObservationRequest::from_datetime(&dt);
    /// assert_eq!((request.hour, request.minute), (12, 30));
    /// assert_eq!(request.timezone, -7.0);
    /// ```
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn from_datetime<Tz: TimeZone>(datetime: &chrono::DateTime<Tz>) -> Self {
        let local = datetime.naive_local();
        let offset_seconds = datetime.offset().fix().local_minus_utc();

        Self {
            year: local.year(),
            month: local.month(),
            day: local.day(),
            hour: local.hour(),
            minute: local.minute(),
            second: f64::from(local.second()) + f64::from(local.nanosecond()) / 1e9,
            timezone: f64::from(offset_seconds) / 3600.0,
            ..Self::default()
        }
    }

    /// Sets the calendar date.
    #[must_use]
    pub const fn with_date(mut self, year: i32, month: u32, day: u32) -> Self {
        self.year = year;
        self.month = month;
        self.day = day;
        self
    }

    /// Sets the local clock time.
    #[must_use]
    pub const fn with_time(mut self, hour: u32, minute: u32, second: f64) -> Self {
        self.hour = hour;
        self.minute = minute;
        self.second = second;
        self
    }

    /// Sets the local offset from UTC in hours.
    #[must_use]
    pub const fn with_timezone(mut self, timezone: f64) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets UT1 - UTC in seconds.
    #[must_use]
    pub const fn with_delta_ut1(mut self, delta_ut1: f64) -> Self {
        self.delta_ut1 = delta_ut1;
        self
    }

    /// Sets TT - UT1 in seconds.
    #[must_use]
    pub const fn with_delta_t(mut self, delta_t: f64) -> Self {
        self.delta_t = delta_t;
        self
    }

    /// Sets observer latitude and longitude in degrees.
    #[must_use]
    pub const fn with_location(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    /// Sets observer elevation in meters.
    #[must_use]
    pub const fn with_elevation(mut self, elevation: f64) -> Self {
        self.elevation = elevation;
        self
    }

    /// Sets local pressure (hPa) and temperature (°C).
    #[must_use]
    pub const fn with_atmosphere(mut self, pressure: f64, temperature: f64) -> Self {
        self.pressure = pressure;
        self.temperature = temperature;
        self
    }

    /// Sets the refraction at sunrise and sunset in degrees.
    #[must_use]
    pub const fn with_atmos_refract(mut self, atmos_refract: f64) -> Self {
        self.atmos_refract = atmos_refract;
        self
    }

    /// Sets surface slope and azimuth rotation in degrees.
    #[must_use]
    pub const fn with_surface(mut self, slope: f64, azm_rotation: f64) -> Self {
        self.slope = slope;
        self.azm_rotation = azm_rotation;
        self
    }

    /// Selects the outputs to compute.
    #[must_use]
    pub const fn with_output(mut self, output: OutputSelector) -> Self {
        self.output = output;
        self
    }

    /// Checks every relevant field and reports the first one out of range.
    ///
    /// Fields are checked in a fixed order, so a request with several bad
    /// fields always reports the same one. Slope and azimuth rotation are
    /// only checked when the incidence angle is requested.
    ///
    /// # Errors
    /// Returns the [`Error`](crate::Error) variant of the first invalid field.
    ///
    /// # Example
    /// ```
    /// # use nrel_spa::{Error, ObservationRequest};
    /// let request = ObservationRequest::default().with_date(7000, 13, 1);
    /// assert_eq!(request.validate(), Err(Error::invalid_year(7000)));
    /// ```
    pub fn validate(&self) -> Result<()> {
        check_date(self.year, self.month, self.day)?;
        check_time_of_day(self.hour, self.minute, self.second)?;
        check_pressure(self.pressure)?;
        check_temperature(self.temperature)?;
        check_delta_ut1(self.delta_ut1)?;
        check_end_of_day(self.hour, self.minute, self.second)?;
        check_delta_t(self.delta_t)?;
        check_timezone(self.timezone)?;
        check_coordinates(self.latitude, self.longitude)?;
        check_atmos_refract(self.atmos_refract)?;
        check_elevation(self.elevation)?;

        if self.output.includes_incidence() {
            check_surface(self.slope, self.azm_rotation)?;
        }
        Ok(())
    }

    /// Julian date of the requested local instant.
    #[must_use]
    pub fn julian_date(&self) -> JulianDate {
        JulianDate::from_calendar(
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            self.delta_ut1,
            self.timezone,
            self.delta_t,
        )
    }
}

/// Sunrise, solar transit and sunset for the requested day.
///
/// Times are local clock hours in [0, 24) using the request's timezone.
/// When the sun does not cross the horizon that day every field holds
/// [`SunTimes::NO_EVENT`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SunTimes {
    sunrise: f64,
    transit: f64,
    sunset: f64,
    sunrise_hour_angle: f64,
    sunset_hour_angle: f64,
    transit_altitude: f64,
}

impl SunTimes {
    /// Value of every field on days without sunrise or sunset.
    pub const NO_EVENT: f64 = -99999.0;

    pub(crate) const fn new(
        sunrise: f64,
        transit: f64,
        sunset: f64,
        sunrise_hour_angle: f64,
        sunset_hour_angle: f64,
        transit_altitude: f64,
    ) -> Self {
        Self {
            sunrise,
            transit,
            sunset,
            sunrise_hour_angle,
            sunset_hour_angle,
            transit_altitude,
        }
    }

    pub(crate) const fn no_event() -> Self {
        Self::new(
            Self::NO_EVENT,
            Self::NO_EVENT,
            Self::NO_EVENT,
            Self::NO_EVENT,
            Self::NO_EVENT,
            Self::NO_EVENT,
        )
    }

    /// Local sunrise hour.
    #[must_use]
    pub const fn sunrise(&self) -> f64 {
        self.sunrise
    }

    /// Local solar transit hour.
    #[must_use]
    pub const fn transit(&self) -> f64 {
        self.transit
    }

    /// Local sunset hour.
    #[must_use]
    pub const fn sunset(&self) -> f64 {
        self.sunset
    }

    /// Topocentric local hour angle at sunrise in degrees.
    #[must_use]
    pub const fn sunrise_hour_angle(&self) -> f64 {
        self.sunrise_hour_angle
    }

    /// Topocentric local hour angle at sunset in degrees.
    #[must_use]
    pub const fn sunset_hour_angle(&self) -> f64 {
        self.sunset_hour_angle
    }

    /// Sun altitude at transit in degrees.
    #[must_use]
    pub const fn transit_altitude(&self) -> f64 {
        self.transit_altitude
    }

    /// Whether the sun rises and sets on this day.
    #[must_use]
    pub fn has_events(&self) -> bool {
        self.transit != Self::NO_EVENT
    }

    /// Sunrise as a local `NaiveTime`, `None` on polar days and nights.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunrise_time(&self) -> Option<NaiveTime> {
        hours_to_time(self.sunrise)
    }

    /// Transit as a local `NaiveTime`, `None` on polar days and nights.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn transit_time(&self) -> Option<NaiveTime> {
        hours_to_time(self.transit)
    }

    /// Sunset as a local `NaiveTime`, `None` on polar days and nights.
    #[cfg(feature = "chrono")]
    #[must_use]
    pub fn sunset_time(&self) -> Option<NaiveTime> {
        hours_to_time(self.sunset)
    }
}

#[cfg(feature = "chrono")]
#[allow(clippy::cast_sign_loss)]
fn hours_to_time(hours: f64) -> Option<NaiveTime> {
    if !(0.0..24.0).contains(&hours) {
        return None;
    }
    // rounded to whole milliseconds; 23:59:59.9996 becomes midnight
    let millis = floor(hours * 3_600_000.0 + 0.5) as u64 % 86_400_000;
    NaiveTime::from_num_seconds_from_midnight_opt(
        (millis / 1000) as u32,
        ((millis % 1000) * 1_000_000) as u32,
    )
}

/// Result of a solar position calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpaOutput {
    zenith: f64,
    azimuth: f64,
    azimuth_astro: f64,
    incidence: Option<f64>,
    eot: Option<f64>,
    sun_times: Option<SunTimes>,
}

impl SpaOutput {
    pub(crate) const fn new(zenith: f64, azimuth: f64, azimuth_astro: f64) -> Self {
        Self {
            zenith,
            azimuth,
            azimuth_astro,
            incidence: None,
            eot: None,
            sun_times: None,
        }
    }

    pub(crate) const fn with_incidence(mut self, incidence: f64) -> Self {
        self.incidence = Some(incidence);
        self
    }

    pub(crate) const fn with_rise_set(mut self, eot: f64, sun_times: SunTimes) -> Self {
        self.eot = Some(eot);
        self.sun_times = Some(sun_times);
        self
    }

    /// Topocentric zenith angle in degrees, refraction corrected.
    #[must_use]
    pub const fn zenith(&self) -> f64 {
        self.zenith
    }

    /// Topocentric elevation angle in degrees, 90 - zenith.
    #[must_use]
    pub fn elevation(&self) -> f64 {
        90.0 - self.zenith
    }

    /// Topocentric azimuth in degrees, eastward from north (navigators).
    #[must_use]
    pub const fn azimuth(&self) -> f64 {
        self.azimuth
    }

    /// Topocentric azimuth in degrees, westward from south (astronomers).
    #[must_use]
    pub const fn azimuth_astro(&self) -> f64 {
        self.azimuth_astro
    }

    /// Surface incidence angle in degrees, if requested.
    #[must_use]
    pub const fn incidence(&self) -> Option<f64> {
        self.incidence
    }

    /// Equation of time in minutes, if rise/set was requested.
    #[must_use]
    pub const fn eot(&self) -> Option<f64> {
        self.eot
    }

    /// Sunrise, transit and sunset, if requested.
    #[must_use]
    pub const fn sun_times(&self) -> Option<&SunTimes> {
        self.sun_times.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn reference_request() -> ObservationRequest {
        ObservationRequest::default()
            .with_date(2003, 10, 17)
            .with_time(12, 30, 30.0)
            .with_timezone(-7.0)
            .with_delta_ut1(0.8)
            .with_delta_t(67.0)
            .with_location(39.742476, -105.1786)
            .with_elevation(1830.14)
            .with_atmosphere(820.0, 11.0)
            .with_surface(30.0, -10.0)
            .with_output(OutputSelector::All)
    }

    #[test]
    fn test_default_request() {
        let request = ObservationRequest::default();
        assert_eq!((request.year, request.month, request.day), (2000, 1, 1));
        assert_eq!(request.hour, 12);
        assert_eq!(request.pressure, 1013.25);
        assert_eq!(request.temperature, 15.0);
        assert_eq!(request.atmos_refract, 0.5667);
        assert_eq!(request.output, OutputSelector::ZenithAzimuth);
        assert!(request.validate().is_ok());
        assert_eq!(request.julian_date().julian_date(), 2_451_545.0);
    }

    #[test]
    fn test_output_selector() {
        assert!(!OutputSelector::ZenithAzimuth.includes_incidence());
        assert!(!OutputSelector::ZenithAzimuth.includes_rise_set());
        assert!(OutputSelector::ZenithAzimuthIncidence.includes_incidence());
        assert!(!OutputSelector::ZenithAzimuthIncidence.includes_rise_set());
        assert!(!OutputSelector::ZenithAzimuthRiseSet.includes_incidence());
        assert!(OutputSelector::ZenithAzimuthRiseSet.includes_rise_set());
        assert!(OutputSelector::All.includes_incidence());
        assert!(OutputSelector::All.includes_rise_set());
    }

    #[test]
    fn test_validation_order() {
        let mut request = reference_request();
        assert!(request.validate().is_ok());

        // pressure is checked before the hour-24 rule
        request.hour = 24;
        request.minute = 5;
        request.pressure = 6000.0;
        assert_eq!(request.validate(), Err(Error::invalid_pressure(6000.0)));

        request.pressure = 820.0;
        assert_eq!(request.validate(), Err(Error::invalid_minute(5)));

        request.minute = 0;
        request.delta_ut1 = 1.0;
        assert_eq!(request.validate(), Err(Error::invalid_delta_ut1(1.0)));

        request.delta_ut1 = 0.0;
        request.latitude = 95.0;
        request.longitude = 190.0;
        assert_eq!(request.validate(), Err(Error::invalid_longitude(190.0)));
    }

    #[test]
    fn test_coordinates_match_check_coordinates() {
        for (latitude, longitude) in [(95.0, 0.0), (0.0, -181.0), (-91.0, 200.0), (90.0, 180.0)] {
            let request = reference_request().with_location(latitude, longitude);
            assert_eq!(
                request.validate(),
                check_coordinates(latitude, longitude),
                "({latitude}, {longitude})"
            );
        }
        assert_eq!(
            reference_request()
                .with_location(f64::NAN, 0.0)
                .validate()
                .map_err(|e| e.status_code()),
            Err(10)
        );
    }

    #[test]
    fn test_surface_only_checked_for_incidence() {
        let request = reference_request().with_surface(400.0, 0.0);
        assert_eq!(request.validate(), Err(Error::invalid_slope(400.0)));

        let request = request.with_output(OutputSelector::ZenithAzimuthRiseSet);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_nan_fails_validation() {
        let request = reference_request().with_atmosphere(f64::NAN, 11.0);
        assert_eq!(
            request.validate().map_err(|e| e.status_code()),
            Err(12)
        );

        let request = reference_request().with_elevation(f64::NAN);
        assert_eq!(
            request.validate().map_err(|e| e.status_code()),
            Err(11)
        );
    }

    #[test]
    fn test_sun_times_sentinel() {
        let times = SunTimes::no_event();
        assert!(!times.has_events());
        assert_eq!(times.sunrise(), SunTimes::NO_EVENT);
        assert_eq!(times.transit_altitude(), SunTimes::NO_EVENT);

        let times = SunTimes::new(6.25, 12.0, 18.5, -90.0, 90.0, 45.0);
        assert!(times.has_events());
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_sun_times_as_naive_time() {
        let times = SunTimes::new(6.212066609, 11.768045029, 17.338666514, -83.5, 83.5, 41.0);
        assert_eq!(
            times.sunrise_time(),
            NaiveTime::from_hms_milli_opt(6, 12, 43, 440)
        );
        assert_eq!(
            times.sunset_time(),
            NaiveTime::from_hms_milli_opt(17, 20, 19, 199)
        );

        assert_eq!(SunTimes::no_event().transit_time(), None);
    }

    #[test]
    #[cfg(feature = "chrono")]
    fn test_request_from_datetime() {
        use chrono::{FixedOffset, TimeZone};

        let tz = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        let dt = tz.with_ymd_and_hms(2024, 9, 22, 17, 30, 0).unwrap();
        let request = ObservationRequest::from_datetime(&dt);

        assert_eq!((request.year, request.month, request.day), (2024, 9, 22));
        assert_eq!((request.hour, request.minute), (17, 30));
        assert_eq!(request.second, 0.0);
        assert_eq!(request.timezone, 5.5);
    }

    #[test]
    fn test_output_accessors() {
        let output = SpaOutput::new(60.0, 180.0, 0.0);
        assert_eq!(output.elevation(), 30.0);
        assert_eq!(output.incidence(), None);
        assert!(output.sun_times().is_none());

        let output = output
            .with_incidence(12.5)
            .with_rise_set(3.5, SunTimes::no_event());
        assert_eq!(output.incidence(), Some(12.5));
        assert_eq!(output.eot(), Some(3.5));
        assert!(!output.sun_times().is_some_and(SunTimes::has_events));
    }
}
