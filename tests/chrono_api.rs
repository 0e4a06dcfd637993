//! `DateTime` conversions in and out of the numeric API.
#![cfg(feature = "chrono")]

use chrono::{DateTime, FixedOffset, NaiveTime, TimeZone, Utc};
use nrel_spa::{radiation, spa, time::JulianDate, ObservationRequest, OutputSelector};

fn golden() -> DateTime<FixedOffset> {
    "2003-10-17T12:30:30-07:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap()
}

#[test]
fn test_julian_date_from_datetime() {
    let jd = JulianDate::from_datetime(&golden(), 0.8, 67.0).unwrap();
    assert!((jd.julian_date() - 2_452_930.312_856_481).abs() < 1e-8);
    assert_eq!(jd.delta_t(), 67.0);

    let utc = Utc.with_ymd_and_hms(2003, 10, 17, 19, 30, 30).unwrap();
    let jd_utc = JulianDate::from_datetime(&utc, 0.8, 67.0).unwrap();
    assert_eq!(jd.julian_date(), jd_utc.julian_date());
}

#[test]
fn test_julian_date_from_datetime_rejects_bad_offsets() {
    let dt = golden();
    assert!(JulianDate::from_datetime(&dt, 1.5, 67.0).is_err());
    assert!(JulianDate::from_datetime(&dt, 0.0, 9000.0).is_err());

    let far_future = Utc.with_ymd_and_hms(6001, 1, 1, 0, 0, 0).unwrap();
    assert!(JulianDate::from_datetime(&far_future, 0.0, 0.0).is_err());
}

#[test]
fn test_request_from_datetime_matches_manual_request() {
    let from_chrono = ObservationRequest::from_datetime(&golden());
    let manual = ObservationRequest::default()
        .with_date(2003, 10, 17)
        .with_time(12, 30, 30.0)
        .with_timezone(-7.0);
    assert_eq!(from_chrono, manual);
}

#[test]
fn test_fractional_seconds_and_half_hour_offsets() {
    let dt = "2024-09-22T17:30:15.250+05:30"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let request = ObservationRequest::from_datetime(&dt);

    assert_eq!(request.timezone, 5.5);
    assert!((request.second - 15.25).abs() < 1e-9);
}

#[test]
fn test_event_times_as_naive_time() {
    let request = ObservationRequest::from_datetime(&golden())
        .with_delta_ut1(0.8)
        .with_delta_t(67.0)
        .with_location(39.742476, -105.1786)
        .with_elevation(1830.14)
        .with_atmosphere(820.0, 11.0)
        .with_output(OutputSelector::ZenithAzimuthRiseSet);
    let output = spa::calculate(&request).unwrap();
    let times = output.sun_times().unwrap();

    assert_eq!(
        times.sunrise_time(),
        NaiveTime::from_hms_milli_opt(6, 12, 43, 440)
    );
    assert_eq!(
        times.transit_time(),
        NaiveTime::from_hms_milli_opt(11, 46, 4, 962)
    );
    assert_eq!(
        times.sunset_time(),
        NaiveTime::from_hms_milli_opt(17, 20, 19, 199)
    );
}

#[test]
fn test_polar_night_has_no_event_times() {
    let dt = "2023-12-21T12:00:00+02:00"
        .parse::<DateTime<FixedOffset>>()
        .unwrap();
    let request = ObservationRequest::from_datetime(&dt)
        .with_delta_t(69.0)
        .with_location(69.65, 18.95)
        .with_output(OutputSelector::All);
    let output = spa::calculate(&request).unwrap();
    let times = output.sun_times().unwrap();

    assert!(!times.has_events());
    assert_eq!(times.sunrise_time(), None);
    assert_eq!(times.transit_time(), None);
    assert_eq!(times.sunset_time(), None);
    assert!(output.elevation() < 0.0);
    assert_eq!(radiation::direct_radiation_at(&dt, output.elevation()), 0.0);
}
