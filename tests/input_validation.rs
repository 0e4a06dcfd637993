//! Request validation through the public entry points.

use nrel_spa::{spa, Error, ObservationRequest, OutputSelector};

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

fn status_of(request: &ObservationRequest) -> u8 {
    spa::calculate(request).map_or_else(|e| e.status_code(), |_| 0)
}

#[test]
fn test_reference_request_is_valid() {
    assert_eq!(status_of(&reference_request()), 0);
}

#[test]
fn test_status_code_per_field() {
    let base = reference_request();
    let cases = [
        (base.with_date(-2001, 10, 17), 1),
        (base.with_date(2003, 13, 17), 2),
        (base.with_date(2003, 10, 32), 3),
        (base.with_time(25, 0, 0.0), 4),
        (base.with_time(12, 60, 0.0), 5),
        (base.with_time(12, 30, 60.0), 6),
        (base.with_delta_t(8001.0), 7),
        (base.with_timezone(-18.5), 8),
        (base.with_location(39.742476, 180.5), 9),
        (base.with_location(90.5, -105.1786), 10),
        (base.with_elevation(-6_500_001.0), 11),
        (base.with_atmosphere(5001.0, 11.0), 12),
        (base.with_atmosphere(820.0, -273.0), 13),
        (base.with_surface(361.0, -10.0), 14),
        (base.with_surface(30.0, -361.0), 15),
        (base.with_atmos_refract(5.5), 16),
        (base.with_delta_ut1(1.0), 17),
    ];

    for (request, expected) in cases {
        assert_eq!(status_of(&request), expected, "{request:?}");
    }
}

#[test]
fn test_first_failure_wins() {
    let base = reference_request();

    assert_eq!(
        spa::calculate(&base.with_date(7000, 13, 1)),
        Err(Error::invalid_year(7000))
    );
    // pressure and temperature are checked before ΔUT1, ΔT and location
    assert_eq!(
        status_of(&base.with_atmosphere(-1.0, 11.0).with_delta_ut1(2.0)),
        12
    );
    assert_eq!(
        status_of(&base.with_delta_ut1(2.0).with_delta_t(9000.0)),
        17
    );
    assert_eq!(
        status_of(&base.with_location(100.0, 200.0)),
        9
    );
    assert_eq!(
        status_of(&base.with_atmos_refract(10.0).with_elevation(-7e6)),
        16
    );
}

#[test]
fn test_end_of_day() {
    let base = reference_request();

    assert_eq!(status_of(&base.with_time(24, 0, 0.0)), 0);
    assert_eq!(status_of(&base.with_time(24, 1, 0.0)), 5);
    assert_eq!(status_of(&base.with_time(24, 0, 0.5)), 6);
    // the hour 24 rule runs after ΔUT1
    assert_eq!(
        status_of(&base.with_time(24, 1, 0.0).with_delta_ut1(5.0)),
        17
    );
}

#[test]
fn test_surface_checked_only_for_incidence() {
    let bad_surface = reference_request().with_surface(400.0, 400.0);

    assert_eq!(status_of(&bad_surface), 14);
    assert_eq!(
        status_of(&bad_surface.with_output(OutputSelector::ZenithAzimuthIncidence)),
        14
    );
    assert_eq!(
        status_of(&bad_surface.with_output(OutputSelector::ZenithAzimuth)),
        0
    );
    assert_eq!(
        status_of(&bad_surface.with_output(OutputSelector::ZenithAzimuthRiseSet)),
        0
    );
}

#[test]
fn test_non_finite_inputs_rejected() {
    let base = reference_request();

    assert_eq!(status_of(&base.with_time(12, 30, f64::NAN)), 6);
    assert_eq!(status_of(&base.with_delta_t(f64::NAN)), 7);
    assert_eq!(status_of(&base.with_timezone(f64::INFINITY)), 8);
    assert_eq!(status_of(&base.with_location(f64::NAN, 0.0)), 10);
    assert_eq!(status_of(&base.with_elevation(f64::NAN)), 11);
    assert_eq!(status_of(&base.with_atmosphere(f64::NAN, 11.0)), 12);
}

#[test]
fn test_boundaries_accepted() {
    let base = reference_request();

    assert_eq!(status_of(&base.with_date(-2000, 1, 1)), 0);
    assert_eq!(status_of(&base.with_date(6000, 12, 31)), 0);
    assert_eq!(status_of(&base.with_location(90.0, 180.0)), 0);
    assert_eq!(status_of(&base.with_location(-90.0, -180.0)), 0);
    assert_eq!(status_of(&base.with_timezone(18.0)), 0);
    assert_eq!(status_of(&base.with_delta_t(-8000.0)), 0);
    assert_eq!(status_of(&base.with_atmosphere(0.0, 6000.0)), 0);
    assert_eq!(status_of(&base.with_atmosphere(5000.0, -272.9)), 0);
    assert_eq!(status_of(&base.with_surface(360.0, -360.0)), 0);
}
