//! Drives the exported C surface against the scripted platform backend.

use geoloc::mock::{self, MockPlatform};
use geoloc::AuthorizationStatus;
use geoloc_ffi::{
    ios_geoloc_authorization_status, ios_geoloc_last_known, ios_geoloc_request_authorization,
    ios_geoloc_services_enabled,
};

const SF: (f64, f64) = (37.7749, -122.4194);

/// Read the pair out of a caller-owned buffer and release it.
unsafe fn read_and_free(buffer: *mut f64) -> (f64, f64) {
    let pair = (*buffer, *buffer.add(1));
    libc::free(buffer.cast());
    pair
}

#[test]
fn undetermined_grant_yields_the_absence_sentinel() {
    let _mock = mock::install(MockPlatform {
        services_enabled: true,
        status: AuthorizationStatus::NotDetermined,
        fix: Some(SF),
        ..Default::default()
    });

    assert!(ios_geoloc_last_known().is_null());
    assert_eq!(ios_geoloc_authorization_status(), 0);
    assert_eq!(ios_geoloc_services_enabled(), 1);
}

#[test]
fn cached_fix_crosses_the_boundary_exactly() {
    let _mock = mock::install(MockPlatform {
        services_enabled: true,
        status: AuthorizationStatus::AuthorizedWhenInUse,
        fix: Some(SF),
        ..Default::default()
    });

    let buffer = ios_geoloc_last_known();
    assert!(!buffer.is_null());
    assert_eq!(unsafe { read_and_free(buffer) }, SF);
    assert_eq!(ios_geoloc_authorization_status(), 4);
}

#[test]
fn disabled_services_mask_a_full_grant() {
    let _mock = mock::install(MockPlatform {
        services_enabled: false,
        status: AuthorizationStatus::AuthorizedAlways,
        fix: Some(SF),
        ..Default::default()
    });

    assert_eq!(ios_geoloc_services_enabled(), 0);
    assert!(ios_geoloc_last_known().is_null());
}

#[test]
fn each_call_allocates_a_fresh_buffer() {
    let _mock = mock::install(MockPlatform {
        services_enabled: true,
        status: AuthorizationStatus::AuthorizedAlways,
        fix: Some(SF),
        ..Default::default()
    });

    let first = ios_geoloc_last_known();
    let second = ios_geoloc_last_known();
    assert!(!first.is_null());
    assert!(!second.is_null());
    // Both buffers are live at once, so they cannot alias.
    assert_ne!(first, second);

    assert_eq!(unsafe { read_and_free(first) }, SF);
    assert_eq!(unsafe { read_and_free(second) }, SF);
}

#[test]
fn status_codes_stay_in_the_contract_range() {
    for status in [
        AuthorizationStatus::NotDetermined,
        AuthorizationStatus::Restricted,
        AuthorizationStatus::Denied,
        AuthorizationStatus::AuthorizedAlways,
        AuthorizationStatus::AuthorizedWhenInUse,
    ] {
        let _mock = mock::install(MockPlatform {
            services_enabled: true,
            status,
            ..Default::default()
        });

        let code = ios_geoloc_authorization_status();
        assert!((0..=4).contains(&code));
        assert_eq!(AuthorizationStatus::from_code(code), Some(status));
    }
}

#[test]
fn request_then_poll_observes_the_grant() {
    let _mock = mock::install(MockPlatform {
        services_enabled: true,
        status: AuthorizationStatus::NotDetermined,
        fix: Some(SF),
        decision: Some(AuthorizationStatus::AuthorizedWhenInUse),
        ..Default::default()
    });

    // The sample stays hidden until the prompt resolves.
    assert!(ios_geoloc_last_known().is_null());
    assert_eq!(ios_geoloc_authorization_status(), 0);

    ios_geoloc_request_authorization();

    assert_eq!(ios_geoloc_authorization_status(), 4);
    let buffer = ios_geoloc_last_known();
    assert!(!buffer.is_null());
    assert_eq!(unsafe { read_and_free(buffer) }, SF);
}
