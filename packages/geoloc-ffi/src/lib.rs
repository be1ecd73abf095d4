//! C-compatible entry points for the geoloc bridge
//!
//! This crate is the literal ABI surface a host runtime links against: four
//! argument-less functions, no versioning field, no error channel. Each call
//! is a single atomic request/response against the platform's location
//! stack, delegating to the safe [`geoloc`] API.
//!
//! ## Ownership
//!
//! `ios_geoloc_last_known` either returns `NULL` (the absence sentinel: no
//! grant, services disabled, or no fix) or a freshly `malloc`'d buffer of
//! two doubles `[latitude, longitude]`. A non-null buffer belongs solely to
//! the caller, who must release it exactly once with `free()`; this library
//! keeps no reference and never reuses an allocation. `NULL` must not be
//! released.
//!
//! ## Status codes
//!
//! `ios_geoloc_authorization_status` returns a code in `0..=4` in the fixed
//! order of [`geoloc::AuthorizationStatus`]; hosts hard-code that mapping,
//! so it never changes.

use std::mem;
use std::os::raw::c_int;
use std::ptr;

/// Get the most recent cached location as a malloc'd `[lat, lon]` pair.
///
/// Returns `NULL` when no sample is available; the caller releases a
/// non-null result with `free()`. Never returns a partial payload: a failed
/// allocation also yields `NULL`.
#[no_mangle]
pub extern "C" fn ios_geoloc_last_known() -> *mut f64 {
    let Some(sample) = geoloc::last_known_location() else {
        return ptr::null_mut();
    };

    unsafe {
        let buffer = libc::malloc(2 * mem::size_of::<f64>()).cast::<f64>();
        if buffer.is_null() {
            return ptr::null_mut();
        }
        buffer.write(sample.latitude);
        buffer.add(1).write(sample.longitude);
        buffer
    }
}

/// Schedule the platform's permission prompt.
///
/// Fire-and-forget: returns before the prompt resolves. Observe the outcome
/// by polling `ios_geoloc_authorization_status`.
#[no_mangle]
pub extern "C" fn ios_geoloc_request_authorization() {
    geoloc::request_authorization();
}

/// Whether location services are enabled system-wide: 1 enabled, 0 disabled.
#[no_mangle]
pub extern "C" fn ios_geoloc_services_enabled() -> c_int {
    geoloc::location_services_enabled() as c_int
}

/// The current authorization grant as a code in `0..=4`.
#[no_mangle]
pub extern "C" fn ios_geoloc_authorization_status() -> c_int {
    geoloc::authorization_status().as_code() as c_int
}
