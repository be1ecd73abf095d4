//! Cross-platform bridge to the device's native location services
//!
//! This crate exposes the platform's cached location, authorization state and
//! service availability through a small, synchronous API. Android uses JNI
//! against the framework classes directly, while iOS and macOS use objc2 for
//! direct CoreLocation bindings. Every other target compiles a fallback that
//! reports nothing available.
//!
//! The bridge is intentionally stateless: each call reflects whatever the
//! platform currently holds, and nothing is cached or smoothed on this side.
//! Failures are values, not errors: a missing fix is `None`, an unresolved
//! prompt is [`AuthorizationStatus::NotDetermined`].
//!
//! ## Features
//!
//! - `location-coarse`: request coarse location permission (default)
//! - `location-fine`: request fine/precise location permission
//! - `background-location`: request background location access
//! - `serialize`: serde derives on the data types
//! - `mock`: a scripted platform backend for host-side test suites
//!
//! ## Usage
//!
//! ```rust,no_run
//! use geoloc::last_known_location;
//!
//! if let Some(sample) = last_known_location() {
//!     println!("Location: {}, {}", sample.latitude, sample.longitude);
//! }
//! ```

mod error;
mod status;
mod sys;

pub use error::{Error, Result};
pub use status::AuthorizationStatus;

#[cfg(feature = "mock")]
pub use sys::mock;

/// A geographic coordinate pair, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

/// Get the most recent location the platform has cached.
///
/// Returns `Some` only when the platform holds a complete fix; `None` covers
/// "authorization not granted", "services disabled system-wide" and "no fix
/// ever acquired" uniformly. This never starts an acquisition cycle and never
/// blocks waiting for a fresh fix.
///
/// ## Platform behavior
///
/// - **Android**: `LocationManager.getLastKnownLocation()` via JNI, probing
///   the gps provider and then the fused provider
/// - **iOS/macOS**: `CLLocationManager.location` via objc2, main thread only
/// - **Other platforms**: always `None`
pub fn last_known_location() -> Option<Coordinates> {
    sys::last_known().map(|(latitude, longitude)| Coordinates {
        latitude,
        longitude,
    })
}

/// Ask the platform to present its location permission prompt.
///
/// Fire-and-forget: the call returns before the user decides, and the
/// platform ignores it entirely once the grant is already determined. There
/// is no callback channel; poll [`authorization_status`] to observe the
/// outcome after the prompt is dismissed.
///
/// ## Platform behavior
///
/// - **Android**: `Activity.requestPermissions()` via JNI, with the
///   permission set selected by the crate features
/// - **iOS/macOS**: `CLLocationManager.requestWhenInUseAuthorization()`
///   (or `requestAlwaysAuthorization()` with `background-location`)
/// - **Other platforms**: logged no-op
pub fn request_authorization() {
    sys::request_authorization()
}

/// Read the platform's current authorization grant for this app.
///
/// Never blocks on user interaction; while a prompt is unresolved this keeps
/// reporting [`AuthorizationStatus::NotDetermined`].
pub fn authorization_status() -> AuthorizationStatus {
    sys::authorization_status()
}

/// Whether location services are enabled system-wide.
///
/// Orthogonal to the per-app grant: services can be off while the app is
/// authorized, and vice versa.
pub fn location_services_enabled() -> bool {
    sys::services_enabled()
}
