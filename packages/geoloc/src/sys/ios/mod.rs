//! iOS/macOS backend over CoreLocation via objc2

use std::cell::UnsafeCell;

use objc2::rc::Retained;
use objc2::MainThreadMarker;
use objc2_core_location::{CLAuthorizationStatus, CLLocation, CLLocationManager};

use crate::AuthorizationStatus;

/// A cell that stores values only accessible on the main thread.
struct MainThreadCell<T>(UnsafeCell<Option<T>>);

impl<T> MainThreadCell<T> {
    const fn new() -> Self {
        Self(UnsafeCell::new(None))
    }

    fn get_or_init_with<F>(&self, _mtm: MainThreadMarker, init: F) -> &T
    where
        F: FnOnce() -> T,
    {
        // SAFETY: Access is guarded by requiring a `MainThreadMarker`, so this
        // is only touched from the main thread.
        unsafe {
            let slot = &mut *self.0.get();
            if slot.is_none() {
                *slot = Some(init());
            }
            slot.as_ref().expect("LOCATION_MANAGER initialized")
        }
    }
}

// SAFETY: `MainThreadCell` enforces main-thread-only access through
// `MainThreadMarker`.
unsafe impl<T> Sync for MainThreadCell<T> {}

/// Global location manager instance
static LOCATION_MANAGER: MainThreadCell<Retained<CLLocationManager>> = MainThreadCell::new();

/// Run `f` with the cached manager, or bail if not on the main thread.
///
/// `CLLocationManager` is main-thread-only; rather than panicking or hopping
/// threads on the caller's behalf, off-main-thread calls get `None` and the
/// bridge answers with its default values.
fn with_manager<R>(f: impl FnOnce(&CLLocationManager) -> R) -> Option<R> {
    let mtm = MainThreadMarker::new()?;
    let manager = LOCATION_MANAGER.get_or_init_with(mtm, || {
        // SAFETY: the marker above ensures we're on the main thread.
        unsafe { CLLocationManager::new() }
    });
    Some(f(manager))
}

fn map_status(raw: CLAuthorizationStatus) -> AuthorizationStatus {
    match raw {
        CLAuthorizationStatus::NotDetermined => AuthorizationStatus::NotDetermined,
        CLAuthorizationStatus::Restricted => AuthorizationStatus::Restricted,
        CLAuthorizationStatus::Denied => AuthorizationStatus::Denied,
        CLAuthorizationStatus::AuthorizedAlways => AuthorizationStatus::AuthorizedAlways,
        CLAuthorizationStatus::AuthorizedWhenInUse => AuthorizationStatus::AuthorizedWhenInUse,
        _ => {
            log::debug!("unrecognized CLAuthorizationStatus {:?}", raw);
            AuthorizationStatus::NotDetermined
        }
    }
}

/// Get the last location CoreLocation has cached
pub fn last_known() -> Option<(f64, f64)> {
    with_manager(|manager| {
        let location: Option<Retained<CLLocation>> = unsafe { manager.location() };
        location.map(|location| {
            let coordinate = unsafe { location.coordinate() };
            (coordinate.latitude, coordinate.longitude)
        })
    })
    .flatten()
}

/// Schedule the system permission prompt
pub fn request_authorization() {
    let requested = with_manager(|manager| unsafe {
        if cfg!(feature = "background-location") {
            manager.requestAlwaysAuthorization();
        } else {
            manager.requestWhenInUseAuthorization();
        }
    });

    if requested.is_none() {
        log::warn!("location authorization must be requested from the main thread");
    }
}

/// Read the current authorization grant
pub fn authorization_status() -> AuthorizationStatus {
    with_manager(|manager| map_status(unsafe { manager.authorizationStatus() }))
        .unwrap_or(AuthorizationStatus::NotDetermined)
}

/// Whether location services are enabled system-wide
pub fn services_enabled() -> bool {
    unsafe { CLLocationManager::locationServicesEnabled() }
}
