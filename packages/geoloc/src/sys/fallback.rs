//! Stub backend for platforms without a native location stack

use crate::AuthorizationStatus;

pub fn last_known() -> Option<(f64, f64)> {
    None
}

pub fn request_authorization() {
    log::debug!("ignoring authorization request: {}", crate::Error::NotSupported);
}

pub fn authorization_status() -> AuthorizationStatus {
    AuthorizationStatus::NotDetermined
}

pub fn services_enabled() -> bool {
    false
}
