//! Platform backends
//!
//! Exactly one backend is active per build. Each one exposes the same four
//! functions the public API delegates to: `last_known`,
//! `request_authorization`, `authorization_status` and `services_enabled`.
//! Test builds (and the `mock` feature) swap the platform for a scripted one.

#[cfg(any(test, feature = "mock"))]
pub mod mock;

#[cfg(all(
    target_os = "android",
    not(any(test, feature = "mock"))
))]
mod android;

#[cfg(all(
    any(target_os = "ios", target_os = "macos"),
    not(any(test, feature = "mock"))
))]
mod ios;

#[cfg(all(
    not(any(target_os = "android", target_os = "ios", target_os = "macos")),
    not(any(test, feature = "mock"))
))]
mod fallback;

#[cfg(any(test, feature = "mock"))]
pub(crate) use mock::{authorization_status, last_known, request_authorization, services_enabled};

#[cfg(all(
    target_os = "android",
    not(any(test, feature = "mock"))
))]
pub(crate) use android::{
    authorization_status, last_known, request_authorization, services_enabled,
};

#[cfg(all(
    any(target_os = "ios", target_os = "macos"),
    not(any(test, feature = "mock"))
))]
pub(crate) use ios::{authorization_status, last_known, request_authorization, services_enabled};

#[cfg(all(
    not(any(target_os = "android", target_os = "ios", target_os = "macos")),
    not(any(test, feature = "mock"))
))]
pub(crate) use fallback::{
    authorization_status, last_known, request_authorization, services_enabled,
};
