//! Scripted platform backend for tests
//!
//! Stands in for the real location stack so test suites can drive every
//! authorization/service combination deterministically. The mock enforces
//! the same gating the platforms do: no fix is ever observable without both
//! a grant and enabled services, and a scripted prompt decision lands only
//! when the prompt is actually requested.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::AuthorizationStatus;

/// The platform state a test scripts before driving the bridge.
#[derive(Debug, Clone, Copy)]
pub struct MockPlatform {
    /// System-wide services switch.
    pub services_enabled: bool,
    /// Current authorization grant.
    pub status: AuthorizationStatus,
    /// The cached fix, if the platform holds one.
    pub fix: Option<(f64, f64)>,
    /// What the user will answer if the prompt is presented. Applied only by
    /// `request_authorization`, and only from `NotDetermined`.
    pub decision: Option<AuthorizationStatus>,
}

impl Default for MockPlatform {
    fn default() -> Self {
        Self {
            services_enabled: false,
            status: AuthorizationStatus::NotDetermined,
            fix: None,
            decision: None,
        }
    }
}

static PLATFORM: Mutex<MockPlatform> = Mutex::new(MockPlatform {
    services_enabled: false,
    status: AuthorizationStatus::NotDetermined,
    fix: None,
    decision: None,
});

// Serializes tests that script the process-global platform state.
static INSTALL: Mutex<()> = Mutex::new(());

/// Keeps the scripted state installed until dropped.
///
/// Holding the session serializes concurrently running tests; dropping it
/// restores the default (nothing available) state.
pub struct MockSession {
    _serial: MutexGuard<'static, ()>,
}

impl Drop for MockSession {
    fn drop(&mut self) {
        *platform() = MockPlatform::default();
    }
}

/// Install a scripted platform state for the lifetime of the returned session.
pub fn install(state: MockPlatform) -> MockSession {
    let serial = INSTALL.lock().unwrap_or_else(PoisonError::into_inner);
    *platform() = state;
    MockSession { _serial: serial }
}

fn platform() -> MutexGuard<'static, MockPlatform> {
    PLATFORM.lock().unwrap_or_else(PoisonError::into_inner)
}

pub fn last_known() -> Option<(f64, f64)> {
    let state = platform();
    if !state.services_enabled || !state.status.is_authorized() {
        return None;
    }
    state.fix
}

pub fn request_authorization() {
    let mut state = platform();
    if state.status == AuthorizationStatus::NotDetermined {
        if let Some(decision) = state.decision.take() {
            state.status = decision;
        }
    }
}

pub fn authorization_status() -> AuthorizationStatus {
    platform().status
}

pub fn services_enabled() -> bool {
    platform().services_enabled
}
