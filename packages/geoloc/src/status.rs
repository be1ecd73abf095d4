//! Authorization state reported by the platform's location stack

/// The platform's current permission grant for this app's location access.
///
/// The five variants mirror CoreLocation's authorization model, and the
/// discriminants are a frozen external contract: hosts on the far side of the
/// C boundary hard-code this mapping, so the order must never change.
///
/// Only the platform mutates this state (through user action or system
/// policy); the bridge requests a transition and observes the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize, serde::Deserialize))]
#[repr(i32)]
pub enum AuthorizationStatus {
    /// The user has not yet been asked.
    NotDetermined = 0,
    /// Location access is blocked by system policy (parental controls, MDM).
    Restricted = 1,
    /// The user explicitly refused access.
    Denied = 2,
    /// Location access is granted at all times.
    AuthorizedAlways = 3,
    /// Location access is granted while the app is in use.
    AuthorizedWhenInUse = 4,
}

impl AuthorizationStatus {
    /// The wire code used at the C boundary.
    pub const fn as_code(self) -> i32 {
        self as i32
    }

    /// Decode a wire code, rejecting anything outside the contract.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::NotDetermined),
            1 => Some(Self::Restricted),
            2 => Some(Self::Denied),
            3 => Some(Self::AuthorizedAlways),
            4 => Some(Self::AuthorizedWhenInUse),
            _ => None,
        }
    }

    /// Whether a location query can succeed under this grant.
    pub const fn is_authorized(self) -> bool {
        matches!(self, Self::AuthorizedAlways | Self::AuthorizedWhenInUse)
    }
}

#[cfg(test)]
mod tests {
    use super::AuthorizationStatus;

    #[test]
    fn wire_codes_are_frozen() {
        assert_eq!(AuthorizationStatus::NotDetermined.as_code(), 0);
        assert_eq!(AuthorizationStatus::Restricted.as_code(), 1);
        assert_eq!(AuthorizationStatus::Denied.as_code(), 2);
        assert_eq!(AuthorizationStatus::AuthorizedAlways.as_code(), 3);
        assert_eq!(AuthorizationStatus::AuthorizedWhenInUse.as_code(), 4);
    }

    #[test]
    fn codes_round_trip_and_reject_out_of_range() {
        for code in 0..=4 {
            let status = AuthorizationStatus::from_code(code).unwrap();
            assert_eq!(status.as_code(), code);
        }
        assert_eq!(AuthorizationStatus::from_code(5), None);
        assert_eq!(AuthorizationStatus::from_code(-1), None);
    }

    #[test]
    fn only_the_granted_variants_authorize_queries() {
        assert!(AuthorizationStatus::AuthorizedAlways.is_authorized());
        assert!(AuthorizationStatus::AuthorizedWhenInUse.is_authorized());
        assert!(!AuthorizationStatus::NotDetermined.is_authorized());
        assert!(!AuthorizationStatus::Restricted.is_authorized());
        assert!(!AuthorizationStatus::Denied.is_authorized());
    }
}
