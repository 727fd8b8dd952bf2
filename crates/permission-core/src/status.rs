//! Camera authorization status model.

use serde::{Deserialize, Serialize};

/// The OS's record of whether this process may use the camera.
///
/// Raw values mirror the media-capture permission subsystem's numbering
/// (0 = not determined, 1 = restricted, 2 = denied, 3 = authorized).
/// Values outside that range are preserved in [`Unknown`] rather than
/// rejected, so a newer OS cannot break the report.
///
/// [`Unknown`]: AuthorizationStatus::Unknown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorizationStatus {
    /// The user has not yet been asked for camera access.
    NotDetermined,
    /// Access is blocked by device policy (parental controls, MDM).
    Restricted,
    /// The user explicitly denied camera access.
    Denied,
    /// The user granted camera access.
    Authorized,
    /// A status value this build does not recognize.
    Unknown(i64),
}

impl AuthorizationStatus {
    /// Map a raw OS status value into the model. Total: unrecognized
    /// values land in `Unknown`.
    pub fn from_raw(raw: i64) -> Self {
        match raw {
            0 => Self::NotDetermined,
            1 => Self::Restricted,
            2 => Self::Denied,
            3 => Self::Authorized,
            other => Self::Unknown(other),
        }
    }

    /// The raw OS status value this variant stands for.
    pub fn as_raw(&self) -> i64 {
        match self {
            Self::NotDetermined => 0,
            Self::Restricted => 1,
            Self::Denied => 2,
            Self::Authorized => 3,
            Self::Unknown(raw) => *raw,
        }
    }

    /// Whether the user (or policy) has already settled the decision.
    /// Only `NotDetermined` can still transition via a consent prompt.
    pub fn is_settled(&self) -> bool {
        !matches!(self, Self::NotDetermined)
    }

    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }
}

/// Result of one consent-request flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestOutcome {
    /// The status was already settled; no request was issued.
    AlreadySettled(AuthorizationStatus),
    /// The user granted access before the wait elapsed.
    Granted,
    /// The user denied access before the wait elapsed.
    Denied,
    /// The wait elapsed without a callback from the permission subsystem.
    TimedOut,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn known_raw_values_map_to_named_variants() {
        assert_eq!(
            AuthorizationStatus::from_raw(0),
            AuthorizationStatus::NotDetermined
        );
        assert_eq!(
            AuthorizationStatus::from_raw(1),
            AuthorizationStatus::Restricted
        );
        assert_eq!(AuthorizationStatus::from_raw(2), AuthorizationStatus::Denied);
        assert_eq!(
            AuthorizationStatus::from_raw(3),
            AuthorizationStatus::Authorized
        );
    }

    #[test]
    fn only_not_determined_is_unsettled() {
        assert!(!AuthorizationStatus::NotDetermined.is_settled());
        assert!(AuthorizationStatus::Restricted.is_settled());
        assert!(AuthorizationStatus::Denied.is_settled());
        assert!(AuthorizationStatus::Authorized.is_settled());
        assert!(AuthorizationStatus::Unknown(17).is_settled());
    }

    proptest! {
        #[test]
        fn raw_mapping_is_total_and_round_trips(raw in any::<i64>()) {
            let status = AuthorizationStatus::from_raw(raw);
            prop_assert_eq!(status.as_raw(), raw);
            if !(0..=3).contains(&raw) {
                prop_assert_eq!(status, AuthorizationStatus::Unknown(raw));
            }
        }
    }
}
