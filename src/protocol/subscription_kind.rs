use crate::errors::FixMdError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// SubscriptionRequestType (tag 263) of a market data request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SubscriptionKind {
    /// One-time snapshot, code `0`.
    Snapshot,
    /// Snapshot followed by incremental updates, code `1`.
    SnapshotPlusUpdates,
    /// Cancel a previous subscription, code `2`.
    Unsubscribe,
}

impl SubscriptionKind {
    pub fn as_code(&self) -> &'static str {
        match self {
            SubscriptionKind::Snapshot => "0",
            SubscriptionKind::SnapshotPlusUpdates => "1",
            SubscriptionKind::Unsubscribe => "2",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SubscriptionKind::Snapshot => "Snapshot Only",
            SubscriptionKind::SnapshotPlusUpdates => "Snapshot + Updates",
            SubscriptionKind::Unsubscribe => "Unsubscribe",
        }
    }
}

impl FromStr for SubscriptionKind {
    type Err = FixMdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "0" => Ok(SubscriptionKind::Snapshot),
            "1" => Ok(SubscriptionKind::SnapshotPlusUpdates),
            "2" => Ok(SubscriptionKind::Unsubscribe),
            _ => Err(FixMdError::InvalidFieldValue {
                field: "SubscriptionRequestType".to_string(),
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for SubscriptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}
