//! Settlement domain types.

use pointex_shared::types::PointsType;
use serde::{Deserialize, Serialize};

/// Redemption settlement phase for one `(order, points type)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedemptionPhase {
    /// No redemption recorded.
    #[default]
    None,
    /// A redemption result is recorded but not yet debited.
    Pending,
    /// The ledger debit has been applied.
    Settled,
}

/// Grant settlement phase for one `(order, points type)` pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantPhase {
    /// No grant recorded.
    #[default]
    None,
    /// Grants are recorded but not yet credited.
    Pending,
    /// The ledger credit has been applied.
    Granted,
}

impl std::fmt::Display for RedemptionPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Pending => write!(f, "pending"),
            Self::Settled => write!(f, "settled"),
        }
    }
}

impl std::fmt::Display for GrantPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Pending => write!(f, "pending"),
            Self::Granted => write!(f, "granted"),
        }
    }
}

/// One ledger movement applied by a settlement pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettledEntry {
    /// The points type moved.
    pub points_type: PointsType,
    /// The point count debited or credited.
    pub points: u64,
}
