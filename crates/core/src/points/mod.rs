//! External points ledger collaborator interface.

pub mod ledger;

pub use ledger::{PointsLedger, PointsLedgerError};
