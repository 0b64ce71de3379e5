//! Points type codes for loyalty currencies.
//!
//! A points type is the machine name of one loyalty currency (e.g., "gold",
//! "silver"). Each points type has independent balances and conversion rules.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validated machine name of a loyalty points currency.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PointsType(String);

/// Errors from parsing a points type code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointsTypeError {
    /// The code was empty.
    #[error("Points type must not be empty")]
    Empty,
    /// The code contained a character outside `[a-z0-9_]`.
    #[error("Invalid points type {0:?}: only lowercase letters, digits and underscores are allowed")]
    InvalidCharacter(String),
}

impl PointsType {
    /// Parses a points type machine name.
    ///
    /// # Errors
    ///
    /// Returns `PointsTypeError` if the name is empty or contains characters
    /// outside `[a-z0-9_]`.
    pub fn new(code: impl Into<String>) -> Result<Self, PointsTypeError> {
        let code = code.into();
        if code.is_empty() {
            return Err(PointsTypeError::Empty);
        }
        if !code
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
        {
            return Err(PointsTypeError::InvalidCharacter(code));
        }
        Ok(Self(code))
    }

    /// Returns the machine name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PointsType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for PointsType {
    type Error = PointsTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PointsType> for String {
    fn from(value: PointsType) -> Self {
        value.0
    }
}

impl std::str::FromStr for PointsType {
    type Err = PointsTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
