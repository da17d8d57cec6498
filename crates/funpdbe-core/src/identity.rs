//! # Structure Identifier
//!
//! Newtype for the four-character PDB entry code.
//!
//! ## Validation
//!
//! - Exactly four ASCII characters
//! - First character is a digit 1-9
//! - Remaining three are ASCII alphanumerics
//!
//! The stored form is lower-cased. PDBe keys its API responses by the
//! lower-case code, so every lookup and every key comparison goes through
//! [`StructureId::as_str`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A validated, lower-cased PDB entry identifier (e.g. `1cbs`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StructureId(String);

impl<'de> Deserialize<'de> for StructureId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::new(raw).map_err(serde::de::Error::custom)
    }
}

impl StructureId {
    /// Create a structure identifier, validating the PDB id format.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidStructureId`] if the string does not match
    /// `^[1-9][a-zA-Z0-9]{3}$`.
    pub fn new(value: impl Into<String>) -> Result<Self, CoreError> {
        let raw = value.into();
        if !Self::is_well_formed(&raw) {
            return Err(CoreError::InvalidStructureId(raw));
        }
        Ok(Self(raw.to_ascii_lowercase()))
    }

    /// Check the PDB id format without allocating an identifier.
    pub fn is_well_formed(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        bytes.len() == 4
            && matches!(bytes[0], b'1'..=b'9')
            && bytes[1..].iter().all(u8::is_ascii_alphanumeric)
    }

    /// Access the lower-cased identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StructureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for StructureId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn accepts_and_lowercases() {
        let id = StructureId::new("1CBS").unwrap();
        assert_eq!(id.as_str(), "1cbs");
        assert_eq!(id.to_string(), "1cbs");
    }

    #[test]
    fn rejects_leading_zero() {
        assert!(matches!(
            StructureId::new("0abc"),
            Err(CoreError::InvalidStructureId(_))
        ));
    }

    #[test]
    fn rejects_wrong_length() {
        assert!(StructureId::new("1ab").is_err());
        assert!(StructureId::new("1abcd").is_err());
        assert!(StructureId::new("").is_err());
    }

    #[test]
    fn rejects_non_alphanumeric() {
        assert!(StructureId::new("1ab!").is_err());
        assert!(StructureId::new("1a b").is_err());
    }

    #[test]
    fn rejects_non_ascii_of_four_bytes() {
        // "1é" plus one char is four bytes but not four alphanumerics.
        assert!(StructureId::new("1éa").is_err());
    }

    #[test]
    fn deserialize_validates() {
        let ok: StructureId = serde_json::from_str("\"2AQA\"").unwrap();
        assert_eq!(ok.as_str(), "2aqa");
        let bad: Result<StructureId, _> = serde_json::from_str("\"abcd\"");
        assert!(bad.is_err());
    }

    proptest! {
        #[test]
        fn well_formed_ids_round_trip_lowercased(id in "[1-9][a-zA-Z0-9]{3}") {
            let parsed = StructureId::new(id.clone()).unwrap();
            prop_assert_eq!(parsed.as_str(), id.to_ascii_lowercase());
        }

        #[test]
        fn leading_zero_always_rejected(rest in "[a-zA-Z0-9]{3}") {
            let candidate = format!("0{rest}");
            prop_assert!(StructureId::new(candidate).is_err());
        }
    }
}
