//! Dataset variant selection and its error type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when selecting a dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    /// A variant name from an external parameter surface was not recognized.
    #[error("unknown dataset variant '{0}' (expected one of: five_names, auto_generated_names)")]
    UnknownVariant(String),
}

/// Result type alias for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Selector for which name list the generator produces.
///
/// The enum is closed and matched exhaustively everywhere inside the crate,
/// so adding a variant without extending the generator fails at compile
/// time. The string boundary (parameter sweeps, CLI) goes through
/// [`FromStr`] and fails loudly on unknown names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DatasetVariant {
    /// The original fixed five-element list.
    FiveNames,
    /// 1000 names generated from combinatorial name parts.
    AutoGeneratedNames,
}

impl DatasetVariant {
    /// All variants, in sweep order.
    pub const ALL: [DatasetVariant; 2] = [
        DatasetVariant::FiveNames,
        DatasetVariant::AutoGeneratedNames,
    ];

    /// Stable identifier used in parameter surfaces and reports.
    pub fn name(&self) -> &'static str {
        match self {
            DatasetVariant::FiveNames => "five_names",
            DatasetVariant::AutoGeneratedNames => "auto_generated_names",
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DatasetVariant {
    type Err = DatasetError;

    fn from_str(s: &str) -> DatasetResult<Self> {
        match s {
            "five_names" | "FiveNames" | "FIVE_NAMES" => Ok(DatasetVariant::FiveNames),
            "auto_generated_names" | "AutoGeneratedNames" | "AUTO_GENERATED_NAMES" => {
                Ok(DatasetVariant::AutoGeneratedNames)
            }
            other => Err(DatasetError::UnknownVariant(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        for variant in DatasetVariant::ALL {
            let parsed: DatasetVariant = variant.name().parse().unwrap();
            assert_eq!(parsed, variant);
        }
    }

    #[test]
    fn test_parses_legacy_spellings() {
        assert_eq!(
            "FIVE_NAMES".parse::<DatasetVariant>().unwrap(),
            DatasetVariant::FiveNames
        );
        assert_eq!(
            "AutoGeneratedNames".parse::<DatasetVariant>().unwrap(),
            DatasetVariant::AutoGeneratedNames
        );
    }

    #[test]
    fn test_unknown_variant_fails() {
        let err = "three_names".parse::<DatasetVariant>().unwrap_err();
        assert!(err.to_string().contains("three_names"));
    }
}
