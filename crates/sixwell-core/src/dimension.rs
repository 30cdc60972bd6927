//! The fixed set of tracked wellness dimensions.
//!
//! Dimensions are identified by a stable index (0-5) or a kebab-case key.
//! Display labels, prompts, colors, and motivational copy are presentation
//! metadata owned by the consuming layer -- the core only needs a stable
//! identifier.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TrackerError;

/// Number of tracked dimensions.
pub const DIMENSION_COUNT: usize = 6;

/// One of the six well-being dimensions, tracked independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Dimension {
    Social,
    Movement,
    Brain,
    Nutrition,
    Purpose,
    SelfCare,
}

impl Dimension {
    /// All dimensions in canonical index order.
    pub const ALL: [Dimension; DIMENSION_COUNT] = [
        Dimension::Social,
        Dimension::Movement,
        Dimension::Brain,
        Dimension::Nutrition,
        Dimension::Purpose,
        Dimension::SelfCare,
    ];

    /// Stable index in `0..DIMENSION_COUNT`.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a dimension by its stable index.
    ///
    /// # Errors
    /// Returns [`TrackerError::InvalidDimension`] for indexes outside `0..6`.
    pub fn from_index(index: usize) -> Result<Self, TrackerError> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| TrackerError::InvalidDimension(index.to_string()))
    }

    /// Stable kebab-case key, matching the serde representation.
    pub fn key(self) -> &'static str {
        match self {
            Dimension::Social => "social",
            Dimension::Movement => "movement",
            Dimension::Brain => "brain",
            Dimension::Nutrition => "nutrition",
            Dimension::Purpose => "purpose",
            Dimension::SelfCare => "self-care",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = TrackerError;

    /// Parse a dimension from its key or its index.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(index) = s.parse::<usize>() {
            return Self::from_index(index);
        }
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.key() == s)
            .ok_or_else(|| TrackerError::InvalidDimension(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for (i, dim) in Dimension::ALL.iter().enumerate() {
            assert_eq!(dim.index(), i);
            assert_eq!(Dimension::from_index(i).unwrap(), *dim);
        }
    }

    #[test]
    fn out_of_range_index_is_invalid() {
        let err = Dimension::from_index(6).unwrap_err();
        assert_eq!(err, TrackerError::InvalidDimension("6".to_string()));
    }

    #[test]
    fn parses_keys_and_indexes() {
        assert_eq!("self-care".parse::<Dimension>().unwrap(), Dimension::SelfCare);
        assert_eq!("movement".parse::<Dimension>().unwrap(), Dimension::Movement);
        assert_eq!("0".parse::<Dimension>().unwrap(), Dimension::Social);
        assert!("cardio".parse::<Dimension>().is_err());
        assert!("7".parse::<Dimension>().is_err());
    }

    #[test]
    fn serde_uses_kebab_case_keys() {
        for dim in Dimension::ALL {
            let json = serde_json::to_string(&dim).unwrap();
            assert_eq!(json, format!("\"{}\"", dim.key()));
            let back: Dimension = serde_json::from_str(&json).unwrap();
            assert_eq!(back, dim);
        }
    }
}
