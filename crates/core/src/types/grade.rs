//! Quality grades for surplus flowers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordinal quality tier. `A` is the best, `C` the most flawed and discounted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
}

/// Error returned when a grade string is not `A`, `B` or `C`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid grade: {0}")]
pub struct GradeParseError(pub String);

impl Grade {
    /// All grades, best first.
    pub const ALL: [Self; 3] = [Self::A, Self::B, Self::C];

    /// Single-letter code used in query strings and persisted data.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
        }
    }

    /// Short badge text, e.g. `A급`.
    #[must_use]
    pub const fn badge(self) -> &'static str {
        match self {
            Self::A => "A급",
            Self::B => "B급",
            Self::C => "C급",
        }
    }

    /// Descriptive label shown in filters and on the product page.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::A => "A급 (최상)",
            Self::B => "B급 (보통)",
            Self::C => "C급 (아쉬움)",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::A => "🌿",
            Self::B => "🍂",
            Self::C => "🥀",
        }
    }

    /// CSS modifier class for the grade badge.
    #[must_use]
    pub const fn css_class(self) -> &'static str {
        match self {
            Self::A => "grade-a",
            Self::B => "grade-b",
            Self::C => "grade-c",
        }
    }
}

impl std::fmt::Display for Grade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Grade {
    type Err = GradeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            _ => Err(GradeParseError(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_grade_order_best_first() {
        assert!(Grade::A < Grade::B);
        assert!(Grade::B < Grade::C);
    }

    #[test]
    fn test_grade_from_str_is_case_sensitive() {
        assert_eq!("B".parse::<Grade>().unwrap(), Grade::B);
        assert!("b".parse::<Grade>().is_err());
        assert!("D".parse::<Grade>().is_err());
    }

    #[test]
    fn test_grade_serde_uses_letter() {
        assert_eq!(serde_json::to_string(&Grade::C).unwrap(), "\"C\"");
        let grade: Grade = serde_json::from_str("\"A\"").unwrap();
        assert_eq!(grade, Grade::A);
    }
}
