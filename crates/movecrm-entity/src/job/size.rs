//! Moving job size enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Rough size of a move.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, sqlx::Type,
)]
#[sqlx(type_name = "job_size", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobSize {
    /// Studio or single room.
    Small,
    /// One to two bedrooms.
    #[default]
    Medium,
    /// Three to four bedrooms.
    Large,
    /// Whole house or office.
    ExtraLarge,
}

impl JobSize {
    /// Every size, smallest first.
    pub const ALL: [JobSize; 4] = [Self::Small, Self::Medium, Self::Large, Self::ExtraLarge];

    /// Return the wire value (`"EXTRA_LARGE"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Small => "SMALL",
            Self::Medium => "MEDIUM",
            Self::Large => "LARGE",
            Self::ExtraLarge => "EXTRA_LARGE",
        }
    }
}

impl fmt::Display for JobSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for JobSize {
    type Err = movecrm_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase().replace([' ', '-'], "_");
        match normalized.as_str() {
            "SMALL" => Ok(Self::Small),
            "MEDIUM" => Ok(Self::Medium),
            "LARGE" => Ok(Self::Large),
            "EXTRA_LARGE" => Ok(Self::ExtraLarge),
            _ => Err(movecrm_core::AppError::validation(format!(
                "Invalid job size: '{s}'. Expected one of: SMALL, MEDIUM, LARGE, EXTRA_LARGE"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_medium() {
        assert_eq!(JobSize::default(), JobSize::Medium);
    }

    #[test]
    fn test_parse() {
        assert_eq!("extra large".parse::<JobSize>().unwrap(), JobSize::ExtraLarge);
        assert_eq!("small".parse::<JobSize>().unwrap(), JobSize::Small);
        assert!("huge".parse::<JobSize>().is_err());
    }
}
