//! Host status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Participation status for a host location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "host_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum HostStatus {
    /// The host currently participates in weekly collections.
    Active,
    /// The host is paused or has left the program.
    Inactive,
}

impl HostStatus {
    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for HostStatus {
    type Err = sandops_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(sandops_core::AppError::validation(format!(
                "Invalid host status: '{s}'. Expected one of: active, inactive"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("active".parse::<HostStatus>().unwrap(), HostStatus::Active);
        assert_eq!(
            "INACTIVE".parse::<HostStatus>().unwrap(),
            HostStatus::Inactive
        );
        assert!("retired".parse::<HostStatus>().is_err());
    }
}
