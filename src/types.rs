use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Active-state filter applied to reference lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActiveFilter {
    All,
    Active,
    Inactive,
}

impl fmt::Display for ActiveFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::All => "ALL",
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown active filter: '{0}'")]
pub struct ParseActiveFilterError(String);

impl FromStr for ActiveFilter {
    type Err = ParseActiveFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ALL" => Ok(Self::All),
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(ParseActiveFilterError(s.to_string())),
        }
    }
}

/// Parent-filter criterion attached to a resource lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriterion {
    pub criteria: String,
}

impl FilterCriterion {
    pub fn new(criteria: impl Into<String>) -> Self {
        Self {
            criteria: criteria.into(),
        }
    }
}

/// Parameters of a resource lookup. Structurally equal queries always resolve to the
/// same cache entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceQuery {
    pub resource_type: String,
    pub filter: ActiveFilter,
    /// Whether the parent chain of each resource should be resolved too.
    pub load_parents: bool,
    /// Roles the lookup is scoped to, in caller order.
    pub roles: Vec<String>,
    pub criteria: Vec<FilterCriterion>,
}

/// Organizational resource record as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: u64,
    pub code: String,
    pub name: String,
    pub resource_type: String,
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Resource>>,
}

/// Service category record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: u64,
    pub code: String,
    pub description: String,
    pub active: bool,
}

/// Vehicle model row of the make/model/year taxonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleModel {
    pub id: u64,
    pub name: String,
    pub year_from: u16,
    pub year_to: u16,
}
