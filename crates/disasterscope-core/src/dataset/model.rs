//! Disaster record model.
//!
//! One `DisasterRecord` per historical event, deserialized straight from a
//! CSV row. Numeric measures are optional: an empty cell means "not reported"
//! and is skipped by sums and means.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level disaster category.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub enum DisasterGroup {
    Natural,
    Technological,
}

impl DisasterGroup {
    /// Every group, in display order.
    pub const ALL: [DisasterGroup; 2] = [DisasterGroup::Natural, DisasterGroup::Technological];

    pub fn as_str(self) -> &'static str {
        match self {
            DisasterGroup::Natural => "Natural",
            DisasterGroup::Technological => "Technological",
        }
    }

    /// Parses the exact group label used in the dataset.
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|g| g.as_str() == label)
    }
}

impl fmt::Display for DisasterGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single disaster event.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct DisasterRecord {
    /// Event identifier, e.g. "1993-0001-IND". Each record counts as one disaster.
    #[serde(rename = "Dis No")]
    pub dis_no: String,
    #[serde(rename = "Country")]
    pub country: String,
    /// ISO 3166-1 alpha-3 country code.
    #[serde(rename = "ISO")]
    pub iso: String,
    #[serde(rename = "Disaster Group")]
    pub group: DisasterGroup,
    #[serde(rename = "Disaster Subgroup")]
    pub subgroup: String,
    #[serde(rename = "Disaster Type")]
    pub disaster_type: String,
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Total Deaths")]
    pub total_deaths: Option<f64>,
    #[serde(rename = "No Affected")]
    pub no_affected: Option<f64>,
    /// Inflation-adjusted, thousands of US$.
    #[serde(rename = "Reconstruction Costs, Adjusted ('000 US$)")]
    pub reconstruction_costs: Option<f64>,
    /// Inflation-adjusted, thousands of US$.
    #[serde(rename = "Total Damages, Adjusted ('000 US$)")]
    pub total_damages: Option<f64>,
    /// GDP per capita of the country in the event year.
    #[serde(rename = "GDP_per_capita")]
    pub gdp_per_capita: Option<f64>,
}
