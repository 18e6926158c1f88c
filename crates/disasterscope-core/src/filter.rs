//! UI selection and the row predicate.
//!
//! The dashboard controls send plain strings with an `"ALL"` sentinel. They
//! are parsed once, at the boundary, into explicit `All | Only(..)` unions so
//! the predicate never compares against a magic string.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::dataset::{DisasterGroup, DisasterRecord};

/// Sentinel value the controls use for "no restriction".
pub const ALL: &str = "ALL";

/// Error type for selections that cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// Group value is neither `ALL` nor a known disaster group.
    UnknownGroup(String),
}

impl std::fmt::Display for SelectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SelectionError::UnknownGroup(g) => write!(
                f,
                "unknown disaster group {:?} (expected ALL, Natural or Technological)",
                g
            ),
        }
    }
}

impl std::error::Error for SelectionError {}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountryFilter {
    All,
    Only(String),
}

impl CountryFilter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            CountryFilter::All
        } else {
            CountryFilter::Only(value.to_string())
        }
    }

    pub fn matches(&self, country: &str) -> bool {
        match self {
            CountryFilter::All => true,
            CountryFilter::Only(c) => c == country,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupFilter {
    All,
    Only(DisasterGroup),
}

impl GroupFilter {
    pub fn parse(value: &str) -> Result<Self, SelectionError> {
        if value == ALL {
            return Ok(GroupFilter::All);
        }
        DisasterGroup::from_label(value)
            .map(GroupFilter::Only)
            .ok_or_else(|| SelectionError::UnknownGroup(value.to_string()))
    }

    pub fn matches(&self, group: DisasterGroup) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Only(g) => *g == group,
        }
    }

    /// Groups covered by this filter, in display order.
    pub fn groups(&self) -> Vec<DisasterGroup> {
        match self {
            GroupFilter::All => DisasterGroup::ALL.to_vec(),
            GroupFilter::Only(g) => vec![*g],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeFilter {
    All,
    /// Literal set of types. An empty set matches nothing.
    Only(BTreeSet<String>),
}

impl TypeFilter {
    /// Parses a multi-select value.
    ///
    /// Only the exact single-element list `["ALL"]` means "all types"; any
    /// other list is taken literally.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values.into_iter().map(Into::into).collect();
        if values.len() == 1 && values[0] == ALL {
            TypeFilter::All
        } else {
            TypeFilter::Only(values.into_iter().collect())
        }
    }

    pub fn matches(&self, disaster_type: &str) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Only(types) => types.contains(disaster_type),
        }
    }
}

/// Inclusive year interval. `from > to` is allowed and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct YearRange {
    pub from: i32,
    pub to: i32,
}

impl YearRange {
    pub fn new(from: i32, to: i32) -> Self {
        Self { from, to }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.from <= year && year <= self.to
    }
}

/// Full set of control values driving every chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub country: CountryFilter,
    pub group: GroupFilter,
    pub types: TypeFilter,
    pub years: YearRange,
}

impl Selection {
    /// Selection that keeps every record within `years`.
    pub fn everything(years: YearRange) -> Self {
        Self {
            country: CountryFilter::All,
            group: GroupFilter::All,
            types: TypeFilter::All,
            years,
        }
    }

    /// Builds a selection from raw control values.
    pub fn from_values<S: AsRef<str>>(
        country: &str,
        group: &str,
        types: &[S],
        years: YearRange,
    ) -> Result<Self, SelectionError> {
        Ok(Self {
            country: CountryFilter::parse(country),
            group: GroupFilter::parse(group)?,
            types: TypeFilter::from_values(types.iter().map(|t| t.as_ref())),
            years,
        })
    }

    pub fn matches(&self, record: &DisasterRecord) -> bool {
        self.country.matches(&record.country)
            && self.group.matches(record.group)
            && self.types.matches(&record.disaster_type)
            && self.years.contains(record.year)
    }
}

/// Returns references to the records matching `selection`, preserving order.
pub fn filter_records<'a>(
    records: &'a [DisasterRecord],
    selection: &Selection,
) -> Vec<&'a DisasterRecord> {
    records.iter().filter(|r| selection.matches(r)).collect()
}
