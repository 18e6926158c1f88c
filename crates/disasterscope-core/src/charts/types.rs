//! Per-disaster-type horizontal bars: "Type of disaster" (frequency) and
//! "Deaths per Disaster Type".
//!
//! Both are sorted ascending by value so the largest bar ends up on top of a
//! horizontal bar chart. Ties keep alphabetical type order.

use std::collections::BTreeMap;

use serde::Serialize;

use super::add_reported;
use crate::dataset::DisasterRecord;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct TypeCount {
    pub disaster_type: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct TypeDeaths {
    pub disaster_type: String,
    pub deaths: f64,
}

/// Number of disasters per type, ascending by count.
pub fn disaster_types(rows: &[&DisasterRecord]) -> Vec<TypeCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for r in rows {
        *counts.entry(r.disaster_type.as_str()).or_default() += 1;
    }

    let mut bars: Vec<TypeCount> = counts
        .into_iter()
        .map(|(t, count)| TypeCount {
            disaster_type: t.to_string(),
            count,
        })
        .collect();
    bars.sort_by_key(|b| b.count);
    bars
}

/// Total deaths per type, ascending, with zero-death types dropped.
pub fn deaths_by_type(rows: &[&DisasterRecord]) -> Vec<TypeDeaths> {
    let mut sums: BTreeMap<&str, f64> = BTreeMap::new();
    for r in rows {
        add_reported(sums.entry(r.disaster_type.as_str()).or_default(), r.total_deaths);
    }

    let mut bars: Vec<TypeDeaths> = sums
        .into_iter()
        .filter(|&(_, deaths)| deaths > 0.0)
        .map(|(t, deaths)| TypeDeaths {
            disaster_type: t.to_string(),
            deaths,
        })
        .collect();
    bars.sort_by(|a, b| a.deaths.total_cmp(&b.deaths));
    bars
}
