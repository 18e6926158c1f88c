//! "Ratios of Victims & Affected people": two donut charts over disaster
//! subgroups, one for deaths and one for affected people.

use std::collections::BTreeMap;

use serde::Serialize;

use super::add_reported;
use crate::dataset::DisasterRecord;

/// Subgroups left out of both pies: their figures are not comparable with
/// the other subgroups.
pub const EXCLUDED_SUBGROUPS: [&str; 2] = ["Complex Disasters", "Extra-terrestrial"];

/// Parallel subgroup -> value maps. Both maps always have the same keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct VictimShares {
    pub deaths: BTreeMap<String, f64>,
    pub affected: BTreeMap<String, f64>,
}

pub fn victim_shares(rows: &[&DisasterRecord]) -> VictimShares {
    let mut sums: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for r in rows
        .iter()
        .filter(|r| !EXCLUDED_SUBGROUPS.contains(&r.subgroup.as_str()))
    {
        let (deaths, affected) = sums.entry(r.subgroup.as_str()).or_default();
        add_reported(deaths, r.total_deaths);
        add_reported(affected, r.no_affected);
    }

    let mut shares = VictimShares {
        deaths: BTreeMap::new(),
        affected: BTreeMap::new(),
    };
    for (subgroup, (deaths, affected)) in sums {
        shares.deaths.insert(subgroup.to_string(), deaths);
        shares.affected.insert(subgroup.to_string(), affected);
    }
    shares
}
