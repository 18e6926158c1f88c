//! "Number of disaster vs Deaths": yearly disaster counts per group (lines)
//! and yearly total deaths (bars).

use std::collections::BTreeMap;

use serde::Serialize;

use super::add_reported;
use crate::dataset::{DisasterGroup, DisasterRecord};
use crate::filter::GroupFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct YearCount {
    pub year: i32,
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct YearDeaths {
    pub year: i32,
    pub deaths: f64,
}

/// One line of the chart: disasters per year for a single group.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct GroupSeries {
    pub group: DisasterGroup,
    /// Legend label, e.g. "Natural Disasters count".
    pub name: String,
    /// Years with at least one disaster of this group, ascending.
    pub points: Vec<YearCount>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct DisastersVsDeaths {
    /// One series per selected group; a selected group with no rows keeps an empty series.
    pub series: Vec<GroupSeries>,
    /// Total deaths per year over all rows, ascending by year.
    pub deaths: Vec<YearDeaths>,
}

pub fn disasters_vs_deaths(rows: &[&DisasterRecord], groups: &GroupFilter) -> DisastersVsDeaths {
    let mut deaths: BTreeMap<i32, f64> = BTreeMap::new();
    let mut counts: BTreeMap<(DisasterGroup, i32), u64> = BTreeMap::new();

    for r in rows {
        add_reported(deaths.entry(r.year).or_default(), r.total_deaths);
        *counts.entry((r.group, r.year)).or_default() += 1;
    }

    let series = groups
        .groups()
        .into_iter()
        .map(|group| GroupSeries {
            group,
            name: format!("{} Disasters count", group),
            points: counts
                .range((group, i32::MIN)..=(group, i32::MAX))
                .map(|(&(_, year), &count)| YearCount { year, count })
                .collect(),
        })
        .collect();

    DisastersVsDeaths {
        series,
        deaths: deaths
            .into_iter()
            .map(|(year, deaths)| YearDeaths { year, deaths })
            .collect(),
    }
}
