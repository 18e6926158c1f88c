//! Chart aggregations.
//!
//! Each chart is a pure function from the filtered rows to a small summary
//! table ready for a plotting library. No chart depends on another one, and
//! none of them keeps state between calls: every selection change recomputes
//! everything from the shared dataset.

pub mod costs;
pub mod countries;
pub mod timeline;
pub mod types;
pub mod victims;

pub use costs::{Costs, YearCosts, YearGdp, costs};
pub use countries::{CountryCount, DisastersByCountry, disasters_by_country};
pub use timeline::{DisastersVsDeaths, GroupSeries, YearCount, YearDeaths, disasters_vs_deaths};
pub use types::{TypeCount, TypeDeaths, deaths_by_type, disaster_types};
pub use victims::{EXCLUDED_SUBGROUPS, VictimShares, victim_shares};

use serde::Serialize;
use tracing::debug;

use crate::dataset::Dataset;
use crate::filter::Selection;

/// The six dashboard charts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
#[serde(rename_all = "kebab-case")]
pub enum ChartKind {
    DisastersVsDeaths,
    DisastersByCountry,
    DisasterTypes,
    Victims,
    DeathsByType,
    Costs,
}

impl ChartKind {
    /// Every chart, in page order.
    pub const ALL: [ChartKind; 6] = [
        ChartKind::DisastersVsDeaths,
        ChartKind::DisastersByCountry,
        ChartKind::DisasterTypes,
        ChartKind::Victims,
        ChartKind::DeathsByType,
        ChartKind::Costs,
    ];

    /// URL-safe identifier, also the serialized form.
    pub fn id(self) -> &'static str {
        match self {
            ChartKind::DisastersVsDeaths => "disasters-vs-deaths",
            ChartKind::DisastersByCountry => "disasters-by-country",
            ChartKind::DisasterTypes => "disaster-types",
            ChartKind::Victims => "victims",
            ChartKind::DeathsByType => "deaths-by-type",
            ChartKind::Costs => "costs",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::DisastersVsDeaths => "Number of disaster vs Deaths",
            ChartKind::DisastersByCountry => "Number of disaster per country",
            ChartKind::DisasterTypes => "Type of disaster",
            ChartKind::Victims => "Ratios of Victims & Affected people",
            ChartKind::DeathsByType => "Deaths per Disaster Type",
            ChartKind::Costs => "Damage & Reconstruction costs",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.id() == id)
    }
}

/// All six charts computed for one selection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "api", derive(utoipa::ToSchema))]
pub struct Dashboard {
    /// Number of records matching the selection.
    pub matched: usize,
    pub disasters_vs_deaths: DisastersVsDeaths,
    pub disasters_by_country: DisastersByCountry,
    pub disaster_types: Vec<TypeCount>,
    pub victims: VictimShares,
    pub deaths_by_type: Vec<TypeDeaths>,
    pub costs: Costs,
}

impl Dashboard {
    /// Filters the dataset once and runs every chart over the result.
    pub fn compute(dataset: &Dataset, selection: &Selection) -> Self {
        let rows = dataset.select(selection);
        debug!(matched = rows.len(), total = dataset.len(), "computing dashboard");
        Self {
            matched: rows.len(),
            disasters_vs_deaths: disasters_vs_deaths(&rows, &selection.group),
            disasters_by_country: disasters_by_country(&rows),
            disaster_types: disaster_types(&rows),
            victims: victim_shares(&rows),
            deaths_by_type: deaths_by_type(&rows),
            costs: costs(&rows),
        }
    }
}

/// Adds a measure to a running sum; unreported values count as zero.
fn add_reported(acc: &mut f64, value: Option<f64>) {
    if let Some(v) = value {
        *acc += v;
    }
}
