//! API schema: describes the dashboard controls and charts.
//!
//! Generated from the loaded dataset, so option lists always match the data.

use serde::Serialize;
use utoipa::ToSchema;

use crate::charts::ChartKind;
use crate::dataset::{Dataset, DisasterGroup};
use crate::filter::{ALL, YearRange};

/// Top-level API schema returned by `GET /api/v1/schema`.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiSchema {
    /// Server version including git SHA (e.g. "0.1.0-abc1234").
    pub version: String,
    /// Number of records in the loaded dataset.
    pub records: usize,
    pub controls: ControlsSchema,
    /// Charts in page order.
    pub charts: Vec<ChartInfo>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ControlsSchema {
    /// `ALL` followed by every country, sorted.
    pub countries: Vec<String>,
    /// `ALL`, `Natural`, `Technological`.
    pub groups: Vec<String>,
    /// `ALL` followed by every disaster type, sorted.
    pub types: Vec<String>,
    /// Year slider bounds.
    pub years: YearRange,
    /// Initial control values.
    pub defaults: SelectionDefaults,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SelectionDefaults {
    pub country: String,
    pub group: String,
    pub types: Vec<String>,
    pub years: YearRange,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ChartInfo {
    pub id: ChartKind,
    pub title: String,
}

impl ApiSchema {
    pub fn generate(dataset: &Dataset) -> Self {
        let years = dataset.year_bounds();
        Self {
            version: crate::VERSION.to_string(),
            records: dataset.len(),
            controls: ControlsSchema {
                countries: with_all(dataset.countries()),
                groups: std::iter::once(ALL)
                    .chain(DisasterGroup::ALL.iter().map(|g| g.as_str()))
                    .map(String::from)
                    .collect(),
                types: with_all(dataset.disaster_types()),
                years,
                defaults: SelectionDefaults {
                    country: ALL.into(),
                    group: ALL.into(),
                    types: vec![ALL.into()],
                    years,
                },
            },
            charts: ChartKind::ALL
                .into_iter()
                .map(|id| ChartInfo {
                    id,
                    title: id.title().into(),
                })
                .collect(),
        }
    }
}

fn with_all(values: &[String]) -> Vec<String> {
    std::iter::once(ALL.to_string())
        .chain(values.iter().cloned())
        .collect()
}
