//! HTTP request handlers: health, schema, dashboard and per-chart endpoints.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::Deserialize;
use tracing::{debug, warn};

use disasterscope_core::api::schema::ApiSchema;
use disasterscope_core::charts::{
    self, Costs, Dashboard, DisastersByCountry, DisastersVsDeaths, TypeCount, TypeDeaths,
    VictimShares,
};
use disasterscope_core::dataset::DisasterRecord;
use disasterscope_core::filter::{ALL, Selection, SelectionError, YearRange};

use crate::state::{AppState, SharedState};

// ============================================================
// Health
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/health",
    responses(
        (status = 200, description = "Service is healthy", body = String)
    )
)]
pub(crate) async fn handle_health() -> &'static str {
    "ok"
}

// ============================================================
// Schema
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/schema",
    responses(
        (status = 200, description = "Dashboard controls and charts", body = ApiSchema)
    )
)]
pub(crate) async fn handle_schema(State(dataset): AppState) -> Json<ApiSchema> {
    Json(ApiSchema::generate(&dataset))
}

// ============================================================
// Selection query
// ============================================================

/// Control values shared by every chart endpoint.
#[derive(Debug, Default, Deserialize, utoipa::IntoParams)]
pub(crate) struct SelectionQuery {
    /// Country name, or "ALL" (default).
    country: Option<String>,
    /// "ALL" (default), "Natural" or "Technological".
    group: Option<String>,
    /// Comma-separated disaster types, or "ALL" (default).
    types: Option<String>,
    /// First year, inclusive (default: earliest year in the dataset).
    year_from: Option<i32>,
    /// Last year, inclusive (default: latest year in the dataset).
    year_to: Option<i32>,
}

impl SelectionQuery {
    fn selection(&self, bounds: YearRange) -> Result<Selection, SelectionError> {
        let types: Vec<&str> = match self.types.as_deref() {
            None => vec![ALL],
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .collect(),
        };
        let years = YearRange::new(
            self.year_from.unwrap_or(bounds.from),
            self.year_to.unwrap_or(bounds.to),
        );
        Selection::from_values(
            self.country.as_deref().unwrap_or(ALL),
            self.group.as_deref().unwrap_or(ALL),
            &types,
            years,
        )
    }
}

/// Parses the query, then runs `chart` over the selected rows on the blocking pool.
async fn compute<T, F>(
    dataset: SharedState,
    query: SelectionQuery,
    chart: F,
) -> Result<Json<T>, StatusCode>
where
    T: Send + 'static,
    F: FnOnce(&[&DisasterRecord], &Selection) -> T + Send + 'static,
{
    let selection = query.selection(dataset.year_bounds()).map_err(|e| {
        warn!(error = %e, "rejected selection");
        StatusCode::BAD_REQUEST
    })?;

    tokio::task::spawn_blocking(move || {
        let rows = dataset.select(&selection);
        debug!(matched = rows.len(), "selection applied");
        chart(&rows, &selection)
    })
    .await
    .map(Json)
    .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

// ============================================================
// Dashboard
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    params(SelectionQuery),
    responses(
        (status = 200, description = "All six charts for the selection", body = Dashboard),
        (status = 400, description = "Unknown disaster group")
    )
)]
pub(crate) async fn handle_dashboard(
    State(dataset): AppState,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Dashboard>, StatusCode> {
    let selection = query.selection(dataset.year_bounds()).map_err(|e| {
        warn!(error = %e, "rejected selection");
        StatusCode::BAD_REQUEST
    })?;

    tokio::task::spawn_blocking(move || Dashboard::compute(&dataset, &selection))
        .await
        .map(Json)
        .map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)
}

// ============================================================
// Charts
// ============================================================

#[utoipa::path(
    get,
    path = "/api/v1/charts/disasters-vs-deaths",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Yearly disaster counts per group and yearly deaths", body = DisastersVsDeaths),
        (status = 400, description = "Unknown disaster group")
    )
)]
pub(crate) async fn handle_disasters_vs_deaths(
    State(dataset): AppState,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<DisastersVsDeaths>, StatusCode> {
    compute(dataset, query, |rows, sel| {
        charts::disasters_vs_deaths(rows, &sel.group)
    })
    .await
}

#[utoipa::path(
    get,
    path = "/api/v1/charts/disasters-by-country",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Disaster counts per ISO country code", body = DisastersByCountry),
        (status = 400, description = "Unknown disaster group")
    )
)]
pub(crate) async fn handle_disasters_by_country(
    State(dataset): AppState,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<DisastersByCountry>, StatusCode> {
    compute(dataset, query, |rows, _| charts::disasters_by_country(rows)).await
}

#[utoipa::path(
    get,
    path = "/api/v1/charts/disaster-types",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Disaster counts per type, ascending", body = Vec<TypeCount>),
        (status = 400, description = "Unknown disaster group")
    )
)]
pub(crate) async fn handle_disaster_types(
    State(dataset): AppState,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Vec<TypeCount>>, StatusCode> {
    compute(dataset, query, |rows, _| charts::disaster_types(rows)).await
}

#[utoipa::path(
    get,
    path = "/api/v1/charts/victims",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Deaths and affected people per subgroup", body = VictimShares),
        (status = 400, description = "Unknown disaster group")
    )
)]
pub(crate) async fn handle_victims(
    State(dataset): AppState,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<VictimShares>, StatusCode> {
    compute(dataset, query, |rows, _| charts::victim_shares(rows)).await
}

#[utoipa::path(
    get,
    path = "/api/v1/charts/deaths-by-type",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Total deaths per type, ascending, zeros dropped", body = Vec<TypeDeaths>),
        (status = 400, description = "Unknown disaster group")
    )
)]
pub(crate) async fn handle_deaths_by_type(
    State(dataset): AppState,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Vec<TypeDeaths>>, StatusCode> {
    compute(dataset, query, |rows, _| charts::deaths_by_type(rows)).await
}

#[utoipa::path(
    get,
    path = "/api/v1/charts/costs",
    params(SelectionQuery),
    responses(
        (status = 200, description = "Yearly damage and reconstruction sums, mean GDP per capita", body = Costs),
        (status = 400, description = "Unknown disaster group")
    )
)]
pub(crate) async fn handle_costs(
    State(dataset): AppState,
    Query(query): Query<SelectionQuery>,
) -> Result<Json<Costs>, StatusCode> {
    compute(dataset, query, |rows, _| charts::costs(rows)).await
}
