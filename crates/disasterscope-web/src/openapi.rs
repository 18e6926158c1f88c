//! OpenAPI documentation definition.

use disasterscope_core::api::schema::{ApiSchema, ChartInfo, ControlsSchema, SelectionDefaults};
use disasterscope_core::charts::{
    ChartKind, CountryCount, Costs, Dashboard, DisastersByCountry, DisastersVsDeaths, GroupSeries,
    TypeCount, TypeDeaths, VictimShares, YearCosts, YearCount, YearDeaths, YearGdp,
};
use disasterscope_core::dataset::DisasterGroup;
use disasterscope_core::filter::YearRange;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::handle_health,
        crate::handlers::handle_schema,
        crate::handlers::handle_dashboard,
        crate::handlers::handle_disasters_vs_deaths,
        crate::handlers::handle_disasters_by_country,
        crate::handlers::handle_disaster_types,
        crate::handlers::handle_victims,
        crate::handlers::handle_deaths_by_type,
        crate::handlers::handle_costs,
    ),
    components(schemas(
        ApiSchema,
        ControlsSchema,
        SelectionDefaults,
        ChartInfo,
        ChartKind,
        YearRange,
        DisasterGroup,
        Dashboard,
        DisastersVsDeaths,
        GroupSeries,
        YearCount,
        YearDeaths,
        DisastersByCountry,
        CountryCount,
        TypeCount,
        TypeDeaths,
        VictimShares,
        Costs,
        YearCosts,
        YearGdp,
    )),
    info(
        title = "disasterscope API",
        version = "1.0",
        description = "Disaster events dashboard API: chart tables recomputed per filter selection"
    )
)]
pub(crate) struct ApiDoc;
