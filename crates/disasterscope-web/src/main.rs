mod access_log;
mod handlers;
mod openapi;
mod state;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use clap::Parser;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tracing::{error, info};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use disasterscope_core::dataset::Dataset;

use access_log::AccessLogLayer;
use openapi::ApiDoc;
use state::SharedState;

// ============================================================
// CLI
// ============================================================

#[derive(Parser)]
#[command(
    name = "disasterscope-web",
    about = "disasterscope dashboard API server",
    version = disasterscope_core::VERSION
)]
struct Args {
    /// Listen address.
    #[arg(long, default_value = "0.0.0.0:10000", env = "DISASTERSCOPE_LISTEN")]
    listen: String,

    /// Path to the disasters CSV. Loaded once at startup.
    #[arg(
        long,
        default_value = "data/processed_data_final.csv",
        env = "DISASTERSCOPE_DATA"
    )]
    data: PathBuf,
}

// ============================================================
// Main
// ============================================================

fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| {
                    tracing_subscriber::EnvFilter::new("disasterscope_web=info,disasterscope_core=info")
                }),
        )
        .init();

    info!(version = disasterscope_core::VERSION, path = %args.data.display(), "loading dataset");
    let dataset = match Dataset::from_path(&args.data) {
        Ok(ds) => ds,
        Err(e) => {
            error!(path = %args.data.display(), error = %e, "failed to load dataset");
            process::exit(1);
        }
    };

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("failed to build tokio runtime")
        .block_on(async_main(args, Arc::new(dataset)));
}

async fn async_main(args: Args, state: SharedState) {
    let app = router(state)
        .layer(AccessLogLayer)
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .into_make_service_with_connect_info::<SocketAddr>();

    let addr: SocketAddr = match args.listen.parse() {
        Ok(addr) => addr,
        Err(e) => {
            error!(listen = %args.listen, error = %e, "invalid listen address");
            process::exit(1);
        }
    };
    info!(%addr, "listening");

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            error!(%addr, error = %e, "failed to bind");
            process::exit(1);
        }
    };

    if let Err(e) = axum::serve(listener, app).await {
        error!(error = %e, "server error");
        process::exit(1);
    }
}

fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::handle_health))
        .route("/api/v1/schema", get(handlers::handle_schema))
        .route("/api/v1/dashboard", get(handlers::handle_dashboard))
        .route(
            "/api/v1/charts/disasters-vs-deaths",
            get(handlers::handle_disasters_vs_deaths),
        )
        .route(
            "/api/v1/charts/disasters-by-country",
            get(handlers::handle_disasters_by_country),
        )
        .route(
            "/api/v1/charts/disaster-types",
            get(handlers::handle_disaster_types),
        )
        .route("/api/v1/charts/victims", get(handlers::handle_victims))
        .route(
            "/api/v1/charts/deaths-by-type",
            get(handlers::handle_deaths_by_type),
        )
        .route("/api/v1/charts/costs", get(handlers::handle_costs))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    const CSV: &str = "\
Dis No,Year,Country,ISO,Disaster Group,Disaster Subgroup,Disaster Type,Total Deaths,No Affected,\"Reconstruction Costs, Adjusted ('000 US$)\",\"Total Damages, Adjusted ('000 US$)\",GDP_per_capita
1993-0001-IND,1993,India,IND,Natural,Hydrological,Flood,120,50000,,2000,300
1995-0002-USA,1995,United States of America,USA,Technological,Transport accident,Transport accident,40,,,,28000
2004-0003-IDN,2004,Indonesia,IDN,Natural,Geophysical,Earthquake,1000,500000,1000,4500,1200
";

    fn app() -> Router {
        router(Arc::new(Dataset::from_reader(CSV.as_bytes()).unwrap()))
    }

    async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
        let resp = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_health() {
        let resp = app()
            .oneshot(Request::get("/api/v1/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_schema() {
        let (status, json) = get_json("/api/v1/schema").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["records"], 3);
        assert_eq!(json["controls"]["years"]["from"], 1993);
        assert_eq!(json["controls"]["years"]["to"], 2004);
    }

    #[tokio::test]
    async fn test_dashboard_defaults_to_everything() {
        let (status, json) = get_json("/api/v1/dashboard").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["matched"], 3);
        assert_eq!(json["disasters_vs_deaths"]["series"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_chart_with_filters() {
        let (status, json) =
            get_json("/api/v1/charts/disaster-types?group=Natural&types=Flood,Earthquake").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json.as_array().unwrap().len(), 2);

        let (_, json) = get_json("/api/v1/charts/disasters-vs-deaths?group=Natural").await;
        let series = json["series"].as_array().unwrap();
        assert_eq!(series.len(), 1);
        assert_eq!(series[0]["group"], "Natural");
    }

    #[tokio::test]
    async fn test_empty_year_range() {
        let (status, json) = get_json("/api/v1/charts/costs?year_from=1996&year_to=2000").await;
        assert_eq!(status, StatusCode::OK);
        assert!(json["costs"].as_array().unwrap().is_empty());
        assert!(json["gdp"].as_array().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_group_is_400() {
        let (status, _) = get_json("/api/v1/charts/victims?group=Biological").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
