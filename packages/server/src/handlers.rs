//! HTTP handler functions for the sentencing dashboard API.

use actix_web::{HttpResponse, http::header, web};
use sentencing_dashboard::{filter_options, overview, query_table, refresh, select_rows, write_csv};
use sentencing_prepare::DataSource;
use sentencing_server_models::{
    ApiDataSource, ApiError, ApiHealth, ApiOverview, DashboardQueryParams, DashboardResponse,
};

use crate::AppState;

/// File name suggested for CSV exports.
const EXPORT_FILE_NAME: &str = "filtered_cases.csv";

/// `GET /api/health`
pub async fn health() -> HttpResponse {
    HttpResponse::Ok().json(ApiHealth {
        healthy: true,
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// `GET /api/overview`
///
/// Headline metrics over the whole dataset.
pub async fn overview_metrics(state: web::Data<AppState>) -> HttpResponse {
    let source = match state.cases.source() {
        DataSource::File { path } => ApiDataSource::File {
            path: path.display().to_string(),
        },
        DataSource::Fixture => ApiDataSource::Fixture,
    };

    HttpResponse::Ok().json(ApiOverview {
        overview: overview(state.cases.cases()),
        source,
    })
}

/// `GET /api/options`
///
/// Dropdown options for the judge, charge and sentence filters.
pub async fn options(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(filter_options(state.cases.cases()))
}

/// `GET /api/dashboard`
///
/// Runs the filter-aggregate cycle for the given selectors and returns the
/// summary, the five charts and one page of the detail table.
pub async fn dashboard(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let selection = params.selection();
    let view = refresh(state.cases.cases(), &selection);
    let table = query_table(&view.table_rows, &params.table_query(state.page_size));

    HttpResponse::Ok().json(DashboardResponse::new(selection, view, table))
}

/// `GET /api/cases.csv`
///
/// Exports the full filtered, searched and sorted detail table as CSV.
/// Paging parameters are ignored.
pub async fn cases_csv(
    state: web::Data<AppState>,
    params: web::Query<DashboardQueryParams>,
) -> HttpResponse {
    let view = refresh(state.cases.cases(), &params.selection());
    let rows = select_rows(&view.table_rows, &params.table_query(state.page_size));

    let mut body = Vec::new();
    match write_csv(rows, &mut body) {
        Ok(()) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header((
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ))
            .body(body),
        Err(e) => {
            log::error!("Failed to export cases: {e}");
            HttpResponse::InternalServerError().json(ApiError {
                error: "Failed to export cases".to_string(),
            })
        }
    }
}
