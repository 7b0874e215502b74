use crate::infra::{
    split_list, table_response, ApiJson, ApiPath, ApiQuery, AppState, OutputFormat,
};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use workforce_intel::analytics::DashboardMetrics;
use workforce_intel::error::AppError;
use workforce_intel::query::{
    parse_amount, DeliverableFilter, DirectoryFilter, ProjectFilter, ResumeView, SkillMatch,
};
use workforce_intel::schema::{EmployeeId, TableCounts};
use workforce_intel::search::SearchCriteria;
use workforce_intel::staffing::{
    CostEstimate, RateCard, SkillsCoverage, DEFAULT_MARGIN_PCT,
};
use tracing::info;

pub(crate) fn api_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/employees", get(employees_endpoint))
        .route("/api/v1/projects", get(projects_endpoint))
        .route(
            "/api/v1/billing/employees/:employee_id",
            get(billing_by_employee_endpoint),
        )
        .route(
            "/api/v1/billing/projects/:billing_code",
            get(billing_by_project_endpoint),
        )
        .route("/api/v1/billing/years/:year", get(billing_by_year_endpoint))
        .route("/api/v1/billing/summary", get(billing_summary_endpoint))
        .route("/api/v1/resumes/:employee_id", get(resume_endpoint))
        .route(
            "/api/v1/employees/:employee_id/history",
            get(project_history_endpoint),
        )
        .route("/api/v1/deliverables", get(deliverables_endpoint))
        .route("/api/v1/search", post(search_endpoint))
        .route("/api/v1/analytics/industry", get(industry_endpoint))
        .route("/api/v1/analytics/clients", get(clients_endpoint))
        .route("/api/v1/analytics/skills", get(skills_endpoint))
        .route("/api/v1/analytics/roles", get(roles_endpoint))
        .route("/api/v1/analytics/dashboard", get(dashboard_endpoint))
        .route("/api/v1/staffing/estimate", post(staffing_estimate_endpoint))
        .route("/api/v1/admin/reload", post(reload_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct FormatParams {
    #[serde(default)]
    pub(crate) format: OutputFormat,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct EmployeeParams {
    pub(crate) skills: Option<String>,
    #[serde(default)]
    pub(crate) skill_match: SkillMatch,
    pub(crate) role: Option<String>,
    pub(crate) location: Option<String>,
    pub(crate) job_title: Option<String>,
    #[serde(default)]
    pub(crate) format: OutputFormat,
}

pub(crate) async fn employees_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<EmployeeParams>,
) -> Result<Response, AppError> {
    let filter = DirectoryFilter {
        skills: split_list(params.skills.as_deref()),
        skill_match: params.skill_match,
        role: params.role,
        location: params.location,
        job_title: params.job_title,
    };
    let rows = state.store.current().employee_directory(&filter);
    table_response(rows, params.format)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProjectParams {
    pub(crate) client: Option<String>,
    pub(crate) industry: Option<String>,
    pub(crate) technology: Option<String>,
    pub(crate) min_dollar_amount: Option<String>,
    pub(crate) max_dollar_amount: Option<String>,
    #[serde(default)]
    pub(crate) format: OutputFormat,
}

pub(crate) async fn projects_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<ProjectParams>,
) -> Result<Response, AppError> {
    let filter = ProjectFilter {
        client: params.client,
        industry: params.industry,
        technology: params.technology,
        min_dollar_amount: amount("min_dollar_amount", params.min_dollar_amount.as_deref())?,
        max_dollar_amount: amount("max_dollar_amount", params.max_dollar_amount.as_deref())?,
    };
    let rows = state.store.current().projects_dashboard(&filter)?;
    table_response(rows, params.format)
}

fn amount(field: &'static str, raw: Option<&str>) -> Result<Option<f64>, AppError> {
    match raw {
        Some(raw) => Ok(parse_amount(field, raw)?),
        None => Ok(None),
    }
}

pub(crate) async fn billing_by_employee_endpoint(
    Extension(state): Extension<AppState>,
    ApiPath(employee_id): ApiPath<u32>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    let rows = state
        .store
        .current()
        .billing_by_employee(EmployeeId(employee_id))?;
    table_response(rows, params.format)
}

pub(crate) async fn billing_by_project_endpoint(
    Extension(state): Extension<AppState>,
    ApiPath(billing_code): ApiPath<String>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    let rows = state.store.current().billing_by_project(&billing_code)?;
    table_response(rows, params.format)
}

pub(crate) async fn billing_by_year_endpoint(
    Extension(state): Extension<AppState>,
    ApiPath(year): ApiPath<i32>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    let rows = state.store.current().billing_by_year(year);
    table_response(rows, params.format)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SummaryParams {
    pub(crate) year: Option<i32>,
    #[serde(default)]
    pub(crate) format: OutputFormat,
}

pub(crate) async fn billing_summary_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<SummaryParams>,
) -> Result<Response, AppError> {
    let rows = state.store.current().billing_summary_by_year(params.year);
    table_response(rows, params.format)
}

pub(crate) async fn resume_endpoint(
    Extension(state): Extension<AppState>,
    ApiPath(employee_id): ApiPath<u32>,
) -> Result<Json<ResumeView>, AppError> {
    let resume = state.store.current().resume_matrix(EmployeeId(employee_id))?;
    Ok(Json(resume))
}

pub(crate) async fn project_history_endpoint(
    Extension(state): Extension<AppState>,
    ApiPath(employee_id): ApiPath<u32>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    let rows = state
        .store
        .current()
        .employee_project_history(EmployeeId(employee_id))?;
    table_response(rows, params.format)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct DeliverableParams {
    pub(crate) topic_area: Option<String>,
    pub(crate) client: Option<String>,
    pub(crate) technology: Option<String>,
    pub(crate) billing_code: Option<String>,
    #[serde(default)]
    pub(crate) format: OutputFormat,
}

pub(crate) async fn deliverables_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<DeliverableParams>,
) -> Result<Response, AppError> {
    let filter = DeliverableFilter {
        topic_area: params.topic_area,
        client: params.client,
        technology: params.technology,
        billing_code: params.billing_code,
    };
    let rows = state.store.current().deliverables_tracker(&filter);
    table_response(rows, params.format)
}

pub(crate) async fn search_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<FormatParams>,
    ApiJson(criteria): ApiJson<SearchCriteria>,
) -> Result<Response, AppError> {
    let rows = state.store.current().complex_search(&criteria)?;
    table_response(rows, params.format)
}

pub(crate) async fn industry_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    table_response(state.store.current().analytics_by_industry(), params.format)
}

pub(crate) async fn clients_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    table_response(state.store.current().analytics_by_client(), params.format)
}

pub(crate) async fn skills_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    table_response(state.store.current().skill_distribution(), params.format)
}

pub(crate) async fn roles_endpoint(
    Extension(state): Extension<AppState>,
    ApiQuery(params): ApiQuery<FormatParams>,
) -> Result<Response, AppError> {
    table_response(state.store.current().role_breakdown(), params.format)
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<DashboardMetrics> {
    Json(state.store.current().dashboard_metrics())
}

#[derive(Debug, Deserialize)]
pub(crate) struct StaffingRequest {
    pub(crate) candidates: Vec<EmployeeId>,
    #[serde(default)]
    pub(crate) required_skills: Vec<String>,
    #[serde(default)]
    pub(crate) margin_pct: Option<f64>,
    /// Overrides applied on top of the default rate card.
    #[serde(default)]
    pub(crate) rates: Vec<RateOverride>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RateOverride {
    pub(crate) role: String,
    pub(crate) hourly_rate: f64,
    pub(crate) hours: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct StaffingResponse {
    pub(crate) estimate: CostEstimate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) coverage: Option<SkillsCoverage>,
}

pub(crate) async fn staffing_estimate_endpoint(
    Extension(state): Extension<AppState>,
    ApiJson(request): ApiJson<StaffingRequest>,
) -> Result<Json<StaffingResponse>, AppError> {
    let rate_card = request
        .rates
        .iter()
        .fold(RateCard::default(), |card, rate| {
            card.with_rate(&rate.role, rate.hourly_rate, rate.hours)
        });
    let snapshot = state.store.current();

    let estimate = snapshot.estimate_cost(
        &request.candidates,
        &rate_card,
        request.margin_pct.unwrap_or(DEFAULT_MARGIN_PCT),
    )?;
    let coverage = if request.required_skills.is_empty() {
        None
    } else {
        Some(snapshot.skills_coverage(&request.candidates, &request.required_skills)?)
    };

    Ok(Json(StaffingResponse { estimate, coverage }))
}

#[derive(Debug, Serialize)]
pub(crate) struct ReloadResponse {
    pub(crate) status: &'static str,
    pub(crate) counts: TableCounts,
}

pub(crate) async fn reload_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let store = Arc::clone(&state.store);
    let data_dir = state.data_dir.clone();
    let snapshot = tokio::task::spawn_blocking(move || store.reload_from_dir(&data_dir))
        .await
        .map_err(|err| AppError::Io(std::io::Error::other(err)))??;
    let counts = snapshot.counts();
    info!(data_dir = %state.data_dir.display(), "snapshot reloaded on request");
    Ok(Json(ReloadResponse {
        status: "reloaded",
        counts,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::io::Cursor;
    use std::path::PathBuf;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;
    use workforce_intel::data::{load_snapshot, SourceTable, TableSources};
    use workforce_intel::SnapshotStore;

    const EMPLOYEES: &str = "\
Employee_ID,Name,Email,Role_ID,Job_Title,Location,Skills,LinkedIn_URL
20001,Maya Torres,maya@example.com,R1,Technical Lead,\"Austin, TX\",Python; OpenCV; AWS,
20002,Sam Lee,sam@example.com,R2,Senior Engineer,\"Dallas, TX\",Python; PyTorch,
20003,Jo Grant,jo@example.com,R3,Project Manager,Remote,Agile; Leadership,
";
    const ROLES: &str = "\
Role_ID,Standard_Role,Role_Title_Variants
R1,Technical Lead,Tech Lead
R2,Senior Engineer,Sr Engineer
R3,Project Manager,PM
";
    const PROJECTS: &str = "\
Billing_Code,Project_Name,Client,Industry,Technologies,Dollar_Amount,Project_Scope
PC-100,Port Camera Grid,Port Authority,Government,Python; OpenCV,300000,Camera analytics
PC-200,Store Insights,ShopCo,Commercial,PyTorch,120000,Footfall modelling
";
    const BILLING: &str = "\
Billing_Code,Employee_ID,Year,Hours_Billed,Role_in_Project
PC-100,20001,2025,400,Technical Lead
PC-100,20003,2025,100,Project Manager
PC-200,20002,2024,250,ML Engineer
";
    const RESUMES: &str = "\
Employee_ID,Education,Experience,Certifications,Summary
20001,MS Robotics,9 years computer vision,AWS Solutions Architect,Vision lead
20002,BS Computer Science,4 years deep learning,,Model builder
";
    const DELIVERABLES: &str = "\
Billing_Code,Deliverable,Date_Completed,Topic_Area,Technologies,Client,Codebase
PC-100,Camera health monitor,2025-05-01,Computer Vision,Python; OpenCV,Port Authority,
";

    fn test_state(data_dir: PathBuf) -> AppState {
        let sources = TableSources {
            employees: Cursor::new(EMPLOYEES),
            roles: Cursor::new(ROLES),
            projects: Cursor::new(PROJECTS),
            billing: Cursor::new(BILLING),
            resumes: Cursor::new(RESUMES),
            deliverables: Cursor::new(DELIVERABLES),
        };
        let snapshot = load_snapshot(sources).expect("test tables load");
        AppState {
            store: Arc::new(SnapshotStore::new(snapshot)),
            data_dir,
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        }
    }

    fn app() -> Router {
        app_with_state(test_state(PathBuf::from("does-not-exist")))
    }

    fn app_with_state(state: AppState) -> Router {
        api_routes().layer(Extension(state))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = app.oneshot(request).await.expect("request handled");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, body.to_vec())
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let request = Request::get(uri).body(Body::empty()).expect("request builds");
        let (status, body) = send(app(), request).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    async fn post_json(uri: &str, payload: Value) -> (StatusCode, Value) {
        let request = Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .expect("request builds");
        let (status, body) = send(app(), request).await;
        (status, serde_json::from_slice(&body).expect("json body"))
    }

    #[tokio::test]
    async fn health_and_readiness_report_ok() {
        let (status, body) = get_json("/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");

        let (status, body) = get_json("/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn employees_filter_by_skill_list() {
        let (status, body) = get_json("/api/v1/employees?skills=Python;AWS").await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().expect("array body");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["employee_id"], 20001);
        assert_eq!(rows[0]["standard_role"], "Technical Lead");
    }

    #[tokio::test]
    async fn csv_format_downloads_the_table() {
        let request = Request::get("/api/v1/analytics/industry?format=csv")
            .body(Body::empty())
            .expect("request builds");
        let response = app().oneshot(request).await.expect("request handled");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            mime::TEXT_CSV_UTF_8.as_ref()
        );
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        let text = String::from_utf8(body.to_vec()).expect("utf-8 csv");
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("industry,total_hours,total_revenue,project_count")
        );
        assert_eq!(lines.next(), Some("Government,500.0,300000.0,1"));
    }

    #[tokio::test]
    async fn unknown_employee_maps_to_not_found() {
        let (status, body) = get_json("/api/v1/billing/employees/99999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "no employee with key '99999'");
    }

    #[tokio::test]
    async fn invalid_amount_maps_to_bad_request() {
        let (status, body) = get_json("/api/v1/projects?min_dollar_amount=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .starts_with("invalid min_dollar_amount"));
    }

    #[tokio::test]
    async fn malformed_path_and_query_values_are_json_bad_requests() {
        for uri in [
            "/api/v1/billing/employees/abc",
            "/api/v1/billing/summary?year=abc",
        ] {
            let (status, body) = get_json(uri).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
            let message = body["error"].as_str().expect("error message");
            assert!(message.starts_with("invalid "), "{uri}: {message}");
        }
    }

    #[tokio::test]
    async fn malformed_search_body_is_a_json_bad_request() {
        let request = Request::post("/api/v1/search")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{\"skills\": "))
            .expect("request builds");
        let (status, body) = send(app(), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let body: Value = serde_json::from_slice(&body).expect("json body");
        assert!(body["error"]
            .as_str()
            .expect("error message")
            .starts_with("invalid body"));
    }

    #[tokio::test]
    async fn search_combines_criteria() {
        let (status, body) = post_json(
            "/api/v1/search",
            json!({ "skills": ["Python"], "industry_experience": "government" }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        let rows = body.as_array().expect("array body");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["name"], "Maya Torres");
        assert_eq!(rows[0]["years_experience"], 9.0);
    }

    #[tokio::test]
    async fn staffing_estimate_prices_the_team() {
        let (status, body) = post_json(
            "/api/v1/staffing/estimate",
            json!({
                "candidates": [20001, 20003],
                "required_skills": ["Python", "Leadership"],
                "margin_pct": 0
            }),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["estimate"]["base_cost"], 636_000.0);
        assert_eq!(body["estimate"]["total_hours"], 3200.0);
        assert_eq!(body["coverage"]["uncovered"], json!([]));

        let (status, _) = post_json(
            "/api/v1/staffing/estimate",
            json!({ "candidates": [20001], "margin_pct": 45 }),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn failed_reload_is_a_server_error_and_keeps_data() {
        let state = test_state(PathBuf::from("does-not-exist"));
        let store = Arc::clone(&state.store);
        let request = Request::post("/api/v1/admin/reload")
            .body(Body::empty())
            .expect("request builds");
        let (status, _) = send(app_with_state(state), request).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(store.current().employees().len(), 3);
    }

    #[tokio::test]
    async fn reload_reads_the_data_directory() {
        let dir = std::env::temp_dir().join(format!(
            "workforce-intel-api-reload-{}",
            std::process::id()
        ));
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).expect("create scratch dir");
        for table in SourceTable::ordered() {
            let contents = match table {
                SourceTable::Employees => EMPLOYEES,
                SourceTable::Roles => ROLES,
                SourceTable::Projects => PROJECTS,
                SourceTable::Billing => BILLING,
                SourceTable::Resumes => RESUMES,
                SourceTable::Deliverables => DELIVERABLES,
            };
            std::fs::write(dir.join(table.file_name()), contents).expect("write table");
        }

        let request = Request::post("/api/v1/admin/reload")
            .body(Body::empty())
            .expect("request builds");
        let (status, body) = send(app_with_state(test_state(dir.clone())), request).await;
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).expect("json body");
        assert_eq!(body["status"], "reloaded");
        assert_eq!(body["counts"]["employees"], 3);
        assert_eq!(body["counts"]["billing"], 3);
    }
}
