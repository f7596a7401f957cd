//! Roster Web Dashboard
//!
//! Server-rendered HTML dashboard built with Axum and Tera. Every page
//! fetches what it needs from the HR API before responding.
//!
//! # Routes
//!
//! ## Views
//! - `GET /` - Employees dashboard (table, metrics, charts)
//! - `GET /add`, `POST /add` - Add employee
//! - `GET /edit`, `POST /edit` - Edit employee
//! - `GET /delete`, `POST /delete` - Delete employee
//!
//! ## Health
//! - `GET /health/live` - Liveness
//! - `GET /health/ready` - Readiness (HR API reachable)
//! - `GET /health` - Full health status
//!
//! # Example
//!
//! ```rust,ignore
//! use roster::client::{ClientConfig, HrClient};
//! use roster::config::ServerConfig;
//! use roster::web::{serve, AppState};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = Arc::new(HrClient::new(ClientConfig::default())?);
//!     let state = AppState::new(client)?;
//!     serve(state, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;
pub mod templates;
pub mod view;

pub use error::{WebError, WebResult};
pub use state::AppState;
pub use view::{Notice, NoticeKind, View};

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

/// Build the dashboard router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::dashboard::dashboard))
        .route(
            "/add",
            get(routes::add::add_form).post(routes::add::add_employee),
        )
        .route(
            "/edit",
            get(routes::edit::edit_form).post(routes::edit::update_employee),
        )
        .route(
            "/delete",
            get(routes::delete::delete_form).post(routes::delete::delete_employee),
        )
        .nest("/health", health_routes)
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state)
}

/// Start the dashboard server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), WebError> {
    let api_url = state.api.base_url().to_string();
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!(api_url = %api_url, "Roster dashboard listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Roster dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::{ClientError, EmployeeApi};
    use crate::employee::{Employee, EmployeeDraft, EmployeeId, Gender};
    use async_trait::async_trait;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use std::sync::Mutex;
    use tower::util::ServiceExt;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Create(EmployeeDraft),
        List,
        Update(EmployeeId, EmployeeDraft),
        Delete(EmployeeId),
    }

    /// In-memory HR API that records every call
    #[derive(Default)]
    struct FakeApi {
        employees: Mutex<Vec<Employee>>,
        calls: Mutex<Vec<Call>>,
        offline: bool,
    }

    impl FakeApi {
        fn with(employees: Vec<Employee>) -> Self {
            Self {
                employees: Mutex::new(employees),
                ..Default::default()
            }
        }

        fn offline() -> Self {
            Self {
                offline: true,
                ..Default::default()
            }
        }

        fn record(&self, call: Call) -> Result<(), ClientError> {
            self.calls.lock().unwrap().push(call);
            if self.offline {
                Err(ClientError::Unavailable("http://fake".to_string()))
            } else {
                Ok(())
            }
        }

        fn mutations(&self) -> Vec<Call> {
            self.calls
                .lock()
                .unwrap()
                .iter()
                .filter(|c| **c != Call::List)
                .cloned()
                .collect()
        }
    }

    #[async_trait]
    impl EmployeeApi for FakeApi {
        async fn create_employee(&self, draft: &EmployeeDraft) -> Result<serde_json::Value, ClientError> {
            self.record(Call::Create(draft.clone()))?;
            let mut employees = self.employees.lock().unwrap();
            let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
            employees.push(draft.clone().with_id(id));
            Ok(serde_json::json!({ "id": id }))
        }

        async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
            self.record(Call::List)?;
            Ok(self.employees.lock().unwrap().clone())
        }

        async fn update_employee(
            &self,
            id: EmployeeId,
            draft: &EmployeeDraft,
        ) -> Result<serde_json::Value, ClientError> {
            self.record(Call::Update(id, draft.clone()))?;
            let mut employees = self.employees.lock().unwrap();
            if let Some(e) = employees.iter_mut().find(|e| e.id == id) {
                *e = draft.clone().with_id(id);
            }
            Ok(serde_json::json!({ "id": id }))
        }

        async fn delete_employee(&self, id: EmployeeId) -> Result<serde_json::Value, ClientError> {
            self.record(Call::Delete(id))?;
            self.employees.lock().unwrap().retain(|e| e.id != id);
            Ok(serde_json::Value::Null)
        }

        fn base_url(&self) -> &str {
            "http://fake"
        }
    }

    fn employee(id: EmployeeId, name: &str, gender: Gender, job: &str, salary: f64) -> Employee {
        Employee {
            id,
            full_name: name.to_string(),
            email: format!("{}@example.com", name.split(' ').next().unwrap_or(name).to_lowercase()),
            gender,
            job_title: job.to_string(),
            salary,
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee(10, "Bob Stone", Gender::Male, "Engineer", 4000.0),
            employee(42, "Alice Moss", Gender::Female, "Manager", 8000.0),
            employee(7, "Carol Reed", Gender::Female, "Engineer", 6000.0),
        ]
    }

    fn app(api: Arc<FakeApi>) -> Router {
        build_router(AppState::new(api).unwrap())
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        read(response).await
    }

    async fn post_form(app: Router, uri: &str, body: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("Content-Type", "application/x-www-form-urlencoded")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        read(response).await
    }

    async fn read(response: axum::response::Response) -> (StatusCode, String) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_health_live() {
        let (status, _) = get(app(Arc::new(FakeApi::default())), "/health/live").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_when_api_answers() {
        let (status, _) = get(app(Arc::new(FakeApi::with(staff()))), "/health/ready").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_reports_unreachable_api() {
        let (status, _) = get(app(Arc::new(FakeApi::offline())), "/health/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (status, body) = get(app(Arc::new(FakeApi::default())), "/health").await;
        let health: serde_json::Value = serde_json::from_str(&body).unwrap();

        assert_eq!(status, StatusCode::OK);
        assert_eq!(health["status"], "healthy");
        assert_eq!(health["api_url"], "http://fake");
    }

    #[tokio::test]
    async fn test_dashboard_empty_shows_info() {
        let (status, body) = get(app(Arc::new(FakeApi::default())), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No employee in database"));
        assert!(!body.contains("Total Employees"));
    }

    #[tokio::test]
    async fn test_dashboard_shows_metrics_and_charts() {
        let (status, body) = get(app(Arc::new(FakeApi::with(staff()))), "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Alice Moss"));
        assert!(body.contains("Total Employees"));
        assert!(body.contains("$6000.00")); // mean
        assert!(body.contains("$8000.00")); // max
        assert!(body.contains("$4000.00")); // min
        assert!(body.contains("Gender Distribution"));
        assert!(body.contains("Employees per Job Title"));
        assert!(body.contains("Salary Distribution by Job Title"));
        assert_eq!(body.matches("<svg").count(), 3);
    }

    #[tokio::test]
    async fn test_dashboard_escapes_employee_fields() {
        let api = FakeApi::with(vec![employee(1, "<b>Eve</b>", Gender::Female, "R&D", 500.0)]);
        let (_, body) = get(app(Arc::new(api)), "/").await;

        assert!(!body.contains("<b>Eve</b>"));
        assert!(body.contains("&lt;b&gt;Eve&lt;&#x2F;b&gt;") || body.contains("&lt;b&gt;Eve&lt;/b&gt;"));
    }

    #[tokio::test]
    async fn test_upstream_failure_is_bad_gateway() {
        let (status, body) = get(app(Arc::new(FakeApi::offline())), "/").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert!(body.contains("UPSTREAM_ERROR"));
    }

    #[tokio::test]
    async fn test_add_form_renders() {
        let (status, body) = get(app(Arc::new(FakeApi::default())), "/add").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Add New Employee"));
        assert!(body.contains(r#"name="salary""#));
    }

    #[tokio::test]
    async fn test_add_with_empty_field_does_not_create() {
        let api = Arc::new(FakeApi::default());
        let (status, body) = post_form(
            app(api.clone()),
            "/add",
            "full_name=Dan+Hale&email=&gender=Male&job_title=Clerk&salary=500",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("All fields must be filled!"));
        assert!(api.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_add_creates_employee() {
        let api = Arc::new(FakeApi::default());
        let (status, body) = post_form(
            app(api.clone()),
            "/add",
            "full_name=Dan+Hale&email=dan%40example.com&gender=Male&job_title=Clerk&salary=500.5",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("New employee added successfully!"));
        assert_eq!(
            api.mutations(),
            vec![Call::Create(EmployeeDraft {
                full_name: "Dan Hale".to_string(),
                email: "dan@example.com".to_string(),
                gender: Gender::Male,
                job_title: "Clerk".to_string(),
                salary: 500.5,
            })]
        );
    }

    #[tokio::test]
    async fn test_edit_form_prefills_selected_employee() {
        let (status, body) = get(
            app(Arc::new(FakeApi::with(staff()))),
            "/edit?name=Alice+Moss",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains(r#"value="alice@example.com""#));
        assert!(body.contains(r#"name="id" value="42""#));
        assert!(body.contains(r#"<option value="Female" selected>"#));
    }

    #[tokio::test]
    async fn test_edit_form_accepts_stored_cents() {
        let mut employees = staff();
        employees[0].salary = 12000.55;
        let (_, body) = get(app(Arc::new(FakeApi::with(employees))), "/edit").await;

        assert!(body.contains(r#"value="12000.55""#));
        assert!(body.contains(r#"step="any""#));
    }

    #[tokio::test]
    async fn test_edit_defaults_to_first_employee() {
        let (_, body) = get(app(Arc::new(FakeApi::with(staff()))), "/edit").await;
        assert!(body.contains(r#"name="id" value="10""#));
    }

    #[tokio::test]
    async fn test_edit_empty_list_shows_info() {
        let (status, body) = get(app(Arc::new(FakeApi::default())), "/edit").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("No employee in database"));
        assert!(!body.contains("Update Employee"));
    }

    #[tokio::test]
    async fn test_edit_unknown_name_is_not_found() {
        let (status, _) = get(app(Arc::new(FakeApi::with(staff()))), "/edit?name=Nobody").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_edit_submits_fetched_id_unchanged() {
        let api = Arc::new(FakeApi::with(staff()));
        let (status, body) = post_form(
            app(api.clone()),
            "/edit",
            "id=42&full_name=Alice+Moss-Lee&email=alice%40example.com&gender=Female&job_title=Director&salary=9500",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Employee updated successfully!"));
        assert!(body.contains(r#"value="Director""#));

        let mutations = api.mutations();
        assert_eq!(mutations.len(), 1);
        match &mutations[0] {
            Call::Update(id, draft) => {
                assert_eq!(*id, 42);
                assert_eq!(draft.full_name, "Alice Moss-Lee");
                assert_eq!(draft.salary, 9500.0);
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_edit_with_empty_field_does_not_update() {
        let api = Arc::new(FakeApi::with(staff()));
        let (status, body) = post_form(
            app(api.clone()),
            "/edit",
            "id=42&full_name=&email=alice%40example.com&gender=Female&job_title=Manager&salary=8000",
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("All fields must be filled!"));
        assert!(api.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_edit_without_id_is_bad_request() {
        let api = Arc::new(FakeApi::with(staff()));
        let (status, _) = post_form(
            app(api.clone()),
            "/edit",
            "full_name=Alice&email=a%40example.com&gender=Female&job_title=Manager&salary=8000",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(api.mutations().is_empty());
    }

    #[tokio::test]
    async fn test_delete_form_lists_names() {
        let (status, body) = get(app(Arc::new(FakeApi::with(staff()))), "/delete").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Delete Bob Stone"));
        assert!(body.contains(r#"<option value="Carol Reed">"#));
    }

    #[tokio::test]
    async fn test_delete_uses_id_of_selected_name() {
        let api = Arc::new(FakeApi::with(staff()));
        let (status, body) = post_form(app(api.clone()), "/delete", "name=Alice+Moss").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Employee deleted successfully!"));
        // Alice sits at list position 1 but owns id 42
        assert_eq!(api.mutations(), vec![Call::Delete(42)]);
        assert!(!body.contains("Alice Moss"));
    }

    #[tokio::test]
    async fn test_delete_unknown_name_is_not_found() {
        let api = Arc::new(FakeApi::with(staff()));
        let (status, _) = post_form(app(api.clone()), "/delete", "name=Nobody").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(api.mutations().is_empty());
    }
}
