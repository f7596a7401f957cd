//! Remote HR API Client
//!
//! Every employee operation is delegated to an external REST service:
//!
//! - `POST /add/employee` - Create an employee
//! - `GET /employees` - List all employees
//! - `PUT /update/employee/{id}` - Replace an employee's fields
//! - `DELETE /delete/employee/{id}` - Delete an employee
//!
//! The views depend on the [`EmployeeApi`] trait rather than on
//! [`HrClient`] directly so they can be exercised against a fake.

mod http;

pub use http::{ClientConfig, HrClient, DEFAULT_BASE_URL};

use async_trait::async_trait;
use thiserror::Error;

use crate::employee::{Employee, EmployeeDraft, EmployeeId};

/// Operations the dashboard needs from the remote service
#[async_trait]
pub trait EmployeeApi: Send + Sync {
    /// Create an employee; the service assigns the id
    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<serde_json::Value, ClientError>;

    /// Fetch the full employee list
    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError>;

    /// Replace the fields of the employee with the given id
    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<serde_json::Value, ClientError>;

    /// Delete the employee with the given id
    async fn delete_employee(&self, id: EmployeeId) -> Result<serde_json::Value, ClientError>;

    /// Base URL requests are sent to, for display and health reporting
    fn base_url(&self) -> &str;
}

/// Errors that can occur when talking to the HR API
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HR API unavailable at {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Request timeout")]
    Timeout,

    #[error("Invalid response body: {0}")]
    Decode(String),
}
