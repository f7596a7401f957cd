//! reqwest implementation of [`EmployeeApi`]

use async_trait::async_trait;
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::{ClientError, EmployeeApi};
use crate::employee::{Employee, EmployeeDraft, EmployeeId};

/// Public deployment of the HR API
pub const DEFAULT_BASE_URL: &str = "https://fastapi-hr.onrender.com";

/// Configuration for the HR API client
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the HR API (e.g., "https://fastapi-hr.onrender.com")
    pub base_url: String,
    /// Optional request timeout; requests wait indefinitely when unset
    pub request_timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: None,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Default::default()
        }
    }
}

/// HR API REST client
pub struct HrClient {
    client: Client,
    base_url: String,
}

impl HrClient {
    /// Create a new client with the given configuration
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send one request; no retries
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&EmployeeDraft>,
    ) -> Result<Response, ClientError> {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "HR API request");

        let mut request = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            tracing::warn!(method = %method, url = %url, error = %e, "HR API request failed");
            if e.is_timeout() {
                ClientError::Timeout
            } else if e.is_connect() {
                ClientError::Unavailable(self.base_url.clone())
            } else {
                ClientError::Request(e)
            }
        })?;

        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            tracing::warn!(method = %method, url = %url, status = status.as_u16(), "HR API returned an error");
            Err(ClientError::Api {
                status: status.as_u16(),
                message: text,
            })
        }
    }

    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<&EmployeeDraft>,
    ) -> Result<T, ClientError> {
        let text = self.send(method, path, body).await?.text().await?;
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }

    /// Like `send_json` but tolerates an empty body
    async fn send_value(
        &self,
        method: Method,
        path: &str,
        body: Option<&EmployeeDraft>,
    ) -> Result<serde_json::Value, ClientError> {
        let text = self.send(method, path, body).await?.text().await?;
        if text.trim().is_empty() {
            return Ok(serde_json::Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl EmployeeApi for HrClient {
    async fn create_employee(&self, draft: &EmployeeDraft) -> Result<serde_json::Value, ClientError> {
        let created = self.send_value(Method::POST, "/add/employee", Some(draft)).await?;
        tracing::info!(full_name = %draft.full_name, "Created employee");
        Ok(created)
    }

    async fn list_employees(&self) -> Result<Vec<Employee>, ClientError> {
        let employees: Vec<Employee> = self.send_json(Method::GET, "/employees", None).await?;
        tracing::debug!(count = employees.len(), "Fetched employees");
        Ok(employees)
    }

    async fn update_employee(
        &self,
        id: EmployeeId,
        draft: &EmployeeDraft,
    ) -> Result<serde_json::Value, ClientError> {
        let path = format!("/update/employee/{}", id);
        let updated = self.send_value(Method::PUT, &path, Some(draft)).await?;
        tracing::info!(employee_id = id, "Updated employee");
        Ok(updated)
    }

    async fn delete_employee(&self, id: EmployeeId) -> Result<serde_json::Value, ClientError> {
        let path = format!("/delete/employee/{}", id);
        let deleted = self.send_value(Method::DELETE, &path, None).await?;
        tracing::info!(employee_id = id, "Deleted employee");
        Ok(deleted)
    }

    fn base_url(&self) -> &str {
        &self.base_url
    }
}
