//! # Roster
//!
//! Employee management dashboard over a remote HR REST API.
//!
//! Roster owns no data. Every view fetches the employee list from the HR
//! API, and every create, update or delete is forwarded to it.
//!
//! ## Modules
//!
//! - [`employee`]: Employee record, draft payload and gender enum
//! - [`client`]: HR API client and the [`EmployeeApi`] trait
//! - [`stats`]: Salary metrics and categorical aggregations
//! - [`charts`]: Bar chart builders rendered as SVG
//! - [`forms`]: Form input and presence validation
//! - [`markup`]: HTML/XML text escaping
//! - [`web`]: Server-rendered dashboard with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use roster::client::{ClientConfig, EmployeeApi, HrClient};
//! use roster::stats;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = HrClient::new(ClientConfig::default())?;
//!
//!     let employees = client.list_employees().await?;
//!     if let Some(metrics) = stats::salary_metrics(&employees) {
//!         println!(
//!             "{} employees, average salary {}",
//!             metrics.count,
//!             stats::format_money(metrics.mean)
//!         );
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod client;
pub mod config;
pub mod employee;
pub mod forms;
pub mod markup;
pub mod stats;
pub mod web;

pub use client::{ClientConfig, ClientError, EmployeeApi, HrClient};

pub use employee::{Employee, EmployeeDraft, EmployeeId, Gender};

pub use forms::{EmployeeForm, FormError};

pub use stats::{CategoryCount, GroupAverage, SalaryMetrics};

pub use charts::{Bar, BarChart};

pub use web::{build_router, serve, AppState, WebError};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, ServerConfig};
