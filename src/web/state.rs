//! Application State
//!
//! Shared state accessible by all page handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use axum::response::Html;
use std::sync::Arc;
use std::time::Instant;
use tera::{Context, Tera};

use crate::client::EmployeeApi;
use crate::web::error::WebResult;
use crate::web::templates::load_templates;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Remote HR API the views delegate to
    pub api: Arc<dyn EmployeeApi>,
    /// Parsed page templates
    pub templates: Arc<Tera>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create state around an API client, parsing the embedded templates
    pub fn new(api: Arc<dyn EmployeeApi>) -> Result<Self, tera::Error> {
        Ok(Self {
            api,
            templates: Arc::new(load_templates()?),
            start_time: Instant::now(),
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }

    /// Render a page template
    pub fn render(&self, template: &str, context: &Context) -> WebResult<Html<String>> {
        Ok(Html(self.templates.render(template, context)?))
    }
}
