//! Page Routes
//!
//! One handler module per sidebar view, plus health checks.

pub mod add;
pub mod dashboard;
pub mod delete;
pub mod edit;
pub mod health;

use serde::Deserialize;

/// `?name=` selection used by the edit and delete views
#[derive(Debug, Default, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    pub name: Option<String>,
}
