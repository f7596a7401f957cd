//! Delete Employee Routes
//!
//! - GET /delete?name= - Pick an employee to delete
//! - POST /delete - Delete the employee with the selected name
//!
//! The selected name is resolved against a fresh list and the matching
//! record's own id is deleted; list positions are never used.

use axum::{
    extract::{Query, State},
    response::Html,
    Form,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::employee::{find_by_name, Employee};
use crate::web::error::{WebError, WebResult};
use crate::web::routes::NameQuery;
use crate::web::state::AppState;
use crate::web::view::{page_context, Notice, View};

/// Delete form body
#[derive(Debug, Deserialize)]
pub struct DeleteForm {
    pub name: String,
}

/// GET /delete
pub async fn delete_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> WebResult<Html<String>> {
    let employees = state.api.list_employees().await?;

    let selected_name = match query.name {
        Some(name) => {
            if find_by_name(&employees, &name).is_none() {
                return Err(WebError::NotFound(format!("Employee '{}' not found", name)));
            }
            Some(name)
        }
        None => employees.first().map(|e| e.full_name.clone()),
    };

    render(&state, &employees, selected_name.as_deref(), None)
}

/// POST /delete
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Form(form): Form<DeleteForm>,
) -> WebResult<Html<String>> {
    let employees = state.api.list_employees().await?;
    let employee = find_by_name(&employees, &form.name)
        .ok_or_else(|| WebError::NotFound(format!("Employee '{}' not found", form.name)))?;

    state.api.delete_employee(employee.id).await?;

    let remaining = state.api.list_employees().await?;
    let selected_name = remaining.first().map(|e| e.full_name.clone());
    render(
        &state,
        &remaining,
        selected_name.as_deref(),
        Some(Notice::success("Employee deleted successfully!")),
    )
}

fn render(
    state: &AppState,
    employees: &[Employee],
    selected_name: Option<&str>,
    notice: Option<Notice>,
) -> WebResult<Html<String>> {
    // An empty list after a delete still shows the success banner
    let notice = notice.or_else(|| employees.is_empty().then(Notice::no_employees));

    let names: Vec<&str> = employees.iter().map(|e| e.full_name.as_str()).collect();

    let mut context = page_context(View::Delete, notice.as_ref());
    context.insert("names", &names);
    context.insert("selected_name", selected_name.unwrap_or_default());

    state.render("delete.html", &context)
}
