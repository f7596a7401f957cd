//! Edit Employee Routes
//!
//! - GET /edit?name= - Pick an employee and show the prefilled form
//! - POST /edit - Validate and update
//!
//! The form carries the id fetched when the page was rendered; it is sent
//! back to the HR API unchanged.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Form,
};
use std::sync::Arc;

use crate::employee::{find_by_name, Employee};
use crate::forms::EmployeeForm;
use crate::web::error::{WebError, WebResult};
use crate::web::routes::NameQuery;
use crate::web::state::AppState;
use crate::web::view::{insert_form, page_context, Notice, View};

/// GET /edit
pub async fn edit_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> WebResult<Html<String>> {
    let employees = state.api.list_employees().await?;

    let selected = match query.name.as_deref() {
        Some(name) => Some(
            find_by_name(&employees, name)
                .ok_or_else(|| WebError::NotFound(format!("Employee '{}' not found", name)))?,
        ),
        None => employees.first(),
    };

    let form = selected.map(EmployeeForm::from_employee).unwrap_or_default();
    render(&state, &employees, selected, &form, None)
}

/// POST /edit
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EmployeeForm>,
) -> WebResult<(StatusCode, Html<String>)> {
    let id = form
        .id
        .ok_or_else(|| WebError::BadRequest("Employee id is required".to_string()))?;

    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!(employee_id = id, error = %e, "Rejected edit form");
            let employees = state.api.list_employees().await?;
            let selected = employees.iter().find(|emp| emp.id == id);
            let page = render(
                &state,
                &employees,
                selected,
                &form,
                Some(&Notice::error(e.to_string())),
            )?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page));
        }
    };

    state.api.update_employee(id, &draft).await?;

    // Show the refreshed record so the form reflects what the API stored
    let employees = state.api.list_employees().await?;
    let selected = employees.iter().find(|emp| emp.id == id);
    let form = selected
        .map(EmployeeForm::from_employee)
        .unwrap_or_else(|| form.clone());
    let page = render(
        &state,
        &employees,
        selected,
        &form,
        Some(&Notice::success("Employee updated successfully!")),
    )?;
    Ok((StatusCode::OK, page))
}

fn render(
    state: &AppState,
    employees: &[Employee],
    selected: Option<&Employee>,
    form: &EmployeeForm,
    notice: Option<&Notice>,
) -> WebResult<Html<String>> {
    let notice = match notice {
        Some(n) => Some(n.clone()),
        None if employees.is_empty() => Some(Notice::no_employees()),
        None => None,
    };

    let names: Vec<&str> = employees.iter().map(|e| e.full_name.as_str()).collect();
    let selected_name = selected.map(|e| e.full_name.as_str()).unwrap_or_default();

    let mut context = page_context(View::Edit, notice.as_ref());
    context.insert("names", &names);
    context.insert("selected_name", selected_name);
    insert_form(&mut context, form);

    state.render("edit.html", &context)
}
