//! Add Employee Routes
//!
//! - GET /add - Empty form
//! - POST /add - Validate and create

use axum::{extract::State, http::StatusCode, response::Html, Form};
use std::sync::Arc;

use crate::forms::EmployeeForm;
use crate::web::error::WebResult;
use crate::web::state::AppState;
use crate::web::view::{insert_form, page_context, Notice, View};

/// GET /add
pub async fn add_form(State(state): State<Arc<AppState>>) -> WebResult<Html<String>> {
    render(&state, &EmployeeForm::default(), None)
}

/// POST /add
///
/// The HR API is only called once every field is filled in.
pub async fn add_employee(
    State(state): State<Arc<AppState>>,
    Form(form): Form<EmployeeForm>,
) -> WebResult<(StatusCode, Html<String>)> {
    let draft = match form.validate() {
        Ok(draft) => draft,
        Err(e) => {
            tracing::debug!(error = %e, "Rejected add form");
            let page = render(&state, &form, Some(&Notice::error(e.to_string())))?;
            return Ok((StatusCode::UNPROCESSABLE_ENTITY, page));
        }
    };

    state.api.create_employee(&draft).await?;

    let page = render(
        &state,
        &EmployeeForm::default(),
        Some(&Notice::success("New employee added successfully!")),
    )?;
    Ok((StatusCode::OK, page))
}

fn render(state: &AppState, form: &EmployeeForm, notice: Option<&Notice>) -> WebResult<Html<String>> {
    let mut context = page_context(View::Add, notice);
    insert_form(&mut context, form);
    state.render("add.html", &context)
}
