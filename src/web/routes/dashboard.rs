//! Dashboard Route
//!
//! - GET / - Employee table, salary metrics and charts

use axum::{extract::State, response::Html};
use serde::Serialize;
use std::sync::Arc;

use crate::charts::{self, BarChart};
use crate::employee::Employee;
use crate::stats::{self, SalaryMetrics};
use crate::web::error::WebResult;
use crate::web::state::AppState;
use crate::web::view::{page_context, Notice, View};

/// Table row; the id column is not shown
#[derive(Debug, Serialize)]
struct EmployeeRow<'a> {
    full_name: &'a str,
    email: &'a str,
    gender: &'static str,
    job_title: &'a str,
    salary: String,
}

#[derive(Debug, Serialize)]
struct MetricCard {
    label: &'static str,
    value: String,
}

#[derive(Debug, Serialize)]
struct RenderedChart {
    title: String,
    svg: String,
}

/// GET /
pub async fn dashboard(State(state): State<Arc<AppState>>) -> WebResult<Html<String>> {
    let employees = state.api.list_employees().await?;

    let notice = employees.is_empty().then(Notice::no_employees);
    let mut context = page_context(View::Dashboard, notice.as_ref());

    let rows: Vec<EmployeeRow> = employees.iter().map(employee_row).collect();
    let cards = stats::salary_metrics(&employees)
        .map(metric_cards)
        .unwrap_or_default();
    let charts: Vec<RenderedChart> = dashboard_charts(&employees)
        .iter()
        .map(|chart| RenderedChart {
            title: chart.title.clone(),
            svg: chart.to_svg(),
        })
        .collect();

    context.insert("rows", &rows);
    context.insert("cards", &cards);
    context.insert("charts", &charts);

    state.render("dashboard.html", &context)
}

fn employee_row(employee: &Employee) -> EmployeeRow<'_> {
    EmployeeRow {
        full_name: &employee.full_name,
        email: &employee.email,
        gender: employee.gender.as_str(),
        job_title: &employee.job_title,
        salary: format!("{:.2}", employee.salary),
    }
}

fn metric_cards(metrics: SalaryMetrics) -> Vec<MetricCard> {
    vec![
        MetricCard {
            label: "Total Employees",
            value: metrics.count.to_string(),
        },
        MetricCard {
            label: "Average Salary",
            value: stats::format_money(metrics.mean),
        },
        MetricCard {
            label: "Highest Salary",
            value: stats::format_money(metrics.max),
        },
        MetricCard {
            label: "Lowest Salary",
            value: stats::format_money(metrics.min),
        },
    ]
}

fn dashboard_charts(employees: &[Employee]) -> Vec<BarChart> {
    if employees.is_empty() {
        return Vec::new();
    }
    vec![
        charts::gender_chart(employees),
        charts::job_title_chart(employees),
        charts::salary_by_job_title_chart(employees),
    ]
}
