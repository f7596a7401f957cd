//! Menu and page scaffolding shared by every view

use serde::Serialize;
use tera::Context;

use crate::employee::{Gender, SALARY_MAX, SALARY_MIN};
use crate::forms::EmployeeForm;

/// The four dashboard views, in sidebar order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Add,
    Edit,
    Delete,
}

impl View {
    pub fn all() -> &'static [View] {
        &[View::Dashboard, View::Add, View::Edit, View::Delete]
    }

    /// Sidebar label
    pub fn label(&self) -> &'static str {
        match self {
            View::Dashboard => "Employees Dashboard",
            View::Add => "Add Employee",
            View::Edit => "Edit Employee",
            View::Delete => "Delete Employee",
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/",
            View::Add => "/add",
            View::Edit => "/edit",
            View::Delete => "/delete",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            View::Dashboard => "📊",
            View::Add => "➕",
            View::Edit => "✏️",
            View::Delete => "❌",
        }
    }

    /// Page header
    pub fn title(&self) -> &'static str {
        match self {
            View::Dashboard => "Employees Management Dashboard",
            View::Add => "Add New Employee",
            View::Edit => "Edit Employee",
            View::Delete => "Delete Employee",
        }
    }
}

#[derive(Debug, Serialize)]
struct MenuItem {
    label: &'static str,
    path: &'static str,
    icon: &'static str,
    active: bool,
}

/// Banner shown after an interaction
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Error,
    Info,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }

    /// Shown whenever the remote list comes back empty
    pub fn no_employees() -> Self {
        Self::info("No employee in database")
    }
}

/// Template context with the sidebar, header and optional notice filled in
pub fn page_context(view: View, notice: Option<&Notice>) -> Context {
    let menu: Vec<MenuItem> = View::all()
        .iter()
        .map(|v| MenuItem {
            label: v.label(),
            path: v.path(),
            icon: v.icon(),
            active: *v == view,
        })
        .collect();

    let mut context = Context::new();
    context.insert("menu", &menu);
    context.insert("title", view.title());
    context.insert("notice", &notice);
    context
}

/// Add the employee form and its widget settings to a context
pub fn insert_form(context: &mut Context, form: &EmployeeForm) {
    let genders: Vec<&str> = Gender::all().iter().map(|g| g.as_str()).collect();

    context.insert("form", form);
    context.insert("genders", &genders);
    context.insert("salary_min", &SALARY_MIN);
    context.insert("salary_max", &SALARY_MAX);
}
