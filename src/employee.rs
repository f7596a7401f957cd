//! Employee data types
//!
//! The remote HR API owns every employee record. These types are the
//! snapshots the dashboard fetches and the payloads it sends back:
//! - `Employee`: a record as returned by `GET /employees`
//! - `EmployeeDraft`: the body of create and update requests (no id)
//! - `Gender`: the two values the API accepts

use serde::{Deserialize, Serialize};

/// Server-assigned employee identifier
pub type EmployeeId = i64;

/// Lowest salary the forms accept
pub const SALARY_MIN: f64 = 300.0;

/// Highest salary the forms accept
pub const SALARY_MAX: f64 = 1_000_000.0;

/// An employee record fetched from the remote API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Employee {
    /// Identifier assigned by the remote service
    pub id: EmployeeId,
    pub full_name: String,
    pub email: String,
    pub gender: Gender,
    /// Free text, used as the grouping key for charts
    pub job_title: String,
    pub salary: f64,
}

impl Employee {
    /// Strip the identifier, yielding the editable part of the record
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            gender: self.gender,
            job_title: self.job_title.clone(),
            salary: self.salary,
        }
    }
}

/// Employee payload for create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeDraft {
    pub full_name: String,
    pub email: String,
    pub gender: Gender,
    pub job_title: String,
    pub salary: f64,
}

impl EmployeeDraft {
    /// Attach a server identifier to this draft
    pub fn with_id(self, id: EmployeeId) -> Employee {
        Employee {
            id,
            full_name: self.full_name,
            email: self.email,
            gender: self.gender,
            job_title: self.job_title,
            salary: self.salary,
        }
    }
}

/// Gender as the remote API spells it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// All variants, in the order the forms list them
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

/// Find the first employee whose full name matches exactly
///
/// Names are not unique in the remote store; like the select boxes in the
/// dashboard, the first match wins.
pub fn find_by_name<'a>(employees: &'a [Employee], full_name: &str) -> Option<&'a Employee> {
    employees.iter().find(|e| e.full_name == full_name)
}
