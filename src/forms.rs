//! Employee form input and presence validation
//!
//! Forms arrive as raw strings (HTML form posts or CLI flags). Nothing is
//! sent to the HR API until [`EmployeeForm::validate`] has produced an
//! [`EmployeeDraft`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::employee::{Employee, EmployeeDraft, EmployeeId, Gender, SALARY_MAX, SALARY_MIN};

/// Raw employee form fields
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EmployeeForm {
    /// Identifier of the employee being edited; absent on the add form
    #[serde(default)]
    pub id: Option<EmployeeId>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub gender: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub salary: String,
}

/// Form validation errors
#[derive(Debug, Error, PartialEq)]
pub enum FormError {
    #[error("All fields must be filled!")]
    MissingFields,

    #[error("Salary must be a number, got '{0}'")]
    InvalidSalary(String),

    #[error("Salary must be between {min} and {max}, got {value}")]
    SalaryOutOfRange { value: f64, min: f64, max: f64 },

    #[error("Gender must be Male or Female, got '{0}'")]
    InvalidGender(String),
}

impl EmployeeForm {
    /// Prefill a form from an existing record
    pub fn from_employee(employee: &Employee) -> Self {
        Self {
            id: Some(employee.id),
            full_name: employee.full_name.clone(),
            email: employee.email.clone(),
            gender: employee.gender.to_string(),
            job_title: employee.job_title.clone(),
            salary: employee.salary.to_string(),
        }
    }

    /// Check that every field is filled in and build the request payload
    pub fn validate(&self) -> Result<EmployeeDraft, FormError> {
        let fields = [
            &self.full_name,
            &self.email,
            &self.gender,
            &self.job_title,
            &self.salary,
        ];
        if fields.iter().any(|f| f.trim().is_empty()) {
            return Err(FormError::MissingFields);
        }

        let salary_text = self.salary.trim();
        let salary: f64 = salary_text
            .parse()
            .map_err(|_| FormError::InvalidSalary(salary_text.to_string()))?;
        if !salary.is_finite() {
            return Err(FormError::InvalidSalary(salary_text.to_string()));
        }
        // A zero salary counts as an unfilled field
        if salary == 0.0 {
            return Err(FormError::MissingFields);
        }
        if !(SALARY_MIN..=SALARY_MAX).contains(&salary) {
            return Err(FormError::SalaryOutOfRange {
                value: salary,
                min: SALARY_MIN,
                max: SALARY_MAX,
            });
        }

        let gender: Gender = self
            .gender
            .parse()
            .map_err(|_| FormError::InvalidGender(self.gender.trim().to_string()))?;

        Ok(EmployeeDraft {
            full_name: self.full_name.trim().to_string(),
            email: self.email.trim().to_string(),
            gender,
            job_title: self.job_title.trim().to_string(),
            salary,
        })
    }
}
