//! Aggregation helpers for the dashboard
//!
//! Pure functions over an in-memory employee snapshot. Nothing here talks
//! to the network; the views fetch the list and hand it over.

use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

use crate::employee::Employee;

/// Headline salary figures shown above the charts
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct SalaryMetrics {
    /// Number of employees
    pub count: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

/// Frequency of one categorical value
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CategoryCount {
    pub label: String,
    pub count: usize,
}

/// Mean salary for one group
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GroupAverage {
    pub label: String,
    pub mean: f64,
}

/// Count, mean, max and min of the salary column
///
/// Returns `None` for an empty snapshot.
pub fn salary_metrics(employees: &[Employee]) -> Option<SalaryMetrics> {
    if employees.is_empty() {
        return None;
    }

    let salaries = employees.iter().map(|e| e.salary);
    let sum: f64 = salaries.clone().sum();
    let max = salaries.clone().fold(f64::NEG_INFINITY, f64::max);
    let min = salaries.fold(f64::INFINITY, f64::min);

    Some(SalaryMetrics {
        count: employees.len(),
        mean: sum / employees.len() as f64,
        max,
        min,
    })
}

/// Employees per gender, most frequent first
pub fn gender_counts(employees: &[Employee]) -> Vec<CategoryCount> {
    value_counts(employees.iter().map(|e| e.gender.as_str()))
}

/// Employees per job title, most frequent first
pub fn job_title_counts(employees: &[Employee]) -> Vec<CategoryCount> {
    value_counts(employees.iter().map(|e| e.job_title.as_str()))
}

/// Mean salary per job title, ordered by job title
pub fn average_salary_by_job_title(employees: &[Employee]) -> Vec<GroupAverage> {
    let mut groups: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for employee in employees {
        let entry = groups.entry(employee.job_title.as_str()).or_insert((0.0, 0));
        entry.0 += employee.salary;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(label, (sum, count))| GroupAverage {
            label: label.to_string(),
            mean: sum / count as f64,
        })
        .collect()
}

/// Count occurrences; ties are broken alphabetically so output is stable
fn value_counts<'a>(values: impl Iterator<Item = &'a str>) -> Vec<CategoryCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut result: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(label, count)| CategoryCount {
            label: label.to_string(),
            count,
        })
        .collect();
    result.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.label.cmp(&b.label)));
    result
}

/// Format a salary the way the metric cards show it, e.g. `$1234.50`
pub fn format_money(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Gender;

    fn employee(id: i64, gender: Gender, job: &str, salary: f64) -> Employee {
        Employee {
            id,
            full_name: format!("Employee {}", id),
            email: format!("e{}@example.com", id),
            gender,
            job_title: job.to_string(),
            salary,
        }
    }

    fn staff() -> Vec<Employee> {
        vec![
            employee(1, Gender::Male, "Engineer", 4000.0),
            employee(2, Gender::Female, "Engineer", 6000.0),
            employee(3, Gender::Female, "Designer", 3500.0),
            employee(4, Gender::Female, "Manager", 9000.5),
        ]
    }

    #[test]
    fn test_salary_metrics() {
        let metrics = salary_metrics(&staff()).unwrap();

        assert_eq!(metrics.count, 4);
        assert!((metrics.mean - 5625.125).abs() < 1e-9);
        assert_eq!(metrics.max, 9000.5);
        assert_eq!(metrics.min, 3500.0);
    }

    #[test]
    fn test_salary_metrics_single() {
        let metrics = salary_metrics(&[employee(1, Gender::Male, "Clerk", 300.0)]).unwrap();
        assert_eq!(metrics.count, 1);
        assert_eq!(metrics.mean, 300.0);
        assert_eq!(metrics.max, metrics.min);
    }

    #[test]
    fn test_salary_metrics_empty() {
        assert!(salary_metrics(&[]).is_none());
    }

    #[test]
    fn test_gender_counts_most_frequent_first() {
        let counts = gender_counts(&staff());
        assert_eq!(
            counts,
            vec![
                CategoryCount { label: "Female".into(), count: 3 },
                CategoryCount { label: "Male".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_job_title_counts_ties_alphabetical() {
        let counts = job_title_counts(&staff());
        let labels: Vec<&str> = counts.iter().map(|c| c.label.as_str()).collect();

        assert_eq!(labels, vec!["Engineer", "Designer", "Manager"]);
        assert_eq!(counts[0].count, 2);
    }

    #[test]
    fn test_average_salary_by_job_title() {
        let averages = average_salary_by_job_title(&staff());

        assert_eq!(averages.len(), 3);
        assert_eq!(averages[0], GroupAverage { label: "Designer".into(), mean: 3500.0 });
        assert_eq!(averages[1], GroupAverage { label: "Engineer".into(), mean: 5000.0 });
        assert_eq!(averages[2].label, "Manager");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1234.5), "$1234.50");
        assert_eq!(format_money(300.0), "$300.00");
    }
}
