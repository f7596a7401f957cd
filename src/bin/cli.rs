//! Roster CLI
//!
//! Command-line interface for the HR API:
//! - List employees
//! - Show salary metrics and breakdowns
//! - Add, edit and delete employees
//! - Export the employee list as CSV

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use roster::client::{ClientConfig, EmployeeApi, HrClient};
use roster::config::Config;
use roster::employee::{find_by_name, Employee};
use roster::forms::EmployeeForm;
use roster::stats;

#[derive(Parser)]
#[command(name = "roster-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Manage employees through the HR API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// HR API base URL (overrides config and ROSTER_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Output format (table, json)
    #[arg(short, long, default_value = "table", global = true)]
    pub format: String,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List all employees
    List,

    /// Show salary metrics and breakdowns
    Stats,

    /// Add a new employee
    Add {
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        email: String,
        /// Male or Female
        #[arg(long)]
        gender: String,
        #[arg(long)]
        job_title: String,
        /// Between 300 and 1000000
        #[arg(long)]
        salary: String,
    },

    /// Edit the employee with the given full name
    Edit {
        /// Current full name
        name: String,
        #[arg(long)]
        full_name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        gender: Option<String>,
        #[arg(long)]
        job_title: Option<String>,
        #[arg(long)]
        salary: Option<String>,
    },

    /// Delete the employee with the given full name
    Delete {
        name: String,
    },

    /// Export employees as CSV
    Export {
        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let mut stdout = std::io::stdout();

    // Generating a config must work even when the current one is broken
    let command = match cli.command {
        Commands::Config { output } => return write_default_config(output.as_deref(), &mut stdout),
        other => other,
    };

    let config = Config::load_default()?;
    let client = HrClient::new(client_config(&config, cli.api_url.as_deref()))?;
    tracing::debug!(api_url = %client.base_url(), "Using HR API");

    run(command, &client, cli.format == "json", &mut stdout).await
}

/// Warnings and errors go to stderr; `RUST_LOG` raises the level
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Client settings from config, with `--api-url` taking precedence
fn client_config(config: &Config, api_url: Option<&str>) -> ClientConfig {
    let mut client_config = config.api.client_config();
    if let Some(url) = api_url {
        client_config.base_url = url.to_string();
    }
    client_config
}

/// Execute one command against the HR API, writing results to `out`
async fn run(
    command: Commands,
    api: &dyn EmployeeApi,
    json: bool,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    match command {
        Commands::List => {
            let employees = api.list_employees().await?;

            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&employees)?)?;
            } else if employees.is_empty() {
                writeln!(out, "No employee in database")?;
            } else {
                print_employees(out, &employees)?;
            }
        }

        Commands::Stats => {
            let employees = api.list_employees().await?;
            print_stats(out, &employees, json)?;
        }

        Commands::Add {
            full_name,
            email,
            gender,
            job_title,
            salary,
        } => {
            let form = EmployeeForm {
                id: None,
                full_name,
                email,
                gender,
                job_title,
                salary,
            };
            let draft = form.validate()?;

            let created = api.create_employee(&draft).await?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&created)?)?;
            } else {
                writeln!(out, "New employee added successfully!")?;
            }
        }

        Commands::Edit {
            name,
            full_name,
            email,
            gender,
            job_title,
            salary,
        } => {
            let employees = api.list_employees().await?;
            let employee = match find_by_name(&employees, &name) {
                Some(e) => e,
                None => bail!("Employee '{}' not found", name),
            };

            let mut form = EmployeeForm::from_employee(employee);
            if let Some(v) = full_name {
                form.full_name = v;
            }
            if let Some(v) = email {
                form.email = v;
            }
            if let Some(v) = gender {
                form.gender = v;
            }
            if let Some(v) = job_title {
                form.job_title = v;
            }
            if let Some(v) = salary {
                form.salary = v;
            }
            let draft = form.validate()?;

            let updated = api.update_employee(employee.id, &draft).await?;
            if json {
                writeln!(out, "{}", serde_json::to_string_pretty(&updated)?)?;
            } else {
                writeln!(out, "Employee updated successfully!")?;
            }
        }

        Commands::Delete { name } => {
            let employees = api.list_employees().await?;
            let employee = match find_by_name(&employees, &name) {
                Some(e) => e,
                None => bail!("Employee '{}' not found", name),
            };

            api.delete_employee(employee.id).await?;
            writeln!(
                out,
                "Employee deleted successfully! ({}, id {})",
                employee.full_name, employee.id
            )?;
        }

        Commands::Export { output } => {
            let employees = api.list_employees().await?;

            match output {
                Some(path) => {
                    let file = std::fs::File::create(&path)
                        .with_context(|| format!("Cannot create {:?}", path))?;
                    write_csv(file, &employees)?;
                    writeln!(out, "Exported {} employees to {:?}", employees.len(), path)?;
                }
                None => write_csv(&mut *out, &employees)?,
            }
        }

        Commands::Config { output } => write_default_config(output.as_deref(), out)?,
    }

    Ok(())
}

fn write_default_config(output: Option<&Path>, out: &mut dyn Write) -> anyhow::Result<()> {
    let config = roster::config::generate_default_config();

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(path, &config)?;
            writeln!(out, "Config written to {:?}", path)?;
        }
        None => write!(out, "{}", config)?,
    }
    Ok(())
}

fn print_employees(out: &mut dyn Write, employees: &[Employee]) -> std::io::Result<()> {
    writeln!(
        out,
        "{:<24} {:<28} {:<8} {:<20} {:>12}",
        "Full Name", "Email", "Gender", "Job Title", "Salary"
    )?;
    writeln!(out, "{}", "-".repeat(96))?;

    for e in employees {
        writeln!(
            out,
            "{:<24} {:<28} {:<8} {:<20} {:>12.2}",
            e.full_name, e.email, e.gender, e.job_title, e.salary
        )?;
    }
    Ok(())
}

fn print_stats(out: &mut dyn Write, employees: &[Employee], json: bool) -> anyhow::Result<()> {
    let metrics = match stats::salary_metrics(employees) {
        Some(m) => m,
        None => {
            writeln!(out, "No employee in database")?;
            return Ok(());
        }
    };
    let genders = stats::gender_counts(employees);
    let titles = stats::job_title_counts(employees);
    let averages = stats::average_salary_by_job_title(employees);

    if json {
        let body = serde_json::json!({
            "metrics": metrics,
            "gender_counts": genders,
            "job_title_counts": titles,
            "average_salary_by_job_title": averages,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&body)?)?;
        return Ok(());
    }

    writeln!(out, "Total Employees: {}", metrics.count)?;
    writeln!(out, "Average Salary:  {}", stats::format_money(metrics.mean))?;
    writeln!(out, "Highest Salary:  {}", stats::format_money(metrics.max))?;
    writeln!(out, "Lowest Salary:   {}", stats::format_money(metrics.min))?;

    writeln!(out)?;
    writeln!(out, "{:<24} {:>6}", "Gender", "Count")?;
    writeln!(out, "{}", "-".repeat(31))?;
    for c in &genders {
        writeln!(out, "{:<24} {:>6}", c.label, c.count)?;
    }

    writeln!(out)?;
    writeln!(out, "{:<24} {:>6}", "Job Title", "Count")?;
    writeln!(out, "{}", "-".repeat(31))?;
    for c in &titles {
        writeln!(out, "{:<24} {:>6}", c.label, c.count)?;
    }

    writeln!(out)?;
    writeln!(out, "{:<24} {:>14}", "Job Title", "Avg Salary")?;
    writeln!(out, "{}", "-".repeat(39))?;
    for g in &averages {
        writeln!(out, "{:<24} {:>14}", g.label, stats::format_money(g.mean))?;
    }

    Ok(())
}

/// Write employees as CSV, without the server id
fn write_csv<W: Write>(writer: W, employees: &[Employee]) -> anyhow::Result<()> {
    let mut csv = csv::Writer::from_writer(writer);
    for employee in employees {
        csv.serialize(employee.to_draft())?;
    }
    csv.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster::employee::Gender;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn staff_json() -> serde_json::Value {
        serde_json::json!([
            {"id": 10, "full_name": "Bob Stone", "email": "bob@example.com",
             "gender": "Male", "job_title": "Engineer", "salary": 4000.0},
            {"id": 42, "full_name": "Alice Moss", "email": "alice@example.com",
             "gender": "Female", "job_title": "Manager", "salary": 8000.0}
        ])
    }

    async fn server_with_staff() -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/employees"))
            .respond_with(ResponseTemplate::new(200).set_body_json(staff_json()))
            .mount(&server)
            .await;
        server
    }

    fn client_for(server: &MockServer) -> HrClient {
        HrClient::new(ClientConfig::new(server.uri())).unwrap()
    }

    async fn run_to_string(command: Commands, api: &dyn EmployeeApi, json: bool) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(command, api, json, &mut out).await?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_api_url_flag_overrides_config() {
        let mut config = Config::default();
        config.api.base_url = "http://configured".to_string();
        config.api.request_timeout_secs = Some(5);

        let overridden = client_config(&config, Some("http://flag"));
        assert_eq!(overridden.base_url, "http://flag");
        assert_eq!(overridden.request_timeout, Some(std::time::Duration::from_secs(5)));

        assert_eq!(client_config(&config, None).base_url, "http://configured");
    }

    #[test]
    fn test_csv_drops_id_column() {
        let employees = vec![Employee {
            id: 42,
            full_name: "Alice Moss".to_string(),
            email: "alice@example.com".to_string(),
            gender: Gender::Female,
            job_title: "Manager".to_string(),
            salary: 8000.5,
        }];

        let mut buffer = Vec::new();
        write_csv(&mut buffer, &employees).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();

        assert_eq!(lines.next(), Some("full_name,email,gender,job_title,salary"));
        assert_eq!(lines.next(), Some("Alice Moss,alice@example.com,Female,Manager,8000.5"));
        assert_eq!(lines.next(), None);
        assert!(!text.contains("42"));
    }

    #[tokio::test]
    async fn test_export_writes_csv_to_output() {
        let server = server_with_staff().await;
        let out = run_to_string(Commands::Export { output: None }, &client_for(&server), false)
            .await
            .unwrap();

        assert!(out.starts_with("full_name,email,gender,job_title,salary\n"));
        assert!(out.contains("Bob Stone,bob@example.com,Male,Engineer,4000.0"));
    }

    #[tokio::test]
    async fn test_edit_overlays_fields_and_keeps_fetched_id() {
        let server = server_with_staff().await;
        Mock::given(method("PUT"))
            .and(path("/update/employee/42"))
            .and(body_json(serde_json::json!({
                "full_name": "Alice Moss",
                "email": "alice@example.com",
                "gender": "Female",
                "job_title": "Director",
                "salary": 9500.0
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"id": 42})))
            .expect(1)
            .mount(&server)
            .await;

        let command = Commands::Edit {
            name: "Alice Moss".to_string(),
            full_name: None,
            email: None,
            gender: None,
            job_title: Some("Director".to_string()),
            salary: Some("9500".to_string()),
        };
        let out = run_to_string(command, &client_for(&server), false).await.unwrap();

        assert!(out.contains("Employee updated successfully!"));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_edit_unknown_name_fails_without_update() {
        let server = server_with_staff().await;
        let command = Commands::Edit {
            name: "Nobody".to_string(),
            full_name: None,
            email: None,
            gender: None,
            job_title: Some("Director".to_string()),
            salary: None,
        };

        let err = run_to_string(command, &client_for(&server), false).await.unwrap_err();
        assert!(err.to_string().contains("not found"));

        let requests = server.received_requests().await.unwrap();
        assert!(requests.iter().all(|r| r.method.as_str() == "GET"));
    }

    #[tokio::test]
    async fn test_delete_resolves_name_to_id() {
        let server = server_with_staff().await;
        // Alice is second in the list but owns id 42
        Mock::given(method("DELETE"))
            .and(path("/delete/employee/42"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .expect(1)
            .mount(&server)
            .await;

        let out = run_to_string(
            Commands::Delete { name: "Alice Moss".to_string() },
            &client_for(&server),
            false,
        )
        .await
        .unwrap();

        assert!(out.contains("Employee deleted successfully! (Alice Moss, id 42)"));
        server.verify().await;
    }

    #[tokio::test]
    async fn test_add_with_empty_field_sends_nothing() {
        let server = MockServer::start().await;
        let command = Commands::Add {
            full_name: "Dan Hale".to_string(),
            email: String::new(),
            gender: "Male".to_string(),
            job_title: "Clerk".to_string(),
            salary: "500".to_string(),
        };

        let err = run_to_string(command, &client_for(&server), false).await.unwrap_err();
        assert_eq!(err.to_string(), "All fields must be filled!");
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_json_output() {
        let server = server_with_staff().await;
        let out = run_to_string(Commands::List, &client_for(&server), true).await.unwrap();

        let listed: Vec<Employee> = serde_json::from_str(&out).unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[1].id, 42);
    }

    #[tokio::test]
    async fn test_stats_table() {
        let server = server_with_staff().await;
        let out = run_to_string(Commands::Stats, &client_for(&server), false).await.unwrap();

        assert!(out.contains("Total Employees: 2"));
        assert!(out.contains("Average Salary:  $6000.00"));
        assert!(out.contains("Lowest Salary:   $4000.00"));
    }
}
