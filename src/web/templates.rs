//! Embedded page templates
//!
//! Templates are compiled into the binary so the dashboard runs from any
//! working directory.

use tera::Tera;

const TEMPLATES: [(&str, &str); 6] = [
    ("base.html", include_str!("../../templates/base.html")),
    ("employee_fields.html", include_str!("../../templates/employee_fields.html")),
    ("dashboard.html", include_str!("../../templates/dashboard.html")),
    ("add.html", include_str!("../../templates/add.html")),
    ("edit.html", include_str!("../../templates/edit.html")),
    ("delete.html", include_str!("../../templates/delete.html")),
];

/// Parse all page templates
pub fn load_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    Ok(tera)
}
