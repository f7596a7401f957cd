//! Bar charts for the dashboard
//!
//! Each builder turns an aggregation from [`crate::stats`] into a
//! [`BarChart`], which renders itself as inline SVG.

use serde::Serialize;
use std::fmt::Write;

use crate::employee::Employee;
use crate::markup::escape;
use crate::stats;

/// Bar colors, cycled per bar
const BAR_COLORS: [&str; 6] = [
    "#FF9800", // Orange (primary)
    "#4CAF50", // Green
    "#2196F3", // Blue
    "#9C27B0", // Purple
    "#F44336", // Red
    "#00BCD4", // Cyan
];

const WIDTH: f64 = 640.0;
const BAR_HEIGHT: f64 = 28.0;
const BAR_GAP: f64 = 10.0;
const LABEL_WIDTH: f64 = 180.0;
const VALUE_WIDTH: f64 = 110.0;
const PADDING: f64 = 12.0;

/// A single labelled bar
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Horizontal bar chart
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChart {
    pub title: String,
    pub bars: Vec<Bar>,
    /// Prefix money values with `$` and show cents
    pub money: bool,
}

impl BarChart {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            bars: Vec::new(),
            money: false,
        }
    }

    /// Builder method: add a bar
    pub fn bar(mut self, label: impl Into<String>, value: f64) -> Self {
        self.bars.push(Bar {
            label: label.into(),
            value,
        });
        self
    }

    /// Builder method: format values as money
    pub fn money(mut self) -> Self {
        self.money = true;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    fn max_value(&self) -> f64 {
        self.bars.iter().map(|b| b.value).fold(0.0, f64::max)
    }

    fn format_value(&self, value: f64) -> String {
        if self.money {
            stats::format_money(value)
        } else if value.fract() == 0.0 {
            format!("{:.0}", value)
        } else {
            format!("{:.2}", value)
        }
    }

    /// Render as a standalone `<svg>` element
    pub fn to_svg(&self) -> String {
        let rows = self.bars.len() as f64;
        let height = (PADDING * 2.0 + rows * (BAR_HEIGHT + BAR_GAP)).max(PADDING * 2.0 + BAR_HEIGHT);
        let plot_width = WIDTH - LABEL_WIDTH - VALUE_WIDTH - PADDING * 2.0;
        let max = self.max_value();

        let mut svg = String::new();
        // Writing to a String cannot fail
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" class="chart" viewBox="0 0 {w} {h}" width="100%" role="img" aria-label="{title}">"#,
            w = WIDTH,
            h = height,
            title = escape(&self.title),
        );

        for (idx, bar) in self.bars.iter().enumerate() {
            let y = PADDING + idx as f64 * (BAR_HEIGHT + BAR_GAP);
            let width = if max > 0.0 { bar.value / max * plot_width } else { 0.0 };
            let color = BAR_COLORS[idx % BAR_COLORS.len()];
            let text_y = y + BAR_HEIGHT / 2.0 + 5.0;

            let _ = write!(
                svg,
                r#"<text x="{lx}" y="{ty}" text-anchor="end" class="chart-label">{label}</text><rect x="{bx}" y="{y}" width="{bw:.1}" height="{bh}" rx="4" fill="{color}"/><text x="{vx:.1}" y="{ty}" class="chart-value">{value}</text>"#,
                lx = PADDING + LABEL_WIDTH - 8.0,
                ty = text_y,
                label = escape(&bar.label),
                bx = PADDING + LABEL_WIDTH,
                y = y,
                bw = width,
                bh = BAR_HEIGHT,
                color = color,
                vx = PADDING + LABEL_WIDTH + width + 8.0,
                value = escape(&self.format_value(bar.value)),
            );
        }

        svg.push_str("</svg>");
        svg
    }
}

/// Count of employees per gender
pub fn gender_chart(employees: &[Employee]) -> BarChart {
    stats::gender_counts(employees)
        .into_iter()
        .fold(BarChart::new("Gender Distribution"), |chart, c| {
            chart.bar(c.label, c.count as f64)
        })
}

/// Count of employees per job title
pub fn job_title_chart(employees: &[Employee]) -> BarChart {
    stats::job_title_counts(employees)
        .into_iter()
        .fold(BarChart::new("Employees per Job Title"), |chart, c| {
            chart.bar(c.label, c.count as f64)
        })
}

/// Average salary per job title
pub fn salary_by_job_title_chart(employees: &[Employee]) -> BarChart {
    stats::average_salary_by_job_title(employees)
        .into_iter()
        .fold(
            BarChart::new("Salary Distribution by Job Title").money(),
            |chart, g| chart.bar(g.label, g.mean),
        )
}
