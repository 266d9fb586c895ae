//! Human-readable operation transcript
//!
//! Every line is kept in memory and also emitted as a `tracing` event under
//! [`TRANSCRIPT_TARGET`], so a subscriber layer can route the transcript to a
//! log file for display after the run.

use crate::contract::Employee;

/// Tracing target carrying transcript lines
pub const TRANSCRIPT_TARGET: &str = "orm_transcript";

/// Ordered log of what the demo did and saw
#[derive(Debug, Clone, Default)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one line
    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!(target: TRANSCRIPT_TARGET, "{}", line);
        self.lines.push(line);
    }

    /// Append a step heading surrounded by blank lines
    pub fn section(&mut self, heading: &str) {
        self.log("");
        self.log(format!("-- {} --", heading));
        self.log("");
    }

    /// Append the attributes of one employee
    pub fn object(&mut self, employee: &Employee) {
        for line in render_employee(employee) {
            self.log(line);
        }
    }

    /// Append a result set, preceded by its size
    pub fn results(&mut self, employees: &[Employee]) {
        self.log(format!("Number of objects: {}", employees.len()));
        for employee in employees {
            self.object(employee);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Whole transcript, newline separated
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

fn render_employee(employee: &Employee) -> Vec<String> {
    let id = employee
        .id
        .map_or_else(|| "<unset>".to_string(), |id| id.to_string());
    vec![
        "Employee {".to_string(),
        format!("  id={}", id),
        format!("  name={}", employee.name),
        format!("  date_of_birth={}", employee.date_of_birth),
        format!("  exempt={}", employee.exempt),
        format!("  compensation={:.2}", employee.compensation),
        "}".to_string(),
    ]
}
