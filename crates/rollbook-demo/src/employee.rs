//! Employee rows and their table columns.

use std::path::Path;

use anyhow::{Context, Result};
use rollbook::columns::{currency_column, date_column, text_column};
use rollbook::ColumnDef;
use rollbook_seeker::{Number, Seekable, Value};
use serde::{Deserialize, Serialize};

/// One employee record as stored in the JSON input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub uid: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub employment_date: Option<String>,
    #[serde(default)]
    pub daily_rate: Option<f64>,
}

impl Seekable for Employee {
    fn seeker_field_value(&self, field: &str) -> Value<'_> {
        match field {
            "uid" => Value::String(&self.uid),
            "first_name" => Value::String(&self.first_name),
            "last_name" => Value::String(&self.last_name),
            "employment_date" => self
                .employment_date
                .as_deref()
                .map(Value::String)
                .unwrap_or(Value::None),
            "daily_rate" => self
                .daily_rate
                .map(|n| Value::Number(Number::F64(n)))
                .unwrap_or(Value::None),
            _ => Value::None,
        }
    }
}

/// Columns shown for employees.
pub fn employee_columns() -> Vec<ColumnDef<Employee>> {
    vec![
        text_column("first_name", "First Name"),
        text_column("last_name", "Last Name"),
        date_column("employment_date", "Employment Date"),
        currency_column("daily_rate", "Daily Rate"),
    ]
}

/// Reads a JSON array of employees.
pub fn load_employees(path: &Path) -> Result<Vec<Employee>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let employees: Vec<Employee> = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse employees from {}", path.display()))?;
    log::debug!("loaded {} employee(s) from {}", employees.len(), path.display());
    Ok(employees)
}
