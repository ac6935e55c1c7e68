use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A staff member joined with the title of their role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StaffMember {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub role_title: String,
    pub country: String,
    pub hire_date: NaiveDate,
    pub salary: f64,
}

impl StaffMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateStaffInput {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub country: String,
    pub salary: f64,
    /// Defaults to today's local date.
    pub hire_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStaffInput {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub role_id: Option<i64>,
    pub country: Option<String>,
    pub salary: Option<f64>,
    pub hire_date: Option<NaiveDate>,
}
