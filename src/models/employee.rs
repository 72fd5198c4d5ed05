use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub emp_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub department: i64,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub dob: NaiveDate,
    pub gender: String,
    pub department: i64,
}

impl NewEmployee {
    pub fn new(first_name: &str, last_name: &str, dob: NaiveDate, gender: &str, department: i64) -> Self {
        Self {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            dob,
            gender: gender.to_string(),
            department,
        }
    }
}
