use serde::{Deserialize, Serialize};

#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub department_id: i64,
    pub department_name: String,
}

#[derive(Debug, Clone)]
pub struct NewDepartment {
    pub department_name: String,
}

impl NewDepartment {
    pub fn new(department_name: &str) -> Self {
        Self {
            department_name: department_name.to_string(),
        }
    }
}
