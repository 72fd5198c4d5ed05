use serde::{Deserialize, Serialize};
use rust_decimal::Decimal;

/// Highest salary credited outside the 1st day of a month, with the
/// employee details resolved at query time.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SalaryAnalysisResult {
    pub salary: Decimal,
    pub name: String,
    pub age: i32,
    pub department_name: String,
}
