use log::{error, info};
use thiserror::Error;

use crate::services::salary::HIGHEST_SALARY_SQL;

/// Problem A: for each employee, count colleagues in the same department
/// who are younger.
pub const YOUNGER_EMPLOYEES_SQL: &str = "SELECT \
    e.EMP_ID, \
    e.FIRST_NAME, \
    e.LAST_NAME, \
    d.DEPARTMENT_NAME, \
    (SELECT COUNT(*) \
    FROM employees e2 \
    WHERE e2.DEPARTMENT = e.DEPARTMENT \
    AND e2.DOB > e.DOB) AS YOUNGER_EMPLOYEES_COUNT \
    FROM employees e \
    JOIN departments d ON e.DEPARTMENT = d.DEPARTMENT_ID \
    ORDER BY e.EMP_ID DESC";

pub const FALLBACK_SQL: &str = "SELECT 'Error occurred while generating query' as message";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Odd registration suffix.
    EmployeeAgeRank,
    /// Even registration suffix.
    HighestSalary,
}

impl Problem {
    pub fn query(&self) -> &'static str {
        match self {
            Problem::EmployeeAgeRank => YOUNGER_EMPLOYEES_SQL,
            Problem::HighestSalary => HIGHEST_SALARY_SQL,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SolverError {
    #[error("registration number {0:?} is shorter than two characters")]
    TooShort(String),

    #[error("registration number suffix {0:?} is not numeric")]
    NotNumeric(String),
}

pub fn select_problem(reg_no: &str) -> Result<Problem, SolverError> {
    let chars: Vec<char> = reg_no.chars().collect();
    if chars.len() < 2 {
        return Err(SolverError::TooShort(reg_no.to_string()));
    }
    let suffix: String = chars[chars.len() - 2..].iter().collect();
    let digits: i32 = suffix
        .parse()
        .map_err(|_| SolverError::NotNumeric(suffix.clone()))?;

    info!("Registration number: {}, last two digits: {}", reg_no, digits);
    if digits % 2 != 0 {
        Ok(Problem::EmployeeAgeRank)
    } else {
        Ok(Problem::HighestSalary)
    }
}

/// Never fails: an unusable registration number yields `FALLBACK_SQL`.
pub fn query_for(reg_no: &str) -> String {
    match select_problem(reg_no) {
        Ok(problem) => {
            info!("Selected {:?} for registration number {}", problem, reg_no);
            problem.query().to_string()
        }
        Err(err) => {
            error!("Error solving SQL problem: {}", err);
            FALLBACK_SQL.to_string()
        }
    }
}
