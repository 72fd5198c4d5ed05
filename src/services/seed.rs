use chrono::{NaiveDate, NaiveDateTime};
use log::info;
use rust_decimal::Decimal;

use crate::models::department::NewDepartment;
use crate::models::employee::NewEmployee;
use crate::models::payment::NewPayment;
use crate::repository::{RepositoryResult, SalaryRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub departments: usize,
    pub employees: usize,
    pub payments: usize,
}

const DEPARTMENTS: [&str; 6] = ["HR", "Finance", "Engineering", "Sales", "Marketing", "IT"];

// (first, last, (y, m, d), gender, department)
const EMPLOYEES: [(&str, &str, (i32, u32, u32), &str, i64); 10] = [
    ("John", "Williams", (1980, 5, 15), "Male", 3),
    ("Sarah", "Johnson", (1990, 7, 20), "Female", 2),
    ("Michael", "Smith", (1985, 2, 10), "Male", 3),
    ("Emily", "Brown", (1992, 11, 30), "Female", 4),
    ("David", "Jones", (1988, 9, 5), "Male", 5),
    ("Olivia", "Davis", (1995, 4, 12), "Female", 1),
    ("James", "Wilson", (1983, 3, 25), "Male", 6),
    ("Sophia", "Anderson", (1991, 8, 17), "Female", 4),
    ("Liam", "Miller", (1979, 12, 1), "Male", 1),
    ("Emma", "Taylor", (1993, 6, 28), "Female", 5),
];

// (employee, whole amount, "timestamp")
const PAYMENTS: [(i64, i64, &str); 16] = [
    (2, 65784, "2025-01-01 13:44:12.824"),
    (4, 62736, "2025-01-06 18:36:37.892"),
    (1, 69437, "2025-01-01 10:19:21.563"),
    (3, 67183, "2025-01-02 17:21:57.341"),
    (2, 66273, "2025-02-01 11:49:15.764"),
    (5, 71475, "2025-01-01 07:24:14.453"),
    (1, 70837, "2025-02-03 19:11:31.553"),
    (6, 69628, "2025-01-02 10:41:15.113"),
    (4, 71876, "2025-02-01 12:16:47.807"),
    (3, 70098, "2025-02-03 10:11:17.341"),
    (6, 67827, "2025-02-02 19:21:27.753"),
    (5, 69871, "2025-02-05 17:54:17.453"),
    (2, 72984, "2025-03-05 09:37:35.974"),
    (1, 67982, "2025-03-01 06:09:51.983"),
    (6, 70198, "2025-03-02 10:34:35.753"),
    (4, 74998, "2025-03-02 09:27:26.162"),
];

pub fn sample_departments() -> Vec<NewDepartment> {
    DEPARTMENTS.iter().map(|name| NewDepartment::new(name)).collect()
}

pub fn sample_employees() -> Vec<NewEmployee> {
    EMPLOYEES
        .iter()
        .filter_map(|(first, last, (y, m, d), gender, department)| {
            let dob = NaiveDate::from_ymd_opt(*y, *m, *d)?;
            Some(NewEmployee::new(first, last, dob, gender, *department))
        })
        .collect()
}

pub fn sample_payments() -> Vec<NewPayment> {
    PAYMENTS
        .iter()
        .filter_map(|(emp_id, amount, time)| {
            let payment_time = NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S%.3f").ok()?;
            // stored with two decimal places, like NUMERIC(12, 2)
            Some(NewPayment::new(*emp_id, Decimal::new(amount * 100, 2), payment_time))
        })
        .collect()
}

/// Bulk-inserts the fixed sample set. Append-only: running it twice
/// doubles every table.
pub async fn populate_sample_data(repository: &dyn SalaryRepository) -> RepositoryResult<SeedSummary> {
    let departments = repository.insert_departments(sample_departments()).await?;
    info!("Populated {} department records successfully", departments.len());

    let employees = repository.insert_employees(sample_employees()).await?;
    info!("Populated {} employee records successfully", employees.len());

    let payments = repository.insert_payments(sample_payments()).await?;
    info!("Populated {} payment records successfully", payments.len());

    Ok(SeedSummary {
        departments: departments.len(),
        employees: employees.len(),
        payments: payments.len(),
    })
}
