use async_trait::async_trait;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::models::department::{Department, NewDepartment};
use crate::models::employee::{Employee, NewEmployee};
use crate::models::payment::{NewPayment, Payment};

pub mod memory;
pub mod postgres;

pub use memory::InMemorySalaryRepository;
pub use postgres::PgSalaryRepository;

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Data access for departments, employees and payments.
///
/// Every "not first day" lookup excludes payments whose timestamp falls on
/// day-of-month 1 and orders by amount descending, earliest inserted first
/// among equal amounts.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SalaryRepository: Send + Sync {
    async fn find_highest_payment_not_on_first_day(&self) -> RepositoryResult<Option<Payment>>;

    async fn find_payments_not_on_first_day(&self) -> RepositoryResult<Vec<Payment>>;

    async fn find_max_amount_not_on_first_day(&self) -> RepositoryResult<Option<Decimal>>;

    async fn find_employee_by_id(&self, emp_id: i64) -> RepositoryResult<Option<Employee>>;

    async fn find_department_by_id(&self, department_id: i64) -> RepositoryResult<Option<Department>>;

    /// Append-only; no dedup against existing rows.
    async fn insert_departments(&self, departments: Vec<NewDepartment>) -> RepositoryResult<Vec<Department>>;

    async fn insert_employees(&self, employees: Vec<NewEmployee>) -> RepositoryResult<Vec<Employee>>;

    async fn insert_payments(&self, payments: Vec<NewPayment>) -> RepositoryResult<Vec<Payment>>;
}
