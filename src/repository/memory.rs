use async_trait::async_trait;
use rust_decimal::Decimal;
use tokio::sync::RwLock;

use super::{RepositoryResult, SalaryRepository};
use crate::models::department::{Department, NewDepartment};
use crate::models::employee::{Employee, NewEmployee};
use crate::models::payment::{NewPayment, Payment};

#[derive(Default)]
struct Tables {
    departments: Vec<Department>,
    employees: Vec<Employee>,
    payments: Vec<Payment>,
}

/// Process-local store with identity-style ids starting at 1.
#[derive(Default)]
pub struct InMemorySalaryRepository {
    tables: RwLock<Tables>,
}

impl InMemorySalaryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub async fn counts(&self) -> (usize, usize, usize) {
        let tables = self.tables.read().await;
        (tables.departments.len(), tables.employees.len(), tables.payments.len())
    }
}

fn not_on_first_day_desc(payments: &[Payment]) -> Vec<Payment> {
    let mut filtered: Vec<Payment> = payments
        .iter()
        .filter(|p| !p.is_on_first_day())
        .cloned()
        .collect();
    // stable: equal amounts keep insertion order
    filtered.sort_by(|a, b| b.amount.cmp(&a.amount));
    filtered
}

fn next_id(len: usize) -> i64 {
    len as i64 + 1
}

#[async_trait]
impl SalaryRepository for InMemorySalaryRepository {
    async fn find_highest_payment_not_on_first_day(&self) -> RepositoryResult<Option<Payment>> {
        let tables = self.tables.read().await;
        Ok(not_on_first_day_desc(&tables.payments).into_iter().next())
    }

    async fn find_payments_not_on_first_day(&self) -> RepositoryResult<Vec<Payment>> {
        let tables = self.tables.read().await;
        Ok(not_on_first_day_desc(&tables.payments))
    }

    async fn find_max_amount_not_on_first_day(&self) -> RepositoryResult<Option<Decimal>> {
        let tables = self.tables.read().await;
        Ok(tables
            .payments
            .iter()
            .filter(|p| !p.is_on_first_day())
            .map(|p| p.amount)
            .max())
    }

    async fn find_employee_by_id(&self, emp_id: i64) -> RepositoryResult<Option<Employee>> {
        let tables = self.tables.read().await;
        Ok(tables.employees.iter().find(|e| e.emp_id == emp_id).cloned())
    }

    async fn find_department_by_id(&self, department_id: i64) -> RepositoryResult<Option<Department>> {
        let tables = self.tables.read().await;
        Ok(tables
            .departments
            .iter()
            .find(|d| d.department_id == department_id)
            .cloned())
    }

    async fn insert_departments(&self, departments: Vec<NewDepartment>) -> RepositoryResult<Vec<Department>> {
        let mut tables = self.tables.write().await;
        let mut inserted = Vec::with_capacity(departments.len());
        for department in departments {
            let row = Department {
                department_id: next_id(tables.departments.len()),
                department_name: department.department_name,
            };
            tables.departments.push(row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn insert_employees(&self, employees: Vec<NewEmployee>) -> RepositoryResult<Vec<Employee>> {
        let mut tables = self.tables.write().await;
        let mut inserted = Vec::with_capacity(employees.len());
        for employee in employees {
            let row = Employee {
                emp_id: next_id(tables.employees.len()),
                first_name: employee.first_name,
                last_name: employee.last_name,
                dob: employee.dob,
                gender: employee.gender,
                department: employee.department,
            };
            tables.employees.push(row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }

    async fn insert_payments(&self, payments: Vec<NewPayment>) -> RepositoryResult<Vec<Payment>> {
        let mut tables = self.tables.write().await;
        let mut inserted = Vec::with_capacity(payments.len());
        for payment in payments {
            let row = Payment {
                payment_id: next_id(tables.payments.len()),
                emp_id: payment.emp_id,
                amount: payment.amount,
                payment_time: payment.payment_time,
            };
            tables.payments.push(row.clone());
            inserted.push(row);
        }
        Ok(inserted)
    }
}
