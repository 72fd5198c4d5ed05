use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use sqlx::PgPool;

use super::{RepositoryResult, SalaryRepository};
use crate::models::department::{Department, NewDepartment};
use crate::models::employee::{Employee, NewEmployee};
use crate::models::payment::{NewPayment, Payment};

const NOT_FIRST_DAY: &str = "EXTRACT(DAY FROM payment_time) <> 1";

/// PostgreSQL implementation of `SalaryRepository`
#[derive(Clone)]
pub struct PgSalaryRepository {
    pool: PgPool,
}

impl PgSalaryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SalaryRepository for PgSalaryRepository {
    async fn find_highest_payment_not_on_first_day(&self) -> RepositoryResult<Option<Payment>> {
        let sql = format!(
            "SELECT payment_id, emp_id, amount, payment_time FROM payments WHERE {} ORDER BY amount DESC, payment_id ASC LIMIT 1",
            NOT_FIRST_DAY
        );
        let payment = sqlx::query_as::<_, Payment>(&sql)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payment)
    }

    async fn find_payments_not_on_first_day(&self) -> RepositoryResult<Vec<Payment>> {
        let sql = format!(
            "SELECT payment_id, emp_id, amount, payment_time FROM payments WHERE {} ORDER BY amount DESC, payment_id ASC",
            NOT_FIRST_DAY
        );
        let payments = sqlx::query_as::<_, Payment>(&sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(payments)
    }

    async fn find_max_amount_not_on_first_day(&self) -> RepositoryResult<Option<Decimal>> {
        let sql = format!("SELECT MAX(amount) FROM payments WHERE {}", NOT_FIRST_DAY);
        let max_amount = sqlx::query_scalar::<_, Option<Decimal>>(&sql)
            .fetch_one(&self.pool)
            .await?;
        Ok(max_amount)
    }

    async fn find_employee_by_id(&self, emp_id: i64) -> RepositoryResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            "SELECT emp_id, first_name, last_name, dob, gender, department FROM employees WHERE emp_id = $1",
        )
        .bind(emp_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(employee)
    }

    async fn find_department_by_id(&self, department_id: i64) -> RepositoryResult<Option<Department>> {
        let department = sqlx::query_as::<_, Department>(
            "SELECT department_id, department_name FROM departments WHERE department_id = $1",
        )
        .bind(department_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(department)
    }

    async fn insert_departments(&self, departments: Vec<NewDepartment>) -> RepositoryResult<Vec<Department>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(departments.len());

        for department in departments {
            let row = sqlx::query_as::<_, Department>(
                "INSERT INTO departments (department_name) VALUES ($1) RETURNING department_id, department_name",
            )
            .bind(&department.department_name)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(row);
        }

        tx.commit().await?;
        debug!("Inserted {} departments", inserted.len());
        Ok(inserted)
    }

    async fn insert_employees(&self, employees: Vec<NewEmployee>) -> RepositoryResult<Vec<Employee>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(employees.len());

        for employee in employees {
            let row = sqlx::query_as::<_, Employee>(
                "INSERT INTO employees (first_name, last_name, dob, gender, department) VALUES ($1, $2, $3, $4, $5) \
                 RETURNING emp_id, first_name, last_name, dob, gender, department",
            )
            .bind(&employee.first_name)
            .bind(&employee.last_name)
            .bind(employee.dob)
            .bind(&employee.gender)
            .bind(employee.department)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(row);
        }

        tx.commit().await?;
        debug!("Inserted {} employees", inserted.len());
        Ok(inserted)
    }

    async fn insert_payments(&self, payments: Vec<NewPayment>) -> RepositoryResult<Vec<Payment>> {
        let mut tx = self.pool.begin().await?;
        let mut inserted = Vec::with_capacity(payments.len());

        for payment in payments {
            let row = sqlx::query_as::<_, Payment>(
                "INSERT INTO payments (emp_id, amount, payment_time) VALUES ($1, $2, $3) \
                 RETURNING payment_id, emp_id, amount, payment_time",
            )
            .bind(payment.emp_id)
            .bind(payment.amount)
            .bind(payment.payment_time)
            .fetch_one(&mut *tx)
            .await?;
            inserted.push(row);
        }

        tx.commit().await?;
        debug!("Inserted {} payments", inserted.len());
        Ok(inserted)
    }
}
