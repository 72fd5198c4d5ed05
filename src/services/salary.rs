use std::sync::Arc;

use chrono::NaiveDate;
use log::{error, info, warn};
use rust_decimal::Decimal;

use crate::models::payment::Payment;
use crate::models::salary::SalaryAnalysisResult;
use crate::repository::{RepositoryResult, SalaryRepository};
use crate::utils::age::age_on;

/// Problem B: highest salary not credited on the 1st day of any month.
pub const HIGHEST_SALARY_SQL: &str = "SELECT
    p.AMOUNT AS SALARY,
    CONCAT(e.FIRST_NAME, ' ', e.LAST_NAME) AS NAME,
    TIMESTAMPDIFF(YEAR, e.DOB, CURDATE()) AS AGE,
    d.DEPARTMENT_NAME
FROM payments p
JOIN employees e ON p.EMP_ID = e.EMP_ID
JOIN departments d ON e.DEPARTMENT = d.DEPARTMENT_ID
WHERE DAY(p.PAYMENT_TIME) != 1
ORDER BY p.AMOUNT DESC
LIMIT 1;
";

pub struct SalaryAnalysisService {
    repository: Arc<dyn SalaryRepository>,
}

impl SalaryAnalysisService {
    pub fn new(repository: Arc<dyn SalaryRepository>) -> Self {
        Self { repository }
    }

    /// `Ok(None)` when no payment qualifies or its employee/department
    /// cannot be resolved.
    pub async fn find_highest_salary_not_on_first_day(
        &self,
        today: NaiveDate,
    ) -> RepositoryResult<Option<SalaryAnalysisResult>> {
        info!("Finding highest salary not credited on 1st day of month");

        let payment = match self.repository.find_highest_payment_not_on_first_day().await? {
            Some(payment) => payment,
            None => {
                warn!("No payments found that are not on the 1st day of month");
                return Ok(None);
            }
        };
        info!(
            "Found highest payment: id={}, amount={}, time={}",
            payment.payment_id, payment.amount, payment.payment_time
        );

        let employee = match self.repository.find_employee_by_id(payment.emp_id).await? {
            Some(employee) => employee,
            None => {
                error!("Employee {} not found for payment {}", payment.emp_id, payment.payment_id);
                return Ok(None);
            }
        };

        let department = match self.repository.find_department_by_id(employee.department).await? {
            Some(department) => department,
            None => {
                error!("Department {} not found for employee {}", employee.department, employee.emp_id);
                return Ok(None);
            }
        };

        let result = SalaryAnalysisResult {
            salary: payment.amount,
            name: employee.full_name(),
            age: age_on(employee.dob, today),
            department_name: department.department_name,
        };
        info!("Salary analysis result: {:?}", result);
        Ok(Some(result))
    }

    pub fn sql_query(&self) -> &'static str {
        HIGHEST_SALARY_SQL
    }

    pub async fn payments_not_on_first_day(&self) -> RepositoryResult<Vec<Payment>> {
        self.repository.find_payments_not_on_first_day().await
    }

    pub async fn max_amount_not_on_first_day(&self) -> RepositoryResult<Option<Decimal>> {
        self.repository.find_max_amount_not_on_first_day().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::department::Department;
    use crate::models::employee::Employee;
    use crate::repository::{MockSalaryRepository, RepositoryError};
    use chrono::NaiveDateTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn payment() -> Payment {
        Payment {
            payment_id: 16,
            emp_id: 1,
            amount: Decimal::new(7499800, 2),
            payment_time: NaiveDateTime::parse_from_str("2025-03-02 09:27:26.162", "%Y-%m-%d %H:%M:%S%.3f").unwrap(),
        }
    }

    fn employee() -> Employee {
        Employee {
            emp_id: 1,
            first_name: "John".to_string(),
            last_name: "Williams".to_string(),
            dob: date(1980, 5, 15),
            gender: "Male".to_string(),
            department: 3,
        }
    }

    fn department() -> Department {
        Department {
            department_id: 3,
            department_name: "Engineering".to_string(),
        }
    }

    #[tokio::test]
    async fn test_find_highest_salary_success() {
        let mut mock_repo = MockSalaryRepository::new();
        mock_repo
            .expect_find_highest_payment_not_on_first_day()
            .times(1)
            .return_once(|| Ok(Some(payment())));
        mock_repo
            .expect_find_employee_by_id()
            .withf(|id| *id == 1)
            .times(1)
            .return_once(|_| Ok(Some(employee())));
        mock_repo
            .expect_find_department_by_id()
            .withf(|id| *id == 3)
            .times(1)
            .return_once(|_| Ok(Some(department())));

        let service = SalaryAnalysisService::new(Arc::new(mock_repo));
        let result = service
            .find_highest_salary_not_on_first_day(date(2025, 5, 14))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(result.salary, Decimal::new(7499800, 2));
        assert_eq!(result.name, "John Williams");
        assert_eq!(result.age, 44);
        assert_eq!(result.department_name, "Engineering");
    }

    #[tokio::test]
    async fn test_no_payment_found() {
        let mut mock_repo = MockSalaryRepository::new();
        mock_repo
            .expect_find_highest_payment_not_on_first_day()
            .times(1)
            .return_once(|| Ok(None));
        mock_repo.expect_find_employee_by_id().never();
        mock_repo.expect_find_department_by_id().never();

        let service = SalaryAnalysisService::new(Arc::new(mock_repo));
        let result = service.find_highest_salary_not_on_first_day(date(2025, 1, 1)).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_employee_not_found() {
        let mut mock_repo = MockSalaryRepository::new();
        mock_repo
            .expect_find_highest_payment_not_on_first_day()
            .return_once(|| Ok(Some(payment())));
        mock_repo
            .expect_find_employee_by_id()
            .times(1)
            .return_once(|_| Ok(None));
        mock_repo.expect_find_department_by_id().never();

        let service = SalaryAnalysisService::new(Arc::new(mock_repo));
        let result = service.find_highest_salary_not_on_first_day(date(2025, 1, 1)).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_department_not_found() {
        let mut mock_repo = MockSalaryRepository::new();
        mock_repo
            .expect_find_highest_payment_not_on_first_day()
            .return_once(|| Ok(Some(payment())));
        mock_repo
            .expect_find_employee_by_id()
            .return_once(|_| Ok(Some(employee())));
        mock_repo
            .expect_find_department_by_id()
            .times(1)
            .return_once(|_| Ok(None));

        let service = SalaryAnalysisService::new(Arc::new(mock_repo));
        let result = service.find_highest_salary_not_on_first_day(date(2025, 1, 1)).await;
        assert!(matches!(result, Ok(None)));
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let mut mock_repo = MockSalaryRepository::new();
        mock_repo
            .expect_find_highest_payment_not_on_first_day()
            .return_once(|| Err(RepositoryError::Unavailable("connection refused".to_string())));

        let service = SalaryAnalysisService::new(Arc::new(mock_repo));
        let result = service.find_highest_salary_not_on_first_day(date(2025, 1, 1)).await;
        assert!(matches!(result, Err(RepositoryError::Unavailable(_))));
    }

    #[test]
    fn test_sql_query_text() {
        let service = SalaryAnalysisService::new(Arc::new(MockSalaryRepository::new()));
        let sql = service.sql_query();
        assert!(sql.starts_with("SELECT\n"));
        assert!(sql.contains("\nFROM payments p\n"));
        assert!(sql.contains("\nJOIN employees e ON p.EMP_ID = e.EMP_ID\n"));
        assert!(sql.contains("\nJOIN departments d ON e.DEPARTMENT = d.DEPARTMENT_ID\n"));
        assert!(sql.contains("DAY(p.PAYMENT_TIME) != 1"));
        assert!(sql.contains("ORDER BY p.AMOUNT DESC"));
        assert!(sql.contains("LIMIT 1"));
    }

    #[tokio::test]
    async fn test_max_amount_passthrough() {
        let mut mock_repo = MockSalaryRepository::new();
        mock_repo
            .expect_find_max_amount_not_on_first_day()
            .times(1)
            .return_once(|| Ok(Some(Decimal::new(7499800, 2))));

        let service = SalaryAnalysisService::new(Arc::new(mock_repo));
        let max = service.max_amount_not_on_first_day().await.unwrap();
        assert_eq!(max, Some(Decimal::new(7499800, 2)));
    }
}
