use actix_web::{web, HttpResponse};
use chrono::Local;
use log::{info, warn};

use crate::errors::AppError;
use crate::services::salary::SalaryAnalysisService;

pub async fn get_highest_salary_not_on_first_day(
    service: web::Data<SalaryAnalysisService>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Request received for highest salary not on first day");

    let today = Local::now().date_naive();
    let result = service
        .find_highest_salary_not_on_first_day(today)
        .await
        .map_err(AppError::from)?;

    match result {
        Some(result) => {
            info!("Successfully retrieved salary analysis result: {:?}", result);
            Ok(HttpResponse::Ok().json(result))
        }
        None => {
            warn!("No salary analysis result found");
            Err(AppError::NotFound("No salary analysis result found".to_string()).into())
        }
    }
}

pub async fn get_sql_query(
    service: web::Data<SalaryAnalysisService>,
) -> HttpResponse {
    info!("Request received for SQL query");
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(service.sql_query())
}

pub async fn get_payments_not_on_first_day(
    service: web::Data<SalaryAnalysisService>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Request received for payments not on first day");

    let payments = service
        .payments_not_on_first_day()
        .await
        .map_err(AppError::from)?;

    info!("Successfully retrieved {} payments not on first day", payments.len());
    Ok(HttpResponse::Ok().json(payments))
}

pub async fn get_max_amount_not_on_first_day(
    service: web::Data<SalaryAnalysisService>,
) -> Result<HttpResponse, actix_web::Error> {
    info!("Request received for max amount not on first day");

    let max_amount = service
        .max_amount_not_on_first_day()
        .await
        .map_err(AppError::from)?
        .ok_or_else(|| AppError::NotFound("No payments found outside the 1st day of a month".to_string()))?;

    info!("Successfully retrieved max amount: {}", max_amount);
    Ok(HttpResponse::Ok().json(max_amount))
}

pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Salary Analysis Service is running")
}
