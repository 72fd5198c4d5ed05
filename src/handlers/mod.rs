use actix_cors::Cors;
use actix_web::web;

pub mod home;
pub mod salary;

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home::home)))
        .service(web::resource("/test").route(web::get().to(home::test)))
        .service(web::resource("/info").route(web::get().to(home::info)))
        .service(
            web::scope("/api/salary")
                .wrap(Cors::permissive())
                .service(
                    web::resource("/highest-not-first-day")
                        .route(web::get().to(salary::get_highest_salary_not_on_first_day)),
                )
                .service(
                    web::resource("/sql-query")
                        .route(web::get().to(salary::get_sql_query)),
                )
                .service(
                    web::resource("/payments-not-first-day")
                        .route(web::get().to(salary::get_payments_not_on_first_day)),
                )
                .service(
                    web::resource("/max-amount-not-first-day")
                        .route(web::get().to(salary::get_max_amount_not_on_first_day)),
                )
                .service(
                    web::resource("/health")
                        .route(web::get().to(salary::health)),
                ),
        );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::InMemorySalaryRepository;
    use crate::services::salary::SalaryAnalysisService;
    use actix_web::http::header;
    use actix_web::{test, App};
    use std::sync::Arc;

    fn salary_service() -> web::Data<SalaryAnalysisService> {
        web::Data::new(SalaryAnalysisService::new(Arc::new(InMemorySalaryRepository::new())))
    }

    #[actix_web::test]
    async fn test_salary_api_allows_any_origin() {
        let app = test::init_service(App::new().app_data(salary_service()).configure(routes)).await;

        let req = test::TestRequest::get()
            .uri("/api/salary/health")
            .insert_header((header::ORIGIN, "http://dashboard.example.com"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        let allowed = resp
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|value| value.to_str().ok());
        assert!(
            matches!(allowed, Some("http://dashboard.example.com") | Some("*")),
            "unexpected allow-origin header: {:?}",
            allowed
        );
    }

    #[actix_web::test]
    async fn test_preflight_is_answered() {
        let app = test::init_service(App::new().app_data(salary_service()).configure(routes)).await;

        let req = test::TestRequest::default()
            .method(actix_web::http::Method::OPTIONS)
            .uri("/api/salary/max-amount-not-first-day")
            .insert_header((header::ORIGIN, "http://dashboard.example.com"))
            .insert_header((header::ACCESS_CONTROL_REQUEST_METHOD, "GET"))
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());
        assert!(resp.headers().contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[actix_web::test]
    async fn test_plain_text_status_routes() {
        let app = test::init_service(App::new().app_data(salary_service()).configure(routes)).await;

        let req = test::TestRequest::get().uri("/test").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "Application is working correctly!");

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        assert_eq!(body, "FinServ API is running!");
    }
}
