use actix_web::HttpResponse;

pub async fn home() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("FinServ API is running!")
}

pub async fn info() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(
            "FinServ API Information:\n\
             - Salary Analysis API: /api/salary/\n\
             - Health: /api/salary/health\n",
        )
}

pub async fn test() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Application is working correctly!")
}
