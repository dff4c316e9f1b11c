use actix_web::{get, web, HttpResponse};

#[get("/healthz")]
#[instrument]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().body("OK")
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check);
}
