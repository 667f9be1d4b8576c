use actix_web::{get, web, HttpResponse, Responder};

use crate::model::directory::Directory;

/// People endpoint -- always answers with the full directory, no query parameters or body
#[get("/api/people")]
async fn list_people(directory: web::Data<Directory>) -> impl Responder {
    HttpResponse::Ok().json(directory.people())
}

/// Registers the only route the API exposes. Everything else falls through to actix's default
/// service (404).
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(list_people);
}
