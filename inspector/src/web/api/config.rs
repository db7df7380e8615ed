use crate::inspection::renderer::Renderer;
use crate::utils::config::Config;
use crate::utils::logging::*;
use actix_web::{get, post, web, HttpResponse, Responder, Scope};

pub fn initialize() -> Scope {
    web::scope("/config")
        .service(get_config)
        .service(update_config)
}

#[get("/get")]
async fn get_config() -> impl Responder {
    web::Json(Config::now().await)
}

#[post("/update")]
async fn update_config(config: web::Json<Config>) -> impl Responder {
    let config = config.into_inner();
    if Config::validate(&config) {
        let font_changed = Config::now().await.font_path != config.font_path;
        let request_log_capacity = config.request_log_capacity;
        Config::update(config).await;
        Logger::set_request_log_capacity(request_log_capacity).await;
        logging_information!(SystemEntry::ConfigUpdated);
        if font_changed {
            Renderer::initialize().await;
        }
        HttpResponse::Ok().finish()
    } else {
        HttpResponse::BadRequest().body("Invalid configuration.")
    }
}
