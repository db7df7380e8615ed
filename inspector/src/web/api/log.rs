use crate::utils::logging::Logger;
use actix_web::{get, web, HttpResponse, Responder, Scope};
use chrono::{DateTime, Local, NaiveDateTime, TimeZone};
use uuid::Uuid;

pub fn initialize() -> Scope {
    web::scope("/log")
        .service(system_log)
        .service(system_log_since)
        .service(request_log)
        .service(request_log_since)
}

#[get("/system_log")]
async fn system_log() -> impl Responder {
    let logs = Logger::get_system_logs().await;
    HttpResponse::Ok().body(Logger::format_logs(&logs))
}

#[get("/system_log/since/{since}")]
async fn system_log_since(since: web::Path<String>) -> impl Responder {
    match parse_datetime(&since.into_inner()) {
        Some(since_time) => {
            let logs = Logger::get_system_logs_since(since_time).await;
            HttpResponse::Ok().body(Logger::format_logs(&logs))
        }
        None => HttpResponse::BadRequest().body("Invalid datetime format."),
    }
}

#[get("/{request_id}")]
async fn request_log(request_id: web::Path<Uuid>) -> impl Responder {
    match Logger::get_request_logs(request_id.into_inner()).await {
        Some(logs) => HttpResponse::Ok().body(Logger::format_logs(&logs)),
        None => HttpResponse::BadRequest().body("Request not found."),
    }
}

#[get("/{request_id}/since/{since}")]
async fn request_log_since(argument: web::Path<(Uuid, String)>) -> impl Responder {
    let (request_id, since) = argument.into_inner();
    let Some(since_time) = parse_datetime(&since) else {
        return HttpResponse::BadRequest().body("Invalid datetime format.");
    };
    match Logger::get_request_logs_since(request_id, since_time).await {
        Some(logs) => HttpResponse::Ok().body(Logger::format_logs(&logs)),
        None => HttpResponse::BadRequest().body("Request not found."),
    }
}

fn parse_datetime(datetime: &str) -> Option<DateTime<Local>> {
    let naive_date_time = NaiveDateTime::parse_from_str(datetime, "%Y-%m-%d-%H-%M-%S").ok()?;
    Local.from_local_datetime(&naive_date_time).single()
}
