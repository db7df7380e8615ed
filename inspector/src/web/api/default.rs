use actix_web::{HttpRequest, HttpResponse, Responder};
use common::utils::static_files::StaticFiles;
use mime_guess::from_path;

const INDEX_PAGE: &str = "html/inference.html";

pub async fn default_route(req: HttpRequest) -> impl Responder {
    let request_path = req.path().trim_start_matches('/');
    let file_path = if request_path.is_empty() { INDEX_PAGE } else { request_path };
    match StaticFiles::get(file_path) {
        Some(content) => {
            let mime_type = from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime_type.as_ref())
                .body(content.data.into_owned())
        }
        None => {
            match StaticFiles::get(INDEX_PAGE) {
                Some(index) => HttpResponse::Ok()
                    .content_type("text/html")
                    .body(index.data.into_owned()),
                None => HttpResponse::NotFound().body("404 Not Found"),
            }
        }
    }
}
