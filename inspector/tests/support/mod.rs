#![allow(dead_code)]

use actix_web::http::StatusCode;
use actix_web::http::header::CONTENT_TYPE;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use image::{ImageFormat, Rgb, RgbImage};
use inspector::utils::config::Config;
use std::io::Cursor;

pub const BOUNDARY: &str = "----inspector-test-boundary";

pub fn test_config(endpoint: &str) -> Config {
    Config {
        http_server_bind_port: 8080,
        bind_retry_duration: 1,
        endpoint: endpoint.to_string(),
        endpoint_path: "/api/test".to_string(),
        jpeg_quality: 90,
        font_path: "./no/such/font.ttf".to_string(),
        font_size: 16.0,
        border_width: 3,
        text_color: [255, 255, 255],
        request_log_capacity: 16,
    }
}

pub fn sample_png(width: u32, height: u32) -> Vec<u8> {
    let image = RgbImage::from_pixel(width, height, Rgb([90, 90, 90]));
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, ImageFormat::Png).unwrap();
    buffer.into_inner()
}

/// Local stand-in for the detection service. Answers `/api/test` with the given
/// status and body, or 415 when the request is not a JPEG upload.
pub fn spawn_endpoint(status: u16, body: &'static str) -> String {
    let server = HttpServer::new(move || {
        App::new().route("/api/test", web::post().to(move |request: HttpRequest, payload: web::Bytes| async move {
            let is_jpeg = request.headers().get(CONTENT_TYPE).map(|value| value == "image/jpeg").unwrap_or(false)
                && payload.starts_with(&[0xFF, 0xD8]);
            if !is_jpeg {
                return HttpResponse::UnsupportedMediaType().finish();
            }
            HttpResponse::build(StatusCode::from_u16(status).unwrap())
                .content_type("application/json")
                .body(body)
        }))
    })
    .workers(1)
    .disable_signals()
    .bind(("127.0.0.1", 0))
    .unwrap();
    let address = server.addrs()[0];
    actix_web::rt::spawn(server.run());
    format!("http://{address}")
}

pub fn multipart_body(palette: Option<&str>, file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    if let Some(palette) = palette {
        body.extend_from_slice(format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"palette\"\r\n\r\n{palette}\r\n").as_bytes());
    }
    if let Some((file_name, data)) = file {
        body.extend_from_slice(format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{file_name}\"\r\nContent-Type: application/octet-stream\r\n\r\n").as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}
