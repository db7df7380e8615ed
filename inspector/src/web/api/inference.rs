use crate::inspection::inspector::Inspector;
use crate::inspection::utils::palette::Palette;
use crate::utils::logging::*;
use crate::web::utils::response::Message;
use actix_multipart::{Field, Multipart};
use actix_web::{get, post, web, HttpResponse, Responder, Scope};
use common::utils::static_files::StaticFiles;
use futures::TryStreamExt;
use sanitize_filename::sanitize;
use std::path::Path;
use std::str::FromStr;
use uuid::Uuid;

const NO_IMAGE_MESSAGE: &str = "Пожалуйста, загрузите изображение.";
const ENDPOINT_ERROR_MESSAGE: &str = "Ошибка при получении аннотаций от API.";

pub fn initialize() -> Scope {
    web::scope("/inference")
        .service(page)
        .service(detect)
}

#[get("")]
async fn page() -> impl Responder {
    match StaticFiles::get("html/inference.html") {
        Some(file) => HttpResponse::Ok().content_type("text/html").body(file.data.into_owned()),
        None => HttpResponse::NotFound().body("Not Found"),
    }
}

// An app-level `Inspector` pins the config; without one every request reads the live config.
#[post("/detect")]
async fn detect(payload: Multipart, pinned: Option<web::Data<Inspector>>) -> impl Responder {
    let request_id = Uuid::new_v4();
    let (image, palette) = match read_upload(payload).await {
        Ok(upload) => upload,
        Err(entry) => return reject(request_id, entry).await,
    };
    let result = match pinned {
        Some(inspector) => inspector.inspect(request_id, image, palette).await,
        None => Inspector::from_current().await.inspect(request_id, image, palette).await,
    };
    match result {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(entry) => reject(request_id, entry).await,
    }
}

async fn read_upload(mut payload: Multipart) -> Result<(Vec<u8>, Palette), InspectionEntry> {
    let mut palette = Palette::default();
    let mut image = None;
    while let Some(mut field) = payload.try_next().await.map_err(|_| InspectionEntry::InvalidPayload)? {
        let content_disposition = field.content_disposition().ok_or(InspectionEntry::InvalidPayload)?;
        let field_name = content_disposition.get_name().map(str::to_string);
        let file_name = content_disposition.get_filename().map(sanitize);
        match field_name.as_deref() {
            Some("palette") => {
                let value = read_field(&mut field).await?;
                palette = Palette::from_str(&String::from_utf8_lossy(&value)).map_err(InspectionEntry::UnknownPalette)?;
            }
            Some("image") => {
                let data = read_field(&mut field).await?;
                let file_name = file_name.unwrap_or_default();
                // Browsers send an empty part when nothing was chosen.
                if file_name.is_empty() || data.is_empty() {
                    continue;
                }
                validate_extension(&file_name)?;
                image = Some(data);
            }
            _ => {
                read_field(&mut field).await?;
            }
        }
    }
    image.map(|image| (image, palette)).ok_or(InspectionEntry::NoImageUploaded)
}

async fn read_field(field: &mut Field) -> Result<Vec<u8>, InspectionEntry> {
    let mut data = Vec::new();
    while let Some(chunk) = field.try_next().await.map_err(|_| InspectionEntry::InvalidPayload)? {
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

fn validate_extension(file_name: &str) -> Result<(), InspectionEntry> {
    let extension = Path::new(file_name).extension()
        .and_then(|os_str| os_str.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();
    match extension.as_str() {
        "jpg" | "jpeg" | "png" => Ok(()),
        _ => Err(InspectionEntry::UnsupportedExtension(extension)),
    }
}

async fn reject(request_id: Uuid, entry: InspectionEntry) -> HttpResponse {
    let response = match &entry {
        InspectionEntry::NoImageUploaded => HttpResponse::BadRequest().json(Message::new(NO_IMAGE_MESSAGE)),
        InspectionEntry::InvalidPayload | InspectionEntry::UnknownPalette(_) => {
            HttpResponse::BadRequest().json(Message::new("Некорректный запрос."))
        }
        InspectionEntry::UnsupportedExtension(_) => {
            HttpResponse::BadRequest().json(Message::new("Поддерживаются только изображения JPG, JPEG и PNG."))
        }
        InspectionEntry::DecodeImageError(_) => {
            HttpResponse::BadRequest().json(Message::new("Не удалось прочитать изображение."))
        }
        InspectionEntry::EndpointRequestError(_) | InspectionEntry::EndpointStatusError(_) => {
            HttpResponse::BadGateway().json(Message::new(ENDPOINT_ERROR_MESSAGE))
        }
        _ => HttpResponse::InternalServerError().finish(),
    };
    logging_error!(request_id, entry, format!("Status: {}", response.status()));
    response
}
