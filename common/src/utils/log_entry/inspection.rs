use image::ImageError;
use reqwest::Error as ReqwestError;
use serde_json::error::Error as SerdeJsonError;
use thiserror::Error;
use tokio::task::JoinError;

#[derive(Error, Debug)]
pub enum InspectionEntry {
    #[error("Request accepted")]
    RequestAccepted,
    #[error("Inspection completed with {0} annotation(s)")]
    InspectionComplete(usize),
    #[error("No image uploaded")]
    NoImageUploaded,
    #[error("Invalid multipart payload")]
    InvalidPayload,
    #[error("Unsupported image extension: {0}")]
    UnsupportedExtension(String),
    #[error("Unknown palette: {0}")]
    UnknownPalette(String),
    #[error("Failed to decode uploaded image: {0}")]
    DecodeImageError(ImageError),
    #[error("Failed to encode image: {0}")]
    EncodeImageError(ImageError),
    #[error("Failed to reach annotation endpoint: {0}")]
    EndpointRequestError(ReqwestError),
    #[error("Annotation endpoint answered with status {0}")]
    EndpointStatusError(u16),
    #[error("Failed to parse annotations: {0}")]
    AnnotationParseError(SerdeJsonError),
    #[error("Task panic while execution: {0}")]
    TaskPanickedError(JoinError),
}

impl From<InspectionEntry> for String {
    #[inline(always)]
    fn from(value: InspectionEntry) -> Self {
        value.to_string()
    }
}
