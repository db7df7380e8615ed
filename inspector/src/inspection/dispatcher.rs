use crate::inspection::utils::annotation::Annotation;
use crate::utils::logging::*;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, StatusCode};

/// Forwards one JPEG to the annotation endpoint. No retry and no custom timeout.
pub struct Dispatcher {
    client: Client,
    url: String,
}

impl Dispatcher {
    pub fn new<T: Into<String>>(url: T) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub async fn annotate(&self, jpeg: Vec<u8>) -> Result<Vec<Annotation>, InspectionEntry> {
        let response = self.client.post(&self.url)
            .header(CONTENT_TYPE, "image/jpeg")
            .body(jpeg)
            .send()
            .await
            .map_err(InspectionEntry::EndpointRequestError)?;
        if response.status() != StatusCode::OK {
            return Err(InspectionEntry::EndpointStatusError(response.status().as_u16()));
        }
        let body = response.bytes().await.map_err(InspectionEntry::EndpointRequestError)?;
        serde_json::from_slice(&body).map_err(InspectionEntry::AnnotationParseError)
    }
}
