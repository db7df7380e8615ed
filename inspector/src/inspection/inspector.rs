use crate::inspection::dispatcher::Dispatcher;
use crate::inspection::media_codec::MediaCodec;
use crate::inspection::renderer::{RenderStyle, Renderer};
use crate::inspection::utils::inspection_report::InspectionReport;
use crate::inspection::utils::palette::Palette;
use crate::utils::config::Config;
use crate::utils::logging::*;
use ab_glyph::FontArc;
use tokio::task::spawn_blocking;
use uuid::Uuid;

/// One upload through decode, dispatch, render and advice lookup.
pub struct Inspector {
    config: Config,
    font: Option<FontArc>,
}

impl Inspector {
    pub fn new(config: Config, font: Option<FontArc>) -> Self {
        Self {
            config,
            font,
        }
    }

    pub async fn from_current() -> Self {
        Self::new(Config::now().await, Renderer::font().await)
    }

    pub async fn inspect(&self, request_id: Uuid, upload: Vec<u8>, palette: Palette) -> Result<InspectionReport, InspectionEntry> {
        logging_information!(request_id, InspectionEntry::RequestAccepted, format!("Palette: {palette:?}, Size: {} bytes", upload.len()));
        let quality = self.config.jpeg_quality;
        let (image, jpeg) = spawn_blocking(move || {
            let image = MediaCodec::decode(&upload)?;
            let jpeg = MediaCodec::encode_jpeg(&image, quality)?;
            Ok::<_, InspectionEntry>((image, jpeg))
        }).await.map_err(InspectionEntry::TaskPanickedError)??;
        let dispatcher = Dispatcher::new(self.config.endpoint_url());
        logging_debug!(request_id, "Dispatching image", format!("Url: {}, Size: {} bytes", dispatcher.url(), jpeg.len()));
        let annotations = dispatcher.annotate(jpeg).await?;
        let annotation_count = annotations.len();
        let renderer = Renderer::new(RenderStyle::from(&self.config), self.font.clone());
        let (image_url, class_ids) = spawn_blocking(move || {
            let (image, class_ids) = renderer.render(image, &annotations, palette);
            MediaCodec::encode_png_data_url(&image).map(|image_url| (image_url, class_ids))
        }).await.map_err(InspectionEntry::TaskPanickedError)??;
        logging_information!(request_id, InspectionEntry::InspectionComplete(annotation_count), format!("Classes: {class_ids:?}"));
        Ok(InspectionReport::new(image_url, &class_ids))
    }
}
