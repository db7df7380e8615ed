use crate::utils::logging::*;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::{ImageFormat, RgbImage};
use std::io::Cursor;

pub struct MediaCodec;

impl MediaCodec {
    /// Accepts any format the image crate can sniff; alpha is discarded.
    pub fn decode(bytes: &[u8]) -> Result<RgbImage, InspectionEntry> {
        image::load_from_memory(bytes)
            .map(|image| image.to_rgb8())
            .map_err(InspectionEntry::DecodeImageError)
    }

    pub fn encode_jpeg(image: &RgbImage, quality: u8) -> Result<Vec<u8>, InspectionEntry> {
        let mut buffer = Vec::new();
        JpegEncoder::new_with_quality(&mut buffer, quality)
            .encode_image(image)
            .map_err(InspectionEntry::EncodeImageError)?;
        Ok(buffer)
    }

    pub fn encode_png_data_url(image: &RgbImage) -> Result<String, InspectionEntry> {
        let mut buffer = Cursor::new(Vec::new());
        image.write_to(&mut buffer, ImageFormat::Png).map_err(InspectionEntry::EncodeImageError)?;
        Ok(format!("data:image/png;base64,{}", BASE64.encode(buffer.into_inner())))
    }
}
