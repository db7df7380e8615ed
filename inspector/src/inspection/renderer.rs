use crate::inspection::utils::annotation::{Annotation, PixelRect};
use crate::inspection::utils::defect_class::DefectClass;
use crate::inspection::utils::palette::Palette;
use crate::utils::config::Config;
use crate::utils::logging::*;
use ab_glyph::{FontArc, PxScale};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut, text_size};
use imageproc::rect::Rect;
use lazy_static::lazy_static;
use tokio::fs;
use tokio::sync::RwLock;

lazy_static! {
    static ref FONT: RwLock<Option<FontArc>> = RwLock::new(None);
}

#[derive(Debug, Clone, Copy)]
pub struct RenderStyle {
    pub border_width: u32,
    pub font_size: f32,
    pub text_color: Rgb<u8>,
}

impl From<&Config> for RenderStyle {
    fn from(config: &Config) -> Self {
        Self {
            border_width: config.border_width,
            font_size: config.font_size,
            text_color: Rgb(config.text_color),
        }
    }
}

pub struct Renderer {
    style: RenderStyle,
    font: Option<FontArc>,
}

impl Renderer {
    pub fn new(style: RenderStyle, font: Option<FontArc>) -> Self {
        Self {
            style,
            font,
        }
    }

    /// Loads the label font named in the current config. Without it boxes are drawn unlabeled.
    pub async fn initialize() {
        let config = Config::now().await;
        match Self::load_font(&config.font_path).await {
            Ok(font) => {
                *FONT.write().await = Some(font);
                logging_information!(SystemEntry::FontLoaded(config.font_path));
            }
            Err(entry) => {
                *FONT.write().await = None;
                logging_warning!(SystemEntry::FontUnavailable, entry);
            }
        }
    }

    pub async fn font() -> Option<FontArc> {
        FONT.read().await.clone()
    }

    pub async fn load_font(font_path: &str) -> Result<FontArc, IOEntry> {
        let font_data = fs::read(font_path).await
            .map_err(|err| IOEntry::ReadFileError(font_path.to_string(), err))?;
        FontArc::try_from_vec(font_data).map_err(|_| IOEntry::InvalidFontError(font_path.to_string()))
    }

    /// Draws every annotation and returns the distinct class ids in first-seen order.
    pub fn render(&self, mut image: RgbImage, annotations: &[Annotation], palette: Palette) -> (RgbImage, Vec<i64>) {
        let (width, height) = image.dimensions();
        let mut class_ids = Vec::new();
        for annotation in annotations {
            if !class_ids.contains(&annotation.class_id) {
                class_ids.push(annotation.class_id);
            }
            let rect = annotation.to_pixel_rect(width, height);
            let color = palette.color(annotation.class_id);
            self.draw_bounding_box(&mut image, &rect, color);
            if let Some(font) = &self.font {
                let label = DefectClass::label_of(annotation.class_id);
                self.draw_label(&mut image, &rect, color, font, &label);
            }
        }
        (image, class_ids)
    }

    // The ring grows outward from the box edge, drawn as four strips clipped to the image.
    fn draw_bounding_box(&self, image: &mut RgbImage, rect: &PixelRect, color: Rgb<u8>) {
        if self.style.border_width == 0 {
            return;
        }
        let grow = self.style.border_width as i64 - 1;
        let left = rect.xmin as i64;
        let top = rect.ymin as i64;
        let right = left + rect.width() as i64 - 1;
        let bottom = top + rect.height() as i64 - 1;
        let (outer_left, outer_top, outer_right, outer_bottom) = (left - grow, top - grow, right + grow, bottom + grow);
        fill_clipped(image, (outer_left, outer_top), (outer_right, top), color);
        fill_clipped(image, (outer_left, bottom), (outer_right, outer_bottom), color);
        fill_clipped(image, (outer_left, outer_top), (left, outer_bottom), color);
        fill_clipped(image, (right, outer_top), (outer_right, outer_bottom), color);
    }

    // Filled tag sitting on the outer edge of the box border, text inset by the border width.
    fn draw_label(&self, image: &mut RgbImage, rect: &PixelRect, color: Rgb<u8>, font: &FontArc, label: &str) {
        let scale = PxScale::from(self.style.font_size);
        let (text_width, text_height) = text_size(scale, font, label);
        let padding = self.style.border_width as i64;
        let tag_width = text_width as i64 + 2 * padding;
        let tag_height = text_height as i64 + 2 * padding;
        let tag_left = rect.xmin as i64 - padding;
        let tag_top = rect.ymin as i64 - padding - tag_height;
        let tag_right = tag_left + tag_width.max(1) - 1;
        let tag_bottom = tag_top + tag_height.max(1) - 1;
        if !fill_clipped(image, (tag_left, tag_top), (tag_right, tag_bottom), color) {
            return;
        }
        // A visible tag keeps its origin within one tag size of the image, so it fits in i32.
        draw_text_mut(image, self.style.text_color, (tag_left + padding) as i32, (tag_top + padding) as i32, scale, font, label);
    }
}

/// Fills the inclusive rectangle between two corners, limited to the image. Returns false when nothing is visible.
fn fill_clipped(image: &mut RgbImage, (left, top): (i64, i64), (right, bottom): (i64, i64), color: Rgb<u8>) -> bool {
    let (width, height) = image.dimensions();
    let left = left.max(0);
    let top = top.max(0);
    let right = right.min(width as i64 - 1);
    let bottom = bottom.min(height as i64 - 1);
    if left > right || top > bottom {
        return false;
    }
    let visible = Rect::at(left as i32, top as i32).of_size((right - left + 1) as u32, (bottom - top + 1) as u32);
    draw_filled_rect_mut(image, visible, color);
    true
}
