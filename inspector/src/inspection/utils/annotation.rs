use serde::{Deserialize, Deserializer, Serialize};

/// A single detected defect as returned by the annotation endpoint.
///
/// Coordinates are fractions of the image size and describe the box center
/// plus its full width and height.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Annotation {
    #[serde(deserialize_with = "deserialize_class_id")]
    pub class_id: i64,
    pub rel_x: f64,
    pub rel_y: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub xmin: i32,
    pub ymin: i32,
    pub xmax: i32,
    pub ymax: i32,
}

impl Annotation {
    /// Corners are truncated toward zero and never clamped to the image.
    pub fn to_pixel_rect(&self, image_width: u32, image_height: u32) -> PixelRect {
        let image_width = image_width as f64;
        let image_height = image_height as f64;
        PixelRect {
            xmin: ((self.rel_x - self.width / 2.0) * image_width) as i32,
            xmax: ((self.rel_x + self.width / 2.0) * image_width) as i32,
            ymin: ((self.rel_y - self.height / 2.0) * image_height) as i32,
            ymax: ((self.rel_y + self.height / 2.0) * image_height) as i32,
        }
    }
}

impl PixelRect {
    pub fn width(&self) -> u32 {
        (self.xmax as i64 - self.xmin as i64).max(1) as u32
    }

    pub fn height(&self) -> u32 {
        (self.ymax as i64 - self.ymin as i64).max(1) as u32
    }
}

// The endpoint is free to send class ids as floats.
fn deserialize_class_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let value = f64::deserialize(deserializer)?;
    Ok(value as i64)
}
