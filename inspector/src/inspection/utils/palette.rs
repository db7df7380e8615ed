use crate::inspection::utils::defect_class::DefectClass;
use image::Rgb;
use std::str::FromStr;

const UNKNOWN_CLASS_COLOR: [u8; 3] = [128, 128, 128];

/// Color table selected by the page tab; the drawing logic is the same for both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    #[default]
    Yolo,
    Rtdetr,
}

impl Palette {
    fn table(&self) -> [[u8; 3]; 5] {
        match self {
            Palette::Yolo => [[255, 0, 255], [255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 0]],
            Palette::Rtdetr => [[255, 0, 0], [0, 255, 0], [0, 0, 255], [255, 255, 0], [255, 0, 255]],
        }
    }

    pub fn color(&self, class_id: i64) -> Rgb<u8> {
        match DefectClass::from_id(class_id) {
            Some(defect_class) => Rgb(self.table()[defect_class.id()]),
            None => Rgb(UNKNOWN_CLASS_COLOR),
        }
    }
}

impl FromStr for Palette {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "yolo" | "yolov10" => Ok(Palette::Yolo),
            "rtdetr" => Ok(Palette::Rtdetr),
            other => Err(other.to_string()),
        }
    }
}
