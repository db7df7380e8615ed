use crate::inspection::utils::defect_class::DefectClass;
use crate::inspection::utils::recommendation::Recommendation;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct InspectionReport {
    pub image: String,
    pub classes: Vec<String>,
    pub recommendations: Vec<Recommendation>,
    pub message: String,
}

impl InspectionReport {
    pub fn new(image: String, class_ids: &[i64]) -> Self {
        let classes: Vec<String> = class_ids.iter().map(|class_id| DefectClass::label_of(*class_id)).collect();
        let message = if classes.is_empty() {
            "Дефекты отсутствуют".to_string()
        } else {
            format!("Дефекты на изображении: {}", classes.join(", "))
        };
        Self {
            image,
            classes,
            recommendations: Recommendation::lookup(class_ids),
            message,
        }
    }
}
