use crate::inspection::utils::defect_class::DefectClass;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Recommendation {
    pub class: DefectClass,
    pub text: &'static str,
}

impl Recommendation {
    /// Advice for each observed class, in the given order. Ids outside the catalog are dropped.
    pub fn lookup(class_ids: &[i64]) -> Vec<Recommendation> {
        class_ids.iter()
            .filter_map(|class_id| DefectClass::from_id(*class_id))
            .map(|class| Recommendation { class, text: class.recommendation() })
            .collect()
    }
}
