use serde::Serialize;
use std::fmt::{Display, Formatter};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum DefectClass {
    Adj,
    Int,
    Geo,
    Pro,
    Non,
}

impl DefectClass {
    /// Catalog order; the position is the class id the endpoint reports.
    pub const ALL: [DefectClass; 5] = [DefectClass::Adj, DefectClass::Int, DefectClass::Geo, DefectClass::Pro, DefectClass::Non];

    pub fn from_id(class_id: i64) -> Option<Self> {
        usize::try_from(class_id).ok().and_then(|index| Self::ALL.get(index).copied())
    }

    pub fn id(&self) -> usize {
        match self {
            DefectClass::Adj => 0,
            DefectClass::Int => 1,
            DefectClass::Geo => 2,
            DefectClass::Pro => 3,
            DefectClass::Non => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DefectClass::Adj => "adj",
            DefectClass::Int => "int",
            DefectClass::Geo => "geo",
            DefectClass::Pro => "pro",
            DefectClass::Non => "non",
        }
    }

    /// Label of a known class, or the raw id for anything outside the catalog.
    pub fn label_of(class_id: i64) -> String {
        match Self::from_id(class_id) {
            Some(defect_class) => defect_class.label().to_string(),
            None => class_id.to_string(),
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            DefectClass::Adj => "Используйте правильные параметры сварки. Поддерживайте чистоту сварочной поверхности. Проверьте качество сварочных материалов. Применяйте антипригарные спреи или пасты. Следите за стабильностью дуги и избегайте слишком длинной дуги.",
            DefectClass::Int => "Завершайте сварку с заполнением кратера. Очистите поверхность от шлака после каждого прохода. Улучшите подготовку краев. Избегайте влажности в сварочных материалах. Уменьшите ток или скорость подачи проволоки. Поддерживайте чистоту сварочных материалов.",
            DefectClass::Geo => "Уменьшите ток или скорость сварки. Улучшите подготовку краев. Увеличьте скорость сварки или уменьшите подачу материала. Проверьте параметры сварки для оптимального расплавления. Следите за балансом тепла и подачи материала. Проверьте настройки сварочного оборудования.",
            DefectClass::Pro => "Применяйте правильные методы резки и шлифовки. Используйте подходящие инструменты для удаления заусенцев. Следите за аккуратностью резки и формовки. Убедитесь в правильном использовании инструментов и их остроте. Следите за осторожным обращением с материалами и готовыми изделиями.",
            DefectClass::Non => "Улучшите подготовку краев и стыковку элементов. Применяйте методы заполнения и оптимальные параметры сварки. Используйте более качественные сварочные материалы. Проверьте настройки сварочного оборудования и параметры сварки. Убедитесь, что подготовка краев и очистка поверхности выполнены правильно.",
        }
    }
}

impl Display for DefectClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_follow_catalog_order() {
        for (index, defect_class) in DefectClass::ALL.iter().enumerate() {
            assert_eq!(defect_class.id(), index);
            assert_eq!(DefectClass::from_id(index as i64), Some(*defect_class));
        }
        let labels: Vec<&str> = DefectClass::ALL.iter().map(DefectClass::label).collect();
        assert_eq!(labels, ["adj", "int", "geo", "pro", "non"]);
    }

    #[test]
    fn out_of_range_ids_are_unknown() {
        assert_eq!(DefectClass::from_id(5), None);
        assert_eq!(DefectClass::from_id(-1), None);
        assert_eq!(DefectClass::label_of(7), "7");
        assert_eq!(DefectClass::label_of(2), "geo");
    }

    #[test]
    fn every_class_has_advice() {
        assert!(DefectClass::ALL.iter().all(|defect_class| !defect_class.recommendation().is_empty()));
    }
}
