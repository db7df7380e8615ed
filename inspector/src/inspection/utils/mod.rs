pub mod annotation;
pub mod defect_class;
pub mod inspection_report;
pub mod palette;
pub mod recommendation;
