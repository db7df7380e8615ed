pub mod inspection;
pub mod utils;
pub mod web;
