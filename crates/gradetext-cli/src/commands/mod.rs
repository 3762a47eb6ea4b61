pub mod detail;
pub mod quiz;
pub mod score;
pub mod validate;
