pub mod common;
pub mod elementary;
