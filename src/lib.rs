#![forbid(unsafe_code)]

pub mod export;
pub mod generate;
pub mod model;
