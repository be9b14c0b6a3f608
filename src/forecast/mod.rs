pub mod consolidator;
pub mod error;
pub mod generator;
pub mod selector;
