pub mod error;
pub mod features;
pub mod loader;
