pub mod artifact;
pub mod error;
pub mod regressor;
pub mod trainer;
