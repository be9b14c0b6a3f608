pub mod observation;
pub mod record;
pub mod request;
pub mod window;
