pub mod dto;
pub mod openapi;

pub use openapi::ApiDoc;
