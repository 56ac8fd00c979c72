// Public handlers: token acquisition, registration, service info and health.
pub mod auth;
pub mod system;

pub use system::{health, root};
