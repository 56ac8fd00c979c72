pub mod whoami; // GET /api/auth/whoami - current user

pub use whoami::whoami_get;
