pub mod login;    // POST /api/auth/login - authenticate and get JWT
pub mod register; // POST /api/register - create new account

pub use login::login_post;
pub use register::register_post;
