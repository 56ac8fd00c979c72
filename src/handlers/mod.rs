// Two security tiers:
// Public (no auth) → Protected (JWT auth, user reloaded per request)
pub mod public;
pub mod protected;
