// handlers/mod.rs - Pages and endpoints behind (and beside) the gate
//
// Gated:    /login, /dashboard, fallback
// Excluded: /api/health

pub mod health;
pub mod pages;

pub use health::health;
pub use pages::{dashboard, fallback, login_page};
